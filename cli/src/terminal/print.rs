use crate::terminal::colors;
use colored::*;
use luhn_common::PRINT_TARGET;
use luhn_common::config::Config;
use tracing::info;

pub const TOTAL_WIDTH: usize = 64;
const KEY_WIDTH: usize = 12;

#[macro_export]
macro_rules! lprint {
    ($msg:expr) => {
        $crate::terminal::print::print($msg)
    };
}

pub fn print(msg: &str) {
    info!(target: PRINT_TARGET, raw_msg = msg);
}

/// Title line framed by rules, e.g. `────⟦ CHECK DIGIT ⟧────`.
///
/// Only shown at the default quiet level.
pub fn header(title: &str, cfg: &Config) {
    if cfg.quiet > 0 {
        return;
    }

    let framed: String = format!("⟦ {} ⟧", title.to_uppercase());
    let rule_len: usize = TOTAL_WIDTH.saturating_sub(framed.chars().count());
    let left: String = "─".repeat(rule_len / 2);
    let right: String = "─".repeat(rule_len - rule_len / 2);

    print(&format!(
        "{}{}{}",
        left.color(colors::SEPARATOR),
        framed.bright_green(),
        right.color(colors::SEPARATOR)
    ));
}

pub fn fat_separator() {
    let sep: ColoredString = "═".repeat(TOTAL_WIDTH).color(colors::SEPARATOR);
    print(&format!("{}", sep));
}

/// `> Key.........: value`, keys padded to a shared width.
pub fn aligned_line(key: &str, value: ColoredString) {
    let dots: String = ".".repeat((KEY_WIDTH + 1).saturating_sub(key.len()));
    let prefix: ColoredString = ">".color(colors::SEPARATOR);

    print(&format!(
        "{} {}{}{} {}",
        prefix,
        key.color(colors::PRIMARY),
        dots.color(colors::SEPARATOR),
        ":".color(colors::SEPARATOR),
        value
    ));
}

/// `[idx] value`, used for lists of generated numbers.
pub fn numbered_line(idx: usize, value: &str) {
    print(&format!(
        "{}{}{} {}",
        "[".color(colors::SEPARATOR),
        idx.to_string().color(colors::ACCENT),
        "]".color(colors::SEPARATOR),
        value.color(colors::TEXT_DEFAULT)
    ));
}

pub fn centerln(msg: &str) {
    let space = " ".repeat(TOTAL_WIDTH.saturating_sub(console::measure_text_width(msg)) / 2);
    print(&format!("{}{}", space, msg));
}
