use colored::*;
use luhn_common::{DigitString, config::Config, success};
use luhn_core::luhn;

use crate::lprint;
use crate::terminal::{colors, print};

pub fn check_digit(partial: DigitString, cfg: &Config) -> anyhow::Result<()> {
    let digit: char = luhn::compute_check_digit(partial.as_str());
    let number: String = format!("{}{}", partial, digit);

    match cfg.quiet {
        0 => {
            print::header("check digit", cfg);
            print::aligned_line("Partial", partial.as_str().normal());
            print::aligned_line("Check digit", digit.to_string().color(colors::ACCENT).bold());
            print::aligned_line("Number", number.as_str().normal());
            print::fat_separator();
        }
        1 => success!("Check digit for {partial} is {digit}"),
        _ => lprint!(&digit.to_string()),
    }

    Ok(())
}
