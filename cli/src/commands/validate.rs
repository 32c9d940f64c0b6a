use colored::*;
use luhn_common::{DigitString, LuhnError, config::Config, success, warn};
use luhn_core::luhn;
use rayon::prelude::*;

use crate::lprint;
use crate::terminal::{colors, print};

#[derive(Debug, PartialEq, Eq)]
enum Verdict {
    Valid,
    Invalid,
    Malformed(LuhnError),
}

type Detail = (String, Verdict);

pub fn validate(numbers: Vec<String>, lenient: bool, cfg: &Config) -> anyhow::Result<()> {
    let details: Vec<Detail> = numbers
        .into_par_iter()
        .map(|raw| {
            let verdict = verdict(&raw, lenient);
            (raw, verdict)
        })
        .collect();

    print::header("validation", cfg);
    for (raw, verdict) in &details {
        print_verdict(raw, verdict, cfg);
    }

    let failed: usize = details
        .iter()
        .filter(|(_, verdict)| *verdict != Verdict::Valid)
        .count();
    let total: usize = details.len();

    if failed > 0 {
        anyhow::bail!("{failed} of {total} numbers failed validation");
    }

    match cfg.quiet {
        0 => {
            print::fat_separator();
            let output: ColoredString = format!("{total} valid numbers").color(colors::VALID).bold();
            print::centerln(&format!("{output}"));
        }
        1 => success!("All {total} numbers are valid"),
        _ => {}
    }

    Ok(())
}

fn verdict(raw: &str, lenient: bool) -> Verdict {
    let candidate: String = if lenient {
        strip_separators(raw)
    } else {
        raw.to_owned()
    };

    match DigitString::parse(&candidate) {
        Ok(number) if luhn::is_valid(number.as_str()) => Verdict::Valid,
        Ok(_) => Verdict::Invalid,
        Err(e) => Verdict::Malformed(e),
    }
}

/// Drops the separators commonly used when card numbers are written out.
fn strip_separators(raw: &str) -> String {
    raw.chars().filter(|c| !matches!(c, ' ' | '-')).collect()
}

fn print_verdict(raw: &str, verdict: &Verdict, cfg: &Config) {
    let (label, color) = match verdict {
        Verdict::Valid => ("valid", colors::VALID),
        Verdict::Invalid => ("invalid", colors::INVALID),
        Verdict::Malformed(_) => ("malformed", colors::MALFORMED),
    };

    match cfg.quiet {
        0 => print::aligned_line(raw, label.color(color).bold()),
        1 => {
            if let Verdict::Malformed(e) = verdict {
                warn!("{e}");
            } else {
                lprint!(&format!("{raw} {}", label.color(color)));
            }
        }
        _ => lprint!(&format!("{raw} {label}")),
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
