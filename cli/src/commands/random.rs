use anyhow::Context;
use colored::*;
use luhn_common::{DigitString, config::Config, success};
use luhn_core::random;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::debug;

use crate::lprint;
use crate::terminal::{colors, print};

pub fn random(
    prefix: Option<DigitString>,
    length: usize,
    count: usize,
    seed: Option<u64>,
    cfg: &Config,
) -> anyhow::Result<()> {
    let numbers: Vec<String> = draw(prefix.as_ref(), length, count, seed)?;

    print::header("random numbers", cfg);
    for (idx, number) in numbers.iter().enumerate() {
        match cfg.quiet {
            0 => print::numbered_line(idx, number),
            _ => lprint!(number),
        }
    }

    match cfg.quiet {
        0 => {
            let output: ColoredString = summary(numbers.len(), length).color(colors::VALID).bold();
            print::fat_separator();
            print::centerln(&format!("{output}"));
        }
        1 => success!("{}", summary(numbers.len(), length)),
        _ => {}
    }

    Ok(())
}

fn draw(
    prefix: Option<&DigitString>,
    length: usize,
    count: usize,
    seed: Option<u64>,
) -> anyhow::Result<Vec<String>> {
    let mut rng: StdRng = match seed {
        Some(seed) => {
            debug!(seed, "using seeded generator");
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_os_rng(),
    };

    let prefix: &str = prefix.map_or("", DigitString::as_str);
    random::random_numbers(&mut rng, prefix, length, count)
        .context("cannot generate random numbers")
}

fn summary(count: usize, length: usize) -> String {
    let unit: &str = if count == 1 { "number" } else { "numbers" };
    format!("{count} {unit} of {length} digits")
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
