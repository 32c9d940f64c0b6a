use anyhow::Context;
use colored::*;
use luhn_common::{config::Config, success};
use luhn_core::luhn;

use crate::lprint;
use crate::terminal::{colors, print};

pub fn generate(partial: String, cfg: &Config) -> anyhow::Result<()> {
    let number: String = luhn::generate_number(&partial)
        .with_context(|| format!("cannot generate a Luhn number from '{partial}'"))?;

    match cfg.quiet {
        0 => {
            print::header("generated number", cfg);
            print::aligned_line("Partial", partial.as_str().normal());
            print::aligned_line("Number", number.as_str().color(colors::VALID).bold());
            print::fat_separator();
        }
        1 => success!("Generated {number}"),
        _ => lprint!(&number),
    }

    Ok(())
}
