pub mod check_digit;
pub mod generate;
pub mod random;
pub mod validate;

use clap::builder::RangedU64ValueParser;
use clap::{ArgAction, Parser, Subcommand};
use luhn_common::DigitString;
use luhn_core::MAX_LENGTH;

/// Upper bound on how many numbers one `random` call prints.
pub const MAX_COUNT: usize = 100_000;

#[derive(Parser)]
#[command(name = "luhn")]
#[command(version, about = "Compute, validate and generate Luhn check digits.")]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Commands,

    /// Reduce output; repeat for bare results (-qq)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub quiet: u8,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Compute the check digit for a partial number
    #[command(alias = "c")]
    CheckDigit { partial: DigitString },
    /// Validate one or more numbers that end with their check digit
    #[command(alias = "v")]
    Validate {
        #[arg(required = true)]
        numbers: Vec<String>,
        /// Strip spaces and dashes before validating
        #[arg(short, long)]
        lenient: bool,
    },
    /// Append the check digit to a partial number
    #[command(alias = "g")]
    Generate { partial: String },
    /// Generate random Luhn-valid numbers
    #[command(alias = "r")]
    Random {
        /// Leading digits every number starts with
        #[arg(short, long)]
        prefix: Option<DigitString>,
        /// Total number of digits, check digit included
        #[arg(
            short,
            long,
            default_value_t = 16,
            value_parser = RangedU64ValueParser::<usize>::new().range(2..=MAX_LENGTH as u64)
        )]
        length: usize,
        /// How many numbers to generate
        #[arg(
            short = 'n',
            long,
            default_value_t = 1,
            value_parser = RangedU64ValueParser::<usize>::new().range(1..=MAX_COUNT as u64)
        )]
        count: usize,
        /// Seed for reproducible output
        #[arg(short, long)]
        seed: Option<u64>,
    },
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
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
