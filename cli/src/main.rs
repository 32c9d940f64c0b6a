mod commands;
mod terminal;

use commands::{CommandLine, Commands, check_digit, generate, random, validate};
use luhn_common::config::Config;
use terminal::logging;

fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    let cfg = Config {
        quiet: commands.quiet,
        no_color: commands.no_color,
    };

    logging::init_logging(&cfg)?;

    match commands.command {
        Commands::CheckDigit { partial } => check_digit::check_digit(partial, &cfg),
        Commands::Validate { numbers, lenient } => validate::validate(numbers, lenient, &cfg),
        Commands::Generate { partial } => generate::generate(partial, &cfg),
        Commands::Random {
            prefix,
            length,
            count,
            seed,
        } => random::random(prefix, length, count, seed, &cfg),
    }
}
