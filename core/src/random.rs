//! Random Luhn-valid numbers, mostly for fixtures and test data.
//!
//! A number is built from a fixed prefix (an issuer range such as `4` for Visa
//! or a TAC for an IMEI), random filler digits, and the check digit computed by
//! [`generate_number`]. The caller owns the random source, so a seeded
//! generator gives reproducible output.

use luhn_common::LuhnError;
use luhn_common::digits::ensure_digits;
use rand::Rng;
use tracing::debug;

use crate::luhn::generate_number;

/// Longest number the generator will build, check digit included.
///
/// Card numbers top out at 19 digits, IMEIs at 15 and NPIs at 10.
pub const MAX_LENGTH: usize = 256;

/// Builds a partial number of `length - 1` digits starting with `prefix`.
///
/// The remaining slot is left for the check digit. `prefix` may be empty,
/// otherwise it must be a digit string. `length` must lie in
/// `prefix.len() + 1..=MAX_LENGTH` and be at least 2.
pub fn random_partial<R>(rng: &mut R, prefix: &str, length: usize) -> Result<String, LuhnError>
where
    R: Rng,
{
    if !prefix.is_empty() {
        ensure_digits(prefix)?;
    }

    // at least one digit besides the check digit
    if length <= prefix.len() || !(2..=MAX_LENGTH).contains(&length) {
        return Err(LuhnError::InvalidLength {
            prefix_len: prefix.len(),
            length,
        });
    }

    let mut partial = String::with_capacity(length);
    partial.push_str(prefix);
    while partial.len() < length - 1 {
        partial.push(char::from(b'0' + rng.random_range(0..10u8)));
    }

    Ok(partial)
}

/// Generates a Luhn-valid number of exactly `length` digits starting with `prefix`.
pub fn random_number<R>(rng: &mut R, prefix: &str, length: usize) -> Result<String, LuhnError>
where
    R: Rng,
{
    let partial = random_partial(rng, prefix, length)?;
    let number = generate_number(&partial)?;
    debug!(prefix, length, "generated random number");
    Ok(number)
}

/// Generates `count` numbers with the same prefix and length.
pub fn random_numbers<R>(
    rng: &mut R,
    prefix: &str,
    length: usize,
    count: usize,
) -> Result<Vec<String>, LuhnError>
where
    R: Rng,
{
    (0..count)
        .map(|_| random_number(rng, prefix, length))
        .collect()
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
