//! # Luhn Checksum
//!
//! The Luhn (mod 10) formula protects identifiers such as credit card numbers,
//! IMEI numbers and National Provider Identifiers against single-digit typos and
//! most adjacent transpositions.
//!
//! Positions are counted from the **rightmost** character, where the check digit
//! lives. Digits at even offsets from the right (0, 2, 4, …) are added as-is;
//! digits at odd offsets are doubled, and a doubled value of 10 or more
//! contributes the sum of its two digits (`value - 9`). A number is valid when
//! the total is a multiple of ten.
//!
//! **Precondition:** [`compute_check_digit`] and [`is_valid`] take any `&str`
//! and never fail. Characters other than `'0'..='9'` count as zero. Use
//! [`generate_number`] or [`luhn_common::DigitString`] when input needs
//! validating.

use std::iter;

use luhn_common::LuhnError;
use luhn_common::digits::ensure_digits;
use tracing::trace;

/// Computes the Luhn checksum of `number`, a value in `0..=9`.
fn checksum(number: &str) -> u8 {
    checksum_of(number.bytes())
}

fn checksum_of<I>(bytes: I) -> u8
where
    I: DoubleEndedIterator<Item = u8>,
{
    let sum: u32 = bytes
        .rev()
        .enumerate()
        .fold(0, |acc, (offset, byte)| {
            let digit = digit_value(byte);
            let weighted = if offset % 2 == 0 { digit } else { doubled(digit) };
            (acc + weighted) % 10
        });

    sum as u8
}

fn digit_value(byte: u8) -> u32 {
    if byte.is_ascii_digit() {
        u32::from(byte - b'0')
    } else {
        0
    }
}

/// Doubles a digit and folds two-digit results back into a single digit.
fn doubled(digit: u32) -> u32 {
    let value = digit * 2;
    if value >= 10 { value - 9 } else { value }
}

/// Computes the digit that makes `partial_number` Luhn-valid once appended.
///
/// The checksum is taken over `partial_number` followed by a `'0'` placeholder,
/// so the existing digits sit at the offsets they will have in the final
/// number. A checksum of zero yields `'0'`, never `"10"`.
///
/// ```
/// use luhn_core::compute_check_digit;
///
/// assert_eq!(compute_check_digit("7992739871"), '3');
/// assert_eq!(compute_check_digit("0"), '0');
/// ```
pub fn compute_check_digit(partial_number: &str) -> char {
    let checksum = checksum_of(partial_number.bytes().chain(iter::once(b'0')));
    let check_digit = (10 - checksum) % 10;

    char::from(b'0' + check_digit)
}

/// Returns `true` when `number`, check digit included, has a checksum of zero.
///
/// An empty string sums to zero and is therefore reported valid.
pub fn is_valid(number: &str) -> bool {
    checksum(number) == 0
}

/// Appends the check digit to `partial_value`.
///
/// Fails with [`LuhnError::InvalidArgument`] unless `partial_value` matches
/// `^[0-9]+$`. The result is one digit longer than the input and always
/// passes [`is_valid`].
pub fn generate_number(partial_value: &str) -> Result<String, LuhnError> {
    ensure_digits(partial_value)?;

    let check_digit = compute_check_digit(partial_value);
    trace!(partial = partial_value, %check_digit, "computed check digit");

    let mut number = String::with_capacity(partial_value.len() + 1);
    number.push_str(partial_value);
    number.push(check_digit);
    Ok(number)
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
