//! # Digit Strings
//!
//! Identifiers protected by a Luhn check digit are kept as text rather than
//! integers: leading zeros are significant and card or IMEI numbers quickly
//! outgrow native integer ranges.
//!
//! [`DigitString`] is the strict form of such an identifier. It can only be
//! built from a non-empty sequence of ASCII decimal digits, the same shape
//! `^[0-9]+$` accepts. Signs, whitespace, separators, decimal points and
//! non-ASCII digits are all rejected.

use std::fmt;
use std::str::FromStr;

use crate::error::LuhnError;

/// A non-empty string made of ASCII decimal digits only.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DigitString(String);

impl DigitString {
    /// Validates `s` and takes a copy of it.
    pub fn parse(s: &str) -> Result<Self, LuhnError> {
        ensure_digits(s)?;
        Ok(Self(s.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for DigitString {
    type Err = LuhnError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for DigitString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Checks that `s` matches `^[0-9]+$`.
pub fn ensure_digits(s: &str) -> Result<(), LuhnError> {
    if s.is_empty() {
        return Err(LuhnError::invalid_argument(s, "expected at least one digit"));
    }

    if !s.bytes().all(|b| b.is_ascii_digit()) {
        return Err(LuhnError::invalid_argument(s, "expected decimal digits only"));
    }

    Ok(())
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
