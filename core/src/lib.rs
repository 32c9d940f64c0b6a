//! Luhn checksum computation and validation.
//!
//! * [`luhn`]: the checksum itself plus the three public operations built on it.
//! * [`random`]: produces random partial numbers and completes them with a check digit.

pub mod luhn;
pub mod random;

pub use luhn::{compute_check_digit, generate_number, is_valid};
pub use random::MAX_LENGTH;
