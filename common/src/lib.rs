//! Shared building blocks for the Luhn workspace.
//!
//! * [`error`]: the error type surfaced by the library crates.
//! * [`digits`]: the validated [`digits::DigitString`] newtype.
//! * [`config`]: output settings threaded through the CLI.
//!
//! The logging macros exported here ([`success!`], [`warn!`]) are thin
//! wrappers over `tracing` so every crate logs through the same targets.

pub mod config;
pub mod digits;
pub mod error;

#[doc(hidden)]
pub use tracing;

pub use digits::DigitString;
pub use error::LuhnError;

/// Target used for events that report a completed operation.
pub const SUCCESS_TARGET: &str = "luhn::success";

/// Target used for raw, already formatted output lines.
pub const PRINT_TARGET: &str = "luhn::print";

#[macro_export]
macro_rules! success {
    ($($arg:tt)*) => {
        $crate::tracing::info!(target: $crate::SUCCESS_TARGET, $($arg)*)
    };
}

#[macro_export]
macro_rules! warn {
    ($($arg:tt)*) => {
        $crate::tracing::warn!($($arg)*)
    };
}
