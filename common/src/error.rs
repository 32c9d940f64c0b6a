use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LuhnError {
    /// The input is not a non-empty string of ASCII decimal digits.
    #[error("invalid argument '{input}': {reason}")]
    InvalidArgument { input: String, reason: &'static str },
    /// A requested total length leaves no room for the check digit, or exceeds
    /// what the generator builds.
    #[error("length {length} does not fit a prefix of {prefix_len} digits plus a check digit")]
    InvalidLength { prefix_len: usize, length: usize },
}

impl LuhnError {
    pub(crate) fn invalid_argument(input: &str, reason: &'static str) -> Self {
        Self::InvalidArgument {
            input: input.to_owned(),
            reason,
        }
    }

    /// Returns `true` for the argument-validation failure.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument { .. })
    }
}
