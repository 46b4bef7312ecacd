// ABOUTME: Error types for mf2 query operations.
// ABOUTME: Provides Mf2Error enum with InvalidArgument and InvalidPattern variants.

use std::fmt;
use thiserror::Error;

/// Convenience alias for results carrying an [`Mf2Error`].
pub type Result<T> = std::result::Result<T, Mf2Error>;

/// Errors raised by the few operations that fail fast instead of degrading
/// to an absent value.
#[derive(Debug, Error)]
pub enum Mf2Error {
    /// An argument had the wrong shape (e.g. an object where an array of
    /// URLs was required).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A custom classname pattern could not be compiled.
    #[error("invalid classname pattern {pattern:?}: {reason}")]
    InvalidPattern { pattern: String, reason: String },
}

impl Mf2Error {
    /// Creates an InvalidArgument error with a custom message.
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Mf2Error::InvalidArgument(msg.into())
    }

    /// Creates an InvalidPattern error from the offending pattern and the
    /// underlying regex error.
    pub fn invalid_pattern(pattern: impl Into<String>, err: impl fmt::Display) -> Self {
        Mf2Error::InvalidPattern {
            pattern: pattern.into(),
            reason: err.to_string(),
        }
    }

    /// Returns true if this is an InvalidArgument error.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Mf2Error::InvalidArgument(_))
    }
}
