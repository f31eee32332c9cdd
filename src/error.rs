//! Error type shared by every numeric helper.
//!
//! All validation failures are one kind of error, an invalid argument.
//! The variants only say which check rejected the input so the diagnostic
//! can name it.

use thiserror::Error;

/// Result type used throughout the crate.
pub type Result<T> = std::result::Result<T, MathError>;

/// Invalid argument passed to a numeric helper.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum MathError {
    /// The input sequence has no elements.
    #[error("expected a non-empty sequence of numbers")]
    EmptyInput,

    /// A value that must be finite was NaN or infinite.
    #[error("`{name}` must be a finite number, got {value}")]
    NonFinite { name: &'static str, value: f64 },

    /// A bound that must be a whole number had a fractional part.
    #[error("`{name}` must be an integer, got {value}")]
    NonIntegral { name: &'static str, value: f64 },

    /// `min` is greater than `max`.
    #[error("min ({min}) must not exceed max ({max})")]
    InvertedBounds { min: f64, max: f64 },

    /// `max - min + 1` is not representable.
    #[error("range [{min}, {max}] is too wide to sample")]
    RangeTooWide { min: f64, max: f64 },

    /// A negative number of decimal places was requested.
    #[error("decimals must be non-negative, got {0}")]
    NegativePrecision(i32),

    /// An intermediate result overflowed to infinity.
    #[error("intermediate result overflowed")]
    Overflow,
}

impl MathError {
    /// Every variant is an invalid-argument failure; there is no transient
    /// or retryable kind.
    pub fn is_invalid_argument(&self) -> bool {
        true
    }
}
