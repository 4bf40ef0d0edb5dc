//! Shared error types for the conversion core

use thiserror::Error;

/// Main error type for conversion operations
///
/// Overflow is deliberately absent: an out-of-range input is a successful,
/// saturated conversion and is reported through the result flags.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Input is missing, empty, or not an optionally-signed decimal literal
    #[error("Invalid decimal integer {input:?}: {reason}")]
    InvalidFormat { input: String, reason: String },

    /// Bit pattern is not exactly 32 characters of '0'/'1'
    #[error("Malformed bit pattern {pattern:?}: {reason}")]
    MalformedBitPattern { pattern: String, reason: String },

    /// Format tag outside DEC, BIN, HEX
    #[error("Unknown format selector {0:?}: expected one of DEC, BIN, HEX")]
    UnknownFormatSelector(String),
}

impl Error {
    /// Create an invalid format error echoing the offending text
    pub fn invalid_format(input: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidFormat {
            input: input.into(),
            reason: reason.into(),
        }
    }

    /// Create a malformed bit pattern error
    pub fn malformed_bits(pattern: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::MalformedBitPattern {
            pattern: pattern.into(),
            reason: reason.into(),
        }
    }

    /// Create an unknown format selector error
    pub fn unknown_selector(tag: impl Into<String>) -> Self {
        Self::UnknownFormatSelector(tag.into())
    }
}

/// Result type alias using our error type
pub type Result<T> = std::result::Result<T, Error>;
