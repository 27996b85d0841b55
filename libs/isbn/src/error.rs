//! Error types for ISBN parsing and validation.

use thiserror::Error;

use crate::IsbnVersion;

/// Errors that can occur when parsing or validating ISBNs.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum IsbnError {
    /// The input string is empty.
    #[error("ISBN cannot be empty")]
    Empty,

    /// The input is neither 10 nor 13 characters after removing separators.
    #[error("ISBN must be 10 or 13 characters long, got {length}")]
    InvalidLength { length: usize },

    /// The input does not match the required shape for the variant.
    #[error("invalid {version} format")]
    InvalidFormat { version: IsbnVersion },

    /// The check character does not match the one computed from the
    /// remaining digits.
    #[error("invalid {version} check digit: expected '{expected}', found '{found}'")]
    InvalidChecksum {
        version: IsbnVersion,
        expected: char,
        found: char,
    },
}

impl IsbnError {
    /// Returns true if this error indicates a malformed input shape.
    pub fn is_format_error(&self) -> bool {
        matches!(
            self,
            IsbnError::Empty | IsbnError::InvalidLength { .. } | IsbnError::InvalidFormat { .. }
        )
    }

    /// Returns true if this error indicates a failed check-digit verification.
    pub fn is_checksum_error(&self) -> bool {
        matches!(self, IsbnError::InvalidChecksum { .. })
    }
}
