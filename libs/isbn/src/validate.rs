//! Field-level ISBN validation predicates.
//!
//! The ISBN types validate at construction and never need re-checking, but
//! hosts that keep the raw string in their own request or record types can
//! gate those fields here. The `validate_*` functions plug into the
//! `validator` crate's derive as custom field checks; the `is_valid_*`
//! predicates are plain booleans for everything else.
//!
//! All functions tolerate hyphen and space separators, exactly like the
//! constructors.
//!
//! # Example
//!
//! ```ignore
//! use validator::Validate;
//!
//! #[derive(Validate)]
//! struct CatalogEntry {
//!     #[validate(custom(function = isbn::validate::validate_isbn13))]
//!     isbn: String,
//! }
//! ```

use validator::ValidationError;

use crate::{Isbn, Isbn10, Isbn13};

/// Returns true if `value` is a valid ISBN-10.
#[must_use]
pub fn is_valid_isbn10(value: &str) -> bool {
    Isbn10::new(value).is_ok()
}

/// Returns true if `value` is a valid ISBN-13.
#[must_use]
pub fn is_valid_isbn13(value: &str) -> bool {
    Isbn13::new(value).is_ok()
}

/// Returns true if `value` is a valid ISBN of either version.
#[must_use]
pub fn is_valid_isbn(value: &str) -> bool {
    Isbn::parse(value).is_ok()
}

/// Checks an ISBN-10 field, for `#[validate(custom(...))]`.
pub fn validate_isbn10(value: &str) -> Result<(), ValidationError> {
    if is_valid_isbn10(value) {
        Ok(())
    } else {
        Err(ValidationError::new("isbn10"))
    }
}

/// Checks an ISBN-13 field, for `#[validate(custom(...))]`.
pub fn validate_isbn13(value: &str) -> Result<(), ValidationError> {
    if is_valid_isbn13(value) {
        Ok(())
    } else {
        Err(ValidationError::new("isbn13"))
    }
}

/// Checks a field accepting either ISBN version, for
/// `#[validate(custom(...))]`.
pub fn validate_isbn(value: &str) -> Result<(), ValidationError> {
    if is_valid_isbn(value) {
        Ok(())
    } else {
        Err(ValidationError::new("isbn"))
    }
}
