//! # isbn
//!
//! Validated ISBN types, parsing, and conversion for the ISO 2108 book
//! numbering standard.
//!
//! ## Design Principles
//!
//! - A constructed ISBN is always valid: format and check digit are verified
//!   once, at construction, with no raw-value bypass
//! - Values have a canonical string representation with strict parsing;
//!   hyphens and spaces in input are ignored
//! - Conversion follows the standard: every ISBN-10 has exactly one ISBN-13
//!   equivalent, while only `978`-prefixed ISBN-13 values convert back
//! - Mixed collections order by canonical 13-digit form, so an ISBN-10 sorts
//!   next to its ISBN-13 equivalent
//!
//! ## Formats
//!
//! - [`Isbn10`]: 9 digits plus a check character (`0`-`9` or `X`), e.g.
//!   `0306406152`
//! - [`Isbn13`]: 13 digits starting with `978` or `979`, e.g.
//!   `9780306406157`
//!
//! ## Usage
//!
//! ```
//! use isbn::{Isbn, IsbnVersion};
//!
//! let isbn = Isbn::parse("978-0-306-40615-7")?;
//! assert_eq!(isbn.value(), "9780306406157");
//! assert_eq!(isbn.version(), IsbnVersion::Thirteen);
//!
//! let legacy = isbn.to_isbn10().unwrap();
//! assert_eq!(legacy.value(), "0306406152");
//! # Ok::<(), isbn::IsbnError>(())
//! ```
//!
//! Conversion that the standard rules out is an absent result, not an error:
//!
//! ```
//! use isbn::Isbn13;
//!
//! let isbn13 = Isbn13::new("9791234567896")?;
//! assert!(isbn13.to_isbn10().is_none());
//! # Ok::<(), isbn::IsbnError>(())
//! ```

mod error;
mod isbn10;
mod isbn13;
mod types;
pub mod validate;

pub use error::IsbnError;
pub use isbn10::Isbn10;
pub use isbn13::Isbn13;
pub use types::{Isbn, IsbnVersion};
