//! The legacy 10-character ISBN variant.

use std::fmt;
use std::str::FromStr;

use crate::types::strip_separators;
use crate::{Isbn13, IsbnError, IsbnVersion};

/// A validated ISBN-10: 9 digits followed by a check character, which may be
/// a digit or `X`.
///
/// Format and check digit are verified at construction; the stored value is
/// canonical (no separators, upper-cased check character).
///
/// # Example
///
/// ```
/// use isbn::Isbn10;
///
/// let isbn10 = Isbn10::new("0-306-40615-2")?;
/// assert_eq!(isbn10.value(), "0306406152");
/// # Ok::<(), isbn::IsbnError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Isbn10(String);

impl Isbn10 {
    /// Constructs a validated ISBN-10 from a raw string.
    ///
    /// Hyphens and spaces are stripped and the check character is upper-cased
    /// before validation.
    pub fn new(raw: &str) -> Result<Self, IsbnError> {
        let cleaned = strip_separators(raw).to_ascii_uppercase();
        if !is_well_formed(&cleaned) {
            return Err(IsbnError::InvalidFormat {
                version: IsbnVersion::Ten,
            });
        }
        let expected = compute_check_digit(&cleaned[..9]);
        let found = cleaned.as_bytes()[9] as char;
        if expected != found {
            return Err(IsbnError::InvalidChecksum {
                version: IsbnVersion::Ten,
                expected,
                found,
            });
        }
        Ok(Self(cleaned))
    }

    /// Returns the canonical 10-character value (no separators, uppercase).
    #[must_use]
    pub fn value(&self) -> &str {
        &self.0
    }

    /// Returns [`IsbnVersion::Ten`].
    #[must_use]
    pub fn version(&self) -> IsbnVersion {
        IsbnVersion::Ten
    }

    /// Returns true if this ISBN can be converted to `target`.
    ///
    /// Always true for the ISBN-13 target.
    #[must_use]
    pub fn can_convert_to(&self, target: IsbnVersion) -> bool {
        target == IsbnVersion::Thirteen
    }

    /// Converts this ISBN-10 to its ISBN-13 equivalent by prefixing the first
    /// 9 digits with `978` and recomputing the check digit.
    ///
    /// Every valid ISBN-10 has exactly one ISBN-13 equivalent, so this
    /// conversion cannot fail. The result is constructed through the
    /// validating [`Isbn13`] constructor rather than assembled directly.
    #[must_use]
    pub fn to_isbn13(&self) -> Isbn13 {
        let mut raw = String::with_capacity(13);
        raw.push_str("978");
        raw.push_str(&self.0[..9]);
        raw.push(crate::isbn13::compute_check_digit(&raw));
        Isbn13::new(&raw).expect("a valid ISBN-10 always promotes to a valid ISBN-13")
    }
}

impl fmt::Display for Isbn10 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Isbn10 {
    type Err = IsbnError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl serde::Serialize for Isbn10 {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> serde::Deserialize<'de> for Isbn10 {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::new(&s).map_err(serde::de::Error::custom)
    }
}

/// Shape check: 9 ASCII digits followed by a digit or `X`.
fn is_well_formed(value: &str) -> bool {
    let bytes = value.as_bytes();
    bytes.len() == 10
        && bytes[..9].iter().all(u8::is_ascii_digit)
        && (bytes[9].is_ascii_digit() || bytes[9] == b'X')
}

/// Computes the ISBN-10 check character for a 9-digit prefix.
///
/// Weighted modulo-11: digit `i` (0-based) carries weight `10 - i`; the check
/// is `(11 - sum mod 11) mod 11`, rendered as `X` when it equals 10.
pub(crate) fn compute_check_digit(nine_digits: &str) -> char {
    let sum: u32 = nine_digits
        .bytes()
        .enumerate()
        .map(|(i, b)| (10 - i as u32) * u32::from(b - b'0'))
        .sum();
    let check = (11 - sum % 11) % 11;
    if check == 10 {
        'X'
    } else {
        char::from(b'0' + check as u8)
    }
}
