//! The current 13-digit ISBN variant.

use std::fmt;
use std::str::FromStr;

use crate::types::strip_separators;
use crate::{Isbn10, IsbnError, IsbnVersion};

/// A validated ISBN-13: 13 digits beginning with `978` or `979`.
///
/// Format and check digit are verified at construction; the stored value is
/// canonical (no separators).
///
/// Only `978`-prefixed values convert back to [`Isbn10`]. The `979` prefix
/// was introduced after the 10-character numbering space was exhausted, so
/// those values have no legacy equivalent.
///
/// # Example
///
/// ```
/// use isbn::Isbn13;
///
/// let isbn13 = Isbn13::new("978-0-306-40615-7")?;
/// assert_eq!(isbn13.value(), "9780306406157");
/// # Ok::<(), isbn::IsbnError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Isbn13(String);

impl Isbn13 {
    /// Constructs a validated ISBN-13 from a raw string.
    ///
    /// Hyphens and spaces are stripped before validation.
    pub fn new(raw: &str) -> Result<Self, IsbnError> {
        let cleaned = strip_separators(raw);
        if !is_well_formed(&cleaned) {
            return Err(IsbnError::InvalidFormat {
                version: IsbnVersion::Thirteen,
            });
        }
        let expected = compute_check_digit(&cleaned[..12]);
        let found = cleaned.as_bytes()[12] as char;
        if expected != found {
            return Err(IsbnError::InvalidChecksum {
                version: IsbnVersion::Thirteen,
                expected,
                found,
            });
        }
        Ok(Self(cleaned))
    }

    /// Returns the canonical 13-digit value (no separators).
    #[must_use]
    pub fn value(&self) -> &str {
        &self.0
    }

    /// Returns [`IsbnVersion::Thirteen`].
    #[must_use]
    pub fn version(&self) -> IsbnVersion {
        IsbnVersion::Thirteen
    }

    /// Returns true if this ISBN can be converted to `target`.
    ///
    /// True only for the ISBN-10 target, and only when the value carries the
    /// `978` prefix.
    #[must_use]
    pub fn can_convert_to(&self, target: IsbnVersion) -> bool {
        target == IsbnVersion::Ten && self.0.starts_with("978")
    }

    /// Attempts to convert this ISBN-13 to its ISBN-10 equivalent.
    ///
    /// Returns `None` for `979`-prefixed values. Otherwise the middle 9
    /// digits keep their order and the check character is recomputed; the
    /// result is constructed through the validating [`Isbn10`] constructor.
    #[must_use]
    pub fn to_isbn10(&self) -> Option<Isbn10> {
        if !self.can_convert_to(IsbnVersion::Ten) {
            return None;
        }
        let mut raw = String::with_capacity(10);
        raw.push_str(&self.0[3..12]);
        raw.push(crate::isbn10::compute_check_digit(&raw));
        let isbn10 =
            Isbn10::new(&raw).expect("a 978-prefixed ISBN-13 always demotes to a valid ISBN-10");
        Some(isbn10)
    }
}

impl fmt::Display for Isbn13 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Isbn13 {
    type Err = IsbnError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl serde::Serialize for Isbn13 {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> serde::Deserialize<'de> for Isbn13 {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::new(&s).map_err(serde::de::Error::custom)
    }
}

/// Shape check: 13 ASCII digits with a `978` or `979` prefix.
fn is_well_formed(value: &str) -> bool {
    let bytes = value.as_bytes();
    bytes.len() == 13
        && (value.starts_with("978") || value.starts_with("979"))
        && bytes.iter().all(u8::is_ascii_digit)
}

/// Computes the ISBN-13 check digit for a 12-digit prefix.
///
/// Modulo-10 with alternating weights 1 and 3: digit `i` (0-based) carries
/// weight 1 when `i` is even and 3 when odd; the check is
/// `(10 - sum mod 10) mod 10`.
pub(crate) fn compute_check_digit(twelve_digits: &str) -> char {
    let sum: u32 = twelve_digits
        .bytes()
        .enumerate()
        .map(|(i, b)| {
            let digit = u32::from(b - b'0');
            if i % 2 == 0 { digit } else { digit * 3 }
        })
        .sum();
    let check = (10 - sum % 10) % 10;
    char::from(b'0' + check as u8)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_hyphenated_input() {
        let isbn13 = Isbn13::new("978-0-306-40615-7").unwrap();
        assert_eq!(isbn13.value(), "9780306406157");
        assert_eq!(isbn13.version(), IsbnVersion::Thirteen);
    }

    #[test]
    fn test_accepts_979_prefix() {
        let isbn13 = Isbn13::new("979 12 3456789 6").unwrap();
        assert_eq!(isbn13.value(), "9791234567896");
    }

    #[test]
    fn test_check_digit_zero_wraps_modulus() {
        // Weighted sum 140 is a multiple of 10, so the check wraps to 0.
        assert_eq!(compute_check_digit("979888645174"), '0');
    }

    #[test]
    fn test_rejects_wrong_prefix() {
        let result = Isbn13::new("9770306406152");
        assert!(matches!(
            result.unwrap_err(),
            IsbnError::InvalidFormat {
                version: IsbnVersion::Thirteen
            }
        ));
    }

    #[test]
    fn test_rejects_non_digit_characters() {
        assert!(Isbn13::new("97803064061X7").unwrap_err().is_format_error());
    }

    #[test]
    fn test_rejects_wrong_length() {
        assert!(Isbn13::new("978030640615").unwrap_err().is_format_error());
        assert!(Isbn13::new("97803064061577").unwrap_err().is_format_error());
    }

    #[test]
    fn test_rejects_wrong_check_digit() {
        let result = Isbn13::new("9780306406158");
        let err = result.unwrap_err();
        assert!(err.is_checksum_error());
        assert!(matches!(
            err,
            IsbnError::InvalidChecksum {
                version: IsbnVersion::Thirteen,
                expected: '7',
                found: '8',
            }
        ));
    }

    #[test]
    fn test_to_isbn10_with_978_prefix() {
        let isbn13 = Isbn13::new("9780306406157").unwrap();
        let isbn10 = isbn13.to_isbn10().unwrap();
        assert_eq!(isbn10.value(), "0306406152");
    }

    #[test]
    fn test_to_isbn10_absent_for_979_prefix() {
        let isbn13 = Isbn13::new("9791234567896").unwrap();
        assert_eq!(isbn13.to_isbn10(), None);
        assert!(!isbn13.can_convert_to(IsbnVersion::Ten));
    }

    #[test]
    fn test_can_convert_to() {
        let isbn13 = Isbn13::new("9780306406157").unwrap();
        assert!(isbn13.can_convert_to(IsbnVersion::Ten));
        assert!(!isbn13.can_convert_to(IsbnVersion::Thirteen));
    }

    #[test]
    fn test_display_and_fromstr_roundtrip() {
        let isbn13 = Isbn13::new("9798886451740").unwrap();
        let parsed: Isbn13 = isbn13.to_string().parse().unwrap();
        assert_eq!(parsed, isbn13);
    }

    #[test]
    fn test_json_roundtrip() {
        let isbn13 = Isbn13::new("978-0-306-40615-7").unwrap();
        let json = serde_json::to_string(&isbn13).unwrap();
        assert_eq!(json, "\"9780306406157\"");
        let parsed: Isbn13 = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, isbn13);
    }

    #[test]
    fn test_json_rejects_invalid_value() {
        let result: Result<Isbn13, _> = serde_json::from_str("\"9780306406158\"");
        assert!(result.is_err());
    }
}
