//! The polymorphic ISBN type: parsing, version dispatch, conversion, and
//! canonical ordering.

use std::borrow::Cow;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::{Isbn10, Isbn13, IsbnError};

/// Removes the separators permitted in raw ISBN input.
pub(crate) fn strip_separators(raw: &str) -> String {
    raw.chars().filter(|c| !matches!(c, '-' | ' ')).collect()
}

// =============================================================================
// Version tag
// =============================================================================

/// The two recognised ISBN formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IsbnVersion {
    /// The legacy 10-character format.
    Ten,
    /// The current 13-digit format.
    Thirteen,
}

impl fmt::Display for IsbnVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IsbnVersion::Ten => write!(f, "ISBN-10"),
            IsbnVersion::Thirteen => write!(f, "ISBN-13"),
        }
    }
}

// =============================================================================
// Isbn
// =============================================================================

/// A validated ISBN, either [`Isbn10`] or [`Isbn13`].
///
/// The enum is the polymorphic surface over the two variants: it parses raw
/// input into whichever variant the cleaned length selects, dispatches
/// conversion between versions, and orders mixed collections by canonical
/// 13-digit form.
///
/// # Example
///
/// ```
/// use isbn::{Isbn, IsbnVersion};
///
/// let isbn = Isbn::parse("978-0-306-40615-7")?;
/// assert_eq!(isbn.version(), IsbnVersion::Thirteen);
/// assert_eq!(isbn.value(), "9780306406157");
///
/// let legacy = isbn.to_isbn10().unwrap();
/// assert_eq!(legacy.value(), "0306406152");
/// # Ok::<(), isbn::IsbnError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Isbn {
    /// A legacy 10-character ISBN.
    Ten(Isbn10),
    /// A current 13-digit ISBN.
    Thirteen(Isbn13),
}

impl Isbn {
    /// Parses a raw ISBN string into the matching variant.
    ///
    /// Hyphens and spaces are ignored; the cleaned length selects the
    /// variant, whose constructor performs full format and check-digit
    /// validation.
    pub fn parse(raw: &str) -> Result<Self, IsbnError> {
        if raw.is_empty() {
            return Err(IsbnError::Empty);
        }
        match strip_separators(raw).len() {
            10 => Isbn10::new(raw).map(Isbn::Ten),
            13 => Isbn13::new(raw).map(Isbn::Thirteen),
            length => Err(IsbnError::InvalidLength { length }),
        }
    }

    /// Returns the canonical digit string (no separators).
    #[must_use]
    pub fn value(&self) -> &str {
        match self {
            Isbn::Ten(isbn) => isbn.value(),
            Isbn::Thirteen(isbn) => isbn.value(),
        }
    }

    /// Returns the version tag of this ISBN.
    #[must_use]
    pub fn version(&self) -> IsbnVersion {
        match self {
            Isbn::Ten(_) => IsbnVersion::Ten,
            Isbn::Thirteen(_) => IsbnVersion::Thirteen,
        }
    }

    /// Returns true if this ISBN can be converted to `target`.
    ///
    /// ISBN-10 always converts to ISBN-13; ISBN-13 converts to ISBN-10 only
    /// with a `978` prefix. The predicate describes version-changing
    /// conversions, so it is false for the value's own version even though
    /// the identity conversions below always succeed.
    #[must_use]
    pub fn can_convert_to(&self, target: IsbnVersion) -> bool {
        match self {
            Isbn::Ten(isbn) => isbn.can_convert_to(target),
            Isbn::Thirteen(isbn) => isbn.can_convert_to(target),
        }
    }

    /// Attempts conversion to ISBN-13.
    ///
    /// Never absent: an ISBN-10 promotes and an ISBN-13 returns itself.
    #[must_use]
    pub fn to_isbn13(&self) -> Option<Isbn13> {
        match self {
            Isbn::Ten(isbn) => Some(isbn.to_isbn13()),
            Isbn::Thirteen(isbn) => Some(isbn.clone()),
        }
    }

    /// Attempts conversion to ISBN-10.
    ///
    /// An ISBN-10 returns itself; an ISBN-13 demotes only with a `978`
    /// prefix, otherwise the result is absent.
    #[must_use]
    pub fn to_isbn10(&self) -> Option<Isbn10> {
        match self {
            Isbn::Ten(isbn) => Some(isbn.clone()),
            Isbn::Thirteen(isbn) => isbn.to_isbn10(),
        }
    }

    /// Converts this ISBN to `target`, or `None` when
    /// [`can_convert_to`](Self::can_convert_to) is false.
    #[must_use]
    pub fn convert(&self, target: IsbnVersion) -> Option<Isbn> {
        if !self.can_convert_to(target) {
            return None;
        }
        match target {
            IsbnVersion::Ten => self.to_isbn10().map(Isbn::Ten),
            IsbnVersion::Thirteen => self.to_isbn13().map(Isbn::Thirteen),
        }
    }

    /// The canonical 13-digit string this ISBN orders by.
    fn comparable_value(&self) -> Cow<'_, str> {
        match self {
            Isbn::Ten(isbn) => Cow::Owned(isbn.to_isbn13().value().to_owned()),
            Isbn::Thirteen(isbn) => Cow::Borrowed(isbn.value()),
        }
    }
}

/// Orders ISBNs by canonical 13-digit form.
///
/// An ISBN-10 is promoted to its ISBN-13 equivalent, then the two 13-digit
/// strings compare lexicographically; equal-length digit strings make
/// lexicographic and numeric order coincide. Consequences:
///
/// - all `978`-prefixed values order before all `979`-prefixed ones
/// - an ISBN-10 orders identically to its ISBN-13 equivalent: the pair
///   compares `Equal` while remaining distinct under `==`
impl Ord for Isbn {
    fn cmp(&self, other: &Self) -> Ordering {
        self.comparable_value().cmp(&other.comparable_value())
    }
}

impl PartialOrd for Isbn {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Isbn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.value())
    }
}

impl FromStr for Isbn {
    type Err = IsbnError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<Isbn10> for Isbn {
    fn from(isbn: Isbn10) -> Self {
        Isbn::Ten(isbn)
    }
}

impl From<Isbn13> for Isbn {
    fn from(isbn: Isbn13) -> Self {
        Isbn::Thirteen(isbn)
    }
}

impl serde::Serialize for Isbn {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.value())
    }
}

impl<'de> serde::Deserialize<'de> for Isbn {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}

// =============================================================================
// Tests
// =============================================================================
