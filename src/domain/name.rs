//! Name value object shared by contacts and address books.

use super::errors::ValidationError;
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

static NAME_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-z]+$").expect("name pattern is a valid regex"));

/// A non-empty name made of lower-case ASCII letters.
///
/// Contacts and address books follow the same lexical rule but report
/// violations with different messages, hence the two constructors.
///
/// # Example
///
/// ```
/// use address_book::domain::Name;
///
/// let name = Name::contact("alice").unwrap();
/// assert_eq!(name.as_str(), "alice");
/// assert!(Name::book("Team").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Name(String);

impl Name {
    /// Validate a contact name.
    ///
    /// # Errors
    ///
    /// `ValidationError::EmptyName` or `ValidationError::InvalidName`.
    pub fn contact(name: impl Into<String>) -> Result<Self, ValidationError> {
        Self::validated(
            name.into(),
            ValidationError::EmptyName,
            ValidationError::InvalidName,
        )
    }

    /// Validate an address book name.
    ///
    /// # Errors
    ///
    /// `ValidationError::EmptyBookName` or `ValidationError::InvalidBookName`.
    pub fn book(name: impl Into<String>) -> Result<Self, ValidationError> {
        Self::validated(
            name.into(),
            ValidationError::EmptyBookName,
            ValidationError::InvalidBookName,
        )
    }

    fn validated(
        name: String,
        empty: ValidationError,
        invalid: ValidationError,
    ) -> Result<Self, ValidationError> {
        if name.is_empty() {
            return Err(empty);
        }
        if !NAME_PATTERN.is_match(&name) {
            return Err(invalid);
        }
        Ok(Self(name))
    }

    /// Get the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
