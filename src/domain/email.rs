//! EmailAddress value object.

use super::errors::ValidationError;
use super::fields::split_fields;
use super::name::Name;
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

static DOMAIN_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-z]+\.[a-z]{2,4}$").expect("email domain pattern is a valid regex")
});

/// A type-safe wrapper for contact email addresses.
///
/// An address is only valid relative to a contact name: its local part
/// must be exactly that name.
///
/// # Example
///
/// ```
/// use address_book::domain::{EmailAddress, Name};
///
/// let name = Name::contact("alice").unwrap();
/// let email = EmailAddress::for_name("alice@kit.edu", &name).unwrap();
/// assert_eq!(email.domain(), "kit.edu");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Create a new EmailAddress owned by the contact called `name`.
    ///
    /// # Validation Rules
    ///
    /// - Splitting on '@' (ignoring trailing empty parts) must give exactly two parts
    /// - The local part must equal `name` exactly
    /// - The domain must match `[a-z]+\.[a-z]{2,4}`
    ///
    /// # Errors
    ///
    /// Returns the `ValidationError` of the first rule violated.
    pub fn for_name(email: impl Into<String>, name: &Name) -> Result<Self, ValidationError> {
        let email = email.into();

        let parts = split_fields(&email, '@');
        if parts.len() != 2 {
            return Err(ValidationError::MalformedEmail);
        }

        if parts[0] != name.as_str() {
            return Err(ValidationError::EmailNameMismatch);
        }

        if !DOMAIN_PATTERN.is_match(parts[1]) {
            return Err(ValidationError::InvalidEmailDomain);
        }

        Ok(Self(email))
    }

    /// Get the email address as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Get the local part (before '@').
    pub fn local_part(&self) -> &str {
        self.0.split_once('@').map_or(self.0.as_str(), |(local, _)| local)
    }

    /// Get the domain part (after '@').
    pub fn domain(&self) -> &str {
        self.0.split_once('@').map_or("", |(_, domain)| domain)
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
