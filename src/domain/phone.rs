//! PhoneNumber value object.

use super::errors::ValidationError;
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

// Three digit groups with no separator. ASCII digits only.
static PHONE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[0-9]{1,4}[0-9]{1,4}[0-9]{1,7}$").expect("phone pattern is a valid regex")
});

/// A type-safe wrapper for phone numbers.
///
/// Valid numbers are 3 to 15 ASCII digits with no formatting characters.
///
/// # Example
///
/// ```
/// use address_book::domain::PhoneNumber;
///
/// let phone = PhoneNumber::new("0721123456").unwrap();
/// assert_eq!(phone.as_str(), "0721123456");
/// assert!(PhoneNumber::new("0721-123456").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// Create a new PhoneNumber, validating the format.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidPhone` if the phone format is invalid.
    pub fn new(phone: impl Into<String>) -> Result<Self, ValidationError> {
        let phone = phone.into();

        if !PHONE_PATTERN.is_match(&phone) {
            return Err(ValidationError::InvalidPhone);
        }

        Ok(Self(phone))
    }

    /// Get the phone number as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phone_valid() {
        let phone = PhoneNumber::new("0721123456").unwrap();
        assert_eq!(phone.as_str(), "0721123456");
    }

    #[test]
    fn test_phone_length_bounds() {
        assert!(PhoneNumber::new("12").is_err());
        assert!(PhoneNumber::new("123").is_ok());
        assert!(PhoneNumber::new("123456789012345").is_ok());
        assert!(PhoneNumber::new("1234567890123456").is_err());
    }

    #[test]
    fn test_phone_rejects_non_digits() {
        for bad in ["12a45", "", "+49721123", "0721 123", "0721-123", "\u{661}\u{662}\u{663}"] {
            assert_eq!(
                PhoneNumber::new(bad),
                Err(ValidationError::InvalidPhone),
                "{:?} should be rejected",
                bad
            );
        }
    }
}
