//! Contact model representing a person in an address book.

use crate::domain::{
    ContactId, ContactIdSequence, EmailAddress, Name, PhoneNumber, ValidationError,
};
use std::fmt;

/// A validated contact record.
///
/// The ID is fixed at construction. Name, email and phone number can only
/// change through their setters, which run the same checks as construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Contact {
    /// Unique identifier, taken from the sequence on successful construction
    id: ContactId,

    /// Lower-case name
    name: Name,

    /// Email whose local part equalled the name when it was set
    email: EmailAddress,

    /// Digits only
    phone_number: PhoneNumber,
}

impl Contact {
    /// Construct a contact, validating name, then email, then phone number.
    ///
    /// The email is checked against the freshly validated name. An ID is drawn
    /// from `ids` only after every field passed, so a rejected contact leaves
    /// the sequence untouched.
    ///
    /// # Errors
    ///
    /// The `ValidationError` of the first rule violated, or
    /// `ValidationError::IdsExhausted` when `ids` has no IDs left.
    pub fn new(
        name: &str,
        email: &str,
        phone_number: &str,
        ids: &mut ContactIdSequence,
    ) -> Result<Self, ValidationError> {
        let name = Name::contact(name)?;
        let email = EmailAddress::for_name(email, &name)?;
        let phone_number = PhoneNumber::new(phone_number)?;
        let id = ids.next_id().ok_or(ValidationError::IdsExhausted)?;

        Ok(Self {
            id,
            name,
            email,
            phone_number,
        })
    }

    pub fn id(&self) -> ContactId {
        self.id
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn email(&self) -> &str {
        self.email.as_str()
    }

    pub fn phone_number(&self) -> &str {
        self.phone_number.as_str()
    }

    /// Rename the contact.
    ///
    /// The stored email is left as is, even if its local part no longer
    /// matches the new name.
    pub fn set_name(&mut self, name: &str) -> Result<(), ValidationError> {
        self.name = Name::contact(name)?;
        Ok(())
    }

    /// Replace the email. Its local part must equal the current name.
    pub fn set_email(&mut self, email: &str) -> Result<(), ValidationError> {
        self.email = EmailAddress::for_name(email, &self.name)?;
        Ok(())
    }

    pub fn set_phone_number(&mut self, phone_number: &str) -> Result<(), ValidationError> {
        self.phone_number = PhoneNumber::new(phone_number)?;
        Ok(())
    }
}

/// Renders as `IIII,name,email,phone`.
impl fmt::Display for Contact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{},{},{},{}",
            self.id, self.name, self.email, self.phone_number
        )
    }
}
