//! Domain validation errors.

use thiserror::Error;

/// Errors that can occur while validating contact and address book data.
///
/// The `Display` output of every variant is the exact message shown to the user.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Contact name is empty.
    #[error("name must be at least one character long")]
    EmptyName,

    /// Contact name contains something other than `a-z`.
    #[error("name must only consist of lower-case letters")]
    InvalidName,

    /// Address book name is empty.
    #[error("name of addressbook must be at least one character long")]
    EmptyBookName,

    /// Address book name contains something other than `a-z`.
    #[error("name of addressbook must only consist of lower-case letters")]
    InvalidBookName,

    /// Email does not split into exactly a local part and a domain.
    #[error("malformed email address")]
    MalformedEmail,

    /// Email local part differs from the contact name.
    #[error("email username must equal contact name")]
    EmailNameMismatch,

    /// Email domain is not `letters.letters{2,4}`.
    #[error("email domain part is invalid")]
    InvalidEmailDomain,

    /// Phone number is not 3 to 15 ASCII digits.
    #[error("invalid phone number")]
    InvalidPhone,

    /// Every contact ID has already been handed out.
    #[error("no contact IDs left")]
    IdsExhausted,

    /// A contact with the given ID exists but carries another name.
    #[error("name and ID do not match any contact")]
    NameIdMismatch,
}
