//! Domain value objects and types.
//!
//! This module contains type-safe wrappers for the lexical rules of the
//! address book: contact IDs, names, email addresses and phone numbers.
//! Each value object validates at construction time so invalid data cannot
//! be represented in a `Contact` or an `AddressBook`.

pub mod contact_id;
pub mod email;
pub mod errors;
pub mod fields;
pub mod name;
pub mod phone;

pub use contact_id::{ContactId, ContactIdSequence};
pub use email::EmailAddress;
pub use errors::ValidationError;
pub use fields::split_fields;
pub use name::Name;
pub use phone::PhoneNumber;
