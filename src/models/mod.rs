//! Data models for address books and their contacts.

pub mod address_book;
pub mod contact;

pub use address_book::AddressBook;
pub use contact::Contact;
