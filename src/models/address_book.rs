//! AddressBook model: a named collection of contacts keyed by ID.

use super::contact::Contact;
use crate::domain::{ContactId, Name, ValidationError};
use std::collections::BTreeMap;
use std::fmt;
use tracing::debug;

/// A named, independent collection of contacts.
///
/// Contacts are kept ordered by ID so rendering is deterministic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddressBook {
    name: Name,
    contacts: BTreeMap<ContactId, Contact>,
}

impl AddressBook {
    /// Create an empty book.
    ///
    /// # Errors
    ///
    /// `ValidationError::EmptyBookName` or `ValidationError::InvalidBookName`.
    pub fn new(name: &str) -> Result<Self, ValidationError> {
        Ok(Self {
            name: Name::book(name)?,
            contacts: BTreeMap::new(),
        })
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Insert a contact, replacing any contact already stored under its ID.
    pub fn add_contact(&mut self, contact: Contact) {
        self.contacts.insert(contact.id(), contact);
    }

    /// Remove the contact with `id` if it is called `name`.
    ///
    /// Returns `Ok(false)` when no contact with that ID lives in this book.
    ///
    /// # Errors
    ///
    /// `ValidationError::NameIdMismatch` when the ID exists under another name.
    /// The contact stays in the book.
    pub fn remove_contact(&mut self, name: &str, id: ContactId) -> Result<bool, ValidationError> {
        let Some(contact) = self.contacts.get(&id) else {
            return Ok(false);
        };

        if contact.name() != name {
            return Err(ValidationError::NameIdMismatch);
        }

        self.contacts.remove(&id);
        debug!(book = %self.name, contact_id = %id, "Contact was removed");
        Ok(true)
    }

    /// Look up a contact by ID.
    pub fn get(&self, id: ContactId) -> Option<&Contact> {
        self.contacts.get(&id)
    }

    pub fn contains(&self, id: ContactId) -> bool {
        self.contacts.contains_key(&id)
    }

    /// Contacts in ascending ID order.
    pub fn contacts(&self) -> impl Iterator<Item = &Contact> {
        self.contacts.values()
    }

    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }
}

/// One contact per line in ascending ID order, no trailing newline.
/// An empty book renders as the empty string.
impl fmt::Display for AddressBook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, contact) in self.contacts.values().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", contact)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ContactIdSequence;

    fn contact(ids: &mut ContactIdSequence, name: &str) -> Contact {
        Contact::new(name, &format!("{}@kit.edu", name), "0721123456", ids).unwrap()
    }

    #[test]
    fn test_address_book_name_validation() {
        assert!(AddressBook::new("team").is_ok());
        assert_eq!(
            AddressBook::new("").unwrap_err(),
            ValidationError::EmptyBookName
        );
        assert_eq!(
            AddressBook::new("team2").unwrap_err(),
            ValidationError::InvalidBookName
        );
    }

    #[test]
    fn test_empty_book_renders_empty() {
        let book = AddressBook::new("team").unwrap();
        assert!(book.is_empty());
        assert_eq!(book.to_string(), "");
    }

    #[test]
    fn test_render_is_sorted_by_id() {
        let mut ids = ContactIdSequence::new();
        let first = contact(&mut ids, "alice");
        let second = contact(&mut ids, "bob");
        let third = contact(&mut ids, "carol");

        let mut book = AddressBook::new("team").unwrap();
        book.add_contact(third);
        book.add_contact(first);
        book.add_contact(second);

        assert_eq!(
            book.to_string(),
            "0001,alice,alice@kit.edu,0721123456\n\
             0002,bob,bob@kit.edu,0721123456\n\
             0003,carol,carol@kit.edu,0721123456"
        );
    }

    #[test]
    fn test_add_contact_replaces_same_id() {
        let mut ids = ContactIdSequence::new();
        let original = contact(&mut ids, "alice");
        let mut renamed = original.clone();
        renamed.set_name("alicia").unwrap();

        let mut book = AddressBook::new("team").unwrap();
        book.add_contact(original);
        book.add_contact(renamed);

        assert_eq!(book.len(), 1);
        assert_eq!(book.contacts().next().unwrap().name(), "alicia");
    }

    #[test]
    fn test_remove_contact() {
        let mut ids = ContactIdSequence::new();
        let alice = contact(&mut ids, "alice");
        let id = alice.id();

        let mut book = AddressBook::new("team").unwrap();
        book.add_contact(alice);

        assert_eq!(book.remove_contact("alice", id), Ok(true));
        assert!(!book.contains(id));
        assert_eq!(book.remove_contact("alice", id), Ok(false));
    }

    #[test]
    fn test_remove_contact_name_mismatch_keeps_contact() {
        let mut ids = ContactIdSequence::new();
        let alice = contact(&mut ids, "alice");
        let id = alice.id();

        let mut book = AddressBook::new("team").unwrap();
        book.add_contact(alice);

        assert_eq!(
            book.remove_contact("bob", id),
            Err(ValidationError::NameIdMismatch)
        );
        assert_eq!(book.get(id).map(Contact::name), Some("alice"));
    }
}
