//! Process-wide registry of address books.
//!
//! The registry owns every `AddressBook` by name together with the
//! `ContactIdSequence` used for all contacts created through it.

use crate::domain::{ContactId, ContactIdSequence};
use crate::error::{CommandError, CommandResult};
use crate::models::{AddressBook, Contact};
use std::collections::BTreeMap;
use tracing::debug;

/// Mapping from book name to book, plus the contact ID sequence.
#[derive(Debug, Default)]
pub struct AddressBookRegistry {
    books: BTreeMap<String, AddressBook>,
    ids: ContactIdSequence,
}

impl AddressBookRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new, empty book.
    ///
    /// The duplicate check runs before name validation.
    pub fn add_book(&mut self, name: &str) -> CommandResult<()> {
        if self.books.contains_key(name) {
            return Err(CommandError::BookAlreadyExists);
        }

        let book = AddressBook::new(name)?;
        self.books.insert(name.to_string(), book);
        debug!(book = name, "Address book registered");
        Ok(())
    }

    /// Remove a book and every contact in it.
    pub fn remove_book(&mut self, name: &str) -> CommandResult<AddressBook> {
        let book = self.books.remove(name).ok_or(CommandError::BookNotFound)?;
        debug!(book = name, contacts = book.len(), "Address book removed");
        Ok(book)
    }

    pub fn book(&self, name: &str) -> Option<&AddressBook> {
        self.books.get(name)
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    /// Validate a contact and add it to `book_name`.
    ///
    /// The book must exist before the contact is built, so a missing book
    /// never consumes an ID.
    pub fn add_contact(
        &mut self,
        book_name: &str,
        name: &str,
        email: &str,
        phone_number: &str,
    ) -> CommandResult<ContactId> {
        let book = self
            .books
            .get_mut(book_name)
            .ok_or_else(|| CommandError::TargetBookMissing(book_name.to_string()))?;

        let contact = Contact::new(name, email, phone_number, &mut self.ids)?;
        let id = contact.id();
        book.add_contact(contact);
        debug!(book = book_name, contact_id = %id, "Contact added");
        Ok(id)
    }

    /// Remove the contact called `name` with `id` from whichever book holds it.
    ///
    /// Books are searched in name order and the first book holding the ID
    /// decides the outcome: removal, or a name mismatch error.
    pub fn remove_contact(&mut self, name: &str, id: ContactId) -> CommandResult<()> {
        for book in self.books.values_mut() {
            if book.remove_contact(name, id)? {
                return Ok(());
            }
        }
        Err(CommandError::ContactNotFound)
    }

    /// Render a book, one contact per line.
    pub fn render_book(&self, name: &str) -> CommandResult<String> {
        self.books
            .get(name)
            .map(ToString::to_string)
            .ok_or(CommandError::BookNotFound)
    }

    /// The ID the next successfully added contact will receive, if any are left.
    pub fn next_contact_id(&self) -> Option<ContactId> {
        self.ids.peek()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ValidationError;

    #[test]
    fn test_add_book_rejects_duplicates() {
        let mut registry = AddressBookRegistry::new();
        registry.add_book("team").unwrap();
        assert_eq!(registry.add_book("team"), Err(CommandError::BookAlreadyExists));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_add_book_rejects_invalid_name() {
        let mut registry = AddressBookRegistry::new();
        assert_eq!(
            registry.add_book("Team"),
            Err(CommandError::Validation(ValidationError::InvalidBookName))
        );
        assert!(registry.is_empty());
    }

    #[test]
    fn test_remove_book() {
        let mut registry = AddressBookRegistry::new();
        registry.add_book("team").unwrap();
        assert_eq!(registry.remove_book("team").unwrap().name(), "team");
        assert_eq!(
            registry.remove_book("team").unwrap_err(),
            CommandError::BookNotFound
        );
    }

    #[test]
    fn test_add_contact_to_missing_book_keeps_sequence() {
        let mut registry = AddressBookRegistry::new();
        assert_eq!(
            registry.add_contact("team", "alice", "alice@kit.edu", "123"),
            Err(CommandError::TargetBookMissing("team".to_string()))
        );
        assert_eq!(registry.next_contact_id().map(ContactId::value), Some(1));
    }

    #[test]
    fn test_ids_are_global_across_books() {
        let mut registry = AddressBookRegistry::new();
        registry.add_book("home").unwrap();
        registry.add_book("work").unwrap();

        let a = registry.add_contact("home", "alice", "alice@kit.edu", "123").unwrap();
        let b = registry.add_contact("work", "bob", "bob@kit.edu", "456").unwrap();
        registry.remove_contact("alice", a).unwrap();
        let c = registry.add_contact("home", "carol", "carol@kit.edu", "789").unwrap();

        assert_eq!((a.value(), b.value(), c.value()), (1, 2, 3));
    }

    #[test]
    fn test_remove_contact_searches_all_books() {
        let mut registry = AddressBookRegistry::new();
        registry.add_book("home").unwrap();
        registry.add_book("work").unwrap();
        let id = registry.add_contact("work", "bob", "bob@kit.edu", "456").unwrap();

        assert_eq!(
            registry.remove_contact("alice", id),
            Err(CommandError::Validation(ValidationError::NameIdMismatch))
        );
        assert!(registry.book("work").unwrap().contains(id));

        registry.remove_contact("bob", id).unwrap();
        assert!(registry.book("work").unwrap().is_empty());
        assert_eq!(
            registry.remove_contact("bob", id),
            Err(CommandError::ContactNotFound)
        );
    }

    #[test]
    fn test_render_book() {
        let mut registry = AddressBookRegistry::new();
        registry.add_book("team").unwrap();
        assert_eq!(registry.render_book("team").unwrap(), "");

        registry
            .add_contact("team", "alice", "alice@kit.edu", "0721123456")
            .unwrap();
        assert_eq!(
            registry.render_book("team").unwrap(),
            "0001,alice,alice@kit.edu,0721123456"
        );
        assert_eq!(
            registry.render_book("other"),
            Err(CommandError::BookNotFound)
        );
    }
}
