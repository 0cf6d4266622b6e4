//! ContactId value object and its sequence generator.

use std::fmt;

/// A type-safe wrapper for contact IDs.
///
/// IDs are positive and only ever handed out by a [`ContactIdSequence`].
/// They display zero-padded to at least four digits.
///
/// # Example
///
/// ```
/// use address_book::domain::ContactIdSequence;
///
/// let mut ids = ContactIdSequence::new();
/// let id = ids.next_id().unwrap();
/// assert_eq!(id.value(), 1);
/// assert_eq!(id.to_string(), "0001");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ContactId(u32);

impl ContactId {
    /// Get the numeric value of the ID.
    pub fn value(self) -> u32 {
        self.0
    }

    /// Look up form of a user supplied ID.
    ///
    /// Returns `None` for values no sequence can ever produce (zero or negative).
    pub fn from_raw(raw: i32) -> Option<Self> {
        u32::try_from(raw).ok().filter(|v| *v > 0).map(Self)
    }
}

impl fmt::Display for ContactId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}", self.0)
    }
}

/// Monotonic source of contact IDs.
///
/// Starts at 1, never resets and never hands out the same value twice.
/// Once `u32::MAX` has been handed out the sequence is exhausted.
/// The sequence is owned by whoever constructs contacts, so every
/// registry (and every test) starts from a clean counter.
#[derive(Debug, Clone)]
pub struct ContactIdSequence {
    next: Option<u32>,
}

impl Default for ContactIdSequence {
    fn default() -> Self {
        Self::new()
    }
}

impl ContactIdSequence {
    /// Create a sequence whose first ID is 1.
    pub fn new() -> Self {
        Self { next: Some(1) }
    }

    /// Take the next ID, advancing the sequence.
    ///
    /// Returns `None` once every ID has been handed out.
    pub fn next_id(&mut self) -> Option<ContactId> {
        let id = self.next?;
        self.next = id.checked_add(1);
        Some(ContactId(id))
    }

    /// The ID the next call to [`next_id`](Self::next_id) will return.
    pub fn peek(&self) -> Option<ContactId> {
        self.next.map(ContactId)
    }

    #[cfg(test)]
    pub(crate) fn starting_at(next: u32) -> Self {
        Self { next: Some(next) }
    }
}
