//! Contact list cache
//!
//! Holds the last listing fetched from the store so the front end can render
//! and look up contacts without another query. The store stays the source of
//! truth: the cache is marked stale after every mutation and reloaded.

use crate::data::Contact;

/// Last fetched contact listing, newest first
#[derive(Debug, Clone)]
pub struct ContactListCache {
    contacts: Vec<Contact>,
    stale: bool,
}

impl Default for ContactListCache {
    fn default() -> Self {
        Self::new()
    }
}

impl ContactListCache {
    /// An empty cache that needs loading
    pub fn new() -> Self {
        Self {
            contacts: Vec::new(),
            stale: true,
        }
    }

    /// Replace the cached listing with a fresh one
    pub fn replace(&mut self, contacts: Vec<Contact>) {
        self.contacts = contacts;
        self.stale = false;
    }

    /// Mark the listing as out of date
    pub fn invalidate(&mut self) {
        self.stale = true;
    }

    pub fn is_stale(&self) -> bool {
        self.stale
    }

    pub fn contacts(&self) -> &[Contact] {
        &self.contacts
    }

    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    /// Look up a cached contact by id
    pub fn find(&self, id: i64) -> Option<&Contact> {
        self.contacts.iter().find(|c| c.id == id)
    }
}
