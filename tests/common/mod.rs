//! Shared test utilities for contactbook

use contactbook::{Contact, ContactStore, Database};
use tempfile::TempDir;

/// Create a test database in a temporary directory with a store
pub fn create_test_store() -> (Database, ContactStore, TempDir) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let db = Database::open(dir.path().join("test.db")).expect("Failed to open database");
    let store = ContactStore::new(db.connection());
    (db, store, dir)
}

/// Field tuples of a listing, in listing order
pub fn tuples(contacts: &[Contact]) -> Vec<(String, String, String)> {
    contacts
        .iter()
        .map(|c| (c.name.clone(), c.phone.clone(), c.email.clone()))
        .collect()
}
