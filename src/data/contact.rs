//! Contact data access object

use super::database::{lock, DatabaseError};
use super::models::Contact;
use rusqlite::{params, Connection, OptionalExtension};
use std::sync::{Arc, Mutex};

/// Data access object for Contact operations
#[derive(Clone)]
pub struct ContactStore {
    conn: Arc<Mutex<Connection>>,
}

impl ContactStore {
    /// Create a new ContactStore
    pub fn new(conn: Arc<Mutex<Connection>>) -> Self {
        Self { conn }
    }

    /// Insert a new contact and return its assigned id
    pub fn create(&self, name: &str, phone: &str, email: &str) -> Result<i64, DatabaseError> {
        let conn = lock(&self.conn)?;
        conn.execute(
            "INSERT INTO contacts (name, phone, email) VALUES (?1, ?2, ?3)",
            params![name, phone, email],
        )?;
        let id = conn.last_insert_rowid();
        tracing::debug!(id, "Created contact");
        Ok(id)
    }

    /// Get all contacts, newest first
    pub fn list_all(&self) -> Result<Vec<Contact>, DatabaseError> {
        let conn = lock(&self.conn)?;
        let mut stmt =
            conn.prepare("SELECT id, name, phone, email FROM contacts ORDER BY id DESC")?;

        let contacts = stmt
            .query_map([], Self::row_to_contact)?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        Ok(contacts)
    }

    /// Get a contact by ID
    pub fn get_by_id(&self, id: i64) -> Result<Option<Contact>, DatabaseError> {
        let conn = lock(&self.conn)?;
        let contact = conn
            .query_row(
                "SELECT id, name, phone, email FROM contacts WHERE id = ?1",
                params![id],
                Self::row_to_contact,
            )
            .optional()?;
        Ok(contact)
    }

    /// Replace the text fields of a contact.
    ///
    /// Returns the number of rows changed; 0 means no contact has that id.
    pub fn update(
        &self,
        id: i64,
        name: &str,
        phone: &str,
        email: &str,
    ) -> Result<usize, DatabaseError> {
        let conn = lock(&self.conn)?;
        let changed = conn.execute(
            "UPDATE contacts SET name = ?2, phone = ?3, email = ?4 WHERE id = ?1",
            params![id, name, phone, email],
        )?;
        tracing::debug!(id, changed, "Updated contact");
        Ok(changed)
    }

    /// Delete a contact. Unknown ids are ignored.
    pub fn delete(&self, id: i64) -> Result<(), DatabaseError> {
        let conn = lock(&self.conn)?;
        let removed = conn.execute("DELETE FROM contacts WHERE id = ?1", params![id])?;
        tracing::debug!(id, removed, "Deleted contact");
        Ok(())
    }

    /// Number of stored contacts
    pub fn count(&self) -> Result<usize, DatabaseError> {
        let conn = lock(&self.conn)?;
        let count: i64 = conn.query_row("SELECT COUNT(*) FROM contacts", [], |row| row.get(0))?;
        Ok(count as usize)
    }

    /// Convert a database row to a Contact
    fn row_to_contact(row: &rusqlite::Row) -> rusqlite::Result<Contact> {
        Ok(Contact {
            id: row.get(0)?,
            name: row.get(1)?,
            phone: row.get(2)?,
            email: row.get(3)?,
        })
    }
}

impl std::fmt::Debug for ContactStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ContactStore").finish_non_exhaustive()
    }
}
