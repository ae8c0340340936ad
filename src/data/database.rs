//! SQLite database management

use rusqlite::Connection;
use std::path::PathBuf;
use std::sync::{Arc, Mutex, MutexGuard};
use thiserror::Error;

use super::migrations;

#[derive(Error, Debug)]
pub enum DatabaseError {
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
    #[error("Failed to create data directory: {0}")]
    CreateDir(std::io::Error),
    #[error("Lock poisoned")]
    LockPoisoned,
    #[error("Database schema version {found} is newer than supported version {supported}")]
    SchemaTooNew { found: i32, supported: i32 },
}

/// Database connection wrapper
///
/// Holds the single connection used for the lifetime of the process. Every
/// store built from [`Database::connection`] shares it, and calls are
/// serialized through the mutex.
#[derive(Clone)]
pub struct Database {
    conn: Arc<Mutex<Connection>>,
    /// Path to the database file
    pub path: PathBuf,
}

impl Database {
    /// Open or create a database at the specified path
    pub fn open(path: PathBuf) -> Result<Self, DatabaseError> {
        Self::open_with_version(path, migrations::SCHEMA_VERSION)
    }

    /// Open a database and bring its schema to `version`.
    ///
    /// A stored version older than `version` discards every contact.
    pub fn open_with_version(path: PathBuf, version: i32) -> Result<Self, DatabaseError> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(DatabaseError::CreateDir)?;
        }

        let mut conn = Connection::open(&path)?;
        migrations::run_migrations(&mut conn, version)?;

        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
            path,
        })
    }

    /// Open a private in-memory database
    pub fn open_in_memory() -> Result<Self, DatabaseError> {
        let mut conn = Connection::open_in_memory()?;
        migrations::run_migrations(&mut conn, migrations::SCHEMA_VERSION)?;

        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
            path: PathBuf::from(":memory:"),
        })
    }

    /// Get a reference to the connection (for stores)
    pub fn connection(&self) -> Arc<Mutex<Connection>> {
        self.conn.clone()
    }

    /// Execute a closure with the connection
    pub fn with_connection<F, T>(&self, f: F) -> Result<T, DatabaseError>
    where
        F: FnOnce(&Connection) -> rusqlite::Result<T>,
    {
        let conn = lock(&self.conn)?;
        f(&conn).map_err(DatabaseError::Sqlite)
    }
}

/// Lock a shared connection, mapping poisoning to a storage error.
pub(crate) fn lock(
    conn: &Mutex<Connection>,
) -> Result<MutexGuard<'_, Connection>, DatabaseError> {
    conn.lock().map_err(|_| DatabaseError::LockPoisoned)
}

impl std::fmt::Debug for Database {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Database")
            .field("path", &self.path)
            .finish()
    }
}
