//! Schema versioning for the contacts table.
//!
//! The version lives in SQLite's `user_version` header field. There is no
//! incremental upgrade path: when the stored version is older than the one
//! requested, the contacts table is dropped and recreated empty.

use rusqlite::Connection;

use super::database::DatabaseError;

/// Schema version written by this build.
pub const SCHEMA_VERSION: i32 = 1;

const CREATE_CONTACTS_SQL: &str = r#"
    CREATE TABLE IF NOT EXISTS contacts (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL,
        phone TEXT NOT NULL,
        email TEXT NOT NULL
    );
"#;

const DROP_CONTACTS_SQL: &str = "DROP TABLE IF EXISTS contacts;";

/// Read the stored schema version (0 for a fresh database).
fn schema_version(conn: &Connection) -> rusqlite::Result<i32> {
    conn.query_row("PRAGMA user_version", [], |row| row.get(0))
}

/// Bring the schema to `target`.
///
/// This is the main entry point, run once when a [`super::Database`] opens.
pub fn run_migrations(conn: &mut Connection, target: i32) -> Result<(), DatabaseError> {
    let found = schema_version(conn)?;

    if found > target {
        tracing::error!(found, supported = target, "Database schema is newer than this build");
        return Err(DatabaseError::SchemaTooNew {
            found,
            supported: target,
        });
    }

    if found == target {
        conn.execute_batch(CREATE_CONTACTS_SQL)?;
        return Ok(());
    }

    let tx = conn.transaction()?;
    if found == 0 {
        tracing::info!(version = target, "Creating contacts schema");
    } else {
        tracing::warn!(
            from = found,
            to = target,
            "Schema version changed, discarding existing contacts"
        );
        tx.execute_batch(DROP_CONTACTS_SQL)?;
    }
    tx.execute_batch(CREATE_CONTACTS_SQL)?;
    tx.pragma_update(None, "user_version", target)?;
    tx.commit()?;

    Ok(())
}
