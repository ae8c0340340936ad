//! Data persistence layer for contactbook
//!
//! This module provides SQLite-based storage for contact records.

mod contact;
mod database;
mod migrations;
mod models;

pub use contact::ContactStore;
pub use database::{Database, DatabaseError};
pub use migrations::SCHEMA_VERSION;
pub use models::{Contact, ContactDraft};
