pub mod app;
pub mod cli;
pub mod config;
pub mod data;
pub mod transfer;
pub mod util;

pub use app::{App, ContactListCache, Notice, NoticeLevel};
pub use config::Config;
pub use data::{Contact, ContactDraft, ContactStore, Database, DatabaseError};
pub use transfer::{export_all, import_all, TransferError};
