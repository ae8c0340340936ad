//! Bulk transfer of contacts to and from delimited text
//!
//! The format is a header line followed by one `name,phone,email` line per
//! contact:
//!
//! ```text
//! Name,Phone,Email
//! Bob,222,b@x.com
//! Alice,111,a@x.com
//! ```
//!
//! Fields are written verbatim. There is no quoting, so a value containing a
//! comma does not survive an export/import round trip.

mod export;
mod import;

use thiserror::Error;

use crate::data::DatabaseError;

pub use export::{export_all, export_to_path};
pub use import::{import_all, import_from_path, parse_line};

/// Header written as the first line of every export
pub const HEADER: &str = "Name,Phone,Email";

/// Field separator
pub const DELIMITER: char = ',';

/// Line terminator used on export
#[cfg(windows)]
pub const LINE_ENDING: &str = "\r\n";
#[cfg(not(windows))]
pub const LINE_ENDING: &str = "\n";

#[derive(Error, Debug)]
pub enum TransferError {
    #[error("Could not write export: {0}")]
    Export(#[source] std::io::Error),
    #[error("Could not read import source: {0}")]
    Import(#[source] std::io::Error),
    #[error(transparent)]
    Storage(#[from] DatabaseError),
}
