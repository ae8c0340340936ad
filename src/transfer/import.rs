//! Contact import

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use super::{TransferError, DELIMITER};
use crate::data::{ContactDraft, ContactStore};

/// Parse one data line into a draft.
///
/// The first three fields are trimmed and used in order; extra fields are
/// ignored. Lines with fewer than three fields yield `None`.
pub fn parse_line(line: &str) -> Option<ContactDraft> {
    let mut fields = line.split(DELIMITER);
    let name = fields.next()?;
    let phone = fields.next()?;
    let email = fields.next()?;
    Some(ContactDraft::new(name.trim(), phone.trim(), email.trim()))
}

/// Create a contact for every well-formed line of `source`.
///
/// The first line is a header and is skipped without being checked. Returns
/// the number of contacts created. Contacts created before a failure are
/// kept.
pub fn import_all<R: BufRead>(store: &ContactStore, source: R) -> Result<usize, TransferError> {
    let mut lines = source.lines();

    match lines.next() {
        None => return Ok(0),
        Some(header) => {
            header.map_err(TransferError::Import)?;
        }
    }

    let mut count = 0;
    for (index, line) in lines.enumerate() {
        let line = line.map_err(TransferError::Import)?;
        match parse_line(&line) {
            Some(draft) => {
                store.create(&draft.name, &draft.phone, &draft.email)?;
                count += 1;
            }
            // Line numbers are 1-based and the header is line 1
            None => tracing::debug!(line = index + 2, "Skipping malformed row"),
        }
    }

    tracing::info!(count, "Imported contacts");
    Ok(count)
}

/// Import from a file
pub fn import_from_path(store: &ContactStore, path: &Path) -> Result<usize, TransferError> {
    let file = File::open(path).map_err(TransferError::Import)?;
    tracing::debug!(path = %path.display(), "Importing contacts from file");
    import_all(store, BufReader::new(file))
}
