//! Contact export

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use super::{TransferError, DELIMITER, HEADER, LINE_ENDING};
use crate::data::{Contact, ContactStore};

/// Write every stored contact to `sink`, newest first.
///
/// Returns the number of contacts written. On a write failure the sink may
/// hold a partial export.
pub fn export_all<W: Write>(store: &ContactStore, sink: W) -> Result<usize, TransferError> {
    let contacts = store.list_all()?;
    write_export(&contacts, sink)
}

/// Export to a file, creating or truncating it.
///
/// The listing is read before the file is opened, so a storage failure
/// leaves an existing file untouched.
pub fn export_to_path(store: &ContactStore, path: &Path) -> Result<usize, TransferError> {
    let contacts = store.list_all()?;
    let file = File::create(path).map_err(TransferError::Export)?;
    tracing::debug!(path = %path.display(), "Exporting contacts to file");
    write_export(&contacts, file)
}

fn write_export<W: Write>(contacts: &[Contact], sink: W) -> Result<usize, TransferError> {
    let mut writer = BufWriter::new(sink);
    write_rows(&mut writer, contacts).map_err(TransferError::Export)?;

    tracing::info!(count = contacts.len(), "Exported contacts");
    Ok(contacts.len())
}

fn write_rows<W: Write>(writer: &mut W, contacts: &[Contact]) -> std::io::Result<()> {
    write!(writer, "{HEADER}{LINE_ENDING}")?;
    for contact in contacts {
        write!(
            writer,
            "{}{DELIMITER}{}{DELIMITER}{}{LINE_ENDING}",
            contact.name, contact.phone, contact.email
        )?;
    }
    writer.flush()
}
