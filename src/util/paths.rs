//! Where the contact book keeps its files
//!
//! Everything lives under one data directory: the database, the config file
//! and the log. The directory is `~/.contactbook` unless `--data-dir` names
//! another one.

use std::path::PathBuf;
use std::sync::OnceLock;

static DATA_DIR: OnceLock<PathBuf> = OnceLock::new();

/// Fix the data directory for this process.
///
/// Only the first call counts; later calls are logged and ignored.
pub fn init_data_dir(custom_path: Option<PathBuf>) {
    let requested = custom_path.unwrap_or_else(home_data_dir);
    if let Err(requested) = DATA_DIR.set(requested) {
        tracing::debug!(
            ignored = %requested.display(),
            "Data directory was already chosen"
        );
    }
}

fn home_data_dir() -> PathBuf {
    match dirs::home_dir() {
        Some(home) => home.join(".contactbook"),
        None => PathBuf::from(".contactbook"),
    }
}

pub fn data_dir() -> PathBuf {
    DATA_DIR.get().cloned().unwrap_or_else(home_data_dir)
}

/// Default contacts database, used when the config names none
pub fn database_path() -> PathBuf {
    data_dir().join("contactbook.db")
}

pub fn logs_dir() -> PathBuf {
    data_dir().join("logs")
}

pub fn log_file_path() -> PathBuf {
    logs_dir().join("contactbook.log")
}

pub fn config_path() -> PathBuf {
    data_dir().join("config.toml")
}
