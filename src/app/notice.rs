//! User-facing notices produced by [`super::App`]

use std::fmt;

pub const EMPTY_STATE: &str = "No data found!\nAdd or import new data.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Error,
}

/// A short message describing the outcome of an action
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Info,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            message: message.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.level == NoticeLevel::Error
    }

    pub fn saved() -> Self {
        Self::info("Data saved successfully")
    }

    pub fn updated() -> Self {
        Self::info("Data updated successfully")
    }

    pub fn deleted() -> Self {
        Self::info("Data deleted successfully")
    }

    pub fn exported() -> Self {
        Self::info("Data exported successfully")
    }

    pub fn imported(count: usize) -> Self {
        Self::info(format!("{count} contacts imported successfully"))
    }

    pub fn incomplete() -> Self {
        Self::error("Please fill all fields")
    }

    pub fn not_found(id: i64) -> Self {
        Self::error(format!("No contact with id {id}"))
    }

    pub fn export_failed(err: impl fmt::Display) -> Self {
        Self::error(format!("Export failed: {err}"))
    }

    pub fn import_failed(err: impl fmt::Display) -> Self {
        Self::error(format!("Import failed: {err}"))
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}
