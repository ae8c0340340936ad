//! Data models for contacts

use serde::{Deserialize, Serialize};

/// A stored contact record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    /// Store-assigned identifier, increasing and never reused
    pub id: i64,
    pub name: String,
    pub phone: String,
    pub email: String,
}

impl Contact {
    /// The text fields without the id
    pub fn fields(&self) -> (&str, &str, &str) {
        (&self.name, &self.phone, &self.email)
    }
}

/// The editable fields of a contact, before an id is assigned
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactDraft {
    pub name: String,
    pub phone: String,
    pub email: String,
}

impl ContactDraft {
    pub fn new(
        name: impl Into<String>,
        phone: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            phone: phone.into(),
            email: email.into(),
        }
    }

    /// Whether every field is filled in
    pub fn is_complete(&self) -> bool {
        !self.name.is_empty() && !self.phone.is_empty() && !self.email.is_empty()
    }
}

impl From<&Contact> for ContactDraft {
    fn from(contact: &Contact) -> Self {
        Self::new(&contact.name, &contact.phone, &contact.email)
    }
}
