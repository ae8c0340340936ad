//! Application facade used by the front end
//!
//! [`App`] wraps the contact store and the bulk transfer functions, keeps the
//! displayed listing in a [`ContactListCache`], and turns outcomes into
//! [`Notice`]s. Every store call runs on tokio's blocking pool.

mod cache;
mod notice;

use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::data::{Contact, ContactDraft, ContactStore, Database};
use crate::transfer;

pub use cache::ContactListCache;
pub use notice::{Notice, NoticeLevel, EMPTY_STATE};

/// Front-end state: the store handle plus the cached listing
#[derive(Debug)]
pub struct App {
    store: ContactStore,
    cache: ContactListCache,
}

impl App {
    pub fn new(db: &Database) -> Self {
        Self {
            store: ContactStore::new(db.connection()),
            cache: ContactListCache::new(),
        }
    }

    /// Contacts as of the last refresh, newest first
    pub fn contacts(&self) -> &[Contact] {
        self.cache.contacts()
    }

    pub fn cache(&self) -> &ContactListCache {
        &self.cache
    }

    /// Message to show instead of an empty listing
    pub fn empty_state_message(&self) -> Option<&'static str> {
        self.cache.is_empty().then_some(EMPTY_STATE)
    }

    /// Current field values of a cached contact, for prefilling an edit
    pub fn draft_for(&self, id: i64) -> Option<ContactDraft> {
        self.cache.find(id).map(ContactDraft::from)
    }

    /// Reload the cached listing from the store
    pub async fn refresh(&mut self) -> Result<()> {
        let store = self.store.clone();
        let contacts = run_blocking(move || store.list_all())
            .await?
            .context("Failed to load contacts")?;
        self.cache.replace(contacts);
        Ok(())
    }

    pub async fn add_contact(&mut self, draft: ContactDraft) -> Result<Notice> {
        if !draft.is_complete() {
            return Ok(Notice::incomplete());
        }

        let store = self.store.clone();
        run_blocking(move || store.create(&draft.name, &draft.phone, &draft.email))
            .await?
            .context("Failed to save contact")?;

        self.after_mutation().await?;
        Ok(Notice::saved())
    }

    pub async fn edit_contact(&mut self, id: i64, draft: ContactDraft) -> Result<Notice> {
        if !draft.is_complete() {
            return Ok(Notice::incomplete());
        }

        let store = self.store.clone();
        let changed =
            run_blocking(move || store.update(id, &draft.name, &draft.phone, &draft.email))
                .await?
                .context("Failed to update contact")?;

        self.after_mutation().await?;
        if changed == 0 {
            return Ok(Notice::not_found(id));
        }
        Ok(Notice::updated())
    }

    pub async fn delete_contact(&mut self, id: i64) -> Result<Notice> {
        let store = self.store.clone();
        run_blocking(move || store.delete(id))
            .await?
            .context("Failed to delete contact")?;

        self.after_mutation().await?;
        Ok(Notice::deleted())
    }

    /// Export every contact to `path`. Failures are reported as a notice.
    pub async fn export_to(&self, path: PathBuf) -> Notice {
        let store = self.store.clone();
        match run_blocking(move || transfer::export_to_path(&store, &path)).await {
            Ok(Ok(_)) => Notice::exported(),
            Ok(Err(e)) => Notice::export_failed(e),
            Err(e) => Notice::export_failed(e),
        }
    }

    /// Import contacts from `path`. Failures are reported as a notice; the
    /// listing is refreshed either way since a failed import may have
    /// created some contacts. If that refresh fails the cache stays stale
    /// and the import notice is still returned.
    pub async fn import_from(&mut self, path: PathBuf) -> Result<Notice> {
        let store = self.store.clone();
        let notice = match run_blocking(move || transfer::import_from_path(&store, &path)).await
        {
            Ok(Ok(count)) => Notice::imported(count),
            Ok(Err(e)) => Notice::import_failed(e),
            Err(e) => Notice::import_failed(e),
        };

        if let Err(e) = self.after_mutation().await {
            tracing::warn!(error = ?e, "Failed to reload contacts after import");
        }
        Ok(notice)
    }

    async fn after_mutation(&mut self) -> Result<()> {
        self.cache.invalidate();
        self.refresh().await
    }
}

/// Run a blocking store call off the async worker threads
async fn run_blocking<F, T>(f: F) -> Result<T>
where
    F: FnOnce() -> T + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(f)
        .await
        .context("Storage task failed")
}
