//! Contact store capability and its file-backed SQLite implementation.
//!
//! # Responsibility
//! - Define `ContactStore`, the only path through which contacts are read or
//!   written.
//! - Run each operation as its own unit: open connection, execute, release.
//!
//! # Invariants
//! - No transaction spans two store calls.
//! - Store operations never log contact field values, only ids and counts.

use crate::db::open_db;
use crate::model::contact::{Contact, ContactDraft, ContactId};
use crate::repo::contact_repo::{
    ContactRepository, RepoError, RepoResult, SqliteContactRepository,
};
use log::{info, warn};
use std::path::{Path, PathBuf};

/// Durable keeper of all contacts.
pub trait ContactStore {
    /// Ensures the backing table exists. Safe to call repeatedly.
    fn initialize(&self) -> RepoResult<()>;
    /// Inserts a contact and returns the id assigned by the store.
    fn create(&self, draft: &ContactDraft) -> RepoResult<ContactId>;
    /// Overwrites all fields of `id`; `RepoError::NotFound` when absent.
    fn update(&self, id: ContactId, draft: &ContactDraft) -> RepoResult<()>;
    /// Removes `id`. Absent ids are a no-op reported as `Ok(false)`.
    fn delete(&self, id: ContactId) -> RepoResult<bool>;
    fn get(&self, id: ContactId) -> RepoResult<Option<Contact>>;
    /// Contacts whose name contains `name_fragment`, in insertion order.
    fn search(&self, name_fragment: &str) -> RepoResult<Vec<Contact>>;
    /// All contacts ordered by name.
    fn list_all(&self) -> RepoResult<Vec<Contact>>;
}

/// `ContactStore` over a SQLite file, one connection per operation.
#[derive(Debug, Clone)]
pub struct SqliteContactStore {
    db_path: PathBuf,
}

impl SqliteContactStore {
    pub fn new(db_path: impl Into<PathBuf>) -> Self {
        Self {
            db_path: db_path.into(),
        }
    }

    pub fn db_path(&self) -> &Path {
        &self.db_path
    }

    fn with_repo<T>(
        &self,
        operation: &'static str,
        f: impl FnOnce(&SqliteContactRepository<'_>) -> RepoResult<T>,
    ) -> RepoResult<T> {
        let result = open_db(&self.db_path)
            .map_err(RepoError::from)
            .and_then(|conn| {
                let repo = SqliteContactRepository::try_new(&conn)?;
                f(&repo)
            });

        if let Err(err) = &result {
            warn!(
                "event=store_{} module=store status=error error={}",
                operation, err
            );
        }
        result
    }
}

impl ContactStore for SqliteContactStore {
    fn initialize(&self) -> RepoResult<()> {
        self.with_repo("initialize", |_| Ok(()))?;
        info!(
            "event=store_initialize module=store status=ok path={}",
            self.db_path.display()
        );
        Ok(())
    }

    fn create(&self, draft: &ContactDraft) -> RepoResult<ContactId> {
        let id = self.with_repo("create", |repo| repo.create_contact(draft))?;
        info!("event=store_create module=store status=ok contact_id={id}");
        Ok(id)
    }

    fn update(&self, id: ContactId, draft: &ContactDraft) -> RepoResult<()> {
        self.with_repo("update", |repo| repo.update_contact(id, draft))?;
        info!("event=store_update module=store status=ok contact_id={id}");
        Ok(())
    }

    fn delete(&self, id: ContactId) -> RepoResult<bool> {
        let removed = self.with_repo("delete", |repo| repo.delete_contact(id))?;
        info!("event=store_delete module=store status=ok contact_id={id} removed={removed}");
        Ok(removed)
    }

    fn get(&self, id: ContactId) -> RepoResult<Option<Contact>> {
        self.with_repo("get", |repo| repo.get_contact(id))
    }

    fn search(&self, name_fragment: &str) -> RepoResult<Vec<Contact>> {
        let hits = self.with_repo("search", |repo| repo.search_contacts(name_fragment))?;
        info!("event=store_search module=store status=ok hits={}", hits.len());
        Ok(hits)
    }

    fn list_all(&self) -> RepoResult<Vec<Contact>> {
        self.with_repo("list_all", |repo| repo.list_contacts())
    }
}
