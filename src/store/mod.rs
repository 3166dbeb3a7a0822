//! Link record store boundary.
//!
//! The collection manager persists through this trait. Two backends ship
//! with the crate: SQLite ([`SqliteLinkStore`]) and a flat JSON snapshot
//! file ([`SnapshotStore`]) for when no database is configured.

pub mod snapshot_store;
pub mod sqlite_store;

pub use snapshot_store::SnapshotStore;
pub use sqlite_store::SqliteLinkStore;

use crate::types::errors::StoreError;
use crate::types::link::{Link, LinkDraft, LinkPatch};

/// Record-level persistence operations for links.
pub trait LinkStore {
    /// Returns all records, newest first.
    fn list_all(&self) -> Result<Vec<Link>, StoreError>;

    /// Inserts a draft. The store assigns a fresh unique id and the
    /// current timestamps, and returns the stored record.
    fn insert(&mut self, draft: &LinkDraft) -> Result<Link, StoreError>;

    /// Merges the patch into the record with the given id. No-op when the
    /// id is unknown. Never alters `id` or `created_at`.
    fn update_by_id(&mut self, id: &str, patch: &LinkPatch) -> Result<(), StoreError>;

    /// Deletes the record with the given id. No-op when the id is unknown.
    fn delete_by_id(&mut self, id: &str) -> Result<(), StoreError>;

    /// Rewrites the category of every record holding `old_name`.
    /// Returns the number of records affected.
    fn update_where_category(
        &mut self,
        old_name: &str,
        new_name: &str,
    ) -> Result<usize, StoreError>;
}

/// Current UNIX timestamp in milliseconds.
pub(crate) fn now_millis() -> i64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis() as i64
}
