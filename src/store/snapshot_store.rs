//! Flat-file fallback link store.
//!
//! Persists the whole collection as one JSON array-of-link file: read once
//! at open, rewritten wholesale on every mutation. No partial updates and
//! no format versioning; the file's newest-first order is the collection
//! order.

use std::fs;
use std::path::{Path, PathBuf};

use uuid::Uuid;

use crate::types::errors::StoreError;
use crate::types::link::{Link, LinkDraft, LinkPatch};

use super::{now_millis, LinkStore};

/// Link store backed by a single JSON snapshot file.
pub struct SnapshotStore {
    path: PathBuf,
    links: Vec<Link>,
}

impl SnapshotStore {
    /// Opens the store, loading the snapshot if the file exists.
    ///
    /// A missing file is an empty collection, not an error.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, StoreError> {
        let path = path.as_ref().to_path_buf();

        let links = if path.exists() {
            let content = fs::read_to_string(&path)
                .map_err(|e| StoreError::Io(format!("Failed to read snapshot file: {}", e)))?;
            serde_json::from_str(&content).map_err(|e| {
                StoreError::Serialization(format!("Failed to parse snapshot file: {}", e))
            })?
        } else {
            Vec::new()
        };

        Ok(Self { path, links })
    }

    /// Path of the backing snapshot file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Writes the given collection to disk, creating parent directories as
    /// needed. Called with the next state before it is committed in memory,
    /// so a failed write leaves the store unchanged.
    fn persist(&self, links: &[Link]) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                StoreError::Io(format!("Failed to create snapshot directory: {}", e))
            })?;
        }

        let json = serde_json::to_string_pretty(links).map_err(|e| {
            StoreError::Serialization(format!("Failed to serialize snapshot: {}", e))
        })?;

        fs::write(&self.path, json)
            .map_err(|e| StoreError::Io(format!("Failed to write snapshot file: {}", e)))?;

        Ok(())
    }
}

impl LinkStore for SnapshotStore {
    fn list_all(&self) -> Result<Vec<Link>, StoreError> {
        Ok(self.links.clone())
    }

    fn insert(&mut self, draft: &LinkDraft) -> Result<Link, StoreError> {
        let now = now_millis();
        let link = Link {
            id: Uuid::new_v4().to_string(),
            url: draft.url.clone(),
            title: draft.title.clone(),
            category: draft.category.clone(),
            favicon: draft.favicon.clone(),
            created_at: now,
            updated_at: now,
        };

        let mut next = self.links.clone();
        next.insert(0, link.clone());
        self.persist(&next)?;
        self.links = next;

        Ok(link)
    }

    fn update_by_id(&mut self, id: &str, patch: &LinkPatch) -> Result<(), StoreError> {
        let mut next = self.links.clone();
        let Some(link) = next.iter_mut().find(|link| link.id == id) else {
            return Ok(());
        };

        link.apply_patch(patch, now_millis());
        self.persist(&next)?;
        self.links = next;
        Ok(())
    }

    fn delete_by_id(&mut self, id: &str) -> Result<(), StoreError> {
        let mut next = self.links.clone();
        let before = next.len();
        next.retain(|link| link.id != id);

        if next.len() == before {
            return Ok(());
        }

        self.persist(&next)?;
        self.links = next;
        Ok(())
    }

    fn update_where_category(
        &mut self,
        old_name: &str,
        new_name: &str,
    ) -> Result<usize, StoreError> {
        if new_name.trim().is_empty() || old_name == new_name {
            return Ok(0);
        }

        let now = now_millis();
        let mut next = self.links.clone();
        let mut affected = 0;
        for link in next.iter_mut().filter(|link| link.category == old_name) {
            link.category = new_name.to_string();
            link.updated_at = now;
            affected += 1;
        }

        if affected == 0 {
            return Ok(0);
        }

        self.persist(&next)?;
        self.links = next;
        Ok(affected)
    }
}
