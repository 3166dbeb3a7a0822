//! Link Manager for linkstash.
//!
//! Implements `LinkManagerTrait` — the ordered, most-recent-first link
//! collection with add/remove/update/rename-category operations, mirrored
//! from a backing [`LinkStore`].
//!
//! Every mutation goes to the store first and is applied to the in-memory
//! collection only after the store acknowledges success. A failed store
//! call therefore leaves the collection exactly as it was; there is no
//! rollback path because nothing is applied optimistically.

use std::collections::BTreeMap;

use tracing::{debug, info, warn};

use crate::services::{category_service, search_service, url_service};
use crate::store::{self, LinkStore};
use crate::types::errors::LinkError;
use crate::types::link::{Link, LinkDraft, LinkPatch};

/// Trait defining link collection operations.
pub trait LinkManagerTrait {
    /// Replaces the in-memory collection with the store's contents.
    fn load(&mut self) -> Result<(), LinkError>;
    /// Normalizes, validates, classifies, and saves a raw URL submission.
    /// Returns the stored link.
    fn add_link(
        &mut self,
        raw_url: &str,
        title: Option<&str>,
        category: Option<&str>,
    ) -> Result<Link, LinkError>;
    /// Deletes a link. No-op when the id is unknown.
    fn remove_link(&mut self, id: &str) -> Result<(), LinkError>;
    /// Merges a partial edit into a link. No-op when the id is unknown.
    fn update_link(&mut self, id: &str, patch: LinkPatch) -> Result<(), LinkError>;
    /// Moves every link in `old_name` to `new_name`. Returns the number of
    /// links moved.
    fn rename_category(&mut self, old_name: &str, new_name: &str) -> Result<usize, LinkError>;
    /// The collection snapshot, most recent first.
    fn links(&self) -> &[Link];
    /// Case-insensitive text search over title, url, and category.
    fn search(&self, query: &str) -> Vec<&Link>;
    /// The collection partitioned by category, group keys lexicographic.
    fn grouped(&self) -> BTreeMap<&str, Vec<&Link>>;
    /// Distinct category names currently in use.
    fn categories(&self) -> Vec<String>;
}

/// Link collection backed by a record store, with an in-memory mirror.
pub struct LinkManager {
    store: Box<dyn LinkStore>,
    links: Vec<Link>,
}

impl LinkManager {
    /// Creates a manager over the given store with an empty collection.
    /// Call [`LinkManagerTrait::load`] to pull the stored records.
    pub fn new(store: Box<dyn LinkStore>) -> Self {
        Self {
            store,
            links: Vec::new(),
        }
    }
}

impl LinkManagerTrait for LinkManager {
    fn load(&mut self) -> Result<(), LinkError> {
        self.links = self.store.list_all()?;
        debug!(count = self.links.len(), "link collection loaded");
        Ok(())
    }

    /// Adds a link from a raw URL submission.
    ///
    /// The category falls back to domain detection and the title to a
    /// derived site name when the caller supplies neither. Validation
    /// failures surface before any store write is attempted.
    fn add_link(
        &mut self,
        raw_url: &str,
        title: Option<&str>,
        category: Option<&str>,
    ) -> Result<Link, LinkError> {
        let trimmed = raw_url.trim();
        if trimmed.is_empty() {
            warn!("rejected empty URL submission");
            return Err(LinkError::EmptyUrl);
        }

        let url = url_service::normalize(trimmed);
        if !url_service::is_valid(&url) {
            warn!(url = %url, "rejected malformed URL");
            return Err(LinkError::InvalidUrl(url));
        }

        let category = match category {
            Some(name) if !name.trim().is_empty() => name.trim().to_string(),
            _ => category_service::classify(&url),
        };
        let title = match title {
            Some(text) if !text.trim().is_empty() => text.trim().to_string(),
            _ => url_service::suggested_title(&url),
        };
        let favicon = url_service::favicon_url(&url);

        let draft = LinkDraft {
            url,
            title,
            category,
            favicon,
        };

        let link = self.store.insert(&draft)?;
        info!(id = %link.id, category = %link.category, "link added");

        // Most-recent-first: new links go to the front.
        self.links.insert(0, link.clone());
        Ok(link)
    }

    fn remove_link(&mut self, id: &str) -> Result<(), LinkError> {
        self.store.delete_by_id(id)?;

        let before = self.links.len();
        self.links.retain(|link| link.id != id);
        if self.links.len() == before {
            debug!(id, "remove for unknown link id ignored");
        } else {
            info!(id, "link removed");
        }
        Ok(())
    }

    fn update_link(&mut self, id: &str, patch: LinkPatch) -> Result<(), LinkError> {
        let Some(pos) = self.links.iter().position(|link| link.id == id) else {
            debug!(id, "update for unknown link id ignored");
            return Ok(());
        };

        let mut patch = patch;
        // An edited url must still satisfy the link url invariant.
        if let Some(raw) = &patch.url {
            let url = url_service::normalize(raw.trim());
            if !url_service::is_valid(&url) {
                warn!(url = %url, "rejected malformed URL in edit");
                return Err(LinkError::InvalidUrl(url));
            }
            patch.url = Some(url);
        }
        // A blank category would orphan the link; drop the field instead.
        if matches!(&patch.category, Some(name) if name.trim().is_empty()) {
            patch.category = None;
        }

        if patch.is_empty() {
            return Ok(());
        }

        self.store.update_by_id(id, &patch)?;
        self.links[pos].apply_patch(&patch, store::now_millis());
        info!(id, "link updated");
        Ok(())
    }

    fn rename_category(&mut self, old_name: &str, new_name: &str) -> Result<usize, LinkError> {
        let new_name = new_name.trim();
        if new_name.is_empty() || new_name == old_name {
            return Ok(0);
        }

        // Renaming onto an existing category name silently merges the two
        // groups; there is no uniqueness check.
        self.store.update_where_category(old_name, new_name)?;

        let now = store::now_millis();
        let mut moved = 0;
        for link in self.links.iter_mut().filter(|link| link.category == old_name) {
            link.category = new_name.to_string();
            link.updated_at = now;
            moved += 1;
        }

        info!(from = old_name, to = new_name, moved, "category renamed");
        Ok(moved)
    }

    fn links(&self) -> &[Link] {
        &self.links
    }

    fn search(&self, query: &str) -> Vec<&Link> {
        search_service::search_links(&self.links, query)
    }

    fn grouped(&self) -> BTreeMap<&str, Vec<&Link>> {
        search_service::group_by_category(&self.links)
    }

    fn categories(&self) -> Vec<String> {
        search_service::category_names(&self.links)
    }
}
