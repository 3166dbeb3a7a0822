use serde::{Deserialize, Serialize};

/// Represents one saved link.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Link {
    pub id: String,
    pub url: String,
    pub title: String,
    pub category: String,
    pub favicon: Option<String>,
    /// Unix milliseconds. Ordering key for the most-recent-first collection.
    pub created_at: i64,
    pub updated_at: i64,
}

impl Link {
    /// Merges a patch into this link, bumping `updated_at`.
    ///
    /// `id` and `created_at` are never touched.
    pub fn apply_patch(&mut self, patch: &LinkPatch, now: i64) {
        if let Some(url) = &patch.url {
            self.url = url.clone();
        }
        if let Some(title) = &patch.title {
            self.title = title.clone();
        }
        if let Some(category) = &patch.category {
            self.category = category.clone();
        }
        if let Some(favicon) = &patch.favicon {
            self.favicon = favicon.clone();
        }
        self.updated_at = now;
    }
}

/// Insert payload for a new link. The store assigns the id and timestamps
/// and returns the full [`Link`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinkDraft {
    pub url: String,
    pub title: String,
    pub category: String,
    pub favicon: Option<String>,
}

/// Partial update for an existing link. `None` fields are left untouched.
///
/// `favicon` is doubly optional: `Some(Some(url))` sets it, `Some(None)`
/// clears it, `None` leaves it alone.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LinkPatch {
    pub url: Option<String>,
    pub title: Option<String>,
    pub category: Option<String>,
    pub favicon: Option<Option<String>>,
}

impl LinkPatch {
    /// True when the patch carries no fields at all.
    pub fn is_empty(&self) -> bool {
        self.url.is_none()
            && self.title.is_none()
            && self.category.is_none()
            && self.favicon.is_none()
    }
}
