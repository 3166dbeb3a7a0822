//! SQLite-backed link store.
//!
//! Implements [`LinkStore`] over the shared [`Database`] connection,
//! with parameterized SQL throughout.

use std::sync::Arc;

use rusqlite::{params, types::ToSql};
use uuid::Uuid;

use crate::database::connection::Database;
use crate::types::errors::StoreError;
use crate::types::link::{Link, LinkDraft, LinkPatch};

use super::{now_millis, LinkStore};

/// Link store backed by the SQLite `links` table.
pub struct SqliteLinkStore {
    db: Arc<Database>,
}

impl SqliteLinkStore {
    /// Creates a new store over the shared database handle.
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    /// Reads a single `Link` row into a struct.
    fn row_to_link(row: &rusqlite::Row) -> rusqlite::Result<Link> {
        Ok(Link {
            id: row.get(0)?,
            url: row.get(1)?,
            title: row.get(2)?,
            category: row.get(3)?,
            favicon: row.get(4)?,
            created_at: row.get(5)?,
            updated_at: row.get(6)?,
        })
    }
}

impl LinkStore for SqliteLinkStore {
    /// Lists all links, newest first (rowid breaks same-millisecond ties).
    fn list_all(&self) -> Result<Vec<Link>, StoreError> {
        let conn = self.db.connection();
        let mut stmt = conn
            .prepare(
                "SELECT id, url, title, category, favicon, created_at, updated_at \
                 FROM links ORDER BY created_at DESC, rowid DESC",
            )
            .map_err(|e| StoreError::Database(e.to_string()))?;

        let rows = stmt
            .query_map([], Self::row_to_link)
            .map_err(|e| StoreError::Database(e.to_string()))?;

        let mut links = Vec::new();
        for row in rows {
            links.push(row.map_err(|e| StoreError::Database(e.to_string()))?);
        }
        Ok(links)
    }

    fn insert(&mut self, draft: &LinkDraft) -> Result<Link, StoreError> {
        let id = Uuid::new_v4().to_string();
        let now = now_millis();

        self.db
            .connection()
            .execute(
                "INSERT INTO links (id, url, title, category, favicon, created_at, updated_at) \
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
                params![id, draft.url, draft.title, draft.category, draft.favicon, now, now],
            )
            .map_err(|e| StoreError::Database(e.to_string()))?;

        Ok(Link {
            id,
            url: draft.url.clone(),
            title: draft.title.clone(),
            category: draft.category.clone(),
            favicon: draft.favicon.clone(),
            created_at: now,
            updated_at: now,
        })
    }

    /// Builds the SET clause from whichever patch fields are present.
    fn update_by_id(&mut self, id: &str, patch: &LinkPatch) -> Result<(), StoreError> {
        let mut sets: Vec<&str> = Vec::new();
        let mut values: Vec<Box<dyn ToSql>> = Vec::new();

        if let Some(url) = &patch.url {
            sets.push("url = ?");
            values.push(Box::new(url.clone()));
        }
        if let Some(title) = &patch.title {
            sets.push("title = ?");
            values.push(Box::new(title.clone()));
        }
        if let Some(category) = &patch.category {
            sets.push("category = ?");
            values.push(Box::new(category.clone()));
        }
        if let Some(favicon) = &patch.favicon {
            // `Some(None)` clears the column
            sets.push("favicon = ?");
            values.push(Box::new(favicon.clone()));
        }

        sets.push("updated_at = ?");
        values.push(Box::new(now_millis()));
        values.push(Box::new(id.to_string()));

        let sql = format!("UPDATE links SET {} WHERE id = ?", sets.join(", "));

        // Zero affected rows means the id is unknown; a no-op, not an error.
        self.db
            .connection()
            .execute(&sql, rusqlite::params_from_iter(values.iter().map(|v| v.as_ref())))
            .map_err(|e| StoreError::Database(e.to_string()))?;

        Ok(())
    }

    fn delete_by_id(&mut self, id: &str) -> Result<(), StoreError> {
        self.db
            .connection()
            .execute("DELETE FROM links WHERE id = ?1", params![id])
            .map_err(|e| StoreError::Database(e.to_string()))?;
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

        let affected = self
            .db
            .connection()
            .execute(
                "UPDATE links SET category = ?1, updated_at = ?2 WHERE category = ?3",
                params![new_name, now_millis(), old_name],
            )
            .map_err(|e| StoreError::Database(e.to_string()))?;

        Ok(affected)
    }
}
