//! App Core for linkstash.
//!
//! Central struct wiring the database and the link collection manager,
//! managing application lifecycle.

use std::path::Path;
use std::sync::Arc;

use crate::database::connection::Database;
use crate::managers::link_manager::{LinkManager, LinkManagerTrait};
use crate::platform;
use crate::store::{SnapshotStore, SqliteLinkStore};
use crate::types::errors::LinkError;

/// Central application struct owning the persistence handle and the link
/// collection.
pub struct App {
    /// Shared database handle. `None` when the app runs on the JSON
    /// snapshot fallback instead of SQLite.
    pub db: Option<Arc<Database>>,
    pub links: LinkManager,
}

impl App {
    /// Opens (or creates) the SQLite database at the given path and loads
    /// the link collection.
    pub fn new<P: AsRef<Path>>(db_path: P) -> Result<Self, LinkError> {
        let db = Database::open(db_path).map_err(|e| LinkError::Persistence(e.to_string()))?;
        Self::from_database(Arc::new(db))
    }

    /// Opens the app on an in-memory database. Nothing survives the
    /// process; useful for demos and tests.
    pub fn open_in_memory() -> Result<Self, LinkError> {
        let db =
            Database::open_in_memory().map_err(|e| LinkError::Persistence(e.to_string()))?;
        Self::from_database(Arc::new(db))
    }

    /// Opens the app at the platform-default data location.
    pub fn open_default() -> Result<Self, LinkError> {
        let data_dir = platform::get_data_dir();
        std::fs::create_dir_all(&data_dir)
            .map_err(|e| LinkError::Persistence(e.to_string()))?;
        Self::new(data_dir.join("linkstash.db"))
    }

    /// Opens the app on the flat JSON snapshot fallback, for when no
    /// database is configured.
    pub fn with_snapshot<P: AsRef<Path>>(path: P) -> Result<Self, LinkError> {
        let store = SnapshotStore::open(path)?;
        let mut links = LinkManager::new(Box::new(store));
        links.load()?;
        Ok(Self { db: None, links })
    }

    fn from_database(db: Arc<Database>) -> Result<Self, LinkError> {
        let store = SqliteLinkStore::new(db.clone());
        let mut links = LinkManager::new(Box::new(store));
        links.load()?;
        Ok(Self {
            db: Some(db),
            links,
        })
    }
}
