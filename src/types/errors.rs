use std::fmt;

// === LinkError ===

/// Errors surfaced by link collection operations.
#[derive(Debug)]
pub enum LinkError {
    /// The submitted URL was empty or whitespace-only.
    EmptyUrl,
    /// The submitted URL failed syntax validation after normalization.
    InvalidUrl(String),
    /// The backing record store rejected or failed the operation.
    /// The in-memory collection is unchanged when this is returned.
    Persistence(String),
}

impl fmt::Display for LinkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LinkError::EmptyUrl => write!(f, "URL cannot be empty"),
            LinkError::InvalidUrl(url) => write!(f, "Invalid URL: {}", url),
            LinkError::Persistence(msg) => write!(f, "Persistence error: {}", msg),
        }
    }
}

impl std::error::Error for LinkError {}

impl From<StoreError> for LinkError {
    fn from(err: StoreError) -> Self {
        LinkError::Persistence(err.to_string())
    }
}

// === StoreError ===

/// Errors from a link record store implementation.
#[derive(Debug)]
pub enum StoreError {
    /// Database operation failed.
    Database(String),
    /// An I/O error occurred while reading or writing the snapshot file.
    Io(String),
    /// Failed to serialize or deserialize stored records.
    Serialization(String),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::Database(msg) => write!(f, "Store database error: {}", msg),
            StoreError::Io(msg) => write!(f, "Store I/O error: {}", msg),
            StoreError::Serialization(msg) => {
                write!(f, "Store serialization error: {}", msg)
            }
        }
    }
}

impl std::error::Error for StoreError {}
