//! Error types for the storage layer.

use thiserror::Error;

/// Result type alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors that can occur during storage operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// No note exists with the given id, or the id is not valid ObjectId hex.
    #[error("note not found: {0}")]
    NotFound(String),

    /// The store rejected the document shape.
    #[error("document rejected by store: {0}")]
    Validation(String),

    /// Transport or database failure.
    #[error("database error: {0}")]
    Database(#[from] mongodb::error::Error),
}

impl StoreError {
    /// Whether this error means the requested note does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}
