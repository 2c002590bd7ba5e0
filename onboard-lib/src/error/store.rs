//! Session store error types

/// Errors that can occur while persisting or reading session values.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Database error from the SQLite-backed store.
    #[error("database error: {0}")]
    Database(#[from] async_sqlite::Error),

    /// Error from a custom store backend.
    #[error("store backend error: {0}")]
    Backend(String),
}

impl StoreError {
    /// Creates a backend error with the given description.
    pub fn backend(message: impl Into<String>) -> Self {
        Self::Backend(message.into())
    }
}
