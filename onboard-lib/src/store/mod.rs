//! Session key-value storage
//!
//! Provides a `StoreProvider` trait and implementations for the opaque
//! session values persisted after a successful signup. The store is an
//! async write-and-confirm primitive: each write completes (or fails)
//! before the caller issues the next.

mod memory;
mod sqlite;

pub use memory::*;
pub use sqlite::*;

use async_trait::async_trait;

use crate::error::StoreError;

/// Storage keys for the persisted session values.
pub mod keys {
    /// Session token issued by the account service.
    pub const JWT_TOKEN: &str = "@JWT_TOKEN";
    /// QR identifier string for the new account.
    pub const QR_STRING: &str = "@QR_STRING";
    /// Opaque user identifier.
    pub const USER_ID: &str = "@USER_ID";
}

/// Trait for session store providers.
///
/// Implementations persist string values by string keys. There is no
/// transactional guarantee across keys; a failed write leaves earlier
/// writes in place.
#[async_trait]
pub trait StoreProvider: Send + Sync {
    /// Retrieves a stored value by key.
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Stores a value, replacing any existing value for the key.
    async fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Removes a value from the store.
    async fn remove(&self, key: &str) -> Result<(), StoreError>;

    /// Clears all values from the store.
    async fn clear(&self) -> Result<(), StoreError>;
}
