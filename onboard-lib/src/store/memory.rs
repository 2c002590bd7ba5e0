//! In-memory store implementation using DashMap

use async_trait::async_trait;
use dashmap::DashMap;

use super::StoreProvider;
use crate::error::StoreError;

/// An in-memory session store backed by a concurrent hash map.
///
/// This is the default implementation for tests and ephemeral use; data is
/// lost when the process exits.
///
/// # Example
///
/// ```
/// use onboard_lib::store::MemoryStore;
///
/// let store = MemoryStore::new();
/// ```
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: DashMap<String, String>,
}

impl MemoryStore {
    /// Creates a new empty in-memory store.
    pub fn new() -> Self {
        Self {
            values: DashMap::new(),
        }
    }

    /// Returns the number of stored entries.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` if the store is empty.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

#[async_trait]
impl StoreProvider for MemoryStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.values.get(key).map(|entry| entry.value().clone()))
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), StoreError> {
        self.values.remove(key);
        Ok(())
    }

    async fn clear(&self) -> Result<(), StoreError> {
        self.values.clear();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::keys;

    #[tokio::test]
    async fn test_set_get_remove() {
        let store = MemoryStore::new();

        store.set(keys::JWT_TOKEN, "t1").await.unwrap();
        assert_eq!(
            store.get(keys::JWT_TOKEN).await.unwrap().as_deref(),
            Some("t1")
        );

        store.set(keys::JWT_TOKEN, "t2").await.unwrap();
        assert_eq!(
            store.get(keys::JWT_TOKEN).await.unwrap().as_deref(),
            Some("t2")
        );

        store.remove(keys::JWT_TOKEN).await.unwrap();
        assert!(store.get(keys::JWT_TOKEN).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_len_and_clear() {
        let store = MemoryStore::new();
        assert!(store.is_empty());

        store.set(keys::JWT_TOKEN, "t").await.unwrap();
        store.set(keys::QR_STRING, "q").await.unwrap();
        assert_eq!(store.len(), 2);

        // Replacing a value does not grow the store.
        store.set(keys::JWT_TOKEN, "t2").await.unwrap();
        assert_eq!(store.len(), 2);

        store.clear().await.unwrap();
        assert!(store.is_empty());
        assert_eq!(store.len(), 0);
    }
}
