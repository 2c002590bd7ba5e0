//! SQLite-backed store implementation

use std::path::Path;

use async_sqlite::Client;
use async_trait::async_trait;

use super::StoreProvider;
use crate::error::StoreError;

/// A durable session store backed by a single-table SQLite database.
///
/// This is the on-device equivalent of the platform key-value storage the
/// mobile app delegated session tokens to.
pub struct SqliteStore {
    client: Client,
}

impl SqliteStore {
    /// Opens (or creates) a store at the given path.
    pub async fn new(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let client = async_sqlite::ClientBuilder::new()
            .path(path)
            .open()
            .await?;

        client
            .conn(|conn| {
                conn.execute_batch(
                    "
                    CREATE TABLE IF NOT EXISTS kv (
                        key TEXT PRIMARY KEY,
                        value TEXT NOT NULL
                    );
                    ",
                )
            })
            .await?;

        Ok(Self { client })
    }
}

#[async_trait]
impl StoreProvider for SqliteStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let key = key.to_string();
        self.client
            .conn(move |conn| {
                let mut stmt = conn.prepare("SELECT value FROM kv WHERE key = ?")?;
                let mut rows = stmt.query([&key])?;
                match rows.next()? {
                    Some(row) => Ok(Some(row.get(0)?)),
                    None => Ok(None),
                }
            })
            .await
            .map_err(StoreError::from)
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let key = key.to_string();
        let value = value.to_string();
        self.client
            .conn(move |conn| {
                conn.execute(
                    "INSERT INTO kv (key, value) VALUES (?, ?)
                     ON CONFLICT(key) DO UPDATE SET value = excluded.value",
                    rusqlite::params![&key, &value],
                )
            })
            .await?;

        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), StoreError> {
        let key = key.to_string();
        self.client
            .conn(move |conn| conn.execute("DELETE FROM kv WHERE key = ?", [&key]))
            .await?;

        Ok(())
    }

    async fn clear(&self) -> Result<(), StoreError> {
        self.client
            .conn(|conn| conn.execute("DELETE FROM kv", []))
            .await?;

        Ok(())
    }
}
