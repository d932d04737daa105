//! Key/value persistence for preferences and workspace snapshots.
//!
//! Values are JSON strings. [`KvStore`](crate::db::kv::KvStore) keeps them in
//! SQLite; [`MemoryProvider`] keeps them in a map and is what tests use.

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::collections::HashMap;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),
    #[error("invalid stored value: {0}")]
    Json(#[from] serde_json::Error),
    #[error("storage unavailable: {0}")]
    Io(#[from] std::io::Error),
}

pub trait PersistenceProvider {
    fn load(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn save(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// Loads and decodes the JSON stored under `key`.
pub fn load_json<T, P>(provider: &P, key: &str) -> Result<Option<T>, StorageError>
where
    T: DeserializeOwned,
    P: PersistenceProvider + ?Sized,
{
    match provider.load(key)? {
        Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
        None => Ok(None),
    }
}

pub fn save_json<T, P>(provider: &mut P, key: &str, value: &T) -> Result<(), StorageError>
where
    T: Serialize + ?Sized,
    P: PersistenceProvider + ?Sized,
{
    let raw = serde_json::to_string(value)?;
    provider.save(key, &raw)
}

#[derive(Debug, Clone, Default)]
pub struct MemoryProvider {
    values: HashMap<String, String>,
}

impl MemoryProvider {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PersistenceProvider for MemoryProvider {
    fn load(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.values.get(key).cloned())
    }

    fn save(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
