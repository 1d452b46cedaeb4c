//! Key-value store trait and the in-memory backend.

use crate::KvError;
use serde::{de::DeserializeOwned, Serialize};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// A key-value store with automatic JSON serialization.
///
/// Values round-trip exactly: `set` followed by `get` reproduces the value
/// that was written, for any type implementing `Serialize` and
/// `DeserializeOwned`.
pub trait KeyValue {
    /// Get a value by key. Returns `None` if the key doesn't exist.
    fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, KvError>;

    /// Set a value, replacing any previous value for the key.
    fn set<T: Serialize>(&self, key: &str, value: &T) -> Result<(), KvError>;

    /// Delete a value. Deleting a missing key is not an error.
    fn delete(&self, key: &str) -> Result<(), KvError>;

    /// Check whether a key exists.
    fn exists(&self, key: &str) -> Result<bool, KvError>;
}

/// In-memory key-value store.
///
/// Cloning is cheap and clones share the same underlying map, so a store
/// handed to a cart store and a test can observe each other's writes.
#[derive(Clone, Default)]
pub struct MemoryKv {
    entries: Arc<Mutex<HashMap<String, Vec<u8>>>>,
}

impl MemoryKv {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored keys.
    pub fn len(&self) -> usize {
        self.entries.lock().map(|m| m.len()).unwrap_or(0)
    }

    /// Check whether the store holds no keys.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, HashMap<String, Vec<u8>>>, KvError> {
        self.entries
            .lock()
            .map_err(|_| KvError::StoreError("store lock poisoned".to_string()))
    }
}

impl KeyValue for MemoryKv {
    fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, KvError> {
        let entries = self.lock()?;
        match entries.get(key) {
            Some(bytes) => {
                let value: T = serde_json::from_slice(bytes)?;
                Ok(Some(value))
            }
            None => Ok(None),
        }
    }

    fn set<T: Serialize>(&self, key: &str, value: &T) -> Result<(), KvError> {
        let bytes = serde_json::to_vec(value)?;
        self.lock()?.insert(key.to_string(), bytes);
        Ok(())
    }

    fn delete(&self, key: &str) -> Result<(), KvError> {
        self.lock()?.remove(key);
        Ok(())
    }

    fn exists(&self, key: &str) -> Result<bool, KvError> {
        Ok(self.lock()?.contains_key(key))
    }
}
