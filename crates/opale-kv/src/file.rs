//! File-backed key-value store.

use crate::{KeyValue, KvError};
use serde::{de::DeserializeOwned, Serialize};
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

/// Key-value store that keeps one JSON document per key in a directory.
///
/// Writes are plain file writes with no syncing or locking; persistence is
/// best-effort by contract, so a torn write at worst loses the value.
pub struct FileKv {
    root: PathBuf,
}

impl FileKv {
    /// Open a store rooted at the given directory, creating it if needed.
    pub fn open(root: impl Into<PathBuf>) -> Result<Self, KvError> {
        let root = root.into();
        fs::create_dir_all(&root).map_err(|e| KvError::OpenError(e.to_string()))?;
        Ok(Self { root })
    }

    fn path_for(&self, key: &str) -> PathBuf {
        // Keys are fixed namespace identifiers, not user input.
        self.root.join(format!("{key}.json"))
    }
}

impl KeyValue for FileKv {
    fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, KvError> {
        match fs::read(self.path_for(key)) {
            Ok(bytes) => {
                let value: T = serde_json::from_slice(&bytes)?;
                Ok(Some(value))
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(KvError::StoreError(e.to_string())),
        }
    }

    fn set<T: Serialize>(&self, key: &str, value: &T) -> Result<(), KvError> {
        let bytes = serde_json::to_vec(value)?;
        fs::write(self.path_for(key), bytes).map_err(|e| KvError::StoreError(e.to_string()))
    }

    fn delete(&self, key: &str) -> Result<(), KvError> {
        match fs::remove_file(self.path_for(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(KvError::StoreError(e.to_string())),
        }
    }

    fn exists(&self, key: &str) -> Result<bool, KvError> {
        Ok(self.path_for(key).exists())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let kv = FileKv::open(dir.path()).unwrap();

        kv.set("state", &vec![1i64, 2, 3]).unwrap();
        let restored: Option<Vec<i64>> = kv.get("state").unwrap();
        assert_eq!(restored, Some(vec![1, 2, 3]));
    }

    #[test]
    fn test_missing_key_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let kv = FileKv::open(dir.path()).unwrap();

        let restored: Option<String> = kv.get("absent").unwrap();
        assert!(restored.is_none());
    }

    #[test]
    fn test_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        {
            let kv = FileKv::open(dir.path()).unwrap();
            kv.set("state", &"kept".to_string()).unwrap();
        }

        let kv = FileKv::open(dir.path()).unwrap();
        let restored: Option<String> = kv.get("state").unwrap();
        assert_eq!(restored.as_deref(), Some("kept"));
    }

    #[test]
    fn test_delete_missing_is_ok() {
        let dir = tempfile::tempdir().unwrap();
        let kv = FileKv::open(dir.path()).unwrap();
        kv.delete("absent").unwrap();
    }
}
