//! Key-value backends
//!
//! The tracker persists a handful of named text documents. [`KeyValueStore`]
//! is the seam between the storage coordinator and where those documents
//! actually live.

use std::collections::HashMap;
use std::path::PathBuf;

use crate::error::{BudgetError, BudgetResult};

use super::file_io::{read_text, remove_file, write_text_atomic};

/// A synchronous string-to-string store
pub trait KeyValueStore {
    /// Read the value stored under `key`, if any
    fn get(&self, key: &str) -> BudgetResult<Option<String>>;

    /// Store `value` under `key`, replacing any previous value
    fn set(&mut self, key: &str, value: &str) -> BudgetResult<()>;

    /// Delete `key`; deleting a missing key is not an error
    fn remove(&mut self, key: &str) -> BudgetResult<()>;
}

/// Stores each key as `<dir>/<key>.json`, written atomically
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    /// Path backing `key`
    pub fn path_for(&self, key: &str) -> BudgetResult<PathBuf> {
        let valid = !key.is_empty()
            && !key.starts_with('.')
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.'));
        if !valid {
            return Err(BudgetError::Storage(format!("Invalid storage key: {:?}", key)));
        }
        Ok(self.dir.join(format!("{}.json", key)))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> BudgetResult<Option<String>> {
        read_text(self.path_for(key)?)
    }

    fn set(&mut self, key: &str, value: &str) -> BudgetResult<()> {
        write_text_atomic(self.path_for(key)?, value)
    }

    fn remove(&mut self, key: &str) -> BudgetResult<()> {
        remove_file(self.path_for(key)?)
    }
}

/// In-memory store for tests and embedding
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> BudgetResult<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> BudgetResult<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> BudgetResult<()> {
        self.entries.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_file_store_set_get_remove() {
        let temp_dir = TempDir::new().unwrap();
        let mut store = FileStore::new(temp_dir.path().to_path_buf());

        assert!(store.get("expenses").unwrap().is_none());

        store.set("expenses", "[]").unwrap();
        assert_eq!(store.get("expenses").unwrap().as_deref(), Some("[]"));
        assert!(temp_dir.path().join("expenses.json").exists());

        store.remove("expenses").unwrap();
        assert!(store.get("expenses").unwrap().is_none());
    }

    #[test]
    fn test_file_store_overwrites() {
        let temp_dir = TempDir::new().unwrap();
        let mut store = FileStore::new(temp_dir.path().to_path_buf());

        store.set("income", "[1]").unwrap();
        store.set("income", "[2]").unwrap();
        assert_eq!(store.get("income").unwrap().as_deref(), Some("[2]"));
    }

    #[test]
    fn test_file_store_rejects_path_like_keys() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileStore::new(temp_dir.path().to_path_buf());

        assert!(store.path_for("../escape").is_err());
        assert!(store.path_for("a/b").is_err());
        assert!(store.path_for("").is_err());
        assert!(store
            .path_for("expenses.corrupt-20261018T101500123Z")
            .is_ok());
    }

    #[test]
    fn test_memory_store() {
        let mut store = MemoryStore::new();
        assert!(store.is_empty());

        store.set("k", "v").unwrap();
        assert_eq!(store.get("k").unwrap().as_deref(), Some("v"));
        assert_eq!(store.len(), 1);

        store.remove("k").unwrap();
        store.remove("k").unwrap();
        assert!(store.is_empty());
    }
}
