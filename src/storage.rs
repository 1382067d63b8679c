//! Key-value local storage for string lists.
//!
//! Every operation fails open: unreadable or malformed data reads as absent,
//! and a failed write is logged and dropped.

#[cfg(test)]
use std::cell::RefCell;
use std::collections::HashMap;
use std::path::PathBuf;

use serde_json::Value;
use tracing::{debug, warn};

use crate::config::Config;
use crate::error::Result;

pub trait LocalStorage {
    fn get(&self, key: &str) -> Option<Vec<String>>;
    fn set(&self, key: &str, value: &[String]);
}

/// JSON object on disk mapping keys to values.
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Storage file next to the config file.
    pub fn open_default() -> Result<Self> {
        Ok(Self::new(
            Config::config_path()?.with_file_name("local_storage.json"),
        ))
    }

    fn read_entries(&self) -> HashMap<String, Value> {
        if !self.path.exists() {
            return HashMap::new();
        }

        let contents = match std::fs::read_to_string(&self.path) {
            Ok(c) => c,
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "local storage unreadable");
                return HashMap::new();
            }
        };

        match serde_json::from_str(&contents) {
            Ok(entries) => entries,
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "local storage is not a JSON object");
                HashMap::new()
            }
        }
    }
}

impl LocalStorage for FileStorage {
    fn get(&self, key: &str) -> Option<Vec<String>> {
        let value = self.read_entries().remove(key)?;
        match serde_json::from_value(value) {
            Ok(list) => Some(list),
            Err(e) => {
                debug!(key, error = %e, "ignoring malformed local storage entry");
                None
            }
        }
    }

    fn set(&self, key: &str, value: &[String]) {
        let mut entries = self.read_entries();
        entries.insert(key.to_string(), Value::from(value.to_vec()));

        if let Some(parent) = self.path.parent() {
            if let Err(e) = std::fs::create_dir_all(parent) {
                warn!(path = %parent.display(), error = %e, "failed to create local storage directory");
            }
        }

        let contents = match serde_json::to_string_pretty(&entries) {
            Ok(c) => c,
            Err(e) => {
                warn!(key, error = %e, "failed to encode local storage");
                return;
            }
        };

        if let Err(e) = std::fs::write(&self.path, contents) {
            warn!(path = %self.path.display(), error = %e, "failed to write local storage");
        }
    }
}

/// In-process storage; nothing outlives the value.
#[cfg(test)]
#[derive(Default)]
pub struct MemoryStorage {
    entries: RefCell<HashMap<String, Vec<String>>>,
    writes: RefCell<Vec<String>>,
}

#[cfg(test)]
impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Keys passed to `set`, in call order.
    pub fn writes(&self) -> Vec<String> {
        self.writes.borrow().clone()
    }
}

#[cfg(test)]
impl LocalStorage for MemoryStorage {
    fn get(&self, key: &str) -> Option<Vec<String>> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &[String]) {
        self.writes.borrow_mut().push(key.to_string());
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_vec());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_file_storage_missing_file_reads_none() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileStorage::new(dir.path().join("local_storage.json"));
        assert_eq!(storage.get("anything"), None);
    }

    #[test]
    fn test_file_storage_set_then_get() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileStorage::new(dir.path().join("nested").join("local_storage.json"));
        storage.set("general_rejected_invites", &strings(&["a", "b"]));
        assert_eq!(
            storage.get("general_rejected_invites"),
            Some(strings(&["a", "b"]))
        );
    }

    #[test]
    fn test_file_storage_keeps_other_keys() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileStorage::new(dir.path().join("local_storage.json"));
        storage.set("first", &strings(&["1"]));
        storage.set("second", &strings(&["2"]));
        assert_eq!(storage.get("first"), Some(strings(&["1"])));
        assert_eq!(storage.get("second"), Some(strings(&["2"])));
    }

    #[test]
    fn test_file_storage_corrupt_file_reads_none() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("local_storage.json");
        std::fs::write(&path, "{ not json").unwrap();
        let storage = FileStorage::new(&path);
        assert_eq!(storage.get("general_rejected_invites"), None);

        // a write replaces the corrupt file
        storage.set("general_rejected_invites", &strings(&["x"]));
        assert_eq!(
            storage.get("general_rejected_invites"),
            Some(strings(&["x"]))
        );
    }

    #[test]
    fn test_file_storage_wrong_value_type_reads_none() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("local_storage.json");
        std::fs::write(&path, r#"{"general_rejected_invites": "oops"}"#).unwrap();
        let storage = FileStorage::new(&path);
        assert_eq!(storage.get("general_rejected_invites"), None);
    }

    #[test]
    fn test_file_storage_unwritable_path_is_noop() {
        let dir = tempfile::tempdir().unwrap();
        // a directory where the file should be makes the write fail
        let path = dir.path().join("local_storage.json");
        std::fs::create_dir(&path).unwrap();
        let storage = FileStorage::new(&path);
        storage.set("key", &strings(&["a"]));
        assert_eq!(storage.get("key"), None);
    }

    #[test]
    fn test_file_storage_missing_parent_dir_is_noop() {
        let dir = tempfile::tempdir().unwrap();
        // a regular file where the parent directory should be
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, "").unwrap();
        let storage = FileStorage::new(blocker.join("local_storage.json"));
        storage.set("key", &strings(&["a"]));
        assert_eq!(storage.get("key"), None);
    }

    #[test]
    fn test_memory_storage_records_writes() {
        let storage = MemoryStorage::new();
        assert_eq!(storage.get("key"), None);
        storage.set("key", &strings(&["a"]));
        assert_eq!(storage.get("key"), Some(strings(&["a"])));
        assert_eq!(storage.writes(), strings(&["key"]));
    }
}
