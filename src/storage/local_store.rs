//! Key/value preference store
//!
//! A flat map of string keys to string values persisted in
//! `local_storage.json`. Values are stored as the caller hands them over;
//! structured values are expected to be JSON-encoded first.
//!
//! The file only holds preferences, so a damaged one never stops the
//! program: unreadable files start an empty store, and non-string values
//! written by hand are kept as their JSON text.

use std::collections::BTreeMap;
use std::path::PathBuf;

use serde_json::{Map, Value};
use tracing::warn;

use crate::error::ExpenseError;

use super::file_io::{read_json, write_json_atomic};

/// Persistent string-to-string store
#[derive(Debug)]
pub struct LocalStore {
    path: PathBuf,
    items: BTreeMap<String, String>,
}

impl LocalStore {
    /// Open the store at `path`, starting empty if the file is missing or
    /// unreadable
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let items = match read_json::<Map<String, Value>, _>(&path) {
            Ok(raw) => raw
                .into_iter()
                .map(|(key, value)| match value {
                    Value::String(text) => (key, text),
                    other => (key, other.to_string()),
                })
                .collect(),
            Err(e) => {
                warn!(path = %path.display(), error = %e, "ignoring unreadable preference file");
                BTreeMap::new()
            }
        };
        Self { path, items }
    }

    /// Get the raw value stored under `key`
    pub fn get_item(&self, key: &str) -> Option<&str> {
        self.items.get(key).map(String::as_str)
    }

    /// Store `value` under `key`, replacing any previous value
    pub fn set_item(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.items.insert(key.into(), value.into());
    }

    /// Remove `key`, returning its previous value
    pub fn remove_item(&mut self, key: &str) -> Option<String> {
        self.items.remove(key)
    }

    /// Write the store to disk
    pub fn save(&self) -> Result<(), ExpenseError> {
        write_json_atomic(&self.path, &self.items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_open_missing_file_is_empty() {
        let temp_dir = TempDir::new().unwrap();
        let store = LocalStore::open(temp_dir.path().join("local_storage.json"));
        assert!(store.items.is_empty());
        assert_eq!(store.get_item("darkMode"), None);
    }

    #[test]
    fn test_set_save_reopen() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("local_storage.json");

        let mut store = LocalStore::open(&path);
        store.set_item("darkMode", "true");
        store.save().unwrap();

        let reopened = LocalStore::open(&path);
        assert_eq!(reopened.get_item("darkMode"), Some("true"));
        assert_eq!(reopened.items.len(), 1);
    }

    #[test]
    fn test_file_format_is_flat_object() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("local_storage.json");

        let mut store = LocalStore::open(&path);
        store.set_item("darkMode", "false");
        store.save().unwrap();

        let raw: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(raw, serde_json::json!({ "darkMode": "false" }));
    }

    #[test]
    fn test_non_string_values_kept_as_json_text() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("local_storage.json");
        std::fs::write(&path, r#"{"darkMode": true, "zoom": 1.5, "name": "x"}"#).unwrap();

        let store = LocalStore::open(&path);
        assert_eq!(store.get_item("darkMode"), Some("true"));
        assert_eq!(store.get_item("zoom"), Some("1.5"));
        assert_eq!(store.get_item("name"), Some("x"));
    }

    #[test]
    fn test_corrupt_file_opens_empty() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("local_storage.json");
        std::fs::write(&path, "{ not json").unwrap();

        let mut store = LocalStore::open(&path);
        assert!(store.items.is_empty());

        store.set_item("darkMode", "false");
        store.save().unwrap();
        assert_eq!(LocalStore::open(&path).get_item("darkMode"), Some("false"));
    }

    #[test]
    fn test_remove_item() {
        let temp_dir = TempDir::new().unwrap();
        let mut store = LocalStore::open(temp_dir.path().join("s.json"));

        store.set_item("k", "v");
        assert_eq!(store.remove_item("k").as_deref(), Some("v"));
        assert_eq!(store.remove_item("k"), None);
    }
}
