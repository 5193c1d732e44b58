//! Key-value persistence backends

use rustc_hash::FxHashMap;
use serde_json::{Map, Value};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Error raised by a persistence backend
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("store I/O failed: {0}")]
    Io(#[from] io::Error),

    #[error("store content is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// String key-value storage
pub trait KeyValueStore {
    /// Read a value, `None` if the key was never written
    ///
    /// # Errors
    /// Returns `StoreError` if the backend cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Write a value, replacing any previous one
    ///
    /// # Errors
    /// Returns `StoreError` if the backend cannot be written.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// Volatile store, mostly for tests and throwaway sessions
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    entries: FxHashMap<String, String>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Store backed by a single JSON object on disk
///
/// Every `set` rewrites the whole file, so the file always reflects the last
/// successful write.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
    entries: Map<String, Value>,
}

impl JsonFileStore {
    /// Open the store, starting empty if the file doesn't exist yet
    ///
    /// # Errors
    /// Returns `StoreError` if the file exists but cannot be read or is not a
    /// JSON object.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, StoreError> {
        let path = path.as_ref().to_path_buf();
        let entries = match fs::read_to_string(&path) {
            Ok(content) if content.trim().is_empty() => Map::new(),
            Ok(content) => serde_json::from_str(&content)?,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "store file not found, starting empty");
                Map::new()
            }
            Err(e) => return Err(e.into()),
        };
        Ok(Self { path, entries })
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self
            .entries
            .get(key)
            .and_then(Value::as_str)
            .map(str::to_string))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut updated = self.entries.clone();
        updated.insert(key.to_string(), Value::String(value.to_string()));

        let content = serde_json::to_string_pretty(&updated)?;
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, content)?;

        self.entries = updated;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!(
            "word_elimination_{}_{}_{name}.json",
            std::process::id(),
            rand::random::<u32>()
        ))
    }

    #[test]
    fn memory_store_round_trip() {
        let mut store = MemoryStore::new();
        assert_eq!(store.get("k").unwrap(), None);
        store.set("k", "v").unwrap();
        store.set("k", "w").unwrap();
        assert_eq!(store.get("k").unwrap().as_deref(), Some("w"));
    }

    #[test]
    fn file_store_missing_file_is_empty() {
        let store = JsonFileStore::open(temp_path("missing")).unwrap();
        assert_eq!(store.get("anything").unwrap(), None);
    }

    #[test]
    fn file_store_persists_across_reopen() {
        let path = temp_path("reopen");
        {
            let mut store = JsonFileStore::open(&path).unwrap();
            store.set("title", "My list").unwrap();
            store.set("other", "x").unwrap();
        }
        let store = JsonFileStore::open(&path).unwrap();
        assert_eq!(store.get("title").unwrap().as_deref(), Some("My list"));
        assert_eq!(store.get("other").unwrap().as_deref(), Some("x"));
        let _ = fs::remove_file(path);
    }

    #[test]
    fn file_store_rejects_corrupt_file() {
        let path = temp_path("corrupt");
        fs::write(&path, "{ not json").unwrap();
        assert!(matches!(JsonFileStore::open(&path), Err(StoreError::Json(_))));
        let _ = fs::remove_file(path);
    }
}
