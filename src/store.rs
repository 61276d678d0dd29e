//! Scoped key-value persistence
//!
//! Values are JSON strings under short keys, the same shape browser local
//! storage uses. [`JsonFileStore`] keeps every key in one JSON object file.

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

pub const ROLE_KEY: &str = "asuai-role";
pub const TOOL_KEY: &str = "asuai-tool";
pub const QUERY_KEY: &str = "asuai-query";
pub const FAVORITES_KEY: &str = "asuai-favs";

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to encode value for '{key}': {source}")]
    Encode {
        key: String,
        #[source]
        source: serde_json::Error,
    },
}

pub type Result<T> = std::result::Result<T, StoreError>;

/// Read/write-by-key capability handed to the engine
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&mut self, key: &str, value: String) -> Result<()>;
    fn remove(&mut self, key: &str) -> Result<()>;
}

/// Volatile store, mostly for tests and embedding
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    entries: BTreeMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: String) -> Result<()> {
        self.entries.insert(key.to_string(), value);
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        self.entries.remove(key);
        Ok(())
    }
}

/// Store backed by a single JSON object file
///
/// The whole file is read on open and rewritten on every change.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl JsonFileStore {
    /// Open the store at `path`
    ///
    /// A missing file is an empty store. An unreadable or corrupt file is
    /// also treated as empty and gets replaced on the next write.
    pub fn open<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref().to_path_buf();
        let entries = match fs::read_to_string(&path) {
            Ok(content) => match serde_json::from_str(&content) {
                Ok(entries) => entries,
                Err(err) => {
                    tracing::warn!("Ignoring corrupt store {}: {}", path.display(), err);
                    BTreeMap::new()
                }
            },
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => BTreeMap::new(),
            Err(err) => {
                tracing::warn!("Could not read store {}: {}", path.display(), err);
                BTreeMap::new()
            }
        };

        Self { path, entries }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&self) -> Result<()> {
        let io_err = |source: std::io::Error| StoreError::Io {
            path: self.path.clone(),
            source,
        };

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(io_err)?;
            }
        }

        let content =
            serde_json::to_string_pretty(&self.entries).map_err(|source| StoreError::Encode {
                key: "*".to_string(),
                source,
            })?;
        fs::write(&self.path, content).map_err(io_err)
    }
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: String) -> Result<()> {
        self.entries.insert(key.to_string(), value);
        self.flush()
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        if self.entries.remove(key).is_some() {
            self.flush()?;
        }
        Ok(())
    }
}

/// Read and decode `key`, falling back to `default` on any failure
pub fn load_or_default<S, T>(store: &S, key: &str, default: T) -> T
where
    S: KeyValueStore + ?Sized,
    T: DeserializeOwned,
{
    let raw = match store.get(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => {
            tracing::debug!("No stored value for '{}', using default", key);
            return default;
        }
        Err(err) => {
            tracing::debug!("Failed to read '{}': {}, using default", key, err);
            return default;
        }
    };

    match serde_json::from_str(&raw) {
        Ok(value) => value,
        Err(err) => {
            tracing::debug!("Malformed value for '{}': {}, using default", key, err);
            default
        }
    }
}

/// Encode `value` as JSON and write it under `key`
pub fn save<S, T>(store: &mut S, key: &str, value: &T) -> Result<()>
where
    S: KeyValueStore + ?Sized,
    T: Serialize + ?Sized,
{
    let raw = serde_json::to_string(value).map_err(|source| StoreError::Encode {
        key: key.to_string(),
        source,
    })?;
    store.set(key, raw)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_memory_store_roundtrip() {
        let mut store = MemoryStore::new();
        assert_eq!(store.get("k").unwrap(), None);
        store.set("k", "\"v\"".to_string()).unwrap();
        assert_eq!(store.get("k").unwrap().as_deref(), Some("\"v\""));
        store.remove("k").unwrap();
        assert_eq!(store.get("k").unwrap(), None);
    }

    #[test]
    fn test_load_or_default_missing_key() {
        let store = MemoryStore::new();
        let value: String = load_or_default(&store, QUERY_KEY, "fallback".to_string());
        assert_eq!(value, "fallback");
    }

    #[test]
    fn test_load_or_default_malformed_payload() {
        let mut store = MemoryStore::new();
        store.set(QUERY_KEY, "{not json".to_string()).unwrap();
        let value: String = load_or_default(&store, QUERY_KEY, String::new());
        assert_eq!(value, "");
    }

    #[test]
    fn test_load_or_default_wrong_shape() {
        let mut store = MemoryStore::new();
        store.set(FAVORITES_KEY, "42".to_string()).unwrap();
        let value: Vec<String> = load_or_default(&store, FAVORITES_KEY, Vec::new());
        assert!(value.is_empty());
    }

    #[test]
    fn test_save_then_load() {
        let mut store = MemoryStore::new();
        save(&mut store, QUERY_KEY, "rubric").unwrap();
        assert_eq!(store.get(QUERY_KEY).unwrap().as_deref(), Some("\"rubric\""));
        let value: String = load_or_default(&store, QUERY_KEY, String::new());
        assert_eq!(value, "rubric");
    }

    #[test]
    fn test_file_store_missing_file_is_empty() {
        let dir = TempDir::new().unwrap();
        let store = JsonFileStore::open(dir.path().join("storage.json"));
        assert_eq!(store.get(ROLE_KEY).unwrap(), None);
    }

    #[test]
    fn test_file_store_persists_across_open() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("storage.json");

        let mut store = JsonFileStore::open(&path);
        save(&mut store, ROLE_KEY, "faculty").unwrap();
        assert!(path.exists());

        let reopened = JsonFileStore::open(&path);
        assert_eq!(
            reopened.get(ROLE_KEY).unwrap().as_deref(),
            Some("\"faculty\"")
        );
    }

    #[test]
    fn test_file_store_corrupt_file_is_replaced() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("storage.json");
        fs::write(&path, "this is not json").unwrap();

        let mut store = JsonFileStore::open(&path);
        assert_eq!(store.get(ROLE_KEY).unwrap(), None);

        save(&mut store, QUERY_KEY, "notes").unwrap();
        let content = fs::read_to_string(&path).unwrap();
        let parsed: BTreeMap<String, String> = serde_json::from_str(&content).unwrap();
        assert_eq!(parsed.get(QUERY_KEY).map(String::as_str), Some("\"notes\""));
    }

    #[test]
    fn test_file_store_remove() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("storage.json");

        let mut store = JsonFileStore::open(&path);
        save(&mut store, TOOL_KEY, "zoom").unwrap();
        store.remove(TOOL_KEY).unwrap();

        let reopened = JsonFileStore::open(&path);
        assert_eq!(reopened.get(TOOL_KEY).unwrap(), None);
    }

    #[test]
    fn test_file_store_unwritable_path_is_io_error() {
        let dir = TempDir::new().unwrap();
        let blocker = dir.path().join("blocker");
        fs::write(&blocker, "plain file").unwrap();

        let mut store = JsonFileStore::open(blocker.join("storage.json"));
        let err = store.set(ROLE_KEY, "\"faculty\"".to_string()).unwrap_err();
        assert!(matches!(err, StoreError::Io { .. }));
        // the in-memory value is kept even though the flush failed
        assert_eq!(store.get(ROLE_KEY).unwrap().as_deref(), Some("\"faculty\""));
    }
}
