//! Persistence bridge to a string-keyed blob store.
//!
//! The collection is written wholesale under [`STORAGE_KEY`] after every
//! mutation and read back wholesale at startup. There is no versioning and no
//! corruption detection: a malformed stored value is returned as a JSON error.
use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use log::debug;
use quote_common::net::STORAGE_KEY;
use quote_common::{Quote, Result};

/// Minimal key-value store in the shape of browser local storage.
pub trait KeyValueStore: Send {
    /// Returns the value stored under `key`, if any.
    fn get_item(&self, key: &str) -> Result<Option<String>>;
    /// Stores `value` under `key`, overwriting any previous value.
    fn set_item(&mut self, key: &str, value: &str) -> Result<()>;
}

/// Volatile store backed by a `HashMap`.
#[derive(Debug, Default, Clone)]
pub struct MemoryStorage {
    items: HashMap<String, String>,
}

impl MemoryStorage {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        Ok(self.items.get(key).cloned())
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<()> {
        self.items.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Store keeping one `<key>.json` file per key inside a directory.
#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    /// Uses `dir` as the storage root. The directory is created on first write.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        FileStorage { dir: dir.into() }
    }

    /// Storage root.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }
}

impl KeyValueStore for FileStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<()> {
        fs::create_dir_all(&self.dir)?;
        let path = self.path_for(key);
        fs::write(&path, value)?;
        debug!("Wrote {} bytes to {}", value.len(), path.display());
        Ok(())
    }
}

/// Serializes `quotes` and overwrites the stored collection.
pub fn save_quotes<S: KeyValueStore + ?Sized>(storage: &mut S, quotes: &[Quote]) -> Result<()> {
    let json = serde_json::to_string(quotes)?;
    storage.set_item(STORAGE_KEY, &json)
}

/// Reads the stored collection. `None` if nothing has been saved yet.
pub fn load_quotes<S: KeyValueStore + ?Sized>(storage: &S) -> Result<Option<Vec<Quote>>> {
    match storage.get_item(STORAGE_KEY)? {
        Some(json) => Ok(Some(serde_json::from_str(&json)?)),
        None => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quote_common::QuoteError;

    #[test]
    fn memory_round_trip_preserves_order() {
        let mut storage = MemoryStorage::new();
        let quotes = vec![Quote::new("a", "b"), Quote::new("c", "d"), Quote::new("a", "b")];
        save_quotes(&mut storage, &quotes).unwrap();
        assert_eq!(load_quotes(&storage).unwrap(), Some(quotes));
    }

    #[test]
    fn missing_key_loads_as_none() {
        assert_eq!(load_quotes(&MemoryStorage::new()).unwrap(), None);
    }

    #[test]
    fn malformed_value_is_a_parse_error() {
        let mut storage = MemoryStorage::new();
        storage.set_item(STORAGE_KEY, "{not json").unwrap();
        assert!(matches!(load_quotes(&storage), Err(QuoteError::SerdeJson(_))));
    }

    #[test]
    fn file_storage_creates_directory_and_overwrites() {
        let tmp = tempfile::tempdir().unwrap();
        let mut storage = FileStorage::new(tmp.path().join("nested"));
        assert_eq!(storage.get_item("k").unwrap(), None);

        storage.set_item("k", "first").unwrap();
        storage.set_item("k", "second").unwrap();
        assert_eq!(storage.get_item("k").unwrap().as_deref(), Some("second"));
    }
}
