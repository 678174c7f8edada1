//! The persisted known-vocabulary dictionary and the stores that hold it.
//!
//! A [`Dictionary`] maps IRIs to 24-bit ids. It carries ids rather than full
//! codes so a snapshot stays valid when the known-vocabulary coder is given
//! a different coder id.

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{PoisonError, RwLock};

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::Result;

/// Largest id the three-byte payload can hold.
pub const MAX_ID: u32 = 0x00FF_FFFF;

/// Snapshot of the known-vocabulary dictionary: IRI to id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Dictionary {
    entries: BTreeMap<String, u32>,
}

impl Dictionary {
    /// Creates an empty dictionary.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the dictionary has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Id of `iri`, if present.
    #[must_use]
    pub fn get(&self, iri: &str) -> Option<u32> {
        self.entries.get(iri).copied()
    }

    /// Inserts an entry, returning the id it replaced.
    pub fn insert(&mut self, iri: impl Into<String>, id: u32) -> Option<u32> {
        self.entries.insert(iri.into(), id)
    }

    /// Entries in IRI order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> + '_ {
        self.entries.iter().map(|(iri, &id)| (iri.as_str(), id))
    }
}

impl<S: Into<String>> FromIterator<(S, u32)> for Dictionary {
    fn from_iter<I: IntoIterator<Item = (S, u32)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().map(|(iri, id)| (iri.into(), id)).collect(),
        }
    }
}

/// Where the dictionary snapshot lives between runs.
pub trait DictionaryStore: Send + Sync {
    /// Loads the stored snapshot. A store with nothing saved yields an empty dictionary.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing storage cannot be read or parsed.
    fn load(&self) -> Result<Dictionary>;

    /// Replaces the stored snapshot.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing storage cannot be written.
    fn save(&self, dictionary: &Dictionary) -> Result<()>;
}

/// Stores the snapshot as a JSON object in a single file.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Creates a store backed by `path`. The file need not exist yet.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl DictionaryStore for JsonFileStore {
    fn load(&self) -> Result<Dictionary> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "no dictionary snapshot yet");
                return Ok(Dictionary::new());
            }
            Err(e) => return Err(e.into()),
        };
        let dictionary: Dictionary = serde_json::from_str(&text)?;
        debug!(path = %self.path.display(), entries = dictionary.len(), "loaded dictionary snapshot");
        Ok(dictionary)
    }

    fn save(&self, dictionary: &Dictionary) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(dictionary)?;
        // Written beside the snapshot, then renamed over it.
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, json)?;
        fs::rename(&tmp, &self.path)?;
        info!(path = %self.path.display(), entries = dictionary.len(), "saved dictionary snapshot");
        Ok(())
    }
}

/// Keeps the snapshot in memory, for tests and single-process use.
#[derive(Debug, Default)]
pub struct MemoryStore {
    inner: RwLock<Dictionary>,
}

impl MemoryStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store holding `dictionary`.
    #[must_use]
    pub fn with(dictionary: Dictionary) -> Self {
        Self {
            inner: RwLock::new(dictionary),
        }
    }

    /// Copy of the current snapshot.
    #[must_use]
    pub fn snapshot(&self) -> Dictionary {
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl DictionaryStore for MemoryStore {
    fn load(&self) -> Result<Dictionary> {
        Ok(self.snapshot())
    }

    fn save(&self, dictionary: &Dictionary) -> Result<()> {
        let mut inner = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        *inner = dictionary.clone();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_form_is_a_flat_object() {
        let dictionary: Dictionary = [("http://example.com/1", 0u32)].into_iter().collect();
        let json = serde_json::to_string(&dictionary).unwrap();
        assert_eq!(json, r#"{"http://example.com/1":0}"#);
        let back: Dictionary = serde_json::from_str(&json).unwrap();
        assert_eq!(back, dictionary);
    }

    #[test]
    fn missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("absent.json"));
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn file_store_saves_and_loads() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("nested/dict.json"));
        let mut dictionary = Dictionary::new();
        dictionary.insert("http://example.com/a", 7);
        store.save(&dictionary).unwrap();
        assert_eq!(store.load().unwrap(), dictionary);
        assert!(!dir.path().join("nested/dict.json.tmp").exists());
    }

    #[test]
    fn corrupt_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dict.json");
        fs::write(&path, "not json").unwrap();
        assert!(matches!(
            JsonFileStore::new(path).load(),
            Err(crate::CoderError::Json(_))
        ));
    }

    #[test]
    fn memory_store_replaces_snapshot() {
        let store = MemoryStore::new();
        assert!(store.load().unwrap().is_empty());
        let dictionary: Dictionary = [("urn:x", 1u32)].into_iter().collect();
        store.save(&dictionary).unwrap();
        assert_eq!(store.snapshot(), dictionary);
    }
}
