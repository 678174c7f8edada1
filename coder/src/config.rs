//! Coder chain configuration, read from TOML.
//!
//! ```toml
//! dictionary = "known-vocabularies.json"
//! save_on_changes = true
//! fixed_namespaces = ["urn:datafabric:org:", "http://example.com/person/"]
//!
//! [coder_ids]
//! known = 0
//! namespace = 1
//! utf8 = 2
//! ```
//!
//! Every field is optional.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{CoderError, Result};
use crate::header::MAX_CODER_ID;
use crate::namespace::MAX_NAMESPACES;

/// Default snapshot file name.
pub const DEFAULT_DICTIONARY: &str = "known-vocabularies.json";

/// Namespaces handled by the fixed-namespace coder unless configured otherwise.
pub const DEFAULT_FIXED_NAMESPACES: &[&str] = &[
    "urn:datafabric:org:",
    "urn:datafabric:value:",
    "urn:datafabric:version:",
];

/// Settings for [`IriCoder::initialize`](crate::IriCoder::initialize).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CoderConfig {
    /// Path of the JSON dictionary snapshot.
    pub dictionary: PathBuf,
    /// Write the snapshot back when initialization numbered new identifiers.
    ///
    /// Concurrent writers are not coordinated; enable it in one process only.
    pub save_on_changes: bool,
    /// Namespaces of the fixed-namespace coder, indexed in order.
    pub fixed_namespaces: Vec<String>,
    /// Header ids of the three coders.
    pub coder_ids: CoderIds,
}

/// Header ids of the coder chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CoderIds {
    /// Known-vocabulary coder.
    pub known: u8,
    /// Fixed-namespace coder.
    pub namespace: u8,
    /// UTF-8 fallback coder.
    pub utf8: u8,
}

impl Default for CoderIds {
    fn default() -> Self {
        Self {
            known: 0,
            namespace: 1,
            utf8: 2,
        }
    }
}

impl Default for CoderConfig {
    fn default() -> Self {
        Self {
            dictionary: PathBuf::from(DEFAULT_DICTIONARY),
            save_on_changes: false,
            fixed_namespaces: DEFAULT_FIXED_NAMESPACES
                .iter()
                .map(|&ns| ns.to_owned())
                .collect(),
            coder_ids: CoderIds::default(),
        }
    }
}

impl CoderConfig {
    /// Parses a TOML document and validates it.
    ///
    /// # Errors
    ///
    /// Returns [`CoderError::Config`] for malformed TOML or unknown keys, and
    /// the [`CoderConfig::validate`] errors.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: CoderConfig = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads a configuration file. A relative `dictionary` path is resolved
    /// against the file's directory.
    ///
    /// # Errors
    ///
    /// Returns [`CoderError::Io`] if the file cannot be read, otherwise as
    /// [`CoderConfig::from_toml_str`].
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        let mut config = Self::from_toml_str(&text)?;
        if config.dictionary.is_relative() {
            if let Some(dir) = path.parent() {
                config.dictionary = dir.join(&config.dictionary);
            }
        }
        debug!(path = %path.display(), dictionary = %config.dictionary.display(), "loaded coder config");
        Ok(config)
    }

    /// Checks coder ids and the namespace list.
    ///
    /// # Errors
    ///
    /// - [`CoderError::CoderIdOutOfRange`] for an id above the header field
    /// - [`CoderError::DuplicateCoderId`] when two coders share an id
    /// - [`CoderError::TooManyNamespaces`] for more than 256 fixed namespaces
    pub fn validate(&self) -> Result<()> {
        let CoderIds {
            known,
            namespace,
            utf8,
        } = self.coder_ids;
        for id in [known, namespace, utf8] {
            if id > MAX_CODER_ID {
                return Err(CoderError::CoderIdOutOfRange(id));
            }
        }
        if known == namespace || known == utf8 {
            return Err(CoderError::DuplicateCoderId(known));
        }
        if namespace == utf8 {
            return Err(CoderError::DuplicateCoderId(namespace));
        }
        if self.fixed_namespaces.len() > MAX_NAMESPACES {
            return Err(CoderError::TooManyNamespaces(self.fixed_namespaces.len()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_is_default() {
        assert_eq!(CoderConfig::from_toml_str("").unwrap(), CoderConfig::default());
    }

    #[test]
    fn partial_document_keeps_other_defaults() {
        let config = CoderConfig::from_toml_str(
            r#"
            save_on_changes = true

            [coder_ids]
            utf8 = 7
            "#,
        )
        .unwrap();
        assert!(config.save_on_changes);
        assert_eq!(config.coder_ids.known, 0);
        assert_eq!(config.coder_ids.utf8, 7);
        assert_eq!(config.fixed_namespaces.len(), DEFAULT_FIXED_NAMESPACES.len());
    }

    #[test]
    fn rejects_unknown_keys_and_bad_ids() {
        assert!(matches!(
            CoderConfig::from_toml_str("saveOnChanges = true"),
            Err(CoderError::Config(_))
        ));
        assert!(matches!(
            CoderConfig::from_toml_str("[coder_ids]\nnamespace = 0"),
            Err(CoderError::DuplicateCoderId(0))
        ));
        assert!(matches!(
            CoderConfig::from_toml_str("[coder_ids]\nknown = 32"),
            Err(CoderError::CoderIdOutOfRange(32))
        ));
    }

    #[test]
    fn load_resolves_dictionary_next_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("coder.toml");
        fs::write(&path, "dictionary = \"dict.json\"\n").unwrap();
        let config = CoderConfig::load(&path).unwrap();
        assert_eq!(config.dictionary, dir.path().join("dict.json"));
    }
}
