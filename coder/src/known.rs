//! Coder for IRIs of the known vocabularies.
//!
//! Every identifier of the [`Registry`] gets a 24-bit id. Ids are stable
//! across runs as long as the previous [`Dictionary`] snapshot is fed back
//! into [`KnownVocabularyCoder::initialize`]: existing entries keep their id
//! and only identifiers missing from the snapshot are numbered, continuing
//! after the snapshot's size.

use std::borrow::Cow;
use std::collections::HashMap;

use datafabric_vocab::Registry;
use tracing::{debug, info};

use crate::codec::{payload, Code, Coder};
use crate::dictionary::{Dictionary, MAX_ID};
use crate::error::{CoderError, Result};
use crate::header::{header, ValueType, MAX_CODER_ID};

const NAME: &str = "known-vocabulary";

/// Bytes of the id payload.
pub const ID_BYTES: usize = 3;

/// Dictionary coder for known-vocabulary IRIs. Codes are four bytes:
/// header, then the id in big-endian order.
#[derive(Debug, Clone)]
pub struct KnownVocabularyCoder {
    coder_id: u8,
    header: u8,
    ids: HashMap<String, u32>,
    iris: HashMap<u32, String>,
    added: usize,
}

impl KnownVocabularyCoder {
    /// Builds the coder from a loaded snapshot and the registry.
    ///
    /// The id counter starts at the snapshot size; every registry identifier
    /// not already in the snapshot takes the next id not yet used.
    ///
    /// # Errors
    ///
    /// - [`CoderError::CoderIdOutOfRange`] if `coder_id` exceeds the header field
    /// - [`CoderError::IdOutOfRange`] if a snapshot id needs more than 24 bits
    /// - [`CoderError::ConflictingEntry`] if two snapshot IRIs share an id
    /// - [`CoderError::DictionaryFull`] if the 24-bit id space runs out
    pub fn initialize(coder_id: u8, snapshot: Dictionary, registry: &Registry) -> Result<Self> {
        if coder_id > MAX_CODER_ID {
            return Err(CoderError::CoderIdOutOfRange(coder_id));
        }

        let capacity = snapshot.len() + registry.term_count();
        let mut ids: HashMap<String, u32> = HashMap::with_capacity(capacity);
        let mut iris: HashMap<u32, String> = HashMap::with_capacity(capacity);
        for (iri, id) in snapshot.iter() {
            if id > MAX_ID {
                return Err(CoderError::IdOutOfRange {
                    iri: iri.to_owned(),
                    id,
                });
            }
            if let Some(first) = iris.insert(id, iri.to_owned()) {
                return Err(CoderError::ConflictingEntry {
                    id,
                    first,
                    second: iri.to_owned(),
                });
            }
            ids.insert(iri.to_owned(), id);
        }

        let refreshing = !ids.is_empty();
        if refreshing {
            info!(entries = ids.len(), "dictionary isn't empty");
        } else {
            info!("dictionary is empty");
        }

        let mut counter = u32::try_from(ids.len()).map_err(|_| CoderError::DictionaryFull(ids.len()))?;
        let mut added = 0;
        for vocabulary in registry.vocabularies() {
            if refreshing {
                debug!(namespace = vocabulary.namespace(), "refreshing vocabulary");
            } else {
                debug!(namespace = vocabulary.namespace(), "registering vocabulary");
            }
            for iri in vocabulary.identifiers() {
                if ids.contains_key(iri) {
                    continue;
                }
                let id = next_free(&mut counter, &iris)?;
                ids.insert(iri.to_owned(), id);
                iris.insert(id, iri.to_owned());
                added += 1;
            }
        }

        if refreshing {
            info!(vocabularies = registry.len(), added, "refreshed vocabularies");
        } else {
            info!(vocabularies = registry.len(), "registered vocabularies");
        }
        info!(size = ids.len(), "dictionary ready");

        Ok(Self {
            coder_id,
            header: header(coder_id, ValueType::Iri),
            ids,
            iris,
            added,
        })
    }

    /// Snapshot to persist for the next run.
    #[must_use]
    pub fn dictionary(&self) -> Dictionary {
        self.ids.iter().map(|(iri, &id)| (iri.as_str(), id)).collect()
    }

    /// Number of dictionary entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Returns `true` if the dictionary has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Entries numbered by this initialization, i.e. absent from the snapshot.
    #[must_use]
    pub fn added(&self) -> usize {
        self.added
    }

    /// Id assigned to `iri`.
    #[must_use]
    pub fn id(&self, iri: &str) -> Option<u32> {
        self.ids.get(iri).copied()
    }
}

fn next_free(counter: &mut u32, used: &HashMap<u32, String>) -> Result<u32> {
    loop {
        *counter += 1;
        if *counter > MAX_ID {
            return Err(CoderError::DictionaryFull(used.len()));
        }
        if !used.contains_key(counter) {
            return Ok(*counter);
        }
    }
}

impl Coder for KnownVocabularyCoder {
    fn coder_id(&self) -> u8 {
        self.coder_id
    }

    fn encode(&self, iri: &str) -> Option<Code> {
        let id = self.ids.get(iri)?;
        Some(Code::new(self.header, &id.to_be_bytes()[1..]))
    }

    fn decode<'a>(&'a self, code: &'a [u8]) -> Result<Cow<'a, str>> {
        let id = match payload(NAME, self.header, code)? {
            &[a, b, c] => u32::from_be_bytes([0, a, b, c]),
            _ => return Err(CoderError::malformed(NAME, code)),
        };
        self.iris
            .get(&id)
            .map(|iri| Cow::Borrowed(iri.as_str()))
            .ok_or(CoderError::UnknownId(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use datafabric_vocab::namespaces::rdf;

    #[test]
    fn rejects_wide_coder_id() {
        assert!(matches!(
            KnownVocabularyCoder::initialize(32, Dictionary::new(), Registry::full()),
            Err(CoderError::CoderIdOutOfRange(32))
        ));
    }

    #[test]
    fn rejects_conflicting_snapshot() {
        let snapshot: Dictionary = [("urn:a", 5u32), ("urn:b", 5)].into_iter().collect();
        assert!(matches!(
            KnownVocabularyCoder::initialize(0, snapshot, Registry::full()),
            Err(CoderError::ConflictingEntry { id: 5, .. })
        ));
    }

    #[test]
    fn rejects_wide_snapshot_id() {
        let snapshot: Dictionary = [("urn:a", MAX_ID + 1)].into_iter().collect();
        assert!(matches!(
            KnownVocabularyCoder::initialize(0, snapshot, Registry::full()),
            Err(CoderError::IdOutOfRange { .. })
        ));
    }

    #[test]
    fn skips_ids_taken_by_snapshot() {
        // Counter starts at 1 and would hand out 2 to rdf:type, which is taken.
        let snapshot: Dictionary = [("urn:a", 2u32)].into_iter().collect();
        let coder = KnownVocabularyCoder::initialize(0, snapshot, Registry::full()).unwrap();
        assert_eq!(coder.id("urn:a"), Some(2));
        assert_eq!(coder.id(rdf::type_), Some(3));
        assert_eq!(coder.added(), Registry::full().term_count());
    }

    #[test]
    fn decode_rejects_foreign_and_short_codes() {
        let coder = KnownVocabularyCoder::initialize(0, Dictionary::new(), Registry::full()).unwrap();
        assert!(matches!(
            coder.decode(&[0x05, 0, 0, 1]),
            Err(CoderError::Malformed { .. })
        ));
        assert!(matches!(
            coder.decode(&[0x01, 0, 1]),
            Err(CoderError::Malformed { .. })
        ));
        assert!(matches!(
            coder.decode(&[0x01, 0xff, 0xff, 0xff]),
            Err(CoderError::UnknownId(0x00ff_ffff))
        ));
    }
}
