//! The IRI coder chain.

use std::borrow::Cow;

use datafabric_vocab::Registry;
use tracing::{debug, info};

use crate::codec::{Code, Coder};
use crate::config::CoderConfig;
use crate::dictionary::{Dictionary, DictionaryStore};
use crate::error::{CoderError, Result};
use crate::header::{self, ValueType};
use crate::known::KnownVocabularyCoder;
use crate::namespace::NamespaceCoder;
use crate::utf8::Utf8Coder;

/// Encodes IRIs with the first coder that accepts them: known vocabulary,
/// then fixed namespace, then UTF-8.
#[derive(Debug, Clone)]
pub struct IriCoder {
    known: KnownVocabularyCoder,
    namespace: NamespaceCoder,
    utf8: Utf8Coder,
}

impl IriCoder {
    /// Assembles a chain from already built coders.
    ///
    /// # Errors
    ///
    /// Returns [`CoderError::DuplicateCoderId`] if two coders share an id.
    pub fn new(
        known: KnownVocabularyCoder,
        namespace: NamespaceCoder,
        utf8: Utf8Coder,
    ) -> Result<Self> {
        let (k, n, u) = (known.coder_id(), namespace.coder_id(), utf8.coder_id());
        if k == n || k == u {
            return Err(CoderError::DuplicateCoderId(k));
        }
        if n == u {
            return Err(CoderError::DuplicateCoderId(n));
        }
        Ok(Self {
            known,
            namespace,
            utf8,
        })
    }

    /// Loads the snapshot from `store`, builds the chain, and saves the
    /// grown dictionary back when `config.save_on_changes` is set.
    ///
    /// # Errors
    ///
    /// Propagates store, configuration and dictionary errors.
    pub fn initialize(
        config: &CoderConfig,
        store: &dyn DictionaryStore,
        registry: &Registry,
    ) -> Result<Self> {
        config.validate()?;
        let snapshot = store.load()?;
        let known = KnownVocabularyCoder::initialize(config.coder_ids.known, snapshot, registry)?;

        if known.added() > 0 {
            if config.save_on_changes {
                store.save(&known.dictionary())?;
                info!(added = known.added(), "dictionary snapshot updated");
            } else {
                debug!(added = known.added(), "dictionary grew, snapshot left unchanged");
            }
        }

        let namespace = NamespaceCoder::new(config.coder_ids.namespace, &config.fixed_namespaces)?;
        let utf8 = Utf8Coder::new(config.coder_ids.utf8)?;
        Self::new(known, namespace, utf8)
    }

    /// Encodes `iri`. The UTF-8 coder accepts every IRI, so this never fails.
    #[must_use]
    pub fn encode(&self, iri: &str) -> Code {
        self.known
            .encode(iri)
            .or_else(|| self.namespace.encode(iri))
            .unwrap_or_else(|| self.utf8.to_code(iri))
    }

    /// Encodes each IRI in turn.
    pub fn encode_all<'i, I>(&self, iris: I) -> Vec<Code>
    where
        I: IntoIterator<Item = &'i str>,
    {
        iris.into_iter().map(|iri| self.encode(iri)).collect()
    }

    /// Decodes a code produced by any coder of the chain.
    ///
    /// # Errors
    ///
    /// - [`CoderError::EmptyCode`] for a zero-length code
    /// - [`CoderError::NotAnIri`] if the header names another value type
    /// - [`CoderError::UnknownCoder`] if no coder of the chain has the header's id
    /// - the selected coder's decoding errors
    pub fn decode<'a>(&'a self, code: &'a [u8]) -> Result<Cow<'a, str>> {
        let value_type = header::value_type(code).ok_or(CoderError::EmptyCode)?;
        if value_type != ValueType::Iri {
            return Err(CoderError::NotAnIri(value_type));
        }
        let id = header::coder_id(code).ok_or(CoderError::EmptyCode)?;
        let coders: [&dyn Coder; 3] = [&self.known, &self.namespace, &self.utf8];
        coders
            .into_iter()
            .find(|c| c.coder_id() == id)
            .ok_or(CoderError::UnknownCoder(id))?
            .decode(code)
    }

    /// The known-vocabulary coder.
    #[must_use]
    pub fn known(&self) -> &KnownVocabularyCoder {
        &self.known
    }

    /// The fixed-namespace coder.
    #[must_use]
    pub fn namespace(&self) -> &NamespaceCoder {
        &self.namespace
    }

    /// Snapshot of the known-vocabulary dictionary.
    #[must_use]
    pub fn dictionary(&self) -> Dictionary {
        self.known.dictionary()
    }
}
