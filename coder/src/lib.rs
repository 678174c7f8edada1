//! Compact binary codes for IRIs.
//!
//! The `datafabric-coder` crate turns IRIs into short byte strings for
//! storage keys. Three coders are tried in order:
//!
//! 1. [`KnownVocabularyCoder`]: every identifier of the
//!    [`datafabric_vocab::Registry`] gets a persistent 24-bit id (4-byte code).
//! 2. [`NamespaceCoder`]: IRIs under a configured namespace become a
//!    one-byte namespace index plus the local name.
//! 3. [`Utf8Coder`]: anything else is stored as UTF-8 text.
//!
//! Every code starts with a [`header`] byte naming the value type and the
//! coder that produced it, so [`IriCoder::decode`] can dispatch.
//!
//! ```
//! use datafabric_coder::{CoderConfig, IriCoder, MemoryStore};
//! use datafabric_vocab::{namespaces::rdf, Registry};
//!
//! let coder = IriCoder::initialize(&CoderConfig::default(), &MemoryStore::new(), Registry::full())?;
//! let code = coder.encode(rdf::type_);
//! assert_eq!(code.as_bytes(), &[0x01, 0x00, 0x00, 0x01]);
//! assert_eq!(coder.decode(code.as_bytes())?, rdf::type_);
//! # Ok::<(), datafabric_coder::CoderError>(())
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod chain;
pub mod codec;
pub mod config;
pub mod dictionary;
pub mod error;
pub mod header;
pub mod known;
pub mod namespace;
pub mod utf8;

pub use chain::IriCoder;
pub use codec::{Code, Coder};
pub use config::{CoderConfig, CoderIds};
pub use dictionary::{Dictionary, DictionaryStore, JsonFileStore, MemoryStore};
pub use error::{CoderError, Result};
pub use header::ValueType;
pub use known::KnownVocabularyCoder;
pub use namespace::NamespaceCoder;
pub use utf8::Utf8Coder;
