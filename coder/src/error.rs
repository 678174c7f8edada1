//! Error type for dictionary persistence, configuration and decoding.

use crate::header::ValueType;

/// Errors raised by the coders, the dictionary stores and configuration loading.
#[derive(Debug, thiserror::Error)]
pub enum CoderError {
    /// Reading or writing a file failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A dictionary snapshot is not valid JSON.
    #[error("invalid dictionary snapshot: {0}")]
    Json(#[from] serde_json::Error),

    /// A configuration file is not valid TOML for [`CoderConfig`](crate::CoderConfig).
    #[error("invalid configuration: {0}")]
    Config(#[from] toml::de::Error),

    /// A textual code is not valid hexadecimal.
    #[error("invalid hex code: {0}")]
    Hex(#[from] hex::FromHexError),

    /// A code payload is not valid UTF-8.
    #[error("code payload is not UTF-8: {0}")]
    Utf8(#[from] std::str::Utf8Error),

    /// Every 24-bit id is taken.
    #[error("known-vocabulary id space exhausted with {0} entries")]
    DictionaryFull(usize),

    /// Two snapshot entries share one id.
    #[error("id {id} is assigned to both <{first}> and <{second}>")]
    ConflictingEntry {
        /// The shared id.
        id: u32,
        /// IRI that claimed the id first.
        first: String,
        /// IRI that claimed it again.
        second: String,
    },

    /// A snapshot id does not fit in 24 bits.
    #[error("id {id} for <{iri}> does not fit in 24 bits")]
    IdOutOfRange {
        /// The offending IRI.
        iri: String,
        /// Its id.
        id: u32,
    },

    /// A coder id does not fit in the 5-bit header field.
    #[error("coder id {0} does not fit in the header (max {max})", max = crate::header::MAX_CODER_ID)]
    CoderIdOutOfRange(u8),

    /// Two coders of the chain share an id.
    #[error("coder id {0} is assigned to more than one IRI coder")]
    DuplicateCoderId(u8),

    /// More fixed namespaces than a one-byte index can address.
    #[error("{0} fixed namespaces configured, at most 256 are supported")]
    TooManyNamespaces(usize),

    /// A fixed namespace is listed twice.
    #[error("fixed namespace <{0}> is listed more than once")]
    DuplicateNamespace(String),

    /// A zero-length code.
    #[error("empty code")]
    EmptyCode,

    /// The code header names a value type other than IRI.
    #[error("code holds a {0:?} value, not an IRI")]
    NotAnIri(ValueType),

    /// No coder of the chain carries the header's coder id.
    #[error("no IRI coder with id {0}")]
    UnknownCoder(u8),

    /// The code does not have the layout the coder expects.
    #[error("malformed {coder} code {code}")]
    Malformed {
        /// Coder that rejected the code.
        coder: &'static str,
        /// The code in hex.
        code: String,
    },

    /// A known-vocabulary code whose id is not in the dictionary.
    #[error("no known IRI with id {0}")]
    UnknownId(u32),

    /// A fixed-namespace code whose index is not configured.
    #[error("no fixed namespace with index {0}")]
    UnknownNamespace(u8),
}

impl CoderError {
    pub(crate) fn malformed(coder: &'static str, code: &[u8]) -> Self {
        CoderError::Malformed {
            coder,
            code: hex::encode(code),
        }
    }
}

/// Result alias used across the crate.
pub type Result<T, E = CoderError> = std::result::Result<T, E>;
