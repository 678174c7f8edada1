//! The [`Code`] value and the [`Coder`] capability shared by the IRI coders.

use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use crate::error::{CoderError, Result};
use crate::header::{self, ValueType};

/// A compact binary code: one header byte followed by a coder-specific payload.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Code(Vec<u8>);

impl Code {
    /// Builds a code from a header byte and a payload.
    #[must_use]
    pub fn new(header: u8, payload: &[u8]) -> Self {
        let mut bytes = Vec::with_capacity(payload.len() + 1);
        bytes.push(header);
        bytes.extend_from_slice(payload);
        Code(bytes)
    }

    /// The raw bytes, header included.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Consumes the code and returns its bytes.
    #[must_use]
    pub fn into_bytes(self) -> Vec<u8> {
        self.0
    }

    /// Id of the coder that produced this code.
    #[must_use]
    pub fn coder_id(&self) -> Option<u8> {
        header::coder_id(&self.0)
    }

    /// Value type recorded in the header.
    #[must_use]
    pub fn value_type(&self) -> Option<ValueType> {
        header::value_type(&self.0)
    }
}

impl From<Vec<u8>> for Code {
    fn from(bytes: Vec<u8>) -> Self {
        Code(bytes)
    }
}

impl AsRef<[u8]> for Code {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&hex::encode(&self.0))
    }
}

impl FromStr for Code {
    type Err = CoderError;

    fn from_str(s: &str) -> Result<Self> {
        let bytes = hex::decode(s.trim())?;
        if bytes.is_empty() {
            return Err(CoderError::EmptyCode);
        }
        Ok(Code(bytes))
    }
}

/// One link of the IRI coder chain.
///
/// `encode` returns `None` when the IRI is outside what this coder handles,
/// letting the chain fall through to the next coder.
pub trait Coder: Send + Sync {
    /// Id written into the header of every code this coder produces.
    fn coder_id(&self) -> u8;

    /// Encodes `iri`, or returns `None` if this coder does not handle it.
    fn encode(&self, iri: &str) -> Option<Code>;

    /// Decodes a code produced by [`Coder::encode`].
    ///
    /// # Errors
    ///
    /// Returns [`CoderError::Malformed`] when the header does not belong to
    /// this coder or the payload has the wrong layout, and a lookup error
    /// when the payload refers to an entry the coder does not know.
    fn decode<'a>(&'a self, code: &'a [u8]) -> Result<Cow<'a, str>>;
}

/// Checks that `code` starts with `expected` and returns the payload.
pub(crate) fn payload<'a>(coder: &'static str, expected: u8, code: &'a [u8]) -> Result<&'a [u8]> {
    match code.split_first() {
        Some((&first, rest)) if first == expected => Ok(rest),
        Some(_) => Err(CoderError::malformed(coder, code)),
        None => Err(CoderError::EmptyCode),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_form() {
        let code = Code::new(0x01, &[0, 0, 7]);
        assert_eq!(code.to_string(), "01000007");
        assert_eq!("01000007".parse::<Code>().ok(), Some(code));
    }

    #[test]
    fn rejects_bad_hex() {
        assert!(matches!("0g".parse::<Code>(), Err(CoderError::Hex(_))));
        assert!(matches!("".parse::<Code>(), Err(CoderError::EmptyCode)));
    }

    #[test]
    fn payload_checks_header() {
        assert_eq!(payload("t", 0x05, &[0x05, 1, 2]).ok(), Some(&[1u8, 2][..]));
        assert!(matches!(
            payload("t", 0x05, &[0x01, 1]),
            Err(CoderError::Malformed { coder: "t", .. })
        ));
        assert!(matches!(payload("t", 0x05, &[]), Err(CoderError::EmptyCode)));
    }
}
