//! Fallback coder: the IRI's UTF-8 bytes after the header.

use std::borrow::Cow;

use crate::codec::{payload, Code, Coder};
use crate::error::{CoderError, Result};
use crate::header::{header, ValueType, MAX_CODER_ID};

const NAME: &str = "utf-8";

/// Encodes any IRI as its UTF-8 text.
#[derive(Debug, Clone, Copy)]
pub struct Utf8Coder {
    coder_id: u8,
    header: u8,
}

impl Utf8Coder {
    /// Creates the coder.
    ///
    /// # Errors
    ///
    /// Returns [`CoderError::CoderIdOutOfRange`] if `coder_id` exceeds the header field.
    pub fn new(coder_id: u8) -> Result<Self> {
        if coder_id > MAX_CODER_ID {
            return Err(CoderError::CoderIdOutOfRange(coder_id));
        }
        Ok(Self {
            coder_id,
            header: header(coder_id, ValueType::Iri),
        })
    }

    /// Encodes `iri`; unlike [`Coder::encode`] this cannot decline.
    #[must_use]
    pub fn to_code(&self, iri: &str) -> Code {
        Code::new(self.header, iri.as_bytes())
    }
}

impl Coder for Utf8Coder {
    fn coder_id(&self) -> u8 {
        self.coder_id
    }

    fn encode(&self, iri: &str) -> Option<Code> {
        Some(self.to_code(iri))
    }

    fn decode<'a>(&'a self, code: &'a [u8]) -> Result<Cow<'a, str>> {
        let text = std::str::from_utf8(payload(NAME, self.header, code)?)?;
        Ok(Cow::Borrowed(text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_then_text() {
        let coder = Utf8Coder::new(2).unwrap();
        let code = coder.encode("urn:x").unwrap();
        assert_eq!(code.as_bytes(), b"\x09urn:x");
        assert_eq!(coder.decode(code.as_bytes()).unwrap(), "urn:x");
    }

    #[test]
    fn rejects_wide_coder_id() {
        assert!(matches!(
            Utf8Coder::new(40),
            Err(CoderError::CoderIdOutOfRange(40))
        ));
    }
}
