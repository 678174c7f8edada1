//! Coder for IRIs under a fixed list of namespaces.
//!
//! An IRI is split into namespace and local name; if the namespace is one of
//! the configured ones, the code is the header, the namespace's index and the
//! UTF-8 local name.

use std::borrow::Cow;
use std::collections::HashMap;

use crate::codec::{payload, Code, Coder};
use crate::error::{CoderError, Result};
use crate::header::{header, ValueType, MAX_CODER_ID};

const NAME: &str = "fixed-namespace";

/// Most namespaces a one-byte index can address.
pub const MAX_NAMESPACES: usize = 256;

/// Splits `iri` into namespace and local name.
///
/// The namespace ends after the first `#`; failing that, after the last `/`;
/// failing that, after the last `:`. Returns `None` when none is present.
#[must_use]
pub fn split_iri(iri: &str) -> Option<(&str, &str)> {
    let at = iri
        .find('#')
        .or_else(|| iri.rfind('/'))
        .or_else(|| iri.rfind(':'))?;
    Some(iri.split_at(at + 1))
}

/// Fixed-namespace coder.
#[derive(Debug, Clone)]
pub struct NamespaceCoder {
    coder_id: u8,
    header: u8,
    namespaces: Vec<String>,
    index: HashMap<String, u8>,
}

impl NamespaceCoder {
    /// Creates a coder for `namespaces`, indexed in the given order.
    ///
    /// # Errors
    ///
    /// - [`CoderError::CoderIdOutOfRange`] if `coder_id` exceeds the header field
    /// - [`CoderError::TooManyNamespaces`] for more than [`MAX_NAMESPACES`] entries
    /// - [`CoderError::DuplicateNamespace`] if a namespace is listed twice
    pub fn new<I, S>(coder_id: u8, namespaces: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        if coder_id > MAX_CODER_ID {
            return Err(CoderError::CoderIdOutOfRange(coder_id));
        }
        let namespaces: Vec<String> = namespaces.into_iter().map(Into::into).collect();
        if namespaces.len() > MAX_NAMESPACES {
            return Err(CoderError::TooManyNamespaces(namespaces.len()));
        }
        let mut index = HashMap::with_capacity(namespaces.len());
        for (i, namespace) in namespaces.iter().enumerate() {
            let i = u8::try_from(i).map_err(|_| CoderError::TooManyNamespaces(namespaces.len()))?;
            if index.insert(namespace.clone(), i).is_some() {
                return Err(CoderError::DuplicateNamespace(namespace.clone()));
            }
        }
        Ok(Self {
            coder_id,
            header: header(coder_id, ValueType::Iri),
            namespaces,
            index,
        })
    }

    /// The configured namespaces in index order.
    #[must_use]
    pub fn namespaces(&self) -> &[String] {
        &self.namespaces
    }
}

impl Coder for NamespaceCoder {
    fn coder_id(&self) -> u8 {
        self.coder_id
    }

    fn encode(&self, iri: &str) -> Option<Code> {
        let (namespace, local) = split_iri(iri)?;
        let &i = self.index.get(namespace)?;
        let mut bytes = Vec::with_capacity(local.len() + 1);
        bytes.push(i);
        bytes.extend_from_slice(local.as_bytes());
        Some(Code::new(self.header, &bytes))
    }

    fn decode<'a>(&'a self, code: &'a [u8]) -> Result<Cow<'a, str>> {
        let (&i, local) = payload(NAME, self.header, code)?
            .split_first()
            .ok_or_else(|| CoderError::malformed(NAME, code))?;
        let namespace = self
            .namespaces
            .get(usize::from(i))
            .ok_or(CoderError::UnknownNamespace(i))?;
        let local = std::str::from_utf8(local)?;
        Ok(Cow::Owned(format!("{namespace}{local}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coder() -> NamespaceCoder {
        NamespaceCoder::new(1, ["urn:datafabric:org:", "http://example.com/person/"]).unwrap()
    }

    #[test]
    fn splits_like_rdf_local_names() {
        assert_eq!(
            split_iri("http://www.geonames.org/ontology#A.ADM1"),
            Some(("http://www.geonames.org/ontology#", "A.ADM1"))
        );
        assert_eq!(
            split_iri("http://example.com/a#b#c"),
            Some(("http://example.com/a#", "b#c"))
        );
        assert_eq!(
            split_iri("http://example.com/person/42"),
            Some(("http://example.com/person/", "42"))
        );
        assert_eq!(
            split_iri("urn:datafabric:org:1027700132195"),
            Some(("urn:datafabric:org:", "1027700132195"))
        );
        assert_eq!(split_iri("no-separator"), None);
    }

    #[test]
    fn encodes_index_and_local_name() {
        let code = coder().encode("http://example.com/person/42").unwrap();
        assert_eq!(code.as_bytes(), &[0b0000_0101, 1, b'4', b'2']);
        assert_eq!(
            coder().decode(code.as_bytes()).unwrap(),
            "http://example.com/person/42"
        );
    }

    #[test]
    fn unlisted_namespace_falls_through() {
        assert!(coder().encode("http://example.com/other/1").is_none());
        assert!(coder().encode("http://example.com/person/sub/1").is_none());
    }

    #[test]
    fn rejects_bad_configuration() {
        assert!(matches!(
            NamespaceCoder::new(1, ["urn:a:", "urn:a:"]),
            Err(CoderError::DuplicateNamespace(_))
        ));
        let many = (0..257).map(|i| format!("urn:ns{i}:"));
        assert!(matches!(
            NamespaceCoder::new(1, many),
            Err(CoderError::TooManyNamespaces(257))
        ));
        let exactly = (0..256).map(|i| format!("urn:ns{i}:"));
        assert!(NamespaceCoder::new(1, exactly).is_ok());
    }

    #[test]
    fn decode_errors() {
        assert!(matches!(
            coder().decode(&[0b0000_0101]),
            Err(CoderError::Malformed { .. })
        ));
        assert!(matches!(
            coder().decode(&[0b0000_0101, 9, b'x']),
            Err(CoderError::UnknownNamespace(9))
        ));
        assert!(matches!(
            coder().decode(&[0b0000_0101, 0, 0xff]),
            Err(CoderError::Utf8(_))
        ));
    }
}
