//! Core vocabulary model types.
//!
//! A vocabulary is a namespace IRI plus a fixed, declaration-ordered table of
//! [`Term`]s. Every table in [`crate::namespaces`] is `static` data generated by
//! the [`vocabulary!`](crate::vocabulary) macro and exposed through the
//! [`Vocabulary`] trait. The top-level entry point is
//! [`Registry::full()`](crate::Registry::full).

use std::iter::FusedIterator;
use std::slice;

/// Where a vocabulary comes from.
///
/// - `Core`: W3C recommendations (`rdf`, `rdfs`, `owl`, `xsd`, `skos`, `org`, `rov`)
/// - `Community`: widely deployed community ontologies (Dublin Core, FOAF, GeoNames, ...)
/// - `Fibo`: EDM Council FIBO and OMG LCC modules
/// - `Local`: ontologies published by DataFabric itself
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize), serde(rename_all = "lowercase"))]
pub enum Family {
    /// W3C core vocabularies.
    Core,
    /// Community-maintained vocabularies.
    Community,
    /// Financial Industry Business Ontology modules.
    Fibo,
    /// Locally published vocabularies.
    Local,
}

impl Family {
    /// Returns the lowercase name used in listings.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Family::Core => "core",
            Family::Community => "community",
            Family::Fibo => "fibo",
            Family::Local => "local",
        }
    }
}

/// A single vocabulary entry: a local name and the full IRI built from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Term {
    /// The suffix appended to the namespace (e.g., `"A.ADM1"`).
    pub local_name: &'static str,
    /// The full IRI (e.g., `"http://www.geonames.org/ontology#A.ADM1"`).
    pub iri: &'static str,
}

impl Term {
    /// Creates a term from its local name and precomputed IRI.
    #[must_use]
    pub const fn new(local_name: &'static str, iri: &'static str) -> Self {
        Self { local_name, iri }
    }

    /// Returns the namespace part of the IRI, i.e. the IRI without the local name.
    #[must_use]
    pub fn namespace(&self) -> &'static str {
        let split = self.iri.len().saturating_sub(self.local_name.len());
        self.iri.get(..split).unwrap_or(self.iri)
    }
}

/// Capability shared by every vocabulary table.
///
/// Implementors only provide the metadata and the static term table; all
/// lookups are derived from [`Vocabulary::terms`].
pub trait Vocabulary: Send + Sync {
    /// Preferred prefix (e.g., `"gn"`).
    fn prefix(&self) -> &'static str;

    /// Namespace IRI shared by every term (e.g., `"http://www.geonames.org/ontology#"`).
    fn namespace(&self) -> &'static str;

    /// Human-readable label.
    fn label(&self) -> &'static str;

    /// Provenance classification.
    fn family(&self) -> Family;

    /// Every term in declaration order.
    fn terms(&self) -> &'static [Term];

    /// Iterates over every full identifier. Restartable: each call starts over.
    fn identifiers(&self) -> Identifiers {
        Identifiers::new(self.terms())
    }

    /// Number of terms.
    fn len(&self) -> usize {
        self.terms().len()
    }

    /// Returns `true` if the table declares no terms.
    fn is_empty(&self) -> bool {
        self.terms().is_empty()
    }

    /// Looks up the term whose full identifier is `iri`.
    fn term(&self, iri: &str) -> Option<&'static Term> {
        let local = iri.strip_prefix(self.namespace())?;
        self.terms().iter().find(|t| t.local_name == local)
    }

    /// Returns `true` if `iri` is one of this vocabulary's identifiers.
    fn contains(&self, iri: &str) -> bool {
        self.term(iri).is_some()
    }

    /// Resolves a local name to its full identifier.
    fn lookup(&self, local_name: &str) -> Option<&'static str> {
        self.terms()
            .iter()
            .find(|t| t.local_name == local_name)
            .map(|t| t.iri)
    }

    /// Shortens a known identifier to `prefix:local`.
    fn compact(&self, iri: &str) -> Option<String> {
        self.term(iri)
            .map(|t| format!("{}:{}", self.prefix(), t.local_name))
    }
}

impl std::fmt::Debug for dyn Vocabulary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Vocabulary")
            .field("prefix", &self.prefix())
            .field("namespace", &self.namespace())
            .field("terms", &self.len())
            .finish()
    }
}

/// Iterator over the full identifiers of a vocabulary.
#[derive(Debug, Clone)]
pub struct Identifiers {
    inner: slice::Iter<'static, Term>,
}

impl Identifiers {
    /// Creates an iterator over the identifiers of `terms`.
    #[must_use]
    pub fn new(terms: &'static [Term]) -> Self {
        Self {
            inner: terms.iter(),
        }
    }
}

impl Iterator for Identifiers {
    type Item = &'static str;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|t| t.iri)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl DoubleEndedIterator for Identifiers {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|t| t.iri)
    }
}

impl ExactSizeIterator for Identifiers {}

impl FusedIterator for Identifiers {}

/// Standard IRI constants used by the serializers.
pub mod iris {
    /// OWL namespace.
    pub const OWL: &str = "http://www.w3.org/2002/07/owl#";
    /// RDF namespace.
    pub const RDF: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#";
    /// RDFS namespace.
    pub const RDFS: &str = "http://www.w3.org/2000/01/rdf-schema#";
    /// XSD namespace.
    pub const XSD: &str = "http://www.w3.org/2001/XMLSchema#";
    /// VANN namespace (vocabulary annotations).
    pub const VANN: &str = "http://purl.org/vocab/vann/";

    /// `rdf:type`.
    pub const RDF_TYPE: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#type";
    /// `rdfs:label`.
    pub const RDFS_LABEL: &str = "http://www.w3.org/2000/01/rdf-schema#label";
    /// `rdfs:isDefinedBy`.
    pub const RDFS_IS_DEFINED_BY: &str = "http://www.w3.org/2000/01/rdf-schema#isDefinedBy";
    /// `owl:Ontology`.
    pub const OWL_ONTOLOGY: &str = "http://www.w3.org/2002/07/owl#Ontology";
    /// `vann:preferredNamespacePrefix`.
    pub const VANN_PREFERRED_PREFIX: &str = "http://purl.org/vocab/vann/preferredNamespacePrefix";
    /// `vann:preferredNamespaceUri`.
    pub const VANN_PREFERRED_URI: &str = "http://purl.org/vocab/vann/preferredNamespaceUri";
    /// `xsd:string`.
    pub const XSD_STRING: &str = "http://www.w3.org/2001/XMLSchema#string";
    /// `xsd:anyURI`.
    pub const XSD_ANY_URI: &str = "http://www.w3.org/2001/XMLSchema#anyURI";
}

#[cfg(test)]
mod tests {
    use super::*;

    static TERMS: &[Term] = &[
        Term::new("a", "http://example.org/ns#a"),
        Term::new("b", "http://example.org/ns#b"),
    ];

    struct Example;

    impl Vocabulary for Example {
        fn prefix(&self) -> &'static str {
            "ex"
        }
        fn namespace(&self) -> &'static str {
            "http://example.org/ns#"
        }
        fn label(&self) -> &'static str {
            "Example"
        }
        fn family(&self) -> Family {
            Family::Local
        }
        fn terms(&self) -> &'static [Term] {
            TERMS
        }
    }

    #[test]
    fn term_namespace_strips_local_name() {
        assert_eq!(TERMS[0].namespace(), "http://example.org/ns#");
    }

    #[test]
    fn identifiers_are_exact_size_and_restartable() {
        let first: Vec<_> = Example.identifiers().collect();
        let second: Vec<_> = Example.identifiers().collect();
        assert_eq!(first, second);
        assert_eq!(Example.identifiers().len(), 2);
        assert_eq!(
            Example.identifiers().rev().next(),
            Some("http://example.org/ns#b")
        );
    }

    #[test]
    fn lookups() {
        assert!(Example.contains("http://example.org/ns#a"));
        assert!(!Example.contains("http://example.org/ns#c"));
        assert!(!Example.contains("http://example.org/other#a"));
        assert_eq!(Example.lookup("b"), Some("http://example.org/ns#b"));
        assert_eq!(
            Example.compact("http://example.org/ns#a").as_deref(),
            Some("ex:a")
        );
    }
}
