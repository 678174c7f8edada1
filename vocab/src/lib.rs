//! Known RDF vocabularies encoded as static IRI tables.
//!
//! The `datafabric-vocab` crate enumerates the terms of the vocabularies the
//! DataFabric pipeline recognizes (the W3C core, Dublin Core, FOAF, GeoNames,
//! GoodRelations, the Music Ontology, FIBO modules and local ontologies).
//! Every term is a compile-time `&'static str` built by concatenating its
//! vocabulary's namespace with a local name, and every vocabulary exposes its
//! terms through the [`Vocabulary`] trait.
//!
//! # Entry Point
//!
//! ```
//! use datafabric_vocab::namespaces::geonames;
//! use datafabric_vocab::{Registry, Vocabulary};
//!
//! assert_eq!(geonames::A_ADM1, "http://www.geonames.org/ontology#A.ADM1");
//! assert_eq!(geonames::GeoNamesVocabulary.identifiers().count(), 734);
//!
//! let registry = Registry::full();
//! assert_eq!(registry.expand("gn:A.ADM1"), Some(geonames::A_ADM1));
//! ```
//!
//! # Serialization
//!
//! ```
//! let registry = datafabric_vocab::Registry::full();
//! let json_ld = datafabric_vocab::serializer::jsonld::to_json_ld(registry);
//! let turtle  = datafabric_vocab::serializer::turtle::to_turtle(registry);
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

mod macros;

pub mod model;
pub mod namespaces;
pub mod registry;
pub mod serializer;

pub use model::{Family, Identifiers, Term, Vocabulary};
pub use registry::{Registry, RegistryError};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::namespaces::{geonames, goodrelations, music, rdf};

    #[test]
    fn vocabulary_count() {
        assert_eq!(Registry::full().len(), 37);
    }

    #[test]
    fn inventory_counts() {
        assert_eq!(geonames::GeoNamesVocabulary.len(), 734);
        assert_eq!(goodrelations::GoodRelationsVocabulary.len(), 177);
        assert_eq!(music::MusicVocabulary.len(), 240);
        assert_eq!(rdf::RdfVocabulary.len(), 18);
    }

    #[test]
    fn all_identifiers_unique() {
        let mut iris = std::collections::HashSet::new();
        for iri in Registry::full().identifiers() {
            assert!(iris.insert(iri), "Duplicate identifier: {iri}");
        }
    }

    #[test]
    fn keyword_local_names_get_trailing_underscore() {
        assert_eq!(rdf::type_, "http://www.w3.org/1999/02/22-rdf-syntax-ns#type");
    }
}
