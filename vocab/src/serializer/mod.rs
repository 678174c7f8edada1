//! Serializers for the vocabulary registry.
//!
//! Three formats are supported, each listing every vocabulary as an
//! `owl:Ontology` node and every term with `rdfs:isDefinedBy` its namespace:
//! - **JSON-LD** ([`jsonld`]), output to `vocabularies.jsonld`, plus a bare
//!   `@context` document in `context.jsonld`
//! - **Turtle** ([`turtle`]), output to `vocabularies.ttl`
//! - **N-Triples** ([`ntriples`]), output to `vocabularies.nt`

#[cfg(feature = "serializers")]
pub mod jsonld;
pub mod ntriples;
pub mod turtle;
