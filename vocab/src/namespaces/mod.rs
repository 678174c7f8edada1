//! Vocabulary table modules.
//!
//! Each sub-module encodes one namespace as static data generated by
//! [`vocabulary!`](crate::vocabulary). Modules are listed in registry order;
//! see [`crate::Registry::full`] for the assembly sequence.

pub mod rdf;
pub mod rdfs;
pub mod owl;
pub mod xsd;
pub mod dc;
pub mod dcterms;
pub mod foaf;
pub mod org;
pub mod skos;
pub mod rov;
pub mod review;
pub mod opengraph;
pub mod goodrelations;
pub mod geonames;
pub mod music;
pub mod fibo;
pub mod fibo_ru;
pub mod fts;
