//! `fts:` namespace: Federal Tax Service register fields.

use crate::vocabulary;

vocabulary! {
    /// Federal Tax Service register fields.
    pub struct FtsVocabulary;
    prefix = "fts";
    namespace = "https://w3id.org/datafabric.cc/ontologies/fts#";
    label = "Federal Tax Service register";
    family = Local;
    terms {
        p18_postcode => "p18_postcode";
    }
}
