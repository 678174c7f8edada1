//! Turtle 1.1 serializer for the vocabulary registry.
//!
//! Produces a Turtle document declaring every registry prefix, one
//! `owl:Ontology` block per vocabulary and one `rdfs:isDefinedBy` triple per
//! term. Terms are written as full IRIs since several local names (`A.ADM1`,
//! `ISO639-2`) are awkward as prefixed names.

use crate::model::iris;
use crate::Registry;

/// Prefixes the document uses itself, declared unless the registry already does.
const STANDARD_PREFIXES: &[(&str, &str)] = &[
    ("owl", iris::OWL),
    ("rdf", iris::RDF),
    ("rdfs", iris::RDFS),
    ("xsd", iris::XSD),
    ("vann", iris::VANN),
];

/// Serializes the registry to a Turtle string.
#[must_use]
pub fn to_turtle(registry: &Registry) -> String {
    let mut out = String::with_capacity(64 * 1024);

    for (prefix, namespace) in STANDARD_PREFIXES {
        if registry.by_prefix(prefix).is_none() {
            out.push_str(&format!("@prefix {prefix}: <{namespace}> .\n"));
        }
    }
    for vocabulary in registry.vocabularies() {
        out.push_str(&format!(
            "@prefix {}: <{}> .\n",
            vocabulary.prefix(),
            vocabulary.namespace()
        ));
    }
    out.push('\n');

    for vocabulary in registry.vocabularies() {
        let namespace = vocabulary.namespace();
        out.push_str(&format!("# Vocabulary: {}\n", vocabulary.prefix()));
        out.push_str(&format!(
            "<{}>\n  a owl:Ontology ;\n  rdfs:label {} ;\n  vann:preferredNamespacePrefix {} ;\n  vann:preferredNamespaceUri \"{}\"^^xsd:anyURI .\n\n",
            namespace,
            turtle_string(vocabulary.label()),
            turtle_string(vocabulary.prefix()),
            namespace
        ));
        for iri in vocabulary.identifiers() {
            out.push_str(&format!("<{iri}> rdfs:isDefinedBy <{namespace}> .\n"));
        }
        out.push('\n');
    }

    out
}

fn turtle_string(s: &str) -> String {
    let escaped = s.replace('\\', "\\\\").replace('"', "\\\"");
    format!("\"{}\"", escaped)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::namespaces::geonames;

    #[test]
    fn produces_non_empty_turtle() {
        let turtle = to_turtle(Registry::full());
        assert!(turtle.contains("@prefix vann:"));
        assert!(turtle.contains("owl:Ontology"));
    }

    #[test]
    fn declares_each_prefix_once() {
        let turtle = to_turtle(Registry::full());
        for vocabulary in Registry::full().vocabularies() {
            let decl = format!("@prefix {}: <", vocabulary.prefix());
            assert_eq!(
                turtle.matches(&decl).count(),
                1,
                "prefix '{}' declared more than once or missing",
                vocabulary.prefix()
            );
        }
    }

    #[test]
    fn lists_feature_codes() {
        let turtle = to_turtle(Registry::full());
        assert!(turtle.contains(&format!(
            "<{}> rdfs:isDefinedBy <{}> .",
            geonames::A_ADM1,
            geonames::NAMESPACE
        )));
    }
}
