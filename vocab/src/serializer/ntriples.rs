//! N-Triples serializer for the vocabulary registry.
//!
//! One triple per line with absolute IRIs; suitable for bulk loading the
//! vocabulary listing into a store.

use crate::model::iris;
use crate::Registry;

/// Serializes the registry to an N-Triples string.
#[must_use]
pub fn to_ntriples(registry: &Registry) -> String {
    let mut out = String::with_capacity(256 * 1024);

    for vocabulary in registry.vocabularies() {
        let namespace = vocabulary.namespace();
        triple(&mut out, namespace, iris::RDF_TYPE, &iri(iris::OWL_ONTOLOGY));
        triple(&mut out, namespace, iris::RDFS_LABEL, &lit(vocabulary.label(), iris::XSD_STRING));
        triple(&mut out, namespace, iris::VANN_PREFERRED_PREFIX, &lit(vocabulary.prefix(), iris::XSD_STRING));
        triple(&mut out, namespace, iris::VANN_PREFERRED_URI, &lit(namespace, iris::XSD_ANY_URI));

        for id in vocabulary.identifiers() {
            triple(&mut out, id, iris::RDFS_IS_DEFINED_BY, &iri(namespace));
        }
    }

    out
}

fn triple(out: &mut String, subj: &str, pred: &str, obj: &str) {
    out.push('<');
    out.push_str(subj);
    out.push_str("> <");
    out.push_str(pred);
    out.push_str("> ");
    out.push_str(obj);
    out.push_str(" .\n");
}

fn iri(s: &str) -> String {
    format!("<{}>", s)
}

fn lit(s: &str, datatype: &str) -> String {
    let escaped = s.replace('\\', "\\\\").replace('"', "\\\"").replace('\n', "\\n");
    format!("\"{}\"^^<{}>", escaped, datatype)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_line_ends_with_period() {
        let nt = to_ntriples(Registry::full());
        for line in nt.lines() {
            assert!(line.starts_with('<'), "Line does not start with an IRI: {line}");
            assert!(line.ends_with(" ."), "Line does not end with ' .': {line}");
        }
    }

    #[test]
    fn one_line_per_term_plus_four_per_vocabulary() {
        let registry = Registry::full();
        let nt = to_ntriples(registry);
        assert_eq!(
            nt.lines().count(),
            registry.term_count() + 4 * registry.len()
        );
    }

    #[test]
    fn escapes_literals() {
        assert_eq!(
            lit("a \"b\"\n", iris::XSD_STRING),
            format!("\"a \\\"b\\\"\\n\"^^<{}>", iris::XSD_STRING)
        );
    }
}
