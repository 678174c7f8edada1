//! JSON-LD 1.1 serializer for the vocabulary registry.
//!
//! [`to_json_ld`] produces a single document with the `@context` and an
//! `@graph` of vocabulary and term nodes. [`context`] produces the context
//! alone, for consumers that only need prefix expansion.

use serde_json::{json, Map, Value};

use crate::model::iris;
use crate::Registry;

/// Serializes the registry to a JSON-LD `Value`.
///
/// The returned value can be pretty-printed with [`serde_json::to_string_pretty`].
#[must_use]
pub fn to_json_ld(registry: &Registry) -> Value {
    json!({
        "@context": build_context(registry),
        "@graph": build_graph(registry)
    })
}

/// Returns a standalone `{"@context": {...}}` document mapping every
/// registry prefix to its namespace.
#[must_use]
pub fn context(registry: &Registry) -> Value {
    json!({ "@context": build_context(registry) })
}

fn build_context(registry: &Registry) -> Value {
    let mut ctx = Map::new();
    ctx.insert("owl".to_owned(), json!(iris::OWL));
    ctx.insert("rdf".to_owned(), json!(iris::RDF));
    ctx.insert("rdfs".to_owned(), json!(iris::RDFS));
    ctx.insert("xsd".to_owned(), json!(iris::XSD));
    ctx.insert("vann".to_owned(), json!(iris::VANN));
    for vocabulary in registry.vocabularies() {
        ctx.insert(vocabulary.prefix().to_owned(), json!(vocabulary.namespace()));
    }
    Value::Object(ctx)
}

fn build_graph(registry: &Registry) -> Value {
    let mut nodes: Vec<Value> = Vec::with_capacity(registry.len() + registry.term_count());

    for vocabulary in registry.vocabularies() {
        let namespace = vocabulary.namespace();
        nodes.push(json!({
            "@id": namespace,
            "@type": "owl:Ontology",
            "rdfs:label": vocabulary.label(),
            "vann:preferredNamespacePrefix": vocabulary.prefix(),
            "vann:preferredNamespaceUri": { "@value": namespace, "@type": "xsd:anyURI" }
        }));
        for id in vocabulary.identifiers() {
            nodes.push(json!({
                "@id": id,
                "rdfs:isDefinedBy": { "@id": namespace }
            }));
        }
    }

    Value::Array(nodes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn produces_context_and_graph() {
        let json = to_json_ld(Registry::full());
        assert!(json["@context"].is_object());
        assert!(json["@graph"].is_array());
    }

    #[test]
    fn context_has_all_prefixes() {
        let registry = Registry::full();
        let json = context(registry);
        let ctx = &json["@context"];
        for vocabulary in registry.vocabularies() {
            assert_eq!(
                ctx[vocabulary.prefix()].as_str(),
                Some(vocabulary.namespace()),
                "Missing prefix '{}' in @context",
                vocabulary.prefix()
            );
        }
    }

    #[test]
    fn graph_has_a_node_per_vocabulary_and_term() {
        let registry = Registry::full();
        let json = to_json_ld(registry);
        let graph = json["@graph"].as_array().expect("@graph must be array");
        assert_eq!(graph.len(), registry.len() + registry.term_count());
        for (i, node) in graph.iter().enumerate() {
            assert!(node["@id"].is_string(), "Node at index {i} is missing @id");
        }
    }
}
