//! `rdf:` namespace: RDF 1.1 concepts.
//!
//! Term order follows the rdf4j `RDF` vocabulary class; the known-vocabulary
//! dictionary assigns ids in this order.

use crate::vocabulary;

vocabulary! {
    /// RDF concepts vocabulary.
    pub struct RdfVocabulary;
    prefix = "rdf";
    namespace = "http://www.w3.org/1999/02/22-rdf-syntax-ns#";
    label = "The RDF Concepts Vocabulary";
    family = Core;
    terms {
        /// The subject is an instance of a class.
        type_ => "type";
        /// The class of RDF properties.
        Property => "Property";
        /// The datatype of XML literal values.
        XMLLiteral => "XMLLiteral";
        /// The subject of the subject RDF statement.
        subject => "subject";
        /// The predicate of the subject RDF statement.
        predicate => "predicate";
        /// The object of the subject RDF statement.
        object => "object";
        /// The class of RDF statements.
        Statement => "Statement";
        /// The class of unordered containers.
        Bag => "Bag";
        /// The class of containers of alternatives.
        Alt => "Alt";
        /// The class of ordered containers.
        Seq => "Seq";
        /// Idiomatic property used for structured values.
        value => "value";
        li => "li";
        /// The class of RDF Lists.
        List => "List";
        /// The first item in the subject RDF list.
        first => "first";
        /// The rest of the subject RDF list after the first item.
        rest => "rest";
        /// The empty list, with no items in it.
        nil => "nil";
        /// The datatype of language-tagged string values.
        langString => "langString";
        /// The datatype of RDF literals storing fragments of HTML content.
        HTML => "HTML";
    }
}
