//! `rdfs:` namespace: RDF Schema.

use crate::vocabulary;

vocabulary! {
    /// RDF Schema vocabulary.
    pub struct RdfsVocabulary;
    prefix = "rdfs";
    namespace = "http://www.w3.org/2000/01/rdf-schema#";
    label = "The RDF Schema vocabulary";
    family = Core;
    terms {
        /// The class resource, everything.
        Resource => "Resource";
        /// The class of literal values, eg. textual strings and integers.
        Literal => "Literal";
        /// The class of classes.
        Class => "Class";
        /// The subject is a subclass of a class.
        subClassOf => "subClassOf";
        /// The subject is a subproperty of a property.
        subPropertyOf => "subPropertyOf";
        /// A domain of the subject property.
        domain => "domain";
        /// A range of the subject property.
        range => "range";
        /// A description of the subject resource.
        comment => "comment";
        /// A human-readable name for the subject.
        label => "label";
        /// The class of RDF datatypes.
        Datatype => "Datatype";
        /// The class of RDF containers.
        Container => "Container";
        /// A member of the subject resource.
        member => "member";
        /// The defininition of the subject resource.
        isDefinedBy => "isDefinedBy";
        /// Further information about the subject resource.
        seeAlso => "seeAlso";
        /// The class of container membership properties, rdf:_1, rdf:_2, ..., all of which are
        /// sub-properties of 'member'.
        ContainerMembershipProperty => "ContainerMembershipProperty";
    }
}
