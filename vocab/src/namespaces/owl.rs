//! `owl:` namespace: OWL 2 Web Ontology Language.

use crate::vocabulary;

vocabulary! {
    /// OWL 2 vocabulary.
    pub struct OwlVocabulary;
    prefix = "owl";
    namespace = "http://www.w3.org/2002/07/owl#";
    label = "The OWL 2 Schema vocabulary";
    family = Core;
    terms {
        Class => "Class";
        Individual => "Individual";
        Thing => "Thing";
        Nothing => "Nothing";
        equivalentClass => "equivalentClass";
        equivalentProperty => "equivalentProperty";
        sameAs => "sameAs";
        differentFrom => "differentFrom";
        AllDifferent => "AllDifferent";
        distinctMembers => "distinctMembers";
        ObjectProperty => "ObjectProperty";
        DatatypeProperty => "DatatypeProperty";
        inverseOf => "inverseOf";
        TransitiveProperty => "TransitiveProperty";
        SymmetricProperty => "SymmetricProperty";
        FunctionalProperty => "FunctionalProperty";
        InverseFunctionalProperty => "InverseFunctionalProperty";
        Restriction => "Restriction";
        onProperty => "onProperty";
        allValuesFrom => "allValuesFrom";
        someValuesFrom => "someValuesFrom";
        minCardinality => "minCardinality";
        maxCardinality => "maxCardinality";
        cardinality => "cardinality";
        Ontology => "Ontology";
        imports => "imports";
        intersectionOf => "intersectionOf";
        versionInfo => "versionInfo";
        versionIRI => "versionIRI";
        priorVersion => "priorVersion";
        backwardCompatibleWith => "backwardCompatibleWith";
        incompatibleWith => "incompatibleWith";
        DeprecatedClass => "DeprecatedClass";
        DeprecatedProperty => "DeprecatedProperty";
        AnnotationProperty => "AnnotationProperty";
        OntologyProperty => "OntologyProperty";
        oneOf => "oneOf";
        hasValue => "hasValue";
        disjointWith => "disjointWith";
        unionOf => "unionOf";
        complementOf => "complementOf";
        AllDisjointClasses => "AllDisjointClasses";
        AllDisjointProperties => "AllDisjointProperties";
        Annotation => "Annotation";
        Axiom => "Axiom";
        AsymmetricProperty => "AsymmetricProperty";
        DataRange => "DataRange";
        IrreflexiveProperty => "IrreflexiveProperty";
        NamedIndividual => "NamedIndividual";
        NegativePropertyAssertion => "NegativePropertyAssertion";
        ReflexiveProperty => "ReflexiveProperty";
        annotatedProperty => "annotatedProperty";
        annotatedSource => "annotatedSource";
        annotatedTarget => "annotatedTarget";
        assertionProperty => "assertionProperty";
        bottomDataProperty => "bottomDataProperty";
        bottomObjectProperty => "bottomObjectProperty";
        datatypeComplementOf => "datatypeComplementOf";
        disjointUnionOf => "disjointUnionOf";
        hasKey => "hasKey";
        hasSelf => "hasSelf";
        maxQualifiedCardinality => "maxQualifiedCardinality";
        members => "members";
        minQualifiedCardinality => "minQualifiedCardinality";
        onClass => "onClass";
        onDataRange => "onDataRange";
        onDatatype => "onDatatype";
        onProperties => "onProperties";
        propertyChainAxiom => "propertyChainAxiom";
        propertyDisjointWith => "propertyDisjointWith";
        qualifiedCardinality => "qualifiedCardinality";
        sourceIndividual => "sourceIndividual";
        targetIndividual => "targetIndividual";
        targetValue => "targetValue";
        topDataProperty => "topDataProperty";
        topObjectProperty => "topObjectProperty";
        withRestrictions => "withRestrictions";
        deprecated => "deprecated";
        rational => "rational";
        real => "real";
    }
}
