//! `skos:` namespace: Simple Knowledge Organization System.

use crate::vocabulary;

vocabulary! {
    /// SKOS core vocabulary.
    pub struct SkosVocabulary;
    prefix = "skos";
    namespace = "http://www.w3.org/2004/02/skos/core#";
    label = "SKOS Vocabulary";
    family = Core;
    terms {
        /// An idea or notion; a unit of thought.
        Concept => "Concept";
        /// A set of concepts, optionally including statements about semantic relationships
        /// between those concepts.
        ConceptScheme => "ConceptScheme";
        /// A meaningful collection of concepts.
        Collection => "Collection";
        /// An ordered collection of concepts, where both the grouping and the ordering are
        /// meaningful.
        OrderedCollection => "OrderedCollection";
        inScheme => "inScheme";
        hasTopConcept => "hasTopConcept";
        topConceptOf => "topConceptOf";
        /// An alternative lexical label for a resource.
        altLabel => "altLabel";
        hiddenLabel => "hiddenLabel";
        /// The preferred and emphasized lexical label for a resource, in a given language.
        prefLabel => "prefLabel";
        notation => "notation";
        changeNote => "changeNote";
        definition => "definition";
        editorialNote => "editorialNote";
        example => "example";
        historyNote => "historyNote";
        note => "note";
        scopeNote => "scopeNote";
        /// Relates a concept to a concept that is more general in meaning.
        broader => "broader";
        broaderTransitive => "broaderTransitive";
        /// Relates a concept to a concept that is more specific in meaning.
        narrower => "narrower";
        narrowerTransitive => "narrowerTransitive";
        related => "related";
        semanticRelation => "semanticRelation";
        member => "member";
        memberList => "memberList";
        broadMatch => "broadMatch";
        closeMatch => "closeMatch";
        /// Links two concepts that can be used interchangeably across a wide range of retrieval
        /// applications.
        exactMatch => "exactMatch";
        mappingRelation => "mappingRelation";
        narrowMatch => "narrowMatch";
        relatedMatch => "relatedMatch";
    }
}
