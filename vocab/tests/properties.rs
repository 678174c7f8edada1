//! Table invariants checked across every registered vocabulary.

use std::collections::HashSet;

use datafabric_vocab::namespaces::{dcterms, fibo, fibo_ru, geonames, goodrelations, music, rdf, rdfs};
use datafabric_vocab::{Registry, Vocabulary};

#[test]
fn every_identifier_is_namespace_plus_local_name() {
    for vocabulary in Registry::full().vocabularies() {
        for term in vocabulary.terms() {
            assert_eq!(
                term.iri,
                format!("{}{}", vocabulary.namespace(), term.local_name),
                "term {} of {}",
                term.local_name,
                vocabulary.prefix()
            );
            assert_eq!(term.namespace(), vocabulary.namespace());
        }
    }
}

#[test]
fn identifiers_have_no_duplicates_and_match_declared_count() {
    for vocabulary in Registry::full().vocabularies() {
        let ids: Vec<_> = vocabulary.identifiers().collect();
        let unique: HashSet<_> = ids.iter().copied().collect();
        assert_eq!(ids.len(), unique.len(), "duplicates in {}", vocabulary.prefix());
        assert_eq!(ids.len(), vocabulary.terms().len());
    }
}

#[test]
fn identifiers_are_restartable() {
    let vocabulary = &goodrelations::GoodRelationsVocabulary;
    let first: HashSet<_> = vocabulary.identifiers().collect();
    let second: HashSet<_> = vocabulary.identifiers().collect();
    assert_eq!(first, second);
}

#[test]
fn geonames_feature_code() {
    assert_eq!(geonames::A_ADM1, "http://www.geonames.org/ontology#A.ADM1");
    assert_eq!(geonames::NAMESPACE, "http://www.geonames.org/ontology#");
    assert_eq!(geonames::GeoNamesVocabulary.namespace(), geonames::NAMESPACE);
    assert!(geonames::GeoNamesVocabulary.contains(geonames::A_ADM1));
}

#[test]
fn declared_counts() {
    assert_eq!(geonames::GeoNamesVocabulary.identifiers().count(), 734);
    assert_eq!(goodrelations::GoodRelationsVocabulary.identifiers().count(), 177);
    assert_eq!(music::MusicVocabulary.identifiers().count(), 240);
    assert_eq!(fibo_ru::FiboRuVocabulary.identifiers().count(), 49);
}

#[test]
fn vocabularies_are_disjoint() {
    let vocabularies = Registry::full().vocabularies();
    for a in vocabularies {
        for b in vocabularies {
            if a.prefix() == b.prefix() {
                continue;
            }
            assert!(
                !b.namespace().starts_with(a.namespace()),
                "{} is a prefix of {}",
                a.namespace(),
                b.namespace()
            );
        }
    }

    let mut seen = HashSet::new();
    for iri in Registry::full().identifiers() {
        assert!(seen.insert(iri), "{iri} appears in two vocabularies");
    }
}

#[test]
fn case_distinct_local_names_stay_distinct() {
    assert_ne!(music::Activity, music::activity);
    assert_eq!(music::activity, "http://purl.org/ontology/mo/activity");
}

#[test]
fn punctuated_local_names() {
    assert_eq!(dcterms::ISO639_2, "http://purl.org/dc/terms/ISO639-2");
    assert_eq!(dcterms::abstract_, "http://purl.org/dc/terms/abstract");
    assert_eq!(
        fibo_ru::RUOrgStatus_101,
        "https://w3id.org/datafabric.cc/ontologies/fibo-ru#RUOrgStatus-101"
    );
    assert_eq!(
        fibo::fnd_acc_4217::RussianRuble,
        "https://spec.edmcouncil.org/fibo/ontology/FND/Accounting/ISO4217-CurrencyCodes/RussianRuble"
    );
}

#[test]
fn registry_round_trips_compact_names() {
    let registry = Registry::full();
    for iri in [rdf::Statement, rdfs::Literal, geonames::P_PPLC, fibo_ru::VATIN] {
        let compact = registry.compact(iri).expect("known identifier");
        assert_eq!(registry.expand(&compact), Some(iri));
    }
}

#[test]
fn rdf_and_rdfs_declaration_order() {
    let rdf_ids: Vec<_> = rdf::RdfVocabulary.identifiers().collect();
    assert_eq!(rdf_ids[0], rdf::type_);
    assert_eq!(rdf_ids[6], rdf::Statement);
    assert_eq!(rdfs::RdfsVocabulary.identifiers().nth(1), Some(rdfs::Literal));
}

#[test]
fn namespace_iri_is_an_identifier_where_declared() {
    let registry = Registry::full();
    let declared: [(&dyn Vocabulary, &str); 3] = [
        (&geonames::GeoNamesVocabulary, geonames::NAMESPACE_IRI),
        (&goodrelations::GoodRelationsVocabulary, goodrelations::NAMESPACE_IRI),
        (&music::MusicVocabulary, music::NAMESPACE_IRI),
    ];
    for (vocabulary, namespace_iri) in declared {
        assert_eq!(namespace_iri, vocabulary.namespace());
        assert_eq!(vocabulary.identifiers().next(), Some(namespace_iri));
        assert_eq!(vocabulary.lookup(""), Some(namespace_iri));
        assert_eq!(registry.expand(&format!("{}:", vocabulary.prefix())), Some(namespace_iri));
    }
    assert!(!rdf::RdfVocabulary.contains(rdf::NAMESPACE));
}
