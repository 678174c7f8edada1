//! Known-vocabulary coder: id assignment and snapshot reuse.

use datafabric_coder::{Coder, Dictionary, KnownVocabularyCoder};
use datafabric_vocab::namespaces::{geonames, goodrelations, music, rdf, rdfs};
use datafabric_vocab::Registry;

fn coder(coder_id: u8, snapshot: Dictionary) -> KnownVocabularyCoder {
    KnownVocabularyCoder::initialize(coder_id, snapshot, Registry::full()).unwrap()
}

#[test]
fn without_existing_dictionary() {
    let coder0 = coder(0, Dictionary::new());
    for (iri, expected) in [
        (rdf::type_, [0b0000_0001, 0, 0, 0b0000_0001]),
        (rdf::Statement, [0b0000_0001, 0, 0, 0b0000_0111]),
        (rdfs::Literal, [0b0000_0001, 0, 0, 0b0001_0100]),
    ] {
        let code = coder0.encode(iri).unwrap();
        assert_eq!(code.as_bytes(), &expected, "{iri}");
        assert_eq!(coder0.decode(&expected).unwrap(), iri);
    }

    let coder2 = coder(2, Dictionary::new());
    for (iri, expected) in [
        (rdf::type_, [0b0000_1001, 0, 0, 0b0000_0001]),
        (rdf::Statement, [0b0000_1001, 0, 0, 0b0000_0111]),
        (rdfs::Literal, [0b0000_1001, 0, 0, 0b0001_0100]),
    ] {
        let code = coder2.encode(iri).unwrap();
        assert_eq!(code.as_bytes(), &expected, "{iri}");
        assert_eq!(coder2.decode(&expected).unwrap(), iri);
    }
}

#[test]
fn with_existing_dictionary() {
    let dictionary1 = coder(0, Dictionary::new()).dictionary();
    let coder2 = coder(0, dictionary1.clone());
    assert_eq!(coder2.dictionary(), dictionary1);
    assert_eq!(coder2.added(), 0);

    let mut dictionary3 = Dictionary::new();
    dictionary3.insert("http://example.com/1", 0);
    let coder3 = coder(0, dictionary3);
    assert_eq!(
        coder3.encode(rdf::type_).unwrap().as_bytes(),
        &[0b0000_0001, 0, 0, 0b0000_0010]
    );
    assert_eq!(coder3.id("http://example.com/1"), Some(0));
}

#[test]
fn inexistent_mapping() {
    let coder0 = coder(0, Dictionary::new());
    assert!(coder0.encode("http://example.com/1").is_none());
    assert!(coder0.encode("").is_none());
}

#[test]
fn numbers_every_registry_identifier() {
    let coder0 = coder(0, Dictionary::new());
    let registry = Registry::full();
    assert_eq!(coder0.len(), registry.term_count());
    let max = registry.identifiers().filter_map(|iri| coder0.id(iri)).max();
    assert_eq!(max, u32::try_from(registry.term_count()).ok());
}

#[test]
fn snapshot_ids_survive_registry_growth() {
    // A snapshot that only knows rdf:type under a foreign id.
    let mut snapshot = Dictionary::new();
    snapshot.insert(rdf::type_, 500);
    let coder = coder(0, snapshot);
    assert_eq!(coder.id(rdf::type_), Some(500));
    // Counter starts at 1; rdf:Property is the first identifier still missing.
    assert_eq!(coder.id(rdf::Property), Some(2));
    assert_eq!(coder.added(), Registry::full().term_count() - 1);
}

#[test]
fn namespace_iris_get_ids() {
    let coder0 = coder(0, Dictionary::new());
    // 438 terms precede gr, whose namespace entry comes first.
    assert_eq!(coder0.id(goodrelations::NAMESPACE), Some(439));
    assert_eq!(coder0.id(geonames::NAMESPACE), Some(439 + 177));
    assert_eq!(coder0.id(music::NAMESPACE), Some(439 + 177 + 734));

    let code = coder0.encode(geonames::NAMESPACE).unwrap();
    assert_eq!(code.as_bytes(), &[0b0000_0001, 0, 0x02, 0x68]);
    assert_eq!(coder0.decode(code.as_bytes()).unwrap(), geonames::NAMESPACE);
}
