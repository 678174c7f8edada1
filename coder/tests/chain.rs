//! The full coder chain: dispatch, persistence and round trips.

use std::sync::OnceLock;

use datafabric_coder::{
    CoderConfig, CoderError, DictionaryStore, IriCoder, JsonFileStore, MemoryStore, ValueType,
};
use datafabric_vocab::namespaces::{geonames, rdf};
use datafabric_vocab::Registry;
use proptest::prelude::*;

fn chain() -> &'static IriCoder {
    static CHAIN: OnceLock<IriCoder> = OnceLock::new();
    CHAIN.get_or_init(|| {
        let config = CoderConfig {
            fixed_namespaces: vec![
                "urn:datafabric:org:".to_owned(),
                "http://example.com/person/".to_owned(),
            ],
            ..CoderConfig::default()
        };
        IriCoder::initialize(&config, &MemoryStore::new(), Registry::full()).unwrap()
    })
}

#[test]
fn picks_first_accepting_coder() {
    let chain = chain();
    assert_eq!(chain.encode(rdf::type_).coder_id(), Some(0));
    assert_eq!(chain.encode("http://example.com/person/7").coder_id(), Some(1));
    assert_eq!(chain.encode("http://example.com/thing/7").coder_id(), Some(2));
    assert_eq!(chain.encode(geonames::A_ADM1).as_bytes().len(), 4);
}

#[test]
fn encode_all_keeps_order() {
    let chain = chain();
    let codes = chain.encode_all([rdf::type_, "urn:datafabric:org:1"]);
    assert_eq!(codes.len(), 2);
    assert_eq!(codes[0], chain.encode(rdf::type_));
    assert_eq!(codes[1].coder_id(), Some(1));
}

#[test]
fn decode_rejects_non_iri_and_unknown_coders() {
    let chain = chain();
    assert!(matches!(chain.decode(&[]), Err(CoderError::EmptyCode)));
    assert!(matches!(
        chain.decode(&[0b0000_0010, b'x']),
        Err(CoderError::NotAnIri(ValueType::BNode))
    ));
    assert!(matches!(
        chain.decode(&[0b0001_0001, b'x']),
        Err(CoderError::UnknownCoder(4))
    ));
}

#[test]
fn custom_coder_ids() {
    let config = CoderConfig::from_toml_str("[coder_ids]\nknown = 3\nnamespace = 4\nutf8 = 5").unwrap();
    let chain = IriCoder::initialize(&config, &MemoryStore::new(), Registry::full()).unwrap();
    let code = chain.encode(rdf::type_);
    assert_eq!(code.as_bytes(), &[0b0000_1101, 0, 0, 1]);
    assert_eq!(chain.decode(code.as_bytes()).unwrap(), rdf::type_);
}

#[test]
fn saves_snapshot_only_when_configured() {
    let store = MemoryStore::new();
    IriCoder::initialize(&CoderConfig::default(), &store, Registry::full()).unwrap();
    assert!(store.snapshot().is_empty());

    let config = CoderConfig {
        save_on_changes: true,
        ..CoderConfig::default()
    };
    let chain = IriCoder::initialize(&config, &store, Registry::full()).unwrap();
    assert_eq!(store.snapshot(), chain.dictionary());
}

#[test]
fn file_snapshot_is_stable_across_runs() {
    let dir = tempfile::tempdir().unwrap();
    let config = CoderConfig {
        dictionary: dir.path().join("known.json"),
        save_on_changes: true,
        ..CoderConfig::default()
    };
    let store = JsonFileStore::new(&config.dictionary);

    let first = IriCoder::initialize(&config, &store, Registry::full()).unwrap();
    assert_eq!(first.known().added(), Registry::full().term_count());
    let saved = store.load().unwrap();

    let second = IriCoder::initialize(&config, &store, Registry::full()).unwrap();
    assert_eq!(second.known().added(), 0);
    assert_eq!(second.dictionary(), saved);
    assert_eq!(second.encode(geonames::A_ADM1), first.encode(geonames::A_ADM1));
}

proptest! {
    #[test]
    fn any_iri_round_trips(iri in "[a-z]{1,6}:[A-Za-z0-9./#:_-]{0,32}") {
        let chain = chain();
        let code = chain.encode(&iri);
        prop_assert_eq!(chain.decode(code.as_bytes()).unwrap(), iri.as_str());
    }

    #[test]
    fn fixed_namespace_iris_round_trip(local in "[A-Za-z0-9._-]{0,24}") {
        let chain = chain();
        let iri = format!("http://example.com/person/{local}");
        let code = chain.encode(&iri);
        prop_assert_eq!(code.coder_id(), Some(1));
        prop_assert_eq!(chain.decode(code.as_bytes()).unwrap(), iri.as_str());
    }

    #[test]
    fn known_iris_round_trip(index in 0usize..Registry::full().term_count()) {
        let chain = chain();
        let iri = Registry::full().identifiers().nth(index).unwrap();
        let code = chain.encode(iri);
        prop_assert_eq!(code.as_bytes().len(), 4);
        prop_assert_eq!(chain.decode(code.as_bytes()).unwrap(), iri);
    }
}

#[test]
fn bundled_config_loads() {
    let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("../config/coder.toml");
    let config = CoderConfig::load(&path).unwrap();
    assert_eq!(config.fixed_namespaces.len(), 27);
    assert_eq!(config.fixed_namespaces[0], "urn:datafabric:org:");
    assert!(config.save_on_changes);
    assert!(config.dictionary.ends_with("known-vocabularies.json"));
    assert!(config.dictionary.starts_with(path.parent().unwrap()));
}
