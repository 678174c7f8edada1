//! Runs the conformance suite against listings written to a temporary directory.

use std::fs;
use std::path::Path;

use datafabric_conformance::validators::artifacts::{
    CONTEXT_FILE, JSONLD_FILE, NTRIPLES_FILE, TURTLE_FILE,
};
use datafabric_conformance::{run_all, WorkspacePaths};
use datafabric_vocab::serializer::{jsonld, ntriples, turtle};
use datafabric_vocab::Registry;

fn write_listings(dir: &Path) {
    let registry = Registry::full();
    let json = serde_json::to_string_pretty(&jsonld::to_json_ld(registry)).unwrap();
    let context = serde_json::to_string_pretty(&jsonld::context(registry)).unwrap();
    fs::write(dir.join(JSONLD_FILE), json).unwrap();
    fs::write(dir.join(CONTEXT_FILE), context).unwrap();
    fs::write(dir.join(TURTLE_FILE), turtle::to_turtle(registry)).unwrap();
    fs::write(dir.join(NTRIPLES_FILE), ntriples::to_ntriples(registry)).unwrap();
}

#[test]
fn generated_listings_conform() {
    let dir = tempfile::tempdir().unwrap();
    write_listings(dir.path());

    let report = run_all(&WorkspacePaths {
        artifacts: dir.path().to_path_buf(),
    })
    .unwrap();

    let failures: Vec<String> = report
        .results
        .iter()
        .filter(|r| r.is_failure())
        .map(ToString::to_string)
        .collect();
    assert!(failures.is_empty(), "{failures:#?}");
}

#[test]
fn missing_listings_fail() {
    let dir = tempfile::tempdir().unwrap();

    let report = run_all(&WorkspacePaths {
        artifacts: dir.path().to_path_buf(),
    })
    .unwrap();

    assert_eq!(report.failure_count(), 4);
}

#[test]
fn truncated_ntriples_fail() {
    let dir = tempfile::tempdir().unwrap();
    write_listings(dir.path());
    let nt = dir.path().join(NTRIPLES_FILE);
    let content = fs::read_to_string(&nt).unwrap();
    let kept: Vec<&str> = content.lines().skip(1).collect();
    fs::write(&nt, kept.join("\n") + "\n<a> <b> c .\n").unwrap();

    let report = run_all(&WorkspacePaths {
        artifacts: dir.path().to_path_buf(),
    })
    .unwrap();

    let failed: Vec<&str> = report
        .results
        .iter()
        .filter(|r| r.is_failure())
        .map(|r| r.validator.as_str())
        .collect();
    assert_eq!(failed, ["artifacts/rdf"]);
}

#[test]
fn unparsable_jsonld_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    write_listings(dir.path());
    fs::write(dir.path().join(CONTEXT_FILE), "{\"@context\": ").unwrap();

    let report = run_all(&WorkspacePaths {
        artifacts: dir.path().to_path_buf(),
    })
    .unwrap();

    let failed: Vec<&str> = report
        .results
        .iter()
        .filter(|r| r.is_failure())
        .map(|r| r.message.as_str())
        .collect();
    assert_eq!(failed.len(), 1, "{failed:#?}");
    assert!(failed[0].starts_with("context.jsonld is not valid JSON"));
}
