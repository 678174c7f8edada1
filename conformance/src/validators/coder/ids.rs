//! Dictionary id stability validator.
//!
//! Dictionaries persisted by earlier runs stay valid only if a fresh
//! dictionary numbers identifiers exactly as before. This validator pins the
//! ids of a few identifiers at the head of the registry order and checks that
//! a reloaded snapshot reproduces itself.

use datafabric_coder::{Dictionary, KnownVocabularyCoder};
use datafabric_vocab::namespaces::{geonames, rdf, rdfs};
use datafabric_vocab::Registry;

use crate::report::{ConformanceReport, TestResult};

const VALIDATOR: &str = "coder/ids";

/// Identifiers with published ids in a fresh dictionary.
const PINNED: &[(&str, u32)] = &[
    (rdf::type_, 1),
    (rdf::Statement, 7),
    (rdf::HTML, 18),
    (rdfs::Resource, 19),
    (rdfs::Literal, 20),
    (geonames::NAMESPACE, 616),
];

/// Validates id assignment against `registry`.
#[must_use]
pub fn validate(registry: &Registry) -> ConformanceReport {
    let mut report = ConformanceReport::new();

    let fresh = match KnownVocabularyCoder::initialize(0, Dictionary::new(), registry) {
        Ok(coder) => coder,
        Err(e) => {
            report.push(TestResult::fail(
                VALIDATOR,
                format!("Fresh dictionary could not be built: {e}"),
            ));
            return report;
        }
    };

    let mismatches: Vec<String> = PINNED
        .iter()
        .filter_map(|&(iri, expected)| match fresh.id(iri) {
            Some(id) if id == expected => None,
            Some(id) => Some(format!("<{iri}>: expected {expected}, got {id}")),
            None => Some(format!("<{iri}>: missing")),
        })
        .collect();
    if mismatches.is_empty() {
        report.push(TestResult::pass(
            VALIDATOR,
            format!("{} pinned ids match a fresh dictionary", PINNED.len()),
        ));
    } else {
        report.push(TestResult::fail_with_details(
            VALIDATOR,
            "Fresh dictionary ids moved; persisted dictionaries would be misread",
            mismatches,
        ));
    }

    let snapshot = fresh.dictionary();
    match KnownVocabularyCoder::initialize(0, snapshot.clone(), registry) {
        Ok(reloaded) if reloaded.added() == 0 && reloaded.dictionary() == snapshot => {
            report.push(TestResult::pass(
                VALIDATOR,
                format!("Reloaded snapshot reproduces {} entries", snapshot.len()),
            ));
        }
        Ok(reloaded) => report.push(TestResult::fail(
            VALIDATOR,
            format!(
                "Reloaded snapshot changed: {} entries added",
                reloaded.added()
            ),
        )),
        Err(e) => report.push(TestResult::fail(
            VALIDATOR,
            format!("Snapshot could not be reloaded: {e}"),
        )),
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_ids_are_pinned() {
        let report = validate(Registry::full());
        assert!(report.all_passed(), "{:#?}", report.results);
    }
}
