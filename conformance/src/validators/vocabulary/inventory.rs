//! Vocabulary inventory validator.
//!
//! Verifies that the registry holds the expected vocabularies and that the
//! tables with a published term count declare exactly that many terms.

use datafabric_vocab::Registry;

use crate::report::{ConformanceReport, TestResult};

const VALIDATOR: &str = "vocabulary/inventory";

/// Expected number of registered vocabularies.
pub const EXPECTED_VOCABULARIES: usize = 37;

/// Expected number of terms across the registry.
pub const EXPECTED_TERMS: usize = 1690;

/// Expected term count per prefix.
const EXPECTED_PER_PREFIX: &[(&str, usize)] = &[
    ("rdf", 18),
    ("rdfs", 15),
    ("owl", 80),
    ("xsd", 47),
    ("dc", 15),
    ("dcterms", 98),
    ("foaf", 75),
    ("org", 43),
    ("skos", 32),
    ("rov", 7),
    ("rev", 6),
    ("og", 2),
    ("gr", 177),
    ("gn", 734),
    ("mo", 240),
    ("fibo-ru", 49),
    ("fts", 1),
];

/// Validates the inventory of `registry`.
#[must_use]
pub fn validate(registry: &Registry) -> ConformanceReport {
    let mut report = ConformanceReport::new();

    check_count(&mut report, "vocabulary", registry.len(), EXPECTED_VOCABULARIES);
    check_count(&mut report, "term", registry.term_count(), EXPECTED_TERMS);

    for &(prefix, expected) in EXPECTED_PER_PREFIX {
        match registry.by_prefix(prefix) {
            Some(vocabulary) => check_count(
                &mut report,
                &format!("{prefix}: term"),
                vocabulary.identifiers().count(),
                expected,
            ),
            None => report.push(TestResult::fail(
                VALIDATOR,
                format!("Vocabulary '{prefix}' is not registered"),
            )),
        }
    }

    report
}

fn check_count(report: &mut ConformanceReport, label: &str, actual: usize, expected: usize) {
    if actual == expected {
        report.push(TestResult::pass(
            VALIDATOR,
            format!("Correct {} count: {}", label, actual),
        ));
    } else {
        report.push(TestResult::fail(
            VALIDATOR,
            format!(
                "Wrong {} count: expected {}, got {}",
                label, expected, actual
            ),
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_registry_matches_inventory() {
        let report = validate(Registry::full());
        assert!(report.all_passed(), "{:#?}", report.results);
    }

    #[test]
    fn reports_missing_vocabulary() {
        let registry = Registry::try_new(vec![&datafabric_vocab::namespaces::fts::FtsVocabulary])
            .unwrap();
        let report = validate(&registry);
        assert!(report
            .results
            .iter()
            .any(|r| r.is_failure() && r.message.contains("'gn' is not registered")));
    }
}
