//! Registry invariant validator.
//!
//! Checks, for every vocabulary:
//! - each identifier is the namespace followed by the local name
//! - no identifier is declared twice, within or across vocabularies
//! - no namespace is a prefix of another, and prefixes are unique
//! - local names contain no characters that are illegal in an IRI, and only
//!   the namespace entry has an empty local name
//! - `identifiers()` yields the same sequence on every call

use datafabric_vocab::{Registry, Vocabulary};

use crate::report::{ConformanceReport, TestResult};

const VALIDATOR: &str = "vocabulary/invariants";

/// Characters that may not appear unescaped in an IRI.
const ILLEGAL: &[char] = &['<', '>', '"', ' ', '{', '}', '|', '\\', '^', '`'];

/// Validates the invariants of `registry`.
#[must_use]
pub fn validate(registry: &Registry) -> ConformanceReport {
    let mut report = ConformanceReport::new();

    let violations = registry.violations();
    if violations.is_empty() {
        report.push(TestResult::pass(
            VALIDATOR,
            format!(
                "{} vocabularies have derived, unique identifiers and disjoint namespaces",
                registry.len()
            ),
        ));
    } else {
        report.push(TestResult::fail_with_details(
            VALIDATOR,
            format!("{} registry invariant violations", violations.len()),
            violations.iter().map(ToString::to_string).collect(),
        ));
    }

    let mut illegal = Vec::new();
    let mut unstable = Vec::new();
    for vocabulary in registry.vocabularies() {
        for term in vocabulary.terms() {
            let stray_empty = term.local_name.is_empty() && term.iri != vocabulary.namespace();
            if stray_empty || term.local_name.contains(ILLEGAL) {
                illegal.push(format!("{}: {:?}", vocabulary.prefix(), term.local_name));
            }
        }
        if !restartable(*vocabulary) {
            unstable.push(vocabulary.prefix().to_owned());
        }
    }

    if illegal.is_empty() {
        report.push(TestResult::pass(VALIDATOR, "All local names are valid IRI segments"));
    } else {
        report.push(TestResult::fail_with_details(
            VALIDATOR,
            format!("{} local names are empty or contain illegal characters", illegal.len()),
            illegal,
        ));
    }

    if unstable.is_empty() {
        report.push(TestResult::pass(VALIDATOR, "Identifier iteration is restartable"));
    } else {
        report.push(TestResult::fail_with_details(
            VALIDATOR,
            "Identifier iteration differs between calls",
            unstable,
        ));
    }

    report
}

fn restartable(vocabulary: &dyn Vocabulary) -> bool {
    vocabulary.identifiers().eq(vocabulary.identifiers())
        && vocabulary.identifiers().len() == vocabulary.terms().len()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_registry_is_clean() {
        let report = validate(Registry::full());
        assert!(report.all_passed(), "{:#?}", report.results);
    }

    #[test]
    fn namespace_entries_pass() {
        use datafabric_vocab::namespaces::{geonames, goodrelations, music};

        let registry = Registry::try_new(vec![
            &geonames::GeoNamesVocabulary,
            &goodrelations::GoodRelationsVocabulary,
            &music::MusicVocabulary,
        ])
        .unwrap();
        let report = validate(&registry);
        assert_eq!(report.failure_count(), 0, "{:#?}", report.results);
    }
}
