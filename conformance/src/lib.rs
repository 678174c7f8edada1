//! DataFabric vocabulary conformance suite.
//!
//! Checks that the built-in vocabulary tables, the known-vocabulary
//! dictionary and the generated listing files agree with each other.
//!
//! # Conformance Scope
//!
//! | Component | Standard |
//! |-----------|----------|
//! | Vocabulary tables | Declared term counts, namespace derivation, disjointness |
//! | Dictionary | Stable 24-bit ids for a fresh dictionary |
//! | Listings (JSON-LD) | JSON-LD 1.1 context and graph shape |
//! | Listings (Turtle/N-Triples) | RDF 1.1, Turtle 1.1 |
//!
//! # Entry Point
//!
//! ```no_run
//! use datafabric_conformance::{run_all, WorkspacePaths};
//! use std::path::PathBuf;
//!
//! let paths = WorkspacePaths {
//!     artifacts: PathBuf::from("public"),
//! };
//! let report = run_all(&paths).expect("Failed to run conformance");
//! assert!(report.all_passed());
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod report;
pub mod validators;

use datafabric_vocab::Registry;

pub use report::{ConformanceReport, Severity, TestResult};

/// Paths required by the conformance runner.
pub struct WorkspacePaths {
    /// Directory containing the listings written by `vocab-build`.
    pub artifacts: std::path::PathBuf,
}

/// Runs all conformance validators against the built-in registry.
///
/// Validators are run in this order:
/// 1. Vocabulary inventory (37 vocabularies, 1690 terms)
/// 2. Vocabulary invariants
/// 3. Dictionary id stability
/// 4. JSON-LD listings
/// 5. Turtle and N-Triples listings
///
/// # Errors
///
/// Returns an error only if a file system operation fails.
pub fn run_all(paths: &WorkspacePaths) -> anyhow::Result<ConformanceReport> {
    let registry = Registry::full();
    let mut report = ConformanceReport::new();

    report.extend(validators::vocabulary::inventory::validate(registry));
    report.extend(validators::vocabulary::invariants::validate(registry));

    report.extend(validators::coder::ids::validate(registry));

    report.extend(validators::artifacts::jsonld::validate(&paths.artifacts, registry)?);
    report.extend(validators::artifacts::rdf::validate(&paths.artifacts, registry)?);

    tracing::debug!(
        passed = report.pass_count(),
        failed = report.failure_count(),
        "conformance run finished"
    );

    Ok(report)
}
