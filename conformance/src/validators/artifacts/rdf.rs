//! Turtle and N-Triples artifact validator.
//!
//! Structural checks without a full RDF parser:
//! - `vocabularies.ttl` declares every registry prefix and one `owl:Ontology`
//!   per vocabulary
//! - every non-blank line of `vocabularies.nt` is `<s> <p> o .`
//! - the N-Triples file lists every term exactly once with `rdfs:isDefinedBy`

use std::path::Path;

use anyhow::{Context, Result};
use datafabric_vocab::model::iris;
use datafabric_vocab::Registry;

use super::{NTRIPLES_FILE, TURTLE_FILE};
use crate::report::{ConformanceReport, TestResult};

const VALIDATOR: &str = "artifacts/rdf";

/// Validates the Turtle and N-Triples artifacts in `artifacts`.
///
/// # Errors
///
/// Returns an error if a present file cannot be read.
pub fn validate(artifacts: &Path, registry: &Registry) -> Result<ConformanceReport> {
    let mut report = ConformanceReport::new();

    validate_turtle(artifacts, registry, &mut report)?;
    validate_ntriples(artifacts, registry, &mut report)?;

    Ok(report)
}

fn validate_turtle(artifacts: &Path, registry: &Registry, report: &mut ConformanceReport) -> Result<()> {
    let ttl_path = artifacts.join(TURTLE_FILE);
    if !ttl_path.exists() {
        report.push(TestResult::fail(
            VALIDATOR,
            format!("{TURTLE_FILE} not found in artifacts directory"),
        ));
        return Ok(());
    }

    let content = std::fs::read_to_string(&ttl_path)
        .with_context(|| format!("Failed to read {}", ttl_path.display()))?;

    let missing: Vec<String> = registry
        .vocabularies()
        .iter()
        .filter(|v| !content.contains(&format!("@prefix {}: <{}> .", v.prefix(), v.namespace())))
        .map(|v| v.prefix().to_owned())
        .collect();
    if missing.is_empty() {
        report.push(TestResult::pass(
            VALIDATOR,
            format!("{TURTLE_FILE} declares all {} prefixes", registry.len()),
        ));
    } else {
        report.push(TestResult::fail_with_details(
            VALIDATOR,
            format!("{TURTLE_FILE} is missing prefix declarations"),
            missing,
        ));
    }

    let ontologies = content.matches("  a owl:Ontology ;").count();
    if ontologies == registry.len() {
        report.push(TestResult::pass(
            VALIDATOR,
            format!("{TURTLE_FILE} has {ontologies} owl:Ontology blocks"),
        ));
    } else {
        report.push(TestResult::fail(
            VALIDATOR,
            format!(
                "{TURTLE_FILE} has {ontologies} owl:Ontology blocks, expected {}",
                registry.len()
            ),
        ));
    }

    Ok(())
}

fn validate_ntriples(artifacts: &Path, registry: &Registry, report: &mut ConformanceReport) -> Result<()> {
    let nt_path = artifacts.join(NTRIPLES_FILE);
    if !nt_path.exists() {
        report.push(TestResult::fail(
            VALIDATOR,
            format!("{NTRIPLES_FILE} not found in artifacts directory"),
        ));
        return Ok(());
    }

    let content = std::fs::read_to_string(&nt_path)
        .with_context(|| format!("Failed to read {}", nt_path.display()))?;

    let mut malformed_lines: Vec<String> = Vec::new();
    for (i, line) in content.lines().enumerate() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        if !is_triple(trimmed) {
            malformed_lines.push(format!("line {}: {}", i + 1, trimmed));
        }
    }

    if !content.trim().is_empty() && malformed_lines.is_empty() {
        report.push(TestResult::pass(
            VALIDATOR,
            format!("{NTRIPLES_FILE} is line-wise valid ({} triples)", content.lines().count()),
        ));
    } else {
        let count = malformed_lines.len();
        malformed_lines.truncate(10);
        report.push(TestResult::fail_with_details(
            VALIDATOR,
            format!("{NTRIPLES_FILE} has {count} malformed lines or is empty"),
            malformed_lines,
        ));
    }

    let predicate = format!("> <{}> <", iris::RDFS_IS_DEFINED_BY);
    let defined = content.lines().filter(|l| l.contains(&predicate)).count();
    if defined == registry.term_count() {
        report.push(TestResult::pass(
            VALIDATOR,
            format!("{NTRIPLES_FILE} defines all {defined} terms"),
        ));
    } else {
        report.push(TestResult::fail(
            VALIDATOR,
            format!(
                "{NTRIPLES_FILE} defines {defined} terms, expected {}",
                registry.term_count()
            ),
        ));
    }

    Ok(())
}

/// `<subject> <predicate> object .` with IRI subject and predicate.
fn is_triple(line: &str) -> bool {
    let Some(body) = line.strip_suffix(" .") else {
        return false;
    };
    let mut rest = body;
    for _ in 0..2 {
        let Some(after_open) = rest.strip_prefix('<') else {
            return false;
        };
        let Some(close) = after_open.find("> ") else {
            return false;
        };
        rest = &after_open[close + 2..];
    }
    is_iri(rest) || is_literal(rest)
}

fn is_iri(term: &str) -> bool {
    term.len() >= 2
        && term.starts_with('<')
        && term.ends_with('>')
        && !term[1..term.len() - 1].contains('>')
}

/// `"lexical"`, optionally followed by `^^<datatype>` or `@lang`.
fn is_literal(term: &str) -> bool {
    let Some(body) = term.strip_prefix('"') else {
        return false;
    };
    let mut escaped = false;
    for (i, c) in body.char_indices() {
        match c {
            _ if escaped => escaped = false,
            '\\' => escaped = true,
            '"' => {
                let suffix = &body[i + 1..];
                return suffix.is_empty()
                    || suffix.strip_prefix("^^").is_some_and(is_iri)
                    || suffix.strip_prefix('@').is_some_and(|lang| {
                        !lang.is_empty() && lang.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
                    });
            }
            _ => {}
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn triple_shapes() {
        assert!(is_triple("<a> <b> <c> ."));
        assert!(is_triple("<a> <b> \"x\"^^<d> ."));
        assert!(!is_triple("<a> <b> <c>"));
        assert!(!is_triple("a <b> <c> ."));
        assert!(!is_triple("<a> b <c> ."));
        assert!(!is_triple("<a> <b> c ."));
    }

    #[test]
    fn literal_objects_must_be_closed() {
        assert!(is_triple("<a> <b> \"x\" ."));
        assert!(is_triple("<a> <b> \"x\"@en-GB ."));
        assert!(is_triple("<a> <b> \"say \\\"hi\\\"\"^^<d> ."));
        assert!(!is_triple("<a> <b> \"x ."));
        assert!(!is_triple("<a> <b> \"x\\\" ."));
        assert!(!is_triple("<a> <b> \"x\"^^d ."));
        assert!(!is_triple("<a> <b> \"x\"@ ."));
        assert!(!is_triple("<a> <b> \"x\" junk ."));
    }
}
