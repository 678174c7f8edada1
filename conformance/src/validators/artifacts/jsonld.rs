//! JSON-LD artifact validator.
//!
//! Verifies `vocabularies.jsonld` and `context.jsonld`:
//! - both parse as JSON objects with an `@context`
//! - every registry prefix maps to its namespace in both contexts
//! - `@graph` has one node per vocabulary and per term, each with an `@id`

use std::path::Path;

use anyhow::{Context, Result};
use datafabric_vocab::Registry;
use serde_json::Value;

use super::{CONTEXT_FILE, JSONLD_FILE};
use crate::report::{ConformanceReport, TestResult};

const VALIDATOR: &str = "artifacts/jsonld";

/// Validates the JSON-LD artifacts in `artifacts` against `registry`.
///
/// # Errors
///
/// Returns an error if a present file cannot be read. Unparsable JSON is
/// reported as a failure.
pub fn validate(artifacts: &Path, registry: &Registry) -> Result<ConformanceReport> {
    let mut report = ConformanceReport::new();

    if let Some(value) = read_json(artifacts, JSONLD_FILE, &mut report)? {
        check_context(JSONLD_FILE, &value, registry, &mut report);
        check_graph(&value, registry, &mut report);
    }
    if let Some(value) = read_json(artifacts, CONTEXT_FILE, &mut report)? {
        check_context(CONTEXT_FILE, &value, registry, &mut report);
    }

    Ok(report)
}

fn read_json(artifacts: &Path, name: &str, report: &mut ConformanceReport) -> Result<Option<Value>> {
    let path = artifacts.join(name);
    if !path.exists() {
        report.push(TestResult::fail(VALIDATOR, format!("{name} not found")));
        return Ok(None);
    }
    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    match serde_json::from_str(&content) {
        Ok(value) => Ok(Some(value)),
        Err(e) => {
            report.push(TestResult::fail(
                VALIDATOR,
                format!("{name} is not valid JSON: {e}"),
            ));
            Ok(None)
        }
    }
}

fn check_context(name: &str, value: &Value, registry: &Registry, report: &mut ConformanceReport) {
    let Some(context) = value.get("@context").and_then(Value::as_object) else {
        report.push(TestResult::fail(VALIDATOR, format!("{name} has no @context object")));
        return;
    };

    let missing: Vec<String> = registry
        .vocabularies()
        .iter()
        .filter(|v| context.get(v.prefix()).and_then(Value::as_str) != Some(v.namespace()))
        .map(|v| format!("{} -> <{}>", v.prefix(), v.namespace()))
        .collect();

    if missing.is_empty() {
        report.push(TestResult::pass(
            VALIDATOR,
            format!("{name} @context maps all {} prefixes", registry.len()),
        ));
    } else {
        report.push(TestResult::fail_with_details(
            VALIDATOR,
            format!("{name} @context is missing {} prefixes", missing.len()),
            missing,
        ));
    }
}

fn check_graph(value: &Value, registry: &Registry, report: &mut ConformanceReport) {
    let Some(graph) = value.get("@graph").and_then(Value::as_array) else {
        report.push(TestResult::fail(VALIDATOR, format!("{JSONLD_FILE} has no @graph array")));
        return;
    };

    let expected = registry.len() + registry.term_count();
    if graph.len() == expected {
        report.push(TestResult::pass(
            VALIDATOR,
            format!("@graph has {} nodes", graph.len()),
        ));
    } else {
        report.push(TestResult::fail(
            VALIDATOR,
            format!("@graph has {} nodes, expected {}", graph.len(), expected),
        ));
    }

    let without_id = graph.iter().filter(|n| !n["@id"].is_string()).count();
    if without_id == 0 {
        report.push(TestResult::pass(VALIDATOR, "Every @graph node has an @id"));
    } else {
        report.push(TestResult::fail(
            VALIDATOR,
            format!("{without_id} @graph nodes have no @id"),
        ));
    }
}
