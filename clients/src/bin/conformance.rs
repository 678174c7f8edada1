//! `vocab-conformance`: validates the vocabulary tables, the dictionary
//! numbering and the built listings.
//!
//! **Usage:**
//! ```text
//! vocab-conformance [--artifacts <path>]
//! ```
//!
//! Exits non-zero if any conformance check fails.

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use std::path::PathBuf;
use std::process;

use anyhow::Result;
use clap::Parser;
use datafabric_clients::{init_tracing, LogArgs};
use datafabric_conformance::{run_all, WorkspacePaths};

/// Run the vocabulary conformance suite.
#[derive(Parser)]
#[command(
    name = "vocab-conformance",
    about = "Validate vocabulary tables and built listings"
)]
struct Args {
    /// Path to the built listings directory.
    #[arg(long, default_value = "public")]
    artifacts: PathBuf,

    #[command(flatten)]
    log: LogArgs,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(&args.log);

    let report = run_all(&WorkspacePaths {
        artifacts: args.artifacts,
    })?;

    println!("DataFabric Vocabulary Conformance Report");
    println!("========================================");
    println!();

    for result in &report.results {
        println!("{result}");
    }

    let failed = report.failure_count();
    println!();
    println!(
        "Summary: {} passed, {} warnings, {} failed",
        report.pass_count(),
        report.warning_count(),
        failed
    );

    if failed > 0 {
        eprintln!("Conformance FAILED: {failed} check(s) did not pass.");
        process::exit(1);
    }

    println!("Conformance PASSED.");
    Ok(())
}
