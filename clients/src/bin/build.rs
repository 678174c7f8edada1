//! `vocab-build`: writes the vocabulary registry listings to the output directory.
//!
//! **Outputs:**
//! - `<out>/vocabularies.jsonld`: JSON-LD 1.1 listing
//! - `<out>/context.jsonld`: JSON-LD context with every prefix
//! - `<out>/vocabularies.ttl`: Turtle 1.1
//! - `<out>/vocabularies.nt`: N-Triples
//!
//! **Usage:**
//! ```text
//! vocab-build [--out <path>]
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use datafabric_clients::{init_tracing, LogArgs};
use datafabric_conformance::validators::artifacts::{
    CONTEXT_FILE, JSONLD_FILE, NTRIPLES_FILE, TURTLE_FILE,
};
use datafabric_vocab::serializer::{jsonld, ntriples, turtle};
use datafabric_vocab::{Family, Registry};

/// Build the vocabulary registry listings.
#[derive(Parser)]
#[command(name = "vocab-build", about = "Write vocabulary registry listings")]
struct Args {
    /// Output directory for generated listings.
    #[arg(long, default_value = "public")]
    out: PathBuf,

    #[command(flatten)]
    log: LogArgs,
}

fn write(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content).with_context(|| format!("Failed to write {}", path.display()))?;
    tracing::info!(path = %path.display(), bytes = content.len(), "written");
    println!("  Written: {}", path.display());
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(&args.log);
    let out = &args.out;

    fs::create_dir_all(out)
        .with_context(|| format!("Failed to create output directory: {}", out.display()))?;

    let registry = Registry::full();

    let by_family = |family: Family| {
        registry
            .vocabularies()
            .iter()
            .filter(|v| v.family() == family)
            .count()
    };
    println!(
        "DataFabric vocabularies: {} vocabularies ({} core, {} community, {} FIBO, {} local), {} terms",
        registry.len(),
        by_family(Family::Core),
        by_family(Family::Community),
        by_family(Family::Fibo),
        by_family(Family::Local),
        registry.term_count()
    );

    let json = serde_json::to_string_pretty(&jsonld::to_json_ld(registry))
        .context("Failed to serialize registry to JSON-LD")?;
    write(&out.join(JSONLD_FILE), &json)?;

    let context = serde_json::to_string_pretty(&jsonld::context(registry))
        .context("Failed to serialize JSON-LD context")?;
    write(&out.join(CONTEXT_FILE), &context)?;

    write(&out.join(TURTLE_FILE), &turtle::to_turtle(registry))?;
    write(&out.join(NTRIPLES_FILE), &ntriples::to_ntriples(registry))?;

    println!("Build complete.");
    Ok(())
}
