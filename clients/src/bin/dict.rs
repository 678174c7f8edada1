//! `vocab-dict`: maintains the known-vocabulary dictionary and encodes or
//! decodes IRIs with the configured coder chain.
//!
//! **Usage:**
//! ```text
//! vocab-dict [--config <coder.toml>] refresh
//! vocab-dict [--config <coder.toml>] encode <iri>...
//! vocab-dict [--config <coder.toml>] decode <hex>...
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use datafabric_clients::{init_tracing, refresh_dictionary, LogArgs};
use datafabric_coder::{Code, CoderConfig, IriCoder, JsonFileStore};
use datafabric_vocab::Registry;

/// Known-vocabulary dictionary tool.
#[derive(Parser)]
#[command(name = "vocab-dict", about = "Maintain the known-vocabulary dictionary")]
struct Args {
    /// Coder configuration file. Defaults apply when omitted.
    #[arg(long)]
    config: Option<PathBuf>,

    #[command(flatten)]
    log: LogArgs,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Number new vocabulary terms and write the dictionary snapshot.
    Refresh,
    /// Print the hex code of each IRI.
    Encode {
        /// IRIs to encode.
        #[arg(required = true)]
        iris: Vec<String>,
    },
    /// Print the IRI of each hex code.
    Decode {
        /// Hex codes to decode.
        #[arg(required = true)]
        codes: Vec<String>,
    },
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(&args.log);

    let config = match &args.config {
        Some(path) => CoderConfig::load(path)
            .with_context(|| format!("Failed to load {}", path.display()))?,
        None => CoderConfig::default(),
    };
    let registry = Registry::full();

    match args.command {
        Command::Refresh => {
            let refreshed = refresh_dictionary(&config, registry)?;
            println!(
                "{}: {} entries ({} added)",
                config.dictionary.display(),
                refreshed.entries,
                refreshed.added
            );
        }
        Command::Encode { iris } => {
            let chain = chain(&config, registry)?;
            for (iri, code) in iris.iter().zip(chain.encode_all(iris.iter().map(String::as_str))) {
                println!("{code}\t{iri}");
            }
        }
        Command::Decode { codes } => {
            let chain = chain(&config, registry)?;
            for hex in &codes {
                let code: Code = hex
                    .parse()
                    .with_context(|| format!("Invalid hex code: {hex}"))?;
                let iri = chain
                    .decode(code.as_bytes())
                    .with_context(|| format!("Failed to decode {hex}"))?;
                println!("{hex}\t{iri}");
            }
        }
    }

    Ok(())
}

fn chain(config: &CoderConfig, registry: &Registry) -> Result<IriCoder> {
    let store = JsonFileStore::new(&config.dictionary);
    IriCoder::initialize(config, &store, registry).context("Failed to initialize coder chain")
}
