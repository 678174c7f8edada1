//! Shared plumbing for the DataFabric vocabulary binaries.

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use anyhow::{Context, Result};
use clap::Args;
use datafabric_coder::{CoderConfig, DictionaryStore, IriCoder, JsonFileStore};
use datafabric_vocab::Registry;
use tracing_subscriber::EnvFilter;

/// Logging flags accepted by every binary.
#[derive(Debug, Clone, Copy, Default, Args)]
pub struct LogArgs {
    /// Suppress all log output.
    #[arg(long, short = 'q', global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Show info-level logs (or whatever `RUST_LOG` selects).
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

impl LogArgs {
    /// Filter directive for these flags.
    ///
    /// `--quiet` turns logging off, `--verbose` honours `RUST_LOG` and falls
    /// back to `info`, otherwise only warnings are shown.
    #[must_use]
    pub fn filter(&self) -> EnvFilter {
        if self.quiet {
            EnvFilter::new("off")
        } else if self.verbose {
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
        } else {
            EnvFilter::new("warn")
        }
    }
}

/// Installs the stderr `tracing` subscriber.
pub fn init_tracing(log: &LogArgs) {
    tracing_subscriber::fmt()
        .with_env_filter(log.filter())
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}

/// Outcome of [`refresh_dictionary`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Refreshed {
    /// Entries in the written snapshot.
    pub entries: usize,
    /// Identifiers numbered by this run.
    pub added: usize,
}

/// Numbers new registry identifiers and writes the snapshot at
/// `config.dictionary`, whatever `save_on_changes` says.
///
/// # Errors
///
/// Returns an error if the snapshot cannot be read or written, or the
/// configuration is invalid.
pub fn refresh_dictionary(config: &CoderConfig, registry: &Registry) -> Result<Refreshed> {
    let config = CoderConfig {
        save_on_changes: false,
        ..config.clone()
    };
    let store = JsonFileStore::new(&config.dictionary);
    let chain = IriCoder::initialize(&config, &store, registry)
        .context("Failed to initialize coder chain")?;
    let dictionary = chain.dictionary();
    store.save(&dictionary).context("Failed to save dictionary")?;
    Ok(Refreshed {
        entries: dictionary.len(),
        added: chain.known().added(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing_subscriber::filter::LevelFilter;

    #[test]
    fn quiet_turns_logging_off() {
        let log = LogArgs {
            quiet: true,
            verbose: false,
        };
        assert_eq!(log.filter().max_level_hint(), Some(LevelFilter::OFF));
    }

    #[test]
    fn refresh_counts_only_new_entries() {
        let dir = tempfile::tempdir().unwrap();
        let config = CoderConfig {
            dictionary: dir.path().join("dict.json"),
            ..CoderConfig::default()
        };
        let registry = Registry::full();

        let first = refresh_dictionary(&config, registry).unwrap();
        assert_eq!(first.entries, registry.term_count());
        assert_eq!(first.added, registry.term_count());

        let second = refresh_dictionary(&config, registry).unwrap();
        assert_eq!(second, Refreshed { entries: registry.term_count(), added: 0 });
    }

    #[test]
    fn default_shows_warnings() {
        assert_eq!(
            LogArgs::default().filter().max_level_hint(),
            Some(LevelFilter::WARN)
        );
    }
}
