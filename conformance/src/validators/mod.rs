//! Conformance validators.
//!
//! - [`vocabulary`]: invariants of the registered tables (no file I/O)
//! - [`coder`]: stability of the known-vocabulary dictionary ids
//! - [`artifacts`]: structure of the files written by `vocab-build`

pub mod artifacts;
pub mod coder;
pub mod vocabulary;
