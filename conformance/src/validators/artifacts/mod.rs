//! Validators for the files written by `vocab-build`.

pub mod jsonld;
pub mod rdf;

/// JSON-LD listing file name.
pub const JSONLD_FILE: &str = "vocabularies.jsonld";
/// Standalone JSON-LD context file name.
pub const CONTEXT_FILE: &str = "context.jsonld";
/// Turtle listing file name.
pub const TURTLE_FILE: &str = "vocabularies.ttl";
/// N-Triples listing file name.
pub const NTRIPLES_FILE: &str = "vocabularies.nt";
