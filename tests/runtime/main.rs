//! Runtime integration tests
//!
//! Tests for schema files, schema-driven documents and their JSON form,
//! the REPL, and random value reports.

mod repl_tests;
mod schema_tests;

use std::path::PathBuf;

use loreline_loader::{Loader, LoaderConfig};
use loreline_runtime::Schema;

/// Directory holding the test data files.
pub fn data_dir(sub: &str) -> PathBuf {
    PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/tests/data")).join(sub)
}

/// Loader over the test game data.
pub fn gamedata() -> Loader {
    Loader::new(LoaderConfig::new(data_dir("gamedata")))
}

/// Loads a schema from the test schema directory.
pub fn schema(name: &str) -> Schema {
    Schema::load(&Loader::new(LoaderConfig::new(data_dir("schema"))), name).unwrap()
}
