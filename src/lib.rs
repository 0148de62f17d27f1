//! Loreline - Directive-based data file parsing
//!
//! This crate re-exports all layers of the Loreline system for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 3: loreline_runtime    — Schemas, JSON dumps, REPL, CLI
//! Layer 2: loreline_loader     — File loading, parser lifecycle, flag and name helpers
//! Layer 1: loreline_parser     — Directive registry, line parsing, random grammar
//! Layer 0: loreline_foundation — Error codes, field types, random values
//! ```

pub use loreline_foundation as foundation;
pub use loreline_loader as loader;
pub use loreline_parser as parser;
pub use loreline_runtime as runtime;
