//! Schema-driven tooling for Loreline data files.
//!
//! This crate provides:
//! - [`Schema`] - Data file formats, themselves read from schema files
//! - [`Document`] - A parsed data file as records of entries, serializable
//!   as JSON
//! - [`Repl`] - Interactive line checking
//! - [`RollReport`] - Ranges and sample rolls of random values
//!
//! The `loreline` binary exposes these as the `check`, `dump`, `repl`, and
//! `roll` commands.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod dice;
pub mod document;
pub mod editor;
pub mod error;
pub mod repl;
pub mod schema;

pub use dice::RollReport;
pub use document::{Document, DocumentBuilder, Entry, Field, Record, collect};
pub use editor::{LineEditor, ReadResult, RustylineEditor};
pub use error::{Result, RuntimeError};
pub use repl::{Repl, ReplConfig};
pub use schema::{DataFile, Schema, SchemaFile, schema_parser};
