//! Directive-based line parser for Loreline data files.
//!
//! Data files are plain text, one record component per line:
//!
//! ```text
//! # comment
//! name:Dagger
//! info:1:12:1d4
//! glyph:|:white
//! ```
//!
//! A [`Parser`] is configured by registering format strings such as
//! `"info int level uint weight rand damage"` together with handler
//! functions. Each line is split on `:`, its fields converted according to
//! the format, and the matching handler called to consume them.
//!
//! # Modules
//!
//! - [`parser`] - The [`Parser`] engine and handler type
//! - [`schema`] - Format strings ([`HookSpec`], [`FieldSpec`])
//! - [`cursor`] - Line tokenization
//! - [`number`] - `int` and `uint` conversion
//! - [`random`] - The `rand` grammar
//! - [`value`] - Typed field values
//! - [`state`] - Line, column, and error diagnostics

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod cursor;
pub mod number;
pub mod parser;
pub mod random;
pub mod schema;
pub mod state;
pub mod value;


pub use parser::{HookFn, Parser, ignored};
pub use random::parse_random;
pub use schema::{FieldSpec, HookSpec};
pub use state::ParserState;
pub use value::{FieldValue, Value};

pub use loreline_foundation::{FieldType, ParseError, ParseResult, Random, RegError};
