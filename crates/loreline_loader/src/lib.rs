//! Data file loading for Loreline.
//!
//! This crate drives a [`Parser`](loreline_parser::Parser) over whole files:
//! - [`Loader`] - Resolves file names against user and game data directories
//! - [`FileParser`] - The init, run, and finish lifecycle of one data file
//! - [`LoadError`] / [`Diagnostic`] - Where and why loading failed
//!
//! It also provides the table helpers handlers commonly need:
//! - [`flags`] - Named flag sets, read from and written to flag lists
//! - [`grab`] - Name lookups and `NAME[arg]` value expressions

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod config;
pub mod error;
pub mod file;
pub mod flags;
pub mod grab;

pub use config::LoaderConfig;
pub use error::{Diagnostic, LoadError};
pub use file::{FileParser, Loader, parse_reader};
pub use flags::{
    FlagSet, flag_names, grab_flag, grab_flags, lookup_flag, remove_flag, write_flags,
};
pub use grab::{
    code_index, grab_base_and_int, grab_index_and_int, grab_int_value, grab_name,
    grab_rand_value, value_arg,
};
