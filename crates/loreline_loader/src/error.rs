//! Errors from loading data files.

use std::fmt;
use std::io;
use std::path::PathBuf;

use loreline_foundation::{ParseError, RegError};
use loreline_parser::ParserState;
use thiserror::Error;

/// Where and why a data file failed to parse.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Diagnostic {
    /// Name of the file, as given to the loader.
    pub file: String,
    /// Line number, starting from 1.
    pub line: u32,
    /// Column, counting the directive as 1 and each field after it.
    pub column: u32,
    /// The directive, field, or unknown directive the error concerns.
    pub message: String,
    /// The error code.
    pub error: ParseError,
}

impl Diagnostic {
    /// Builds a diagnostic for `error` at the parser's current position.
    #[must_use]
    pub fn new(file: &str, state: &ParserState, error: ParseError) -> Self {
        Self {
            file: file.to_string(),
            line: state.line,
            column: state.column,
            message: state.message.clone(),
            error,
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Parse error in {} line {} column {}: {}: {}",
            self.file, self.line, self.column, self.message, self.error
        )
    }
}

/// Errors that can occur while loading a data file.
#[derive(Debug, Error)]
pub enum LoadError {
    /// A directive format could not be registered.
    #[error("cannot set up parser for {file}: {source}")]
    Registration {
        /// File the parser was for.
        file: String,
        /// The registration failure.
        source: RegError,
    },

    /// No candidate file exists.
    #[error("Cannot open '{0}'")]
    NotFound(String),

    /// Reading the file failed.
    #[error("cannot read {}: {source}", path.display())]
    Io {
        /// The file being read.
        path: PathBuf,
        /// The underlying error.
        source: io::Error,
    },

    /// A line failed to parse.
    #[error("{0}")]
    Parse(Diagnostic),

    /// The parsed data was rejected as a whole.
    #[error("Parser finish error in {file}: {error}")]
    Finish {
        /// File the parser was for.
        file: String,
        /// The error code.
        error: ParseError,
    },
}

impl LoadError {
    /// Returns the parse error code closest to this error.
    #[must_use]
    pub const fn code(&self) -> ParseError {
        match self {
            Self::Registration { .. } | Self::Io { .. } => ParseError::Generic,
            Self::NotFound(_) => ParseError::NoFileFound,
            Self::Parse(diagnostic) => diagnostic.error,
            Self::Finish { error, .. } => *error,
        }
    }
}
