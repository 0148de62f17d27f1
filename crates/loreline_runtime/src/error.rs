//! Errors from the runtime tools.

use loreline_loader::LoadError;
use thiserror::Error;

/// Errors raised by schema loading, dumping, and the REPL.
#[derive(Debug, Error)]
pub enum RuntimeError {
    /// A schema or data file failed to load.
    #[error(transparent)]
    Load(#[from] LoadError),

    /// A document could not be serialized.
    #[error("cannot serialize document: {0}")]
    Json(#[from] serde_json::Error),

    /// The line editor failed.
    #[error("line editor failed: {0}")]
    Editor(String),

    /// Writing output failed.
    #[error("cannot write output: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for runtime operations.
pub type Result<T> = std::result::Result<T, RuntimeError>;
