//! Diagnostic snapshot of a parser.

use std::fmt;

use loreline_foundation::ParseError;

/// Position and outcome of the most recent [`Parser::parse`] call.
///
/// [`Parser::parse`]: crate::Parser::parse
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ParserState {
    /// Number of lines parsed so far, counting the current one.
    pub line: u32,
    /// One more than the number of fields attempted on the current line.
    pub column: u32,
    /// Error from the current line, if it failed.
    pub error: Option<ParseError>,
    /// The directive, field name, or unknown directive the error concerns.
    pub message: String,
}

impl ParserState {
    /// Returns true if the current line failed.
    #[must_use]
    pub const fn has_error(&self) -> bool {
        self.error.is_some()
    }
}

impl fmt::Display for ParserState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {} column {}", self.line, self.column)?;
        if let Some(error) = self.error {
            write!(f, ": {}: {error}", self.message)?;
        }
        Ok(())
    }
}
