//! Non-destructive line tokenization.
//!
//! The cursor walks the part of a line after the directive. Three strategies
//! are used, chosen by the field type being read:
//!
//! - [`LineCursor::next_delimited`] for `int`, `uint`, `sym`, and `rand`
//! - [`LineCursor::next_char`] for `char`, whose value may itself be `:`
//! - [`LineCursor::rest`] for `str`, which may contain `:`

/// Field delimiter.
pub const DELIMITER: char = ':';

/// A cursor over the unread remainder of a line.
#[derive(Clone, Copy, Debug)]
pub struct LineCursor<'a> {
    rest: &'a str,
}

impl<'a> LineCursor<'a> {
    /// Creates a cursor at the start of `line`.
    #[must_use]
    pub const fn new(line: &'a str) -> Self {
        Self { rest: line }
    }

    /// Returns the unread text without consuming it.
    #[must_use]
    pub const fn remaining(&self) -> &'a str {
        self.rest
    }

    /// Returns true if nothing is left to read.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.rest.is_empty()
    }

    /// Reads the next `:`-delimited token.
    ///
    /// Runs of leading delimiters are skipped, so empty tokens are never
    /// produced. The delimiter ending the token is consumed.
    pub fn next_delimited(&mut self) -> Option<&'a str> {
        let start = self.rest.trim_start_matches(DELIMITER);
        if start.is_empty() {
            self.rest = "";
            return None;
        }

        match start.find(DELIMITER) {
            Some(end) => {
                self.rest = &start[end + DELIMITER.len_utf8()..];
                Some(&start[..end])
            }
            None => {
                self.rest = "";
                Some(start)
            }
        }
    }

    /// Reads a character token.
    ///
    /// The first character is always taken, even if it is the delimiter;
    /// the token then extends to the next delimiter or the end of the line.
    /// A well-formed token is therefore one character long, and anything
    /// longer is left for the caller to reject.
    pub fn next_char(&mut self) -> Option<&'a str> {
        let first = self.rest.chars().next()?;
        let after_first = first.len_utf8();

        let end = self.rest[after_first..]
            .find(DELIMITER)
            .map_or(self.rest.len(), |i| after_first + i);

        let (token, tail) = self.rest.split_at(end);
        self.rest = tail.strip_prefix(DELIMITER).unwrap_or(tail);
        Some(token)
    }

    /// Reads everything left on the line, delimiters included.
    pub fn rest(&mut self) -> Option<&'a str> {
        if self.rest.is_empty() {
            return None;
        }
        Some(std::mem::take(&mut self.rest))
    }
}
