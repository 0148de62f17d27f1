//! The directive dispatch engine.
//!
//! A [`Parser`] holds a registry of directive hooks. Each hook pairs a
//! [`HookSpec`] with a handler function. Feeding a line to
//! [`Parser::parse`] finds the hook for the line's directive, converts its
//! fields to typed [`Value`]s, and calls the handler, which reads the values
//! back through the typed getters and updates the caller's private state.
//!
//! ```text
//! "N:1:Dagger"
//!      │
//!      ▼
//! directive "N" ──► hook "N uint index str name"
//!      │
//!      ▼
//! values {index: Uint(1), name: Str("Dagger")}
//!      │
//!      ▼
//! handler(&mut parser) ──► parser.get_uint("index"), parser.private_mut()
//! ```

use std::fmt;
use std::sync::Arc;

use loreline_foundation::{FieldType, ParseError, ParseResult, Random, RegError};
use tracing::{debug, trace};

use crate::cursor::LineCursor;
use crate::number::{parse_int, parse_uint};
use crate::random::parse_random;
use crate::schema::HookSpec;
use crate::state::ParserState;
use crate::value::{FieldValue, Value};

/// A directive handler.
///
/// Handlers read the current line's values through the parser's getters and
/// record results in its private state. Returning an error stops the line
/// and records the error in the parser state.
pub type HookFn<P> = fn(&mut Parser<P>) -> ParseResult;

/// A handler that accepts every line and does nothing.
///
/// Useful for directives that must be recognised but carry no data, such as
/// file version lines.
///
/// # Errors
///
/// Never fails.
pub fn ignored<P>(_parser: &mut Parser<P>) -> ParseResult {
    Ok(())
}

struct Hook<P> {
    spec: Arc<HookSpec>,
    handler: HookFn<P>,
}

impl<P> Clone for Hook<P> {
    fn clone(&self) -> Self {
        Self {
            spec: Arc::clone(&self.spec),
            handler: self.handler,
        }
    }
}

/// A line parser for directive-based data files.
///
/// `P` is the caller's private state, reachable from handlers through
/// [`Parser::private_mut`]. The parser owns it until it is taken back with
/// [`Parser::take_private`] or the parser is dropped.
///
/// # Example
///
/// ```
/// use loreline_parser::Parser;
///
/// let mut parser: Parser<Vec<i32>> = Parser::new();
/// parser.set_private(Vec::new());
/// parser
///     .register("V int value", |p| {
///         let v = p.get_int("value");
///         p.private_mut().expect("state is set").push(v);
///         Ok(())
///     })
///     .unwrap();
///
/// parser.parse("V:4").unwrap();
/// parser.parse("V:-2").unwrap();
/// assert_eq!(parser.take_private(), Some(vec![4, -2]));
/// ```
pub struct Parser<P = ()> {
    hooks: Vec<Hook<P>>,
    directive: Option<Arc<HookSpec>>,
    values: Vec<FieldValue>,
    state: ParserState,
    private: Option<P>,
}

impl<P> Default for Parser<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P> fmt::Debug for Parser<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Parser")
            .field("hooks", &self.hooks.len())
            .field("values", &self.values)
            .field("state", &self.state)
            .field("has_private", &self.private.is_some())
            .finish_non_exhaustive()
    }
}

impl<P> Parser<P> {
    /// Creates a parser with no hooks and no private state.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            hooks: Vec::new(),
            directive: None,
            values: Vec::new(),
            state: ParserState {
                line: 0,
                column: 0,
                error: None,
                message: String::new(),
            },
            private: None,
        }
    }

    /// Creates a parser that already owns `private`.
    #[must_use]
    pub fn with_private(private: P) -> Self {
        Self {
            private: Some(private),
            ..Self::new()
        }
    }

    // =========================================================================
    // Registration
    // =========================================================================

    /// Registers a handler for the directive described by `format`.
    ///
    /// When several hooks share a directive, the most recently registered
    /// one handles it.
    ///
    /// # Errors
    ///
    /// Returns a [`RegError`] if `format` is malformed. The parser is left
    /// unchanged.
    pub fn register(&mut self, format: &str, handler: HookFn<P>) -> Result<(), RegError> {
        let spec = HookSpec::parse(format)?;
        self.register_spec(spec, handler);
        Ok(())
    }

    /// Registers a handler for an already parsed format.
    pub fn register_spec(&mut self, spec: HookSpec, handler: HookFn<P>) {
        debug!(
            directive = spec.directive(),
            fields = spec.fields().len(),
            "registered directive"
        );
        self.hooks.push(Hook {
            spec: Arc::new(spec),
            handler,
        });
    }

    /// Iterates over the registered formats in registration order.
    pub fn hooks(&self) -> impl Iterator<Item = &HookSpec> {
        self.hooks.iter().map(|h| &*h.spec)
    }

    fn find_hook(&self, directive: &str) -> Option<Hook<P>> {
        self.hooks
            .iter()
            .rev()
            .find(|h| h.spec.directive() == directive)
            .cloned()
    }

    // =========================================================================
    // Parsing
    // =========================================================================

    /// Parses one line and dispatches it to its handler.
    ///
    /// Blank lines and lines whose first non-whitespace character is `#` are
    /// accepted without calling any handler. Every call, including those,
    /// advances the line counter and discards the previous line's values.
    ///
    /// # Errors
    ///
    /// - [`ParseError::MissingField`] if the line has no directive, or a
    ///   mandatory field is absent
    /// - [`ParseError::UndefinedDirective`] if no hook handles the directive
    /// - [`ParseError::NotNumber`] if an `int` or `uint` field is not numeric
    /// - [`ParseError::NotRandom`] if a `rand` field is malformed
    /// - [`ParseError::FieldTooLong`] if a `char` field is longer than one
    ///   character
    /// - whatever error the handler returns
    ///
    /// The error is also recorded in [`Parser::state`].
    pub fn parse(&mut self, line: &str) -> ParseResult {
        self.values.clear();
        self.directive = None;
        self.state.line += 1;
        self.state.column = 1;
        self.state.error = None;
        self.state.message.clear();

        let line = line.trim_start_matches(|c: char| c.is_ascii_whitespace());
        if line.is_empty() || line.starts_with('#') {
            return Ok(());
        }

        let mut cursor = LineCursor::new(line);
        let Some(directive) = cursor.next_delimited() else {
            return self.fail(ParseError::MissingField, "");
        };

        let Some(hook) = self.find_hook(directive) else {
            return self.fail(ParseError::UndefinedDirective, directive);
        };

        self.state.message.push_str(hook.spec.directive());
        self.directive = Some(Arc::clone(&hook.spec));

        for field in hook.spec.fields() {
            self.state.column += 1;

            let token = match field.ty {
                FieldType::Str => cursor.rest(),
                FieldType::Char => cursor.next_char(),
                FieldType::Int | FieldType::Uint | FieldType::Sym | FieldType::Rand => {
                    cursor.next_delimited()
                }
            };

            let Some(token) = token else {
                if field.optional {
                    break;
                }
                return self.fail(ParseError::MissingField, &field.name);
            };

            match convert(field.ty, token) {
                Ok(value) => self.values.push(FieldValue {
                    name: Arc::clone(&field.name),
                    value,
                }),
                Err(error) => return self.fail(error, &field.name),
            }
        }

        trace!(
            line = self.state.line,
            directive = hook.spec.directive(),
            values = self.values.len(),
            "dispatching line"
        );

        let result = (hook.handler)(self);
        if let Err(error) = result {
            self.state.error = Some(error);
        }
        result
    }

    fn fail(&mut self, error: ParseError, message: &str) -> ParseResult {
        self.state.error = Some(error);
        self.state.message.clear();
        self.state.message.push_str(message);
        Err(error)
    }

    // =========================================================================
    // Values
    // =========================================================================

    /// Returns the directive of the current line, once it has been matched
    /// to a hook.
    #[must_use]
    pub fn directive(&self) -> Option<&str> {
        self.directive.as_deref().map(HookSpec::directive)
    }

    /// Returns true if the current line has a value for `name`.
    #[must_use]
    pub fn has_val(&self, name: &str) -> bool {
        self.value(name).is_some()
    }

    /// Returns the value for `name`, if the current line has one.
    #[must_use]
    pub fn value(&self, name: &str) -> Option<&Value> {
        self.values
            .iter()
            .find(|v| &*v.name == name)
            .map(|v| &v.value)
    }

    /// Returns the current line's values in field order.
    #[must_use]
    pub fn values(&self) -> &[FieldValue] {
        &self.values
    }

    #[track_caller]
    fn expect_value(&self, name: &str, ty: FieldType) -> &Value {
        match self.value(name) {
            Some(value) if value.field_type() == ty => value,
            Some(value) => panic!(
                "field '{name}' is {}, not {ty}",
                value.field_type()
            ),
            None => panic!("no value for field '{name}'"),
        }
    }

    /// Returns the `sym` value named `name`.
    ///
    /// # Panics
    ///
    /// Panics if there is no such value or it is not a `sym`. Handlers
    /// should only ask for fields their format declares, checking optional
    /// ones with [`Parser::has_val`] first.
    #[must_use]
    #[track_caller]
    pub fn get_sym(&self, name: &str) -> &str {
        match self.expect_value(name, FieldType::Sym) {
            Value::Sym(s) => s,
            _ => unreachable!(),
        }
    }

    /// Returns the `str` value named `name`.
    ///
    /// # Panics
    ///
    /// Panics if there is no such value or it is not a `str`.
    #[must_use]
    #[track_caller]
    pub fn get_str(&self, name: &str) -> &str {
        match self.expect_value(name, FieldType::Str) {
            Value::Str(s) => s,
            _ => unreachable!(),
        }
    }

    /// Returns the `int` value named `name`.
    ///
    /// # Panics
    ///
    /// Panics if there is no such value or it is not an `int`.
    #[must_use]
    #[track_caller]
    pub fn get_int(&self, name: &str) -> i32 {
        match self.expect_value(name, FieldType::Int) {
            Value::Int(n) => *n,
            _ => unreachable!(),
        }
    }

    /// Returns the `uint` value named `name`.
    ///
    /// # Panics
    ///
    /// Panics if there is no such value or it is not a `uint`.
    #[must_use]
    #[track_caller]
    pub fn get_uint(&self, name: &str) -> u32 {
        match self.expect_value(name, FieldType::Uint) {
            Value::Uint(n) => *n,
            _ => unreachable!(),
        }
    }

    /// Returns the `char` value named `name`.
    ///
    /// # Panics
    ///
    /// Panics if there is no such value or it is not a `char`.
    #[must_use]
    #[track_caller]
    pub fn get_char(&self, name: &str) -> char {
        match self.expect_value(name, FieldType::Char) {
            Value::Char(c) => *c,
            _ => unreachable!(),
        }
    }

    /// Returns the `rand` value named `name`.
    ///
    /// # Panics
    ///
    /// Panics if there is no such value or it is not a `rand`.
    #[must_use]
    #[track_caller]
    pub fn get_rand(&self, name: &str) -> Random {
        match self.expect_value(name, FieldType::Rand) {
            Value::Rand(r) => *r,
            _ => unreachable!(),
        }
    }

    // =========================================================================
    // Private state
    // =========================================================================

    /// Returns the private state, if set.
    #[must_use]
    pub const fn private(&self) -> Option<&P> {
        self.private.as_ref()
    }

    /// Returns the private state mutably, if set.
    pub fn private_mut(&mut self) -> Option<&mut P> {
        self.private.as_mut()
    }

    /// Replaces the private state, returning the previous one.
    pub fn set_private(&mut self, private: P) -> Option<P> {
        self.private.replace(private)
    }

    /// Removes and returns the private state.
    pub fn take_private(&mut self) -> Option<P> {
        self.private.take()
    }

    // =========================================================================
    // Diagnostics
    // =========================================================================

    /// Returns the position and outcome of the most recent line.
    #[must_use]
    pub const fn state(&self) -> &ParserState {
        &self.state
    }
}

fn convert(ty: FieldType, token: &str) -> Result<Value, ParseError> {
    match ty {
        FieldType::Int => parse_int(token).map(Value::Int).ok_or(ParseError::NotNumber),
        FieldType::Uint => parse_uint(token)
            .map(Value::Uint)
            .ok_or(ParseError::NotNumber),
        FieldType::Sym => Ok(Value::Sym(token.to_string())),
        FieldType::Str => Ok(Value::Str(token.to_string())),
        FieldType::Rand => parse_random(token)
            .map(Value::Rand)
            .ok_or(ParseError::NotRandom),
        FieldType::Char => {
            let mut chars = token.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => Ok(Value::Char(c)),
                (Some(_), Some(_)) => Err(ParseError::FieldTooLong),
                (None, _) => Err(ParseError::MissingField),
            }
        }
    }
}
