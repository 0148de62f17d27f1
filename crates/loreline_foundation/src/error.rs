//! Error types for Loreline.
//!
//! Uses `thiserror` for ergonomic error definition. Per-line failures are
//! [`ParseError`] codes; malformed directive formats are [`RegError`]s.

use std::fmt;

use thiserror::Error;

use crate::types::FieldType;

/// Result of parsing one line or running one directive handler.
///
/// `Ok(())` is the "no error" state.
pub type ParseResult = Result<(), ParseError>;

/// Error codes produced while parsing a line of a data file.
///
/// The engine itself raises `MissingField`, `UndefinedDirective`,
/// `NotNumber`, `NotRandom`, and `FieldTooLong`. The remaining codes are
/// raised by directive handlers and propagate unchanged.
///
/// The `Display` output is the canonical error string used in diagnostics.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ParseError {
    /// Unspecified failure.
    Generic,
    /// An expression string could not be parsed.
    BadExpressionString,
    /// A `char` field held more than one character.
    FieldTooLong,
    /// Something that should not happen happened.
    Internal,
    /// Allocation information was malformed.
    InvalidAllocation,
    /// A color name or code was not recognised.
    InvalidColor,
    /// A dice string was malformed.
    InvalidDice,
    /// An effect name was not recognised.
    InvalidEffect,
    /// An expression was malformed.
    InvalidExpression,
    /// A flag name was not recognised.
    InvalidFlag,
    /// An item number was out of range.
    InvalidItemNumber,
    /// A lighting value was not recognised.
    InvalidLighting,
    /// A message type was not recognised.
    InvalidMessage,
    /// An option name was not recognised.
    InvalidOption,
    /// A property was not recognised.
    InvalidProperty,
    /// A spell frequency was out of range.
    InvalidSpellFreq,
    /// A spell name was not recognised.
    InvalidSpellName,
    /// A subtype was not recognised.
    InvalidSubtype,
    /// A value was out of range or malformed.
    InvalidValue,
    /// A required `:` was missing.
    MissingColon,
    /// A mandatory field had no token.
    MissingField,
    /// A field directive appeared before its record header.
    MissingRecordHeader,
    /// The requested data file does not exist.
    NoFileFound,
    /// Record indices were not sequential.
    NonSequentialRecords,
    /// An `int` or `uint` field was not a number.
    NotNumber,
    /// A `rand` field was not a random value.
    NotRandom,
    /// The data file uses an obsolete format.
    ObsoleteFile,
    /// A value was outside its permitted bounds.
    OutOfBounds,
    /// Memory could not be obtained.
    OutOfMemory,
    /// A directive that may appear once per record appeared again.
    RepeatedDirective,
    /// Fewer entries than required were given.
    TooFewEntries,
    /// More entries than permitted were given.
    TooManyEntries,
    /// An expression referenced an unbound name.
    UnboundExpression,
    /// No hook is registered for the line's directive.
    UndefinedDirective,
}

impl ParseError {
    /// Every error code, in code order.
    pub const ALL: [Self; 34] = [
        Self::Generic,
        Self::BadExpressionString,
        Self::FieldTooLong,
        Self::Internal,
        Self::InvalidAllocation,
        Self::InvalidColor,
        Self::InvalidDice,
        Self::InvalidEffect,
        Self::InvalidExpression,
        Self::InvalidFlag,
        Self::InvalidItemNumber,
        Self::InvalidLighting,
        Self::InvalidMessage,
        Self::InvalidOption,
        Self::InvalidProperty,
        Self::InvalidSpellFreq,
        Self::InvalidSpellName,
        Self::InvalidSubtype,
        Self::InvalidValue,
        Self::MissingColon,
        Self::MissingField,
        Self::MissingRecordHeader,
        Self::NoFileFound,
        Self::NonSequentialRecords,
        Self::NotNumber,
        Self::NotRandom,
        Self::ObsoleteFile,
        Self::OutOfBounds,
        Self::OutOfMemory,
        Self::RepeatedDirective,
        Self::TooFewEntries,
        Self::TooManyEntries,
        Self::UnboundExpression,
        Self::UndefinedDirective,
    ];

    /// Returns the stable numeric code for this error.
    ///
    /// Codes start at 1; 0 is reserved for "no error".
    #[must_use]
    pub fn code(self) -> u8 {
        Self::ALL
            .iter()
            .position(|e| *e == self)
            .and_then(|i| u8::try_from(i + 1).ok())
            .unwrap_or(0)
    }

    /// Looks up an error by its numeric code.
    #[must_use]
    pub fn from_code(code: u8) -> Option<Self> {
        usize::from(code)
            .checked_sub(1)
            .and_then(|i| Self::ALL.get(i).copied())
    }

    /// Returns the canonical error string.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Generic => "generic error",
            Self::BadExpressionString => "bad expression string",
            Self::FieldTooLong => "field too long",
            Self::Internal => "internal error",
            Self::InvalidAllocation => "invalid allocation",
            Self::InvalidColor => "invalid color",
            Self::InvalidDice => "invalid dice",
            Self::InvalidEffect => "invalid effect",
            Self::InvalidExpression => "invalid expression",
            Self::InvalidFlag => "invalid flag",
            Self::InvalidItemNumber => "invalid item number",
            Self::InvalidLighting => "invalid lighting",
            Self::InvalidMessage => "invalid message",
            Self::InvalidOption => "invalid option",
            Self::InvalidProperty => "invalid property",
            Self::InvalidSpellFreq => "invalid spell frequency",
            Self::InvalidSpellName => "invalid spell name",
            Self::InvalidSubtype => "invalid subtype",
            Self::InvalidValue => "invalid value",
            Self::MissingColon => "missing colon",
            Self::MissingField => "missing field",
            Self::MissingRecordHeader => "missing record header",
            Self::NoFileFound => "no file found",
            Self::NonSequentialRecords => "non-sequential records",
            Self::NotNumber => "not a number",
            Self::NotRandom => "not random",
            Self::ObsoleteFile => "obsolete file",
            Self::OutOfBounds => "out of bounds",
            Self::OutOfMemory => "out of memory",
            Self::RepeatedDirective => "repeated directive",
            Self::TooFewEntries => "too few entries",
            Self::TooManyEntries => "too many entries",
            Self::UnboundExpression => "unbound expression",
            Self::UndefinedDirective => "undefined directive",
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::error::Error for ParseError {}

/// Errors from registering a directive format string.
///
/// These are structural mistakes in the schema, not in the data, so they are
/// reported when a hook is registered rather than when a line is parsed.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum RegError {
    /// The format string was empty or blank.
    #[error("format string has no directive")]
    MissingDirective,

    /// A field type was not followed by a field name.
    #[error("{ty} field has no name")]
    MissingName {
        /// The type whose name is missing.
        ty: FieldType,
    },

    /// A field type token was not recognised.
    #[error("unknown field type: {0}")]
    UnknownType(String),

    /// A mandatory field followed an optional one.
    #[error("mandatory field {0} follows an optional field")]
    MandatoryAfterOptional(String),

    /// A field followed a `str` field, which consumes the rest of the line.
    #[error("field {0} follows a str field")]
    FieldAfterString(String),
}
