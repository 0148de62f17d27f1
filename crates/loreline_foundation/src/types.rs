//! Field type descriptors for directive formats.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::RegError;

/// The declared type of one field in a directive format.
///
/// Determines both how the field is tokenized and how its token is
/// converted into a value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum FieldType {
    /// Signed integer with C-style base prefixes.
    Int,
    /// Unsigned integer; any `-` is rejected.
    Uint,
    /// A single `:`-delimited word.
    Sym,
    /// The rest of the line, colons included.
    Str,
    /// A dice-like random value such as `2d6` or `5+d4M2`.
    Rand,
    /// Exactly one character, which may itself be `:`.
    Char,
}

impl FieldType {
    /// Returns the format-string token for this type.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Int => "int",
            Self::Uint => "uint",
            Self::Sym => "sym",
            Self::Str => "str",
            Self::Rand => "rand",
            Self::Char => "char",
        }
    }

    /// Returns true if this type consumes the remainder of the line.
    ///
    /// Nothing may be declared after such a field.
    #[must_use]
    pub const fn consumes_rest(self) -> bool {
        matches!(self, Self::Str)
    }
}

impl FromStr for FieldType {
    type Err = RegError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "int" => Ok(Self::Int),
            "uint" => Ok(Self::Uint),
            "sym" => Ok(Self::Sym),
            "str" => Ok(Self::Str),
            "rand" => Ok(Self::Rand),
            "char" => Ok(Self::Char),
            other => Err(RegError::UnknownType(other.to_string())),
        }
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
