//! Typed field values produced by parsing a line.

use std::fmt;
use std::sync::Arc;

use loreline_foundation::{FieldType, Random};

/// A single converted field value.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Value {
    /// `char` field.
    Char(char),
    /// `int` field.
    Int(i32),
    /// `uint` field.
    Uint(u32),
    /// `sym` field: a single `:`-free word.
    Sym(String),
    /// `str` field: the rest of the line.
    Str(String),
    /// `rand` field.
    Rand(Random),
}

impl Value {
    /// Returns the field type this value was parsed as.
    #[must_use]
    pub const fn field_type(&self) -> FieldType {
        match self {
            Self::Char(_) => FieldType::Char,
            Self::Int(_) => FieldType::Int,
            Self::Uint(_) => FieldType::Uint,
            Self::Sym(_) => FieldType::Sym,
            Self::Str(_) => FieldType::Str,
            Self::Rand(_) => FieldType::Rand,
        }
    }

    /// Returns the text of a `sym` or `str` value.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Sym(s) | Self::Str(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Char(c) => write!(f, "{c}"),
            Self::Int(n) => write!(f, "{n}"),
            Self::Uint(n) => write!(f, "{n}"),
            Self::Sym(s) | Self::Str(s) => f.write_str(s),
            Self::Rand(r) => write!(f, "{r}"),
        }
    }
}

/// A named value from the current line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldValue {
    /// Field name from the directive format.
    pub name: Arc<str>,
    /// Converted value.
    pub value: Value,
}
