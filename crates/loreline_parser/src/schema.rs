//! Directive format strings.
//!
//! A format string declares one directive and its fields:
//!
//! ```text
//! N int index str name
//! G char glyph sym color
//! E sym effect ?rand time
//! ```
//!
//! The first token is the directive keyword. Each following pair is a type
//! and a field name; a `?` before the type marks the field optional.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use loreline_foundation::{FieldType, RegError};

/// One declared field of a directive.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldSpec {
    /// Field name, used by the accessors.
    pub name: Arc<str>,
    /// Declared type.
    pub ty: FieldType,
    /// Whether the field may be absent.
    pub optional: bool,
}

impl FieldSpec {
    /// Creates a mandatory field.
    #[must_use]
    pub fn new(name: &str, ty: FieldType) -> Self {
        Self {
            name: Arc::from(name),
            ty,
            optional: false,
        }
    }

    /// Creates an optional field.
    #[must_use]
    pub fn optional(name: &str, ty: FieldType) -> Self {
        Self {
            optional: true,
            ..Self::new(name, ty)
        }
    }
}

impl fmt::Display for FieldSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.optional {
            f.write_str("?")?;
        }
        write!(f, "{} {}", self.ty, self.name)
    }
}

/// A parsed directive format: the keyword and its ordered fields.
///
/// Invariants, checked by [`HookSpec::parse`]:
/// - every mandatory field precedes every optional field
/// - nothing follows a `str` field
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HookSpec {
    directive: String,
    fields: Vec<FieldSpec>,
}

impl HookSpec {
    /// Parses a format string.
    ///
    /// # Errors
    ///
    /// Returns a [`RegError`] if the string has no directive, a type has no
    /// name, a type is unknown, a mandatory field follows an optional one,
    /// or any field follows a `str` field.
    pub fn parse(format: &str) -> Result<Self, RegError> {
        let mut tokens = format.split(' ').filter(|t| !t.is_empty());

        let directive = tokens.next().ok_or(RegError::MissingDirective)?;
        let mut fields: Vec<FieldSpec> = Vec::new();

        while let Some(type_token) = tokens.next() {
            let (optional, type_name) = match type_token.strip_prefix('?') {
                Some(rest) => (true, rest),
                None => (false, type_token),
            };
            let ty: FieldType = type_name.parse()?;
            let name = tokens.next().ok_or(RegError::MissingName { ty })?;

            if let Some(last) = fields.last() {
                if last.ty.consumes_rest() {
                    return Err(RegError::FieldAfterString(name.to_string()));
                }
                if last.optional && !optional {
                    return Err(RegError::MandatoryAfterOptional(name.to_string()));
                }
            }

            fields.push(FieldSpec {
                name: Arc::from(name),
                ty,
                optional,
            });
        }

        Ok(Self {
            directive: directive.to_string(),
            fields,
        })
    }

    /// Returns the directive keyword.
    #[must_use]
    pub fn directive(&self) -> &str {
        &self.directive
    }

    /// Returns the declared fields in order.
    #[must_use]
    pub fn fields(&self) -> &[FieldSpec] {
        &self.fields
    }

    /// Returns the field with the given name, if declared.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|f| &*f.name == name)
    }

    /// Returns the number of fields that must be present on every line.
    #[must_use]
    pub fn mandatory_count(&self) -> usize {
        self.fields.iter().take_while(|f| !f.optional).count()
    }
}

impl FromStr for HookSpec {
    type Err = RegError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for HookSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.directive)?;
        for field in &self.fields {
            write!(f, " {field}")?;
        }
        Ok(())
    }
}
