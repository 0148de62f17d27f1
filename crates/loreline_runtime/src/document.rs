//! Parsed data files as plain records.
//!
//! A [`Document`] is the schema-independent view of a data file: a list of
//! [`Record`]s, each a list of [`Entry`]s in file order. A record starts at
//! each line whose directive is the schema's record directive.

use serde::{Deserialize, Serialize};

use loreline_foundation::{ParseError, ParseResult};
use loreline_parser::{Parser, Value};

/// One named value of an entry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    /// Field name from the directive format.
    pub name: String,
    /// Parsed value.
    pub value: Value,
}

/// One parsed line.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    /// Line number in the source file.
    pub line: u32,
    /// The line's directive.
    pub directive: String,
    /// The line's values, in field order.
    pub fields: Vec<Field>,
}

impl Entry {
    /// Returns the value of the field called `name`.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&Value> {
        self.fields.iter().find(|f| f.name == name).map(|f| &f.value)
    }
}

/// A group of entries opened by a record directive.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// Entries in file order; the first is the record header.
    pub entries: Vec<Entry>,
}

impl Record {
    /// Returns the entry that opened this record.
    #[must_use]
    pub fn header(&self) -> Option<&Entry> {
        self.entries.first()
    }

    /// Iterates over the entries with the given directive.
    pub fn entries_for<'a>(&'a self, directive: &'a str) -> impl Iterator<Item = &'a Entry> + 'a {
        self.entries.iter().filter(move |e| e.directive == directive)
    }
}

/// A whole parsed data file.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    /// Name of the source file.
    pub file: String,
    /// Records in file order.
    pub records: Vec<Record>,
}

impl Document {
    /// Returns the total number of entries across all records.
    #[must_use]
    pub fn entry_count(&self) -> usize {
        self.records.iter().map(|r| r.entries.len()).sum()
    }

    /// Serializes the document as JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self, pretty: bool) -> serde_json::Result<String> {
        if pretty {
            serde_json::to_string_pretty(self)
        } else {
            serde_json::to_string(self)
        }
    }

    /// Deserializes a document from JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if `json` is not a serialized document.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}

/// Accumulates entries into a [`Document`] while a file is parsed.
#[derive(Clone, Debug, Default)]
pub struct DocumentBuilder {
    record_directive: Option<String>,
    implicit_record: bool,
    document: Document,
}

impl DocumentBuilder {
    /// Creates a builder for `file`.
    ///
    /// With no record directive, the whole file is a single record.
    #[must_use]
    pub fn new(file: &str, record_directive: Option<&str>) -> Self {
        Self {
            record_directive: record_directive.map(str::to_string),
            implicit_record: false,
            document: Document {
                file: file.to_string(),
                records: Vec::new(),
            },
        }
    }

    /// Builder method to accept entries before the first record header.
    ///
    /// Such entries go into a record with no header line, so lines can be
    /// checked one at a time without starting a record first.
    #[must_use]
    pub const fn with_implicit_record(mut self) -> Self {
        self.implicit_record = true;
        self
    }

    /// Returns the document built so far.
    #[must_use]
    pub const fn document(&self) -> &Document {
        &self.document
    }

    /// Adds an entry, opening a new record if it is a record header.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::MissingRecordHeader`] if the entry precedes the
    /// first record header and the builder has no implicit record.
    pub fn push(&mut self, entry: Entry) -> ParseResult {
        let first = self.document.records.is_empty();
        let opens = self
            .record_directive
            .as_deref()
            .map_or(first, |d| d == entry.directive)
            || (first && self.implicit_record);
        if opens {
            self.document.records.push(Record::default());
        }

        let record = self
            .document
            .records
            .last_mut()
            .ok_or(ParseError::MissingRecordHeader)?;
        record.entries.push(entry);
        Ok(())
    }

    /// Returns the finished document.
    #[must_use]
    pub fn finish(self) -> Document {
        self.document
    }
}

/// Handler that records the current line as an [`Entry`].
///
/// # Errors
///
/// Returns [`ParseError::Internal`] if the parser has no builder, and
/// [`ParseError::MissingRecordHeader`] as for [`DocumentBuilder::push`].
pub fn collect(parser: &mut Parser<DocumentBuilder>) -> ParseResult {
    let entry = Entry {
        line: parser.state().line,
        directive: parser.directive().ok_or(ParseError::Internal)?.to_string(),
        fields: parser
            .values()
            .iter()
            .map(|v| Field {
                name: v.name.to_string(),
                value: v.value.clone(),
            })
            .collect(),
    };
    parser
        .private_mut()
        .ok_or(ParseError::Internal)?
        .push(entry)
}
