//! Schemas describing data file formats.
//!
//! A schema is itself a data file, read with the same engine:
//!
//! ```text
//! # object.txt schema
//! name:object
//! record:name
//! directive:name str name
//! directive:level int level
//! directive:attack rand dice ?int to_h ?int to_d
//! ```
//!
//! `record` names the directive that opens each record and may be omitted
//! for files that are a single record.

use loreline_foundation::{ParseError, ParseResult, RegError};
use loreline_loader::{FileParser, LoadError, Loader};
use loreline_parser::{HookSpec, Parser};
use tracing::debug;

use crate::document::{Document, DocumentBuilder, collect};

/// A data file format.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Schema {
    name: String,
    record: Option<String>,
    directives: Vec<HookSpec>,
}

impl Schema {
    /// Creates an empty schema.
    #[must_use]
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            ..Self::default()
        }
    }

    /// Builder method to set the record directive.
    #[must_use]
    pub fn with_record(mut self, directive: &str) -> Self {
        self.record = Some(directive.to_string());
        self
    }

    /// Builder method to add a directive format.
    ///
    /// # Errors
    ///
    /// Returns a [`RegError`] if `format` is malformed.
    pub fn with_directive(mut self, format: &str) -> Result<Self, RegError> {
        self.directives.push(HookSpec::parse(format)?);
        Ok(self)
    }

    /// Returns the schema name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the directive that opens each record, if any.
    #[must_use]
    pub fn record(&self) -> Option<&str> {
        self.record.as_deref()
    }

    /// Returns the directive formats.
    #[must_use]
    pub fn directives(&self) -> &[HookSpec] {
        &self.directives
    }

    /// Loads the schema file `name`.
    ///
    /// # Errors
    ///
    /// Returns a [`LoadError`] if the file is missing or malformed.
    pub fn load(loader: &Loader, name: &str) -> Result<Self, LoadError> {
        loader.run_parser(&SchemaFile { name })
    }

    /// Builds a parser that collects `file` into a document.
    #[must_use]
    pub fn compile(&self, file: &str) -> Parser<DocumentBuilder> {
        self.compile_into(DocumentBuilder::new(file, self.record()))
    }

    /// Builds a parser that checks lines one at a time.
    ///
    /// Unlike [`Schema::compile`], lines before the first record header are
    /// accepted and collected into a record of their own.
    #[must_use]
    pub fn compile_interactive(&self, file: &str) -> Parser<DocumentBuilder> {
        self.compile_into(DocumentBuilder::new(file, self.record()).with_implicit_record())
    }

    fn compile_into(&self, builder: DocumentBuilder) -> Parser<DocumentBuilder> {
        let mut parser = Parser::with_private(builder);
        for spec in &self.directives {
            parser.register_spec(spec.clone(), collect);
        }
        debug!(schema = %self.name, directives = self.directives.len(), "compiled schema");
        parser
    }

    /// Returns the directive keywords, for completion.
    #[must_use]
    pub fn keywords(&self) -> Vec<String> {
        self.directives
            .iter()
            .map(|spec| format!("{}:", spec.directive()))
            .collect()
    }

    fn validate(&self) -> ParseResult {
        if self.name.is_empty() {
            return Err(ParseError::MissingRecordHeader);
        }
        if self.directives.is_empty() {
            return Err(ParseError::TooFewEntries);
        }
        if let Some(record) = self.record() {
            if !self.directives.iter().any(|d| d.directive() == record) {
                return Err(ParseError::UndefinedDirective);
            }
        }
        Ok(())
    }
}

fn parse_name(p: &mut Parser<Schema>) -> ParseResult {
    let name = p.get_sym("name").to_string();
    let schema = p.private_mut().ok_or(ParseError::Internal)?;
    if !schema.name.is_empty() {
        return Err(ParseError::RepeatedDirective);
    }
    schema.name = name;
    Ok(())
}

fn parse_record(p: &mut Parser<Schema>) -> ParseResult {
    let record = p.get_sym("directive").to_string();
    let schema = p.private_mut().ok_or(ParseError::Internal)?;
    if schema.record.is_some() {
        return Err(ParseError::RepeatedDirective);
    }
    schema.record = Some(record);
    Ok(())
}

fn parse_directive(p: &mut Parser<Schema>) -> ParseResult {
    let spec = HookSpec::parse(p.get_str("format")).map_err(|_| ParseError::InvalidValue)?;
    let schema = p.private_mut().ok_or(ParseError::Internal)?;
    if schema.directives.iter().any(|d| d.directive() == spec.directive()) {
        return Err(ParseError::RepeatedDirective);
    }
    schema.directives.push(spec);
    Ok(())
}

/// Builds the parser that reads schema files.
///
/// # Errors
///
/// Never fails in practice; the formats are fixed.
pub fn schema_parser() -> Result<Parser<Schema>, RegError> {
    let mut parser = Parser::with_private(Schema::default());
    parser.register("name sym name", parse_name)?;
    parser.register("record sym directive", parse_record)?;
    parser.register("directive str format", parse_directive)?;
    Ok(parser)
}

/// The schema file `name`.
#[derive(Clone, Copy, Debug)]
pub struct SchemaFile<'a> {
    /// File name, without directory or extension.
    pub name: &'a str,
}

impl FileParser for SchemaFile<'_> {
    type State = Schema;
    type Output = Schema;

    fn name(&self) -> &str {
        self.name
    }

    fn init(&self) -> Result<Parser<Schema>, RegError> {
        schema_parser()
    }

    fn finish(&self, mut parser: Parser<Schema>) -> Result<Schema, ParseError> {
        let schema = parser.take_private().ok_or(ParseError::Internal)?;
        schema.validate()?;
        Ok(schema)
    }
}

/// The data file `name`, read according to `schema`.
#[derive(Clone, Copy, Debug)]
pub struct DataFile<'a> {
    /// The file format.
    pub schema: &'a Schema,
    /// File name, without directory or extension.
    pub name: &'a str,
}

impl FileParser for DataFile<'_> {
    type State = DocumentBuilder;
    type Output = Document;

    fn name(&self) -> &str {
        self.name
    }

    fn init(&self) -> Result<Parser<DocumentBuilder>, RegError> {
        Ok(self.schema.compile(self.name))
    }

    fn finish(&self, mut parser: Parser<DocumentBuilder>) -> Result<Document, ParseError> {
        parser
            .take_private()
            .map(DocumentBuilder::finish)
            .ok_or(ParseError::Internal)
    }
}
