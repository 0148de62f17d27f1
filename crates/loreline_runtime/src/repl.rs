//! Interactive line checking against a schema.
//!
//! Each line typed is parsed as if it were the next line of a data file and
//! the resulting values, or the parse error, are printed. Lines starting
//! with `.` are REPL commands.

use crate::document::DocumentBuilder;
use crate::editor::{LineEditor, ReadResult, RustylineEditor};
use crate::error::Result;
use crate::schema::Schema;
use loreline_parser::Parser;
use std::fmt::Write as _;

/// Configuration for the REPL.
#[derive(Clone, Debug)]
pub struct ReplConfig {
    /// Whether to print the welcome banner.
    pub show_banner: bool,
    /// Prompt shown before each line.
    pub prompt: String,
    /// Whether `.dump` pretty-prints.
    pub pretty_json: bool,
}

impl Default for ReplConfig {
    fn default() -> Self {
        Self {
            show_banner: true,
            prompt: "> ".to_string(),
            pretty_json: true,
        }
    }
}

impl ReplConfig {
    /// Builder method to show or hide the banner.
    #[must_use]
    pub const fn with_banner(mut self, show: bool) -> Self {
        self.show_banner = show;
        self
    }

    /// Builder method to set the prompt.
    #[must_use]
    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    /// Builder method to choose pretty or compact `.dump` output.
    #[must_use]
    pub const fn with_pretty_json(mut self, pretty: bool) -> Self {
        self.pretty_json = pretty;
        self
    }
}

/// The interactive REPL.
pub struct Repl<E: LineEditor = RustylineEditor> {
    editor: E,
    schema: Schema,
    parser: Parser<DocumentBuilder>,
    config: ReplConfig,
}

impl Repl<RustylineEditor> {
    /// Creates a REPL with the default rustyline editor.
    ///
    /// # Errors
    ///
    /// Returns an error if the editor fails to initialize.
    pub fn new(schema: Schema) -> Result<Self> {
        let editor = RustylineEditor::new()?;
        Ok(Self::with_editor(editor, schema))
    }
}

impl<E: LineEditor> Repl<E> {
    /// Creates a REPL reading from `editor`.
    pub fn with_editor(mut editor: E, schema: Schema) -> Self {
        editor.set_keywords(schema.keywords());
        let parser = schema.compile_interactive("repl");
        Self {
            editor,
            schema,
            parser,
            config: ReplConfig::default(),
        }
    }

    /// Sets the configuration.
    #[must_use]
    pub fn with_config(mut self, config: ReplConfig) -> Self {
        self.config = config;
        self
    }

    /// Returns the parser, with everything entered so far.
    #[must_use]
    pub const fn parser(&self) -> &Parser<DocumentBuilder> {
        &self.parser
    }

    /// Runs the REPL loop until end of input or `.quit`.
    ///
    /// # Errors
    ///
    /// Returns an error if reading input fails.
    pub fn run(&mut self) -> Result<()> {
        if self.config.show_banner {
            self.print_banner();
        }

        loop {
            let line = match self.editor.read_line(&self.config.prompt)? {
                ReadResult::Line(line) => line,
                ReadResult::Interrupted => continue,
                ReadResult::Eof => break,
            };

            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }
            self.editor.add_history(&line);

            if matches!(trimmed, ".quit" | ".exit") {
                break;
            }
            if let Some(output) = self.eval(&line)? {
                println!("{output}");
            }
        }

        println!("\nGoodbye!");
        Ok(())
    }

    /// Evaluates one line, returning the text to print.
    ///
    /// # Errors
    ///
    /// Returns an error if `.dump` cannot serialize the document.
    pub fn eval(&mut self, line: &str) -> Result<Option<String>> {
        let trimmed = line.trim();
        if let Some(command) = trimmed.strip_prefix('.') {
            return self.command(command);
        }

        if let Err(error) = self.parser.parse(line) {
            let state = self.parser.state();
            return Ok(Some(format!(
                "error at column {}: {}: {error}",
                state.column, state.message
            )));
        }

        let Some(directive) = self.parser.directive() else {
            return Ok(None);
        };
        let mut out = directive.to_string();
        for (i, field) in self.parser.values().iter().enumerate() {
            let sep = if i == 0 { ": " } else { ", " };
            let _ = write!(out, "{sep}{} = {}", field.name, field.value);
        }
        Ok(Some(out))
    }

    fn command(&mut self, command: &str) -> Result<Option<String>> {
        let output = match command {
            "help" => HELP.to_string(),
            "hooks" => self
                .parser
                .hooks()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join("\n"),
            "state" => self.parser.state().to_string(),
            "dump" => match self.parser.private() {
                Some(builder) => builder.document().to_json(self.config.pretty_json)?,
                None => String::new(),
            },
            "reset" => {
                self.parser = self.schema.compile_interactive("repl");
                "parser reset".to_string()
            }
            other => format!("unknown command '.{other}', try .help"),
        };
        Ok(Some(output))
    }

    fn print_banner(&self) {
        println!(
            "Loreline {} - checking lines against schema '{}'",
            env!("CARGO_PKG_VERSION"),
            self.schema.name()
        );
        println!("Type .help for commands, Ctrl+D to exit.\n");
    }
}

const HELP: &str = "\
.hooks   list the directive formats
.state   show the line, column, and last error
.dump    print the records entered so far as JSON
.reset   forget everything entered so far
.quit    exit";
