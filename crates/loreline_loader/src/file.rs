//! Feeding data files to a parser.
//!
//! [`Loader::parse_file`] resolves a file name against the configured
//! directories and feeds it line by line to a [`Parser`]. A [`FileParser`]
//! packages the whole lifecycle of one data file (building the parser,
//! running it, and turning its private state into the loaded data) so that
//! [`Loader::run_parser`] can drive it.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::PathBuf;

use loreline_foundation::{ParseError, RegError};
use loreline_parser::Parser;
use tracing::{debug, error, info};

use crate::config::LoaderConfig;
use crate::error::{Diagnostic, LoadError};

/// The lifecycle of one data file.
///
/// # Example
///
/// ```
/// use loreline_loader::FileParser;
/// use loreline_parser::{ParseError, Parser, RegError};
///
/// struct Names;
///
/// impl FileParser for Names {
///     type State = Vec<String>;
///     type Output = Vec<String>;
///
///     fn name(&self) -> &str {
///         "names"
///     }
///
///     fn init(&self) -> Result<Parser<Vec<String>>, RegError> {
///         let mut parser = Parser::with_private(Vec::new());
///         parser.register("name str name", |p| {
///             let name = p.get_str("name").to_string();
///             p.private_mut().ok_or(ParseError::Internal)?.push(name);
///             Ok(())
///         })?;
///         Ok(parser)
///     }
///
///     fn finish(&self, mut parser: Parser<Vec<String>>) -> Result<Vec<String>, ParseError> {
///         parser.take_private().ok_or(ParseError::Internal)
///     }
/// }
/// ```
pub trait FileParser {
    /// Private state accumulated while parsing.
    type State;

    /// The loaded data.
    type Output;

    /// The file name, without directory or extension.
    fn name(&self) -> &str;

    /// Builds a parser with every directive registered.
    ///
    /// # Errors
    ///
    /// Returns a [`RegError`] if a directive format is malformed.
    fn init(&self) -> Result<Parser<Self::State>, RegError>;

    /// Feeds the data to the parser. By default, reads the file named by
    /// [`FileParser::name`].
    ///
    /// # Errors
    ///
    /// Returns a [`LoadError`] if the file is missing, unreadable, or has a
    /// line that fails to parse.
    fn run(&self, loader: &Loader, parser: &mut Parser<Self::State>) -> Result<(), LoadError> {
        loader.parse_file(parser, self.name())
    }

    /// Validates the parsed data and extracts it from the parser.
    ///
    /// # Errors
    ///
    /// Returns a [`ParseError`] if the data is inconsistent as a whole.
    fn finish(&self, parser: Parser<Self::State>) -> Result<Self::Output, ParseError>;
}

/// Locates and reads data files.
#[derive(Clone, Debug, Default)]
pub struct Loader {
    config: LoaderConfig,
}

impl Loader {
    /// Creates a loader with the given configuration.
    #[must_use]
    pub const fn new(config: LoaderConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration.
    #[must_use]
    pub const fn config(&self) -> &LoaderConfig {
        &self.config
    }

    /// Returns the path `name` resolves to, if any candidate exists.
    #[must_use]
    pub fn locate(&self, name: &str) -> Option<PathBuf> {
        self.config
            .candidates(name)
            .into_iter()
            .find(|path| path.is_file())
    }

    /// Parses the data file `name`, stopping at the first failing line.
    ///
    /// # Errors
    ///
    /// - [`LoadError::NotFound`] if no candidate file exists
    /// - [`LoadError::Io`] if the file cannot be read
    /// - [`LoadError::Parse`] if a line fails to parse
    pub fn parse_file<P>(&self, parser: &mut Parser<P>, name: &str) -> Result<(), LoadError> {
        let Some(path) = self.locate(name) else {
            return Err(LoadError::NotFound(self.config.file_name(name)));
        };
        info!(file = name, path = %path.display(), "parsing data file");

        let file = File::open(&path).map_err(|source| LoadError::Io {
            path: path.clone(),
            source,
        })?;

        parse_reader(parser, BufReader::new(file), name).map_err(|err| match err {
            LoadError::Io { source, .. } => LoadError::Io { path, source },
            other => other,
        })
    }

    /// Runs the whole lifecycle of `file_parser`.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::Registration`] if the parser cannot be built,
    /// whatever [`FileParser::run`] returns, or [`LoadError::Finish`] if the
    /// data is rejected as a whole. Failures are also logged.
    pub fn run_parser<F: FileParser + ?Sized>(&self, file_parser: &F) -> Result<F::Output, LoadError> {
        let name = file_parser.name();

        let mut parser = file_parser
            .init()
            .map_err(|source| LoadError::Registration {
                file: name.to_string(),
                source,
            })?;

        if let Err(err) = file_parser.run(self, &mut parser) {
            error!(file = name, "{err}");
            return Err(err);
        }

        debug!(file = name, lines = parser.state().line, "finishing data file");
        file_parser.finish(parser).map_err(|error| {
            let err = LoadError::Finish {
                file: name.to_string(),
                error,
            };
            error!(file = name, "{err}");
            err
        })
    }
}

/// Feeds every line of `reader` to `parser`, stopping at the first failure.
///
/// Line endings, including a trailing `\r`, are removed before parsing.
/// `name` identifies the source in diagnostics.
///
/// # Errors
///
/// Returns [`LoadError::Io`] if reading fails or the text is not UTF-8, and
/// [`LoadError::Parse`] if a line fails to parse.
pub fn parse_reader<P, R: BufRead>(
    parser: &mut Parser<P>,
    reader: R,
    name: &str,
) -> Result<(), LoadError> {
    for line in reader.lines() {
        let line = line.map_err(|source| LoadError::Io {
            path: PathBuf::from(name),
            source,
        })?;
        let line = line.strip_suffix('\r').unwrap_or(&line);

        if let Err(error) = parser.parse(line) {
            return Err(LoadError::Parse(Diagnostic::new(
                name,
                parser.state(),
                error,
            )));
        }
    }
    Ok(())
}
