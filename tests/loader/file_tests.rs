//! Tests for loading whole data files

use loreline_foundation::{ParseError, ParseResult, RegError};
use loreline_loader::{
    FileParser, FlagSet, LoadError, Loader, LoaderConfig, grab_flags, grab_int_value,
};
use loreline_parser::{Parser, ignored};

use crate::data_dir;

const OBJECT_FLAGS: &[&str] = &["THROWING", "SHOW_DICE", "IMPACT", "PROT_FEAR"];
const STATS: &[&str] = &["STR", "INT", "WIS", "DEX", "CON"];

#[derive(Debug)]
struct Object {
    name: String,
    level: i32,
    flags: FlagSet,
    modifiers: [i32; 5],
}

fn current(p: &mut Parser<Vec<Object>>) -> Result<&mut Object, ParseError> {
    p.private_mut()
        .and_then(|objects| objects.last_mut())
        .ok_or(ParseError::MissingRecordHeader)
}

fn parse_name(p: &mut Parser<Vec<Object>>) -> ParseResult {
    let object = Object {
        name: p.get_str("name").to_string(),
        level: 0,
        flags: FlagSet::new(OBJECT_FLAGS.len()),
        modifiers: [0; 5],
    };
    p.private_mut().ok_or(ParseError::Internal)?.push(object);
    Ok(())
}

fn parse_level(p: &mut Parser<Vec<Object>>) -> ParseResult {
    let level = p.get_int("level");
    current(p)?.level = level;
    Ok(())
}

fn parse_flags(p: &mut Parser<Vec<Object>>) -> ParseResult {
    let text = p.get_str("flags").to_string();
    grab_flags(&mut current(p)?.flags, OBJECT_FLAGS, &text)
}

fn parse_values(p: &mut Parser<Vec<Object>>) -> ParseResult {
    let text = p.get_str("values").to_string();
    let object = current(p)?;
    text.split('|')
        .map(str::trim)
        .try_for_each(|expr| grab_int_value(&mut object.modifiers, STATS, expr))
}

/// Reads object files into typed records.
struct ObjectFile<'a> {
    name: &'a str,
}

impl FileParser for ObjectFile<'_> {
    type State = Vec<Object>;
    type Output = Vec<Object>;

    fn name(&self) -> &str {
        self.name
    }

    fn init(&self) -> Result<Parser<Vec<Object>>, RegError> {
        let mut parser = Parser::with_private(Vec::new());
        parser.register("name str name", parse_name)?;
        parser.register("graphics char glyph sym color", ignored)?;
        parser.register("level int level", parse_level)?;
        parser.register("weight uint weight", ignored)?;
        parser.register("attack rand dice ?int to_h ?int to_d", ignored)?;
        parser.register("flags str flags", parse_flags)?;
        parser.register("values str values", parse_values)?;
        parser.register("desc str text", ignored)?;
        Ok(parser)
    }

    fn finish(&self, mut parser: Parser<Vec<Object>>) -> Result<Vec<Object>, ParseError> {
        let objects = parser.take_private().ok_or(ParseError::Internal)?;
        if objects.is_empty() {
            return Err(ParseError::TooFewEntries);
        }
        Ok(objects)
    }
}

fn gamedata_loader() -> Loader {
    Loader::new(LoaderConfig::new(data_dir("gamedata")))
}

// =============================================================================
// Successful Loads
// =============================================================================

#[test]
fn loads_typed_records() {
    let objects = gamedata_loader()
        .run_parser(&ObjectFile { name: "object" })
        .unwrap();

    let names: Vec<&str> = objects.iter().map(|o| o.name.as_str()).collect();
    assert_eq!(names, ["Dagger", "Whip", "Flail"]);
    assert_eq!(objects[2].level, 10);
}

#[test]
fn handlers_fill_flags_and_modifiers() {
    let objects = gamedata_loader()
        .run_parser(&ObjectFile { name: "object" })
        .unwrap();

    let dagger = &objects[0];
    assert!(dagger.flags.has(0));
    assert!(dagger.flags.has(1));
    assert!(!dagger.flags.has(2));
    assert_eq!(dagger.modifiers, [0, 0, 0, 1, 0]);

    let flail = &objects[2];
    assert!(flail.flags.is_empty());
    assert_eq!(flail.modifiers, [2, 0, 0, 0, 1]);
}

#[test]
fn user_directory_overrides_gamedata() {
    let loader = Loader::new(
        LoaderConfig::new(data_dir("gamedata")).with_user_dir(data_dir("user")),
    );
    assert_eq!(
        loader.locate("object"),
        Some(data_dir("user").join("object.txt"))
    );

    let objects = loader.run_parser(&ObjectFile { name: "object" }).unwrap();
    assert_eq!(objects.len(), 1);
    assert_eq!(objects[0].name, "Wooden Sword");
}

#[test]
fn user_directory_falls_back_to_gamedata() {
    let loader = Loader::new(
        LoaderConfig::new(data_dir("gamedata")).with_user_dir(data_dir("user")),
    );
    assert_eq!(
        loader.locate("broken"),
        Some(data_dir("gamedata").join("broken.txt"))
    );
}

// =============================================================================
// Failures
// =============================================================================

#[test]
fn missing_file() {
    let err = gamedata_loader()
        .run_parser(&ObjectFile { name: "nothing" })
        .unwrap_err();
    assert!(matches!(err, LoadError::NotFound(ref f) if f == "nothing.txt"));
    assert_eq!(err.code(), ParseError::NoFileFound);
    assert_eq!(err.to_string(), "Cannot open 'nothing.txt'");
}

#[test]
fn first_bad_line_is_reported() {
    let err = gamedata_loader()
        .run_parser(&ObjectFile { name: "broken" })
        .unwrap_err();

    let LoadError::Parse(diagnostic) = &err else {
        panic!("expected a parse error, got {err:?}");
    };
    assert_eq!(diagnostic.file, "broken");
    assert_eq!(diagnostic.line, 4);
    assert_eq!(diagnostic.column, 2);
    assert_eq!(diagnostic.message, "level");
    assert_eq!(diagnostic.error, ParseError::NotNumber);
    assert_eq!(
        err.to_string(),
        "Parse error in broken line 4 column 2: level: not a number"
    );
}

#[test]
fn finish_rejects_empty_file() {
    let err = gamedata_loader()
        .run_parser(&ObjectFile { name: "empty" })
        .unwrap_err();
    assert!(matches!(
        err,
        LoadError::Finish {
            error: ParseError::TooFewEntries,
            ..
        }
    ));
    assert_eq!(
        err.to_string(),
        "Parser finish error in empty: too few entries"
    );
}

#[test]
fn undeclared_directive_in_file() {
    // The constants file uses directives the object parser never registered.
    let err = gamedata_loader()
        .run_parser(&ObjectFile { name: "constants" })
        .unwrap_err();
    let LoadError::Parse(diagnostic) = err else {
        panic!("expected a parse error");
    };
    assert_eq!(diagnostic.line, 3);
    assert_eq!(diagnostic.error, ParseError::UndefinedDirective);
    assert_eq!(diagnostic.message, "carry-cap");
}

#[test]
fn parse_file_with_plain_parser() {
    let mut parser: Parser<u32> = Parser::with_private(0);
    parser
        .register("carry-cap uint pounds", |p| {
            let pounds = p.get_uint("pounds");
            p.set_private(pounds);
            Ok(())
        })
        .unwrap();
    parser.register("store int turns ?int shuffle", ignored).unwrap();

    gamedata_loader().parse_file(&mut parser, "constants").unwrap();
    assert_eq!(parser.private(), Some(&1500));
    assert_eq!(parser.state().line, 4);
}
