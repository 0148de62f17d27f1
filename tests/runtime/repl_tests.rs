//! Tests for the REPL through a scripted editor

use loreline_runtime::{LineEditor, ReadResult, Repl, ReplConfig, Result};

use crate::schema;

struct ScriptedEditor {
    lines: std::vec::IntoIter<String>,
    keywords: Vec<String>,
}

impl ScriptedEditor {
    fn new(lines: &[&str]) -> Self {
        Self {
            lines: lines
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .into_iter(),
            keywords: Vec::new(),
        }
    }
}

impl LineEditor for ScriptedEditor {
    fn read_line(&mut self, _prompt: &str) -> Result<ReadResult> {
        Ok(self.lines.next().map_or(ReadResult::Eof, ReadResult::Line))
    }

    fn add_history(&mut self, _line: &str) {}

    fn set_keywords(&mut self, keywords: Vec<String>) {
        self.keywords = keywords;
    }
}

fn repl(lines: &[&str]) -> Repl<ScriptedEditor> {
    Repl::with_editor(ScriptedEditor::new(lines), schema("object"))
        .with_config(ReplConfig::default().with_banner(false))
}

#[test]
fn values_are_echoed() {
    let mut repl = repl(&[]);
    assert_eq!(
        repl.eval("attack:2d6:-1").unwrap(),
        Some("attack: dice = 2d6, to_h = -1".to_string())
    );
    assert_eq!(
        repl.eval("graphics:::red").unwrap(),
        Some("graphics: glyph = :, color = red".to_string())
    );
}

#[test]
fn errors_name_the_column() {
    let mut repl = repl(&[]);
    assert_eq!(
        repl.eval("weight:-2").unwrap(),
        Some("error at column 2: weight: not a number".to_string())
    );
    assert_eq!(
        repl.eval("colour:red").unwrap(),
        Some("error at column 1: colour: undefined directive".to_string())
    );
}

#[test]
fn comments_print_nothing() {
    let mut repl = repl(&[]);
    assert_eq!(repl.eval("# just a note").unwrap(), None);
    assert_eq!(repl.parser().state().line, 1);
}

#[test]
fn scripted_session_collects_records() {
    let mut repl = repl(&["name:Spear", "level:8", "name:Pike", ".quit", "name:Ignored"]);
    repl.run().unwrap();

    let document = repl.parser().private().unwrap().document();
    assert_eq!(document.records.len(), 2);
    assert_eq!(document.entry_count(), 3);
}

#[test]
fn lines_before_a_header_are_kept() {
    let mut repl = repl(&["weight:40", "name:Spear", "level:8"]);
    repl.run().unwrap();

    let document = repl.parser().private().unwrap().document();
    assert_eq!(document.records.len(), 2);
    assert_eq!(document.records[0].entries[0].directive, "weight");
    assert_eq!(document.records[1].entries.len(), 2);
}
