//! Integration tests for field conversion
//!
//! One directive per field type, checked through the typed getters.

use loreline_parser::{ParseError, Parser, Random, Value, ignored};

fn parser_with(format: &str) -> Parser {
    let mut parser = Parser::new();
    parser.register(format, ignored).unwrap();
    parser
}

// =============================================================================
// Symbols and Strings
// =============================================================================

#[test]
fn sym_single() {
    let mut parser = parser_with("test-sym0 sym foo");
    assert_eq!(parser.parse("test-sym0:bar"), Ok(()));
    assert_eq!(parser.get_sym("foo"), "bar");
}

#[test]
fn sym_pair() {
    let mut parser = parser_with("test-sym1 sym foo sym baz");
    assert_eq!(parser.parse("test-sym1:bar:quxx"), Ok(()));
    assert_eq!(parser.get_sym("foo"), "bar");
    assert_eq!(parser.get_sym("baz"), "quxx");
}

#[test]
fn str_takes_rest_of_line() {
    let mut parser = parser_with("test-str0 str s0");
    assert_eq!(parser.parse("test-str0:foo:bar:baz quxx..."), Ok(()));
    assert_eq!(parser.get_str("s0"), "foo:bar:baz quxx...");
}

#[test]
fn str_keeps_inner_whitespace() {
    let mut parser = parser_with("desc str text");
    parser.parse("desc:  two  spaces ").unwrap();
    assert_eq!(parser.get_str("text"), "  two  spaces ");
}

// =============================================================================
// Integers
// =============================================================================

#[test]
fn int_pair() {
    let mut parser = parser_with("test-int0 int i0 int i1");
    assert_eq!(parser.parse("test-int0:42:81"), Ok(()));
    assert_eq!(parser.get_int("i0"), 42);
    assert_eq!(parser.get_int("i1"), 81);
}

#[test]
fn int_negative() {
    let mut parser = parser_with("test-int1 int i0");
    assert_eq!(parser.parse("test-int1:-3"), Ok(()));
    assert_eq!(parser.get_int("i0"), -3);
}

#[test]
fn int_bases_and_trailing_text() {
    let mut parser = parser_with("n int v");
    parser.parse("n:0x1F").unwrap();
    assert_eq!(parser.get_int("v"), 31);
    parser.parse("n:017").unwrap();
    assert_eq!(parser.get_int("v"), 15);
    parser.parse("n:12abc").unwrap();
    assert_eq!(parser.get_int("v"), 12);
}

#[test]
fn int_saturates() {
    let mut parser = parser_with("n int v");
    parser.parse("n:99999999999").unwrap();
    assert_eq!(parser.get_int("v"), i32::MAX);
    parser.parse("n:-99999999999").unwrap();
    assert_eq!(parser.get_int("v"), i32::MIN);
}

#[test]
fn uint_plain() {
    let mut parser = parser_with("test-uint0 uint u0");
    assert_eq!(parser.parse("test-uint0:42"), Ok(()));
    assert_eq!(parser.get_uint("u0"), 42);
}

#[test]
fn uint_rejects_minus() {
    let mut parser = parser_with("test-uint1 uint u0");
    assert_eq!(parser.parse("test-uint1:-2"), Err(ParseError::NotNumber));
    assert_eq!(parser.state().message, "u0");
}

// =============================================================================
// Characters
// =============================================================================

#[test]
fn char_single() {
    let mut parser = parser_with("test-char0 char c");
    assert_eq!(parser.parse("test-char0:C"), Ok(()));
    assert_eq!(parser.get_char("c"), 'C');
}

#[test]
fn char_too_long() {
    let mut parser = parser_with("test-char0 char c");
    assert_eq!(parser.parse("test-char0:CC"), Err(ParseError::FieldTooLong));
    assert_eq!(parser.parse("test-char0:££"), Err(ParseError::FieldTooLong));
    assert_eq!(parser.state().column, 2);
}

#[test]
fn char_multibyte() {
    let mut parser = parser_with("test-char0 char c");
    assert_eq!(parser.parse("test-char0:£"), Ok(()));
    assert_eq!(parser.get_char("c"), '£');
}

#[test]
fn char_may_be_delimiter() {
    let mut parser = parser_with("test-char1 char c0 int i0 char c1 str s");
    assert_eq!(parser.parse("test-char1:::34:::lala"), Ok(()));
    assert_eq!(parser.get_char("c0"), ':');
    assert_eq!(parser.get_int("i0"), 34);
    assert_eq!(parser.get_char("c1"), ':');
    assert_eq!(parser.get_str("s"), "lala");
}

// =============================================================================
// Random Values
// =============================================================================

#[test]
fn rand_single() {
    let mut parser = parser_with("test-rand0 rand r0");
    assert_eq!(parser.parse("test-rand0:2d3"), Ok(()));
    let r = parser.get_rand("r0");
    assert_eq!((r.dice, r.sides), (2, 3));
}

#[test]
fn rand_pair() {
    let mut parser = parser_with("test-rand1 rand r0 rand r1");
    assert_eq!(parser.parse("test-rand1:2d3:4d5"), Ok(()));
    assert_eq!(parser.get_rand("r0"), Random::new(0, 2, 3, 0));
    assert_eq!(parser.get_rand("r1"), Random::new(0, 4, 5, 0));
}

#[test]
fn rand_malformed() {
    let mut parser = parser_with("test-rand0 rand r0");
    assert_eq!(parser.parse("test-rand0:8dM1"), Err(ParseError::NotRandom));
    assert_eq!(parser.state().message, "r0");
}

// =============================================================================
// Optional Fields
// =============================================================================

#[test]
fn optional_present_and_absent() {
    let mut parser = parser_with("test-opt0 sym s0 ?sym s1");

    assert_eq!(parser.parse("test-opt0:foo:bar"), Ok(()));
    assert_eq!(parser.get_sym("s0"), "foo");
    assert!(parser.has_val("s1"));
    assert_eq!(parser.get_sym("s1"), "bar");

    assert_eq!(parser.parse("test-opt0:foo"), Ok(()));
    assert_eq!(parser.get_sym("s0"), "foo");
    assert!(!parser.has_val("s1"));
}

#[test]
fn optional_run_stops_at_first_missing() {
    let mut parser = parser_with("attack rand dice ?int to_h ?int to_d");
    parser.parse("attack:1d4:3").unwrap();
    assert_eq!(parser.get_int("to_h"), 3);
    assert!(!parser.has_val("to_d"));
    assert_eq!(parser.values().len(), 2);
}

// =============================================================================
// Getter Contract
// =============================================================================

#[test]
fn values_keep_field_order() {
    let mut parser = parser_with("mix sym a int b char c");
    parser.parse("mix:x:7:q").unwrap();
    let names: Vec<&str> = parser.values().iter().map(|v| &*v.name).collect();
    assert_eq!(names, ["a", "b", "c"]);
    assert_eq!(parser.value("b"), Some(&Value::Int(7)));
}

#[test]
#[should_panic(expected = "no value for field 'missing'")]
fn getter_panics_on_absent_field() {
    let mut parser = parser_with("n int v");
    parser.parse("n:1").unwrap();
    let _ = parser.get_int("missing");
}

#[test]
#[should_panic(expected = "field 'v' is int")]
fn getter_panics_on_wrong_type() {
    let mut parser = parser_with("n int v");
    parser.parse("n:1").unwrap();
    let _ = parser.get_sym("v");
}
