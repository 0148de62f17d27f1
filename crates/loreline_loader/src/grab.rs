//! Helpers for handlers that look names up in tables.
//!
//! Many directives name an entry of a fixed table, optionally with an
//! argument in brackets:
//!
//! ```text
//! values:STR[2] | RES_FIRE[1]
//! values:BLOWS[1d2]
//! ```

use loreline_foundation::{ParseError, ParseResult, Random};
use loreline_parser::number::parse_int;
use loreline_parser::parse_random;
use tracing::warn;

/// Returns the position of `code` in `names`.
#[must_use]
pub fn code_index(names: &[&str], code: &str) -> Option<usize> {
    names.iter().position(|name| *name == code)
}

/// Looks `what` up in `list`, logging a warning if it is missing.
///
/// `from` describes the kind of name, for the log message.
///
/// # Errors
///
/// Returns [`ParseError::Generic`] if `what` is not in `list`.
pub fn grab_name(from: &str, what: &str, list: &[&str]) -> Result<usize, ParseError> {
    code_index(list, what).ok_or_else(|| {
        warn!("Unknown {from} '{what}'.");
        ParseError::Generic
    })
}

/// Splits `NAME[arg]` into its name and argument.
///
/// The closing bracket is optional. Returns `None` if there is no opening
/// bracket or the argument is empty.
#[must_use]
pub fn value_arg(expr: &str) -> Option<(&str, &str)> {
    let (name, rest) = expr.split_once('[')?;
    let arg = rest.strip_suffix(']').unwrap_or(rest).trim();
    if arg.is_empty() {
        return None;
    }
    Some((name, arg))
}

fn int_arg(expr: &str) -> Result<(&str, i32), ParseError> {
    let (name, arg) = value_arg(expr).ok_or(ParseError::InvalidValue)?;
    let value = parse_int(arg).ok_or(ParseError::InvalidValue)?;
    Ok((name, value))
}

/// Stores the argument of `NAME[arg]` in `values`, at the position of
/// `NAME` in `names`.
///
/// # Errors
///
/// - [`ParseError::InvalidValue`] if `expr` is not of the form `NAME[int]`
/// - [`ParseError::Internal`] if `NAME` is not in `names`
/// - [`ParseError::OutOfBounds`] if `values` is too short
pub fn grab_int_value(values: &mut [i32], names: &[&str], expr: &str) -> ParseResult {
    let (name, value) = int_arg(expr)?;
    let index = code_index(names, name).ok_or(ParseError::Internal)?;
    *values.get_mut(index).ok_or(ParseError::OutOfBounds)? = value;
    Ok(())
}

/// Stores the random argument of `NAME[dice]` in `values`, at the position
/// of `NAME` in `names`.
///
/// # Errors
///
/// - [`ParseError::InvalidValue`] if `expr` has no bracketed argument
/// - [`ParseError::Internal`] if `NAME` is not in `names`
/// - [`ParseError::NotRandom`] if the argument is not a random value
/// - [`ParseError::OutOfBounds`] if `values` is too short
pub fn grab_rand_value(values: &mut [Random], names: &[&str], expr: &str) -> ParseResult {
    let (name, arg) = value_arg(expr).ok_or(ParseError::InvalidValue)?;
    let index = code_index(names, name).ok_or(ParseError::Internal)?;
    let value = parse_random(arg).ok_or(ParseError::NotRandom)?;
    *values.get_mut(index).ok_or(ParseError::OutOfBounds)? = value;
    Ok(())
}

/// Parses `PREFIXsuffix[int]`, returning the position of `suffix` in
/// `suffixes` and the argument.
///
/// # Errors
///
/// - [`ParseError::InvalidValue`] if `expr` is not of the form `NAME[int]`
/// - [`ParseError::Internal`] if the name is not `prefix` followed by one of
///   `suffixes`
pub fn grab_index_and_int(
    suffixes: &[&str],
    prefix: &str,
    expr: &str,
) -> Result<(usize, i32), ParseError> {
    let (name, value) = int_arg(expr)?;
    let suffix = name.strip_prefix(prefix).ok_or(ParseError::Internal)?;
    let index = code_index(suffixes, suffix).ok_or(ParseError::Internal)?;
    Ok((index, value))
}

/// Parses `SLAY_<base>[int]`, returning the base name and the argument.
///
/// # Errors
///
/// Returns [`ParseError::InvalidValue`] if `expr` is not of that form.
pub fn grab_base_and_int(expr: &str) -> Result<(&str, i32), ParseError> {
    let (name, value) = int_arg(expr)?;
    let base = name.strip_prefix("SLAY_").ok_or(ParseError::InvalidValue)?;
    Ok((base, value))
}
