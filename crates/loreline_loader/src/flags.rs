//! Named flag sets.
//!
//! Data files list flags by name, usually several to a line separated by
//! `|`:
//!
//! ```text
//! flags:THROWING | SHOW_DICE
//! ```
//!
//! A flag table maps names to bit indices; a [`FlagSet`] holds the bits.

use std::fmt;
use std::io::{self, Write};

use loreline_foundation::{ParseError, ParseResult};

/// Width after which [`write_flags`] starts a new line.
pub const FLAG_LINE_WIDTH: usize = 60;

/// Separator between flag names on one line.
pub const FLAG_SEPARATOR: &str = " | ";

const WORD_BITS: usize = u64::BITS as usize;

/// A fixed-size set of flag indices.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct FlagSet {
    words: Vec<u64>,
    size: usize,
}

impl FlagSet {
    /// Creates an empty set with room for `size` flags.
    #[must_use]
    pub fn new(size: usize) -> Self {
        Self {
            words: vec![0; size.div_ceil(WORD_BITS)],
            size,
        }
    }

    /// Returns the number of flags the set can hold.
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.size
    }

    /// Turns `flag` on. Returns false if it is out of range.
    pub fn on(&mut self, flag: usize) -> bool {
        if flag >= self.size {
            return false;
        }
        self.words[flag / WORD_BITS] |= 1 << (flag % WORD_BITS);
        true
    }

    /// Turns `flag` off. Returns false if it is out of range.
    pub fn off(&mut self, flag: usize) -> bool {
        if flag >= self.size {
            return false;
        }
        self.words[flag / WORD_BITS] &= !(1 << (flag % WORD_BITS));
        true
    }

    /// Returns true if `flag` is on.
    #[must_use]
    pub fn has(&self, flag: usize) -> bool {
        flag < self.size && self.words[flag / WORD_BITS] & (1 << (flag % WORD_BITS)) != 0
    }

    /// Returns true if no flag is on.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.iter().all(|w| *w == 0)
    }

    /// Returns the number of flags that are on.
    #[must_use]
    pub fn count(&self) -> usize {
        self.words.iter().map(|w| w.count_ones() as usize).sum()
    }

    /// Iterates over the flags that are on, in increasing order.
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        (0..self.size).filter(|&flag| self.has(flag))
    }
}

impl fmt::Debug for FlagSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

/// Returns the index of `name` in `table`.
#[must_use]
pub fn lookup_flag(table: &[&str], name: &str) -> Option<usize> {
    table.iter().position(|entry| *entry == name)
}

/// Turns on the flag called `name`.
///
/// # Errors
///
/// Returns [`ParseError::InvalidFlag`] if `name` is not in `table`, and
/// [`ParseError::OutOfBounds`] if the set is too small for it.
pub fn grab_flag(flags: &mut FlagSet, table: &[&str], name: &str) -> ParseResult {
    let flag = lookup_flag(table, name).ok_or(ParseError::InvalidFlag)?;
    if flags.on(flag) {
        Ok(())
    } else {
        Err(ParseError::OutOfBounds)
    }
}

/// Turns off the flag called `name`.
///
/// # Errors
///
/// Returns [`ParseError::InvalidFlag`] if `name` is not in `table`, and
/// [`ParseError::OutOfBounds`] if the set is too small for it.
pub fn remove_flag(flags: &mut FlagSet, table: &[&str], name: &str) -> ParseResult {
    let flag = lookup_flag(table, name).ok_or(ParseError::InvalidFlag)?;
    if flags.off(flag) {
        Ok(())
    } else {
        Err(ParseError::OutOfBounds)
    }
}

/// Splits a flag list such as `"A | B C"` into names.
pub fn flag_names(text: &str) -> impl Iterator<Item = &str> {
    text.split([' ', '|']).filter(|name| !name.is_empty())
}

/// Turns on every flag named in `text`.
///
/// # Errors
///
/// Stops at and returns the first error from [`grab_flag`].
pub fn grab_flags(flags: &mut FlagSet, table: &[&str], text: &str) -> ParseResult {
    flag_names(text).try_for_each(|name| grab_flag(flags, table, name))
}

/// Writes the names of the flags in `flags`, each line starting with
/// `intro`.
///
/// Names are joined with `" | "` and a new line is started once a line
/// reaches [`FLAG_LINE_WIDTH`] characters. Flags with no name in `names`
/// end the list.
///
/// # Errors
///
/// Returns any error from writing to `out`.
pub fn write_flags<W: Write + ?Sized>(
    out: &mut W,
    intro: &str,
    flags: &FlagSet,
    names: &[&str],
) -> io::Result<()> {
    let mut line = String::new();

    for flag in flags.iter() {
        let Some(name) = names.get(flag) else { break };

        if !line.is_empty() {
            line.push_str(FLAG_SEPARATOR);
        }
        line.push_str(name);

        if line.len() >= FLAG_LINE_WIDTH {
            writeln!(out, "{intro}{line}")?;
            line.clear();
        }
    }

    if !line.is_empty() {
        writeln!(out, "{intro}{line}")?;
    }
    Ok(())
}
