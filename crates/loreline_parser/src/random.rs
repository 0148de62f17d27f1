//! The random-value grammar used by `rand` fields.
//!
//! A value is written as some combination of a base `B`, a dice roll `NdS`
//! (or `dS` for a single die), and a magic bonus `Mm`:
//!
//! ```text
//! B+NdSMm   B+dSMm   B+Mm   B+NdS   B+dS
//! NdSMm     dSMm     Mm     NdS     dS     B
//! ```
//!
//! The whole value may be negated with one leading `-`. No other `-` is
//! allowed anywhere. Every number is a run of decimal digits that fits in
//! an `i32`.

use loreline_foundation::Random;

#[derive(Clone, Copy)]
enum Slot {
    Base,
    Dice,
    Sides,
    Bonus,
}

#[derive(Clone, Copy)]
enum Part {
    Num(Slot),
    Lit(u8),
}

use Part::{Lit, Num};
use Slot::{Base, Bonus, Dice, Sides};

/// Accepted forms, most specific first.
const FORMS: [&[Part]; 11] = [
    &[Num(Base), Lit(b'+'), Num(Dice), Lit(b'd'), Num(Sides), Lit(b'M'), Num(Bonus)],
    &[Num(Base), Lit(b'+'), Lit(b'd'), Num(Sides), Lit(b'M'), Num(Bonus)],
    &[Num(Base), Lit(b'+'), Lit(b'M'), Num(Bonus)],
    &[Num(Base), Lit(b'+'), Num(Dice), Lit(b'd'), Num(Sides)],
    &[Num(Base), Lit(b'+'), Lit(b'd'), Num(Sides)],
    &[Num(Dice), Lit(b'd'), Num(Sides), Lit(b'M'), Num(Bonus)],
    &[Lit(b'd'), Num(Sides), Lit(b'M'), Num(Bonus)],
    &[Lit(b'M'), Num(Bonus)],
    &[Num(Dice), Lit(b'd'), Num(Sides)],
    &[Lit(b'd'), Num(Sides)],
    &[Num(Base)],
];

/// Parses a random value, or returns `None` if `text` is not one.
///
/// # Examples
///
/// ```
/// use loreline_foundation::Random;
/// use loreline_parser::parse_random;
///
/// assert_eq!(parse_random("2d6"), Some(Random::new(0, 2, 6, 0)));
/// assert_eq!(parse_random("-10+4d8M2"), Some(Random::new(-48, 4, 8, 2)));
/// assert_eq!(parse_random("8dM1"), None);
/// ```
#[must_use]
pub fn parse_random(text: &str) -> Option<Random> {
    let (negative, body) = match text.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, text),
    };

    if body.contains('-') {
        return None;
    }

    let value = FORMS.iter().find_map(|form| match_form(body.as_bytes(), form))?;

    if negative { value.negated() } else { Some(value) }
}

/// Matches `input` against one form, requiring the whole input be consumed.
fn match_form(input: &[u8], form: &[Part]) -> Option<Random> {
    // A bare `dS` is one die.
    let mut value = Random::new(0, 1, 0, 0);
    let mut pos = 0;

    for part in form {
        match *part {
            Lit(expected) => {
                if input.get(pos) != Some(&expected) {
                    return None;
                }
                pos += 1;
            }
            Num(slot) => {
                let len = input[pos..].iter().take_while(|b| b.is_ascii_digit()).count();
                if len == 0 {
                    return None;
                }
                let digits = std::str::from_utf8(&input[pos..pos + len]).ok()?;
                let n: i32 = digits.parse().ok()?;
                pos += len;

                match slot {
                    Base => value.base = n,
                    Dice => value.dice = n.unsigned_abs(),
                    Sides => value.sides = n.unsigned_abs(),
                    Bonus => value.m_bonus = n.unsigned_abs(),
                }
            }
        }
    }

    if pos != input.len() {
        return None;
    }

    // Forms without a sides term roll no dice at all.
    if !form.iter().any(|p| matches!(p, Num(Sides))) {
        value.dice = 0;
    }
    Some(value)
}
