//! Integer conversion for `int` and `uint` fields.
//!
//! Follows C `strtol` conventions with base detection: leading whitespace
//! and a sign are accepted, `0x`/`0X` selects hexadecimal and a leading `0`
//! selects octal. Conversion stops at the first character that is not a
//! digit of the base; trailing text is ignored. A token with no digits at
//! all is not a number. Out-of-range values saturate.

/// Result of scanning the numeric prefix of a token.
struct Scanned {
    negative: bool,
    magnitude: u64,
}

fn scan(token: &str) -> Option<Scanned> {
    let s = token.trim_start_matches(|c: char| c.is_ascii_whitespace());

    let (negative, s) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let bytes = s.as_bytes();
    let (radix, digits) = match bytes {
        [b'0', b'x' | b'X', next, ..] if next.is_ascii_hexdigit() => (16, &s[2..]),
        [b'0', ..] => (8, s),
        _ => (10, s),
    };

    let mut magnitude: u64 = 0;
    let mut any = false;
    for c in digits.chars() {
        let Some(d) = c.to_digit(radix) else { break };
        magnitude = magnitude
            .saturating_mul(u64::from(radix))
            .saturating_add(u64::from(d));
        any = true;
    }

    any.then_some(Scanned {
        negative,
        magnitude,
    })
}

/// Converts an `int` token, or returns `None` if it has no digits.
#[must_use]
pub fn parse_int(token: &str) -> Option<i32> {
    let Scanned {
        negative,
        magnitude,
    } = scan(token)?;

    let value = if negative {
        i64::try_from(magnitude).map_or(i64::MIN, |m| -m)
    } else {
        i64::try_from(magnitude).unwrap_or(i64::MAX)
    };
    Some(i32::try_from(value).unwrap_or(if negative { i32::MIN } else { i32::MAX }))
}

/// Converts a `uint` token, or returns `None` if it has no digits or
/// contains a `-` anywhere.
#[must_use]
pub fn parse_uint(token: &str) -> Option<u32> {
    if token.contains('-') {
        return None;
    }
    let Scanned { magnitude, .. } = scan(token)?;
    Some(u32::try_from(magnitude).unwrap_or(u32::MAX))
}
