//! Integration tests for the random value grammar

use loreline_parser::{Random, parse_random};

#[test]
fn accepted_forms() {
    let cases = [
        ("7", Random::new(7, 0, 0, 0)),
        ("d8", Random::new(0, 1, 8, 0)),
        ("2d3", Random::new(0, 2, 3, 0)),
        ("M4", Random::new(0, 0, 0, 4)),
        ("d8M2", Random::new(0, 1, 8, 2)),
        ("3d6M2", Random::new(0, 3, 6, 2)),
        ("5+M3", Random::new(5, 0, 0, 3)),
        ("5+d6", Random::new(5, 1, 6, 0)),
        ("5+3d6", Random::new(5, 3, 6, 0)),
        ("5+d6M2", Random::new(5, 1, 6, 2)),
        ("5+3d20M1", Random::new(5, 3, 20, 1)),
    ];
    for (text, expected) in cases {
        assert_eq!(parse_random(text), Some(expected), "{text}");
    }
}

#[test]
fn leading_minus_negates_the_whole_value() {
    // Dice and bonus stay non-negative; the base absorbs the mirror.
    assert_eq!(parse_random("-10+4d8M2"), Some(Random::new(-48, 4, 8, 2)));
    assert_eq!(parse_random("-5"), Some(Random::constant(-5)));
}

#[test]
fn negation_folds_into_base_for_every_form() {
    let forms = [
        ("5+3d20M1", 5, 3, 20, 1),
        ("5+d6M2", 5, 1, 6, 2),
        ("5+M3", 5, 0, 0, 3),
        ("5+3d6", 5, 3, 6, 0),
        ("5+d6", 5, 1, 6, 0),
        ("3d6M2", 0, 3, 6, 2),
        ("d8M2", 0, 1, 8, 2),
        ("M4", 0, 0, 0, 4),
        ("2d3", 0, 2, 3, 0),
        ("d8", 0, 1, 8, 0),
        ("7", 7, 0, 0, 0),
    ];
    for (text, base, dice, sides, m_bonus) in forms {
        let negated = parse_random(&format!("-{text}")).unwrap();
        let expected_base = -base - m_bonus - dice * (sides + 1);
        assert_eq!(negated.base, expected_base, "-{text}");
        assert_eq!(
            (negated.dice, negated.sides, negated.m_bonus),
            (dice.unsigned_abs(), sides.unsigned_abs(), m_bonus.unsigned_abs()),
            "-{text}"
        );
        assert_eq!(parse_random(text), Some(Random::new(
            base,
            dice.unsigned_abs(),
            sides.unsigned_abs(),
            m_bonus.unsigned_abs(),
        )));
    }
}

#[test]
fn rejected_strings() {
    let bad = [
        "",
        " ",
        "a",
        "ad10",
        "8dc",
        "Ma",
        "8-3d7M4",
        "8+-3d4",
        "8+7d-6",
        "8+3d6M-1",
        "8+4d",
        "10+M",
        "8dM1",
        "8M3",
        "8+Md3",
        "8+7d4M3+8",
        "2d6 ",
        "+2d6",
    ];
    for text in bad {
        assert_eq!(parse_random(text), None, "{text:?}");
    }
}

#[test]
fn overflow_is_rejected() {
    assert_eq!(parse_random("4294967296"), None);
    assert_eq!(parse_random("1d99999999999"), None);
    assert_eq!(parse_random("99999999999+1d2"), None);
}

#[test]
fn display_matches_input_for_canonical_forms() {
    for text in ["7", "2d3", "5+3d20M1", "M4", "3d6M2"] {
        let value = parse_random(text).unwrap();
        assert_eq!(value.to_string(), text);
    }
}
