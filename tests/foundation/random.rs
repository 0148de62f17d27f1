//! Integration tests for random values
//!
//! Tests evaluation by aspect, validity checks, and seeded rolling.

use loreline_foundation::{Aspect, MAX_DEPTH, Random, damroll, m_bonus};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

// =============================================================================
// Evaluation
// =============================================================================

#[test]
fn constant_value() {
    let v = Random::constant(7);
    for aspect in [Aspect::Minimise, Aspect::Average, Aspect::Maximise, Aspect::Extremify] {
        assert_eq!(v.calc(0, aspect), 7);
    }
    assert!(!v.varies());
    assert!(v.is_valid(7));
    assert!(!v.is_valid(8));
}

#[test]
fn dice_and_bonus() {
    let v = Random::new(9, 2, 12, 4);
    assert_eq!(v.calc(0, Aspect::Minimise), 11);
    assert_eq!(v.calc(0, Aspect::Maximise), 37);
    assert_eq!(v.calc(0, Aspect::Average), 9 + 13);
    assert_eq!(v.calc(MAX_DEPTH / 2, Aspect::Average), 9 + 13 + 2);
    assert!(v.varies());
    assert!(v.is_valid(20));
    assert!(!v.is_valid(40));
}

#[test]
fn negated_value_is_mirrored() {
    let v = Random::new(10, 4, 8, 2);
    let n = v.negated().unwrap();
    assert_eq!(n, Random::new(-48, 4, 8, 2));
    assert_eq!(n.calc(0, Aspect::Minimise), -v.calc(0, Aspect::Maximise));
    assert_eq!(n.calc(0, Aspect::Maximise), -v.calc(0, Aspect::Minimise));
}

#[test]
fn display_forms() {
    assert_eq!(Random::new(0, 2, 3, 0).to_string(), "2d3");
    assert_eq!(Random::new(5, 3, 20, 1).to_string(), "5+3d20M1");
    assert_eq!(Random::new(0, 0, 0, 9).to_string(), "M9");
    assert_eq!(Random::constant(0).to_string(), "0");
}

// =============================================================================
// Rolling
// =============================================================================

#[test]
fn rolls_stay_in_range() {
    let mut rng = ChaCha8Rng::seed_from_u64(2024);
    let v = Random::new(5, 3, 20, 1);
    let (min, max) = (v.calc(0, Aspect::Minimise), v.calc(0, Aspect::Maximise));
    for level in [0, 50, 127] {
        for _ in 0..200 {
            assert!((min..=max).contains(&v.roll(level, &mut rng)));
        }
    }
}

#[test]
fn damroll_covers_all_faces() {
    let mut rng = ChaCha8Rng::seed_from_u64(1);
    let mut seen = [false; 6];
    for _ in 0..600 {
        let r = damroll(&mut rng, 1, 6);
        seen[usize::try_from(r - 1).unwrap()] = true;
    }
    assert!(seen.iter().all(|s| *s));
}

#[test]
fn m_bonus_grows_with_level() {
    let mut rng = ChaCha8Rng::seed_from_u64(9);
    let total = |rng: &mut ChaCha8Rng, level| -> i32 {
        (0..500).map(|_| m_bonus(rng, 20, level)).sum()
    };
    let shallow = total(&mut rng, 0);
    let deep = total(&mut rng, 120);
    assert!(deep > shallow);
}
