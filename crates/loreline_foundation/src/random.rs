//! Dice-like random values.
//!
//! A [`Random`] describes a quantity of the form `base + NdS + M(bonus)`:
//! a fixed base, a roll of `dice` dice with `sides` sides each, and a
//! level-dependent "magic bonus" between zero and `m_bonus`.
//!
//! The random components are always non-negative. A negated value keeps them
//! non-negative by folding the sign into `base`, see [`Random::negated`].

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Depth at which the magic bonus reaches its full average.
pub const MAX_DEPTH: i32 = 128;

/// A dice-like random value.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Random {
    /// Fixed part of the value.
    pub base: i32,
    /// Number of dice rolled.
    pub dice: u32,
    /// Sides on each die.
    pub sides: u32,
    /// Maximum magic bonus.
    pub m_bonus: u32,
}

/// How to collapse a [`Random`] into a single number without rolling.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Aspect {
    /// The smallest possible value.
    Minimise,
    /// The expected value.
    Average,
    /// The largest possible value.
    Maximise,
    /// Whichever of the minimum and maximum is further from zero.
    Extremify,
}

impl Random {
    /// Creates a random value from its parts.
    #[must_use]
    pub const fn new(base: i32, dice: u32, sides: u32, m_bonus: u32) -> Self {
        Self {
            base,
            dice,
            sides,
            m_bonus,
        }
    }

    /// Creates a value that is always `base`.
    #[must_use]
    pub const fn constant(base: i32) -> Self {
        Self::new(base, 0, 0, 0)
    }

    /// Returns the negation of this value, or `None` on overflow.
    ///
    /// `-(B + NdS + Mm)` is rewritten as `B' + NdS + Mm` where
    /// `B' = -B - m - N * (S + 1)`, so the random parts stay non-negative
    /// and the distribution is mirrored exactly.
    #[must_use]
    pub fn negated(self) -> Option<Self> {
        let dice_span = i64::from(self.dice) * (i64::from(self.sides) + 1);
        let base = -i64::from(self.base) - i64::from(self.m_bonus) - dice_span;
        Some(Self {
            base: i32::try_from(base).ok()?,
            ..self
        })
    }

    /// Collapses this value at the given level without rolling.
    #[must_use]
    pub fn calc(&self, level: i32, aspect: Aspect) -> i32 {
        if aspect == Aspect::Extremify {
            let min = self.calc(level, Aspect::Minimise);
            let max = self.calc(level, Aspect::Maximise);
            return if min.unsigned_abs() > max.unsigned_abs() {
                min
            } else {
                max
            };
        }

        let total = i64::from(self.base)
            + dice_calc(self.dice, self.sides, aspect)
            + bonus_calc(self.m_bonus, level, aspect);
        saturate(total)
    }

    /// Returns true if `test` lies within this value's range at level 0.
    #[must_use]
    pub fn is_valid(&self, test: i32) -> bool {
        (self.calc(0, Aspect::Minimise)..=self.calc(0, Aspect::Maximise)).contains(&test)
    }

    /// Returns true if this value can take more than one result.
    #[must_use]
    pub fn varies(&self) -> bool {
        self.calc(0, Aspect::Minimise) != self.calc(0, Aspect::Maximise)
    }
}

fn dice_calc(dice: u32, sides: u32, aspect: Aspect) -> i64 {
    if sides == 0 {
        return 0;
    }
    let (dice, sides) = (i64::from(dice), i64::from(sides));
    match aspect {
        Aspect::Minimise => dice,
        Aspect::Average => dice * (sides + 1) / 2,
        Aspect::Maximise | Aspect::Extremify => dice * sides,
    }
}

fn bonus_calc(max: u32, level: i32, aspect: Aspect) -> i64 {
    let max = i64::from(max);
    match aspect {
        Aspect::Minimise => 0,
        Aspect::Average => max * i64::from(level) / i64::from(MAX_DEPTH),
        Aspect::Maximise | Aspect::Extremify => max,
    }
}

pub(crate) fn saturate(value: i64) -> i32 {
    i32::try_from(value).unwrap_or(if value < 0 { i32::MIN } else { i32::MAX })
}

impl fmt::Display for Random {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let has_dice = self.dice > 0 && self.sides > 0;
        let has_bonus = self.m_bonus > 0;

        if self.base != 0 || (!has_dice && !has_bonus) {
            write!(f, "{}", self.base)?;
            if has_dice || has_bonus {
                f.write_str("+")?;
            }
        }
        if has_dice {
            write!(f, "{}d{}", self.dice, self.sides)?;
        }
        if has_bonus {
            write!(f, "M{}", self.m_bonus)?;
        }
        Ok(())
    }
}
