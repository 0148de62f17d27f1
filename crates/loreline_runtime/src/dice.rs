//! Summaries of random values, for the `roll` command.

use std::fmt;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use loreline_foundation::{Aspect, Random};
use loreline_parser::parse_random;

/// The range of a random value and a sample of rolls.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RollReport {
    /// The parsed value.
    pub value: Random,
    /// Level the value was evaluated at.
    pub level: i32,
    /// Smallest possible result.
    pub min: i32,
    /// Expected result.
    pub average: i32,
    /// Largest possible result.
    pub max: i32,
    /// Sampled results.
    pub rolls: Vec<i32>,
}

impl RollReport {
    /// Parses `expr` and rolls it `count` times at `level`.
    ///
    /// The same `seed` always produces the same rolls. Returns `None` if
    /// `expr` is not a random value.
    #[must_use]
    pub fn new(expr: &str, level: i32, count: usize, seed: u64) -> Option<Self> {
        let value = parse_random(expr)?;
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let rolls = (0..count).map(|_| value.roll(level, &mut rng)).collect();

        Some(Self {
            value,
            level,
            min: value.calc(level, Aspect::Minimise),
            average: value.calc(level, Aspect::Average),
            max: value.calc(level, Aspect::Maximise),
            rolls,
        })
    }
}

impl fmt::Display for RollReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} at level {}", self.value, self.level)?;
        writeln!(f, "  min {}  avg {}  max {}", self.min, self.average, self.max)?;
        if !self.rolls.is_empty() {
            let rolls: Vec<String> = self.rolls.iter().map(ToString::to_string).collect();
            writeln!(f, "  rolls {}", rolls.join(" "))?;
        }
        Ok(())
    }
}
