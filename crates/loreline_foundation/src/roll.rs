//! Rolling random values.
//!
//! All functions take the generator explicitly so callers control seeding;
//! tests use `rand_chacha` for reproducible sequences.

use rand::Rng;

use crate::random::{MAX_DEPTH, Random, saturate};

/// Entries in [`NORMAL_TABLE`].
const NORMAL_ENTRIES: usize = 256;

/// Standard deviation, in table entries, of [`NORMAL_TABLE`].
const NORMAL_STD: i64 = 64;

/// Cumulative normal distribution scaled to 32767.
///
/// Entry `64 * N` is the number of times out of 32767 that a normally
/// distributed variable falls within `N` standard deviations of the mean.
/// The final entry is forced to 32767 so every roll is within four.
const NORMAL_TABLE: [i16; NORMAL_ENTRIES] = [
    206, 613, 1022, 1430, 1838, 2245, 2652, 3058, //
    3463, 3867, 4271, 4673, 5075, 5475, 5874, 6271, //
    6667, 7061, 7454, 7845, 8234, 8621, 9006, 9389, //
    9770, 10148, 10524, 10898, 11269, 11638, 12004, 12367, //
    12727, 13085, 13440, 13792, 14140, 14486, 14828, 15168, //
    15504, 15836, 16166, 16492, 16814, 17133, 17449, 17761, //
    18069, 18374, 18675, 18972, 19266, 19556, 19842, 20124, //
    20403, 20678, 20949, 21216, 21479, 21738, 21994, 22245, //
    22493, 22737, 22977, 23213, 23446, 23674, 23899, 24120, //
    24336, 24550, 24759, 24965, 25166, 25365, 25559, 25750, //
    25937, 26120, 26300, 26476, 26649, 26818, 26983, 27146, //
    27304, 27460, 27612, 27760, 27906, 28048, 28187, 28323, //
    28455, 28585, 28711, 28835, 28955, 29073, 29188, 29299, //
    29409, 29515, 29619, 29720, 29818, 29914, 30007, 30098, //
    30186, 30272, 30356, 30437, 30516, 30593, 30668, 30740, //
    30810, 30879, 30945, 31010, 31072, 31133, 31192, 31249, //
    31304, 31358, 31410, 31460, 31509, 31556, 31601, 31646, //
    31688, 31730, 31770, 31808, 31846, 31882, 31917, 31950, //
    31983, 32014, 32044, 32074, 32102, 32129, 32155, 32180, //
    32205, 32228, 32251, 32273, 32294, 32314, 32333, 32352, //
    32370, 32387, 32404, 32420, 32435, 32450, 32464, 32477, //
    32490, 32503, 32515, 32526, 32537, 32548, 32558, 32568, //
    32577, 32586, 32595, 32603, 32611, 32618, 32625, 32632, //
    32639, 32645, 32651, 32657, 32662, 32667, 32672, 32677, //
    32682, 32686, 32690, 32694, 32698, 32702, 32705, 32708, //
    32711, 32714, 32717, 32720, 32722, 32725, 32727, 32729, //
    32731, 32733, 32735, 32737, 32739, 32740, 32742, 32743, //
    32745, 32746, 32747, 32748, 32749, 32750, 32751, 32752, //
    32753, 32754, 32755, 32756, 32757, 32757, 32758, 32758, //
    32759, 32760, 32760, 32761, 32761, 32761, 32762, 32762, //
    32763, 32763, 32763, 32764, 32764, 32764, 32764, 32765, //
    32765, 32765, 32765, 32766, 32766, 32766, 32766, 32767, //
];

/// Rolls `num` dice with `sides` sides and sums them.
///
/// Dice with no sides always roll zero.
pub fn damroll<R: Rng + ?Sized>(rng: &mut R, num: u32, sides: u32) -> i32 {
    if sides == 0 {
        return 0;
    }
    let total: i64 = (0..num).map(|_| i64::from(rng.gen_range(1..=sides))).sum();
    saturate(total)
}

/// Draws from an approximate normal distribution.
///
/// Uses a table lookup instead of transcendental functions; results are
/// always within four standard deviations of `mean`.
pub fn rand_normal<R: Rng + ?Sized>(rng: &mut R, mean: i32, stand: i32) -> i32 {
    if stand < 1 {
        return mean;
    }

    let roll: i16 = rng.gen_range(0..=i16::MAX);
    let index = NORMAL_TABLE.partition_point(|&entry| entry < roll);
    let offset = i64::from(stand) * index as i64 / NORMAL_STD;

    if rng.gen_bool(0.5) {
        saturate(i64::from(mean) - offset)
    } else {
        saturate(i64::from(mean) + offset)
    }
}

/// Divides, rounding up with probability equal to the fractional part.
fn simulate_division<R: Rng + ?Sized>(rng: &mut R, dividend: i64, divisor: i64) -> i64 {
    let quotient = dividend / divisor;
    let remainder = dividend % divisor;
    if rng.gen_range(0..divisor) < remainder {
        quotient + 1
    } else {
        quotient
    }
}

/// Rolls an enchantment-style bonus between 0 and `max` inclusive.
///
/// The mean moves from zero towards `max` as `level` approaches
/// [`MAX_DEPTH`]; the standard deviation is a quarter of `max`.
pub fn m_bonus<R: Rng + ?Sized>(rng: &mut R, max: u32, level: i32) -> i32 {
    let level = i64::from(level.clamp(0, MAX_DEPTH - 1));
    let max = i64::from(max);

    let bonus = simulate_division(rng, max * level, i64::from(MAX_DEPTH));
    let stand = simulate_division(rng, max, 4);
    let value = rand_normal(rng, saturate(bonus), saturate(stand));

    saturate(i64::from(value).clamp(0, max))
}

impl Random {
    /// Rolls this value at the given level.
    pub fn roll<R: Rng + ?Sized>(&self, level: i32, rng: &mut R) -> i32 {
        let total = i64::from(self.base)
            + i64::from(damroll(rng, self.dice, self.sides))
            + i64::from(m_bonus(rng, self.m_bonus, level));
        saturate(total)
    }
}
