//! Random-number services for ghost generation.
//!
//! Every generation routine takes a `&mut impl RandomSource` instead of
//! reaching for a global generator, so callers decide whether draws come from
//! a seeded PCG stream or a scripted sequence in tests.
//!
//! # Conventions
//!
//! The provided methods follow the roguelike's established helpers:
//! `random2(n)` is exclusive of `n`, dice are 1-based, and `x_chance_in_y`
//! short-circuits at both ends without consuming a draw.

/// Source of raw random draws plus the derived helpers built on top of it.
///
/// Implementors only supply [`RandomSource::next_u32`]. The helpers are
/// deterministic functions of the raw sequence, which is what scripted tests
/// rely on: `random2(n)` consumes exactly one draw and yields `draw % n`.
pub trait RandomSource {
    /// Produce the next raw 32-bit value.
    fn next_u32(&mut self) -> u32;

    /// Uniform integer in `[0, n)`. Returns 0 without drawing when `n <= 1`.
    fn random2(&mut self, n: i32) -> i32 {
        if n <= 1 {
            return 0;
        }
        (self.next_u32() % n as u32) as i32
    }

    /// Uniform integer in `[low, high]` inclusive.
    fn random_range(&mut self, low: i32, high: i32) -> i32 {
        if low >= high {
            return low;
        }
        low + self.random2(high - low + 1)
    }

    /// Sum of `count` rolls of a die with `sides` faces (each 1..=sides).
    fn roll_dice(&mut self, count: i32, sides: i32) -> i32 {
        if sides <= 0 {
            return 0;
        }
        (0..count).map(|_| 1 + self.random2(sides)).sum()
    }

    /// Fair coin.
    fn coinflip(&mut self) -> bool {
        self.random2(2) == 0
    }

    /// True with probability `1 / n`.
    fn one_chance_in(&mut self, n: i32) -> bool {
        self.random2(n) == 0
    }

    /// True with probability `x / y`.
    fn x_chance_in_y(&mut self, x: i32, y: i32) -> bool {
        if x <= 0 {
            return false;
        }
        if x >= y {
            return true;
        }
        self.random2(y) < x
    }

    /// `num / den`, rounded up with probability proportional to the remainder.
    fn div_rand_round(&mut self, num: i32, den: i32) -> i32 {
        if den <= 0 {
            return 0;
        }
        let rem = num % den;
        let bump = if rem > 0 && self.random2(den) < rem { 1 } else { 0 };
        num / den + bump
    }

    /// Uniformly chosen element, or `None` for an empty slice.
    fn choose<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T>
    where
        Self: Sized,
    {
        if items.is_empty() {
            return None;
        }
        items.get(self.random2(items.len() as i32) as usize)
    }

    /// Element chosen with probability proportional to its weight.
    ///
    /// Returns `None` when the slice is empty, all weights are zero, or the
    /// weights sum past `i32::MAX`.
    fn choose_weighted<'a, T>(&mut self, entries: &'a [(u32, T)]) -> Option<&'a T>
    where
        Self: Sized,
    {
        let total: u64 = entries.iter().map(|(weight, _)| u64::from(*weight)).sum();
        let total = i32::try_from(total).ok().filter(|total| *total > 0)?;
        let mut roll = self.random2(total) as u32;
        for (weight, item) in entries {
            if roll < *weight {
                return Some(item);
            }
            roll -= weight;
        }
        None
    }
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn next_u32(&mut self) -> u32 {
        (**self).next_u32()
    }
}

/// PCG random number generator (Permuted Congruential Generator).
///
/// PCG-XSH-RR: 32-bit output from 64-bit state. Same seed, same stream, which
/// is what makes a generated demon lord reproducible from a save seed.
///
/// # References
///
/// - PCG paper: <https://www.pcg-random.org/>
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PcgRng {
    state: u64,
}

impl PcgRng {
    /// PCG multiplier constant.
    const MULTIPLIER: u64 = 6364136223846793005;

    /// PCG increment constant.
    const INCREMENT: u64 = 1442695040888963407;

    /// Creates a generator whose stream is fully determined by `seed`.
    pub fn seeded(seed: u64) -> Self {
        Self {
            state: Self::pcg_step(seed.wrapping_add(Self::INCREMENT)),
        }
    }

    /// `state' = state × multiplier + increment (mod 2^64)`
    #[inline]
    fn pcg_step(state: u64) -> u64 {
        state
            .wrapping_mul(Self::MULTIPLIER)
            .wrapping_add(Self::INCREMENT)
    }

    /// XSH-RR output permutation.
    #[inline]
    fn pcg_output(state: u64) -> u32 {
        let xorshifted = (((state >> 18) ^ state) >> 27) as u32;
        let rot = (state >> 59) as u32;
        xorshifted.rotate_right(rot)
    }
}

impl Default for PcgRng {
    fn default() -> Self {
        Self::seeded(0)
    }
}

impl RandomSource for PcgRng {
    fn next_u32(&mut self) -> u32 {
        let old = self.state;
        self.state = Self::pcg_step(old);
        Self::pcg_output(old)
    }
}

/// Replays a fixed list of raw draws, then yields zeros.
///
/// Because `random2(n)` is `draw % n`, scripting a value smaller than `n`
/// makes that call return it verbatim. This lets tests pin every decision a
/// generator makes and assert exact stat-blocks.
#[derive(Clone, Debug, Default)]
pub struct ScriptedRng {
    draws: Vec<u32>,
    cursor: usize,
}

impl ScriptedRng {
    pub fn new(draws: impl Into<Vec<u32>>) -> Self {
        Self {
            draws: draws.into(),
            cursor: 0,
        }
    }

    /// Number of scripted draws consumed so far.
    pub fn consumed(&self) -> usize {
        self.cursor
    }

    /// True once every scripted draw has been used.
    pub fn is_exhausted(&self) -> bool {
        self.cursor >= self.draws.len()
    }
}

impl RandomSource for ScriptedRng {
    fn next_u32(&mut self) -> u32 {
        let value = self.draws.get(self.cursor).copied().unwrap_or(0);
        self.cursor += 1;
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pcg_is_deterministic_per_seed() {
        let mut a = PcgRng::seeded(42);
        let mut b = PcgRng::seeded(42);
        let mut c = PcgRng::seeded(43);
        let first: Vec<u32> = (0..8).map(|_| a.next_u32()).collect();
        let second: Vec<u32> = (0..8).map(|_| b.next_u32()).collect();
        let other: Vec<u32> = (0..8).map(|_| c.next_u32()).collect();
        assert_eq!(first, second);
        assert_ne!(first, other);
    }

    #[test]
    fn random2_stays_in_range() {
        let mut rng = PcgRng::seeded(7);
        for n in 1..50 {
            for _ in 0..20 {
                let v = rng.random2(n);
                assert!((0..n.max(1)).contains(&v));
            }
        }
        assert_eq!(rng.random2(0), 0);
        assert_eq!(rng.random2(-5), 0);
    }

    #[test]
    fn dice_bounds() {
        let mut rng = PcgRng::seeded(99);
        for _ in 0..500 {
            let roll = rng.roll_dice(3, 50);
            assert!((3..=150).contains(&roll));
        }
    }

    #[test]
    fn scripted_draws_map_directly() {
        let mut rng = ScriptedRng::new([3, 1, 0, 9]);
        assert_eq!(rng.random2(10), 3);
        assert!(!rng.coinflip()); // 1 % 2 == 1
        assert!(rng.one_chance_in(4)); // 0
        assert_eq!(rng.roll_dice(1, 6), 4); // 1 + 9 % 6
        assert!(rng.is_exhausted());
        assert_eq!(rng.next_u32(), 0);
    }

    #[test]
    fn x_chance_in_y_short_circuits() {
        let mut rng = ScriptedRng::new([]);
        assert!(!rng.x_chance_in_y(0, 10));
        assert!(rng.x_chance_in_y(10, 10));
        assert_eq!(rng.consumed(), 0);
    }

    #[test]
    fn div_rand_round_rounds_up_on_low_draw() {
        let mut rng = ScriptedRng::new([2, 8]);
        // 75 / 10 = 7 remainder 5: draw 2 < 5 rounds up, draw 8 does not.
        assert_eq!(rng.div_rand_round(75, 10), 8);
        assert_eq!(rng.div_rand_round(75, 10), 7);
        // Exact division never draws.
        assert_eq!(rng.div_rand_round(70, 10), 7);
        assert_eq!(rng.consumed(), 2);
    }

    #[test]
    fn weighted_choice_walks_cumulative_weights() {
        let table = [(1u32, 'a'), (3, 'b'), (0, 'z'), (6, 'c')];
        let mut rng = ScriptedRng::new([0, 1, 3, 4, 9]);
        let picks: Vec<char> = (0..5)
            .map(|_| *rng.choose_weighted(&table).expect("non-empty"))
            .collect();
        assert_eq!(picks, vec!['a', 'b', 'b', 'c', 'c']);
        assert!(rng.choose_weighted::<char>(&[]).is_none());
    }

    #[test]
    fn weighted_choice_refuses_totals_past_i32() {
        let table = [(u32::MAX, 'a'), (3, 'b')];
        let mut rng = ScriptedRng::new([0]);
        assert!(rng.choose_weighted(&table).is_none());
        assert_eq!(rng.consumed(), 0);

        let table = [(3_000_000_000u32, 'a'), (3, 'b')];
        assert!(rng.choose_weighted(&table).is_none());
    }
}
