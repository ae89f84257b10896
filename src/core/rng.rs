//! RNG module - deterministic seeded bit stream for puzzle generation
//!
//! A 64-bit LCG (Knuth's MMIX constants). The constants are a contract:
//! persisted player progress refers to grids generated from them, so the
//! sequence must stay byte-for-byte reproducible across versions.

/// Multiplier and increment of the recurrence (both odd, full period mod 2^64)
const LCG_MULTIPLIER: u64 = 6_364_136_223_846_793_005;
const LCG_INCREMENT: u64 = 1_442_695_040_888_963_407;

/// Replacement for a zero seed, which would start a degenerate stream
const ZERO_SEED_REMAP: u64 = 0x9E37_79B9_7F4A_7C15;

/// Deterministic pseudo-random generator seeded per puzzle
#[derive(Debug, Clone)]
pub struct SeededRng {
    state: u64,
}

impl SeededRng {
    pub fn new(seed: u64) -> Self {
        let state = if seed == 0 { ZERO_SEED_REMAP } else { seed };
        Self { state }
    }

    /// Advance the recurrence and return the new state
    pub fn next(&mut self) -> u64 {
        self.state = self
            .state
            .wrapping_mul(LCG_MULTIPLIER)
            .wrapping_add(LCG_INCREMENT);
        self.state
    }

    /// Random value in [0, bound); returns 0 for bound == 0
    pub fn int_below(&mut self, bound: u64) -> u64 {
        if bound == 0 {
            return 0;
        }
        self.next() % bound
    }

    /// Shuffle a slice using Fisher-Yates
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        for i in (1..slice.len()).rev() {
            let j = self.int_below((i + 1) as u64) as usize;
            slice.swap(i, j);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rng_deterministic() {
        let mut rng1 = SeededRng::new(12345);
        let mut rng2 = SeededRng::new(12345);

        // Same seed should produce same sequence
        for _ in 0..100 {
            assert_eq!(rng1.next(), rng2.next());
        }
    }

    #[test]
    fn test_rng_different_seeds_diverge() {
        let mut rng1 = SeededRng::new(12345);
        let mut rng2 = SeededRng::new(54321);

        assert_ne!(rng1.next(), rng2.next());
    }

    #[test]
    fn test_zero_seed_is_remapped() {
        let mut zero = SeededRng::new(0);
        let mut remapped = SeededRng::new(ZERO_SEED_REMAP);

        // Zero must not produce the all-zero stream
        assert_ne!(zero.next(), 0);
        assert_eq!(SeededRng::new(0).next(), remapped.next());
    }

    #[test]
    fn test_int_below_stays_in_bounds() {
        let mut rng = SeededRng::new(7);
        for _ in 0..1000 {
            assert!(rng.int_below(26) < 26);
        }
        assert_eq!(rng.int_below(0), 0);
        assert_eq!(rng.int_below(1), 0);
    }

    #[test]
    fn test_shuffle_is_a_permutation() {
        let mut rng = SeededRng::new(99);
        let mut values: Vec<u32> = (0..20).collect();
        rng.shuffle(&mut values);

        let mut sorted = values.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, (0..20).collect::<Vec<u32>>());
    }

    #[test]
    fn test_shuffle_deterministic() {
        let mut a: Vec<u32> = (0..10).collect();
        let mut b: Vec<u32> = (0..10).collect();
        SeededRng::new(5).shuffle(&mut a);
        SeededRng::new(5).shuffle(&mut b);
        assert_eq!(a, b);
    }
}
