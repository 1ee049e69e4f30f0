//! Deterministic generation RNG.
//!
//! Layouts are drawn from a `ChaCha8Rng` owned by the generator, never from a
//! process-wide engine, so identical seeds produce identical archipelagos on
//! every platform.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Seed used by tests and tools that want a stable layout.
pub const DEFAULT_SEED: u64 = 42;

/// RNG seeded from a `u64`.
pub fn seeded_rng(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

/// RNG seeded from the given seed, or from OS entropy when there is none.
pub fn rng_from_option(seed: Option<u64>) -> ChaCha8Rng {
    match seed {
        Some(seed) => seeded_rng(seed),
        None => ChaCha8Rng::from_entropy(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn test_same_seed_same_sequence() {
        let mut a = seeded_rng(DEFAULT_SEED);
        let mut b = seeded_rng(DEFAULT_SEED);
        for _ in 0..16 {
            assert_eq!(a.r#gen::<u64>(), b.r#gen::<u64>());
        }
    }

    #[test]
    fn test_different_seeds_diverge() {
        let mut a = seeded_rng(1);
        let mut b = seeded_rng(2);
        let xs: Vec<u32> = (0..8).map(|_| a.r#gen()).collect();
        let ys: Vec<u32> = (0..8).map(|_| b.r#gen()).collect();
        assert_ne!(xs, ys);
    }

    #[test]
    fn test_option_seed_is_reproducible() {
        let mut a = rng_from_option(Some(7));
        let mut b = seeded_rng(7);
        assert_eq!(a.gen_range(0..1000), b.gen_range(0..1000));
    }
}
