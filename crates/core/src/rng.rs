//! RNG module - seeded board shuffling
//!
//! Boards are dealt with a Fisher-Yates shuffle (`SliceRandom::shuffle`)
//! driven by a seeded `StdRng`, so every permutation of the deck is equally
//! likely and the same seed always deals the same sequence of boards.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

/// Deterministic RNG used to deal boards.
#[derive(Debug, Clone)]
pub struct BoardRng {
    seed: u64,
    rng: StdRng,
}

impl BoardRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Create an RNG seeded from OS entropy.
    ///
    /// The chosen seed is still recorded so a game can be replayed.
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// Uniform in-place permutation.
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        slice.shuffle(&mut self.rng);
    }

    /// Seed this RNG was created with.
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl Default for BoardRng {
    fn default() -> Self {
        Self::new(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rng_deterministic() {
        let mut rng1 = BoardRng::new(12345);
        let mut rng2 = BoardRng::new(12345);

        for _ in 0..20 {
            let mut a: Vec<u32> = (0..16).collect();
            let mut b: Vec<u32> = (0..16).collect();
            rng1.shuffle(&mut a);
            rng2.shuffle(&mut b);
            assert_eq!(a, b);
        }
    }

    #[test]
    fn test_rng_different_seeds() {
        let mut rng1 = BoardRng::new(12345);
        let mut rng2 = BoardRng::new(54321);

        // Different seeds should eventually diverge
        let diverged = (0..20).any(|_| {
            let mut a: Vec<u32> = (0..16).collect();
            let mut b: Vec<u32> = (0..16).collect();
            rng1.shuffle(&mut a);
            rng2.shuffle(&mut b);
            a != b
        });
        assert!(diverged);
    }

    #[test]
    fn test_shuffle_is_permutation() {
        let mut rng = BoardRng::new(7);
        let mut values: Vec<u32> = (0..32).collect();
        rng.shuffle(&mut values);
        values.sort_unstable();
        assert_eq!(values, (0..32).collect::<Vec<_>>());
    }

    #[test]
    fn test_shuffle_empty_and_single() {
        let mut rng = BoardRng::new(7);
        let mut empty: [u8; 0] = [];
        rng.shuffle(&mut empty);
        let mut one = [9u8];
        rng.shuffle(&mut one);
        assert_eq!(one, [9]);
    }

    #[test]
    fn test_seed_is_recorded() {
        assert_eq!(BoardRng::new(99).seed(), 99);
        let rng = BoardRng::from_entropy();
        assert_eq!(BoardRng::new(rng.seed()).seed(), rng.seed());
    }
}
