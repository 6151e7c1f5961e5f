//! Deterministic random number generation.
//!
//! The only randomness in the game is which cards the Selection phase
//! offers. Seeding it keeps a session reproducible: the same seed and the
//! same registry always deal the same offer.
//!
//! ```
//! use legal_brawl::core::GameRng;
//!
//! let mut a = GameRng::new(42);
//! let mut b = GameRng::new(42);
//! assert_eq!(a.deal(0..10u32, 4), b.deal(0..10u32, 4));
//! ```

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Seeded ChaCha8 RNG.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// The seed this RNG was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Shuffle a slice in place.
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        slice.shuffle(&mut self.inner);
    }

    /// Shuffle `items` and keep the first `count`.
    ///
    /// Returns every item (shuffled) when fewer than `count` are available.
    pub fn deal<T>(&mut self, items: impl IntoIterator<Item = T>, count: usize) -> Vec<T> {
        let mut pool: Vec<T> = items.into_iter().collect();
        self.shuffle(&mut pool);
        pool.truncate(count);
        pool
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_determinism() {
        let mut rng1 = GameRng::new(7);
        let mut rng2 = GameRng::new(7);

        for _ in 0..20 {
            assert_eq!(rng1.deal(0..50u32, 5), rng2.deal(0..50u32, 5));
        }
    }

    #[test]
    fn test_different_seeds() {
        let dealt_a = GameRng::new(1).deal(0..100u32, 10);
        let dealt_b = GameRng::new(2).deal(0..100u32, 10);
        assert_ne!(dealt_a, dealt_b);
    }

    #[test]
    fn test_deal_is_a_permutation_subset() {
        let mut rng = GameRng::new(99);
        let mut dealt = rng.deal(0..10u32, 10);
        dealt.sort_unstable();
        assert_eq!(dealt, (0..10).collect::<Vec<_>>());
    }

    #[test]
    fn test_deal_short_pool() {
        let mut rng = GameRng::new(3);
        assert_eq!(rng.deal(0..3u32, 8).len(), 3);
        assert!(rng.deal(std::iter::empty::<u32>(), 4).is_empty());
    }
}
