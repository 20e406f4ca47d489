//! xorshift64* random number generator
//!
//! A fast, deterministic PRNG used for shuffling batting orders.
//!
//! # Algorithm
//!
//! xorshift64* is a variant of xorshift that passes TestU01's BigCrush
//! statistical tests. It uses 64-bit state and produces 64-bit output.
//!
//! # Determinism
//!
//! Same seed → same sequence → same batting order. Callers that want a fresh
//! order every time use [`RngManager::from_entropy`].

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Deterministic random number generator using xorshift64*
///
/// # Example
/// ```
/// use lineup_core_rs::RngManager;
///
/// let mut rng = RngManager::new(12345);
/// let value = rng.next();
/// let slot = rng.below(13); // [0, 13)
/// assert!(slot < 13);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RngManager {
    /// Internal state (64-bit)
    state: u64,
}

impl RngManager {
    /// Create a new RNG with given seed
    ///
    /// # Arguments
    /// * `seed` - Initial seed value (u64)
    pub fn new(seed: u64) -> Self {
        // Ensure seed is never zero (xorshift requirement)
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Create an RNG seeded from operating-system entropy
    ///
    /// The seed is taken from the random bits of a v4 UUID.
    pub fn from_entropy() -> Self {
        let (high, low) = Uuid::new_v4().as_u64_pair();
        Self::new(high ^ low.rotate_left(32))
    }

    /// Generate next random u64 value
    ///
    /// This advances the internal state and returns a random value.
    pub fn next(&mut self) -> u64 {
        // xorshift64* algorithm
        let mut x = self.state;
        x ^= x >> 12;
        x ^= x << 25;
        x ^= x >> 27;
        self.state = x;
        x.wrapping_mul(0x2545F4914F6CDD1D)
    }

    /// Generate a uniformly distributed value in `[0, bound)`
    ///
    /// Draws falling in the incomplete top bucket are rejected, so every
    /// value is equally likely (no modulo bias).
    ///
    /// # Panics
    /// Panics if `bound` is zero
    ///
    /// # Example
    /// ```
    /// use lineup_core_rs::RngManager;
    ///
    /// let mut rng = RngManager::new(7);
    /// assert_eq!(rng.below(1), 0);
    /// ```
    pub fn below(&mut self, bound: usize) -> usize {
        assert!(bound > 0, "bound must be positive");

        let bound = bound as u64;
        // Largest multiple of `bound` representable in u64
        let zone = u64::MAX - (u64::MAX % bound + 1) % bound;
        loop {
            let value = self.next();
            if value <= zone {
                return (value % bound) as usize;
            }
        }
    }

    /// Shuffle a slice in place (Fisher–Yates)
    ///
    /// Every permutation is equally likely.
    ///
    /// # Example
    /// ```
    /// use lineup_core_rs::RngManager;
    ///
    /// let mut a = vec![1, 2, 3, 4, 5];
    /// let mut b = a.clone();
    /// RngManager::new(42).shuffle(&mut a);
    /// RngManager::new(42).shuffle(&mut b);
    /// assert_eq!(a, b);
    /// ```
    pub fn shuffle<T>(&mut self, items: &mut [T]) {
        for i in (1..items.len()).rev() {
            let j = self.below(i + 1);
            items.swap(i, j);
        }
    }

    /// Get current RNG state (for reproducing a sequence)
    ///
    /// # Example
    /// ```
    /// use lineup_core_rs::RngManager;
    ///
    /// let mut rng = RngManager::new(12345);
    /// rng.next();
    /// let mut replay = RngManager::new(rng.get_state());
    /// assert_eq!(rng.next(), replay.next());
    /// ```
    pub fn get_state(&self) -> u64 {
        self.state
    }
}
