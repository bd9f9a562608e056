//! Randomness for the dealer.
//!
//! A thin wrapper over `SmallRng`. Unseeded deals pull entropy through
//! `getrandom`, which on wasm32 reads the browser's crypto source. A fixed
//! seed gives the same deal every time, which is what tests and shared
//! puzzle links rely on.

use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

pub struct DealRng {
    inner: SmallRng,
}

impl DealRng {
    /// Fresh generator seeded from the platform entropy source.
    pub fn new() -> Self {
        Self { inner: SmallRng::from_os_rng() }
    }

    /// Generator whose output depends only on `seed`.
    pub fn from_seed(seed: u64) -> Self {
        Self { inner: SmallRng::seed_from_u64(seed) }
    }

    /// Index below `len`. `len` must be non-zero.
    #[inline(always)]
    pub fn gen_range(&mut self, len: usize) -> usize {
        self.inner.random_range(0..len)
    }

    pub fn shuffle<T>(&mut self, items: &mut [T]) {
        items.shuffle(&mut self.inner);
    }
}

impl Default for DealRng {
    fn default() -> Self {
        Self::new()
    }
}
