//! World-local random stream
//!
//! Every tie-break and probabilistic transition draws from one seeded
//! ChaCha8 stream owned by the world, so two worlds never share state and a
//! fixed seed replays the same run.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Seed used when the host does not supply one
pub const DEFAULT_SEED: u64 = 0x5EED_5A4D;

/// Variation bytes are drawn from `0..VARIATION_RANGE`
pub const VARIATION_RANGE: u8 = 30;

#[derive(Clone, Debug)]
pub struct WorldRng {
    inner: ChaCha8Rng,
}

impl WorldRng {
    pub fn new(seed: u64) -> Self {
        Self { inner: ChaCha8Rng::seed_from_u64(seed) }
    }

    /// True with probability `p`. Draws even at the extremes so the stream
    /// advances once per check.
    #[inline]
    pub fn chance(&mut self, p: f32) -> bool {
        let roll: f32 = self.inner.gen();
        roll < p
    }

    #[inline]
    pub fn coin(&mut self) -> bool {
        self.inner.gen::<bool>()
    }

    /// -1 or 1
    #[inline]
    pub fn direction(&mut self) -> i32 {
        if self.coin() { 1 } else { -1 }
    }

    /// Uniform in `lo..=hi`
    #[inline]
    pub fn range_u8(&mut self, lo: u8, hi: u8) -> u8 {
        if lo >= hi {
            return lo;
        }
        self.inner.gen_range(lo..=hi)
    }

    /// Uniform in `0..n`; returns 0 for an empty range
    #[inline]
    pub fn below(&mut self, n: usize) -> usize {
        if n == 0 {
            return 0;
        }
        self.inner.gen_range(0..n)
    }

    /// Fresh rendering jitter byte
    #[inline]
    pub fn variation(&mut self) -> u8 {
        self.inner.gen_range(0..VARIATION_RANGE)
    }
}
