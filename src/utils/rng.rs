//! Seedable random number generator threaded through layer initialization and
//! shuffling.
//!
//! A lightweight xorshift PRNG: every consumer receives it explicitly, so a
//! fixed seed reproduces initial weights and sample orders exactly.

use std::time::{SystemTime, UNIX_EPOCH};

const FALLBACK_SEED: u64 = 0x9e3779b97f4a7c15;

/// Xorshift generator. Not cryptographic.
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u64,
}

impl SimpleRng {
    /// Create a new RNG with explicit seed (if zero, use a fixed value).
    pub fn new(seed: u64) -> Self {
        let state = if seed == 0 { FALLBACK_SEED } else { seed };
        Self { state }
    }

    /// Create an RNG seeded from the current time.
    pub fn from_time() -> Self {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_nanos() as u64;
        Self::new(nanos)
    }

    /// Basic xorshift to generate u32.
    pub fn next_u32(&mut self) -> u32 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.state = x;
        (x >> 32) as u32
    }

    /// Uniform sample in [0, 1].
    pub fn next_f32(&mut self) -> f32 {
        self.next_u32() as f32 / u32::MAX as f32
    }

    /// Integer sample in [0, upper).
    pub fn gen_usize(&mut self, upper: usize) -> usize {
        if upper == 0 {
            0
        } else {
            (self.next_u32() as usize) % upper
        }
    }

    /// Fisher-Yates shuffle: for `i` from the last index down to 1, swap with
    /// a uniformly chosen index in `[0, i]`.
    pub fn shuffle<T>(&mut self, data: &mut [T]) {
        if data.len() <= 1 {
            return;
        }
        for i in (1..data.len()).rev() {
            let j = self.gen_usize(i + 1);
            data.swap(i, j);
        }
    }
}
