//! RNG module - injectable randomness for tile spawning
//!
//! Spawning is the only nondeterministic step in the engine. It needs two
//! primitives: a uniform pick among `len` empty cells and a weighted coin for
//! the tile value. [`SpawnRng`] exposes exactly those so tests can script them.
//!
//! Provided sources:
//!
//! - [`SimpleRng`]: tiny LCG, deterministic per seed (default for tests/benches)
//! - [`SeededRng`]: ChaCha8 stream from `rand_chacha` (used by the binary)
//! - [`ScriptedRng`]: replays a fixed list of picks and coin results

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Random source consumed by tile spawning.
pub trait SpawnRng {
    /// Uniform index in `0..len`. `len` is never zero.
    fn pick_index(&mut self, len: usize) -> usize;

    /// `true` with the given probability (clamped to `[0, 1]`).
    fn chance(&mut self, probability: f64) -> bool;
}

impl<R: SpawnRng + ?Sized> SpawnRng for &mut R {
    fn pick_index(&mut self, len: usize) -> usize {
        (**self).pick_index(len)
    }

    fn chance(&mut self, probability: f64) -> bool {
        (**self).chance(probability)
    }
}

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    ///
    /// Uses the high bits; the low bits of an LCG have short periods.
    pub fn next_range(&mut self, max: u32) -> u32 {
        ((self.next_u32() as u64 * max as u64) >> 32) as u32
    }

    /// Uniform float in [0, 1) built from the top 24 bits
    pub fn next_unit(&mut self) -> f64 {
        (self.next_u32() >> 8) as f64 / (1u32 << 24) as f64
    }

    /// Current internal state (for restarting with the same sequence)
    pub fn seed(&self) -> u32 {
        self.state
    }
}

impl Default for SimpleRng {
    fn default() -> Self {
        Self::new(1)
    }
}

impl SpawnRng for SimpleRng {
    fn pick_index(&mut self, len: usize) -> usize {
        self.next_range(len as u32) as usize
    }

    fn chance(&mut self, probability: f64) -> bool {
        self.next_unit() < probability.clamp(0.0, 1.0)
    }
}

/// ChaCha8-backed source for real play.
#[derive(Debug, Clone)]
pub struct SeededRng {
    inner: ChaCha8Rng,
}

impl SeededRng {
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Seed from OS entropy.
    pub fn from_entropy() -> Self {
        Self {
            inner: ChaCha8Rng::from_entropy(),
        }
    }
}

impl SpawnRng for SeededRng {
    fn pick_index(&mut self, len: usize) -> usize {
        self.inner.gen_range(0..len)
    }

    fn chance(&mut self, probability: f64) -> bool {
        self.inner.gen_bool(probability.clamp(0.0, 1.0))
    }
}

/// Replays scripted results, cycling when a script runs out.
///
/// An empty pick script always picks index 0; an empty coin script always
/// returns `true` (i.e. spawns a 2).
#[derive(Debug, Clone, Default)]
pub struct ScriptedRng {
    picks: Vec<usize>,
    coins: Vec<bool>,
    pick_at: usize,
    coin_at: usize,
}

impl ScriptedRng {
    pub fn new(picks: Vec<usize>, coins: Vec<bool>) -> Self {
        Self {
            picks,
            coins,
            pick_at: 0,
            coin_at: 0,
        }
    }

    /// Always picks the first empty cell and spawns a 2.
    pub fn first_cell_twos() -> Self {
        Self::default()
    }
}

impl SpawnRng for ScriptedRng {
    fn pick_index(&mut self, len: usize) -> usize {
        if self.picks.is_empty() {
            return 0;
        }
        let v = self.picks[self.pick_at % self.picks.len()];
        self.pick_at += 1;
        v % len
    }

    fn chance(&mut self, _probability: f64) -> bool {
        if self.coins.is_empty() {
            return true;
        }
        let v = self.coins[self.coin_at % self.coins.len()];
        self.coin_at += 1;
        v
    }
}
