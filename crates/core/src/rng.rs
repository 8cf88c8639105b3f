//! RNG module - seedable random source for piece spawning
//!
//! Wraps a seeded `StdRng` and remembers the seed so a session can be replayed.
//! Production sessions take their seed from system entropy; tests pass a fixed
//! seed for deterministic piece sequences.

use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};

#[derive(Debug, Clone)]
pub struct SessionRng {
    rng: StdRng,
    seed: u64,
}

impl SessionRng {
    /// Create an RNG with the given seed
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create an RNG seeded from system entropy
    pub fn from_entropy() -> Self {
        let seed: u64 = rand::thread_rng().gen();
        Self::new(seed)
    }

    /// Seed this RNG was created with
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl Default for SessionRng {
    fn default() -> Self {
        Self::from_entropy()
    }
}

impl RngCore for SessionRng {
    fn next_u32(&mut self) -> u32 {
        self.rng.next_u32()
    }

    fn next_u64(&mut self) -> u64 {
        self.rng.next_u64()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.rng.fill_bytes(dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.rng.try_fill_bytes(dest)
    }
}

/// Sources that can report the seed they were built from
///
/// Lets the session expose its seed without tying it to one RNG type.
pub trait SeededSource: RngCore {
    fn seed(&self) -> Option<u64>;
}

impl SeededSource for SessionRng {
    fn seed(&self) -> Option<u64> {
        Some(self.seed)
    }
}

impl SeededSource for StdRng {
    fn seed(&self) -> Option<u64> {
        None
    }
}
