//! Sources of replacement characters.
//!
//! Every stage that manufactures a character asks a [`CharacterSource`]
//! for it, so tests can swap the process RNG for a seeded one.

use rand::rngs::ThreadRng;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Picks one character from an alphabet.
pub trait CharacterSource {
    /// Returns a character drawn from `alphabet`.
    ///
    /// `alphabet` is never empty when called by the pipeline.
    fn pick(&mut self, alphabet: &[u8]) -> char;
}

/// Uniform [`CharacterSource`] backed by any [`rand::Rng`].
#[derive(Debug, Clone)]
pub struct RngSource<R> {
    rng: R,
}

impl<R: Rng> RngSource<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RngSource<ThreadRng> {
    /// Source backed by the thread-local RNG.
    pub fn thread() -> Self {
        Self::new(rand::thread_rng())
    }
}

impl Default for RngSource<ThreadRng> {
    fn default() -> Self {
        Self::thread()
    }
}

impl RngSource<ChaCha8Rng> {
    /// Reproducible source: the same seed always yields the same characters.
    pub fn seeded(seed: u64) -> Self {
        Self::new(ChaCha8Rng::seed_from_u64(seed))
    }
}

impl<R: Rng> CharacterSource for RngSource<R> {
    /// # Panics
    ///
    /// Panics if `alphabet` is empty.
    fn pick(&mut self, alphabet: &[u8]) -> char {
        let index = self.rng.gen_range(0..alphabet.len());
        char::from(alphabet[index])
    }
}
