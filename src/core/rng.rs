//! Deterministic random number generation for root-word selection.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces the same sequence of root words
//! - **Serializable**: O(1) state capture and restore
//!
//! ```
//! use word_scramble::core::RoundRng;
//!
//! let words = ["silkworm", "banana", "pinecone"];
//!
//! let mut rng1 = RoundRng::new(42);
//! let mut rng2 = RoundRng::new(42);
//!
//! assert_eq!(rng1.choose(&words), rng2.choose(&words));
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Seedable RNG used to pick root words.
///
/// Uses ChaCha8 so a seed replays the exact same rounds.
#[derive(Clone, Debug)]
pub struct RoundRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl RoundRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create an RNG seeded from OS entropy.
    ///
    /// The drawn seed is kept, so `state()` still allows replay.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::thread_rng().gen())
    }

    /// The seed this RNG was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Choose a random element from a slice, uniformly.
    #[must_use]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        use rand::seq::SliceRandom;
        slice.choose(&mut self.inner)
    }

    /// Get the current state for serialization.
    #[must_use]
    pub fn state(&self) -> RoundRngState {
        RoundRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
        }
    }

    /// Restore from a saved state.
    #[must_use]
    pub fn from_state(state: &RoundRngState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed);
        inner.set_word_pos(state.word_pos);
        Self {
            inner,
            seed: state.seed,
        }
    }
}

/// Serializable RNG state for checkpointing.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundRngState {
    /// Original seed
    pub seed: u64,
    /// ChaCha8 word position (128-bit counter)
    pub word_pos: u128,
}
