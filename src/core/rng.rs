//! Injectable randomness for the game engines.
//!
//! ## Key Features
//!
//! - **Pluggable**: Engines only ever ask a [`Picker`] to choose one of `n`
//! - **Deterministic**: Same seed produces identical shuffles and moves
//! - **Scriptable**: [`ScriptedPicker`] replays a fixed sequence in tests
//! - **Context streams**: Independent sequences for deck shuffles and opponent moves
//!
//! ## Usage
//!
//! ```
//! use parlor::core::{GameRng, Picker};
//!
//! let mut rng = GameRng::new(42);
//! let index = rng.pick(9);
//! assert!(index < 9);
//!
//! // Same seed, same choice
//! let mut again = GameRng::new(42);
//! assert_eq!(again.pick(9), index);
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::hash::{Hash, Hasher};

/// Source of "pick one of N" decisions.
///
/// This is the only randomness the engines consume. Shuffles and random
/// opponent moves are both expressed in terms of `pick`.
pub trait Picker {
    /// Return an index in `0..n`.
    ///
    /// Panics if `n == 0`.
    fn pick(&mut self, n: usize) -> usize;
}

/// Seeded RNG backing interactive play.
///
/// Uses ChaCha8 for speed while keeping a reproducible stream per seed.
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

    /// Create an RNG seeded from the operating system.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::thread_rng().gen())
    }

    /// Create from an optional seed, falling back to entropy.
    #[must_use]
    pub fn seeded_or_random(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::new(seed),
            None => Self::from_entropy(),
        }
    }

    /// The seed this stream was created from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Create an independent stream for a specific context.
    ///
    /// Separates randomness domains (deck shuffling vs opponent moves).
    /// The same context always produces the same stream from the same seed.
    #[must_use]
    pub fn for_context(&self, context: &str) -> Self {
        use std::collections::hash_map::DefaultHasher;

        let mut hasher = DefaultHasher::new();
        self.seed.hash(&mut hasher);
        context.hash(&mut hasher);
        let context_seed = hasher.finish();

        Self {
            inner: ChaCha8Rng::seed_from_u64(context_seed),
            seed: context_seed,
        }
    }

    /// Generate a random usize in the given range.
    pub fn gen_range_usize(&mut self, range: std::ops::Range<usize>) -> usize {
        self.inner.gen_range(range)
    }

    /// Get the current state for serialization.
    #[must_use]
    pub fn state(&self) -> GameRngState {
        GameRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
        }
    }

    /// Restore from a saved state.
    #[must_use]
    pub fn from_state(state: &GameRngState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed);
        inner.set_word_pos(state.word_pos);
        Self {
            inner,
            seed: state.seed,
        }
    }
}

impl Picker for GameRng {
    fn pick(&mut self, n: usize) -> usize {
        assert!(n > 0, "Cannot pick from zero options");
        self.gen_range_usize(0..n)
    }
}

/// Serializable RNG state for checkpointing.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRngState {
    /// Seed the stream was created from
    pub seed: u64,
    /// ChaCha8 word position (128-bit counter)
    pub word_pos: u128,
}

/// Picker that replays a fixed sequence.
///
/// Each scripted value is reduced modulo `n`, so a script never produces an
/// out-of-range index. Once the script is exhausted every pick returns 0.
///
/// ```
/// use parlor::core::{Picker, ScriptedPicker};
///
/// let mut picker = ScriptedPicker::new([2, 7]);
/// assert_eq!(picker.pick(5), 2);
/// assert_eq!(picker.pick(5), 2); // 7 % 5
/// assert_eq!(picker.pick(5), 0); // exhausted
/// ```
#[derive(Clone, Debug, Default)]
pub struct ScriptedPicker {
    script: VecDeque<usize>,
}

impl ScriptedPicker {
    /// Create a picker that replays `script` in order.
    pub fn new(script: impl IntoIterator<Item = usize>) -> Self {
        Self {
            script: script.into_iter().collect(),
        }
    }

    /// Number of scripted picks not yet consumed.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.script.len()
    }
}

impl Picker for ScriptedPicker {
    fn pick(&mut self, n: usize) -> usize {
        assert!(n > 0, "Cannot pick from zero options");
        self.script.pop_front().map_or(0, |next| next % n)
    }
}
