//! Sources of bounded random boosts.
//!
//! The recompute operation never touches a random generator directly; it
//! asks a [`BoostSource`] for one value per entry. Production code uses
//! [`RandomBoost`], tests plug in [`ScriptedBoosts`], [`NoBoost`] or a
//! closure.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// A pluggable source of bounded random integers.
///
/// `next_boost(bound)` must return a value in `[0, bound)`. The recompute
/// operation rejects anything else as a precondition violation. `bound` is
/// always positive when called from this crate.
pub trait BoostSource {
    fn next_boost(&mut self, bound: u64) -> u64;
}

impl<F> BoostSource for F
where
    F: FnMut(u64) -> u64,
{
    fn next_boost(&mut self, bound: u64) -> u64 {
        self(bound)
    }
}

/// Uniform random boosts.
///
/// Seeded sources use ChaCha8 so a seed replays the same boosts on every
/// platform.
pub struct RandomBoost {
    rng: BoostRng,
}

enum BoostRng {
    Entropy(StdRng),
    Seeded(ChaCha8Rng),
}

impl RandomBoost {
    /// Creates a source seeded from OS entropy.
    pub fn new() -> Self {
        Self {
            rng: BoostRng::Entropy(StdRng::from_os_rng()),
        }
    }

    /// Creates a reproducible source.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: BoostRng::Seeded(ChaCha8Rng::seed_from_u64(seed)),
        }
    }

    /// Seeded when `seed` is present, OS entropy otherwise.
    pub fn from_seed(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::with_seed(seed),
            None => Self::new(),
        }
    }

    pub fn is_seeded(&self) -> bool {
        matches!(self.rng, BoostRng::Seeded(_))
    }
}

impl Default for RandomBoost {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for RandomBoost {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RandomBoost")
            .field("seeded", &self.is_seeded())
            .finish()
    }
}

impl BoostSource for RandomBoost {
    fn next_boost(&mut self, bound: u64) -> u64 {
        if bound == 0 {
            return 0;
        }
        match &mut self.rng {
            BoostRng::Entropy(rng) => rng.random_range(0..bound),
            BoostRng::Seeded(rng) => rng.random_range(0..bound),
        }
    }
}

/// Replays a fixed sequence of boosts, cycling when exhausted.
///
/// An empty script yields zero forever.
#[derive(Debug, Clone, Default)]
pub struct ScriptedBoosts {
    values: Vec<u64>,
    cursor: usize,
}

impl ScriptedBoosts {
    pub fn new(values: impl IntoIterator<Item = u64>) -> Self {
        Self {
            values: values.into_iter().collect(),
            cursor: 0,
        }
    }

    /// Number of boosts handed out so far.
    pub fn drawn(&self) -> usize {
        self.cursor
    }
}

impl BoostSource for ScriptedBoosts {
    fn next_boost(&mut self, _bound: u64) -> u64 {
        if self.values.is_empty() {
            return 0;
        }
        let value = self.values[self.cursor % self.values.len()];
        self.cursor += 1;
        value
    }
}

/// Always zero. Recompute with `NoBoost` only re-sorts.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoBoost;

impl BoostSource for NoBoost {
    fn next_boost(&mut self, _bound: u64) -> u64 {
        0
    }
}
