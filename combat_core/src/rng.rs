//! RandomSource - Pluggable uniform draws for combat rolls
//!
//! Every roll in the engine (crit, dodge, block, effects, drops) consumes one
//! draw in `[0, 1)` from a `RandomSource`. Production code uses the thread
//! RNG; tests script exact outcomes with `ScriptedRolls`.

use rand::rngs::{StdRng, ThreadRng};
use rand::Rng;
use std::collections::VecDeque;

/// Provider of uniform draws in `[0, 1)`
pub trait RandomSource {
    /// Next uniform draw in `[0, 1)`
    fn next_f64(&mut self) -> f64;

    /// Roll against a probability: succeeds when the draw is below `chance`
    fn roll(&mut self, chance: f64) -> bool {
        self.next_f64() < chance
    }

    /// Pick an index in `0..len` uniformly. `len` must be non-zero.
    fn pick_index(&mut self, len: usize) -> usize {
        let index = (self.next_f64() * len as f64) as usize;
        index.min(len.saturating_sub(1))
    }
}

impl RandomSource for ThreadRng {
    fn next_f64(&mut self) -> f64 {
        self.gen::<f64>()
    }
}

impl RandomSource for StdRng {
    fn next_f64(&mut self) -> f64 {
        self.gen::<f64>()
    }
}

impl<T: RandomSource + ?Sized> RandomSource for &mut T {
    fn next_f64(&mut self) -> f64 {
        (**self).next_f64()
    }
}

/// A fixed sequence of draws for deterministic tests and replays.
///
/// Once the script is exhausted every further draw returns `fallback`
/// (0.999 by default, which fails every roll the engine makes).
#[derive(Debug, Clone)]
pub struct ScriptedRolls {
    rolls: VecDeque<f64>,
    fallback: f64,
    consumed: usize,
}

impl ScriptedRolls {
    /// Create a script from a list of draws
    pub fn new(rolls: impl IntoIterator<Item = f64>) -> Self {
        ScriptedRolls {
            rolls: rolls.into_iter().collect(),
            fallback: 0.999,
            consumed: 0,
        }
    }

    /// Set the value returned after the script runs out
    pub fn with_fallback(mut self, fallback: f64) -> Self {
        self.fallback = fallback;
        self
    }

    /// Number of draws taken so far
    pub fn consumed(&self) -> usize {
        self.consumed
    }

    /// Draws left in the script
    pub fn remaining(&self) -> usize {
        self.rolls.len()
    }
}

impl RandomSource for ScriptedRolls {
    fn next_f64(&mut self) -> f64 {
        self.consumed += 1;
        self.rolls.pop_front().unwrap_or(self.fallback)
    }
}
