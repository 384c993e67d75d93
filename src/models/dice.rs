//! Randomness source
//!
//! Every procedural placement and combat roll in the game draws from a
//! single [`Dice`]. The generator state is part of the saved game, so a
//! restored session rolls exactly what the original would have rolled.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Dice {
    rng: ChaCha8Rng,
    /// Draws queued with [`Dice::script`]; consumed before the generator.
    #[serde(skip)]
    scripted: VecDeque<f64>,
}

impl Dice {
    pub fn new(seed: u64) -> Self {
        Dice {
            rng: ChaCha8Rng::seed_from_u64(seed),
            scripted: VecDeque::new(),
        }
    }

    /// Uniform draw from [0, 1).
    pub fn roll(&mut self) -> f64 {
        match self.scripted.pop_front() {
            Some(value) => value,
            None => self.rng.gen::<f64>(),
        }
    }

    /// Uniform integer in `0..n`. `n` must be positive.
    pub fn below(&mut self, n: usize) -> usize {
        let pick = (self.roll() * n as f64).floor() as usize;
        pick.min(n.saturating_sub(1))
    }

    pub fn chance(&mut self, probability: f64) -> bool {
        self.roll() < probability
    }

    /// Fisher-Yates shuffle driven by [`Dice::below`].
    pub fn shuffle<T>(&mut self, items: &mut [T]) {
        for i in (1..items.len()).rev() {
            let j = self.below(i + 1);
            items.swap(i, j);
        }
    }

    /// Fresh seed for a follow-up game; bypasses scripted draws.
    pub fn next_seed(&mut self) -> u64 {
        self.rng.gen()
    }

    /// Queue fixed values for the next draws.
    pub fn script<I: IntoIterator<Item = f64>>(&mut self, draws: I) {
        self.scripted.extend(draws);
    }
}
