//! Random Sources
//!
//! Every random draw in a battle goes through [`RandomSource`], so tests can
//! swap the seeded generator for a scripted one.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use std::collections::VecDeque;

/// Uniform picks from a finite set and uniform integer ranges.
pub trait RandomSource {
    /// Uniform index in `0..len`. `len` must be non-zero.
    fn pick_index(&mut self, len: usize) -> usize;

    /// Uniform integer in `low..=high`.
    fn roll(&mut self, low: i32, high: i32) -> i32;

    /// Uniform element of a non-empty slice.
    fn choose<'a, T>(&mut self, items: &'a [T]) -> &'a T
    where
        Self: Sized,
    {
        &items[self.pick_index(items.len())]
    }
}

/// Seeded random number generator
#[derive(Debug, Clone)]
pub struct SimRng(pub SmallRng);

impl SimRng {
    /// Reproducible generator for a given seed.
    pub fn seeded(seed: u64) -> Self {
        Self(SmallRng::seed_from_u64(seed))
    }

    pub fn from_entropy() -> Self {
        Self(SmallRng::from_entropy())
    }
}

impl RandomSource for SimRng {
    fn pick_index(&mut self, len: usize) -> usize {
        self.0.gen_range(0..len)
    }

    fn roll(&mut self, low: i32, high: i32) -> i32 {
        self.0.gen_range(low..=high)
    }
}

/// Replays queued draws in order.
///
/// Picks and rolls are queued separately. Out-of-range values are clamped
/// into range and an empty queue yields the lowest value.
#[derive(Debug, Clone, Default)]
pub struct ScriptedSource {
    picks: VecDeque<usize>,
    rolls: VecDeque<i32>,
}

impl ScriptedSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue picks and rolls up front.
    pub fn with_draws(picks: &[usize], rolls: &[i32]) -> Self {
        Self {
            picks: picks.iter().copied().collect(),
            rolls: rolls.iter().copied().collect(),
        }
    }

    pub fn push_pick(&mut self, index: usize) -> &mut Self {
        self.picks.push_back(index);
        self
    }

    pub fn push_roll(&mut self, value: i32) -> &mut Self {
        self.rolls.push_back(value);
        self
    }

    /// Number of queued draws not yet consumed.
    pub fn remaining(&self) -> usize {
        self.picks.len() + self.rolls.len()
    }
}

impl RandomSource for ScriptedSource {
    fn pick_index(&mut self, len: usize) -> usize {
        let index = self.picks.pop_front().unwrap_or(0);
        index.min(len.saturating_sub(1))
    }

    fn roll(&mut self, low: i32, high: i32) -> i32 {
        self.rolls.pop_front().unwrap_or(low).clamp(low, high)
    }
}
