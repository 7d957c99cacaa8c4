//! Letter selection strategies
//!
//! Defines the Strategy trait and concrete implementations.

use super::candidates::{candidates, letter_counts};
use crate::core::{GameState, WordPool};
use rand::RngCore;
use std::cmp::Reverse;

/// Letters of Spanish text from most to least frequent
///
/// Used when no pool word fits the round (e.g. a custom pool without the secret).
pub const FALLBACK_ORDER: &str = "eaosrnidlctumpbgvyqhfzjxkw";

/// A strategy for choosing the next letter to guess
pub trait Strategy {
    /// Select the next letter for `state`, drawing on `pool` for knowledge
    ///
    /// Any randomness comes from `rng`, so a seeded generator makes the choice
    /// reproducible. Returns a letter not yet guessed, or `None` if the round
    /// is over or nothing is left to try.
    fn select_letter(
        &self,
        state: &GameState,
        pool: &WordPool,
        rng: &mut dyn RngCore,
    ) -> Option<char>;
}

/// Enum wrapper for all strategy types
///
/// Allows runtime selection of strategy while maintaining static dispatch.
pub enum StrategyType {
    /// Most common letter among remaining candidates (default)
    Frequency(FrequencyStrategy),
    /// First untried letter from a to z
    Alphabetical(AlphabeticalStrategy),
    /// Random untried letter
    Random(RandomStrategy),
}

impl Strategy for StrategyType {
    fn select_letter(
        &self,
        state: &GameState,
        pool: &WordPool,
        rng: &mut dyn RngCore,
    ) -> Option<char> {
        match self {
            Self::Frequency(s) => s.select_letter(state, pool, rng),
            Self::Alphabetical(s) => s.select_letter(state, pool, rng),
            Self::Random(s) => s.select_letter(state, pool, rng),
        }
    }
}

impl StrategyType {
    /// Create strategy from name string
    ///
    /// Supported names: "frequency", "alphabetical", "random".
    /// Defaults to frequency if name is unrecognized.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "alphabetical" | "alpha" => Self::Alphabetical(AlphabeticalStrategy),
            "random" => Self::Random(RandomStrategy),
            _ => Self::Frequency(FrequencyStrategy),
        }
    }

    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Frequency(_) => "frequency",
            Self::Alphabetical(_) => "alphabetical",
            Self::Random(_) => "random",
        }
    }
}

fn untried(state: &GameState) -> impl Iterator<Item = char> + '_ {
    ('a'..='z').filter(|&c| !state.has_guessed(c))
}

/// Frequency strategy
///
/// Picks the letter contained in the most candidate words, which reveals the
/// most on average. Ties go to the alphabetically first letter.
pub struct FrequencyStrategy;

impl Strategy for FrequencyStrategy {
    fn select_letter(
        &self,
        state: &GameState,
        pool: &WordPool,
        _rng: &mut dyn RngCore,
    ) -> Option<char> {
        if state.is_over() {
            return None;
        }

        let remaining = candidates(state, pool);
        let counts = letter_counts(&remaining, state);

        counts
            .into_iter()
            .max_by_key(|&(c, n)| (n, Reverse(c)))
            .map(|(c, _)| c)
            .or_else(|| FALLBACK_ORDER.chars().find(|&c| !state.has_guessed(c)))
    }
}

/// Alphabetical strategy
///
/// Walks a to z. Mostly useful as a baseline for simulations.
pub struct AlphabeticalStrategy;

impl Strategy for AlphabeticalStrategy {
    fn select_letter(
        &self,
        state: &GameState,
        _pool: &WordPool,
        _rng: &mut dyn RngCore,
    ) -> Option<char> {
        if state.is_over() {
            return None;
        }
        untried(state).next()
    }
}

/// Random strategy
///
/// Uniformly picks an untried letter from a to z using the caller's generator.
pub struct RandomStrategy;

impl Strategy for RandomStrategy {
    fn select_letter(
        &self,
        state: &GameState,
        _pool: &WordPool,
        rng: &mut dyn RngCore,
    ) -> Option<char> {
        use rand::prelude::IndexedRandom;

        if state.is_over() {
            return None;
        }

        let letters: Vec<char> = untried(state).collect();
        letters.choose(rng).copied()
    }
}
