//! Hangman solving helpers
//!
//! Candidate filtering and letter selection strategies, used for hints in the
//! front-ends and for simulations.

mod candidates;
pub mod strategy;

pub use candidates::{candidates, is_consistent, letter_counts};
pub use strategy::{
    AlphabeticalStrategy, FALLBACK_ORDER, FrequencyStrategy, RandomStrategy, Strategy,
    StrategyType,
};
