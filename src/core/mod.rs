//! Core domain types and rules for Hangman
//!
//! This module contains the game engine and its data model. Everything here
//! is pure: no terminal, file or display concerns.

mod engine;
mod pool;
mod state;
mod word;

pub use engine::{
    EmptyPoolError, GuessEngine, normalize_guess, render_mask, start_round, submit_letter,
};
pub use pool::WordPool;
pub use state::{GameState, MAX_ATTEMPTS, Mask, Outcome, PLACEHOLDER, Status};
pub use word::{SecretWord, WordError};
