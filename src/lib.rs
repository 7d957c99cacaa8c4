//! Hangman
//!
//! A word-guessing game engine with TUI and CLI front-ends, letter-picking
//! strategies and a parallel simulator.
//!
//! # Quick Start
//!
//! ```rust
//! use hangman::core::{GuessEngine, Outcome, WordPool, render_mask, submit_letter};
//!
//! let pool = WordPool::from_strs(["gato"]);
//! let mut engine = GuessEngine::seeded(42);
//!
//! let state = engine.start_round(&pool).unwrap();
//! let (state, outcome) = submit_letter(&state, "g");
//!
//! assert_eq!(outcome, Outcome::CorrectLetter('g'));
//! assert_eq!(render_mask(&state).to_string(), "g _ _ _");
//! ```

// Core domain types
pub mod core;

// Letter strategies and candidate filtering
pub mod solver;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;

// Tracing setup
pub mod logging;
