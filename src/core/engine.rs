//! Game rules: starting rounds and applying guesses
//!
//! Every operation is a pure transformation of a [`GameState`] value; the only
//! source of non-determinism is the random number generator owned by
//! [`GuessEngine`], which can be seeded for reproducible rounds.

use super::state::{GameState, MAX_ATTEMPTS, Mask, Outcome, Status};
use super::WordPool;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};
use std::fmt;
use tracing::{debug, trace};

/// The pool had no words, so no round can be played
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmptyPoolError;

impl fmt::Display for EmptyPoolError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "No words available: the word pool is empty")
    }
}

impl std::error::Error for EmptyPoolError {}

/// Starts rounds by drawing secret words with its own random source
///
/// Engines are independent; two engines built with the same seed draw the
/// same sequence of words.
pub struct GuessEngine<R = StdRng> {
    rng: R,
}

impl GuessEngine<StdRng> {
    /// Engine seeded from the operating system
    #[must_use]
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_os_rng())
    }

    /// Engine with a fixed seed
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    /// Seeded engine when `seed` is given, OS-seeded otherwise
    #[must_use]
    pub fn from_seed(seed: Option<u64>) -> Self {
        seed.map_or_else(Self::new, Self::seeded)
    }
}

impl Default for GuessEngine<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> GuessEngine<R> {
    pub const fn with_rng(rng: R) -> Self {
        Self { rng }
    }

    /// The engine's random source, for callers that need draws tied to its seed
    pub const fn rng_mut(&mut self) -> &mut R {
        &mut self.rng
    }

    /// Start a new round with a word drawn uniformly from `pool`
    ///
    /// # Errors
    /// Returns [`EmptyPoolError`] if the pool has no words.
    ///
    /// # Examples
    /// ```
    /// use hangman::core::{GuessEngine, Status, WordPool};
    ///
    /// let mut engine = GuessEngine::seeded(7);
    /// let state = engine.start_round(&WordPool::from_strs(["gato"])).unwrap();
    /// assert_eq!(state.status(), Status::InProgress);
    /// assert_eq!(state.word_len(), 4);
    ///
    /// assert!(engine.start_round(&WordPool::default()).is_err());
    /// ```
    pub fn start_round(&mut self, pool: &WordPool) -> Result<GameState, EmptyPoolError> {
        start_round(pool, &mut self.rng)
    }
}

/// Start a new round drawing the secret word with `rng`
///
/// # Errors
/// Returns [`EmptyPoolError`] if the pool has no words.
pub fn start_round<R: Rng + ?Sized>(
    pool: &WordPool,
    rng: &mut R,
) -> Result<GameState, EmptyPoolError> {
    let secret = pool.words().choose(rng).ok_or(EmptyPoolError)?;
    debug!(pool_size = pool.len(), word_len = secret.len(), "round started");
    Ok(GameState::new(secret.clone()))
}

/// Normalize raw guess input to a single lower-case character
///
/// Returns `None` for empty input and for input longer than one character.
#[must_use]
pub fn normalize_guess(input: &str) -> Option<char> {
    let mut chars = input.chars();
    let letter = chars.next()?;
    if chars.next().is_some() {
        return None;
    }
    letter.to_lowercase().next()
}

/// Apply one guess to `state`, returning the next state and what happened
///
/// Finished rounds are frozen: the state comes back unchanged with
/// [`Outcome::RoundOver`]. Empty input, multi-character input and letters
/// already tried come back unchanged with [`Outcome::RepeatedOrEmptyGuess`].
/// Any other single character is recorded; characters that are not letters
/// are simply never in the word.
///
/// # Examples
/// ```
/// use hangman::core::{GuessEngine, Outcome, WordPool, render_mask, submit_letter};
///
/// let mut engine = GuessEngine::seeded(1);
/// let state = engine.start_round(&WordPool::from_strs(["sol"])).unwrap();
///
/// let (state, outcome) = submit_letter(&state, "S");
/// assert_eq!(outcome, Outcome::CorrectLetter('s'));
/// assert_eq!(render_mask(&state).to_string(), "s _ _");
///
/// let (state, outcome) = submit_letter(&state, "x");
/// assert_eq!(outcome, Outcome::WrongLetter { letter: 'x', remaining: 4 });
/// assert_eq!(state.failed_attempts(), 1);
/// ```
#[must_use]
pub fn submit_letter(state: &GameState, input: &str) -> (GameState, Outcome) {
    if state.status.is_terminal() {
        return (state.clone(), Outcome::RoundOver(state.status));
    }

    let Some(letter) = normalize_guess(input) else {
        trace!("empty guess rejected");
        return (state.clone(), Outcome::RepeatedOrEmptyGuess);
    };

    if state.guessed.contains(&letter) {
        trace!(%letter, "repeated guess rejected");
        return (state.clone(), Outcome::RepeatedOrEmptyGuess);
    }

    let mut next = state.clone();
    next.guessed.insert(letter);

    let outcome = if next.secret.has_letter(letter) {
        if next.word_guessed() {
            next.status = Status::Won;
            Outcome::WordComplete(letter)
        } else {
            Outcome::CorrectLetter(letter)
        }
    } else {
        next.failed_attempts += 1;
        if next.failed_attempts >= MAX_ATTEMPTS {
            next.status = Status::Lost;
            Outcome::OutOfAttempts {
                letter,
                secret: next.secret.text().to_string(),
            }
        } else {
            Outcome::WrongLetter {
                letter,
                remaining: next.remaining_attempts(),
            }
        }
    };

    trace!(
        %letter,
        failed = next.failed_attempts,
        status = ?next.status,
        "guess applied"
    );

    (next, outcome)
}

/// Project the secret word onto what has been guessed so far
#[must_use]
pub fn render_mask(state: &GameState) -> Mask {
    Mask::of(state)
}
