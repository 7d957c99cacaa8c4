//! Round state, guess outcomes and the masked word projection

use super::SecretWord;
use rustc_hash::FxHashSet;
use std::fmt;

/// Wrong guesses allowed before the round is lost
pub const MAX_ATTEMPTS: u8 = 5;

/// Symbol shown for letters not yet guessed
pub const PLACEHOLDER: char = '_';

/// Round status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    InProgress,
    Won,
    Lost,
}

impl Status {
    /// Won and Lost are terminal: nothing but a new round changes them
    #[inline]
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

/// Result of submitting a guess
///
/// This is the signal a front-end turns into text; the engine itself never
/// produces display strings.
///
/// The first five variants are the results of a guess during a round.
/// [`Outcome::RoundOver`] is an extra signal for a submission against a round
/// that already ended; it never accompanies a state change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Empty input or a letter already tried. No attempt is consumed.
    RepeatedOrEmptyGuess,
    /// The letter is in the word and the word is not complete yet.
    CorrectLetter(char),
    /// The letter completed the word; the round is won.
    WordComplete(char),
    /// The letter is not in the word; `remaining` attempts are left.
    WrongLetter { letter: char, remaining: u8 },
    /// The last attempt was used; the round is lost and the word revealed.
    OutOfAttempts { letter: char, secret: String },
    /// The round had already ended; the state was left untouched.
    RoundOver(Status),
}

impl Outcome {
    /// Whether this outcome ended the round
    #[must_use]
    pub const fn ends_round(&self) -> bool {
        matches!(self, Self::WordComplete(_) | Self::OutOfAttempts { .. })
    }

    /// Whether this outcome cost an attempt
    #[must_use]
    pub const fn is_penalty(&self) -> bool {
        matches!(self, Self::WrongLetter { .. } | Self::OutOfAttempts { .. })
    }
}

/// State of a single round
///
/// Produced by `start_round` and replaced by `submit_letter`; callers only
/// ever see the secret word through [`Mask`] or a lost-round outcome.
#[derive(Clone, PartialEq, Eq)]
pub struct GameState {
    pub(crate) secret: SecretWord,
    pub(crate) guessed: FxHashSet<char>,
    pub(crate) failed_attempts: u8,
    pub(crate) status: Status,
}

impl GameState {
    pub(crate) fn new(secret: SecretWord) -> Self {
        Self {
            secret,
            guessed: FxHashSet::default(),
            failed_attempts: 0,
            status: Status::InProgress,
        }
    }

    #[inline]
    #[must_use]
    pub const fn status(&self) -> Status {
        self.status
    }

    #[inline]
    #[must_use]
    pub const fn is_over(&self) -> bool {
        self.status.is_terminal()
    }

    #[inline]
    #[must_use]
    pub const fn failed_attempts(&self) -> u8 {
        self.failed_attempts
    }

    #[inline]
    #[must_use]
    pub const fn max_attempts(&self) -> u8 {
        MAX_ATTEMPTS
    }

    #[inline]
    #[must_use]
    pub const fn remaining_attempts(&self) -> u8 {
        MAX_ATTEMPTS.saturating_sub(self.failed_attempts)
    }

    /// Length of the secret word in characters
    #[inline]
    #[must_use]
    pub fn word_len(&self) -> usize {
        self.secret.len()
    }

    #[inline]
    #[must_use]
    pub fn has_guessed(&self, letter: char) -> bool {
        self.guessed.contains(&letter)
    }

    /// Every letter submitted this round, sorted
    #[must_use]
    pub fn guessed_letters(&self) -> Vec<char> {
        let mut letters: Vec<char> = self.guessed.iter().copied().collect();
        letters.sort_unstable();
        letters
    }

    /// Submitted letters that are not in the word, sorted
    #[must_use]
    pub fn wrong_letters(&self) -> Vec<char> {
        let mut letters: Vec<char> = self
            .guessed
            .iter()
            .copied()
            .filter(|&c| !self.secret.has_letter(c))
            .collect();
        letters.sort_unstable();
        letters
    }

    /// Submitted letters that are in the word, sorted
    #[must_use]
    pub fn correct_letters(&self) -> Vec<char> {
        let mut letters: Vec<char> = self
            .guessed
            .iter()
            .copied()
            .filter(|&c| self.secret.has_letter(c))
            .collect();
        letters.sort_unstable();
        letters
    }

    pub(crate) fn word_guessed(&self) -> bool {
        self.secret.letters().is_subset(&self.guessed)
    }
}

impl fmt::Debug for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GameState")
            .field("word_len", &self.word_len())
            .field("guessed", &self.guessed_letters())
            .field("failed_attempts", &self.failed_attempts)
            .field("status", &self.status)
            .finish_non_exhaustive()
    }
}

/// Partially revealed secret word
///
/// One cell per character position: `Some(c)` once `c` has been guessed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mask {
    cells: Vec<Option<char>>,
}

impl Mask {
    pub(crate) fn of(state: &GameState) -> Self {
        let cells = state
            .secret
            .chars()
            .map(|c| state.guessed.contains(&c).then_some(c))
            .collect();
        Self { cells }
    }

    #[inline]
    #[must_use]
    pub fn cells(&self) -> &[Option<char>] {
        &self.cells
    }

    /// Characters with [`PLACEHOLDER`] in unrevealed positions
    pub fn chars(&self) -> impl Iterator<Item = char> + '_ {
        self.cells.iter().map(|c| c.unwrap_or(PLACEHOLDER))
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    #[must_use]
    pub fn revealed(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }
}

/// Space-separated cells, e.g. `g _ a _`
impl fmt::Display for Mask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, c) in self.chars().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{c}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state_with(word: &str, guessed: &[char]) -> GameState {
        let mut state = GameState::new(SecretWord::new(word).unwrap());
        state.guessed.extend(guessed);
        state
    }

    #[test]
    fn new_state_is_fresh() {
        let state = state_with("gato", &[]);
        assert_eq!(state.status(), Status::InProgress);
        assert_eq!(state.failed_attempts(), 0);
        assert_eq!(state.remaining_attempts(), MAX_ATTEMPTS);
        assert!(state.guessed_letters().is_empty());
        assert_eq!(state.word_len(), 4);
    }

    #[test]
    fn status_terminality() {
        assert!(!Status::InProgress.is_terminal());
        assert!(Status::Won.is_terminal());
        assert!(Status::Lost.is_terminal());
    }

    #[test]
    fn letters_split_into_correct_and_wrong() {
        let state = state_with("gato", &['z', 'a', 'x', 'g']);
        assert_eq!(state.guessed_letters(), vec!['a', 'g', 'x', 'z']);
        assert_eq!(state.correct_letters(), vec!['a', 'g']);
        assert_eq!(state.wrong_letters(), vec!['x', 'z']);
    }

    #[test]
    fn mask_hides_unguessed_positions() {
        let state = state_with("gato", &['g', 't']);
        let mask = Mask::of(&state);
        assert_eq!(mask.cells(), &[Some('g'), None, Some('t'), None]);
        assert_eq!(mask.to_string(), "g _ t _");
        assert_eq!(mask.revealed(), 2);
        assert!(!mask.is_complete());
    }

    #[test]
    fn mask_reveals_repeated_letters_everywhere() {
        let state = state_with("ala", &['a']);
        assert_eq!(Mask::of(&state).to_string(), "a _ a");
    }

    #[test]
    fn mask_complete_when_all_letters_guessed() {
        let state = state_with("sol", &['s', 'o', 'l', 'x']);
        let mask = Mask::of(&state);
        assert!(mask.is_complete());
        assert_eq!(mask.chars().collect::<String>(), "sol");
        assert!(state.word_guessed());
    }

    #[test]
    fn debug_output_redacts_secret() {
        let state = state_with("mariposa", &['a']);
        let debug = format!("{state:?}");
        assert!(!debug.contains("mariposa"));
        assert!(debug.contains("word_len: 8"));
    }

    #[test]
    fn outcome_classification() {
        assert!(Outcome::WordComplete('o').ends_round());
        assert!(
            Outcome::OutOfAttempts {
                letter: 'k',
                secret: "sol".to_string()
            }
            .ends_round()
        );
        assert!(!Outcome::CorrectLetter('g').ends_round());
        assert!(!Outcome::RoundOver(Status::Won).ends_round());

        assert!(
            Outcome::WrongLetter {
                letter: 'x',
                remaining: 4
            }
            .is_penalty()
        );
        assert!(!Outcome::RepeatedOrEmptyGuess.is_penalty());
    }
}
