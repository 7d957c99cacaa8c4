//! Candidate filtering
//!
//! Narrows the word pool down to the words still compatible with what a
//! player can see: the mask and the letters already tried.

use crate::core::{GameState, Mask, SecretWord, WordPool, render_mask};
use rayon::prelude::*;
use rustc_hash::FxHashMap;

/// Check whether `word` could be the secret behind `mask`
///
/// A word fits when it has the same length, matches every revealed cell, and
/// holds no guessed letter in a hidden cell (a guessed letter in the word
/// would have been revealed there).
#[must_use]
pub fn is_consistent(word: &SecretWord, mask: &Mask, state: &GameState) -> bool {
    word.len() == mask.len()
        && word.chars().zip(mask.cells()).all(|(c, cell)| match cell {
            Some(shown) => *shown == c,
            None => !state.has_guessed(c),
        })
}

/// Pool words compatible with the current round, in pool order
///
/// # Examples
/// ```
/// use hangman::core::{GuessEngine, WordPool, submit_letter};
/// use hangman::solver::candidates;
///
/// let pool = WordPool::from_strs(["gato", "pato", "sol"]);
/// let state = GuessEngine::seeded(0)
///     .start_round(&WordPool::from_strs(["gato"]))
///     .unwrap();
/// let (state, _) = submit_letter(&state, "p");
///
/// let remaining = candidates(&state, &pool);
/// assert_eq!(remaining.len(), 1);
/// assert_eq!(remaining[0].text(), "gato");
/// ```
#[must_use]
pub fn candidates<'a>(state: &GameState, pool: &'a WordPool) -> Vec<&'a SecretWord> {
    let mask = render_mask(state);
    pool.words()
        .par_iter()
        .filter(|word| is_consistent(word, &mask, state))
        .collect()
}

/// For every letter not yet guessed, the number of candidates containing it
#[must_use]
pub fn letter_counts(candidates: &[&SecretWord], state: &GameState) -> FxHashMap<char, usize> {
    candidates
        .par_iter()
        .fold(FxHashMap::default, |mut counts, word| {
            for &c in word.letters() {
                if !state.has_guessed(c) {
                    *counts.entry(c).or_insert(0) += 1;
                }
            }
            counts
        })
        .reduce(FxHashMap::default, |mut acc, counts| {
            for (c, n) in counts {
                *acc.entry(c).or_insert(0) += n;
            }
            acc
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{GuessEngine, submit_letter};

    fn round(word: &str, guesses: &[&str]) -> GameState {
        let mut state = GuessEngine::seeded(0)
            .start_round(&WordPool::from_strs([word]))
            .unwrap();
        for guess in guesses {
            state = submit_letter(&state, guess).0;
        }
        state
    }

    fn texts<'a>(words: &[&'a SecretWord]) -> Vec<&'a str> {
        words.iter().map(|&w| w.text()).collect()
    }

    #[test]
    fn fresh_round_keeps_same_length_words() {
        let pool = WordPool::from_strs(["gato", "sol", "pato", "perro", "casa"]);
        let state = round("gato", &[]);
        assert_eq!(texts(&candidates(&state, &pool)), ["gato", "pato", "casa"]);
    }

    #[test]
    fn revealed_letters_narrow_candidates() {
        let pool = WordPool::from_strs(["gato", "pato", "casa", "rata"]);
        let state = round("gato", &["a", "t"]);
        assert_eq!(texts(&candidates(&state, &pool)), ["gato", "pato"]);
    }

    #[test]
    fn wrong_letters_exclude_words() {
        let pool = WordPool::from_strs(["gato", "pato", "dato"]);
        let state = round("gato", &["p", "d"]);
        assert_eq!(texts(&candidates(&state, &pool)), ["gato"]);
    }

    #[test]
    fn guessed_letter_in_hidden_cell_excludes_word() {
        // "aaa" would have shown its middle 'a' once 'a' was guessed
        let pool = WordPool::from_strs(["ala", "ana", "aaa", "alo"]);
        let state = round("ala", &["a"]);
        assert_eq!(texts(&candidates(&state, &pool)), ["ala", "ana"]);

        let state = round("ala", &["a", "n"]);
        assert_eq!(texts(&candidates(&state, &pool)), ["ala"]);
    }

    #[test]
    fn letter_counts_count_words_not_occurrences() {
        let pool = WordPool::from_strs(["ala", "sol", "mar"]);
        let words: Vec<&SecretWord> = pool.iter().collect();
        let state = round("sol", &["s"]);

        let counts = letter_counts(&words, &state);
        assert_eq!(counts.get(&'a'), Some(&2));
        assert_eq!(counts.get(&'l'), Some(&2));
        assert_eq!(counts.get(&'o'), Some(&1));
        assert_eq!(counts.get(&'s'), None);
    }
}
