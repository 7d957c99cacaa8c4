//! Word lists for Hangman
//!
//! Provides the embedded default pool compiled into the binary and loaders
//! for custom word files.

mod embedded;
pub mod loader;

pub use embedded::{WORDS, WORDS_COUNT};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_count_matches_const() {
        assert_eq!(WORDS.len(), WORDS_COUNT);
    }

    #[test]
    fn words_are_lowercase_letters() {
        for &word in WORDS {
            assert!(!word.is_empty());
            assert!(
                word.chars().all(|c| c.is_ascii_lowercase()),
                "Word '{word}' contains non-lowercase chars"
            );
        }
    }

    #[test]
    fn scenario_words_present() {
        for expected in ["gato", "sol", "ala"] {
            assert!(WORDS.contains(&expected), "missing '{expected}'");
        }
    }
}
