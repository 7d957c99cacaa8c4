//! Word list loading utilities
//!
//! Provides functions to load word pools from files or from embedded constants.

use crate::core::WordPool;
use serde::Deserialize;
use std::fs;
use std::io;
use std::path::Path;
use tracing::debug;

/// JSON word file layout
///
/// Accepts both `{"palabras": [...]}` and `{"words": [...]}`.
#[derive(Debug, Deserialize)]
struct WordFile {
    #[serde(alias = "palabras")]
    words: Vec<String>,
}

/// Load a word pool from a file
///
/// Files ending in `.json` are parsed as a JSON object with a `palabras` (or
/// `words`) array; anything else is read as one word per line. Invalid
/// entries are skipped.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read, or an
/// [`io::ErrorKind::InvalidData`] error if a JSON file is malformed.
///
/// # Examples
/// ```no_run
/// use hangman::wordlists::loader::load_from_file;
///
/// let pool = load_from_file("data/words.txt").unwrap();
/// println!("Loaded {} words", pool.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<WordPool> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;

    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    let pool = if is_json {
        parse_json(&content)?
    } else {
        parse_lines(&content)
    };

    debug!(path = %path.display(), words = pool.len(), "word pool loaded");
    Ok(pool)
}

/// Parse one word per line, ignoring blank lines and `#` comments
#[must_use]
pub fn parse_lines(content: &str) -> WordPool {
    WordPool::from_strs(
        content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#')),
    )
}

/// Parse a JSON word file
///
/// # Errors
///
/// Returns an [`io::ErrorKind::InvalidData`] error if the JSON is malformed
/// or has no word array.
pub fn parse_json(content: &str) -> io::Result<WordPool> {
    let file: WordFile = serde_json::from_str(content)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    Ok(WordPool::from_strs(file.words))
}

/// Convert an embedded string slice to a word pool
///
/// # Examples
/// ```
/// use hangman::wordlists::loader::pool_from_slice;
/// use hangman::wordlists::WORDS;
///
/// let pool = pool_from_slice(WORDS);
/// assert_eq!(pool.len(), WORDS.len());
/// ```
#[must_use]
pub fn pool_from_slice(slice: &[&str]) -> WordPool {
    WordPool::from_strs(slice)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::SecretWord;

    fn texts(pool: &WordPool) -> Vec<&str> {
        pool.iter().map(SecretWord::text).collect()
    }

    #[test]
    fn pool_from_slice_converts_valid_words() {
        let pool = pool_from_slice(&["gato", "perro", "sol"]);
        assert_eq!(texts(&pool), ["gato", "perro", "sol"]);
    }

    #[test]
    fn pool_from_slice_skips_invalid() {
        let pool = pool_from_slice(&["gato", "", "p3rro", "sol"]);
        assert_eq!(texts(&pool), ["gato", "sol"]);
    }

    #[test]
    fn pool_from_slice_empty() {
        let input: &[&str] = &[];
        assert!(pool_from_slice(input).is_empty());
    }

    #[test]
    fn parse_lines_skips_blanks_and_comments() {
        let pool = parse_lines("# animales\ngato\n\n  Perro  \nsol\n");
        assert_eq!(texts(&pool), ["gato", "perro", "sol"]);
    }

    #[test]
    fn parse_json_palabras_key() {
        let pool = parse_json(r#"{"palabras": ["gato", "luna", "12"]}"#).unwrap();
        assert_eq!(texts(&pool), ["gato", "luna"]);
    }

    #[test]
    fn parse_json_words_key() {
        let pool = parse_json(r#"{"words": ["sol"]}"#).unwrap();
        assert_eq!(texts(&pool), ["sol"]);
    }

    #[test]
    fn parse_json_malformed_is_invalid_data() {
        let err = parse_json(r#"{"palabras": "gato"}"#).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);

        let err = parse_json("not json").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);

        // Truncated input is still malformed, not an early end of stream
        let err = parse_json(r#"{"palabras": ["gato""#).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
    }

    #[test]
    fn load_from_file_reads_text_and_json() {
        let dir = std::env::temp_dir().join(format!("hangman-loader-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();

        let txt = dir.join("words.txt");
        fs::write(&txt, "gato\nsol\n").unwrap();
        assert_eq!(texts(&load_from_file(&txt).unwrap()), ["gato", "sol"]);

        let json = dir.join("palabras.JSON");
        fs::write(&json, r#"{"palabras": ["luna"]}"#).unwrap();
        assert_eq!(texts(&load_from_file(&json).unwrap()), ["luna"]);

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn load_from_missing_file_errors() {
        let err = load_from_file("/definitely/not/here.txt").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }

    #[test]
    fn load_from_embedded_words() {
        use crate::wordlists::WORDS;

        let pool = pool_from_slice(WORDS);
        assert_eq!(pool.len(), WORDS.len());
    }
}
