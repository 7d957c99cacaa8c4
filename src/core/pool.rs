//! Word pool the secret word is drawn from

use super::SecretWord;

/// Ordered sequence of candidate secret words
///
/// Loaded once and never mutated afterwards. Duplicates are kept, so a word
/// listed twice is twice as likely to be drawn.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordPool {
    words: Vec<SecretWord>,
}

impl WordPool {
    #[must_use]
    pub const fn new(words: Vec<SecretWord>) -> Self {
        Self { words }
    }

    /// Build a pool from raw strings, skipping entries that are not valid words
    ///
    /// # Examples
    /// ```
    /// use hangman::core::WordPool;
    ///
    /// let pool = WordPool::from_strs(["gato", "", "s0l", "Luna"]);
    /// assert_eq!(pool.len(), 2);
    /// assert_eq!(pool.words()[1].text(), "luna");
    /// ```
    pub fn from_strs<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        entries
            .into_iter()
            .filter_map(|s| SecretWord::new(s).ok())
            .collect()
    }

    #[inline]
    #[must_use]
    pub fn words(&self) -> &[SecretWord] {
        &self.words
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Shortest and longest word length, or `None` for an empty pool
    #[must_use]
    pub fn length_range(&self) -> Option<(usize, usize)> {
        let lengths = self.words.iter().map(SecretWord::len);
        let min = lengths.clone().min()?;
        let max = lengths.max()?;
        Some((min, max))
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SecretWord> {
        self.words.iter()
    }
}

impl FromIterator<SecretWord> for WordPool {
    fn from_iter<T: IntoIterator<Item = SecretWord>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a WordPool {
    type Item = &'a SecretWord;
    type IntoIter = std::slice::Iter<'a, SecretWord>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_strs_keeps_order_and_duplicates() {
        let pool = WordPool::from_strs(["sol", "gato", "sol"]);
        let texts: Vec<&str> = pool.iter().map(SecretWord::text).collect();
        assert_eq!(texts, ["sol", "gato", "sol"]);
    }

    #[test]
    fn from_strs_skips_invalid() {
        let pool = WordPool::from_strs(["", "gato", "123", "mar-azul", "luna"]);
        assert_eq!(pool.len(), 2);
    }

    #[test]
    fn empty_pool() {
        let pool = WordPool::default();
        assert!(pool.is_empty());
        assert_eq!(pool.length_range(), None);
    }

    #[test]
    fn length_range() {
        let pool = WordPool::from_strs(["sol", "bicicleta", "gato"]);
        assert_eq!(pool.length_range(), Some((3, 9)));
    }
}
