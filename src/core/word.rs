//! Word representation
//!
//! A `Word` is an immutable, validated sequence of exactly [`NUM_LETTERS`]
//! ASCII lowercase letters.

use crate::config::{ALPHABET_LEN, NUM_LETTERS};
use std::fmt;
use thiserror::Error;

/// A fixed-length game word
///
/// Stores the word both as text (for display and lookup) and as bytes
/// (for scoring).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Word {
    text: String,
    chars: [u8; NUM_LETTERS],
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("word must be exactly {expected} letters, got {0}", expected = NUM_LETTERS)]
    InvalidLength(usize),
    #[error("word must contain only lowercase letters a-z, found {0:?}")]
    InvalidCharacter(char),
}

impl Word {
    /// Create a new Word from a string
    ///
    /// Input is taken as-is: no trimming and no case folding. Callers are
    /// expected to normalize raw player input first.
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - Length is not exactly [`NUM_LETTERS`] characters
    /// - Any character is outside `a-z`
    ///
    /// # Examples
    /// ```
    /// use ruchle::core::Word;
    ///
    /// let word = Word::new("crane").unwrap();
    /// assert_eq!(word.text(), "crane");
    ///
    /// assert!(Word::new("too long").is_err());
    /// assert!(Word::new("CRANE").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        let text: String = text.into();

        let len = text.chars().count();
        if len != NUM_LETTERS {
            return Err(WordError::InvalidLength(len));
        }

        if let Some(bad) = text.chars().find(|c| !c.is_ascii_lowercase()) {
            return Err(WordError::InvalidCharacter(bad));
        }

        let mut chars = [0u8; NUM_LETTERS];
        chars.copy_from_slice(text.as_bytes());

        Ok(Self { text, chars })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word as a byte array
    #[inline]
    #[must_use]
    pub const fn chars(&self) -> &[u8; NUM_LETTERS] {
        &self.chars
    }

    /// Count of each letter, indexed by `letter - b'a'`
    ///
    /// This is the remaining-count pool used while scoring a guess.
    #[inline]
    #[must_use]
    pub(crate) fn letter_counts(&self) -> [u8; ALPHABET_LEN] {
        let mut counts = [0u8; ALPHABET_LEN];
        for &ch in &self.chars {
            counts[letter_index(ch)] += 1;
        }
        counts
    }
}

/// Index of a lowercase ASCII letter in the alphabet
#[inline]
pub(crate) const fn letter_index(letter: u8) -> usize {
    (letter - b'a') as usize
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

impl std::str::FromStr for Word {
    type Err = WordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}
