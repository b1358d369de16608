//! A scored guess

use super::{LetterStatus, Word, evaluate};
use crate::config::NUM_LETTERS;
use std::fmt;

/// One submitted word together with its per-letter feedback
///
/// Built once per turn and never modified afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Guess {
    word: Word,
    statuses: [LetterStatus; NUM_LETTERS],
}

impl Guess {
    /// Score `word` against `secret`
    #[must_use]
    pub fn score(word: Word, secret: &Word) -> Self {
        let statuses = evaluate(&word, secret);
        Self { word, statuses }
    }

    #[inline]
    #[must_use]
    pub const fn word(&self) -> &Word {
        &self.word
    }

    #[inline]
    #[must_use]
    pub const fn statuses(&self) -> &[LetterStatus; NUM_LETTERS] {
        &self.statuses
    }

    /// Iterate `(letter, status)` pairs left to right
    pub fn letters(&self) -> impl Iterator<Item = (u8, LetterStatus)> + '_ {
        self.word.chars().iter().copied().zip(self.statuses)
    }

    /// True when every letter is Correct
    #[must_use]
    pub fn is_correct(&self) -> bool {
        self.statuses.iter().all(|&s| s == LetterStatus::Correct)
    }

    /// Feedback as a row of emoji squares
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.statuses.iter().map(|s| s.to_emoji()).collect()
    }
}

impl fmt::Display for Guess {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.word, self.to_emoji())
    }
}
