//! Per-letter guess feedback
//!
//! Each position of a guess is scored as one of:
//! - Correct (letter matches the secret at that position)
//! - Present (letter is in the secret at another position)
//! - Absent (letter is not in the secret, or all its occurrences are used up)

use super::Word;
use super::word::letter_index;
use crate::config::NUM_LETTERS;

/// Verdict for a single letter position
///
/// Variants are declared in priority order so that `Ord` ranks
/// `Absent < Present < Correct`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum LetterStatus {
    Absent,
    Present,
    Correct,
}

impl LetterStatus {
    /// Emoji square for this status
    #[must_use]
    pub const fn to_emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬜',
        }
    }
}

/// Score `guess` against `secret`
///
/// # Algorithm
/// 1. First pass: mark exact position matches Correct and remove them from
///    a per-letter pool of the secret's remaining letters
/// 2. Second pass, left to right over the other positions: mark Present
///    while the pool still holds that letter, Absent otherwise
///
/// A letter is never reported Correct or Present more times than it occurs
/// in the secret, and exact matches always win over earlier repeats.
///
/// # Examples
/// ```
/// use ruchle::core::{LetterStatus::*, Word, evaluate};
///
/// let guess = Word::new("crane").unwrap();
/// let secret = Word::new("slate").unwrap();
///
/// assert_eq!(
///     evaluate(&guess, &secret),
///     [Absent, Absent, Correct, Absent, Correct]
/// );
/// ```
#[must_use]
pub fn evaluate(guess: &Word, secret: &Word) -> [LetterStatus; NUM_LETTERS] {
    let mut result = [LetterStatus::Absent; NUM_LETTERS];
    let mut remaining = secret.letter_counts();

    for (i, (&g, &s)) in guess.chars().iter().zip(secret.chars()).enumerate() {
        if g == s {
            result[i] = LetterStatus::Correct;
            remaining[letter_index(g)] -= 1;
        }
    }

    for (i, &g) in guess.chars().iter().enumerate() {
        if result[i] == LetterStatus::Correct {
            continue;
        }
        let pool = &mut remaining[letter_index(g)];
        if *pool > 0 {
            *pool -= 1;
            result[i] = LetterStatus::Present;
        }
    }

    result
}
