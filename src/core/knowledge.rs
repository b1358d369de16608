//! Best-known status per letter across a game's guesses
//!
//! Used by front ends to colour the on-screen keyboard. Letters that were
//! never guessed have no entry and are shown as unknown.

use super::word::letter_index;
use super::{Guess, LetterStatus};
use crate::config::{ALPHABET, ALPHABET_LEN};

/// Mapping from letter to the highest-priority status seen for it
///
/// Priority is `Correct > Present > Absent`; a letter is never downgraded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LetterKnowledge {
    best: [Option<LetterStatus>; ALPHABET_LEN],
}

impl LetterKnowledge {
    /// Rebuild knowledge from scratch over an entire guess history
    ///
    /// # Examples
    /// ```
    /// use ruchle::core::{Guess, LetterKnowledge, LetterStatus, Word};
    ///
    /// let secret = Word::new("slate").unwrap();
    /// let history = [Guess::score(Word::new("crane").unwrap(), &secret)];
    /// let knowledge = LetterKnowledge::fold(&history);
    ///
    /// assert_eq!(knowledge.get(b'a'), Some(LetterStatus::Correct));
    /// assert_eq!(knowledge.get(b'z'), None);
    /// ```
    #[must_use]
    pub fn fold<'a>(history: impl IntoIterator<Item = &'a Guess>) -> Self {
        let mut knowledge = Self::default();
        for guess in history {
            knowledge.update(guess);
        }
        knowledge
    }

    /// Fold a single new guess into the existing knowledge
    pub fn update(&mut self, guess: &Guess) {
        for (letter, status) in guess.letters() {
            let slot = &mut self.best[letter_index(letter)];
            *slot = (*slot).max(Some(status));
        }
    }

    /// Best status known for `letter`, or `None` if it was never guessed
    #[must_use]
    pub fn get(&self, letter: u8) -> Option<LetterStatus> {
        if letter.is_ascii_lowercase() {
            self.best[letter_index(letter)]
        } else {
            None
        }
    }

    /// Iterate over every known letter in alphabet order
    pub fn iter(&self) -> impl Iterator<Item = (u8, LetterStatus)> + '_ {
        ALPHABET
            .bytes()
            .zip(self.best.iter())
            .filter_map(|(letter, status)| status.map(|s| (letter, s)))
    }

    /// Number of letters with a known status
    #[must_use]
    pub fn len(&self) -> usize {
        self.best.iter().flatten().count()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.best.iter().all(Option::is_none)
    }
}
