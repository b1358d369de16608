//! Turn-by-turn game state

use super::{GameError, Randomizer};
use crate::config::{NUM_GUESSES, NUM_LETTERS};
use crate::core::{Guess, LetterKnowledge, Word};
use crate::wordlists::Dictionary;
use tracing::{debug, info};

/// Outcome of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    InProgress,
    Won,
    Lost,
}

impl Outcome {
    /// True once the game is won or lost
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Self::InProgress)
    }
}

/// A single game: one secret, up to [`NUM_GUESSES`] guesses
///
/// State only changes through [`Game::submit_guess`]. Rejected candidates
/// leave the history untouched.
#[derive(Debug, Clone)]
pub struct Game {
    secret: Word,
    history: Vec<Guess>,
    knowledge: LetterKnowledge,
    outcome: Outcome,
}

impl Game {
    /// Start a game with a secret drawn from `dictionary`
    ///
    /// # Errors
    ///
    /// Returns [`GameError::EmptyDictionary`] if there is nothing to pick.
    pub fn new(dictionary: &Dictionary, randomizer: &mut Randomizer) -> Result<Self, GameError> {
        let secret = randomizer.pick(dictionary)?.clone();
        Ok(Self::with_secret(secret))
    }

    /// Start a game with a known secret
    #[must_use]
    pub fn with_secret(secret: Word) -> Self {
        Self {
            secret,
            history: Vec::with_capacity(NUM_GUESSES),
            knowledge: LetterKnowledge::default(),
            outcome: Outcome::InProgress,
        }
    }

    /// Validate, score and record a candidate word
    ///
    /// The candidate must already be normalized (lowercase, no surrounding
    /// whitespace); nothing is trimmed or case-folded here.
    ///
    /// # Errors
    ///
    /// - [`GameError::AlreadyTerminal`] if the game is won or lost
    /// - [`GameError::WrongLength`] if the candidate is not [`NUM_LETTERS`] long
    /// - [`GameError::NotInDictionary`] if the candidate is not a dictionary word
    ///
    /// # Examples
    /// ```
    /// use ruchle::core::Word;
    /// use ruchle::game::{Game, Outcome};
    /// use ruchle::wordlists::{Dictionary, Language};
    ///
    /// let words = ["crane", "slate"].map(|w| Word::new(w).unwrap());
    /// let dictionary = Dictionary::from_words(Language::En, words);
    /// let mut game = Game::with_secret(Word::new("slate").unwrap());
    ///
    /// game.submit_guess("crane", &dictionary).unwrap();
    /// assert_eq!(game.outcome(), Outcome::InProgress);
    ///
    /// let guess = game.submit_guess("slate", &dictionary).unwrap();
    /// assert!(guess.is_correct());
    /// assert_eq!(game.outcome(), Outcome::Won);
    /// ```
    pub fn submit_guess(
        &mut self,
        candidate: &str,
        dictionary: &Dictionary,
    ) -> Result<&Guess, GameError> {
        if self.outcome.is_terminal() {
            return Err(GameError::AlreadyTerminal);
        }

        let len = candidate.chars().count();
        if len != NUM_LETTERS {
            return Err(GameError::WrongLength(len));
        }

        let word = dictionary
            .get(candidate)
            .ok_or_else(|| GameError::NotInDictionary(candidate.to_string()))?
            .clone();

        let guess = Guess::score(word, &self.secret);
        self.knowledge.update(&guess);

        self.outcome = if guess.is_correct() {
            Outcome::Won
        } else if self.history.len() + 1 == NUM_GUESSES {
            Outcome::Lost
        } else {
            Outcome::InProgress
        };
        self.history.push(guess);

        debug!(turn = self.history.len(), outcome = ?self.outcome, "guess recorded");
        if self.outcome.is_terminal() {
            info!(
                outcome = ?self.outcome,
                guesses = self.history.len(),
                "game finished"
            );
        }

        Ok(&self.history[self.history.len() - 1])
    }

    #[inline]
    #[must_use]
    pub const fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// The hidden word, for end-of-game reporting
    #[inline]
    #[must_use]
    pub const fn secret(&self) -> &Word {
        &self.secret
    }

    /// Guesses taken so far, oldest first
    #[inline]
    #[must_use]
    pub fn history(&self) -> &[Guess] {
        &self.history
    }

    /// Best-known status per letter over the whole history
    #[inline]
    #[must_use]
    pub const fn knowledge(&self) -> &LetterKnowledge {
        &self.knowledge
    }

    /// Guesses left in the budget
    #[must_use]
    pub fn remaining(&self) -> usize {
        NUM_GUESSES - self.history.len()
    }

    /// True if `candidate` was already submitted this game
    #[must_use]
    pub fn has_guessed(&self, candidate: &str) -> bool {
        self.history.iter().any(|g| g.word().text() == candidate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{LetterStatus, test_gens};
    use crate::wordlists::Language;
    use proptest::prelude::*;

    const WORDS: &[&str] = &[
        "crane", "slate", "irate", "adept", "those", "geese", "robot", "floor", "hello",
    ];

    fn dictionary() -> Dictionary {
        Dictionary::from_words(Language::En, WORDS.iter().map(|w| Word::new(*w).unwrap()))
    }

    fn game(secret: &str) -> Game {
        Game::with_secret(Word::new(secret).unwrap())
    }

    #[test]
    fn new_game_is_in_progress() {
        let g = game("slate");
        assert_eq!(g.outcome(), Outcome::InProgress);
        assert!(g.history().is_empty());
        assert!(g.knowledge().is_empty());
        assert_eq!(g.remaining(), NUM_GUESSES);
        assert_eq!(g.secret().text(), "slate");
    }

    #[test]
    fn seeded_game_picks_dictionary_secret() {
        let dict = dictionary();
        let mut a = Randomizer::new(Some(3));
        let mut b = Randomizer::new(Some(3));
        let first = Game::new(&dict, &mut a).unwrap();
        let second = Game::new(&dict, &mut b).unwrap();
        assert_eq!(first.secret(), second.secret());
        assert!(dict.contains(first.secret().text()));
    }

    #[test]
    fn new_game_from_empty_dictionary_fails() {
        let empty = Dictionary::from_words(Language::En, Vec::new());
        let err = Game::new(&empty, &mut Randomizer::new(Some(0))).unwrap_err();
        assert_eq!(err, GameError::EmptyDictionary);
    }

    #[test]
    fn correct_guess_wins_immediately() {
        let dict = dictionary();
        let mut g = game("slate");
        let guess = g.submit_guess("slate", &dict).unwrap();
        assert!(guess.is_correct());
        assert_eq!(g.outcome(), Outcome::Won);
        assert_eq!(g.history().len(), 1);
        assert_eq!(g.remaining(), NUM_GUESSES - 1);
    }

    #[test]
    fn win_on_last_guess_is_a_win() {
        let dict = dictionary();
        let mut g = game("slate");
        for word in WORDS.iter().filter(|&&w| w != "slate").take(NUM_GUESSES - 1) {
            g.submit_guess(word, &dict).unwrap();
        }
        g.submit_guess("slate", &dict).unwrap();
        assert_eq!(g.outcome(), Outcome::Won);
        assert_eq!(g.remaining(), 0);
    }

    #[test]
    fn lost_exactly_on_last_guess() {
        let dict = dictionary();
        let mut g = game("slate");
        let wrong: Vec<_> = WORDS.iter().filter(|&&w| w != "slate").collect();

        for (i, word) in wrong.iter().take(NUM_GUESSES).enumerate() {
            assert_eq!(g.outcome(), Outcome::InProgress, "lost early at turn {i}");
            g.submit_guess(word, &dict).unwrap();
        }
        assert_eq!(g.outcome(), Outcome::Lost);
        assert_eq!(g.history().len(), NUM_GUESSES);
    }

    #[test]
    fn repeated_guesses_still_consume_turns() {
        let dict = dictionary();
        let mut g = game("slate");
        for _ in 0..NUM_GUESSES {
            g.submit_guess("crane", &dict).unwrap();
        }
        assert!(g.has_guessed("crane"));
        assert_eq!(g.outcome(), Outcome::Lost);
    }

    #[test]
    fn terminal_game_rejects_guesses_without_mutation() {
        let dict = dictionary();
        let mut g = game("slate");
        g.submit_guess("slate", &dict).unwrap();

        let before = g.history().to_vec();
        assert_eq!(
            g.submit_guess("crane", &dict).unwrap_err(),
            GameError::AlreadyTerminal
        );
        assert_eq!(
            g.submit_guess("xx", &dict).unwrap_err(),
            GameError::AlreadyTerminal
        );
        assert_eq!(g.history(), before.as_slice());
        assert_eq!(g.outcome(), Outcome::Won);
    }

    #[test]
    fn wrong_length_does_not_consume_a_turn() {
        let dict = dictionary();
        let mut g = game("slate");
        assert_eq!(
            g.submit_guess("slates", &dict).unwrap_err(),
            GameError::WrongLength(6)
        );
        assert_eq!(g.submit_guess("", &dict).unwrap_err(), GameError::WrongLength(0));
        assert!(g.history().is_empty());
        assert_eq!(g.remaining(), NUM_GUESSES);
    }

    #[test]
    fn unknown_word_does_not_consume_a_turn() {
        let dict = dictionary();
        let mut g = game("slate");
        assert_eq!(
            g.submit_guess("zzzzz", &dict).unwrap_err(),
            GameError::NotInDictionary("zzzzz".to_string())
        );
        assert!(g.history().is_empty());
    }

    #[test]
    fn unnormalized_input_is_rejected_not_fixed() {
        let dict = dictionary();
        let mut g = game("slate");
        assert_eq!(
            g.submit_guess("CRANE", &dict).unwrap_err(),
            GameError::NotInDictionary("CRANE".to_string())
        );
        assert_eq!(
            g.submit_guess(" crane", &dict).unwrap_err(),
            GameError::WrongLength(6)
        );
        assert!(g.history().is_empty());
    }

    #[test]
    fn knowledge_tracks_history() {
        let dict = dictionary();
        let mut g = game("hello");
        g.submit_guess("those", &dict).unwrap();
        g.submit_guess("floor", &dict).unwrap();

        assert_eq!(g.knowledge(), &LetterKnowledge::fold(g.history()));
        assert_eq!(g.knowledge().get(b'l'), Some(LetterStatus::Present));
        assert_eq!(g.knowledge().get(b't'), Some(LetterStatus::Absent));
        assert_eq!(g.knowledge().get(b'h'), Some(LetterStatus::Present));
        assert_eq!(g.knowledge().get(b'z'), None);
    }

    proptest! {
        /// Property: incremental knowledge always equals a fresh fold of
        /// the history, whatever the guesses
        #[test]
        fn prop_knowledge_matches_fold(
            secret in test_gens::word(),
            guesses in prop::collection::vec(test_gens::word(), 1..=NUM_GUESSES + 2),
        ) {
            let dict = Dictionary::from_words(
                Language::En,
                guesses.iter().cloned().chain(std::iter::once(secret.clone())),
            );
            let mut g = Game::with_secret(secret);

            for guess in &guesses {
                if g.outcome().is_terminal() {
                    prop_assert_eq!(
                        g.submit_guess(guess.text(), &dict).unwrap_err(),
                        GameError::AlreadyTerminal
                    );
                    continue;
                }
                g.submit_guess(guess.text(), &dict).unwrap();
                prop_assert_eq!(g.knowledge(), &LetterKnowledge::fold(g.history()));
            }
            prop_assert!(g.history().len() <= NUM_GUESSES);
        }
    }
}
