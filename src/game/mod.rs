//! Game state machine
//!
//! A [`Game`] owns the secret and the guess history, validates each
//! candidate against the active dictionary, and tracks the outcome.

pub mod secret;
mod state;

pub use secret::{Randomizer, pick};
pub use state::{Game, Outcome};

use crate::config::NUM_LETTERS;
use thiserror::Error;

/// Errors raised while choosing a secret or submitting a guess
///
/// Guess errors are recoverable: they never consume a turn.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("cannot pick a secret from an empty dictionary")]
    EmptyDictionary,

    #[error("the game is already over")]
    AlreadyTerminal,

    #[error("your guess must be {expected} letters, got {0}", expected = NUM_LETTERS)]
    WrongLength(usize),

    #[error("{0:?} is not in the dictionary")]
    NotInDictionary(String),
}
