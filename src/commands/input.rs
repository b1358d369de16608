//! Player input handling shared by both front ends
//!
//! Raw lines are normalized here before they reach [`Game::submit_guess`],
//! which only accepts already-normalized words.

use crate::core::Guess;
use crate::game::{Game, GameError};
use crate::wordlists::Dictionary;
use thiserror::Error;

/// Why a line of player input did not become a turn
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Rejection {
    #[error("You have already used {0}")]
    Repeated(String),

    #[error(transparent)]
    Invalid(#[from] GameError),
}

/// Trim surrounding whitespace and lowercase ASCII letters
#[must_use]
pub fn normalize(raw: &str) -> String {
    raw.trim().to_ascii_lowercase()
}

/// Normalize `raw` and submit it as the next guess
///
/// Words already played this game are refused before reaching the game,
/// so they do not cost a turn. A finished game refuses every line with
/// [`GameError::AlreadyTerminal`], repeats included.
///
/// # Errors
///
/// Returns [`Rejection::Repeated`] for a word already guessed, or
/// [`Rejection::Invalid`] with the game's own validation error.
pub fn play_line<'g>(
    game: &'g mut Game,
    dictionary: &Dictionary,
    raw: &str,
) -> Result<&'g Guess, Rejection> {
    if game.outcome().is_terminal() {
        return Err(GameError::AlreadyTerminal.into());
    }

    let candidate = normalize(raw);
    if game.has_guessed(&candidate) {
        return Err(Rejection::Repeated(candidate));
    }
    Ok(game.submit_guess(&candidate, dictionary)?)
}
