//! Process-wide game configuration
//!
//! Word length and turn budget are compile-time constants shared by every
//! module; they are fixed for the lifetime of the process.

/// Number of letters in every word (dictionary entries, secrets and guesses)
pub const NUM_LETTERS: usize = 5;

/// Number of guesses a player gets before the game is lost
pub const NUM_GUESSES: usize = 6;

/// The game alphabet, in keyboard display order
pub const ALPHABET: &str = "abcdefghijklmnopqrstuvwxyz";

/// Number of letters in [`ALPHABET`]
pub const ALPHABET_LEN: usize = 26;

/// Return the `(word length, turn budget)` pair the game runs with
#[must_use]
pub const fn settings() -> (usize, usize) {
    (NUM_LETTERS, NUM_GUESSES)
}
