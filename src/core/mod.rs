//! Core domain types for the game
//!
//! This module contains the pure scoring types with no I/O. Everything here
//! is deterministic and independent of dictionaries or randomness.

mod guess;
mod knowledge;
mod status;
mod word;

#[cfg(test)]
pub(crate) mod test_gens;

pub use guess::Guess;
pub use knowledge::LetterKnowledge;
pub use status::{LetterStatus, evaluate};
pub use word::{Word, WordError};
