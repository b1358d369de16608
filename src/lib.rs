//! Ruchle
//!
//! A terminal word-guessing game: find the hidden word in a fixed number of
//! tries, with per-letter Correct / Present / Absent feedback.
//!
//! # Quick Start
//!
//! ```rust
//! use ruchle::core::Word;
//! use ruchle::game::{Game, Outcome};
//! use ruchle::wordlists::{Dictionary, Language};
//!
//! let words = ["crane", "slate"].map(|w| Word::new(w).unwrap());
//! let dictionary = Dictionary::from_words(Language::En, words);
//!
//! let mut game = Game::with_secret(Word::new("slate").unwrap());
//! let guess = game.submit_guess("crane", &dictionary).unwrap();
//! println!("{guess}");
//! assert_eq!(game.outcome(), Outcome::InProgress);
//! ```

// Word length and turn budget
pub mod config;

// Core domain types
pub mod core;

// Game state machine and secret selection
pub mod game;

// Dictionaries
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
