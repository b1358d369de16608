//! Formatting utilities for terminal output

use crate::config::{ALPHABET, NUM_GUESSES, NUM_LETTERS};
use crate::core::{Guess, LetterKnowledge, LetterStatus};
use colored::{ColoredString, Colorize};

/// Placeholder character for letters not yet guessed
pub const BLANK: char = '_';

/// Colour one letter by its status; `None` means unknown
#[must_use]
pub fn styled_letter(letter: u8, status: Option<LetterStatus>) -> ColoredString {
    let text = (letter as char).to_string();
    match status {
        Some(LetterStatus::Correct) => text.bold().white().on_green(),
        Some(LetterStatus::Present) => text.bold().white().on_yellow(),
        Some(LetterStatus::Absent) => text.white().on_bright_black(),
        None => text.normal(),
    }
}

/// A guess with every letter coloured by its status
#[must_use]
pub fn guess_row(guess: &Guess) -> String {
    guess
        .letters()
        .map(|(letter, status)| styled_letter(letter, Some(status)).to_string())
        .collect()
}

/// Row shown for a turn that has not been played
#[must_use]
pub fn blank_row() -> String {
    BLANK.to_string().repeat(NUM_LETTERS).dimmed().to_string()
}

/// All [`NUM_GUESSES`] board rows: played guesses first, then blanks
#[must_use]
pub fn board_rows(history: &[Guess]) -> Vec<String> {
    let mut rows: Vec<String> = history.iter().map(guess_row).collect();
    rows.resize_with(NUM_GUESSES.max(history.len()), blank_row);
    rows
}

/// The alphabet with every letter coloured by what is known about it
#[must_use]
pub fn keyboard_line(knowledge: &LetterKnowledge) -> String {
    ALPHABET
        .bytes()
        .map(|letter| styled_letter(letter, knowledge.get(letter)).to_string())
        .collect()
}

/// Centre `text` in `width` columns, measured on its visible length
#[must_use]
pub fn centered(text: &str, visible_len: usize, width: usize) -> String {
    let pad = width.saturating_sub(visible_len) / 2;
    format!("{}{text}", " ".repeat(pad))
}
