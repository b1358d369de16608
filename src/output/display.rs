//! Screen-level display for the line-based game

use super::formatters::{board_rows, centered, keyboard_line};
use crate::config::{ALPHABET_LEN, NUM_LETTERS};
use crate::game::{Game, Outcome};
use colored::Colorize;
use crossterm::{
    cursor::MoveTo,
    execute,
    terminal::{Clear, ClearType},
};
use std::io;

/// Width of the play area in columns
pub const SCREEN_WIDTH: usize = 40;

/// Clear the terminal and print a headline rule
///
/// # Errors
///
/// Returns an error if the terminal cannot be written to.
pub fn refresh_page(headline: &str) -> io::Result<()> {
    execute!(io::stdout(), Clear(ClearType::All), MoveTo(0, 0))?;

    let title = format!(" {headline} ");
    let side = SCREEN_WIDTH.saturating_sub(title.len()) / 2;
    println!(
        "{}{}{}\n",
        "─".repeat(side).blue(),
        title.blue().bold(),
        "─".repeat(side).blue()
    );
    Ok(())
}

/// Print the board and the letter keyboard for `game`
pub fn show_board(game: &Game) {
    for row in board_rows(game.history()) {
        println!("{}", centered(&row, NUM_LETTERS, SCREEN_WIDTH));
    }
    println!();
    println!(
        "{}",
        centered(&keyboard_line(game.knowledge()), ALPHABET_LEN, SCREEN_WIDTH)
    );
}

/// Final message for a finished (or abandoned) game, without styling
#[must_use]
pub fn game_over_text(game: &Game) -> String {
    let secret = game.secret().text();
    match game.outcome() {
        Outcome::Won => format!("Correct, the word is {secret}"),
        Outcome::Lost | Outcome::InProgress => format!("Sorry, the word was {secret}"),
    }
}

/// [`game_over_text`] on a green (win) or red background
#[must_use]
pub fn game_over_message(game: &Game) -> String {
    let text = game_over_text(game).bold().white();
    if game.outcome() == Outcome::Won {
        text.on_green().to_string()
    } else {
        text.on_red().to_string()
    }
}

/// Redraw the screen with the final board and the result
///
/// # Errors
///
/// Returns an error if the terminal cannot be written to.
pub fn print_game_over(game: &Game) -> io::Result<()> {
    refresh_page("Game Over")?;
    show_board(game);
    println!("\n{}", game_over_message(game));
    Ok(())
}

/// Print a recoverable input problem
pub fn print_warning(message: &str) {
    println!("{}", message.black().on_yellow());
}
