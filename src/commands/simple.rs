//! Simple line-based game mode
//!
//! Clears the screen each turn, prints the board and reads guesses from a
//! prompt.

use super::input::play_line;
use crate::game::{Game, Randomizer};
use crate::output::{print_game_over, print_warning, refresh_page, show_board};
use crate::wordlists::Dictionary;
use anyhow::Result;
use std::io::{self, BufRead, Write};
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;
use tracing::debug;

/// One read from the player
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineInput {
    Line(String),
    /// Ctrl-C
    Interrupted,
    /// End of input (Ctrl-D) or a read error
    Closed,
}

/// Player input: stdin lines merged with Ctrl-C
///
/// Lines are read on a background thread so an interrupt arrives even
/// while a read is blocked.
pub struct Lines {
    rx: Receiver<LineInput>,
}

impl Lines {
    /// Read from stdin and turn Ctrl-C into [`LineInput::Interrupted`]
    ///
    /// # Errors
    ///
    /// Returns an error if the interrupt handler cannot be installed.
    pub fn stdin() -> Result<Self> {
        let (tx, rx) = mpsc::channel();

        let interrupt = tx.clone();
        ctrlc::set_handler(move || {
            let _ = interrupt.send(LineInput::Interrupted);
        })?;

        thread::spawn(move || read_lines(io::stdin().lock(), &tx));
        Ok(Self { rx })
    }

    /// Wait for the next line; a dropped sender counts as closed input
    fn recv(&self) -> LineInput {
        self.rx.recv().unwrap_or(LineInput::Closed)
    }
}

impl From<Receiver<LineInput>> for Lines {
    fn from(rx: Receiver<LineInput>) -> Self {
        Self { rx }
    }
}

/// Forward lines from `input` without their line endings, then `Closed`
fn read_lines(mut input: impl BufRead, tx: &Sender<LineInput>) {
    loop {
        let mut line = String::new();
        match input.read_line(&mut line) {
            Ok(0) | Err(_) => break,
            Ok(_) => {
                let line = line.trim_end_matches(['\r', '\n']).to_string();
                if tx.send(LineInput::Line(line)).is_err() {
                    return;
                }
            }
        }
    }
    let _ = tx.send(LineInput::Closed);
}

/// Run the line-based game until the player declines a new game or input
/// stops
///
/// Ctrl-C or end of input (Ctrl-D) during a game ends it and reveals the
/// secret.
///
/// # Errors
///
/// Returns an error on terminal I/O failure or if no secret can be picked.
pub fn run_simple(dictionary: &Dictionary, randomizer: &mut Randomizer) -> Result<()> {
    let lines = Lines::stdin()?;

    loop {
        let mut game = Game::new(dictionary, randomizer)?;

        let finished = play_game(&mut game, dictionary, &lines)?;
        print_game_over(&game)?;
        if !finished {
            return Ok(());
        }

        match prompt(&lines, "\nPlay again? (yes/no)")? {
            LineInput::Line(answer) if matches!(answer.to_lowercase().as_str(), "yes" | "y") => {}
            _ => return Ok(()),
        }
    }
}

/// Play turns until the game ends; `false` if input stopped first
fn play_game(game: &mut Game, dictionary: &Dictionary, lines: &Lines) -> Result<bool> {
    while !game.outcome().is_terminal() {
        refresh_page(&format!("Guess {}", game.history().len() + 1))?;
        show_board(game);

        loop {
            let line = match prompt(lines, "\nGuess word")? {
                LineInput::Line(line) => line,
                stop => {
                    debug!(guesses = game.history().len(), reason = ?stop, "input stopped mid-game");
                    return Ok(false);
                }
            };
            match play_line(game, dictionary, &line) {
                Ok(_) => break,
                Err(rejection) => print_warning(&rejection.to_string()),
            }
        }
    }
    Ok(true)
}

/// Print a prompt and wait for the player
fn prompt(lines: &Lines, label: &str) -> io::Result<LineInput> {
    print!("{label}: ");
    io::stdout().flush()?;

    let input = lines.recv();
    if input == LineInput::Interrupted {
        println!();
    }
    Ok(input)
}
