//! TUI application state and logic

use crate::commands::play_line;
use crate::config::{NUM_GUESSES, NUM_LETTERS};
use crate::game::{Game, GameError, Outcome, Randomizer};
use crate::output::display::{game_over_message, game_over_text};
use crate::wordlists::Dictionary;
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Application state
pub struct App<'a> {
    pub dictionary: &'a Dictionary,
    pub randomizer: Randomizer,
    pub game: Game,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
    pub input_mode: InputMode,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputMode {
    Guessing,
    GameOver,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

/// Results for the current session; nothing is persisted
#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
    /// Wins indexed by number of guesses used
    pub guess_distribution: [usize; NUM_GUESSES + 1],
}

impl Statistics {
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.total_games == 0 {
            0.0
        } else {
            self.games_won as f64 / self.total_games as f64 * 100.0
        }
    }
}

impl<'a> App<'a> {
    /// Create the app and start the first game
    ///
    /// # Errors
    ///
    /// Returns an error if no secret can be picked from `dictionary`.
    pub fn new(dictionary: &'a Dictionary, mut randomizer: Randomizer) -> Result<Self, GameError> {
        let game = Game::new(dictionary, &mut randomizer)?;

        let mut app = Self {
            dictionary,
            randomizer,
            game,
            input_buffer: String::new(),
            messages: Vec::new(),
            stats: Statistics::default(),
            should_quit: false,
            input_mode: InputMode::Guessing,
        };
        app.add_message(
            &format!("Guess the {NUM_LETTERS}-letter word in {NUM_GUESSES} tries."),
            MessageStyle::Info,
        );
        Ok(app)
    }

    /// Headline for the current screen
    #[must_use]
    pub fn headline(&self) -> String {
        match self.input_mode {
            InputMode::Guessing => format!("Guess {}", self.game.history().len() + 1),
            InputMode::GameOver => "Game Over".to_string(),
        }
    }

    /// Submit the input buffer as a guess
    pub fn submit(&mut self) {
        let line = std::mem::take(&mut self.input_buffer);

        let played = play_line(&mut self.game, self.dictionary, &line).map(|_| ());
        if let Err(rejection) = played {
            self.add_message(&rejection.to_string(), MessageStyle::Error);
            return;
        }

        if self.game.outcome().is_terminal() {
            self.finish_game();
        }
    }

    fn finish_game(&mut self) {
        self.stats.total_games += 1;
        if self.game.outcome() == Outcome::Won {
            self.stats.games_won += 1;
            self.stats.guess_distribution[self.game.history().len()] += 1;
        }

        let style = if self.game.outcome() == Outcome::Won {
            MessageStyle::Success
        } else {
            MessageStyle::Error
        };
        self.add_message(&game_over_text(&self.game), style);
        self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
        self.input_mode = InputMode::GameOver;
    }

    /// Start a new game with a fresh secret
    ///
    /// # Errors
    ///
    /// Returns an error if no secret can be picked.
    pub fn new_game(&mut self) -> Result<(), GameError> {
        self.game = Game::new(self.dictionary, &mut self.randomizer)?;
        self.input_buffer.clear();
        self.messages.clear();
        self.input_mode = InputMode::Guessing;
        self.add_message("New game started!", MessageStyle::Info);
        Ok(())
    }

    /// Message printed after the TUI closes
    ///
    /// `None` when the current game has no guesses yet, so an untouched
    /// secret is never revealed.
    #[must_use]
    pub fn farewell(&self) -> Option<String> {
        if self.game.history().is_empty() {
            None
        } else {
            Some(game_over_message(&self.game))
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }

    /// Apply one key press
    ///
    /// # Errors
    ///
    /// Returns an error if a new game cannot be started.
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return Ok(());
        }

        match self.input_mode {
            InputMode::GameOver => match key.code {
                KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
                KeyCode::Char('n') => self.new_game()?,
                _ => {}
            },
            InputMode::Guessing => match key.code {
                KeyCode::Esc => self.should_quit = true,
                KeyCode::Char(c) => {
                    if self.input_buffer.len() < NUM_LETTERS && c.is_ascii_alphabetic() {
                        self.input_buffer.push(c.to_ascii_lowercase());
                    }
                }
                KeyCode::Backspace => {
                    self.input_buffer.pop();
                }
                KeyCode::Enter => self.submit(),
                _ => {}
            },
        }
        Ok(())
    }
}

/// Run the TUI application
///
/// After the terminal is restored, the result of the last game is printed;
/// quitting mid-game reveals the secret unless no guess was made.
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    let app = res?;
    if let Some(message) = app.farewell() {
        println!("{message}");
    }
    Ok(())
}

fn run_app<'a, B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    mut app: App<'a>,
) -> Result<App<'a>> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }
            app.handle_key(key)?;
        }

        if app.should_quit {
            return Ok(app);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;
    use crate::wordlists::Language;

    fn dictionary() -> Dictionary {
        Dictionary::from_words(Language::En, ["slate"].map(|w| Word::new(w).unwrap()))
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE)).unwrap();
    }

    fn type_word(app: &mut App, word: &str) {
        for c in word.chars() {
            press(app, KeyCode::Char(c));
        }
        press(app, KeyCode::Enter);
    }

    #[test]
    fn typing_is_limited_and_lowercased() {
        let dict = dictionary();
        let mut app = App::new(&dict, Randomizer::new(Some(1))).unwrap();
        for c in "SLA7TES".chars() {
            press(&mut app, KeyCode::Char(c));
        }
        assert_eq!(app.input_buffer, "slate");
        press(&mut app, KeyCode::Backspace);
        assert_eq!(app.input_buffer, "slat");
    }

    #[test]
    fn winning_records_stats_and_waits_for_new_game() {
        let dict = dictionary();
        let mut app = App::new(&dict, Randomizer::new(Some(1))).unwrap();
        assert_eq!(app.headline(), "Guess 1");

        type_word(&mut app, "slate");
        assert_eq!(app.game.outcome(), Outcome::Won);
        assert_eq!(app.input_mode, InputMode::GameOver);
        assert_eq!(app.headline(), "Game Over");
        assert_eq!(app.stats.games_won, 1);
        assert_eq!(app.stats.guess_distribution[1], 1);
        assert!((app.stats.win_rate() - 100.0).abs() < f64::EPSILON);

        press(&mut app, KeyCode::Char('n'));
        assert_eq!(app.input_mode, InputMode::Guessing);
        assert!(app.game.history().is_empty());
    }

    #[test]
    fn rejected_guess_shows_error() {
        let dict = dictionary();
        let mut app = App::new(&dict, Randomizer::new(Some(1))).unwrap();
        type_word(&mut app, "abc");
        assert!(app.game.history().is_empty());
        assert!(app.input_buffer.is_empty());
        let last = app.messages.last().unwrap();
        assert_eq!(last.style, MessageStyle::Error);
        assert!(last.text.contains("5 letters"));
    }

    #[test]
    fn escape_and_ctrl_c_quit() {
        let dict = dictionary();
        let mut app = App::new(&dict, Randomizer::new(Some(1))).unwrap();
        press(&mut app, KeyCode::Esc);
        assert!(app.should_quit);

        let mut app = App::new(&dict, Randomizer::new(Some(1))).unwrap();
        app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL))
            .unwrap();
        assert!(app.should_quit);
        assert!(app.input_buffer.is_empty());
    }

    #[test]
    fn farewell_skips_untouched_game() {
        colored::control::set_override(false);
        let dict = dictionary();
        let mut app = App::new(&dict, Randomizer::new(Some(1))).unwrap();
        assert_eq!(app.farewell(), None);

        type_word(&mut app, "slate");
        assert_eq!(
            app.farewell().as_deref(),
            Some("Correct, the word is slate")
        );

        press(&mut app, KeyCode::Char('n'));
        press(&mut app, KeyCode::Char('q'));
        assert!(app.game.history().is_empty());
        assert_eq!(app.farewell(), None);
    }
}
