//! TUI rendering with ratatui
//!
//! Board, keyboard and message panels for the game screen.

use super::app::{App, InputMode, MessageStyle};
use crate::config::{ALPHABET, NUM_GUESSES, NUM_LETTERS};
use crate::core::{Guess, LetterKnowledge, LetterStatus};
use crate::output::formatters::BLANK;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Length(NUM_GUESSES as u16 + 2), // Board
            Constraint::Length(3), // Keyboard
            Constraint::Length(3), // Input area
            Constraint::Min(4), // Messages
            Constraint::Length(1), // Status bar
        ])
        .split(f.area());

    render_header(f, app, chunks[0]);
    render_board(f, app, chunks[1]);
    render_keyboard(f, app.game.knowledge(), chunks[2]);
    render_input(f, app, chunks[3]);
    render_messages(f, app, chunks[4]);
    render_status(f, app, chunks[5]);
}

/// Tile style for a letter with the given status; `None` is unknown
fn status_style(status: Option<LetterStatus>) -> Style {
    match status {
        Some(LetterStatus::Correct) => Style::default()
            .fg(Color::White)
            .bg(Color::Green)
            .add_modifier(Modifier::BOLD),
        Some(LetterStatus::Present) => Style::default()
            .fg(Color::White)
            .bg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
        Some(LetterStatus::Absent) => Style::default().fg(Color::White).bg(Color::DarkGray),
        None => Style::default(),
    }
}

fn letter_span(letter: u8, status: Option<LetterStatus>) -> Span<'static> {
    Span::styled(format!(" {} ", (letter as char).to_ascii_uppercase()), status_style(status))
}

fn guess_line(guess: &Guess) -> Line<'static> {
    Line::from(
        guess
            .letters()
            .map(|(letter, status)| letter_span(letter, Some(status)))
            .collect::<Vec<_>>(),
    )
}

fn pending_line(typed: &str) -> Line<'static> {
    let spans: Vec<Span> = typed
        .chars()
        .chain(std::iter::repeat(BLANK))
        .take(NUM_LETTERS)
        .map(|c| {
            Span::styled(
                format!(" {} ", c.to_ascii_uppercase()),
                Style::default().add_modifier(Modifier::BOLD),
            )
        })
        .collect();
    Line::from(spans)
}

fn blank_line() -> Line<'static> {
    Line::styled(
        format!(" {BLANK} ").repeat(NUM_LETTERS),
        Style::default().fg(Color::DarkGray),
    )
}

fn render_header(f: &mut Frame, app: &App, area: Rect) {
    let header = Paragraph::new(app.headline())
        .style(Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Blue)),
        );
    f.render_widget(header, area);
}

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let history = app.game.history();
    let mut lines: Vec<Line> = history.iter().map(guess_line).collect();

    if app.input_mode == InputMode::Guessing && lines.len() < NUM_GUESSES {
        lines.push(pending_line(&app.input_buffer));
    }
    while lines.len() < NUM_GUESSES {
        lines.push(blank_line());
    }

    let board = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(format!(" {} left ", app.game.remaining()))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(board, area);
}

fn render_keyboard(f: &mut Frame, knowledge: &LetterKnowledge, area: Rect) {
    let spans: Vec<Span> = ALPHABET
        .bytes()
        .map(|letter| {
            Span::styled(
                (letter as char).to_string(),
                status_style(knowledge.get(letter)),
            )
        })
        .collect();

    let keyboard = Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .block(Block::default().title(" Letters ").borders(Borders::ALL));
    f.render_widget(keyboard, area);
}

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let (title, content, color) = match app.input_mode {
        InputMode::Guessing => (
            " Type your guess | Enter to submit | Esc to give up ",
            app.input_buffer.as_str(),
            Color::Yellow,
        ),
        InputMode::GameOver => (" Press 'n' for new game or 'q' to quit ", "", Color::Green),
    };

    let input = Paragraph::new(content)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(input, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let status = Paragraph::new(format!(
        "Games: {} | Won: {} | Win Rate: {:.0}%",
        app.stats.total_games,
        app.stats.games_won,
        app.stats.win_rate()
    ))
    .alignment(Alignment::Center)
    .style(Style::default().fg(Color::DarkGray));
    f.render_widget(status, area);
}
