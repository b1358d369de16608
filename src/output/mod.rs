//! Terminal output formatting
//!
//! Colour-coded board, keyboard and end-of-game reporting for the
//! line-based front end.

pub mod display;
pub mod formatters;

pub use display::{print_game_over, print_warning, refresh_page, show_board};
