//! Command implementations

pub mod input;
pub mod simple;

pub use input::{Rejection, normalize, play_line};
pub use simple::{LineInput, Lines, run_simple};
