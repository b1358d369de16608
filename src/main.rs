//! Ruchle - CLI
//!
//! Terminal word-guessing game with a full-screen TUI and a simple
//! line-based mode.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use ruchle::{
    commands::run_simple,
    config::settings,
    game::Randomizer,
    interactive::{App, run_tui},
    wordlists::{Language, load},
};
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "ruchle",
    about = "Guess the hidden word in six tries",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Directory containing words_<lang>.txt dictionaries
    #[arg(short = 'd', long, global = true, env = "RUCHLE_DATA_DIR", default_value = "data")]
    data_dir: PathBuf,

    /// Dictionary language
    #[arg(short, long, global = true, env = "RUCHLE_LANG", value_enum, default_value = "es")]
    lang: Language,

    /// Seed for secret selection (same seed, same secrets)
    #[arg(long, global = true, env = "RUCHLE_SEED")]
    seed: Option<u64>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Full-screen TUI (default)
    Play,

    /// Line-based mode without TUI
    Simple,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // RUST_LOG wins over the verbosity flag
    let default_level = if cli.verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let dictionary = load(&cli.data_dir, cli.lang).with_context(|| {
        format!(
            "could not load the {} dictionary from {}",
            cli.lang,
            cli.data_dir.display()
        )
    })?;
    let (letters, guesses) = settings();
    debug!(words = dictionary.len(), letters, guesses, seed = ?cli.seed, "starting");

    let mut randomizer = Randomizer::new(cli.seed);

    // Default to Play mode if no command given
    match cli.command.unwrap_or(Commands::Play) {
        Commands::Play => run_tui(App::new(&dictionary, randomizer)?),
        Commands::Simple => run_simple(&dictionary, &mut randomizer),
    }
}
