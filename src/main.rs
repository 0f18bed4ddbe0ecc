//! Perfect Play - unbeatable tic-tac-toe
//!
//! Interactive play, position analysis and self-play from one binary.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use perfect_play::{Board, GameConfig, GameSession, Mark, Pruning, analyze, self_play};
use std::io;
use std::path::PathBuf;
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Command::Play {
            config,
            mark,
            first,
            second,
            no_pruning,
        } => run_play(config, mark, first, second, no_pruning),
        Command::Analyze {
            board,
            ai,
            json,
            no_pruning,
        } => run_analyze(&board, ai, json, no_pruning),
        Command::Selfplay { first } => run_selfplay(first),
    }
}

/// Logs go to stderr so they never interleave with the board on stdout.
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// Run an interactive game on stdin/stdout
#[instrument]
fn run_play(
    config_path: Option<PathBuf>,
    mark: Option<Mark>,
    first: bool,
    second: bool,
    no_pruning: bool,
) -> Result<()> {
    let config = match config_path {
        Some(path) => GameConfig::from_file(&path)
            .with_context(|| format!("Loading {}", path.display()))?,
        None => GameConfig::default(),
    };

    let human_first = match (first, second) {
        (true, _) => Some(true),
        (_, true) => Some(false),
        _ => None,
    };
    let config = config.with_overrides(mark, human_first, no_pruning.then_some(false));
    info!(?config, "Starting interactive game");

    let mut session = GameSession::new(io::stdin().lock(), io::stdout(), config);
    session.run()?;
    Ok(())
}

/// Print the score of every candidate move
#[instrument]
fn run_analyze(board: &str, ai: Mark, json: bool, no_pruning: bool) -> Result<()> {
    let board: Board = board.parse().context("Invalid board")?;
    let pruning = if no_pruning {
        Pruning::Disabled
    } else {
        Pruning::AlphaBeta
    };

    let analysis = analyze(&board, ai, pruning);
    if json {
        println!("{}", serde_json::to_string_pretty(&analysis)?);
    } else {
        println!("{}", analysis);
    }
    Ok(())
}

/// Let the engine play both sides
#[instrument]
fn run_selfplay(first: Mark) -> Result<()> {
    let mut stdout = io::stdout().lock();
    self_play(first, Pruning::AlphaBeta, &mut stdout)?;
    Ok(())
}
