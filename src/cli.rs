//! Command-line interface for perfect_play.

use clap::{Parser, Subcommand};
use perfect_play::Mark;
use std::path::PathBuf;

/// Perfect Play - tic-tac-toe against an engine that never loses
#[derive(Parser, Debug)]
#[command(name = "perfect_play")]
#[command(about = "Unbeatable tic-tac-toe using minimax with alpha-beta pruning", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Log search details to stderr (overrides RUST_LOG)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play a game against the engine
    Play {
        /// Path to a TOML game config
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Your mark (X or O); asked for if not set here or in the config
        #[arg(short, long)]
        mark: Option<Mark>,

        /// Move first
        #[arg(long, conflicts_with = "second")]
        first: bool,

        /// Let the engine move first
        #[arg(long)]
        second: bool,

        /// Search without alpha-beta cutoffs
        #[arg(long)]
        no_pruning: bool,
    },

    /// Score every move the engine could make in a position
    Analyze {
        /// Nine cells in row-major order: X, O, and `.` for empty
        board: String,

        /// Mark the engine plays
        #[arg(long, default_value = "O")]
        ai: Mark,

        /// Emit JSON instead of a table
        #[arg(long)]
        json: bool,

        /// Search without alpha-beta cutoffs
        #[arg(long)]
        no_pruning: bool,
    },

    /// Watch the engine play itself
    Selfplay {
        /// Mark that moves first
        #[arg(long, default_value = "X")]
        first: Mark,
    },
}
