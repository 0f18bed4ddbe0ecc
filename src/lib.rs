//! Perfect Play - unbeatable tic-tac-toe
//!
//! Application layer around the `perfect_play_tictactoe` search engine.
//!
//! # Architecture
//!
//! - **Config**: optional TOML file choosing marks, turn order and pruning
//! - **Session**: interactive game loop over any `BufRead`/`Write` pair
//! - **Analysis**: root scores of every candidate move for a position
//! - **Self-play**: the engine against itself
//!
//! # Example
//!
//! ```no_run
//! use perfect_play::{GameConfig, GameSession};
//! use std::io;
//!
//! # fn example() -> anyhow::Result<()> {
//! let config = GameConfig::default();
//! let mut session = GameSession::new(io::stdin().lock(), io::stdout(), config);
//! let outcome = session.run()?;
//! println!("{}", outcome);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod analysis;
mod config;
mod selfplay;
mod session;

// Crate-level exports - Analysis
pub use analysis::{Analysis, analyze};

// Crate-level exports - Configuration
pub use config::{ConfigError, GameConfig};

// Crate-level exports - Self-play
pub use selfplay::self_play;

// Crate-level exports - Interactive sessions
pub use session::{GameSession, MoveInputError, SessionError, guide, parse_human_move};

// Crate-level exports - Game types (tic-tac-toe)
pub use perfect_play_tictactoe::{
    Board, BoardParseError, LINES, Mark, Minimax, MoveScore, Outcome, Players, Position, Pruning,
    SearchStats, Square, WIN_SCORE, choose_move, choose_move_with, evaluate_moves, is_draw,
    is_full, outcome, winner,
};
