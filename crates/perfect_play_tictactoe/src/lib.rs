//! Pure tic-tac-toe game logic with an exhaustive adversarial search.
//!
//! The crate has two layers:
//!
//! - **Rules**: pure functions that decide whether a board is terminal
//!   ([`winner`], [`is_draw`], [`outcome`]).
//! - **Search**: minimax with alpha-beta pruning over the full game tree
//!   ([`Minimax`], [`choose_move`]), which never loses.
//!
//! # Example
//!
//! ```
//! use perfect_play_tictactoe::{choose_move, Board, Mark, Position};
//!
//! // O to move, and O can complete the middle column.
//! let mut board: Board = "XOXXO....".parse().unwrap();
//! let best = choose_move(&mut board, Mark::O, Mark::X);
//! assert_eq!(best, Some(Position::BottomCenter));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod outcome;
mod position;
mod rules;
mod search;
mod types;

pub use outcome::Outcome;
pub use position::Position;
pub use rules::{LINES, is_draw, is_full, outcome, winner};
pub use search::{
    INFINITY, MoveScore, Minimax, NEG_INFINITY, Pruning, SearchStats, WIN_SCORE, choose_move,
    choose_move_with, evaluate_moves,
};
pub use types::{Board, BoardParseError, Mark, Players, Square};
