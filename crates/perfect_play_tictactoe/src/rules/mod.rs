//! Terminal-state rules for tic-tac-toe.
//!
//! Pure functions of a board snapshot. The search calls them at every node
//! to decide whether to stop recursing; the game loop calls them after every
//! move to decide whether play continues.

mod draw;
mod win;

pub use draw::{is_draw, is_full};
pub use win::{LINES, winner};

use super::{Board, Outcome};

/// Returns the outcome of a finished game, or `None` while play continues.
pub fn outcome(board: &Board) -> Option<Outcome> {
    if let Some(mark) = winner(board) {
        Some(Outcome::Winner(mark))
    } else if is_full(board) {
        Some(Outcome::Draw)
    } else {
        None
    }
}
