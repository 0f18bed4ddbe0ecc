//! Adversarial search for tic-tac-toe.
//!
//! Exhaustive minimax with alpha-beta pruning. The game tree is small
//! enough (at most nine plies) to search completely, so there is no
//! depth limit and no heuristic evaluation: every leaf is a win, a loss
//! or a draw.

mod minimax;
mod selector;

pub use minimax::{INFINITY, Minimax, NEG_INFINITY, Pruning, SearchStats, WIN_SCORE};
pub use selector::{MoveScore, choose_move, choose_move_with, evaluate_moves};
