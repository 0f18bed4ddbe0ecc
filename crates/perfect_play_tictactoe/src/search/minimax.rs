//! Minimax search with alpha-beta pruning.
//!
//! Scores are always from the AI's perspective: positive is good for the
//! AI, negative is good for the human. Terminal scores are biased by depth
//! so that faster wins and slower losses are preferred.

use crate::rules::{is_full, winner};
use crate::{Board, Players, Position};
use serde::{Deserialize, Serialize};
use tracing::trace;

/// Score of a win found at depth 0.
pub const WIN_SCORE: i32 = 10;

/// Initial alpha bound.
pub const NEG_INFINITY: i32 = i32::MIN;

/// Initial beta bound.
pub const INFINITY: i32 = i32::MAX;

/// Whether the search may cut off branches that cannot change the result.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
#[serde(rename_all = "kebab-case")]
pub enum Pruning {
    /// Alpha-beta cutoffs enabled.
    #[default]
    AlphaBeta,
    /// Plain minimax: every child is explored.
    Disabled,
}

/// Counters collected while searching.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStats {
    /// Nodes visited, terminal ones included.
    pub nodes: u64,
    /// Times the remaining siblings of a node were skipped.
    pub cutoffs: u64,
}

/// Minimax searcher for one player assignment.
///
/// The searcher owns no board. Callers lend it one by exclusive reference;
/// marks are placed and retracted depth-first, so the board comes back
/// unchanged from every call.
#[derive(Debug, Clone)]
pub struct Minimax {
    players: Players,
    pruning: Pruning,
    stats: SearchStats,
}

impl Minimax {
    /// Creates an alpha-beta searcher for `players`.
    pub fn new(players: Players) -> Self {
        Self {
            players,
            pruning: Pruning::default(),
            stats: SearchStats::default(),
        }
    }

    /// Sets the pruning mode.
    pub fn with_pruning(mut self, pruning: Pruning) -> Self {
        self.pruning = pruning;
        self
    }

    /// The player assignment being searched for.
    pub fn players(&self) -> Players {
        self.players
    }

    /// The pruning mode in use.
    pub fn pruning(&self) -> Pruning {
        self.pruning
    }

    /// Counters accumulated since creation or the last [`Minimax::reset_stats`].
    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    /// Zeroes the counters.
    pub fn reset_stats(&mut self) {
        self.stats = SearchStats::default();
    }

    /// Scores `board` with `maximizing` telling whether the AI is to move.
    ///
    /// `depth` is the number of plies already played below the decision
    /// root. `alpha` and `beta` are the bounds the maximizing and minimizing
    /// players can already guarantee; pass [`NEG_INFINITY`] and [`INFINITY`]
    /// for an exact score.
    ///
    /// The result lies in `[-WIN_SCORE, WIN_SCORE]` for any board reachable
    /// by alternating play.
    pub fn search(
        &mut self,
        board: &mut Board,
        depth: u8,
        maximizing: bool,
        mut alpha: i32,
        mut beta: i32,
    ) -> i32 {
        self.stats.nodes += 1;

        if let Some(score) = self.terminal_score(board, depth) {
            return score;
        }

        let mark = self.players.to_move(maximizing);
        let mut best = if maximizing { NEG_INFINITY } else { INFINITY };

        for pos in Position::ALL {
            if !board.is_empty(pos) {
                continue;
            }

            board.place(pos, mark);
            let score = self.search(board, depth + 1, !maximizing, alpha, beta);
            board.clear(pos);

            if maximizing {
                best = best.max(score);
                alpha = alpha.max(best);
            } else {
                best = best.min(score);
                beta = beta.min(best);
            }

            if self.pruning == Pruning::AlphaBeta && beta <= alpha {
                trace!(depth, ?pos, alpha, beta, "Cutoff");
                self.stats.cutoffs += 1;
                break;
            }
        }

        best
    }

    /// Score of a finished game, or `None` if play continues.
    fn terminal_score(&self, board: &Board, depth: u8) -> Option<i32> {
        let depth = i32::from(depth);
        match winner(board) {
            Some(mark) if mark == self.players.ai() => Some(WIN_SCORE - depth),
            Some(_) => Some(depth - WIN_SCORE),
            None if is_full(board) => Some(0),
            None => None,
        }
    }
}
