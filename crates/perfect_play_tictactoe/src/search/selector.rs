//! Root move selection.

use super::minimax::{INFINITY, Minimax, NEG_INFINITY, Pruning};
use crate::{Board, Mark, Players, Position};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Search score of one candidate move at the decision root.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MoveScore {
    /// Where the AI would place its mark.
    pub position: Position,
    /// Exact minimax score after that placement, from the AI's perspective.
    pub score: i32,
}

impl MoveScore {
    /// The highest-scoring candidate; the earliest one wins a tie.
    pub fn best(candidates: &[MoveScore]) -> Option<MoveScore> {
        let mut best: Option<MoveScore> = None;
        for candidate in candidates {
            if best.is_none_or(|b| candidate.score > b.score) {
                best = Some(*candidate);
            }
        }
        best
    }
}

impl Minimax {
    /// Scores every empty square as the AI's next move, in index order.
    ///
    /// Each candidate is searched with a full window, so every score is
    /// exact whether or not pruning is enabled.
    pub fn evaluate_moves(&mut self, board: &mut Board) -> Vec<MoveScore> {
        let ai = self.players().ai();
        let mut scores = Vec::new();

        for position in Position::ALL {
            if !board.is_empty(position) {
                continue;
            }

            board.place(position, ai);
            let score = self.search(board, 0, false, NEG_INFINITY, INFINITY);
            board.clear(position);

            scores.push(MoveScore { position, score });
        }

        scores
    }

    /// Picks the AI's best move, or `None` on a full board.
    ///
    /// Ties go to the lowest index: a later candidate replaces the current
    /// best only with a strictly greater score.
    pub fn choose_move(&mut self, board: &mut Board) -> Option<Position> {
        let best = MoveScore::best(&self.evaluate_moves(board));

        let stats = self.stats();
        debug!(
            best = ?best,
            nodes = stats.nodes,
            cutoffs = stats.cutoffs,
            "Move selected"
        );
        best.map(|b| b.position)
    }
}

/// Chooses the optimal move for `ai_mark` against `human_mark`.
///
/// The board must be well formed; it is returned unchanged.
#[instrument(skip(board), fields(board = %board.to_notation()))]
pub fn choose_move(board: &mut Board, ai_mark: Mark, human_mark: Mark) -> Option<Position> {
    choose_move_with(board, Players::new(ai_mark, human_mark), Pruning::AlphaBeta)
}

/// [`choose_move`] with an explicit player assignment and pruning mode.
#[instrument(skip(board), fields(board = %board.to_notation()))]
pub fn choose_move_with(board: &mut Board, players: Players, pruning: Pruning) -> Option<Position> {
    Minimax::new(players).with_pruning(pruning).choose_move(board)
}

/// Root scores of every candidate move.
#[instrument(skip(board), fields(board = %board.to_notation()))]
pub fn evaluate_moves(board: &mut Board, players: Players, pruning: Pruning) -> Vec<MoveScore> {
    Minimax::new(players).with_pruning(pruning).evaluate_moves(board)
}
