//! Position analysis: the score of every move the AI could make.

use derive_getters::Getters;
use perfect_play_tictactoe::{
    Board, Mark, Minimax, MoveScore, Outcome, Players, Position, Pruning, SearchStats, outcome,
};
use serde::Serialize;
use tracing::{debug, instrument};

/// Root scores for one position, with the move the engine would play.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize)]
pub struct Analysis {
    /// Board in compact notation.
    board: String,
    /// Mark the engine plays.
    ai: Mark,
    /// Outcome if the position is already finished.
    outcome: Option<Outcome>,
    /// Every candidate move in index order.
    candidates: Vec<MoveScore>,
    /// Move the engine would choose.
    best: Option<Position>,
    /// Search counters for the whole analysis.
    stats: SearchStats,
}

/// Scores every empty square of `board` for `ai`.
///
/// A finished board has no candidates.
#[instrument(skip(board), fields(board = %board.to_notation()))]
pub fn analyze(board: &Board, ai: Mark, pruning: Pruning) -> Analysis {
    let mut scratch = board.clone();
    let result = outcome(&scratch);

    let mut searcher = Minimax::new(Players::ai_plays(ai)).with_pruning(pruning);
    let candidates = if result.is_some() {
        Vec::new()
    } else {
        searcher.evaluate_moves(&mut scratch)
    };

    let best = MoveScore::best(&candidates);
    debug!(?best, stats = ?searcher.stats(), "Analysis complete");

    Analysis {
        board: board.to_notation(),
        ai,
        outcome: result,
        candidates,
        best: best.map(|b| b.position),
        stats: searcher.stats(),
    }
}

impl std::fmt::Display for Analysis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Position {} with the AI playing {}", self.board, self.ai)?;
        if let Some(result) = &self.outcome {
            return write!(f, "Game over: {}", result);
        }

        for candidate in &self.candidates {
            let marker = if Some(candidate.position) == self.best {
                "  <- best"
            } else {
                ""
            };
            writeln!(
                f,
                "  {} ({:<13}) {:>4}{}",
                candidate.position.to_number(),
                candidate.position.label(),
                candidate.score,
                marker
            )?;
        }
        write!(
            f,
            "Searched {} nodes with {} cutoffs",
            self.stats.nodes, self.stats.cutoffs
        )
    }
}
