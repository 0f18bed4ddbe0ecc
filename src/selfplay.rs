//! The engine playing both sides.

use perfect_play_tictactoe::{Board, Mark, Outcome, Players, Pruning, choose_move_with, outcome};
use std::io::Write;
use tracing::{info, instrument};

/// Plays a full game with the engine on both sides, starting with `first`.
///
/// Each move and the final board are written to `out`. Optimal play from
/// both sides always ends in a draw.
#[instrument(skip(out))]
pub fn self_play(first: Mark, pruning: Pruning, out: &mut impl Write) -> std::io::Result<Outcome> {
    let mut board = Board::new();
    let mut to_move = first;

    let result = loop {
        if let Some(result) = outcome(&board) {
            break result;
        }

        let players = Players::ai_plays(to_move);
        let Some(pos) = choose_move_with(&mut board, players, pruning) else {
            break Outcome::Draw;
        };
        board.place(pos, to_move);
        writeln!(out, "{} plays {} ({})", to_move, pos.to_number(), pos)?;

        to_move = to_move.opponent();
    };

    writeln!(out)?;
    writeln!(out, "{}", board)?;
    writeln!(out)?;
    writeln!(out, "Result: {}", result)?;
    info!(%result, board = %board.to_notation(), "Self-play finished");

    Ok(result)
}
