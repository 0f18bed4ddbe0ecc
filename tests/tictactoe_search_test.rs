//! Whole-tree properties of the tic-tac-toe search.

use perfect_play::{
    Board, Mark, Minimax, Outcome, Players, Position, Pruning, WIN_SCORE, choose_move,
    choose_move_with, evaluate_moves, outcome,
};
use std::collections::HashSet;

/// Every unfinished board reachable from an empty board when `first` opens,
/// paired with the mark to move.
fn reachable_positions(first: Mark) -> Vec<(Board, Mark)> {
    fn walk(board: &mut Board, to_move: Mark, seen: &mut HashSet<Board>, out: &mut Vec<(Board, Mark)>) {
        if outcome(board).is_some() || !seen.insert(board.clone()) {
            return;
        }
        out.push((board.clone(), to_move));
        for pos in Position::valid_moves(board) {
            board.place(pos, to_move);
            walk(board, to_move.opponent(), seen, out);
            board.clear(pos);
        }
    }

    let mut seen = HashSet::new();
    let mut out = Vec::new();
    walk(&mut Board::new(), first, &mut seen, &mut out);
    out
}

#[test]
fn test_reachable_position_count() {
    // Unfinished positions of a game opened by X.
    assert_eq!(reachable_positions(Mark::X).len(), 4520);
}

#[test]
fn test_scores_stay_in_bounds() {
    for first in [Mark::X, Mark::O] {
        for (mut board, to_move) in reachable_positions(first) {
            for maximizing in [true, false] {
                let ai = if maximizing { to_move } else { to_move.opponent() };
                let mut searcher = Minimax::new(Players::ai_plays(ai));
                let score = searcher.search(&mut board, 0, maximizing, i32::MIN, i32::MAX);
                assert!(
                    (-WIN_SCORE..=WIN_SCORE).contains(&score),
                    "score {} out of range for {}",
                    score,
                    board.to_notation()
                );
            }
        }
    }
}

#[test]
fn test_pruning_never_changes_the_choice() {
    for (mut board, to_move) in reachable_positions(Mark::X) {
        let players = Players::ai_plays(to_move);
        let pruned = choose_move_with(&mut board, players, Pruning::AlphaBeta);
        let plain = choose_move_with(&mut board, players, Pruning::Disabled);
        assert_eq!(pruned, plain, "board {}", board.to_notation());
    }
}

#[test]
fn test_pruning_never_changes_root_scores() {
    let mut board: Board = "X...O....".parse().unwrap();
    let players = Players::ai_plays(Mark::X);
    assert_eq!(
        evaluate_moves(&mut board, players, Pruning::AlphaBeta),
        evaluate_moves(&mut board, players, Pruning::Disabled)
    );
}

#[test]
fn test_search_leaves_board_untouched() {
    for (board, to_move) in reachable_positions(Mark::O).into_iter().step_by(7) {
        let mut scratch = board.clone();
        choose_move(&mut scratch, to_move, to_move.opponent());
        assert_eq!(scratch, board);

        let mut searcher = Minimax::new(Players::ai_plays(to_move));
        searcher.search(&mut scratch, 0, true, i32::MIN, i32::MAX);
        assert_eq!(scratch, board);
    }
}

#[test]
fn test_chosen_move_has_maximal_score() {
    for (mut board, to_move) in reachable_positions(Mark::X).into_iter().step_by(11) {
        let players = Players::ai_plays(to_move);
        let scores = evaluate_moves(&mut board, players, Pruning::AlphaBeta);
        let best = scores.iter().map(|s| s.score).max().unwrap();

        let chosen = choose_move(&mut board, to_move, to_move.opponent()).unwrap();
        let first_best = scores.iter().find(|s| s.score == best).unwrap();
        assert_eq!(chosen, first_best.position);
    }
}

/// Plays the engine against every possible sequence of human replies and
/// returns the outcomes reached.
fn all_outcomes(board: &mut Board, players: Players, ai_turn: bool, out: &mut Vec<Outcome>) {
    if let Some(result) = outcome(board) {
        out.push(result);
        return;
    }

    if ai_turn {
        let pos = choose_move(board, players.ai(), players.human()).unwrap();
        board.place(pos, players.ai());
        all_outcomes(board, players, false, out);
        board.clear(pos);
    } else {
        for pos in Position::valid_moves(board) {
            board.place(pos, players.human());
            all_outcomes(board, players, true, out);
            board.clear(pos);
        }
    }
}

#[test]
fn test_engine_never_loses() {
    for ai in [Mark::X, Mark::O] {
        for ai_first in [true, false] {
            let players = Players::ai_plays(ai);
            let mut outcomes = Vec::new();
            all_outcomes(&mut Board::new(), players, ai_first, &mut outcomes);

            assert!(!outcomes.is_empty());
            assert!(
                outcomes
                    .iter()
                    .all(|o| *o != Outcome::Winner(players.human())),
                "engine lost as {} (moving first: {})",
                ai,
                ai_first
            );
            // A weak opponent gets punished somewhere in the tree.
            assert!(outcomes.contains(&Outcome::Winner(ai)));
        }
    }
}

#[test]
fn test_engine_against_itself_draws() {
    for first in [Mark::X, Mark::O] {
        let mut board = Board::new();
        let mut to_move = first;
        while outcome(&board).is_none() {
            let pos = choose_move(&mut board, to_move, to_move.opponent()).unwrap();
            board.place(pos, to_move);
            to_move = to_move.opponent();
        }
        assert_eq!(outcome(&board), Some(Outcome::Draw));
    }
}

#[test]
fn test_blocks_or_wins_from_known_position() {
    // X O X / X O . / . . .  with the engine playing O.
    let mut board: Board = "XOXXO....".parse().unwrap();
    let pos = choose_move(&mut board, Mark::O, Mark::X).unwrap();
    board.place(pos, Mark::O);
    assert_eq!(outcome(&board), Some(Outcome::Winner(Mark::O)));
}

#[test]
fn test_empty_board_choice_is_optimal() {
    let mut board = Board::new();
    let scores = evaluate_moves(&mut board, Players::ai_plays(Mark::X), Pruning::AlphaBeta);
    let best = scores.iter().map(|s| s.score).max().unwrap();
    let chosen = choose_move(&mut board, Mark::X, Mark::O).unwrap();
    assert_eq!(
        scores.iter().find(|s| s.position == chosen).unwrap().score,
        best
    );
    assert_eq!(board, Board::new());
}
