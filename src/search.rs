//! Fixed-depth negamax alpha-beta search.
//!
//! Scores are relative to the side to move. Decided games score
//! [`OUTCOME_WIN`] or [`OUTCOME_LOSS`] pulled towards zero by the number of
//! plies from the root, so a quicker win (or a slower loss) always compares
//! better. Heuristic scores stay well inside that band.

use crate::apply::apply_move;
use crate::board::{Board, Move, Side};
use crate::constants::{OUTCOME_DRAW, OUTCOME_LOSS, OUTCOME_WIN};
use crate::eval::evaluate;
use crate::movegen::generate_moves;
use crate::tables::tables;

/// Result of a search: score for the side to move and the best line found.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchResult {
    pub score: i32,
    /// Principal variation, starting with the move to play. Empty when the
    /// root has no legal moves or the depth is zero.
    pub pv: Vec<Move>,
}

/// Search `board` for `side` to `depth` plies with a full window.
pub fn search(board: Board, side: Side, depth: usize) -> SearchResult {
    let (score, pv) = alpha_beta(board, side, depth, 0, OUTCOME_LOSS, OUTCOME_WIN);
    SearchResult { score, pv }
}

/// Pull a decided score towards zero by the distance from the root.
#[inline]
fn mate_adjust(score: i32, ply: usize) -> i32 {
    match score {
        OUTCOME_WIN => OUTCOME_WIN - ply as i32,
        OUTCOME_LOSS => OUTCOME_LOSS + ply as i32,
        _ => score,
    }
}

/// Fail-hard negamax. `depth` is the remaining budget, `ply` the distance
/// from the root.
///
/// Moves are tried in ascending order and the best line only changes on a
/// strict improvement, so ties keep the lowest move.
pub fn alpha_beta(
    board: Board,
    side: Side,
    depth: usize,
    ply: usize,
    mut alpha: i32,
    beta: i32,
) -> (i32, Vec<Move>) {
    if depth == 0 {
        return (mate_adjust(evaluate(board, side), ply), Vec::new());
    }

    let moves = generate_moves(&board);

    if moves.is_empty() {
        // Game over: only the large grid matters
        let outcome = tables().large[board.large_pair()] * side.sign();
        return match outcome {
            OUTCOME_WIN | OUTCOME_LOSS => (mate_adjust(outcome, ply), Vec::new()),
            _ => (OUTCOME_DRAW, Vec::new()),
        };
    }

    let mut pv = Vec::new();

    for &mv in moves.iter() {
        let (child_score, child_line) = alpha_beta(
            apply_move(board, mv, side),
            side.other(),
            depth - 1,
            ply + 1,
            -beta,
            -alpha,
        );
        let score = -child_score;

        if score >= beta {
            return (beta, prepend(mv, child_line));
        }
        if score > alpha {
            alpha = score;
            pv = prepend(mv, child_line);
        }
    }

    (alpha, pv)
}

#[inline]
fn prepend(mv: Move, tail: Vec<Move>) -> Vec<Move> {
    let mut line = Vec::with_capacity(tail.len() + 1);
    line.push(mv);
    line.extend(tail);
    line
}
