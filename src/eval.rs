//! Static evaluation.

use crate::bits::CHUNK;
use crate::board::{Board, Side};
use crate::constants::{OUTCOME_DRAW, OUTCOME_LOSS, OUTCOME_WIN};
use crate::tables::tables;

/// Heuristic score of `board` from `side`'s point of view.
///
/// A decided large grid scores [`OUTCOME_WIN`] or [`OUTCOME_LOSS`] and a full
/// undecided one [`OUTCOME_DRAW`]. Otherwise the large-grid entry is summed
/// with the zone entries of every zone still in play. Full and won zones are
/// skipped: they are already accounted for by the large grid.
pub fn evaluate(board: Board, side: Side) -> i32 {
    let t = tables();

    let large = t.large[board.large_pair()];
    if large == OUTCOME_WIN || large == OUTCOME_LOSS {
        return large * side.sign();
    }

    let decided = board.decided_zones();
    if decided == CHUNK {
        return OUTCOME_DRAW;
    }

    let total = (0..9)
        .filter(|&zone| (decided >> zone) & 1 == 0 && board.occupied(zone) != CHUNK)
        .map(|zone| t.small[board.zone_pair(zone)])
        .fold(large, |acc, x| acc + x);

    total * side.sign()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::apply::apply_move;
    use crate::constants::{CENTRE, CORNER, SMALL_ONE_COUNT};

    #[test]
    fn test_empty_board_is_even() {
        assert_eq!(evaluate(Board::new(), Side::X), 0);
        assert_eq!(evaluate(Board::new(), Side::O), 0);
    }

    #[test]
    fn test_single_centre_stone() {
        let board = apply_move(Board::new(), 40, Side::X);
        let expected = 4 * SMALL_ONE_COUNT + CENTRE;
        assert_eq!(evaluate(board, Side::X), expected);
        assert_eq!(evaluate(board, Side::O), -expected);
    }

    #[test]
    fn test_corner_beats_edge() {
        let corner = apply_move(Board::new(), 0, Side::X);
        let edge = apply_move(Board::new(), 1, Side::X);
        assert!(evaluate(corner, Side::X) > evaluate(edge, Side::X));
        assert_eq!(evaluate(corner, Side::X), 3 * SMALL_ONE_COUNT + CORNER);
    }

    #[test]
    fn test_won_game_sentinel() {
        let mut board = Board::new();
        for zone in [0, 4, 8] {
            board.set_zone_won(zone, Side::O);
        }
        assert_eq!(evaluate(board, Side::O), OUTCOME_WIN);
        assert_eq!(evaluate(board, Side::X), OUTCOME_LOSS);
    }

    #[test]
    fn test_full_large_grid_is_draw() {
        // x o x / x o o / o x x on the large grid
        let mut board = Board::new();
        for zone in [0, 2, 3, 7, 8] {
            board.set_zone_won(zone, Side::X);
        }
        for zone in [1, 4, 5, 6] {
            board.set_zone_won(zone, Side::O);
        }
        assert_eq!(evaluate(board, Side::X), OUTCOME_DRAW);
        assert_eq!(evaluate(board, Side::O), OUTCOME_DRAW);
    }

    #[test]
    fn test_won_zone_not_double_counted() {
        let mut board = Board::new();
        for mv in [0, 1, 2] {
            board.set_cell(mv, Side::X);
        }
        board.set_zone_won(0, Side::X);
        let t = tables();
        // Only the large-grid term remains: zone NW is decided
        assert_eq!(evaluate(board, Side::X), t.large[board.large_pair()]);
    }
}
