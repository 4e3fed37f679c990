//! Move application.

use crate::bits::line_presence;
use crate::board::{Board, Move, Side};
use crate::constants::ZONE_ANY;

/// Play `mv` for `side` and return the resulting board.
///
/// Marks the zone won if the move completes a line in it, then sends the
/// opponent to the zone matching the cell just played, or lets them play
/// anywhere when that zone is full or decided. `mv` must be legal.
pub fn apply_move(board: Board, mv: Move, side: Side) -> Board {
    let mut next = board;
    let zone = mv / 9;

    next.set_cell(mv, side);
    if line_presence(next.chunk(zone, side)) {
        next.set_zone_won(zone, side);
    }

    let target = mv % 9;
    next.set_forced_zone(if next.is_zone_closed(target) {
        ZONE_ANY
    } else {
        target
    });
    next
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::movegen::generate_moves;

    #[test]
    fn test_first_move() {
        let board = Board::new();
        let next = apply_move(board, 40, Side::X);
        assert_eq!(next.cell(40), Some(Side::X));
        assert_eq!(next.forced_zone(), Some(4));
        // The input is untouched
        assert_eq!(board, Board::new());
    }

    #[test]
    fn test_shared_zone_move() {
        let next = apply_move(Board::new(), 79, Side::O); // SE/s
        assert_eq!(next.cell(79), Some(Side::O));
        assert_eq!(next.chunk(8, Side::O), 1 << 7);
        assert_eq!(next.forced_zone(), Some(7));
    }

    #[test]
    fn test_winning_zone_sets_large_bit() {
        let mut board = Board::new();
        board = apply_move(board, 72, Side::X); // SE/nw
        board = apply_move(board, 0, Side::O);
        board = apply_move(board, 76, Side::X); // SE/c
        board = apply_move(board, 36, Side::O);
        assert_eq!(board.zone_owner(8), None);
        board = apply_move(board, 80, Side::X); // SE/se completes the diagonal
        assert_eq!(board.zone_owner(8), Some(Side::X));
        assert_eq!(board.large(Side::X), 1 << 8);
        // Sent to SE, which is now won
        assert_eq!(board.forced_zone(), None);
    }

    #[test]
    fn test_full_target_zone_frees_choice() {
        // Fill zone N without a line: x o x / x o o / o x x
        let mut board = Board::new();
        let pattern = [
            Side::X,
            Side::O,
            Side::X,
            Side::X,
            Side::O,
            Side::O,
            Side::O,
            Side::X,
            Side::X,
        ];
        for (cell, side) in pattern.iter().enumerate() {
            board.set_cell(9 + cell, *side);
        }
        assert_eq!(board.zone_owner(1), None);
        let next = apply_move(board, 1, Side::X); // NW/n points at N
        assert_eq!(next.forced_zone(), None);
        let next = apply_move(board, 2, Side::X); // NW/ne points at NE
        assert_eq!(next.forced_zone(), Some(2));
    }

    #[test]
    fn test_apply_every_opening_move() {
        for &mv in generate_moves(&Board::new()).iter() {
            let next = apply_move(Board::new(), mv, Side::X);
            assert_eq!(next.stone_count(), 1);
            assert_eq!(next.forced_zone(), Some(mv % 9));
            assert_eq!(generate_moves(&next).len(), if mv % 9 == mv / 9 { 8 } else { 9 });
        }
    }
}
