//! Legal move generation under the forced-zone rule.

use std::ops::Deref;

use crate::bits::CHUNK;
use crate::board::{Board, Move};
use crate::constants::MAX_PLY;

/// A fixed-capacity list of moves, kept off the heap for the search.
#[derive(Clone)]
pub struct MoveList {
    moves: [Move; MAX_PLY],
    len: usize,
}

impl Default for MoveList {
    fn default() -> Self {
        Self::new()
    }
}

impl MoveList {
    pub const fn new() -> Self {
        MoveList {
            moves: [0; MAX_PLY],
            len: 0,
        }
    }

    #[inline]
    fn push(&mut self, mv: Move) {
        self.moves[self.len] = mv;
        self.len += 1;
    }

    /// Append the empty cells of `zone` in ascending order.
    #[inline]
    fn push_empty_cells(&mut self, board: &Board, zone: usize) {
        let mut empty = !board.occupied(zone) & CHUNK;
        while empty != 0 {
            self.push(9 * zone + empty.trailing_zeros() as usize);
            empty &= empty - 1;
        }
    }
}

impl Deref for MoveList {
    type Target = [Move];

    fn deref(&self) -> &[Move] {
        &self.moves[..self.len]
    }
}

impl std::fmt::Debug for MoveList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// All legal moves in `board`, ascending.
///
/// Empty once either side has a line on the large grid. With a forced zone
/// only its empty cells are legal; otherwise every empty cell of every zone
/// not yet won.
pub fn generate_moves(board: &Board) -> MoveList {
    let mut list = MoveList::new();

    if board.is_game_won() {
        return list;
    }

    match board.forced_zone() {
        Some(zone) => list.push_empty_cells(board, zone),
        None => {
            let decided = board.decided_zones();
            for zone in (0..9).filter(|z| (decided >> z) & 1 == 0) {
                list.push_empty_cells(board, zone);
            }
        }
    }

    list
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Side;
    use crate::constants::ZONE_ANY;

    #[test]
    fn test_empty_board_all_moves() {
        let moves = generate_moves(&Board::new());
        assert_eq!(moves.len(), 81);
        assert!(moves.iter().copied().eq(0..81));
    }

    #[test]
    fn test_forced_zone_only() {
        let mut board = Board::new();
        board.set_cell(40, Side::X); // C/c
        board.set_forced_zone(4);
        let moves = generate_moves(&board);
        assert_eq!(&moves[..], &[36, 37, 38, 39, 41, 42, 43, 44]);
    }

    #[test]
    fn test_forced_shared_zone() {
        let mut board = Board::new();
        board.set_cell(72, Side::O);
        board.set_cell(80, Side::X);
        board.set_forced_zone(8);
        let moves = generate_moves(&board);
        assert_eq!(&moves[..], &[73, 74, 75, 76, 77, 78, 79]);
    }

    #[test]
    fn test_any_zone_skips_won_zones() {
        let mut board = Board::new();
        for mv in [0, 1, 2] {
            board.set_cell(mv, Side::X);
        }
        board.set_zone_won(0, Side::X);
        board.set_cell(9, Side::O);
        board.set_forced_zone(ZONE_ANY);
        let moves = generate_moves(&board);
        assert_eq!(moves.len(), 81 - 9 - 1);
        assert!(moves.iter().all(|&mv| mv >= 10));
        assert!(moves.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_won_game_has_no_moves() {
        let mut board = Board::new();
        for zone in [2, 4, 6] {
            board.set_zone_won(zone, Side::O);
        }
        assert!(generate_moves(&board).is_empty());
    }
}
