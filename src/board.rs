//! Bit-packed Ultimate Tic-Tac-Toe board.
//!
//! A [`Board`] is three `u64` words:
//!
//! | word    | bits   | contents                                  |
//! |---------|--------|-------------------------------------------|
//! | `us`    | 0..63  | X cells of zones NW..SW, 9 bits per zone  |
//! | `them`  | 0..63  | O cells of zones NW..SW, 9 bits per zone  |
//! | `share` | 0..18  | X cells of zones S and SE                 |
//! | `share` | 18..36 | O cells of zones S and SE                 |
//! | `share` | 36..45 | zones won by X (the large grid)           |
//! | `share` | 45..54 | zones won by O                            |
//! | `share` | 54..58 | forced zone, 0-8 or [`ZONE_ANY`]          |
//!
//! Every other bit is unused and masked off on read. The raw words never
//! leave this module; the rest of the crate goes through the accessors.

use crate::bits::{CHUNK, DBLCHUNK, ZONE_FIELD, ZONE_SHIFT, line_presence};
use crate::constants::{MAX_PLY, ZONE_ANY};

/// A cell index in `0..81`, equal to `9 * zone + cell_in_zone`.
pub type Move = usize;

/// Offset of the large grid inside `share`.
const LARGE_SHIFT: u32 = 36;

/// First zone stored in `share` rather than `us`/`them`.
const SHARED_ZONE: usize = 7;

/// One of the two players. X moves first.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    X,
    O,
}

impl Side {
    /// The opponent.
    #[inline]
    pub const fn other(self) -> Side {
        match self {
            Side::X => Side::O,
            Side::O => Side::X,
        }
    }

    /// 0 for X, 1 for O.
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Side::X => 0,
            Side::O => 1,
        }
    }

    /// Multiplier turning an X-relative score into one relative to `self`.
    #[inline]
    pub const fn sign(self) -> i32 {
        match self {
            Side::X => 1,
            Side::O => -1,
        }
    }

    /// Lowercase glyph used by position strings.
    pub const fn glyph(self) -> char {
        match self {
            Side::X => 'x',
            Side::O => 'o',
        }
    }
}

/// Immutable game state. Cheap to copy; operations return new values.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Board {
    us: u64,
    them: u64,
    share: u64,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// The starting position: no cells occupied, any zone playable.
    pub const fn new() -> Self {
        Board {
            us: 0,
            them: 0,
            share: (ZONE_ANY as u64) << ZONE_SHIFT,
        }
    }

    /// Build a board from per-cell occupancy and a forced zone (`None` = any).
    ///
    /// The large grid is derived from the cells. The forced zone is stored
    /// as given.
    pub fn from_cells(cells: &[Option<Side>; MAX_PLY], forced: Option<usize>) -> Self {
        let mut board = Board::new();
        for (mv, cell) in cells.iter().enumerate() {
            if let Some(side) = *cell {
                board.set_cell(mv, side);
            }
        }
        for zone in 0..9 {
            if line_presence(board.chunk(zone, Side::X)) {
                board.set_zone_won(zone, Side::X);
            } else if line_presence(board.chunk(zone, Side::O)) {
                board.set_zone_won(zone, Side::O);
            }
        }
        board.set_forced_zone(forced.unwrap_or(ZONE_ANY));
        board
    }

    /// The 9-bit occupancy of `zone` for `side`.
    #[inline]
    pub fn chunk(&self, zone: usize, side: Side) -> u64 {
        if zone < SHARED_ZONE {
            let word = match side {
                Side::X => self.us,
                Side::O => self.them,
            };
            (word >> (9 * zone)) & CHUNK
        } else {
            (self.share >> (9 * (zone - SHARED_ZONE) + 18 * side.index())) & CHUNK
        }
    }

    /// The 9-bit occupancy of `zone` by either side.
    #[inline]
    pub fn occupied(&self, zone: usize) -> u64 {
        self.chunk(zone, Side::X) | self.chunk(zone, Side::O)
    }

    /// Evaluation-table index for `zone`: `(O cells << 9) | X cells`.
    #[inline]
    pub fn zone_pair(&self, zone: usize) -> usize {
        ((self.chunk(zone, Side::O) << 9) | self.chunk(zone, Side::X)) as usize
    }

    /// The zones won by `side`.
    #[inline]
    pub fn large(&self, side: Side) -> u64 {
        (self.share >> (LARGE_SHIFT as usize + 9 * side.index())) & CHUNK
    }

    /// Evaluation-table index for the large grid, laid out like [`Board::zone_pair`].
    #[inline]
    pub fn large_pair(&self) -> usize {
        ((self.share >> LARGE_SHIFT) & DBLCHUNK) as usize
    }

    /// The zones won by either side.
    #[inline]
    pub fn decided_zones(&self) -> u64 {
        self.large(Side::X) | self.large(Side::O)
    }

    /// Whether either side has completed a line on the large grid.
    #[inline]
    pub fn is_game_won(&self) -> bool {
        line_presence(self.large(Side::X)) || line_presence(self.large(Side::O))
    }

    /// Raw forced-zone field: 0-8, or [`ZONE_ANY`].
    #[inline]
    pub fn zone_field(&self) -> usize {
        ((self.share & ZONE_FIELD) >> ZONE_SHIFT) as usize
    }

    /// The zone the next move must be played in, or `None` for any open zone.
    #[inline]
    pub fn forced_zone(&self) -> Option<usize> {
        match self.zone_field() {
            ZONE_ANY => None,
            zone => Some(zone),
        }
    }

    /// Who occupies cell `mv`, if anyone.
    pub fn cell(&self, mv: Move) -> Option<Side> {
        let (zone, bit) = (mv / 9, mv % 9);
        if (self.chunk(zone, Side::X) >> bit) & 1 == 1 {
            Some(Side::X)
        } else if (self.chunk(zone, Side::O) >> bit) & 1 == 1 {
            Some(Side::O)
        } else {
            None
        }
    }

    /// Who has won `zone`, if anyone.
    pub fn zone_owner(&self, zone: usize) -> Option<Side> {
        if (self.large(Side::X) >> zone) & 1 == 1 {
            Some(Side::X)
        } else if (self.large(Side::O) >> zone) & 1 == 1 {
            Some(Side::O)
        } else {
            None
        }
    }

    /// Whether `zone` can no longer be played in: full, or won by either side.
    #[inline]
    pub fn is_zone_closed(&self, zone: usize) -> bool {
        self.occupied(zone) == CHUNK || (self.decided_zones() >> zone) & 1 == 1
    }

    /// Number of occupied cells.
    pub fn stone_count(&self) -> u32 {
        (0..9).map(|zone| self.occupied(zone).count_ones()).sum()
    }

    #[inline]
    pub(crate) fn set_cell(&mut self, mv: Move, side: Side) {
        if mv < 9 * SHARED_ZONE {
            match side {
                Side::X => self.us |= 1 << mv,
                Side::O => self.them |= 1 << mv,
            }
        } else {
            self.share |= 1 << (mv - 9 * SHARED_ZONE + 18 * side.index());
        }
    }

    #[inline]
    pub(crate) fn set_zone_won(&mut self, zone: usize, side: Side) {
        self.share |= 1 << (LARGE_SHIFT as usize + 9 * side.index() + zone);
    }

    /// Overwrite the forced-zone nibble, preserving every other bit of `share`.
    #[inline]
    pub(crate) fn set_forced_zone(&mut self, zone: usize) {
        self.share = (self.share & !ZONE_FIELD) | ((zone as u64) << ZONE_SHIFT);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board() {
        let board = Board::new();
        assert_eq!(board.forced_zone(), None);
        assert_eq!(board.zone_field(), ZONE_ANY);
        assert_eq!(board.stone_count(), 0);
        assert_eq!(board.large_pair(), 0);
        assert!((0..81).all(|mv| board.cell(mv).is_none()));
    }

    #[test]
    fn test_set_cell_every_zone() {
        for mv in 0..81 {
            for side in [Side::X, Side::O] {
                let mut board = Board::new();
                board.set_cell(mv, side);
                assert_eq!(board.cell(mv), Some(side), "move {mv}");
                assert_eq!(board.chunk(mv / 9, side), 1 << (mv % 9));
                assert_eq!(board.chunk(mv / 9, side.other()), 0);
                assert_eq!(board.stone_count(), 1);
                assert_eq!(board.zone_field(), ZONE_ANY, "zone field clobbered by {mv}");
            }
        }
    }

    #[test]
    fn test_zone_pair_layout() {
        let mut board = Board::new();
        board.set_cell(63, Side::X); // S/nw
        board.set_cell(72 + 8, Side::O); // SE/se
        assert_eq!(board.zone_pair(7), 1);
        assert_eq!(board.zone_pair(8), 1 << 17);
    }

    #[test]
    fn test_large_grid_bits() {
        let mut board = Board::new();
        board.set_zone_won(4, Side::X);
        board.set_zone_won(8, Side::O);
        assert_eq!(board.large(Side::X), 1 << 4);
        assert_eq!(board.large(Side::O), 1 << 8);
        assert_eq!(board.large_pair(), (1 << 4) | (1 << 17));
        assert_eq!(board.zone_owner(4), Some(Side::X));
        assert_eq!(board.zone_owner(8), Some(Side::O));
        assert_eq!(board.zone_owner(0), None);
        assert!(board.is_zone_closed(4));
        assert!(!board.is_game_won());
    }

    #[test]
    fn test_forced_zone_preserves_share() {
        let mut board = Board::new();
        board.set_cell(80, Side::O);
        board.set_zone_won(2, Side::X);
        board.set_forced_zone(5);
        assert_eq!(board.forced_zone(), Some(5));
        assert_eq!(board.cell(80), Some(Side::O));
        assert_eq!(board.zone_owner(2), Some(Side::X));
        board.set_forced_zone(ZONE_ANY);
        assert_eq!(board.forced_zone(), None);
    }

    #[test]
    fn test_from_cells_marks_won_zones() {
        let mut cells = [None; MAX_PLY];
        // X takes the top row of SE, O the diagonal of NW
        for mv in [72, 73, 74] {
            cells[mv] = Some(Side::X);
        }
        for mv in [0, 4, 8] {
            cells[mv] = Some(Side::O);
        }
        let board = Board::from_cells(&cells, Some(3));
        assert_eq!(board.zone_owner(8), Some(Side::X));
        assert_eq!(board.zone_owner(0), Some(Side::O));
        assert_eq!(board.forced_zone(), Some(3));
        assert_eq!(board.stone_count(), 6);
    }

    #[test]
    fn test_side_helpers() {
        assert_eq!(Side::X.other(), Side::O);
        assert_eq!(Side::O.other(), Side::X);
        assert_eq!(Side::X.sign() + Side::O.sign(), 0);
        assert_eq!(Side::O.index(), 1);
        assert_eq!(Side::X.glyph(), 'x');
    }
}
