//! Grid-level bit masks and line detection.
//!
//! A grid is a 3x3 occupancy pattern stored in the low 9 bits of a `u64`,
//! row-major:
//!
//! ```text
//! 0 1 2      NW N  NE
//! 3 4 5  ->  W  C  E
//! 6 7 8      SW S  SE
//! ```
//!
//! The same layout is used for a zone's cells and for the large grid of zones.

/// One 3-bit line group.
pub const LINE: u64 = 0b111;

/// One 9-bit grid.
pub const CHUNK: u64 = 0b111_111_111;

/// Two adjacent grids: zones S and SE in `share`, or the X/O large-grid pair.
pub const DBLCHUNK: u64 = (CHUNK << 9) | CHUNK;

/// Bit offset of the forced-zone nibble inside `share`.
pub const ZONE_SHIFT: u32 = 54;

/// The forced-zone nibble inside `share`.
pub const ZONE_FIELD: u64 = 0b1111 << ZONE_SHIFT;

pub const CORNER_MASK: u64 = 0b101_000_101;
pub const EDGE_MASK: u64 = 0b010_101_010;
pub const CENTRE_MASK: u64 = 0b000_010_000;

/// Cell indices of the 8 lines: 3 rows, 3 columns, 2 diagonals.
pub const LINES: [[u32; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// For every 9-bit pattern, whether it contains a completed line.
static WINNING: [bool; 512] = {
    let mut table = [false; 512];
    let mut grid = 0;
    while grid < 512 {
        let mut i = 0;
        while i < LINES.len() {
            let [a, b, c] = LINES[i];
            let mask = (1 << a) | (1 << b) | (1 << c);
            if grid & mask == mask {
                table[grid] = true;
            }
            i += 1;
        }
        grid += 1;
    }
    table
};

/// Spread a grid into 8 consecutive 3-bit groups, one per entry of [`LINES`].
///
/// Bit `j` of group `i` is set when the `j`-th cell of line `i` is occupied,
/// so the population count of a group is the occupancy of that line.
#[inline]
pub const fn lines(grid: u64) -> u64 {
    let mut out = 0;
    let mut i = 0;
    while i < LINES.len() {
        let [a, b, c] = LINES[i];
        let group = ((grid >> a) & 1) | (((grid >> b) & 1) << 1) | (((grid >> c) & 1) << 2);
        out |= group << (3 * i);
        i += 1;
    }
    out
}

/// Whether the low 9 bits of `grid` contain a completed line.
///
/// Bits above the first chunk are ignored, so callers may pass a word that
/// has only been shifted into place.
#[inline]
pub fn line_presence(grid: u64) -> bool {
    WINNING[(grid & CHUNK) as usize]
}

/// Number of set bits in a 9-bit grid.
#[inline]
pub fn pop_count(grid: u64) -> i32 {
    (grid & CHUNK).count_ones() as i32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_masks_partition_grid() {
        assert_eq!(CORNER_MASK | EDGE_MASK | CENTRE_MASK, CHUNK);
        assert_eq!(CORNER_MASK & EDGE_MASK, 0);
        assert_eq!(pop_count(CORNER_MASK), 4);
        assert_eq!(pop_count(EDGE_MASK), 4);
        assert_eq!(pop_count(CENTRE_MASK), 1);
        assert_eq!(DBLCHUNK, 0x3ffff);
    }

    #[test]
    fn test_lines_full_grid() {
        // Every group is fully set on a full grid
        assert_eq!(lines(CHUNK), 0xff_ffff);
        assert_eq!(lines(0), 0);
    }

    #[test]
    fn test_lines_centre_counts() {
        // The centre lies on the middle row, middle column and both diagonals
        let l = lines(CENTRE_MASK);
        let groups: Vec<u64> = (0..8).map(|i| (l >> (3 * i)) & LINE).collect();
        let touched = groups.iter().filter(|&&g| g != 0).count();
        assert_eq!(touched, 4);
    }

    #[test]
    fn test_line_presence() {
        assert!(line_presence(0b000_000_111));
        assert!(line_presence(0b100_100_100));
        assert!(line_presence(0b100_010_001));
        assert!(line_presence(0b001_010_100));
        assert!(!line_presence(0b110_001_011));
        assert!(!line_presence(0));
        // Higher bits are masked off
        assert!(!line_presence(0b111 << 9));
    }

    #[test]
    fn test_line_presence_matches_lines() {
        for grid in 0..512u64 {
            let l = lines(grid);
            let full = (0..8).any(|i| (l >> (3 * i)) & LINE == LINE);
            assert_eq!(full, line_presence(grid), "grid {grid:09b}");
        }
    }
}
