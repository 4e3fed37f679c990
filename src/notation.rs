//! Text formats for moves, positions and scores, plus the ASCII board.
//!
//! ## Moves
//!
//! `<zone>/<cell>` with lowercase compass names, e.g. `c/ne`.
//!
//! ## Positions
//!
//! Two fields separated by whitespace. The first lists the 81 cells as 9
//! `/`-separated rows read left to right across the whole board, top to
//! bottom; `x` and `o` are stones and a digit is a run of that many empty
//! cells. The second names the forced zone, or `any`:
//!
//! ```text
//! 2x6/9/9/9/9/9/9/9/9 ne
//! ```
//!
//! ## Scores
//!
//! `W<n>` / `L<n>` for a win / loss in `n` plies, `D0` for a draw, and a
//! signed number otherwise.

use std::fmt;

use thiserror::Error;

use crate::board::{Board, Move, Side};
use crate::constants::{
    MAX_PLY, OUTCOME_DRAW, OUTCOME_LOSS, OUTCOME_WIN, ZONE_ANY, ZONE_NAMES, ZONE_NAMES_UPPER,
};

/// Rejected move or position text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NotationError {
    #[error("expected cells and zone fields, found {0} field(s)")]
    FieldCount(usize),
    #[error("expected 9 rows, found {0}")]
    RowCount(usize),
    #[error("row {row} covers {len} cells, expected 9")]
    RowLength { row: usize, len: usize },
    #[error("unexpected character {0:?} in cells")]
    BadCell(char),
    #[error("unknown zone {0:?}")]
    UnknownZone(String),
    #[error("move {0:?} is not of the form zone/cell")]
    MoveFormat(String),
    #[error("unknown zone or cell name in move {0:?}")]
    UnknownMoveToken(String),
}

/// Index of a lowercase compass name.
pub fn zone_from_name(name: &str) -> Option<usize> {
    ZONE_NAMES.iter().position(|&z| z == name)
}

/// The move played at visual row `row`, column `col` (both 0-8).
#[inline]
fn cell_at(row: usize, col: usize) -> Move {
    let zone = 3 * (row / 3) + col / 3;
    let cell = 3 * (row % 3) + col % 3;
    9 * zone + cell
}

/// Parse a `zone/cell` move string.
pub fn parse_move(s: &str) -> Result<Move, NotationError> {
    let (zone, cell) = s
        .split_once('/')
        .filter(|(_, cell)| !cell.contains('/'))
        .ok_or_else(|| NotationError::MoveFormat(s.to_string()))?;
    match (zone_from_name(zone), zone_from_name(cell)) {
        (Some(z), Some(c)) => Ok(9 * z + c),
        _ => Err(NotationError::UnknownMoveToken(s.to_string())),
    }
}

/// Format a move as `zone/cell`.
pub fn move_string(mv: Move) -> String {
    format!("{}/{}", ZONE_NAMES[mv / 9], ZONE_NAMES[mv % 9])
}

/// Space-separated move strings.
pub fn pv_string(pv: &[Move]) -> String {
    pv.iter().map(|&mv| move_string(mv)).collect::<Vec<_>>().join(" ")
}

/// Format a search score. `depth` bounds how far from the sentinels a
/// decided score can be.
pub fn eval_string(score: i32, depth: usize) -> String {
    let depth = depth as i32;
    if score <= OUTCOME_LOSS + depth {
        format!("L{}", score - OUTCOME_LOSS)
    } else if score >= OUTCOME_WIN - depth {
        format!("W{}", OUTCOME_WIN - score)
    } else if score == OUTCOME_DRAW {
        "D0".to_string()
    } else {
        format!("{score:+}")
    }
}

/// Parse a position string.
///
/// The large grid is recomputed from the cells; the forced zone is taken as
/// written.
pub fn parse_position(s: &str) -> Result<Board, NotationError> {
    let fields: Vec<&str> = s.split_whitespace().collect();
    let [cells_field, zone_field] = fields[..] else {
        return Err(NotationError::FieldCount(fields.len()));
    };

    let forced = match zone_field {
        "any" => None,
        name => Some(
            zone_from_name(name).ok_or_else(|| NotationError::UnknownZone(name.to_string()))?,
        ),
    };

    let rows: Vec<&str> = cells_field.split('/').collect();
    if rows.len() != 9 {
        return Err(NotationError::RowCount(rows.len()));
    }

    let mut cells = [None; MAX_PLY];
    for (row, text) in rows.iter().enumerate() {
        let mut col = 0;
        for c in text.chars() {
            let (occupant, run) = match c {
                'x' => (Some(Side::X), 1),
                'o' => (Some(Side::O), 1),
                '1'..='9' => (None, c as usize - '0' as usize),
                _ => return Err(NotationError::BadCell(c)),
            };
            for _ in 0..run {
                if col < 9 {
                    cells[cell_at(row, col)] = occupant;
                }
                col += 1;
            }
        }
        if col != 9 {
            return Err(NotationError::RowLength { row, len: col });
        }
    }

    Ok(Board::from_cells(&cells, forced))
}

/// Format a position string. Inverse of [`parse_position`].
pub fn position_string(board: &Board) -> String {
    let mut out = String::with_capacity(96);
    for row in 0..9 {
        if row > 0 {
            out.push('/');
        }
        let mut empty = 0;
        for col in 0..9 {
            match board.cell(cell_at(row, col)) {
                Some(side) => {
                    if empty > 0 {
                        out.push_str(&empty.to_string());
                        empty = 0;
                    }
                    out.push(side.glyph());
                }
                None => empty += 1,
            }
        }
        if empty > 0 {
            out.push_str(&empty.to_string());
        }
    }
    out.push(' ');
    out.push_str(match board.forced_zone() {
        Some(zone) => ZONE_NAMES[zone],
        None => "any",
    });
    out
}

fn glyph(side: Option<Side>) -> char {
    match side {
        Some(Side::X) => 'X',
        Some(Side::O) => 'O',
        None => '.',
    }
}

/// ASCII diagram: the 81 cells in zone blocks, the large grid, then the zone.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const RULE: &str = "---+---+---";

        writeln!(f, "{RULE}")?;
        for row in 0..9 {
            for col in 0..9 {
                if col > 0 && col % 3 == 0 {
                    write!(f, "|")?;
                }
                write!(f, "{}", glyph(self.cell(cell_at(row, col))))?;
            }
            writeln!(f)?;
            if row % 3 == 2 {
                writeln!(f, "{RULE}")?;
            }
        }
        for zone_row in 0..3 {
            for zone in 3 * zone_row..3 * zone_row + 3 {
                write!(f, "{}", glyph(self.zone_owner(zone)))?;
            }
            writeln!(f)?;
        }
        let zone = self.zone_field();
        write!(
            f,
            "ZONE: {}",
            if zone == ZONE_ANY {
                "ANY"
            } else {
                ZONE_NAMES_UPPER[zone]
            }
        )
    }
}
