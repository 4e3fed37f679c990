//! Precomputed partial evaluations of single grids.
//!
//! Every pair of 9-bit occupancy patterns (X cells, O cells) is scored once,
//! both as the large grid and as a zone. The tables are indexed by
//! `(o << 9) | x` and built lazily on first use, or eagerly via [`init_tables`].
//!
//! Entries are X-relative. A large-grid entry holding [`OUTCOME_WIN`] or
//! [`OUTCOME_LOSS`] marks a decided game; a full undecided grid holds
//! [`OUTCOME_DRAW`]. Small-grid entries for decided or full zones are zero and
//! never probed.

use std::sync::OnceLock;

use crate::bits::{CENTRE_MASK, CORNER_MASK, EDGE_MASK, LINE, lines, pop_count};
use crate::constants::{
    BIG_ONE_COUNT, BIG_TWO_COUNT, CENTRE, CORNER, EDGE, OUTCOME_DRAW, OUTCOME_LOSS, OUTCOME_WIN,
    SMALL_ONE_COUNT, SMALL_TWO_COUNT, SQ_BIG,
};

/// Number of entries in each table: every pair of 9-bit patterns.
pub const TABLE_SIZE: usize = 1 << 18;

/// The two lookup tables.
pub struct EvalTables {
    /// Large-grid scale: outcome sentinel, or line score + 25 * positional score.
    pub large: Box<[i32]>,
    /// Zone scale: line score + positional score.
    pub small: Box<[i32]>,
}

static TABLES: OnceLock<EvalTables> = OnceLock::new();

/// The process-wide tables, building them on first call.
#[inline]
pub fn tables() -> &'static EvalTables {
    TABLES.get_or_init(EvalTables::build)
}

/// Build the tables up front so the first search does not pay for it.
pub fn init_tables() {
    let _ = tables();
}

/// Index of an (X cells, O cells) pair in either table.
#[inline]
pub const fn table_index(x: u64, o: u64) -> usize {
    ((o << 9) | x) as usize
}

/// Outcome of scoring one grid.
enum GridScore {
    Won,
    Lost,
    Full,
    Open { lines_large: i32, lines_small: i32, position: i32 },
}

impl EvalTables {
    fn build() -> Self {
        let mut large = vec![0; TABLE_SIZE].into_boxed_slice();
        let mut small = vec![0; TABLE_SIZE].into_boxed_slice();

        for x in 0..512u64 {
            for o in 0..512u64 {
                let idx = table_index(x, o);
                match score_grid(x, o) {
                    GridScore::Won => large[idx] = OUTCOME_WIN,
                    GridScore::Lost => large[idx] = OUTCOME_LOSS,
                    GridScore::Full => large[idx] = OUTCOME_DRAW,
                    GridScore::Open {
                        lines_large,
                        lines_small,
                        position,
                    } => {
                        large[idx] = lines_large + position * SQ_BIG;
                        small[idx] = lines_small + position;
                    }
                }
            }
        }

        log::debug!("built evaluation tables ({TABLE_SIZE} entries each)");
        EvalTables { large, small }
    }
}

fn line_weight(count: i32, two: i32, one: i32) -> i32 {
    match count {
        2 => two,
        1 => one,
        _ => 0,
    }
}

/// Score a single grid from X's point of view.
///
/// The line scan stops at the first completed line. Overlapping patterns
/// where both sides hold a line are never reached in play.
fn score_grid(x: u64, o: u64) -> GridScore {
    let x_lines = lines(x);
    let o_lines = lines(o);
    let mut lines_large = 0;
    let mut lines_small = 0;

    for i in (0..24).step_by(3) {
        let x_count = pop_count((x_lines >> i) & LINE);
        let o_count = pop_count((o_lines >> i) & LINE);

        // Contested lines are dead for both sides
        if x_count != 0 && o_count != 0 {
            continue;
        }
        if x_count == 3 {
            return GridScore::Won;
        }
        if o_count == 3 {
            return GridScore::Lost;
        }

        lines_large += line_weight(x_count, BIG_TWO_COUNT, BIG_ONE_COUNT)
            - line_weight(o_count, BIG_TWO_COUNT, BIG_ONE_COUNT);
        lines_small += line_weight(x_count, SMALL_TWO_COUNT, SMALL_ONE_COUNT)
            - line_weight(o_count, SMALL_TWO_COUNT, SMALL_ONE_COUNT);
    }

    if pop_count(x | o) == 9 {
        return GridScore::Full;
    }

    let position = CORNER * (pop_count(x & CORNER_MASK) - pop_count(o & CORNER_MASK))
        + EDGE * (pop_count(x & EDGE_MASK) - pop_count(o & EDGE_MASK))
        + CENTRE * (pop_count(x & CENTRE_MASK) - pop_count(o & CENTRE_MASK));

    GridScore::Open {
        lines_large,
        lines_small,
        position,
    }
}
