//! Scores, heuristic weights and sentinel values.
//!
//! All tunables of the engine live here. Scores are always expressed from the
//! point of view of player X and negated for player O.

// =============================================================================
// Outcome Scores
// =============================================================================

/// Score of a won game (before mate-distance adjustment).
pub const OUTCOME_WIN: i32 = 1_000_000;

/// Score of a drawn game.
pub const OUTCOME_DRAW: i32 = 0;

/// Score of a lost game (before mate-distance adjustment).
pub const OUTCOME_LOSS: i32 = -1_000_000;

// =============================================================================
// Line Weights
// =============================================================================

/// Two-in-a-row on the large grid.
pub const BIG_TWO_COUNT: i32 = 90;

/// One-in-a-row on the large grid.
pub const BIG_ONE_COUNT: i32 = 20;

/// Two-in-a-row inside a zone.
pub const SMALL_TWO_COUNT: i32 = 8;

/// One-in-a-row inside a zone.
pub const SMALL_ONE_COUNT: i32 = 1;

// =============================================================================
// Positional Weights
// =============================================================================

/// Weight of the centre cell.
pub const CENTRE: i32 = 9;

/// Weight of each corner cell.
pub const CORNER: i32 = 7;

/// Weight of each edge cell.
pub const EDGE: i32 = 5;

/// Multiplier applied to the positional component on the large grid.
pub const SQ_BIG: i32 = 25;

// =============================================================================
// Sentinels
// =============================================================================

/// Forced-zone value meaning "play in any open zone".
pub const ZONE_ANY: usize = 9;

/// Placeholder move, one past the last playable cell.
pub const NULL_MOVE: usize = 81;

/// Number of cells on the board and the hard upper bound on game length.
pub const MAX_PLY: usize = 81;

// =============================================================================
// Names
// =============================================================================

/// Lowercase compass names of zones (and of cells within a zone).
pub const ZONE_NAMES: [&str; 9] = ["nw", "n", "ne", "w", "c", "e", "sw", "s", "se"];

/// Uppercase variant used by the ASCII board display.
pub const ZONE_NAMES_UPPER: [&str; 9] = ["NW", "N", "NE", "W", "C", "E", "SW", "S", "SE"];
