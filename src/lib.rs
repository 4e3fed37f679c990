//! An Ultimate Tic-Tac-Toe engine.
//!
//! The board is packed into three `u64` words, evaluated with two lookup
//! tables built once per process, and searched with a fixed-depth negamax
//! alpha-beta that tracks the distance to forced wins.
//!
//! ## Modules
//!
//! - [`constants`] - Scores, weights and sentinels
//! - [`bits`] - Grid masks and line detection
//! - [`board`] - Bit-packed board representation
//! - [`tables`] - Precomputed partial evaluations
//! - [`movegen`] - Legal move generation
//! - [`apply`] - Move application
//! - [`eval`] - Static evaluation
//! - [`search`] - Negamax alpha-beta search
//! - [`notation`] - Move, position and score strings
//! - [`protocol`] - Line-oriented command protocol
//! - [`game`] - Terminal play and self-play
//!
//! ## Example
//!
//! ```
//! use uttt::board::{Board, Side};
//! use uttt::movegen::generate_moves;
//! use uttt::apply::apply_move;
//! use uttt::search::search;
//! use uttt::notation::move_string;
//!
//! let board = apply_move(Board::new(), 40, Side::X);
//! assert_eq!(generate_moves(&board).len(), 8);
//!
//! let result = search(board, Side::O, 3);
//! println!("Best move: {}", move_string(result.pv[0]));
//! ```

pub mod apply;
pub mod bits;
pub mod board;
pub mod constants;
pub mod eval;
pub mod game;
pub mod movegen;
pub mod notation;
pub mod protocol;
pub mod search;
pub mod tables;

pub use apply::apply_move;
pub use board::{Board, Move, Side};
pub use eval::evaluate;
pub use movegen::generate_moves;
pub use search::{SearchResult, search};
