//! Line-oriented engine protocol.
//!
//! Each input line is a command; each command prints one reply (the `d`
//! command prints a multi-line diagram). The engine announces itself with
//! `ready` once its tables are built.
//!
//! ## Supported Commands
//!
//! - `newgame <cells> <zone>` - Set up a position, clearing history
//! - `go <depth>` - Search to `depth` plies and play the best move
//! - `play <zone/cell>|null` - Play a move, or pass the turn with `null`
//! - `undo` - Take back one ply
//! - `gamepos` - Print the current position string
//! - `d` - Print an ASCII diagram of the current position
//! - `q` - Quit
//!
//! The side to move follows from the number of plies in the history: X
//! moves when it is odd (the initial entry counts as one).
//!
//! ## Example
//!
//! ```
//! use uttt::protocol::{Reply, Session};
//!
//! let mut session = Session::new();
//! let reply = session.execute("play", &["c/c"]);
//! assert_eq!(reply, Reply::Text("move pos 9/9/9/9/4x4/9/9/9/9 c".into()));
//! ```

use std::io::{BufRead, Write};
use std::time::Instant;

use anyhow::Result;

use crate::apply::apply_move;
use crate::board::{Board, Move, Side};
use crate::constants::NULL_MOVE;
use crate::movegen::generate_moves;
use crate::notation::{eval_string, parse_move, parse_position, position_string, pv_string};
use crate::search::search;
use crate::tables::init_tables;

/// Outcome of one command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Text to print.
    Text(String),
    /// Stop reading commands.
    Quit,
}

impl Reply {
    fn text(s: impl Into<String>) -> Self {
        Reply::Text(s.into())
    }
}

/// Protocol state: the game history as (board, move that produced it).
pub struct Session {
    history: Vec<(Board, Move)>,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    /// A session at the empty starting position.
    pub fn new() -> Self {
        Self::from_board(Board::new())
    }

    /// A session whose history starts at `board`.
    pub fn from_board(board: Board) -> Self {
        Session {
            history: vec![(board, NULL_MOVE)],
        }
    }

    /// The current position.
    pub fn board(&self) -> Board {
        self.head().0
    }

    /// Number of history entries, including the initial one.
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// Side to move, from the parity of the history.
    pub fn side_to_move(&self) -> Side {
        if self.history.len() % 2 == 1 {
            Side::X
        } else {
            Side::O
        }
    }

    fn head(&self) -> (Board, Move) {
        // The initial entry is never removed
        self.history[self.history.len() - 1]
    }

    /// Read commands from `input` until `q` or end of input, writing replies
    /// to `output`.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> Result<()> {
        init_tables();
        writeln!(output, "ready")?;
        output.flush()?;

        for line in input.lines() {
            let line = line?;
            let parts: Vec<&str> = line.split_whitespace().collect();
            let Some((&command, args)) = parts.split_first() else {
                continue;
            };

            log::debug!("command: {}", line.trim());

            match self.execute(command, args) {
                Reply::Text(text) => {
                    writeln!(output, "{text}")?;
                    output.flush()?;
                }
                Reply::Quit => break,
            }
        }

        Ok(())
    }

    /// Execute one command.
    pub fn execute(&mut self, command: &str, args: &[&str]) -> Reply {
        match command {
            "newgame" => self.newgame(args),
            "go" => self.go(args),
            "play" => self.play(args),
            "undo" => self.undo(),
            "gamepos" => Reply::text(position_string(&self.board())),
            "d" => Reply::text(self.board().to_string()),
            "q" => Reply::Quit,
            _ => {
                log::warn!("unknown command: {command}");
                Reply::text("badkeyword")
            }
        }
    }

    fn newgame(&mut self, args: &[&str]) -> Reply {
        let [cells, zone, ..] = args else {
            return Reply::text("newgame invalid args");
        };
        match parse_position(&format!("{cells} {zone}")) {
            Ok(board) => {
                self.history = vec![(board, NULL_MOVE)];
                Reply::text("newgame ok")
            }
            Err(e) => {
                log::warn!("rejected position: {e}");
                Reply::text("newgame invalid pos")
            }
        }
    }

    fn go(&mut self, args: &[&str]) -> Reply {
        let Some(arg) = args.first() else {
            return Reply::text("info error no depth");
        };
        let depth = match arg.parse::<i64>() {
            Ok(d) if d > 0 => d as usize,
            _ => return Reply::text("info error invalid depth"),
        };

        let board = self.board();
        let side = self.side_to_move();
        let start = Instant::now();
        let result = search(board, side, depth);
        let elapsed = start.elapsed().as_millis();

        let eval = eval_string(result.score, depth);
        log::info!(
            "searched depth {depth} for {side:?}: eval {eval}, pv length {}, {elapsed} ms",
            result.pv.len()
        );

        if let Some(&best) = result.pv.first() {
            self.history.push((apply_move(board, best, side), best));
        }

        Reply::Text(format!(
            "info depth {depth} pv {} eval {eval} time {elapsed}",
            pv_string(&result.pv)
        ))
    }

    fn play(&mut self, args: &[&str]) -> Reply {
        let [token] = args else {
            return Reply::text("move invalid");
        };

        if *token == "null" {
            let head = self.head();
            self.history.push(head);
            return Reply::Text(format!("move pos {}", position_string(&head.0)));
        }

        let mv = match parse_move(token) {
            Ok(mv) => mv,
            Err(e) => {
                log::warn!("rejected move: {e}");
                return Reply::text("move invalid");
            }
        };

        let board = self.board();
        if !generate_moves(&board).contains(&mv) {
            return Reply::text("move illegal");
        }

        let next = apply_move(board, mv, self.side_to_move());
        self.history.push((next, mv));
        Reply::Text(format!("move pos {}", position_string(&next)))
    }

    fn undo(&mut self) -> Reply {
        if self.history.len() <= 1 {
            return Reply::text("undo stackempty");
        }
        self.history.pop();
        Reply::text("undo ok")
    }
}
