//! Whole games: human against engine on a terminal, and engine self-play.

use std::io::{BufRead, Write};
use std::time::Instant;

use anyhow::Result;

use crate::apply::apply_move;
use crate::bits::line_presence;
use crate::board::{Board, Move, Side};
use crate::movegen::generate_moves;
use crate::notation::{eval_string, move_string, parse_move, position_string};
use crate::search::search;

/// Final result of a game.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum GameResult {
    Win(Side),
    Draw,
}

/// Result of a finished game; `None` while moves remain.
pub fn game_result(board: &Board) -> Option<GameResult> {
    if !generate_moves(board).is_empty() {
        return None;
    }
    Some(if line_presence(board.large(Side::X)) {
        GameResult::Win(Side::X)
    } else if line_presence(board.large(Side::O)) {
        GameResult::Win(Side::O)
    } else {
        GameResult::Draw
    })
}

/// Search for `side` and report the chosen move the way the terminal game
/// prints it. Returns `None` if there is nothing to play.
fn engine_move<W: Write>(
    board: Board,
    side: Side,
    depth: usize,
    output: &mut W,
) -> Result<Option<Move>> {
    let start = Instant::now();
    let result = search(board, side, depth);
    let elapsed = start.elapsed().as_millis();

    let Some(&best) = result.pv.first() else {
        return Ok(None);
    };

    let pv = result.pv.iter().map(|&mv| move_string(mv)).collect::<Vec<_>>().join(", ");
    writeln!(
        output,
        "AI Move: {} PV: [{pv}] Eval: {} Time elapsed: {elapsed} ms",
        move_string(best),
        eval_string(result.score, depth),
    )?;
    Ok(Some(best))
}

/// Prompt until the user enters a legal move. `None` on end of input.
fn read_player_move<R: BufRead, W: Write>(
    board: &Board,
    input: &mut R,
    output: &mut W,
) -> Result<Option<Move>> {
    let legal = generate_moves(board);
    loop {
        write!(output, "Move: ")?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        match parse_move(line.trim()) {
            Ok(mv) if legal.contains(&mv) => return Ok(Some(mv)),
            Ok(mv) => log::debug!("illegal move {}", move_string(mv)),
            Err(e) => log::debug!("{e}"),
        }
    }
}

/// Play a game on the terminal, the engine taking `engine_side`.
pub fn play_interactive<R: BufRead, W: Write>(
    depth: usize,
    engine_side: Side,
    mut input: R,
    mut output: W,
) -> Result<Option<GameResult>> {
    let mut board = Board::new();
    let mut side = Side::X;

    writeln!(
        output,
        "Playing {}",
        match engine_side {
            Side::X => "X",
            Side::O => "O",
        }
    )?;

    loop {
        if let Some(result) = game_result(&board) {
            writeln!(output, "Game over")?;
            return Ok(Some(result));
        }

        let mv = if side == engine_side {
            engine_move(board, side, depth, &mut output)?
        } else {
            writeln!(output, "{board}")?;
            read_player_move(&board, &mut input, &mut output)?
        };
        let Some(mv) = mv else {
            return Ok(None);
        };

        board = apply_move(board, mv, side);
        side = side.other();
    }
}

/// Self-play settings.
#[derive(Clone, Debug)]
pub struct SelfplayConfig {
    pub depth: usize,
    pub games: usize,
    /// Opening plies chosen uniformly at random before the engine takes over.
    pub random_plies: usize,
    pub seed: Option<u64>,
}

/// One finished self-play game.
#[derive(Clone, Debug)]
pub struct GameRecord {
    pub result: GameResult,
    pub moves: Vec<Move>,
    pub final_board: Board,
}

/// Win/draw counts over a self-play run.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Tally {
    pub x_wins: usize,
    pub o_wins: usize,
    pub draws: usize,
}

impl Tally {
    fn record(&mut self, result: GameResult) {
        match result {
            GameResult::Win(Side::X) => self.x_wins += 1,
            GameResult::Win(Side::O) => self.o_wins += 1,
            GameResult::Draw => self.draws += 1,
        }
    }
}

/// Play one engine-vs-engine game from the empty board.
pub fn play_game(depth: usize, random_plies: usize, rng: &mut fastrand::Rng) -> GameRecord {
    let mut board = Board::new();
    let mut side = Side::X;
    let mut moves = Vec::new();

    loop {
        let legal = generate_moves(&board);
        if legal.is_empty() {
            break;
        }
        let mv = if moves.len() < random_plies {
            legal[rng.usize(..legal.len())]
        } else {
            // A non-empty move list always yields a principal variation
            match search(board, side, depth).pv.first() {
                Some(&mv) => mv,
                None => legal[0],
            }
        };
        board = apply_move(board, mv, side);
        moves.push(mv);
        side = side.other();
    }

    let result = game_result(&board).unwrap_or(GameResult::Draw);
    GameRecord {
        result,
        moves,
        final_board: board,
    }
}

/// Run a batch of self-play games, printing one line per game and a summary.
pub fn selfplay<W: Write>(config: &SelfplayConfig, mut output: W) -> Result<Tally> {
    let mut rng = match config.seed {
        Some(seed) => fastrand::Rng::with_seed(seed),
        None => fastrand::Rng::new(),
    };
    let mut tally = Tally::default();

    for game in 1..=config.games {
        let start = Instant::now();
        let record = play_game(config.depth, config.random_plies, &mut rng);
        tally.record(record.result);

        let result = match record.result {
            GameResult::Win(Side::X) => "1-0",
            GameResult::Win(Side::O) => "0-1",
            GameResult::Draw => "1/2-1/2",
        };
        writeln!(
            output,
            "game {game}: {result} in {} plies, {}",
            record.moves.len(),
            position_string(&record.final_board)
        )?;
        log::info!("game {game} finished in {} ms", start.elapsed().as_millis());
    }

    writeln!(
        output,
        "X wins {}, O wins {}, draws {}",
        tally.x_wins, tally.o_wins, tally.draws
    )?;
    Ok(tally)
}
