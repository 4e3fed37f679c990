//! Ultimate Tic-Tac-Toe engine front-end.
//!
//! ## Usage
//!
//! - `uttt-engine` - Run the command protocol on stdin/stdout
//! - `uttt-engine play --depth 8` - Play against the engine on the terminal
//! - `uttt-engine selfplay --depth 6 --games 10` - Engine-vs-engine games

use std::io::{self, Write};

use anyhow::Result;
use clap::{Parser, Subcommand};

use uttt::board::Side;
use uttt::game::{SelfplayConfig, play_interactive, selfplay};
use uttt::protocol::Session;
use uttt::tables::init_tables;

/// Ultimate Tic-Tac-Toe engine
#[derive(Parser)]
#[command(name = "uttt-engine")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable debug logging (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the line-oriented command protocol (default)
    Protocol,
    /// Play a game against the engine on the terminal
    Play {
        /// Search depth in plies
        #[arg(short = 'D', long, default_value_t = 8)]
        depth: usize,
        /// Let the human move first; the engine plays O
        #[arg(long)]
        second: bool,
    },
    /// Run engine-vs-engine games
    Selfplay {
        /// Search depth in plies
        #[arg(short = 'D', long, default_value_t = 6)]
        depth: usize,
        /// Number of games
        #[arg(short, long, default_value_t = 10)]
        games: usize,
        /// Opening plies chosen at random
        #[arg(short, long, default_value_t = 4)]
        random_plies: usize,
        /// Seed for the opening randomisation
        #[arg(short, long)]
        seed: Option<u64>,
    },
}

fn init_logging(debug: bool) {
    let level = if debug { "debug" } else { "info" };
    env_logger::Builder::from_env(
        env_logger::Env::default().filter_or(env_logger::DEFAULT_FILTER_ENV, level),
    )
    .format(|buf, record| {
        writeln!(
            buf,
            "[{}] {}: {}",
            record.level(),
            record.target(),
            record.args()
        )
    })
    .write_style(env_logger::WriteStyle::Never)
    .target(env_logger::Target::Stderr)
    .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.debug);

    if let Err(e) = run(cli.command.unwrap_or(Commands::Protocol)) {
        log::error!("fatal error: {e:#}");
        std::process::exit(1);
    }
}

fn run(command: Commands) -> Result<()> {
    init_tables();

    let stdin = io::stdin();
    let stdout = io::stdout();

    match command {
        Commands::Protocol => Session::new().run(stdin.lock(), stdout.lock()),
        Commands::Play { depth, second } => {
            let engine_side = if second { Side::O } else { Side::X };
            play_interactive(depth, engine_side, stdin.lock(), stdout.lock())?;
            Ok(())
        }
        Commands::Selfplay {
            depth,
            games,
            random_plies,
            seed,
        } => {
            let config = SelfplayConfig {
                depth,
                games,
                random_plies,
                seed,
            };
            selfplay(&config, stdout.lock())?;
            Ok(())
        }
    }
}
