//! Tabletop Arcade entry point
//!
//! Runs either game headless: Pong with held keys from the command line,
//! chess with clicks read from stdin.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand, ValueEnum};

use tabletop_arcade::Settings;
use tabletop_arcade::chess::{ChessSession, START_FEN, StandardPosition, StandardRules};
use tabletop_arcade::driver::{InputFrame, Pacing, run};
use tabletop_arcade::platform::{BoardTextSink, LineClicks, PongLogSink, ScriptedInput};
use tabletop_arcade::sim::{PongSession, TickInput};

/// Headless Pong and chess board
#[derive(Parser, Debug)]
#[command(name = "tabletop")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// JSON settings file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Simulate a Pong match
    Pong {
        /// Serve RNG seed (default: random)
        #[arg(short, long)]
        seed: Option<u64>,

        /// Number of ticks to simulate
        #[arg(short, long, default_value = "600")]
        ticks: usize,

        /// Keys held for the whole run, comma separated
        #[arg(long, value_enum, value_delimiter = ',')]
        hold: Vec<Key>,

        /// Run as fast as possible instead of at the tick rate
        #[arg(long)]
        unpaced: bool,
    },

    /// Play chess by typing clicks (`x y`, `x,y` or a square like `e2`)
    Chess {
        /// Starting position in FEN
        #[arg(long, default_value = START_FEN)]
        fen: String,
    },

    /// Print the effective settings as JSON
    Config,
}

/// Movement keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Key {
    LeftUp,
    LeftDown,
    RightUp,
    RightDown,
}

fn held_keys(keys: &[Key]) -> TickInput {
    TickInput::from_flags(
        keys.contains(&Key::LeftUp),
        keys.contains(&Key::LeftDown),
        keys.contains(&Key::RightUp),
        keys.contains(&Key::RightDown),
    )
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let settings = match Settings::load_or_default(args.config.as_deref()) {
        Ok(settings) => settings,
        Err(e) => {
            log::error!("{e}");
            return ExitCode::FAILURE;
        }
    };

    match args.command {
        Commands::Pong {
            seed,
            ticks,
            hold,
            unpaced,
        } => {
            let seed = seed.unwrap_or_else(rand::random);
            log::info!("Pong match starting with seed {seed}");

            let mut session = PongSession::new(&settings.pong, seed);
            let mut input = ScriptedInput::repeat(InputFrame::held(held_keys(&hold)), ticks);
            let mut sink = PongLogSink::new();
            let pacing = if unpaced {
                Pacing::Unpaced
            } else {
                Pacing::FixedRate(settings.pong.tick_rate_hz)
            };

            let summary = run(&mut input, &mut session, &mut sink, pacing);
            let score = session.state().score;
            log::info!(
                "Final score {} : {} after {} ticks",
                score.left,
                score.right,
                summary.frames
            );
        }
        Commands::Chess { fen } => {
            let board = match StandardPosition::from_fen(&fen) {
                Ok(board) => board,
                Err(e) => {
                    log::error!("{e}");
                    return ExitCode::FAILURE;
                }
            };
            let board_pixels = settings.chess.board_pixels;
            log::info!("Chess board ready ({board_pixels}px), {} to move", board.turn());

            let mut session = ChessSession::new(StandardRules, board, board_pixels);
            let mut input = LineClicks::new(std::io::stdin().lock(), board_pixels);
            let mut sink = BoardTextSink::new(std::io::stdout());

            run(&mut input, &mut session, &mut sink, Pacing::Unpaced);
            log::info!(
                "{} moves played, result {}",
                session.history().len(),
                session.position().outcome()
            );
        }
        Commands::Config => match settings.to_json() {
            Ok(json) => println!("{json}"),
            Err(e) => {
                log::error!("{e}");
                return ExitCode::FAILURE;
            }
        },
    }

    ExitCode::SUCCESS
}
