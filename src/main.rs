//! scacchiera terminal entry point.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use scacchiera::cli::{run_stdio, Session, SessionConfig};
use scacchiera::cli::display::DEFAULT_BOARD_OFFSET;
use scacchiera::persist::load_board;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Load a saved board and skip the setup phase
    #[arg(short, long)]
    board: Option<PathBuf>,

    /// Left margin of the printed board
    #[arg(short, long, default_value_t = DEFAULT_BOARD_OFFSET)]
    offset: usize,

    /// Log rejected moves and engine decisions to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let default_level = if args.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .target(env_logger::Target::Stderr)
        .init();

    let config = SessionConfig {
        offset: args.offset,
    };
    let session = match &args.board {
        Some(path) => {
            let board = load_board(path)
                .with_context(|| format!("failed to load board from {}", path.display()))?;
            Session::with_board(board, config)
        }
        None => Session::new(config),
    };

    let session = run_stdio(session).context("terminal session failed")?;
    if let Some(winner) = session.game().winner() {
        log::info!("game over, {winner:?} wins");
    }
    Ok(())
}
