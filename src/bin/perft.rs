use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use scacchiera::persist::load_board;
use scacchiera::rules::perft;
use scacchiera::Color;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Side {
    White,
    Black,
}

impl From<Side> for Color {
    fn from(side: Side) -> Color {
        match side {
            Side::White => Color::White,
            Side::Black => Color::Black,
        }
    }
}

#[derive(Parser, Debug)]
#[command(author, version, about = "Count legal move sequences from a saved board", long_about = None)]
struct Args {
    #[arg(short, long)]
    board: PathBuf,

    #[arg(short, long, value_enum, default_value_t = Side::White)]
    side: Side,

    #[arg(short, long, default_value_t = 2)]
    depth: u8,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .target(env_logger::Target::Stderr)
        .init();
    let args = Args::parse();

    let board = load_board(&args.board)
        .with_context(|| format!("failed to load board from {}", args.board.display()))?;

    println!(
        "Running perft on '{}' ({:?} to move) at depth {}",
        args.board.display(),
        args.side,
        args.depth
    );

    let start = std::time::Instant::now();
    let nodes = perft(&board, args.side.into(), args.depth);
    let duration = start.elapsed();

    println!(
        "perft({}) = {} nodes ({} ms)",
        args.depth,
        nodes,
        duration.as_millis()
    );
    Ok(())
}
