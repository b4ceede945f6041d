pub mod board;
pub mod cli;
pub mod error;
pub mod game;
pub mod movegen;
pub mod notation;
pub mod persist;
pub mod rules;

pub use board::{Board, Color, Coord, Move, Piece, PieceKind};
pub use error::{ChessError, Result};
pub use game::Game;
pub use rules::MoveStatus;
