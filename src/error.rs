//! Error types for the rules engine
//!
//! Every rejected input surfaces as one of these variants; nothing in the
//! library terminates the process.

use crate::board::{Color, Coord};

#[derive(thiserror::Error, Debug)]
pub enum ChessError {
    /// Placement/move/square string with wrong length or invalid characters
    #[error("invalid notation {input:?}: {reason}")]
    NotationFormat { input: String, reason: &'static str },

    /// Placement onto a square already holding a piece of the same color
    #[error("a {color:?} piece already stands on {square}")]
    OccupiedCell { square: Coord, color: Color },

    /// Origin piece missing, of a different kind, or not owned by the mover
    #[error("no piece matching {figure:?} on the board")]
    UnknownFigure {
        figure: String,
        color: Option<Color>,
    },

    /// Destination not among the pseudo-legal moves of the piece
    #[error("{figure} cannot move to {target}")]
    IllegalTarget { figure: String, target: Coord },

    /// Move would leave the mover's own king in check
    #[error("move {input:?} leaves the {color:?} king in check")]
    SelfCheck { input: String, color: Color },

    /// Persisted board data malformed
    #[error("invalid board file at line {line}: {reason}")]
    FileFormat { line: usize, reason: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ChessError>;
