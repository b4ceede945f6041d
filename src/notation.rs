//! Algebraic notation codec
//!
//! Squares are `<file><rank>` (`e4`), placements `<letter><file><rank>`
//! (`Ke1`) and full moves `<letter><from><to>` (`Bf1b5`). Input is tokenized
//! and validated before any indexed access.

use crate::board::{Coord, PieceKind};
use crate::error::{ChessError, Result};

pub const PLACEMENT_LEN: usize = 3;
pub const MOVE_LEN: usize = 5;

/// Parsed placement string
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub kind: PieceKind,
    pub square: Coord,
}

/// Parsed move string: piece letter, origin square, destination square
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveNotation {
    pub kind: PieceKind,
    pub from: Coord,
    pub to: Coord,
}

fn format_error(input: &str, reason: &'static str) -> ChessError {
    ChessError::NotationFormat {
        input: input.to_string(),
        reason,
    }
}

/// Split into chars after checking the exact length
fn tokenize(input: &str, len: usize, reason: &'static str) -> Result<Vec<char>> {
    let chars: Vec<char> = input.chars().collect();
    if chars.len() != len {
        return Err(format_error(input, reason));
    }
    Ok(chars)
}

fn file_rank(input: &str, file: char, rank: char) -> Result<Coord> {
    if !('a'..='h').contains(&file) {
        return Err(format_error(input, "file must be a letter a-h"));
    }
    if !('1'..='8').contains(&rank) {
        return Err(format_error(input, "rank must be a digit 1-8"));
    }
    let col = file as u8 - b'a';
    let row = rank as u8 - b'1';
    Coord::new(row, col).ok_or_else(|| format_error(input, "square out of range"))
}

fn piece_letter(input: &str, letter: char) -> Result<PieceKind> {
    PieceKind::from_letter(letter)
        .ok_or_else(|| format_error(input, "piece must be one of K, Q, R, B, N, p"))
}

/// Convert `e4`-style notation to a board coordinate
pub fn square_to_coordinate(name: &str) -> Result<Coord> {
    let chars = tokenize(name, 2, "square must have exactly 2 characters")?;
    file_rank(name, chars[0], chars[1])
}

/// Convert a board coordinate to `e4`-style notation
pub fn coordinate_to_square(at: Coord) -> String {
    let file = (b'a' + at.col()) as char;
    let rank = (b'1' + at.row()) as char;
    format!("{}{}", file, rank)
}

/// Decode a placement string such as `Ke1`
pub fn decode_placement(input: &str) -> Result<Placement> {
    let chars = tokenize(input, PLACEMENT_LEN, "placement must have exactly 3 characters")?;
    let kind = piece_letter(input, chars[0])?;
    let square = file_rank(input, chars[1], chars[2])?;
    Ok(Placement { kind, square })
}

/// Decode a full move string such as `Bf1b5`
pub fn decode_move(input: &str) -> Result<MoveNotation> {
    let chars = tokenize(input, MOVE_LEN, "move must have exactly 5 characters")?;
    let kind = piece_letter(input, chars[0])?;
    let from = file_rank(input, chars[1], chars[2])?;
    let to = file_rank(input, chars[3], chars[4])?;
    Ok(MoveNotation { kind, from, to })
}

/// `Bf1` style figure notation: piece letter plus square
pub fn figure_notation(kind: PieceKind, at: Coord) -> String {
    format!("{}{}", kind.letter(), coordinate_to_square(at))
}
