// Pseudo-legal move generation: geometry and capture rules only, the
// "own king must not end in check" rule lives in `rules`.

use crate::board::{Board, Color, Coord, Piece, PieceKind};
use crate::error::{ChessError, Result};

// Direction deltas as (d_row, d_col)
pub const ORTHOGONAL: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)]; // N, S, E, W
pub const DIAGONAL: [(i8, i8); 4] = [(1, 1), (-1, -1), (-1, 1), (1, -1)]; // NE, SW, SE, NW

pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (-2, -1),
    (-2, 1),
    (2, -1),
    (2, 1),
    (-1, -2),
    (1, -2),
    (-1, 2),
    (1, 2),
];

pub const KING_OFFSETS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Destinations of the piece standing on `from`, dispatched by its kind
pub fn pseudo_moves(board: &Board, from: Coord) -> Result<Vec<Coord>> {
    let piece = board.piece_at(from).ok_or_else(|| ChessError::UnknownFigure {
        figure: from.to_string(),
        color: None,
    })?;
    Ok(piece_moves(board, from, piece))
}

/// Same as `pseudo_moves` for a piece already looked up on `from`
pub fn piece_moves(board: &Board, from: Coord, piece: Piece) -> Vec<Coord> {
    let color = piece.color;
    match piece.kind {
        PieceKind::King => king_moves(board, from, color),
        PieceKind::Queen => queen_moves(board, from, color),
        PieceKind::Rook => rook_moves(board, from, color),
        PieceKind::Bishop => bishop_moves(board, from, color),
        PieceKind::Knight => knight_moves(board, from, color),
        PieceKind::Pawn => pawn_moves(board, from, color),
    }
}

#[inline]
fn can_land(board: &Board, to: Coord, color: Color) -> bool {
    let cell = board.square(to);
    cell.is_empty() || cell.holds_enemy_of(color)
}

fn leap(board: &Board, from: Coord, color: Color, offsets: &[(i8, i8)]) -> Vec<Coord> {
    offsets
        .iter()
        .filter_map(|&(dr, dc)| from.offset(dr, dc))
        .filter(|&to| can_land(board, to, color))
        .collect()
}

// Ray casting: every ray stops at the first occupied square, included only
// when it holds an enemy piece.
fn slide(board: &Board, from: Coord, color: Color, dirs: &[(i8, i8)], out: &mut Vec<Coord>) {
    for &(dr, dc) in dirs {
        let mut cur = from;
        while let Some(to) = cur.offset(dr, dc) {
            let cell = board.square(to);
            if cell.is_empty() {
                out.push(to);
                cur = to;
                continue;
            }
            if cell.holds_enemy_of(color) {
                out.push(to);
            }
            break;
        }
    }
}

pub fn king_moves(board: &Board, from: Coord, color: Color) -> Vec<Coord> {
    leap(board, from, color, &KING_OFFSETS)
}

pub fn queen_moves(board: &Board, from: Coord, color: Color) -> Vec<Coord> {
    let mut moves = rook_moves(board, from, color);
    slide(board, from, color, &DIAGONAL, &mut moves);
    moves
}

pub fn rook_moves(board: &Board, from: Coord, color: Color) -> Vec<Coord> {
    let mut moves = Vec::with_capacity(14);
    slide(board, from, color, &ORTHOGONAL, &mut moves);
    moves
}

pub fn bishop_moves(board: &Board, from: Coord, color: Color) -> Vec<Coord> {
    let mut moves = Vec::with_capacity(13);
    slide(board, from, color, &DIAGONAL, &mut moves);
    moves
}

pub fn knight_moves(board: &Board, from: Coord, color: Color) -> Vec<Coord> {
    leap(board, from, color, &KNIGHT_OFFSETS)
}

/// One step forward onto an empty square, diagonal forward only onto an enemy.
/// No double step, no en passant, no promotion.
pub fn pawn_moves(board: &Board, from: Coord, color: Color) -> Vec<Coord> {
    let forward = pawn_direction(color);
    let mut moves = Vec::with_capacity(3);
    if let Some(to) = from.offset(forward, 0) {
        if board.is_empty(to) {
            moves.push(to);
        }
    }
    for side in [1, -1] {
        if let Some(to) = from.offset(forward, side) {
            if board.square(to).holds_enemy_of(color) {
                moves.push(to);
            }
        }
    }
    moves
}

#[inline]
pub fn pawn_direction(color: Color) -> i8 {
    match color {
        Color::White => 1,
        Color::Black => -1,
    }
}
