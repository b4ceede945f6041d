//! Legality validation, check and checkmate evaluation
//!
//! Every speculative evaluation runs on a fresh `Board::snapshot()`; the live
//! board is only touched by `attempt_move` after all checks on the copy passed.

use log::{debug, info, trace};

use crate::board::{Board, Color, Coord, Move, Piece};
use crate::error::{ChessError, Result};
use crate::movegen::piece_moves;
use crate::notation::{decode_move, figure_notation};

/// Outcome of an accepted move, seen from the opponent's side
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveStatus {
    Normal,
    OpponentInCheck,
    OpponentCheckmated,
}

/// True iff some pseudo-legal move of the enemy lands on a king of `color`.
/// With no king of `color` on the board this is always false.
pub fn is_in_check(board: &Board, color: Color) -> bool {
    let kings = board.king_squares(color);
    if kings.is_empty() {
        return false;
    }
    board
        .occupied()
        .filter(|(_, piece)| piece.color != color)
        .any(|(from, piece)| {
            piece_moves(board, from, piece)
                .iter()
                .any(|to| kings.contains(to))
        })
}

/// Apply `mv` to a snapshot of `board` and return the copy
pub fn simulate(board: &Board, mv: &Move) -> Result<Board> {
    let mut copy = board.snapshot();
    apply(&mut copy, mv)?;
    Ok(copy)
}

// Remove from origin, place on target (capturing any occupant)
fn apply(board: &mut Board, mv: &Move) -> Result<Option<Piece>> {
    board.remove_piece(mv.from);
    board.place_piece(mv.to, mv.kind, mv.color)
}

/// Would `mv` leave the mover's own king out of check?
pub fn keeps_king_safe(board: &Board, mv: &Move) -> Result<bool> {
    let after = simulate(board, mv)?;
    Ok(!is_in_check(&after, mv.color))
}

/// Parse and fully validate a move string for `mover` without touching `board`
pub fn validate_move(board: &Board, input: &str, mover: Color) -> Result<Move> {
    let parsed = decode_move(input)?;
    let figure = figure_notation(parsed.kind, parsed.from);

    let owned = board.pieces_of(mover).contains(&parsed.from);
    let expected = Piece::new(parsed.kind, mover);
    if !owned || board.piece_at(parsed.from) != Some(expected) {
        debug!("rejecting {input}: no {mover:?} piece {figure}");
        return Err(ChessError::UnknownFigure {
            figure,
            color: Some(mover),
        });
    }

    let targets = piece_moves(board, parsed.from, expected);
    if !targets.contains(&parsed.to) {
        debug!("rejecting {input}: {} not in {:?}", parsed.to, targets);
        return Err(ChessError::IllegalTarget {
            figure,
            target: parsed.to,
        });
    }

    let mv = Move::new(parsed.from, parsed.to, parsed.kind, mover);
    if !keeps_king_safe(board, &mv)? {
        debug!("rejecting {input}: {mover:?} king would be in check");
        return Err(ChessError::SelfCheck {
            input: input.to_string(),
            color: mover,
        });
    }
    Ok(mv)
}

/// Validate, commit and evaluate the opponent's status.
/// A rejected move leaves `board` untouched.
pub fn attempt_move(board: &mut Board, input: &str, mover: Color) -> Result<MoveStatus> {
    let mv = validate_move(board, input, mover)?;
    let captured = apply(board, &mv)?;
    match captured {
        Some(p) => info!("{mover:?} plays {mv}, capturing {:?}", p.kind),
        None => info!("{mover:?} plays {mv}"),
    }

    let opponent = mover.opposite();
    let status = if !is_in_check(board, opponent) {
        MoveStatus::Normal
    } else if is_checkmate(board, opponent) {
        MoveStatus::OpponentCheckmated
    } else {
        MoveStatus::OpponentInCheck
    };
    debug!("status after {mv}: {status:?}");
    Ok(status)
}

/// `color` is in check and no move of any of its pieces gets it out.
/// Stops at the first legality-preserving move found.
pub fn is_checkmate(board: &Board, color: Color) -> bool {
    if !is_in_check(board, color) {
        return false;
    }
    for from in board.pieces_of(color) {
        let Some(piece) = board.piece_at(from) else {
            continue;
        };
        for to in piece_moves(board, from, piece) {
            let mv = Move::new(from, to, piece.kind, color);
            trace!("checkmate search: trying {mv}");
            // a target can never hold an own piece, so the simulation cannot fail
            if matches!(keeps_king_safe(board, &mv), Ok(true)) {
                trace!("checkmate search: {mv} escapes");
                return false;
            }
        }
    }
    true
}

/// All moves of `color` that pass the self-check rule, origins in scan order
pub fn legal_moves(board: &Board, color: Color) -> Vec<Move> {
    let mut legal = Vec::new();
    for (from, piece) in board.occupied().filter(|(_, p)| p.color == color) {
        for to in piece_moves(board, from, piece) {
            let mv = Move::new(from, to, piece.kind, color);
            if matches!(keeps_king_safe(board, &mv), Ok(true)) {
                legal.push(mv);
            }
        }
    }
    legal
}

/// Pseudo-legal destinations of the piece on `from` that hold an enemy piece
pub fn captures(board: &Board, from: Coord) -> Result<Vec<(Coord, Piece)>> {
    let piece = board.piece_at(from).ok_or_else(|| ChessError::UnknownFigure {
        figure: from.to_string(),
        color: None,
    })?;
    Ok(piece_moves(board, from, piece)
        .into_iter()
        .filter_map(|to| board.piece_at(to).map(|victim| (to, victim)))
        .collect())
}

/// Leaf count of the legal move tree, sides alternating from `side`
pub fn perft(board: &Board, side: Color, depth: u8) -> u64 {
    if depth == 0 {
        return 1;
    }
    let moves = legal_moves(board, side);
    if depth == 1 {
        return moves.len() as u64;
    }
    let mut nodes = 0u64;
    for mv in moves {
        if let Ok(next) = simulate(board, &mv) {
            nodes += perft(&next, side.opposite(), depth - 1);
        }
    }
    nodes
}
