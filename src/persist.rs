//! Flat-file board snapshots
//!
//! Eight lines, rank 8 first. Each line holds 8 cells of 4 characters:
//! `----` for an empty cell, `K(w)` / `K(k)` for a white / black piece.

use std::fs;
use std::path::Path;

use log::info;

use crate::board::{Board, Color, Coord, PieceKind};
use crate::error::{ChessError, Result};

pub const CELL_WIDTH: usize = 4;
pub const LINE_WIDTH: usize = CELL_WIDTH * 8;
const EMPTY_CELL: &str = "----";

fn file_error(line: usize, reason: impl Into<String>) -> ChessError {
    ChessError::FileFormat {
        line,
        reason: reason.into(),
    }
}

/// Render `board` in the persisted format (trailing newline on every line)
pub fn encode_board(board: &Board) -> String {
    let mut out = String::with_capacity((LINE_WIDTH + 1) * 8);
    for rank in board.ranks().rev() {
        for cell in rank {
            match cell.piece() {
                Some(piece) => {
                    out.push(piece.kind.letter());
                    out.push('(');
                    out.push(piece.color.tag());
                    out.push(')');
                }
                None => out.push_str(EMPTY_CELL),
            }
        }
        out.push('\n');
    }
    out
}

/// Parse the persisted format into a fresh board
pub fn decode_board(text: &str) -> Result<Board> {
    let lines: Vec<&str> = text.lines().collect();
    // tolerate trailing blank lines left by editors
    let mut count = lines.len();
    while count > 0 && lines[count - 1].is_empty() {
        count -= 1;
    }
    if count != 8 {
        return Err(file_error(
            count.min(8) + 1,
            format!("expected 8 rank lines, found {count}"),
        ));
    }

    let mut board = Board::new();
    for (i, line) in lines[..count].iter().enumerate() {
        let line_no = i + 1;
        let chars: Vec<char> = line.chars().collect();
        if chars.len() != LINE_WIDTH {
            return Err(file_error(
                line_no,
                format!("line has {} characters, expected {LINE_WIDTH}", chars.len()),
            ));
        }
        let row = 7 - i as u8;
        for (col, cell) in chars.chunks(CELL_WIDTH).enumerate() {
            if cell.iter().all(|&c| c == '-') {
                continue;
            }
            let kind = PieceKind::from_letter(cell[0])
                .ok_or_else(|| file_error(line_no, format!("invalid piece letter {:?}", cell[0])))?;
            if cell[1] != '(' || cell[3] != ')' {
                return Err(file_error(line_no, format!("malformed cell in column {}", col + 1)));
            }
            let color = Color::from_tag(cell[2])
                .ok_or_else(|| file_error(line_no, format!("invalid color tag {:?}", cell[2])))?;
            let at = Coord::new(row, col as u8)
                .ok_or_else(|| file_error(line_no, "cell out of range"))?;
            board.place_piece(at, kind, color)?;
        }
    }
    Ok(board)
}

pub fn save_board(board: &Board, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    fs::write(path, encode_board(board))?;
    info!("board saved to {}", path.display());
    Ok(())
}

pub fn load_board(path: impl AsRef<Path>) -> Result<Board> {
    let path = path.as_ref();
    let text = fs::read_to_string(path)?;
    let board = decode_board(&text)?;
    info!(
        "board loaded from {} ({} pieces)",
        path.display(),
        board.occupied().count()
    );
    Ok(board)
}
