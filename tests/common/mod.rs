#![allow(dead_code)]

use proptest::prelude::*;
use scacchiera::notation::square_to_coordinate;
use scacchiera::{Board, Color, Coord, PieceKind};

pub fn sq(name: &str) -> Coord {
    square_to_coordinate(name).expect("valid square")
}

pub fn board_with(pieces: &[(&str, PieceKind, Color)]) -> Board {
    let mut board = Board::new();
    for &(name, kind, color) in pieces {
        board.place_piece(sq(name), kind, color).expect("free square");
    }
    board
}

pub fn sorted_names(moves: &[Coord]) -> Vec<String> {
    let mut names: Vec<String> = moves.iter().map(|c| c.to_string()).collect();
    names.sort();
    names
}

/// Sparse random boards; later placements over an enemy replace it, over a
/// friend are skipped.
pub fn arb_board() -> impl Strategy<Value = Board> {
    prop::collection::vec((0usize..64, 0usize..6, any::<bool>()), 0..24).prop_map(|cells| {
        let mut board = Board::new();
        for (idx, kind, white) in cells {
            let at = Coord::from_index(idx).expect("index below 64");
            let color = if white { Color::White } else { Color::Black };
            let _ = board.place_piece(at, PieceKind::ALL[kind], color);
        }
        board
    })
}
