// Perft against shakmaty on pawnless positions. Without pawns and with no
// castling rights the two rule sets coincide, so node counts must agree.

mod common;

use common::sq;
use scacchiera::rules::perft;
use scacchiera::{Board, Color, PieceKind};
use shakmaty::fen::Fen;
use shakmaty::{CastlingMode, Chess, Position};

fn perft_shakmaty(pos: &Chess, depth: u8) -> u64 {
    if depth == 0 {
        return 1;
    }
    let mut nodes = 0u64;
    for m in pos.legal_moves() {
        let mut new_pos = pos.clone();
        new_pos.play_unchecked(&m);
        nodes += perft_shakmaty(&new_pos, depth - 1);
    }
    nodes
}

// Placement field of a FEN only; side to move is passed separately
fn board_from_fen(fen: &str) -> Board {
    let mut board = Board::new();
    let placement = fen.split_whitespace().next().expect("placement field");
    for (i, rank) in placement.split('/').enumerate() {
        let mut file = 0u8;
        for ch in rank.chars() {
            if let Some(skip) = ch.to_digit(10) {
                file += skip as u8;
                continue;
            }
            let color = if ch.is_ascii_uppercase() { Color::White } else { Color::Black };
            let kind = match ch.to_ascii_lowercase() {
                'k' => PieceKind::King,
                'q' => PieceKind::Queen,
                'r' => PieceKind::Rook,
                'b' => PieceKind::Bishop,
                'n' => PieceKind::Knight,
                'p' => PieceKind::Pawn,
                other => panic!("unexpected FEN char {other:?}"),
            };
            let name = format!("{}{}", (b'a' + file) as char, 8 - i);
            board.place_piece(sq(&name), kind, color).expect("free square");
            file += 1;
        }
    }
    board
}

fn compare(fen: &str, side: Color, max_depth: u8) {
    let pos: Chess = fen
        .parse::<Fen>()
        .expect("valid fen")
        .into_position(CastlingMode::Standard)
        .expect("legal position");
    let board = board_from_fen(fen);
    for depth in 1..=max_depth {
        let expected = perft_shakmaty(&pos, depth);
        let got = perft(&board, side, depth);
        assert_eq!(
            got, expected,
            "perft mismatch for {fen} at depth {depth}: got {got} expected {expected}"
        );
    }
}

#[test]
fn perft_lone_kings_in_corners() {
    let board = board_from_fen("7k/8/8/8/8/8/8/K7 w - - 0 1");
    assert_eq!(perft(&board, Color::White, 0), 1);
    assert_eq!(perft(&board, Color::White, 1), 3);
    assert_eq!(perft(&board, Color::White, 2), 9);
}

#[test]
fn perft_regression_rook_endgame() {
    compare("4k3/8/8/8/8/8/8/R3K3 w - - 0 1", Color::White, 3);
}

#[test]
fn perft_regression_mixed_minor_pieces() {
    compare("r3k3/8/8/3n4/8/2B5/8/4K2Q w - - 0 1", Color::White, 3);
}

#[test]
fn perft_regression_black_to_move_in_check() {
    // black king on e8 checked along the e-file
    compare("4k3/8/8/1n6/8/8/8/4QK1R b - - 0 1", Color::Black, 3);
}
