mod common;

use common::{board_with, sq};
use scacchiera::rules::{attempt_move, validate_move, MoveStatus};
use scacchiera::{ChessError, Color, Piece, PieceKind};

#[test]
fn test_king_step_is_committed() {
    let mut board = board_with(&[
        ("e1", PieceKind::King, Color::White),
        ("e8", PieceKind::King, Color::Black),
    ]);
    let status = attempt_move(&mut board, "Ke1e2", Color::White).unwrap();
    assert_eq!(status, MoveStatus::Normal);
    assert_eq!(board.piece_at(sq("e1")), None);
    assert_eq!(
        board.piece_at(sq("e2")),
        Some(Piece::new(PieceKind::King, Color::White))
    );
}

#[test]
fn test_capture_replaces_enemy() {
    let mut board = board_with(&[
        ("e1", PieceKind::King, Color::White),
        ("f1", PieceKind::Bishop, Color::White),
        ("b5", PieceKind::Knight, Color::Black),
    ]);
    attempt_move(&mut board, "Bf1b5", Color::White).unwrap();
    assert_eq!(
        board.piece_at(sq("b5")),
        Some(Piece::new(PieceKind::Bishop, Color::White))
    );
    assert!(board.pieces_of(Color::Black).is_empty());
}

#[test]
fn test_capturing_shield_still_exposed_is_self_check() {
    // the black bishop on e2 shields the white king from the rook on e8;
    // taking it with the king keeps the king on the open file
    let mut board = board_with(&[
        ("e1", PieceKind::King, Color::White),
        ("e2", PieceKind::Bishop, Color::Black),
        ("e8", PieceKind::Rook, Color::Black),
    ]);
    let before = board.clone();
    let err = attempt_move(&mut board, "Ke1e2", Color::White).unwrap_err();
    assert!(matches!(err, ChessError::SelfCheck { color: Color::White, .. }));
    assert_eq!(board, before);
}

#[test]
fn test_pinned_piece_cannot_leave_file() {
    let mut board = board_with(&[
        ("e1", PieceKind::King, Color::White),
        ("e2", PieceKind::Rook, Color::White),
        ("d2", PieceKind::Knight, Color::Black),
        ("e8", PieceKind::Rook, Color::Black),
    ]);
    let before = board.clone();
    assert!(matches!(
        attempt_move(&mut board, "Re2d2", Color::White),
        Err(ChessError::SelfCheck { .. })
    ));
    assert_eq!(board, before);
    // sliding along the pin line is fine, and so is taking the pinner
    assert!(validate_move(&board, "Re2e5", Color::White).is_ok());
    assert_eq!(
        attempt_move(&mut board, "Re2e8", Color::White).unwrap(),
        MoveStatus::Normal
    );
}

#[test]
fn test_unknown_figure_cases() {
    let board = board_with(&[
        ("e1", PieceKind::King, Color::White),
        ("d8", PieceKind::Queen, Color::Black),
    ]);
    // empty origin
    assert!(matches!(
        validate_move(&board, "Qd1d2", Color::White),
        Err(ChessError::UnknownFigure { .. })
    ));
    // enemy piece
    assert!(matches!(
        validate_move(&board, "Qd8d7", Color::White),
        Err(ChessError::UnknownFigure { .. })
    ));
    // wrong letter for the piece on the origin
    assert!(matches!(
        validate_move(&board, "Qe1e2", Color::White),
        Err(ChessError::UnknownFigure { .. })
    ));
}

#[test]
fn test_illegal_target() {
    let board = board_with(&[("e1", PieceKind::King, Color::White)]);
    match validate_move(&board, "Ke1e3", Color::White) {
        Err(ChessError::IllegalTarget { figure, target }) => {
            assert_eq!(figure, "Ke1");
            assert_eq!(target, sq("e3"));
        }
        other => panic!("expected IllegalTarget, got {other:?}"),
    }
}

#[test]
fn test_malformed_strings_are_notation_errors() {
    let mut board = board_with(&[("e1", PieceKind::King, Color::White)]);
    let before = board.clone();
    for bad in ["", "Ke1", "Ke1e", "Ke1e22", "ke1e2", "Ke9e2", "Kx1e2", "K e1e"] {
        assert!(
            matches!(
                attempt_move(&mut board, bad, Color::White),
                Err(ChessError::NotationFormat { .. })
            ),
            "{bad:?}"
        );
    }
    assert_eq!(board, before);
}

#[test]
fn test_rejections_never_mutate_board() {
    let mut board = board_with(&[
        ("e1", PieceKind::King, Color::White),
        ("d1", PieceKind::Queen, Color::White),
        ("e8", PieceKind::King, Color::Black),
        ("e7", PieceKind::Rook, Color::Black),
        ("b4", PieceKind::Bishop, Color::Black),
    ]);
    let before = board.clone();
    for bad in ["Ke1e2", "Qd1h8", "Qd1d1", "Rd1d2", "Ke8e7", "pa2a3", "Ke1d2"] {
        assert!(attempt_move(&mut board, bad, Color::White).is_err(), "{bad}");
        assert_eq!(board, before, "{bad} changed the board");
    }
}
