//! Engine-facing call surface: one live board plus whose turn it is.

use log::info;

use crate::board::{Board, Color, Coord, Piece, PieceKind};
use crate::error::Result;
use crate::notation::{decode_placement, Placement};
use crate::rules::{self, MoveStatus};

#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    side_to_move: Color,
    winner: Option<Color>,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// Empty board, white to move
    pub fn new() -> Self {
        Self::from_board(Board::new())
    }

    pub fn from_board(board: Board) -> Self {
        Self {
            board,
            side_to_move: Color::White,
            winner: None,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    /// Set when a move checkmated the opponent
    pub fn winner(&self) -> Option<Color> {
        self.winner
    }

    pub fn is_over(&self) -> bool {
        self.winner.is_some()
    }

    pub fn place(&mut self, square: Coord, kind: PieceKind, color: Color) -> Result<()> {
        self.board.place_piece(square, kind, color)?;
        Ok(())
    }

    /// Setup-phase placement from a string such as `Ke1`
    pub fn place_notation(&mut self, input: &str, color: Color) -> Result<Placement> {
        let placement = decode_placement(input)?;
        self.place(placement.square, placement.kind, color)?;
        info!("placed {color:?} {input}");
        Ok(placement)
    }

    /// Validate and commit `input` for `mover`. Turn order is not enforced here;
    /// see `play` for that.
    pub fn attempt_move(&mut self, input: &str, mover: Color) -> Result<MoveStatus> {
        let status = rules::attempt_move(&mut self.board, input, mover)?;
        if status == MoveStatus::OpponentCheckmated {
            self.winner = Some(mover);
        }
        Ok(status)
    }

    /// Move for the side to move; the turn passes only when the move is accepted
    pub fn play(&mut self, input: &str) -> Result<MoveStatus> {
        let status = self.attempt_move(input, self.side_to_move)?;
        self.side_to_move = self.side_to_move.opposite();
        Ok(status)
    }

    /// Occupied squares with piece and color, for renderers
    pub fn pieces(&self) -> Vec<(Coord, Piece)> {
        self.board.occupied().collect()
    }

    pub fn is_in_check(&self, color: Color) -> bool {
        rules::is_in_check(&self.board, color)
    }

    pub fn is_checkmate(&self, color: Color) -> bool {
        rules::is_checkmate(&self.board, color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_turns_alternate_only_on_success() {
        let mut game = Game::new();
        game.place_notation("Ke1", Color::White).unwrap();
        game.place_notation("Ke8", Color::Black).unwrap();

        assert!(game.play("Ke8e7").is_err());
        assert_eq!(game.side_to_move(), Color::White);

        assert_eq!(game.play("Ke1e2").unwrap(), MoveStatus::Normal);
        assert_eq!(game.side_to_move(), Color::Black);
        assert_eq!(game.play("Ke8d8").unwrap(), MoveStatus::Normal);
        assert_eq!(game.side_to_move(), Color::White);
        assert_eq!(game.pieces().len(), 2);
    }
}
