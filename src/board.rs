// Coordinate mapping: row 0 = rank 1, col 0 = file a (a1 = (0,0), h8 = (7,7)).
// Usiamo questo mapping coerente per tutte le operazioni

use crate::error::{ChessError, Result};
use std::fmt;

pub const BOARD_SIZE: u8 = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    White = 0,
    Black = 1,
}

impl Color {
    pub fn opposite(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Tag used in rendered and persisted cells: `w` for white, `k` for black
    pub fn tag(self) -> char {
        match self {
            Color::White => 'w',
            Color::Black => 'k',
        }
    }

    pub fn from_tag(tag: char) -> Option<Color> {
        match tag {
            'w' => Some(Color::White),
            'k' => Some(Color::Black),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn = 0,
    Knight = 1,
    Bishop = 2,
    Rook = 3,
    Queen = 4,
    King = 5,
}

impl PieceKind {
    pub const ALL: [PieceKind; 6] = [
        PieceKind::Pawn,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Rook,
        PieceKind::Queen,
        PieceKind::King,
    ];

    /// Notation letter; pawns use lowercase `p`, color is never encoded in the letter
    pub fn letter(self) -> char {
        match self {
            PieceKind::Pawn => 'p',
            PieceKind::Knight => 'N',
            PieceKind::Bishop => 'B',
            PieceKind::Rook => 'R',
            PieceKind::Queen => 'Q',
            PieceKind::King => 'K',
        }
    }

    pub fn from_letter(letter: char) -> Option<PieceKind> {
        match letter {
            'p' => Some(PieceKind::Pawn),
            'N' => Some(PieceKind::Knight),
            'B' => Some(PieceKind::Bishop),
            'R' => Some(PieceKind::Rook),
            'Q' => Some(PieceKind::Queen),
            'K' => Some(PieceKind::King),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub color: Color,
}

impl Piece {
    pub const fn new(kind: PieceKind, color: Color) -> Self {
        Self { kind, color }
    }
}

/// Transient move value: built from a parsed move string, dropped after use
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub from: Coord,
    pub to: Coord,
    pub kind: PieceKind,
    pub color: Color,
}

impl Move {
    pub fn new(from: Coord, to: Coord, kind: PieceKind, color: Color) -> Self {
        Self {
            from,
            to,
            kind,
            color,
        }
    }
}

// Full move notation, e.g. Bf1b5
impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.kind.letter(), self.from, self.to)
    }
}

/// Board coordinate, always inside the 8x8 grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coord {
    row: u8,
    col: u8,
}

impl Coord {
    pub const fn new(row: u8, col: u8) -> Option<Coord> {
        if row < BOARD_SIZE && col < BOARD_SIZE {
            Some(Coord { row, col })
        } else {
            None
        }
    }

    #[inline]
    pub fn row(self) -> u8 {
        self.row
    }

    #[inline]
    pub fn col(self) -> u8 {
        self.col
    }

    /// Square index a1=0, b1=1, ..., h8=63
    #[inline]
    pub fn index(self) -> usize {
        self.row as usize * BOARD_SIZE as usize + self.col as usize
    }

    pub fn from_index(idx: usize) -> Option<Coord> {
        if idx < 64 {
            Coord::new((idx / 8) as u8, (idx % 8) as u8)
        } else {
            None
        }
    }

    /// Step by (d_row, d_col); None when the result leaves the board
    #[inline]
    pub fn offset(self, d_row: i8, d_col: i8) -> Option<Coord> {
        let row = self.row as i8 + d_row;
        let col = self.col as i8 + d_col;
        if (0..BOARD_SIZE as i8).contains(&row) && (0..BOARD_SIZE as i8).contains(&col) {
            Coord::new(row as u8, col as u8)
        } else {
            None
        }
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&crate::notation::coordinate_to_square(*self))
    }
}

/// One cell of the board. Either fully empty or holding a piece with its color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Square {
    coord: Coord,
    piece: Option<Piece>,
}

impl Square {
    fn empty(coord: Coord) -> Self {
        Self { coord, piece: None }
    }

    pub fn coord(&self) -> Coord {
        self.coord
    }

    pub fn piece(&self) -> Option<Piece> {
        self.piece
    }

    pub fn is_empty(&self) -> bool {
        self.piece.is_none()
    }

    pub fn color(&self) -> Option<Color> {
        self.piece.map(|p| p.color)
    }

    /// Occupied by a piece of the color opposite to `color`
    pub fn holds_enemy_of(&self, color: Color) -> bool {
        matches!(self.piece, Some(p) if p.color != color)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    squares: [[Square; 8]; 8],
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    // Board vuota da popolare in fase di setup
    pub fn new() -> Self {
        let mut squares = [[Square::empty(Coord { row: 0, col: 0 }); 8]; 8];
        for (row, cells) in squares.iter_mut().enumerate() {
            for (col, cell) in cells.iter_mut().enumerate() {
                cell.coord = Coord {
                    row: row as u8,
                    col: col as u8,
                };
            }
        }
        Self { squares }
    }

    #[inline]
    pub fn square(&self, at: Coord) -> &Square {
        &self.squares[at.row as usize][at.col as usize]
    }

    #[inline]
    fn square_mut(&mut self, at: Coord) -> &mut Square {
        &mut self.squares[at.row as usize][at.col as usize]
    }

    pub fn piece_at(&self, at: Coord) -> Option<Piece> {
        self.square(at).piece
    }

    pub fn is_empty(&self, at: Coord) -> bool {
        self.square(at).is_empty()
    }

    /// Put a piece on `at`. An enemy occupant is replaced (a capture) and
    /// returned; a same-color occupant is an error and the board is unchanged.
    pub fn place_piece(&mut self, at: Coord, kind: PieceKind, color: Color) -> Result<Option<Piece>> {
        let cell = self.square_mut(at);
        if cell.color() == Some(color) {
            return Err(ChessError::OccupiedCell { square: at, color });
        }
        Ok(cell.piece.replace(Piece::new(kind, color)))
    }

    /// Clear `at` unconditionally, returning what stood there
    pub fn remove_piece(&mut self, at: Coord) -> Option<Piece> {
        self.square_mut(at).piece.take()
    }

    /// Independent deep copy used for speculative evaluation
    pub fn snapshot(&self) -> Board {
        self.clone()
    }

    /// Squares in scan order: a1, b1, ..., h1, a2, ..., h8
    pub fn squares(&self) -> impl Iterator<Item = &Square> {
        self.squares.iter().flatten()
    }

    /// Ranks from rank 1 to rank 8
    pub fn ranks(&self) -> impl DoubleEndedIterator<Item = &[Square; 8]> + ExactSizeIterator {
        self.squares.iter()
    }

    /// Occupied squares with their pieces, in scan order
    pub fn occupied(&self) -> impl Iterator<Item = (Coord, Piece)> + '_ {
        self.squares()
            .filter_map(|cell| cell.piece.map(|piece| (cell.coord, piece)))
    }

    /// All squares holding a piece of `color`, in scan order
    pub fn pieces_of(&self, color: Color) -> Vec<Coord> {
        self.occupied()
            .filter(|(_, piece)| piece.color == color)
            .map(|(at, _)| at)
            .collect()
    }

    /// Squares of every king of `color`. Piece counts are not enforced, so
    /// this may be empty or hold more than one square.
    pub fn king_squares(&self, color: Color) -> Vec<Coord> {
        self.occupied()
            .filter(|(_, piece)| *piece == Piece::new(PieceKind::King, color))
            .map(|(at, _)| at)
            .collect()
    }
}

// Simple display (fen-like letters, white uppercase)
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in (0..8).rev() {
            for col in 0..8 {
                match self.squares[row][col].piece {
                    Some(Piece { kind, color }) => {
                        let ch = kind.letter().to_ascii_uppercase();
                        let ch = match color {
                            Color::White => ch,
                            Color::Black => ch.to_ascii_lowercase(),
                        };
                        write!(f, "{} ", ch)?;
                    }
                    None => write!(f, ". ")?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
