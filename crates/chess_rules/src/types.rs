//! Core value types shared by the rules engine, the session layer and the
//! solver wire protocol.

use serde::{Deserialize, Serialize};

use crate::error::{RulesError, RulesResult};

/// Side to move / piece ownership.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    White,
    Black,
}

impl Color {
    /// The other side.
    pub fn opponent(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Row delta of a pawn advance: White marches toward row 0, Black toward
    /// row 7.
    pub fn pawn_direction(self) -> i8 {
        match self {
            Color::White => -1,
            Color::Black => 1,
        }
    }

    /// Rank from which this side's pawns may take a double step.
    pub fn pawn_start_row(self) -> u8 {
        match self {
            Color::White => 6,
            Color::Black => 1,
        }
    }

    /// The opponent's back rank; a pawn arriving here promotes.
    pub fn promotion_row(self) -> u8 {
        match self {
            Color::White => 0,
            Color::Black => 7,
        }
    }

    /// Lowercase wire name, `white` / `black`.
    pub fn as_str(self) -> &'static str {
        match self {
            Color::White => "white",
            Color::Black => "black",
        }
    }
}

/// Kind of a piece, independent of its owner.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PieceKind {
    King,
    Queen,
    Rook,
    Knight,
    Bishop,
    Pawn,
}

impl PieceKind {
    /// Lowercase wire name, e.g. `knight`.
    pub fn as_str(self) -> &'static str {
        match self {
            PieceKind::King => "king",
            PieceKind::Queen => "queen",
            PieceKind::Rook => "rook",
            PieceKind::Knight => "knight",
            PieceKind::Bishop => "bishop",
            PieceKind::Pawn => "pawn",
        }
    }
}

/// A piece on the board. Owned by exactly one square; moving a piece hands
/// the value to the destination square rather than copying it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Piece {
    pub kind: PieceKind,
    pub color: Color,
}

impl Piece {
    pub fn new(color: Color, kind: PieceKind) -> Self {
        Piece { kind, color }
    }
}

/// A board coordinate: `(row, col)`, both in `0..=7`. Row 7 is White's back
/// rank, row 0 is Black's.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Square {
    row: u8,
    col: u8,
}

impl Square {
    /// Build a square from trusted in-range coordinates.
    ///
    /// # Panics
    ///
    /// Panics when either coordinate is out of `0..=7`; use [`Square::try_new`]
    /// for untrusted input.
    pub fn new(row: u8, col: u8) -> Self {
        Self::try_new(row as i16, col as i16).expect("square coordinates out of range")
    }

    /// Build a square from untrusted coordinates, rejecting anything outside
    /// the 8x8 grid.
    pub fn try_new(row: i16, col: i16) -> RulesResult<Self> {
        if (0..8).contains(&row) && (0..8).contains(&col) {
            Ok(Square {
                row: row as u8,
                col: col as u8,
            })
        } else {
            Err(RulesError::InvalidSquare { row, col })
        }
    }

    pub fn row(self) -> u8 {
        self.row
    }

    pub fn col(self) -> u8 {
        self.col
    }

    /// The square displaced by `(d_row, d_col)`, or `None` when the step
    /// leaves the board.
    pub fn offset(self, d_row: i8, d_col: i8) -> Option<Square> {
        Square::try_new(self.row as i16 + d_row as i16, self.col as i16 + d_col as i16).ok()
    }
}

impl std::fmt::Display for Square {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{})", self.row, self.col)
    }
}

/// A move as a `(from, to)` pair. Used for the session's last-move highlight
/// and for decoded solver replies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Move {
    pub from: Square,
    pub to: Square,
}

impl Move {
    pub fn new(from: Square, to: Square) -> Self {
        Move { from, to }
    }
}
