//! Value types of the rules engine: colors, piece kinds, pieces, squares and
//! castling rights.
//!
//! Squares address an 8x8 grid by `(row, col)`. Row 0 is Black's home rank,
//! row 7 is White's home rank, and column 0 is the `a` file.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::chess_errors::ChessErrors;

pub const BOARD_SIZE: i8 = 8;

/// Side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    White,
    Black,
}

impl Color {
    pub const BOTH: [Color; 2] = [Color::White, Color::Black];

    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Color::White => 0,
            Color::Black => 1,
        }
    }

    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Row delta of a single pawn step.
    #[inline]
    pub const fn forward(self) -> i8 {
        match self {
            Color::White => -1,
            Color::Black => 1,
        }
    }

    /// Row holding this color's king and rooks at the start.
    #[inline]
    pub const fn home_row(self) -> i8 {
        match self {
            Color::White => 7,
            Color::Black => 0,
        }
    }

    #[inline]
    pub const fn pawn_start_row(self) -> i8 {
        match self {
            Color::White => 6,
            Color::Black => 1,
        }
    }

    /// Far rank on which this color's pawns promote.
    #[inline]
    pub const fn promotion_row(self) -> i8 {
        self.opposite().home_row()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => write!(f, "white"),
            Color::Black => write!(f, "black"),
        }
    }
}

/// Piece kind; color is carried separately by `Piece`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
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

    pub const PROMOTION_TARGETS: [PieceKind; 4] = [
        PieceKind::Queen,
        PieceKind::Rook,
        PieceKind::Bishop,
        PieceKind::Knight,
    ];

    #[inline]
    pub const fn index(self) -> usize {
        match self {
            PieceKind::Pawn => 0,
            PieceKind::Knight => 1,
            PieceKind::Bishop => 2,
            PieceKind::Rook => 3,
            PieceKind::Queen => 4,
            PieceKind::King => 5,
        }
    }

    /// Magnitude of the signed wire encoding (`Pawn == 1` .. `King == 6`).
    #[inline]
    pub const fn code(self) -> i8 {
        self.index() as i8 + 1
    }

    /// Inverse of [`PieceKind::code`]; the sign of `code` is ignored.
    pub fn from_code(code: i8) -> Option<Self> {
        match code.unsigned_abs() {
            1 => Some(PieceKind::Pawn),
            2 => Some(PieceKind::Knight),
            3 => Some(PieceKind::Bishop),
            4 => Some(PieceKind::Rook),
            5 => Some(PieceKind::Queen),
            6 => Some(PieceKind::King),
            _ => None,
        }
    }

    #[inline]
    pub const fn is_promotion_target(self) -> bool {
        matches!(
            self,
            PieceKind::Queen | PieceKind::Rook | PieceKind::Bishop | PieceKind::Knight
        )
    }

    /// Lowercase FEN letter.
    pub const fn to_char(self) -> char {
        match self {
            PieceKind::Pawn => 'p',
            PieceKind::Knight => 'n',
            PieceKind::Bishop => 'b',
            PieceKind::Rook => 'r',
            PieceKind::Queen => 'q',
            PieceKind::King => 'k',
        }
    }

    pub fn from_char(ch: char) -> Option<Self> {
        match ch.to_ascii_lowercase() {
            'p' => Some(PieceKind::Pawn),
            'n' => Some(PieceKind::Knight),
            'b' => Some(PieceKind::Bishop),
            'r' => Some(PieceKind::Rook),
            'q' => Some(PieceKind::Queen),
            'k' => Some(PieceKind::King),
            _ => None,
        }
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PieceKind::Pawn => "pawn",
            PieceKind::Knight => "knight",
            PieceKind::Bishop => "bishop",
            PieceKind::Rook => "rook",
            PieceKind::Queen => "queen",
            PieceKind::King => "king",
        };
        f.write_str(name)
    }
}

/// Accepts full names (`"knight"`) or single letters (`"n"`), any case.
impl FromStr for PieceKind {
    type Err = ChessErrors;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        let kind = match lower.as_str() {
            "pawn" => Some(PieceKind::Pawn),
            "knight" => Some(PieceKind::Knight),
            "bishop" => Some(PieceKind::Bishop),
            "rook" => Some(PieceKind::Rook),
            "queen" => Some(PieceKind::Queen),
            "king" => Some(PieceKind::King),
            _ => {
                let mut chars = lower.chars();
                match (chars.next(), chars.next()) {
                    (Some(ch), None) => PieceKind::from_char(ch),
                    _ => None,
                }
            }
        };
        kind.ok_or_else(|| ChessErrors::UnknownPieceKind(s.to_owned()))
    }
}

/// A colored piece. Board cells hold `Option<Piece>`; `None` is empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub color: Color,
    pub kind: PieceKind,
}

impl Piece {
    #[inline]
    pub const fn new(color: Color, kind: PieceKind) -> Self {
        Self { color, kind }
    }

    /// Signed encoding: magnitude is the kind, positive is White.
    #[inline]
    pub const fn code(self) -> i8 {
        match self.color {
            Color::White => self.kind.code(),
            Color::Black => -self.kind.code(),
        }
    }

    pub fn from_code(code: i8) -> Option<Self> {
        let kind = PieceKind::from_code(code)?;
        let color = if code > 0 { Color::White } else { Color::Black };
        Some(Self::new(color, kind))
    }

    #[inline]
    pub const fn is_white(self) -> bool {
        matches!(self.color, Color::White)
    }

    /// FEN letter: uppercase for White, lowercase for Black.
    pub const fn to_fen_char(self) -> char {
        let ch = self.kind.to_char();
        match self.color {
            Color::White => ch.to_ascii_uppercase(),
            Color::Black => ch,
        }
    }

    pub fn from_fen_char(ch: char) -> Option<Self> {
        let kind = PieceKind::from_char(ch)?;
        let color = if ch.is_ascii_uppercase() {
            Color::White
        } else {
            Color::Black
        };
        Some(Self::new(color, kind))
    }
}

/// Signed code of a board cell, `0` for empty.
#[inline]
pub fn cell_code(cell: Option<Piece>) -> i8 {
    cell.map_or(0, Piece::code)
}

/// True iff the cell holds a White piece. Empty is neither color.
#[inline]
pub fn is_white(cell: Option<Piece>) -> bool {
    matches!(cell, Some(piece) if piece.is_white())
}

#[inline]
pub const fn is_valid_square(row: i8, col: i8) -> bool {
    row >= 0 && row < BOARD_SIZE && col >= 0 && col < BOARD_SIZE
}

/// An on-board square. Only constructible through validating constructors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Square {
    row: i8,
    col: i8,
}

impl Square {
    #[inline]
    pub const fn new(row: i8, col: i8) -> Option<Self> {
        if is_valid_square(row, col) {
            Some(Self { row, col })
        } else {
            None
        }
    }

    /// Caller guarantees both coordinates are in range.
    #[inline]
    pub(crate) const fn at(row: i8, col: i8) -> Self {
        debug_assert!(is_valid_square(row, col));
        Self { row, col }
    }

    #[inline]
    pub const fn row(self) -> i8 {
        self.row
    }

    #[inline]
    pub const fn col(self) -> i8 {
        self.col
    }

    #[inline]
    pub const fn offset(self, d_row: i8, d_col: i8) -> Option<Self> {
        Self::new(self.row + d_row, self.col + d_col)
    }

    /// Square colour parity; equal values mean equally coloured squares.
    #[inline]
    pub const fn parity(self) -> u8 {
        ((self.row + self.col) % 2) as u8
    }

    /// Iterates the 64 squares row by row from row 0.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..BOARD_SIZE).flat_map(|row| (0..BOARD_SIZE).map(move |col| Square::at(row, col)))
    }

    /// File letter `'a' + col`.
    #[inline]
    pub fn file_char(self) -> char {
        char::from(b'a' + self.col as u8)
    }

    /// Rank digit `8 - row`.
    #[inline]
    pub fn rank_char(self) -> char {
        char::from(b'0' + (BOARD_SIZE - self.row) as u8)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.file_char(), self.rank_char())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CastlingSide {
    KingSide,
    QueenSide,
}

impl CastlingSide {
    pub const BOTH: [CastlingSide; 2] = [CastlingSide::KingSide, CastlingSide::QueenSide];

    #[inline]
    pub const fn index(self) -> usize {
        match self {
            CastlingSide::KingSide => 0,
            CastlingSide::QueenSide => 1,
        }
    }
}

/// Per-color, per-side castling eligibility. Rights are only ever revoked
/// during play; undo restores the values saved in the move record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CastlingRights {
    rights: [[bool; 2]; 2],
}

impl CastlingRights {
    pub const ALL: Self = Self {
        rights: [[true; 2]; 2],
    };
    pub const NONE: Self = Self {
        rights: [[false; 2]; 2],
    };

    #[inline]
    pub const fn has(self, color: Color, side: CastlingSide) -> bool {
        self.rights[color.index()][side.index()]
    }

    #[inline]
    pub fn revoke(&mut self, color: Color, side: CastlingSide) {
        self.rights[color.index()][side.index()] = false;
    }

    #[inline]
    pub fn revoke_all(&mut self, color: Color) {
        self.rights[color.index()] = [false; 2];
    }

    /// Only used when building a position from a description.
    #[inline]
    pub(crate) fn grant(&mut self, color: Color, side: CastlingSide) {
        self.rights[color.index()][side.index()] = true;
    }
}

pub type Board = [[Option<Piece>; 8]; 8];

/// King locations indexed by `Color::index`.
pub type KingSquares = [Square; 2];
