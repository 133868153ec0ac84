//! Canonical chess-rule constants.
//!
//! Starting arrangement and castling geometry. Columns are `0 == a` through
//! `7 == h`; the home row of each color comes from `Color::home_row`.

use crate::game_state::chess_types::{CastlingSide, PieceKind};

/// Standard chess starting position in Forsyth-Edwards Notation (FEN).
pub const STARTING_POSITION_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// Back-rank order from the `a` file to the `h` file.
pub const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

pub const KING_HOME_COL: i8 = 4;

/// Column of the rook taking part in castling on `side`.
#[inline]
pub const fn castling_rook_home_col(side: CastlingSide) -> i8 {
    match side {
        CastlingSide::KingSide => 7,
        CastlingSide::QueenSide => 0,
    }
}

/// Column the castling rook lands on.
#[inline]
pub const fn castling_rook_target_col(side: CastlingSide) -> i8 {
    match side {
        CastlingSide::KingSide => 5,
        CastlingSide::QueenSide => 3,
    }
}

/// Column the king lands on.
#[inline]
pub const fn castling_king_target_col(side: CastlingSide) -> i8 {
    match side {
        CastlingSide::KingSide => 6,
        CastlingSide::QueenSide => 2,
    }
}

/// Columns strictly between king and rook; all must be empty.
#[inline]
pub const fn castling_gap_cols(side: CastlingSide) -> &'static [i8] {
    match side {
        CastlingSide::KingSide => &[5, 6],
        CastlingSide::QueenSide => &[1, 2, 3],
    }
}

/// Columns the king crosses and lands on; none may be attacked.
#[inline]
pub const fn castling_king_path_cols(side: CastlingSide) -> &'static [i8] {
    match side {
        CastlingSide::KingSide => &[5, 6],
        CastlingSide::QueenSide => &[3, 2],
    }
}
