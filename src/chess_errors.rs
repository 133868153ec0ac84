//! Errors used throughout the rules engine.
//!
//! `ChessErrors` is the single error type of the crate. The public bool-valued
//! operations on `GameState` are thin wrappers over `try_*` twins that return
//! `ChessResult`, so a caller can either test for rejection or match on the
//! reason.
//!
//! Usage guidelines:
//! - Rejections caused by player input (illegal move, bad promotion, empty
//!   undo stack) are expected and recoverable; the game is left untouched.
//! - Parse failures (FEN, algebraic coordinates, configuration) carry the
//!   offending text so it can be shown back to the user.

use thiserror::Error;

use crate::game_state::chess_types::{Color, Square};

pub type ChessResult<T> = Result<T, ChessErrors>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChessErrors {
    /// A raw coordinate pair fell outside `[0, 8)`.
    #[error("square ({row}, {col}) is off the board")]
    SquareOutOfRange { row: i8, col: i8 },

    /// The source square of a move holds no piece.
    #[error("no piece on {0}")]
    EmptySquare(Square),

    /// The piece on the source square belongs to the side not on move.
    #[error("piece on {square} belongs to {owner}, but {side_to_move} is to move")]
    NotSideToMove {
        square: Square,
        owner: Color,
        side_to_move: Color,
    },

    /// The destination is not reachable, or reaching it exposes the own king.
    #[error("illegal move {from}-{to}")]
    IllegalMove { from: Square, to: Square },

    /// The square does not hold a pawn standing on its far rank.
    #[error("no promotable pawn on {0}")]
    NoPromotablePawn(Square),

    /// Pawns may only become a queen, rook, bishop or knight.
    #[error("cannot promote to {0}")]
    InvalidPromotionTarget(String),

    /// A pawn on its far rank must be promoted before play continues.
    #[error("pawn on {0} must be promoted first")]
    PromotionPending(Square),

    /// Undo was requested with an empty move history.
    #[error("no move to undo")]
    EmptyHistory,

    /// A piece name or letter could not be interpreted.
    #[error("unknown piece kind '{0}'")]
    UnknownPieceKind(String),

    /// An algebraic coordinate or coordinate move failed to parse.
    #[error("invalid algebraic text '{0}'")]
    InvalidAlgebraic(String),

    /// A FEN record was malformed or described an unplayable position.
    #[error("invalid FEN: {0}")]
    InvalidFen(String),

    /// Engine configuration could not be read.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}
