use std::fmt;

use serde::Serialize;

use crate::game_state::chess_types::{CastlingSide, Square};

/// A destination produced by move generation. Castling candidates carry the
/// side they castle towards; the origin square is implied by the query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct CandidateMove {
    pub to: Square,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub castling: Option<CastlingSide>,
}

impl CandidateMove {
    #[inline]
    pub const fn quiet(to: Square) -> Self {
        Self { to, castling: None }
    }

    #[inline]
    pub const fn castle(to: Square, side: CastlingSide) -> Self {
        Self {
            to,
            castling: Some(side),
        }
    }
}

impl fmt::Display for CandidateMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.castling {
            Some(CastlingSide::KingSide) => write!(f, "{} (O-O)", self.to),
            Some(CastlingSide::QueenSide) => write!(f, "{} (O-O-O)", self.to),
            None => write!(f, "{}", self.to),
        }
    }
}
