use crate::game_state::chess_types::*;
use crate::utils::algebraic::move_to_algebraic;

/// One entry of the move history. Holds everything `undo_last_move` needs to
/// restore the position exactly, including the castling rights that were in
/// force before the move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveRecord {
    pub from: Square,
    pub to: Square,
    pub moved_piece: Piece,
    pub captured_piece: Option<Piece>,
    pub castling: Option<CastlingSide>,
    /// Kind the pawn became on the far rank, once promoted.
    pub promotion: Option<PieceKind>,
    pub prev_castling_rights: CastlingRights,
}

impl MoveRecord {
    #[inline]
    pub const fn is_castling(&self) -> bool {
        self.castling.is_some()
    }

    #[inline]
    pub const fn is_capture(&self) -> bool {
        self.captured_piece.is_some()
    }

    /// `"<from>-<to>"`, e.g. `"e2-e4"`.
    pub fn to_algebraic(&self) -> String {
        move_to_algebraic(self.from, self.to)
    }
}
