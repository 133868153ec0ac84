//! Pawn geometry: pushes, capture diagonals and the reverse lookup used by the
//! check detector.

use crate::game_state::chess_types::{Color, Square};

const CAPTURE_COL_DELTAS: [i8; 2] = [-1, 1];

/// Square one step ahead of a `color` pawn on `from`.
#[inline]
pub fn pawn_single_push(color: Color, from: Square) -> Option<Square> {
    from.offset(color.forward(), 0)
}

/// Square two steps ahead, only from the pawn's starting row.
#[inline]
pub fn pawn_double_push(color: Color, from: Square) -> Option<Square> {
    if from.row() != color.pawn_start_row() {
        return None;
    }
    from.offset(2 * color.forward(), 0)
}

/// The forward diagonals a `color` pawn on `from` captures onto.
#[inline]
pub fn pawn_capture_targets(color: Color, from: Square) -> impl Iterator<Item = Square> {
    CAPTURE_COL_DELTAS
        .into_iter()
        .filter_map(move |d_col| from.offset(color.forward(), d_col))
}

/// Squares from which a `pawn_color` pawn would capture onto `target`.
#[inline]
pub fn pawn_attack_sources(pawn_color: Color, target: Square) -> impl Iterator<Item = Square> {
    CAPTURE_COL_DELTAS
        .into_iter()
        .filter_map(move |d_col| target.offset(-pawn_color.forward(), d_col))
}
