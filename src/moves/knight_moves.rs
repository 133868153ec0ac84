use crate::game_state::chess_types::Square;

/// `(d_row, d_col)` jumps of a knight.
pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

/// On-board squares a knight on `from` jumps to, ignoring occupancy.
#[inline]
pub fn knight_targets(from: Square) -> impl Iterator<Item = Square> {
    KNIGHT_OFFSETS
        .into_iter()
        .filter_map(move |(d_row, d_col)| from.offset(d_row, d_col))
}
