//! Ray directions for bishops, rooks and queens, and a ray walker shared by
//! move generation and the check detector.

use crate::game_state::chess_types::Square;

pub const BISHOP_DIRECTIONS: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];
pub const ROOK_DIRECTIONS: [(i8, i8); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];
pub const QUEEN_DIRECTIONS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 1),
    (1, -1),
    (1, 1),
    (-1, 0),
    (1, 0),
    (0, -1),
    (0, 1),
];

#[inline]
pub const fn is_diagonal(direction: (i8, i8)) -> bool {
    direction.0 != 0 && direction.1 != 0
}

/// Squares from `from` (exclusive) to the board edge along `direction`.
#[derive(Debug, Clone, Copy)]
pub struct Ray {
    next: Option<Square>,
    direction: (i8, i8),
}

impl Ray {
    #[inline]
    pub fn new(from: Square, direction: (i8, i8)) -> Self {
        Self {
            next: from.offset(direction.0, direction.1),
            direction,
        }
    }
}

impl Iterator for Ray {
    type Item = Square;

    fn next(&mut self) -> Option<Square> {
        let current = self.next?;
        self.next = current.offset(self.direction.0, self.direction.1);
        Some(current)
    }
}
