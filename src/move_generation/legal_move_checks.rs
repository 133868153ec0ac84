//! Attack detection by scanning outward from the target square.
//!
//! Every attacker pattern (pawn diagonals, knight jumps, slider rays and the
//! adjacent king) is looked up from the square being tested, so the cost is
//! bounded by the board size and no move lists are generated. Functions take
//! an explicit board so they can run on hypothetical positions.

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_shared::piece_on_board;
use crate::moves::king_moves::king_targets;
use crate::moves::knight_moves::knight_targets;
use crate::moves::pawn_moves::pawn_attack_sources;
use crate::moves::sliding_moves::{is_diagonal, Ray, QUEEN_DIRECTIONS};

/// True iff `king_squares[color]` is attacked by the other color on `board`.
#[inline]
pub fn is_king_in_check(board: &Board, king_squares: &KingSquares, color: Color) -> bool {
    is_square_attacked(board, king_squares[color.index()], color.opposite())
}

/// True iff the opponent of `color` attacks `square` in the live position.
#[inline]
pub fn is_square_under_attack(game_state: &GameState, square: Square, color: Color) -> bool {
    is_square_attacked(game_state.board(), square, color.opposite())
}

pub fn is_square_attacked(board: &Board, square: Square, attacker: Color) -> bool {
    let holds = |at: Square, kind: PieceKind| piece_on_board(board, at) == Some(Piece::new(attacker, kind));

    if pawn_attack_sources(attacker, square).any(|at| holds(at, PieceKind::Pawn)) {
        return true;
    }

    if knight_targets(square).any(|at| holds(at, PieceKind::Knight)) {
        return true;
    }

    if king_targets(square).any(|at| holds(at, PieceKind::King)) {
        return true;
    }

    QUEEN_DIRECTIONS
        .iter()
        .any(|direction| ray_hits_slider(board, square, *direction, attacker))
}

/// The first occupied square along the ray decides: a matching enemy slider
/// attacks, anything else blocks.
fn ray_hits_slider(board: &Board, from: Square, direction: (i8, i8), attacker: Color) -> bool {
    let diagonal = is_diagonal(direction);
    for at in Ray::new(from, direction) {
        let Some(piece) = piece_on_board(board, at) else {
            continue;
        };
        if piece.color != attacker {
            return false;
        }
        return match piece.kind {
            PieceKind::Queen => true,
            PieceKind::Bishop => diagonal,
            PieceKind::Rook => !diagonal,
            _ => false,
        };
    }
    false
}
