//! Terminal-state detection: checkmate, stalemate and insufficient material.

use serde::Serialize;

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::legal_move_generator::has_any_legal_move;

/// Outcome of the current position from the side to move's perspective.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "camelCase")]
pub enum GameStatus {
    InProgress,
    Check,
    Checkmate { winner: Color },
    Stalemate,
    InsufficientMaterial,
}

impl GameStatus {
    #[inline]
    pub fn is_terminal(self) -> bool {
        matches!(
            self,
            GameStatus::Checkmate { .. } | GameStatus::Stalemate | GameStatus::InsufficientMaterial
        )
    }
}

fn side_to_move_in_check(game_state: &GameState) -> bool {
    is_king_in_check(game_state.board(), game_state.king_squares(), game_state.side_to_move())
}

pub fn is_checkmate(game_state: &GameState) -> bool {
    side_to_move_in_check(game_state) && !has_any_legal_move(game_state)
}

pub fn is_stalemate(game_state: &GameState) -> bool {
    !side_to_move_in_check(game_state) && !has_any_legal_move(game_state)
}

/// Bare kings, a single minor piece against a bare king, or one bishop each
/// on squares of the same color.
pub fn is_insufficient_material(game_state: &GameState) -> bool {
    let mut minors: Vec<(Piece, Square)> = Vec::with_capacity(2);

    for square in Square::all() {
        let Some(piece) = game_state.piece_on(square) else {
            continue;
        };
        match piece.kind {
            PieceKind::King => {}
            PieceKind::Knight | PieceKind::Bishop => {
                if minors.len() == 2 {
                    return false;
                }
                minors.push((piece, square));
            }
            PieceKind::Pawn | PieceKind::Rook | PieceKind::Queen => return false,
        }
    }

    match minors.as_slice() {
        [] | [_] => true,
        [(a, a_square), (b, b_square)] => {
            a.kind == PieceKind::Bishop
                && b.kind == PieceKind::Bishop
                && a.color != b.color
                && a_square.parity() == b_square.parity()
        }
        _ => false,
    }
}

/// Checkmate and stalemate take precedence over the material test.
pub fn game_status(game_state: &GameState) -> GameStatus {
    let in_check = side_to_move_in_check(game_state);
    let can_move = has_any_legal_move(game_state);

    match (in_check, can_move) {
        (true, false) => GameStatus::Checkmate {
            winner: game_state.side_to_move().opposite(),
        },
        (false, false) => GameStatus::Stalemate,
        _ if is_insufficient_material(game_state) => GameStatus::InsufficientMaterial,
        (true, true) => GameStatus::Check,
        (false, true) => GameStatus::InProgress,
    }
}
