//! Castling preconditions.
//!
//! Attack tests here use the directional scan from `legal_move_checks`, never
//! the move generator, so castling never recurses into king move generation.

use crate::game_state::chess_rules::{
    castling_gap_cols, castling_king_path_cols, castling_rook_home_col, KING_HOME_COL,
};
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_checks::{is_king_in_check, is_square_under_attack};

/// True iff `color` may castle towards `side` in the current position.
pub fn can_castle(game_state: &GameState, color: Color, side: CastlingSide) -> bool {
    if !game_state.castling_rights().has(color, side) {
        return false;
    }

    let row = color.home_row();
    let king = Piece::new(color, PieceKind::King);
    let king_home = Square::at(row, KING_HOME_COL);
    if game_state.king_square(color) != king_home || game_state.piece_on(king_home) != Some(king) {
        return false;
    }

    if is_king_in_check(game_state.board(), game_state.king_squares(), color) {
        return false;
    }

    let gap_is_empty = castling_gap_cols(side)
        .iter()
        .all(|col| game_state.piece_on(Square::at(row, *col)).is_none());
    if !gap_is_empty {
        return false;
    }

    let rook_home = Square::at(row, castling_rook_home_col(side));
    if game_state.piece_on(rook_home) != Some(Piece::new(color, PieceKind::Rook)) {
        return false;
    }

    !castling_king_path_cols(side)
        .iter()
        .any(|col| is_square_under_attack(game_state, Square::at(row, *col), color))
}
