//! Read-only view of a game for observers.
//!
//! A snapshot owns all of its data, so it can be serialized or sent to another
//! thread while the live `GameState` keeps changing. The board and captured
//! pieces use the signed piece encoding (`0` empty, `1..=6` White pawn..king,
//! negative for Black).

use serde::Serialize;

use crate::game_state::chess_types::{cell_code, Color, Piece, Square};
use crate::game_state::game_state::GameState;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GameSnapshot {
    pub board: [[i8; 8]; 8],
    pub side_to_move: Color,
    pub captured_pieces: Vec<i8>,
    pub is_check: bool,
    pub is_checkmate: bool,
    pub is_stalemate: bool,
    pub is_insufficient_material: bool,
    pub pending_promotion: Option<Square>,
    pub move_history: Vec<String>,
}

impl GameSnapshot {
    pub fn capture(game: &GameState) -> Self {
        let mut board = [[0i8; 8]; 8];
        for (row, cells) in game.board().iter().enumerate() {
            for (col, cell) in cells.iter().enumerate() {
                board[row][col] = cell_code(*cell);
            }
        }

        Self {
            board,
            side_to_move: game.side_to_move(),
            captured_pieces: game.captured_pieces().iter().map(|p| Piece::code(*p)).collect(),
            is_check: game.is_in_check(),
            is_checkmate: game.is_checkmate(),
            is_stalemate: game.is_stalemate(),
            is_insufficient_material: game.is_insufficient_material(),
            pending_promotion: game.pending_promotion(),
            move_history: game.move_history().iter().map(|m| m.to_algebraic()).collect(),
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
