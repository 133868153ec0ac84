//! Crate root module declarations for the chess rules engine.
//!
//! Exposes the game state, move generation and notation utilities, plus the
//! console driver used by the `chess_arbiter` binary.

pub mod chess_errors;

pub mod game_state {
    pub mod chess_rules;
    pub mod chess_types;
    pub mod game_config;
    pub mod game_state;
    pub mod snapshot;
    pub mod undo_state;
}

pub mod moves {
    pub mod king_moves;
    pub mod knight_moves;
    pub mod move_descriptions;
    pub mod pawn_moves;
    pub mod sliding_moves;
}

pub mod move_generation {
    pub mod game_status;
    pub mod legal_move_apply;
    pub mod legal_move_castling;
    pub mod legal_move_checks;
    pub mod legal_move_generator;
    pub mod legal_move_shared;
    pub mod legal_moves_bishop;
    pub mod legal_moves_king;
    pub mod legal_moves_knight;
    pub mod legal_moves_pawn;
    pub mod legal_moves_queen;
    pub mod legal_moves_rook;
    pub mod move_generator;
    pub mod perft;
}

pub mod utils {
    pub mod algebraic;
    pub mod fen_generator;
    pub mod fen_parser;
    pub mod pgn;
    pub mod random_moves;
    pub mod render_game_state;
}

pub mod console {
    pub mod console_loop;
}

pub use chess_errors::{ChessErrors, ChessResult};
pub use game_state::chess_types::{CastlingSide, Color, Piece, PieceKind, Square};
pub use game_state::game_state::GameState;
