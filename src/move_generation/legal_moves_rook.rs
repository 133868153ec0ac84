use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_shared::push_sliding_moves;
use crate::moves::move_descriptions::CandidateMove;
use crate::moves::sliding_moves::ROOK_DIRECTIONS;

pub fn generate_rook_moves(
    game_state: &GameState,
    from: Square,
    color: Color,
    out: &mut Vec<CandidateMove>,
) {
    push_sliding_moves(game_state.board(), from, color, &ROOK_DIRECTIONS, out);
}
