use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_shared::push_sliding_moves;
use crate::moves::move_descriptions::CandidateMove;
use crate::moves::sliding_moves::BISHOP_DIRECTIONS;

pub fn generate_bishop_moves(
    game_state: &GameState,
    from: Square,
    color: Color,
    out: &mut Vec<CandidateMove>,
) {
    push_sliding_moves(game_state.board(), from, color, &BISHOP_DIRECTIONS, out);
}
