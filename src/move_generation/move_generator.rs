use crate::game_state::chess_types::Square;
use crate::game_state::game_state::GameState;
use crate::moves::move_descriptions::CandidateMove;

/// Produces candidate moves for the piece standing on a square.
///
/// Two implementations exist: `PseudoLegalMoveGenerator` follows piece
/// movement rules only, and `LegalMoveGenerator` additionally drops moves that
/// leave the mover's king in check. Attack detection never calls either, so
/// the call graph stays acyclic.
pub trait MoveGenerator {
    fn moves_for(&self, game_state: &GameState, from: Square) -> Vec<CandidateMove>;
}
