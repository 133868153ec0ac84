//! Uniform random legal moves.
//!
//! Drives property tests, the perft bench and the console `random` command.
//! Nothing here evaluates positions.

use rand::prelude::IndexedRandom;
use rand::Rng;
use tracing::trace;

use crate::chess_errors::ChessResult;
use crate::game_state::chess_types::{PieceKind, Square};
use crate::game_state::game_state::GameState;
use crate::game_state::undo_state::MoveRecord;
use crate::moves::move_descriptions::CandidateMove;

/// A legal move of the side to move, or `None` when there is none.
pub fn choose_random_move<R: Rng + ?Sized>(
    game_state: &GameState,
    rng: &mut R,
) -> Option<(Square, CandidateMove)> {
    let legal_moves = game_state.legal_moves();
    legal_moves.choose(rng).copied()
}

/// Plays one random legal move. A pawn left on its far rank is promoted to a
/// random piece so the game can continue.
pub fn play_random_move<R: Rng + ?Sized>(
    game_state: &mut GameState,
    rng: &mut R,
) -> ChessResult<Option<MoveRecord>> {
    let Some((from, candidate)) = choose_random_move(game_state, rng) else {
        return Ok(None);
    };

    game_state.try_make_move(from, candidate.to)?;
    if let Some(square) = game_state.pending_promotion() {
        let kind = PieceKind::PROMOTION_TARGETS
            .choose(rng)
            .copied()
            .unwrap_or(PieceKind::Queen);
        game_state.try_promote_pawn(square, kind)?;
    }

    Ok(game_state.move_history().last().copied())
}

/// Plays up to `plies` random moves, stopping early when the side to move has
/// no legal move. Returns the records of the moves played.
pub fn random_playout<R: Rng + ?Sized>(
    game_state: &mut GameState,
    plies: usize,
    rng: &mut R,
) -> ChessResult<Vec<MoveRecord>> {
    let mut played = Vec::with_capacity(plies);
    for _ in 0..plies {
        match play_random_move(game_state, rng)? {
            Some(record) => played.push(record),
            None => break,
        }
    }
    trace!(plies = played.len(), "random playout finished");
    Ok(played)
}
