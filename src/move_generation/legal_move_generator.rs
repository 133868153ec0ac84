//! Legal move generation pipeline.
//!
//! Dispatches to the per-piece pseudo-legal generators, then simulates each
//! candidate on a scratch copy of the board and king squares and keeps only
//! moves after which the mover's king is not attacked.

use crate::chess_errors::{ChessErrors, ChessResult};
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_apply::apply_to_board;
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::legal_move_shared::pieces_of;
use crate::move_generation::legal_moves_bishop::generate_bishop_moves;
use crate::move_generation::legal_moves_king::generate_king_moves;
use crate::move_generation::legal_moves_knight::generate_knight_moves;
use crate::move_generation::legal_moves_pawn::generate_pawn_moves;
use crate::move_generation::legal_moves_queen::generate_queen_moves;
use crate::move_generation::legal_moves_rook::generate_rook_moves;
use crate::move_generation::move_generator::MoveGenerator;
use crate::moves::move_descriptions::CandidateMove;

/// Movement rules only; the basis for legality testing.
pub struct PseudoLegalMoveGenerator;

/// Pseudo-legal moves of the side to move that keep its king safe.
pub struct LegalMoveGenerator;

impl MoveGenerator for PseudoLegalMoveGenerator {
    fn moves_for(&self, game_state: &GameState, from: Square) -> Vec<CandidateMove> {
        pseudo_legal_moves_for(game_state, from)
    }
}

impl MoveGenerator for LegalMoveGenerator {
    fn moves_for(&self, game_state: &GameState, from: Square) -> Vec<CandidateMove> {
        legal_moves_for(game_state, from)
    }
}

/// Pseudo-legal candidates for whichever piece stands on `from`, regardless
/// of the side to move. Empty squares yield nothing.
pub fn pseudo_legal_moves_for(game_state: &GameState, from: Square) -> Vec<CandidateMove> {
    let Some(piece) = game_state.piece_on(from) else {
        return Vec::new();
    };

    let mut out = Vec::with_capacity(28);
    match piece.kind {
        PieceKind::Pawn => generate_pawn_moves(game_state, from, piece.color, &mut out),
        PieceKind::Knight => generate_knight_moves(game_state, from, piece.color, &mut out),
        PieceKind::Bishop => generate_bishop_moves(game_state, from, piece.color, &mut out),
        PieceKind::Rook => generate_rook_moves(game_state, from, piece.color, &mut out),
        PieceKind::Queen => generate_queen_moves(game_state, from, piece.color, &mut out),
        PieceKind::King => generate_king_moves(game_state, from, piece.color, &mut out),
    }
    out
}

/// Legal moves of the piece on `from`. Pieces of the side not on move have
/// none.
pub fn legal_moves_for(game_state: &GameState, from: Square) -> Vec<CandidateMove> {
    match game_state.piece_on(from) {
        Some(piece) if piece.color == game_state.side_to_move() => {}
        _ => return Vec::new(),
    }

    let mut moves = pseudo_legal_moves_for(game_state, from);
    moves.retain(|candidate| keeps_king_safe(game_state, from, *candidate));
    moves
}

/// All legal moves of the side to move, grouped by origin square.
pub fn all_legal_moves(game_state: &GameState) -> Vec<(Square, CandidateMove)> {
    pieces_of(game_state.board(), game_state.side_to_move())
        .flat_map(|(from, _)| {
            legal_moves_for(game_state, from)
                .into_iter()
                .map(move |candidate| (from, candidate))
        })
        .collect()
}

/// Short-circuits on the first legal move found.
pub fn has_any_legal_move(game_state: &GameState) -> bool {
    pieces_of(game_state.board(), game_state.side_to_move()).any(|(from, _)| {
        pseudo_legal_moves_for(game_state, from)
            .into_iter()
            .any(|candidate| keeps_king_safe(game_state, from, candidate))
    })
}

/// Plays `candidate` on a scratch copy and tests the mover's king.
pub fn keeps_king_safe(game_state: &GameState, from: Square, candidate: CandidateMove) -> bool {
    let Some(mover) = game_state.piece_on(from) else {
        return false;
    };

    let mut board = *game_state.board();
    let mut king_squares = *game_state.king_squares();
    apply_to_board(&mut board, &mut king_squares, from, candidate.to, candidate.castling);

    !is_king_in_check(&board, &king_squares, mover.color)
}

/// Validates `from -> to` for the side to move and returns the matching
/// candidate.
pub fn check_legal_move(game_state: &GameState, from: Square, to: Square) -> ChessResult<CandidateMove> {
    let piece = game_state.piece_on(from).ok_or(ChessErrors::EmptySquare(from))?;
    if piece.color != game_state.side_to_move() {
        return Err(ChessErrors::NotSideToMove {
            square: from,
            owner: piece.color,
            side_to_move: game_state.side_to_move(),
        });
    }

    pseudo_legal_moves_for(game_state, from)
        .into_iter()
        .find(|candidate| candidate.to == to)
        .filter(|candidate| keeps_king_safe(game_state, from, *candidate))
        .ok_or(ChessErrors::IllegalMove { from, to })
}

#[inline]
pub fn is_legal_move(game_state: &GameState, from: Square, to: Square) -> bool {
    check_legal_move(game_state, from, to).is_ok()
}
