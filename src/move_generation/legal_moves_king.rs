use crate::game_state::chess_rules::castling_king_target_col;
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_castling::can_castle;
use crate::move_generation::legal_move_shared::push_step_moves;
use crate::moves::king_moves::king_targets;
use crate::moves::move_descriptions::CandidateMove;

/// Adjacent steps plus a two-column castling candidate per available side.
pub fn generate_king_moves(
    game_state: &GameState,
    from: Square,
    color: Color,
    out: &mut Vec<CandidateMove>,
) {
    push_step_moves(game_state.board(), color, king_targets(from), out);
    generate_castling_moves(game_state, from, color, out);
}

fn generate_castling_moves(
    game_state: &GameState,
    from: Square,
    color: Color,
    out: &mut Vec<CandidateMove>,
) {
    for side in CastlingSide::BOTH {
        if !can_castle(game_state, color, side) {
            continue;
        }
        if let Some(to) = Square::new(from.row(), castling_king_target_col(side)) {
            out.push(CandidateMove::castle(to, side));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::generate_king_moves;
    use crate::game_state::{chess_types::*, game_state::GameState};
    use crate::utils::algebraic::algebraic_to_square;

    fn king_moves(fen: &str, from: &str) -> Vec<(String, Option<CastlingSide>)> {
        let game = GameState::from_fen(fen).expect("test FEN should parse");
        let from = algebraic_to_square(from).expect("from");
        let color = game.piece_on(from).expect("king").color;
        let mut out = Vec::new();
        generate_king_moves(&game, from, color, &mut out);
        out.into_iter().map(|m| (m.to.to_string(), m.castling)).collect()
    }

    #[test]
    fn king_in_start_position_has_no_moves() {
        assert!(king_moves(&GameState::new_game().to_fen(), "e1").is_empty());
    }

    #[test]
    fn cleared_back_rank_adds_both_castling_candidates() {
        let moves = king_moves("r3k2r/pppppppp/8/8/8/8/PPPPPPPP/R3K2R w KQkq - 0 1", "e1");
        assert!(moves.contains(&("g1".to_owned(), Some(CastlingSide::KingSide))));
        assert!(moves.contains(&("c1".to_owned(), Some(CastlingSide::QueenSide))));
        assert!(moves.contains(&("f1".to_owned(), None)));
        assert!(moves.contains(&("d1".to_owned(), None)));
        assert_eq!(moves.len(), 4);
    }

    #[test]
    fn black_king_castles_on_row_zero() {
        let moves = king_moves("r3k2r/8/8/8/8/8/8/4K3 b kq - 0 1", "e8");
        assert!(moves.contains(&("g8".to_owned(), Some(CastlingSide::KingSide))));
        assert!(moves.contains(&("c8".to_owned(), Some(CastlingSide::QueenSide))));
    }
}
