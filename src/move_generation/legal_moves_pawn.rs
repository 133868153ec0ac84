use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_shared::{is_enemy_of, piece_on_board};
use crate::moves::move_descriptions::CandidateMove;
use crate::moves::pawn_moves::{pawn_capture_targets, pawn_double_push, pawn_single_push};

/// Forward pushes onto empty squares and diagonal captures. No en passant.
pub fn generate_pawn_moves(
    game_state: &GameState,
    from: Square,
    color: Color,
    out: &mut Vec<CandidateMove>,
) {
    let board = game_state.board();

    if let Some(one_step) = pawn_single_push(color, from) {
        if piece_on_board(board, one_step).is_none() {
            out.push(CandidateMove::quiet(one_step));

            if let Some(two_step) = pawn_double_push(color, from) {
                if piece_on_board(board, two_step).is_none() {
                    out.push(CandidateMove::quiet(two_step));
                }
            }
        }
    }

    out.extend(
        pawn_capture_targets(color, from)
            .filter(|to| is_enemy_of(board, *to, color))
            .map(CandidateMove::quiet),
    );
}

#[cfg(test)]
mod tests {
    use super::generate_pawn_moves;
    use crate::game_state::{chess_types::*, game_state::GameState};
    use crate::utils::algebraic::algebraic_to_square;

    fn targets(fen: &str, from: &str) -> Vec<String> {
        let game = GameState::from_fen(fen).expect("test FEN should parse");
        let from = algebraic_to_square(from).expect("from square");
        let color = game.piece_on(from).expect("pawn on from").color;
        let mut out = Vec::new();
        generate_pawn_moves(&game, from, color, &mut out);
        let mut names: Vec<String> = out.iter().map(|m| m.to.to_string()).collect();
        names.sort();
        names
    }

    #[test]
    fn start_pawn_has_single_and_double_push() {
        let game = GameState::new_game();
        assert_eq!(targets(&game.to_fen(), "e2"), vec!["e3", "e4"]);
        assert_eq!(targets(&game.to_fen(), "d7"), vec!["d5", "d6"]);
    }

    #[test]
    fn blocked_pawn_cannot_jump() {
        assert!(targets("4k3/8/8/8/8/4n3/4P3/4K3 w - - 0 1", "e2").is_empty());
        assert_eq!(targets("4k3/8/8/8/4n3/8/4P3/4K3 w - - 0 1", "e2"), vec!["e3"]);
    }

    #[test]
    fn pawn_captures_only_enemy_diagonals() {
        assert_eq!(
            targets("4k3/8/8/3p1P2/4P3/8/8/4K3 w - - 0 1", "e4"),
            vec!["d5", "e5"]
        );
    }

    #[test]
    fn pawn_on_far_rank_has_no_moves() {
        let game = GameState::from_fen("4P3/8/8/8/8/8/8/k3K3 w - - 0 1").expect("fen");
        let mut out = Vec::new();
        let e8 = algebraic_to_square("e8").expect("e8");
        generate_pawn_moves(&game, e8, Color::White, &mut out);
        assert!(out.is_empty());
    }
}
