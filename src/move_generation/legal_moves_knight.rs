use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_shared::push_step_moves;
use crate::moves::knight_moves::knight_targets;
use crate::moves::move_descriptions::CandidateMove;

pub fn generate_knight_moves(
    game_state: &GameState,
    from: Square,
    color: Color,
    out: &mut Vec<CandidateMove>,
) {
    push_step_moves(game_state.board(), color, knight_targets(from), out);
}

#[cfg(test)]
mod tests {
    use super::generate_knight_moves;
    use crate::game_state::{chess_types::*, game_state::GameState};
    use crate::utils::algebraic::algebraic_to_square;

    #[test]
    fn start_knight_has_two_moves() {
        let game = GameState::new_game();
        let mut out = Vec::new();
        let g1 = algebraic_to_square("g1").expect("g1");
        generate_knight_moves(&game, g1, Color::White, &mut out);
        assert_eq!(out.len(), 2);
    }

    #[test]
    fn knight_captures_enemy_but_not_own_piece() {
        let game = GameState::from_fen("4k3/8/8/2p1P3/8/3N4/8/4K3 w - - 0 1").expect("fen");
        let mut out = Vec::new();
        let d3 = algebraic_to_square("d3").expect("d3");
        generate_knight_moves(&game, d3, Color::White, &mut out);
        let names: Vec<String> = out.iter().map(|m| m.to.to_string()).collect();
        assert!(names.contains(&"c5".to_owned()));
        assert!(!names.contains(&"e5".to_owned()));
        assert!(!names.contains(&"e1".to_owned()));
        assert_eq!(out.len(), 6);
    }
}
