use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_shared::push_sliding_moves;
use crate::moves::move_descriptions::CandidateMove;
use crate::moves::sliding_moves::QUEEN_DIRECTIONS;

pub fn generate_queen_moves(
    game_state: &GameState,
    from: Square,
    color: Color,
    out: &mut Vec<CandidateMove>,
) {
    push_sliding_moves(game_state.board(), from, color, &QUEEN_DIRECTIONS, out);
}

#[cfg(test)]
mod tests {
    use super::generate_queen_moves;
    use crate::game_state::{chess_types::*, game_state::GameState};
    use crate::move_generation::legal_moves_bishop::generate_bishop_moves;
    use crate::move_generation::legal_moves_rook::generate_rook_moves;
    use crate::utils::algebraic::algebraic_to_square;

    #[test]
    fn queen_moves_are_bishop_plus_rook_moves() {
        let game =
            GameState::from_fen("4k3/1p6/8/8/3Q2P1/8/8/4K3 w - - 0 1").expect("fen");
        let d4 = algebraic_to_square("d4").expect("d4");

        let mut queen = Vec::new();
        generate_queen_moves(&game, d4, Color::White, &mut queen);

        let mut union = Vec::new();
        generate_bishop_moves(&game, d4, Color::White, &mut union);
        generate_rook_moves(&game, d4, Color::White, &mut union);

        let mut queen_to: Vec<Square> = queen.iter().map(|m| m.to).collect();
        let mut union_to: Vec<Square> = union.iter().map(|m| m.to).collect();
        queen_to.sort_by_key(|s| (s.row(), s.col()));
        union_to.sort_by_key(|s| (s.row(), s.col()));
        assert_eq!(queen_to, union_to);
    }
}
