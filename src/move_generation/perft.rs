use std::thread;

use crate::chess_errors::ChessResult;
use crate::game_state::chess_types::{PieceKind, Square};
use crate::game_state::game_config::{GameConfig, PromotionPolicy};
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_generator::all_legal_moves;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: usize,
    pub captures: usize,
    pub castles: usize,
    /// Pawn moves landing on the far rank. The walk promotes every such pawn
    /// to a queen and does not branch into underpromotions.
    pub promotions: usize,
    pub checks: usize,
    pub checkmates: usize,
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
        self.castles += rhs.castles;
        self.promotions += rhs.promotions;
        self.checks += rhs.checks;
        self.checkmates += rhs.checkmates;
    }
}

/// Private copy of the root that auto-queens, so no node is left with a
/// promotion pending.
fn search_copy(game_state: &GameState) -> GameState {
    let mut game = game_state.clone();
    game.set_config(GameConfig {
        promotion: PromotionPolicy::AutoQueen,
    });
    game
}

/// Counts leaf positions `depth` plies below `game_state`, walking the tree
/// with make/undo on a private copy.
pub fn perft(game_state: &GameState, depth: u8) -> ChessResult<PerftCounts> {
    let mut game = search_copy(game_state);
    let mut total = PerftCounts::default();
    perft_recurse(&mut game, depth, &mut total)?;
    Ok(total)
}

/// Splits the root moves across threads, one per root move.
pub fn perft_multi_threaded(game_state: &GameState, depth: u8) -> ChessResult<PerftCounts> {
    if depth == 0 {
        return perft(game_state, depth);
    }

    let mut total = PerftCounts::default();
    thread::scope(|scope| -> ChessResult<()> {
        let handles: Vec<_> = all_legal_moves(game_state)
            .into_iter()
            .map(|(from, candidate)| {
                scope.spawn(move || -> ChessResult<PerftCounts> {
                    let mut game = search_copy(game_state);
                    let mut local = PerftCounts::default();
                    play_and_count(&mut game, from, candidate.to, depth, &mut local)?;
                    Ok(local)
                })
            })
            .collect();

        for handle in handles {
            match handle.join() {
                Ok(local) => total.merge(local?),
                Err(panic) => std::panic::resume_unwind(panic),
            }
        }
        Ok(())
    })?;

    Ok(total)
}

fn perft_recurse(game: &mut GameState, depth: u8, counts: &mut PerftCounts) -> ChessResult<()> {
    if depth == 0 {
        counts.nodes += 1;
        return Ok(());
    }

    for (from, candidate) in all_legal_moves(game) {
        play_and_count(game, from, candidate.to, depth, counts)?;
    }
    Ok(())
}

/// Plays one move, tallies it when it is a leaf, otherwise descends, then
/// takes it back.
fn play_and_count(
    game: &mut GameState,
    from: Square,
    to: Square,
    depth: u8,
    counts: &mut PerftCounts,
) -> ChessResult<()> {
    let record = game.try_make_move(from, to)?;

    if depth == 1 {
        counts.nodes += 1;
        if record.is_capture() {
            counts.captures += 1;
        }
        if record.is_castling() {
            counts.castles += 1;
        }
        if record.moved_piece.kind == PieceKind::Pawn && to.row() == record.moved_piece.color.promotion_row() {
            counts.promotions += 1;
        }
        if game.is_in_check() {
            counts.checks += 1;
            if game.is_checkmate() {
                counts.checkmates += 1;
            }
        }
    } else {
        perft_recurse(game, depth - 1, counts)?;
    }

    game.try_undo_last_move()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn perft_depth_zero_counts_single_node() {
        let game = GameState::new_game();
        let counts = perft(&game, 0).expect("perft should run");
        assert_eq!(
            counts,
            PerftCounts {
                nodes: 1,
                ..PerftCounts::default()
            }
        );
    }

    #[test]
    fn start_position_shallow_counts() {
        let game = GameState::new_game();
        assert_eq!(perft(&game, 1).expect("perft should run").nodes, 20);

        let counts = perft(&game, 2).expect("perft should run");
        assert_eq!(counts.nodes, 400);
        assert_eq!(counts.captures, 0);
        assert_eq!(counts.checks, 0);
    }

    #[test]
    fn perft_leaves_input_untouched() {
        let game = GameState::new_game();
        let before = game.clone();
        perft(&game, 2).expect("perft should run");
        assert_eq!(game, before);
    }

    #[test]
    fn threaded_perft_matches_single_thread() {
        let game = GameState::new_game();
        let single = perft(&game, 3).expect("perft should run");
        let threaded = perft_multi_threaded(&game, 3).expect("perft should run");
        assert_eq!(single, threaded);
        assert_eq!(single.nodes, 8902);
        assert_eq!(single.captures, 34);
        assert_eq!(single.checks, 12);
    }

    #[test]
    fn castles_are_counted_at_the_leaves() {
        let game = GameState::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1").expect("FEN should parse");
        let counts = perft(&game, 1).expect("perft should run");
        assert_eq!(counts.castles, 2);
        assert_eq!(counts.nodes, 26);
    }

    #[test]
    fn promotions_are_queened_inside_the_walk() {
        let game = GameState::from_fen("8/4P3/8/8/8/8/k7/4K3 w - - 0 1").expect("FEN should parse");
        let before = game.clone();

        let counts = perft(&game, 1).expect("perft should run");
        assert_eq!(counts.nodes, 6);
        assert_eq!(counts.promotions, 1);

        let deeper = perft(&game, 2).expect("walk continues past the promotion");
        assert_eq!(deeper, perft_multi_threaded(&game, 2).expect("perft should run"));
        assert_eq!(game, before);
    }
}
