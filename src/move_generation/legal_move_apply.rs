//! Move execution, undo and promotion.
//!
//! `apply_to_board` is the single board transition shared by the legality
//! simulation and by `make_move`, so a simulated move and a played move can
//! never disagree about where pieces end up.

use tracing::{debug, info, trace, Level};

use crate::chess_errors::{ChessErrors, ChessResult};
use crate::game_state::chess_rules::{castling_rook_home_col, castling_rook_target_col};
use crate::game_state::game_config::PromotionPolicy;
use crate::game_state::undo_state::MoveRecord;
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::game_status::game_status;
use crate::move_generation::legal_move_generator::check_legal_move;
use crate::move_generation::legal_move_shared::piece_on_board;

/// Moves the piece on `from` to `to` (and the rook when castling) on a bare
/// board, keeping `king_squares` in sync. Returns the piece that stood on
/// `to`. The caller guarantees `from` is occupied.
pub(crate) fn apply_to_board(
    board: &mut Board,
    king_squares: &mut KingSquares,
    from: Square,
    to: Square,
    castling: Option<CastlingSide>,
) -> Option<Piece> {
    let moving = piece_on_board(board, from);
    let captured = piece_on_board(board, to);

    board[to.row() as usize][to.col() as usize] = moving;
    board[from.row() as usize][from.col() as usize] = None;

    if let Some(piece) = moving {
        if piece.kind == PieceKind::King {
            king_squares[piece.color.index()] = to;
        }
    }

    if let Some(side) = castling {
        let row = from.row() as usize;
        let rook_from = castling_rook_home_col(side) as usize;
        let rook_to = castling_rook_target_col(side) as usize;
        board[row][rook_to] = board[row][rook_from].take();
    }

    captured
}

/// Plays `from`-`to` for the side to move. Nothing moves while a pawn is
/// still waiting on its far rank.
pub fn make_move(game_state: &mut GameState, from: Square, to: Square) -> ChessResult<MoveRecord> {
    if let Some(square) = pending_promotion(game_state) {
        debug!(%from, %to, %square, "move rejected: promotion pending");
        return Err(ChessErrors::PromotionPending(square));
    }

    let candidate = match check_legal_move(game_state, from, to) {
        Ok(candidate) => candidate,
        Err(err) => {
            debug!(%from, %to, error = %err, "move rejected");
            return Err(err);
        }
    };

    let moved_piece = game_state
        .piece_on(from)
        .ok_or(ChessErrors::EmptySquare(from))?;
    let castling = candidate.castling;

    let mut record = MoveRecord {
        from,
        to,
        moved_piece,
        captured_piece: game_state.piece_on(to),
        castling,
        promotion: None,
        prev_castling_rights: game_state.castling_rights,
    };

    let captured = apply_to_board(
        &mut game_state.board,
        &mut game_state.king_squares,
        from,
        to,
        castling,
    );
    update_castling_rights(game_state, moved_piece, from, to);

    if let Some(piece) = captured {
        game_state.captured_pieces.push(piece);
    }

    if game_state.config.promotion == PromotionPolicy::AutoQueen
        && moved_piece.kind == PieceKind::Pawn
        && to.row() == moved_piece.color.promotion_row()
    {
        game_state.set_piece(to, Some(Piece::new(moved_piece.color, PieceKind::Queen)));
        record.promotion = Some(PieceKind::Queen);
    }

    game_state.move_history.push(record);
    game_state.side_to_move = game_state.side_to_move.opposite();

    trace!(mv = %record.to_algebraic(), piece = %moved_piece.kind, "move applied");
    if tracing::enabled!(Level::INFO) {
        let status = game_status(game_state);
        if status.is_terminal() {
            info!(?status, "game reached a terminal position");
        }
    }

    Ok(record)
}

/// Clears rights when the king moves, when a rook leaves its home corner, or
/// when anything lands on a home corner (capturing the rook there).
fn update_castling_rights(game_state: &mut GameState, moved_piece: Piece, from: Square, to: Square) {
    let rights = &mut game_state.castling_rights;

    if moved_piece.kind == PieceKind::King {
        rights.revoke_all(moved_piece.color);
    }

    for color in Color::BOTH {
        for side in CastlingSide::BOTH {
            let corner = Square::at(color.home_row(), castling_rook_home_col(side));
            let rook_left = moved_piece == Piece::new(color, PieceKind::Rook) && from == corner;
            if rook_left || to == corner {
                rights.revoke(color, side);
            }
        }
    }
}

pub fn undo_last_move(game_state: &mut GameState) -> ChessResult<MoveRecord> {
    let Some(record) = game_state.move_history.pop() else {
        debug!("undo rejected: history is empty");
        return Err(ChessErrors::EmptyHistory);
    };

    game_state.set_piece(record.from, Some(record.moved_piece));
    game_state.set_piece(record.to, record.captured_piece);

    if let Some(side) = record.castling {
        let row = record.from.row();
        let rook = game_state.piece_on(Square::at(row, castling_rook_target_col(side)));
        game_state.set_piece(Square::at(row, castling_rook_target_col(side)), None);
        game_state.set_piece(Square::at(row, castling_rook_home_col(side)), rook);
    }

    if record.moved_piece.kind == PieceKind::King {
        game_state.king_squares[record.moved_piece.color.index()] = record.from;
    }

    if record.captured_piece.is_some() {
        game_state.captured_pieces.pop();
    }

    game_state.castling_rights = record.prev_castling_rights;
    game_state.side_to_move = game_state.side_to_move.opposite();

    trace!(mv = %record.to_algebraic(), "move undone");
    Ok(record)
}

/// Replaces a pawn standing on its far rank with `kind`.
pub fn promote_pawn(game_state: &mut GameState, square: Square, kind: PieceKind) -> ChessResult<Piece> {
    let pawn = match game_state.piece_on(square) {
        Some(piece) if piece.kind == PieceKind::Pawn && square.row() == piece.color.promotion_row() => piece,
        _ => {
            debug!(%square, "promotion rejected: no pawn on its far rank");
            return Err(ChessErrors::NoPromotablePawn(square));
        }
    };

    if !kind.is_promotion_target() {
        debug!(%square, %kind, "promotion rejected: invalid target");
        return Err(ChessErrors::InvalidPromotionTarget(kind.to_string()));
    }

    let promoted = Piece::new(pawn.color, kind);
    game_state.set_piece(square, Some(promoted));

    if let Some(last) = game_state.move_history.last_mut() {
        if last.to == square && last.moved_piece == pawn {
            last.promotion = Some(kind);
        }
    }

    trace!(%square, %kind, "pawn promoted");
    Ok(promoted)
}

/// A pawn waiting on its far rank, if any.
pub fn pending_promotion(game_state: &GameState) -> Option<Square> {
    Color::BOTH.into_iter().find_map(|color| {
        let row = color.promotion_row();
        (0..BOARD_SIZE)
            .map(|col| Square::at(row, col))
            .find(|square| game_state.piece_on(*square) == Some(Piece::new(color, PieceKind::Pawn)))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::game_config::GameConfig;
    use crate::utils::algebraic::algebraic_to_square;

    fn sq(name: &str) -> Square {
        algebraic_to_square(name).expect("test square should parse")
    }

    fn game(fen: &str) -> GameState {
        GameState::from_fen(fen).expect("test FEN should parse")
    }

    #[test]
    fn illegal_move_leaves_game_unchanged() {
        let mut g = GameState::new_game();
        let before = g.clone();
        assert_eq!(
            make_move(&mut g, sq("e2"), sq("e5")),
            Err(ChessErrors::IllegalMove { from: sq("e2"), to: sq("e5") })
        );
        assert!(matches!(
            make_move(&mut g, sq("e7"), sq("e5")),
            Err(ChessErrors::NotSideToMove { .. })
        ));
        assert_eq!(make_move(&mut g, sq("e4"), sq("e5")), Err(ChessErrors::EmptySquare(sq("e4"))));
        assert_eq!(g, before);
    }

    #[test]
    fn capture_is_recorded_and_undone() {
        let mut g = game("4k3/8/8/3p4/4P3/8/8/4K3 w - - 0 1");
        let before = g.clone();
        let record = make_move(&mut g, sq("e4"), sq("d5")).expect("capture should be legal");
        assert_eq!(record.captured_piece, Some(Piece::new(Color::Black, PieceKind::Pawn)));
        assert_eq!(g.captured_pieces(), &[Piece::new(Color::Black, PieceKind::Pawn)]);
        assert_eq!(g.side_to_move(), Color::Black);

        undo_last_move(&mut g).expect("undo should succeed");
        assert_eq!(g, before);
    }

    #[test]
    fn undo_on_empty_history_fails() {
        let mut g = GameState::new_game();
        assert_eq!(undo_last_move(&mut g), Err(ChessErrors::EmptyHistory));
        assert_eq!(g, GameState::new_game());
    }

    #[test]
    fn castling_moves_rook_and_undo_restores_everything() {
        let mut g = game("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1");
        let before = g.clone();

        let record = make_move(&mut g, sq("e1"), sq("g1")).expect("castling should be legal");
        assert_eq!(record.castling, Some(CastlingSide::KingSide));
        assert_eq!(g.piece_on(sq("g1")), Some(Piece::new(Color::White, PieceKind::King)));
        assert_eq!(g.piece_on(sq("f1")), Some(Piece::new(Color::White, PieceKind::Rook)));
        assert_eq!(g.piece_on(sq("h1")), None);
        assert_eq!(g.king_square(Color::White), sq("g1"));
        assert!(!g.castling_rights().has(Color::White, CastlingSide::QueenSide));

        undo_last_move(&mut g).expect("undo should succeed");
        assert_eq!(g, before);
    }

    #[test]
    fn queen_side_castling_places_rook_on_d_file() {
        let mut g = game("r3k2r/8/8/8/8/8/8/R3K2R b KQkq - 0 1");
        make_move(&mut g, sq("e8"), sq("c8")).expect("castling should be legal");
        assert_eq!(g.piece_on(sq("c8")), Some(Piece::new(Color::Black, PieceKind::King)));
        assert_eq!(g.piece_on(sq("d8")), Some(Piece::new(Color::Black, PieceKind::Rook)));
        assert_eq!(g.piece_on(sq("a8")), None);
    }

    #[test]
    fn rook_leaving_corner_revokes_one_side() {
        let mut g = game("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1");
        make_move(&mut g, sq("h1"), sq("h4")).expect("rook move");
        let rights = g.castling_rights();
        assert!(!rights.has(Color::White, CastlingSide::KingSide));
        assert!(rights.has(Color::White, CastlingSide::QueenSide));

        // Moving back does not restore the right.
        make_move(&mut g, sq("a8"), sq("a7")).expect("black rook move");
        make_move(&mut g, sq("h4"), sq("h1")).expect("rook returns");
        assert!(!g.castling_rights().has(Color::White, CastlingSide::KingSide));
        assert!(!g.can_castle(Color::White, CastlingSide::KingSide));
    }

    #[test]
    fn capturing_corner_rook_revokes_opponent_right() {
        let mut g = game("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1");
        make_move(&mut g, sq("a1"), sq("a8")).expect("rook captures rook");
        let rights = g.castling_rights();
        assert!(!rights.has(Color::White, CastlingSide::QueenSide));
        assert!(!rights.has(Color::Black, CastlingSide::QueenSide));
        assert!(rights.has(Color::Black, CastlingSide::KingSide));
    }

    #[test]
    fn rook_off_its_corner_keeps_rights() {
        let mut g = game("4k3/8/8/8/8/R7/8/4K2R w K - 0 1");
        make_move(&mut g, sq("a3"), sq("a4")).expect("rook move");
        assert!(g.castling_rights().has(Color::White, CastlingSide::KingSide));
    }

    #[test]
    fn promotion_to_knight_keeps_color() {
        let mut g = game("8/4P3/8/8/8/8/k7/4K3 w - - 0 1");
        make_move(&mut g, sq("e7"), sq("e8")).expect("push to far rank");
        assert_eq!(pending_promotion(&g), Some(sq("e8")));

        let promoted = promote_pawn(&mut g, sq("e8"), PieceKind::Knight).expect("promotion");
        assert_eq!(promoted, Piece::new(Color::White, PieceKind::Knight));
        assert_eq!(g.piece_on(sq("e8")), Some(promoted));
        assert_eq!(pending_promotion(&g), None);
        assert_eq!(g.move_history().len(), 1);
        assert_eq!(g.move_history()[0].promotion, Some(PieceKind::Knight));

        undo_last_move(&mut g).expect("undo");
        assert_eq!(g.piece_on(sq("e7")), Some(Piece::new(Color::White, PieceKind::Pawn)));
        assert_eq!(g.piece_on(sq("e8")), None);
    }

    #[test]
    fn unresolved_promotion_blocks_further_moves() {
        let mut g = game("8/4P3/8/8/8/8/k7/4K3 w - - 0 1");
        make_move(&mut g, sq("e7"), sq("e8")).expect("push to far rank");
        let before = g.clone();

        assert_eq!(
            make_move(&mut g, sq("a2"), sq("a3")),
            Err(ChessErrors::PromotionPending(sq("e8")))
        );
        assert_eq!(
            make_move(&mut g, sq("e1"), sq("e2")),
            Err(ChessErrors::PromotionPending(sq("e8")))
        );
        assert_eq!(g, before);

        promote_pawn(&mut g, sq("e8"), PieceKind::Queen).expect("promotion");
        make_move(&mut g, sq("a2"), sq("a3")).expect("play resumes after promotion");
        assert_eq!(g.move_history().len(), 2);
    }

    #[test]
    fn pending_promotion_can_be_taken_back() {
        let mut g = game("8/4P3/8/8/8/8/k7/4K3 w - - 0 1");
        let before = g.clone();
        make_move(&mut g, sq("e7"), sq("e8")).expect("push to far rank");
        undo_last_move(&mut g).expect("undo while pending");
        assert_eq!(g, before);
    }

    #[test]
    fn black_pawn_promotes_on_row_seven() {
        let mut g = game("4k3/8/8/8/8/8/3p4/K7 b - - 0 1");
        make_move(&mut g, sq("d2"), sq("d1")).expect("push");
        let promoted = promote_pawn(&mut g, sq("d1"), PieceKind::Rook).expect("promotion");
        assert_eq!(promoted, Piece::new(Color::Black, PieceKind::Rook));
    }

    #[test]
    fn invalid_promotions_are_rejected_without_mutation() {
        let mut g = game("4k3/4P3/8/8/8/8/8/4K3 w - - 0 1");
        let before = g.clone();
        assert_eq!(
            promote_pawn(&mut g, sq("e7"), PieceKind::Queen),
            Err(ChessErrors::NoPromotablePawn(sq("e7")))
        );
        assert_eq!(
            promote_pawn(&mut g, sq("e1"), PieceKind::Queen),
            Err(ChessErrors::NoPromotablePawn(sq("e1")))
        );
        assert_eq!(g, before);

        let mut g = game("4P3/8/8/8/8/8/8/k3K3 w - - 0 1");
        let before = g.clone();
        assert!(matches!(
            promote_pawn(&mut g, sq("e8"), PieceKind::King),
            Err(ChessErrors::InvalidPromotionTarget(_))
        ));
        assert!(matches!(
            promote_pawn(&mut g, sq("e8"), PieceKind::Pawn),
            Err(ChessErrors::InvalidPromotionTarget(_))
        ));
        assert_eq!(g, before);
    }

    #[test]
    fn auto_queen_policy_promotes_inside_make_move() {
        let mut g = game("8/4P3/8/8/8/8/k7/4K3 w - - 0 1");
        g.set_config(GameConfig {
            promotion: PromotionPolicy::AutoQueen,
        });
        let record = make_move(&mut g, sq("e7"), sq("e8")).expect("push");
        assert_eq!(record.promotion, Some(PieceKind::Queen));
        assert_eq!(g.piece_on(sq("e8")), Some(Piece::new(Color::White, PieceKind::Queen)));
        assert_eq!(pending_promotion(&g), None);

        undo_last_move(&mut g).expect("undo");
        assert_eq!(g.piece_on(sq("e7")), Some(Piece::new(Color::White, PieceKind::Pawn)));
    }
}
