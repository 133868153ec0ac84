//! Authoritative game state and the engine's public operation set.
//!
//! `GameState` owns the board, the side to move, the cached king squares,
//! castling rights, the undo stack and the captured-piece list. It is mutated
//! only through `make_move`, `undo_last_move` and `promote_pawn`; each of them
//! either succeeds completely or leaves the value unchanged.
//!
//! The rule logic lives in `move_generation`; the methods here are the fixed
//! boundary a session layer is expected to call.

use crate::chess_errors::ChessResult;
use crate::game_state::chess_rules::{BACK_RANK, KING_HOME_COL};
use crate::game_state::chess_types::*;
use crate::game_state::game_config::GameConfig;
use crate::game_state::snapshot::GameSnapshot;
use crate::game_state::undo_state::MoveRecord;
use crate::move_generation::game_status::{self, GameStatus};
use crate::move_generation::legal_move_apply;
use crate::move_generation::legal_move_castling::can_castle;
use crate::move_generation::legal_move_checks::{is_king_in_check, is_square_under_attack};
use crate::move_generation::legal_move_generator::{
    all_legal_moves, is_legal_move, LegalMoveGenerator, PseudoLegalMoveGenerator,
};
use crate::move_generation::move_generator::MoveGenerator;
use crate::moves::move_descriptions::CandidateMove;
use crate::utils::fen_generator::generate_fen;
use crate::utils::fen_parser::parse_fen;
use crate::utils::render_game_state::render_game_state;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    pub(crate) board: Board,
    pub(crate) side_to_move: Color,
    pub(crate) king_squares: KingSquares,
    pub(crate) castling_rights: CastlingRights,
    pub(crate) move_history: Vec<MoveRecord>,
    pub(crate) captured_pieces: Vec<Piece>,
    pub(crate) config: GameConfig,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new_game()
    }
}

impl GameState {
    /// Standard initial position, White to move, all castling rights.
    pub fn new_game() -> Self {
        Self::with_config(GameConfig::default())
    }

    pub fn with_config(config: GameConfig) -> Self {
        let mut board: Board = [[None; 8]; 8];
        for color in Color::BOTH {
            let home = color.home_row() as usize;
            let pawns = color.pawn_start_row() as usize;
            for (col, kind) in BACK_RANK.iter().enumerate() {
                board[home][col] = Some(Piece::new(color, *kind));
                board[pawns][col] = Some(Piece::new(color, PieceKind::Pawn));
            }
        }

        Self {
            board,
            side_to_move: Color::White,
            king_squares: [
                Square::at(Color::White.home_row(), KING_HOME_COL),
                Square::at(Color::Black.home_row(), KING_HOME_COL),
            ],
            castling_rights: CastlingRights::ALL,
            move_history: Vec::new(),
            captured_pieces: Vec::new(),
            config,
        }
    }

    /// Replaces this game with a fresh one, keeping the configuration.
    pub fn reset(&mut self) {
        *self = Self::with_config(self.config);
    }

    /// Builds a position from FEN. En-passant and clock fields are ignored.
    pub fn from_fen(fen: &str) -> ChessResult<Self> {
        parse_fen(fen)
    }

    pub fn to_fen(&self) -> String {
        generate_fen(self)
    }

    pub fn render(&self) -> String {
        render_game_state(self)
    }

    // --- Read access ---

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    #[inline]
    pub fn king_square(&self, color: Color) -> Square {
        self.king_squares[color.index()]
    }

    #[inline]
    pub fn king_squares(&self) -> &KingSquares {
        &self.king_squares
    }

    #[inline]
    pub fn castling_rights(&self) -> CastlingRights {
        self.castling_rights
    }

    #[inline]
    pub fn move_history(&self) -> &[MoveRecord] {
        &self.move_history
    }

    #[inline]
    pub fn captured_pieces(&self) -> &[Piece] {
        &self.captured_pieces
    }

    #[inline]
    pub fn config(&self) -> GameConfig {
        self.config
    }

    pub fn set_config(&mut self, config: GameConfig) {
        self.config = config;
    }

    /// Piece at raw coordinates; `None` for empty or off-board squares.
    #[inline]
    pub fn piece_at(&self, row: i8, col: i8) -> Option<Piece> {
        Square::new(row, col).and_then(|square| self.piece_on(square))
    }

    #[inline]
    pub fn piece_on(&self, square: Square) -> Option<Piece> {
        self.board[square.row() as usize][square.col() as usize]
    }

    #[inline]
    pub(crate) fn set_piece(&mut self, square: Square, piece: Option<Piece>) {
        self.board[square.row() as usize][square.col() as usize] = piece;
    }

    // --- Move generation ---

    /// Candidate moves for the piece on `square`. With `skip_check_filter`
    /// the raw pseudo-legal set is returned.
    pub fn moves_for(&self, square: Square, skip_check_filter: bool) -> Vec<CandidateMove> {
        if skip_check_filter {
            PseudoLegalMoveGenerator.moves_for(self, square)
        } else {
            LegalMoveGenerator.moves_for(self, square)
        }
    }

    /// Every legal move of the side to move as `(from, candidate)` pairs.
    pub fn legal_moves(&self) -> Vec<(Square, CandidateMove)> {
        all_legal_moves(self)
    }

    pub fn is_legal_move(&self, from: Square, to: Square) -> bool {
        is_legal_move(self, from, to)
    }

    pub fn can_castle(&self, color: Color, side: CastlingSide) -> bool {
        can_castle(self, color, side)
    }

    /// True iff a piece of `color`'s opponent attacks `square`.
    pub fn is_square_under_attack(&self, square: Square, color: Color) -> bool {
        is_square_under_attack(self, square, color)
    }

    /// True iff the side to move is in check.
    pub fn is_in_check(&self) -> bool {
        is_king_in_check(&self.board, &self.king_squares, self.side_to_move)
    }

    // --- Mutation ---

    pub fn make_move(&mut self, from: Square, to: Square) -> bool {
        self.try_make_move(from, to).is_ok()
    }

    pub fn try_make_move(&mut self, from: Square, to: Square) -> ChessResult<MoveRecord> {
        legal_move_apply::make_move(self, from, to)
    }

    pub fn undo_last_move(&mut self) -> bool {
        self.try_undo_last_move().is_ok()
    }

    pub fn try_undo_last_move(&mut self) -> ChessResult<MoveRecord> {
        legal_move_apply::undo_last_move(self)
    }

    pub fn promote_pawn(&mut self, square: Square, kind: PieceKind) -> bool {
        self.try_promote_pawn(square, kind).is_ok()
    }

    pub fn try_promote_pawn(&mut self, square: Square, kind: PieceKind) -> ChessResult<Piece> {
        legal_move_apply::promote_pawn(self, square, kind)
    }

    /// Square of a pawn waiting on its far rank for a promotion choice.
    pub fn pending_promotion(&self) -> Option<Square> {
        legal_move_apply::pending_promotion(self)
    }

    // --- Terminal state ---

    pub fn is_checkmate(&self) -> bool {
        game_status::is_checkmate(self)
    }

    pub fn is_stalemate(&self) -> bool {
        game_status::is_stalemate(self)
    }

    pub fn is_insufficient_material(&self) -> bool {
        game_status::is_insufficient_material(self)
    }

    pub fn status(&self) -> GameStatus {
        game_status::game_status(self)
    }

    /// Independently owned copy of the observable state.
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot::capture(self)
    }
}
