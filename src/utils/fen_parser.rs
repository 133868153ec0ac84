//! FEN-to-GameState parser.
//!
//! Reads piece placement, side to move and castling rights. The en-passant
//! and clock fields are optional; when present they are validated and then
//! dropped, since the engine tracks neither.

use crate::chess_errors::{ChessErrors, ChessResult};
use crate::game_state::game_config::GameConfig;
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::utils::algebraic::algebraic_to_square;

fn fen_error(message: impl Into<String>) -> ChessErrors {
    ChessErrors::InvalidFen(message.into())
}

pub fn parse_fen(fen: &str) -> ChessResult<GameState> {
    let mut parts = fen.split_whitespace();

    let board_part = parts.next().ok_or_else(|| fen_error("missing board layout"))?;
    let side_part = parts.next().ok_or_else(|| fen_error("missing side-to-move"))?;
    let castling_part = parts.next().ok_or_else(|| fen_error("missing castling rights"))?;

    if let Some(en_passant_part) = parts.next() {
        parse_en_passant_square(en_passant_part)?;
    }
    for clock_part in parts.by_ref().take(2) {
        clock_part
            .parse::<u16>()
            .map_err(|_| fen_error(format!("invalid move counter: {clock_part}")))?;
    }
    if parts.next().is_some() {
        return Err(fen_error("extra trailing fields"));
    }

    let board = parse_board(board_part)?;
    let king_squares = locate_kings(&board)?;
    let side_to_move = parse_side_to_move(side_part)?;

    // The side that just moved cannot have left its own king attacked.
    if is_king_in_check(&board, &king_squares, side_to_move.opposite()) {
        return Err(fen_error("side not to move is in check"));
    }

    Ok(GameState {
        board,
        side_to_move,
        king_squares,
        castling_rights: parse_castling_rights(castling_part)?,
        move_history: Vec::new(),
        captured_pieces: Vec::new(),
        config: GameConfig::default(),
    })
}

fn parse_board(board_part: &str) -> ChessResult<Board> {
    let ranks: Vec<&str> = board_part.split('/').collect();
    if ranks.len() != BOARD_SIZE as usize {
        return Err(fen_error("board layout must contain 8 ranks"));
    }

    let mut board: Board = [[None; 8]; 8];

    // FEN lists rank 8 first, which is row 0.
    for (row, rank_str) in ranks.iter().enumerate() {
        let mut col = 0usize;

        for ch in rank_str.chars() {
            if let Some(empty_count) = ch.to_digit(10) {
                if !(1..=8).contains(&empty_count) {
                    return Err(fen_error(format!("invalid empty-square count '{ch}'")));
                }
                col += empty_count as usize;
                continue;
            }

            let piece = Piece::from_fen_char(ch)
                .ok_or_else(|| fen_error(format!("invalid piece character '{ch}'")))?;

            if col >= 8 {
                return Err(fen_error(format!("rank {} has too many files", 8 - row)));
            }

            board[row][col] = Some(piece);
            col += 1;
        }

        if col != 8 {
            return Err(fen_error(format!("rank {} does not sum to 8 files", 8 - row)));
        }
    }

    Ok(board)
}

/// Exactly one king per color is required.
fn locate_kings(board: &Board) -> ChessResult<KingSquares> {
    let mut found: [Option<Square>; 2] = [None, None];

    for square in Square::all() {
        let Some(piece) = board[square.row() as usize][square.col() as usize] else {
            continue;
        };
        if piece.kind != PieceKind::King {
            continue;
        }
        let slot = &mut found[piece.color.index()];
        if slot.is_some() {
            return Err(fen_error(format!("more than one {} king", piece.color)));
        }
        *slot = Some(square);
    }

    match found {
        [Some(white), Some(black)] => Ok([white, black]),
        [None, _] => Err(fen_error("missing white king")),
        [_, None] => Err(fen_error("missing black king")),
    }
}

fn parse_side_to_move(side_part: &str) -> ChessResult<Color> {
    match side_part {
        "w" => Ok(Color::White),
        "b" => Ok(Color::Black),
        _ => Err(fen_error(format!("invalid side-to-move field: {side_part}"))),
    }
}

fn parse_castling_rights(castling_part: &str) -> ChessResult<CastlingRights> {
    let mut rights = CastlingRights::NONE;
    if castling_part == "-" {
        return Ok(rights);
    }

    for ch in castling_part.chars() {
        match ch {
            'K' => rights.grant(Color::White, CastlingSide::KingSide),
            'Q' => rights.grant(Color::White, CastlingSide::QueenSide),
            'k' => rights.grant(Color::Black, CastlingSide::KingSide),
            'q' => rights.grant(Color::Black, CastlingSide::QueenSide),
            _ => return Err(fen_error(format!("invalid castling rights character: {ch}"))),
        }
    }

    Ok(rights)
}

fn parse_en_passant_square(en_passant_part: &str) -> ChessResult<Option<Square>> {
    if en_passant_part == "-" {
        return Ok(None);
    }

    algebraic_to_square(en_passant_part)
        .map(Some)
        .map_err(|_| fen_error(format!("invalid en-passant square: {en_passant_part}")))
}
