use crate::game_state::{chess_types::*, game_state::GameState};

/// Six-field FEN. En passant is always `-` and the halfmove clock `0`; the
/// fullmove number counts from 1 over the recorded history.
pub fn generate_fen(game_state: &GameState) -> String {
    let board = generate_board_field(game_state.board());
    let side_to_move = match game_state.side_to_move() {
        Color::White => "w",
        Color::Black => "b",
    };
    let castling = generate_castling_field(game_state.castling_rights());
    let fullmove_number = 1 + game_state.move_history().len() / 2;

    format!("{board} {side_to_move} {castling} - 0 {fullmove_number}")
}

fn generate_board_field(board: &Board) -> String {
    let mut out = String::new();

    for (row, rank) in board.iter().enumerate() {
        let mut empty_count = 0u8;

        for cell in rank {
            if let Some(piece) = cell {
                if empty_count > 0 {
                    out.push(char::from(b'0' + empty_count));
                    empty_count = 0;
                }
                out.push(piece.to_fen_char());
            } else {
                empty_count += 1;
            }
        }

        if empty_count > 0 {
            out.push(char::from(b'0' + empty_count));
        }

        if row + 1 < board.len() {
            out.push('/');
        }
    }

    out
}

fn generate_castling_field(rights: CastlingRights) -> String {
    let mut out = String::new();

    for (color, side, ch) in [
        (Color::White, CastlingSide::KingSide, 'K'),
        (Color::White, CastlingSide::QueenSide, 'Q'),
        (Color::Black, CastlingSide::KingSide, 'k'),
        (Color::Black, CastlingSide::QueenSide, 'q'),
    ] {
        if rights.has(color, side) {
            out.push(ch);
        }
    }

    if out.is_empty() {
        out.push('-');
    }

    out
}

#[cfg(test)]
mod tests {
    use super::generate_fen;
    use crate::game_state::chess_rules::STARTING_POSITION_FEN;
    use crate::game_state::chess_types::*;
    use crate::game_state::game_state::GameState;
    use crate::utils::algebraic::algebraic_to_square;
    use crate::utils::fen_parser::parse_fen;

    #[test]
    fn round_trip_starting_position_fen() {
        let parsed = parse_fen(STARTING_POSITION_FEN).expect("starting FEN should parse");
        let generated = generate_fen(&parsed);

        assert_eq!(generated, STARTING_POSITION_FEN);
        assert_eq!(parse_fen(&generated).expect("generated FEN should parse"), parsed);
    }

    #[test]
    fn round_trip_custom_position_fen() {
        let fen = "r1bqk2r/pppp1ppp/2n2n2/2b1p3/2B1P3/2N2N2/PPPP1PPP/R1BQ1RK1 b kq - 0 1";
        let parsed = parse_fen(fen).expect("custom FEN should parse");
        let generated = generate_fen(&parsed);

        assert_eq!(generated, fen);
        let reparsed = parse_fen(&generated).expect("generated FEN should parse");
        assert_eq!(reparsed.side_to_move(), Color::Black);
        assert!(!reparsed.castling_rights().has(Color::White, CastlingSide::KingSide));
        assert!(reparsed.castling_rights().has(Color::Black, CastlingSide::QueenSide));
    }

    #[test]
    fn fullmove_number_follows_history() {
        let mut game = GameState::new_game();
        let sq = |s: &str| algebraic_to_square(s).expect("square");
        assert!(game.make_move(sq("e2"), sq("e4")));
        assert!(game.make_move(sq("e7"), sq("e5")));
        assert!(game.make_move(sq("e1"), sq("e2")));
        assert_eq!(
            generate_fen(&game),
            "rnbqkbnr/pppp1ppp/8/4p3/4P3/8/PPPPKPPP/RNBQ1BNR b kq - 0 2"
        );
    }
}
