//! Terminal-oriented Unicode board renderer.
//!
//! Creates a human-readable board view for debugging, tests and the console
//! driver.

use crate::game_state::{chess_types::*, game_state::GameState};

/// Render the board to a Unicode string, rank 8 at the top.
pub fn render_game_state(game_state: &GameState) -> String {
    let mut out = String::new();

    out.push_str("  a b c d e f g h\n");

    for (row, rank) in game_state.board().iter().enumerate() {
        let rank_char = char::from(b'8' - row as u8);
        out.push(rank_char);
        out.push(' ');

        for (col, cell) in rank.iter().enumerate() {
            match cell {
                Some(piece) => out.push(piece_to_unicode(*piece)),
                None => out.push('·'),
            }

            if col < 7 {
                out.push(' ');
            }
        }

        out.push(' ');
        out.push(rank_char);
        out.push('\n');
    }

    out.push_str("  a b c d e f g h");

    out
}

pub fn piece_to_unicode(piece: Piece) -> char {
    match (piece.color, piece.kind) {
        (Color::White, PieceKind::Pawn) => '♙',
        (Color::White, PieceKind::Knight) => '♘',
        (Color::White, PieceKind::Bishop) => '♗',
        (Color::White, PieceKind::Rook) => '♖',
        (Color::White, PieceKind::Queen) => '♕',
        (Color::White, PieceKind::King) => '♔',
        (Color::Black, PieceKind::Pawn) => '♟',
        (Color::Black, PieceKind::Knight) => '♞',
        (Color::Black, PieceKind::Bishop) => '♝',
        (Color::Black, PieceKind::Rook) => '♜',
        (Color::Black, PieceKind::Queen) => '♛',
        (Color::Black, PieceKind::King) => '♚',
    }
}

#[cfg(test)]
mod tests {
    use super::render_game_state;
    use crate::game_state::game_state::GameState;

    #[test]
    fn start_position_renders_rank_eight_first() {
        let rendered = render_game_state(&GameState::new_game());
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(lines.len(), 10);
        assert_eq!(lines[1], "8 ♜ ♞ ♝ ♛ ♚ ♝ ♞ ♜ 8");
        assert_eq!(lines[4], "5 · · · · · · · · 5");
        assert_eq!(lines[8], "1 ♖ ♘ ♗ ♕ ♔ ♗ ♘ ♖ 1");
    }
}
