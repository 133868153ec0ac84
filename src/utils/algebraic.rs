//! Coordinate notation for squares and moves.
//!
//! Converts between human-readable coordinates (e.g., `e4`) and grid squares,
//! and parses coordinate moves such as `e2-e4` or `e2e4` used by the console
//! and the move log.

use crate::chess_errors::{ChessErrors, ChessResult};
use crate::game_state::chess_types::Square;

/// Convert a coordinate such as "e4" to a grid square (rank 8 is row 0).
#[inline]
pub fn algebraic_to_square(square: &str) -> ChessResult<Square> {
    let bytes = square.as_bytes();
    if bytes.len() != 2 {
        return Err(ChessErrors::InvalidAlgebraic(square.to_owned()));
    }

    let file = bytes[0].to_ascii_lowercase();
    let rank = bytes[1];

    if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
        return Err(ChessErrors::InvalidAlgebraic(square.to_owned()));
    }

    let col = (file - b'a') as i8;
    let row = 7 - (rank - b'1') as i8;
    Square::new(row, col).ok_or(ChessErrors::SquareOutOfRange { row, col })
}

#[inline]
pub fn square_to_algebraic(square: Square) -> String {
    square.to_string()
}

/// Hyphenated coordinate form used by move history, e.g. "e2-e4".
#[inline]
pub fn move_to_algebraic(from: Square, to: Square) -> String {
    format!("{from}-{to}")
}

/// Parse "e2-e4" or "e2e4" into `(from, to)`.
pub fn parse_coordinate_move(text: &str) -> ChessResult<(Square, Square)> {
    let text = text.trim();
    let (from, to) = match text.split_once('-') {
        Some(parts) => parts,
        None if text.len() == 4 && text.is_ascii() => text.split_at(2),
        None => return Err(ChessErrors::InvalidAlgebraic(text.to_owned())),
    };
    Ok((algebraic_to_square(from)?, algebraic_to_square(to)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corner_squares_map_to_grid() {
        let a1 = algebraic_to_square("a1").expect("a1 should parse");
        assert_eq!((a1.row(), a1.col()), (7, 0));
        let h8 = algebraic_to_square("h8").expect("h8 should parse");
        assert_eq!((h8.row(), h8.col()), (0, 7));
        assert_eq!(square_to_algebraic(a1), "a1");
        assert_eq!(square_to_algebraic(h8), "h8");
    }

    #[test]
    fn malformed_coordinates_are_rejected() {
        for bad in ["", "e", "e9", "i1", "e44", "4e"] {
            assert_eq!(
                algebraic_to_square(bad),
                Err(ChessErrors::InvalidAlgebraic(bad.to_owned())),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn coordinate_moves_parse_with_or_without_hyphen() {
        let e2 = algebraic_to_square("e2").expect("e2");
        let e4 = algebraic_to_square("e4").expect("e4");
        assert_eq!(parse_coordinate_move("e2-e4").expect("hyphenated"), (e2, e4));
        assert_eq!(parse_coordinate_move(" e2e4 ").expect("compact"), (e2, e4));
        assert!(parse_coordinate_move("e2-e9").is_err());
        assert!(parse_coordinate_move("e2").is_err());
        assert_eq!(move_to_algebraic(e2, e4), "e2-e4");
    }
}
