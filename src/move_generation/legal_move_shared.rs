use crate::game_state::chess_types::*;
use crate::moves::move_descriptions::CandidateMove;
use crate::moves::sliding_moves::Ray;

#[inline]
pub fn piece_on_board(board: &Board, square: Square) -> Option<Piece> {
    board[square.row() as usize][square.col() as usize]
}

#[inline]
pub fn is_enemy_of(board: &Board, square: Square, color: Color) -> bool {
    matches!(piece_on_board(board, square), Some(piece) if piece.color != color)
}

/// Empty, or held by the opponent of `color`.
#[inline]
pub fn is_empty_or_enemy(board: &Board, square: Square, color: Color) -> bool {
    match piece_on_board(board, square) {
        None => true,
        Some(piece) => piece.color != color,
    }
}

/// Occupied squares of `color`, row by row.
pub fn pieces_of(board: &Board, color: Color) -> impl Iterator<Item = (Square, Piece)> + '_ {
    Square::all().filter_map(move |square| match piece_on_board(board, square) {
        Some(piece) if piece.color == color => Some((square, piece)),
        _ => None,
    })
}

/// Adds single-step targets that are empty or hold an enemy piece.
pub fn push_step_moves(
    board: &Board,
    color: Color,
    targets: impl Iterator<Item = Square>,
    out: &mut Vec<CandidateMove>,
) {
    out.extend(
        targets
            .filter(|to| is_empty_or_enemy(board, *to, color))
            .map(CandidateMove::quiet),
    );
}

/// Casts each ray until blocked. An enemy blocker is included as a capture
/// and ends the ray; an own blocker ends it without being included.
pub fn push_sliding_moves(
    board: &Board,
    from: Square,
    color: Color,
    directions: &[(i8, i8)],
    out: &mut Vec<CandidateMove>,
) {
    for direction in directions {
        for to in Ray::new(from, *direction) {
            match piece_on_board(board, to) {
                None => out.push(CandidateMove::quiet(to)),
                Some(blocker) => {
                    if blocker.color != color {
                        out.push(CandidateMove::quiet(to));
                    }
                    break;
                }
            }
        }
    }
}
