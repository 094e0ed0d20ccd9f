use crate::game_state::chess_types::{Board, Color};
use crate::moves::castling::castling_squares;
use crate::moves::chess_move::Move;

/// Board after `mv` is played by `color`; the input board is left untouched.
/// Castling moves king and rook together, using the table entry for `color`.
pub fn board_after_move(board: &Board, mv: &Move, color: Color) -> Board {
    let mut next = *board;

    match mv.castle_wing().and_then(|wing| castling_squares(wing, color)) {
        Some(squares) => {
            let king = next.piece_at(squares.king_from);
            let rook = next.piece_at(squares.rook_from);
            next.clear(squares.king_from);
            next.clear(squares.rook_from);
            next.set(squares.king_to, king);
            next.set(squares.rook_to, rook);
        }
        None => next.apply_move(mv),
    }

    next
}
