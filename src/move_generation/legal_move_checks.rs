//! Attack and check detection.
//!
//! A square is attacked when a capture-type pseudo-legal move of the opposing
//! side could land on it. Pawns threaten their forward diagonals even when
//! nothing stands there, which is what castling-path and king safety need.

use crate::game_state::chess_types::{Board, CastlingRights, Color, Flags, Square};
use crate::move_generation::legal_move_generator::generate_pseudo_legal_moves;
use crate::move_generation::move_generator::GenerationMode;

/// True iff a piece of `color.opposite()` attacks `square`.
pub fn is_square_attacked(board: &Board, square: Square, color: Color) -> bool {
    let attacker = color.opposite();
    // Capture moves never land on the attacker's own pieces.
    if board.piece_at(square).color == attacker {
        return false;
    }
    let flags = Flags::new(attacker, CastlingRights::NONE, String::new());
    generate_pseudo_legal_moves(board, &flags, GenerationMode::Captures)
        .iter()
        .any(|mv| mv.to == square)
}

/// Whether the king of `color` is attacked. A board without that king is
/// never in check, so partial positions can be analysed.
pub fn is_king_in_check(board: &Board, color: Color) -> bool {
    match board.king_square(color) {
        Some(king) => is_square_attacked(board, king, color),
        None => false,
    }
}
