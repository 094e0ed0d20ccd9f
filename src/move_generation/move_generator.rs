use crate::game_state::chess_types::{Board, Flags};
use crate::moves::chess_move::Move;

/// What a pseudo-legal pass enumerates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerationMode {
    /// Every move the side may make, castling and en passant included.
    Moves,
    /// Only capture-type moves, used for attack detection. Pawns report both
    /// forward diagonals whether or not an enemy piece stands there, and
    /// castling is never produced.
    Captures,
}

pub trait MoveGenerator: Send + Sync {
    /// Fully legal moves for `flags.color`.
    fn generate_legal_moves(&self, board: &Board, flags: &Flags) -> Vec<Move>;
}
