use crate::game_state::chess_types::{Board, Color, PieceKind, Square};
use crate::move_generation::legal_move_shared::{push_step_moves, KNIGHT_OFFSETS};
use crate::moves::chess_move::Move;

pub fn generate_knight_moves(board: &Board, from: Square, color: Color, out: &mut Vec<Move>) {
    push_step_moves(board, from, color, PieceKind::Knight, &KNIGHT_OFFSETS, out);
}
