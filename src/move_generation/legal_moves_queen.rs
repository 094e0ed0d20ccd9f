use crate::game_state::chess_types::{Board, Color, PieceKind, Square};
use crate::move_generation::legal_move_shared::{push_sliding_moves, QUEEN_DIRECTIONS};
use crate::moves::chess_move::Move;

pub fn generate_queen_moves(board: &Board, from: Square, color: Color, out: &mut Vec<Move>) {
    push_sliding_moves(board, from, color, PieceKind::Queen, &QUEEN_DIRECTIONS, out);
}
