//! Full legal move generation pipeline.
//!
//! Dispatches per piece kind to pseudo-legal generators, then simulates every
//! candidate and drops the ones that leave the mover's own king in check.

use crate::game_state::chess_types::{Board, Flags, PieceKind};
use crate::move_generation::legal_move_apply::board_after_move;
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::legal_moves_bishop::generate_bishop_moves;
use crate::move_generation::legal_moves_king::generate_king_moves;
use crate::move_generation::legal_moves_knight::generate_knight_moves;
use crate::move_generation::legal_moves_pawn::generate_pawn_moves;
use crate::move_generation::legal_moves_queen::generate_queen_moves;
use crate::move_generation::legal_moves_rook::generate_rook_moves;
use crate::move_generation::move_generator::{GenerationMode, MoveGenerator};
use crate::moves::chess_move::Move;

pub struct LegalMoveGenerator;

impl MoveGenerator for LegalMoveGenerator {
    fn generate_legal_moves(&self, board: &Board, flags: &Flags) -> Vec<Move> {
        let color = flags.color;
        generate_pseudo_legal_moves(board, flags, GenerationMode::Moves)
            .into_iter()
            .filter(|mv| !is_king_in_check(&board_after_move(board, mv, color), color))
            .collect()
    }
}

/// Pseudo-legal moves for `flags.color`, pieces visited in row-major order.
pub fn generate_pseudo_legal_moves(board: &Board, flags: &Flags, mode: GenerationMode) -> Vec<Move> {
    let color = flags.color;
    let mut out = Vec::with_capacity(64);

    for (from, piece) in board.pieces_of(color) {
        match piece.kind {
            PieceKind::Pawn => {
                generate_pawn_moves(board, &flags.previous_move, from, color, mode, &mut out)
            }
            PieceKind::Knight => generate_knight_moves(board, from, color, &mut out),
            PieceKind::Bishop => generate_bishop_moves(board, from, color, &mut out),
            PieceKind::Rook => generate_rook_moves(board, from, color, &mut out),
            PieceKind::Queen => generate_queen_moves(board, from, color, &mut out),
            PieceKind::King => generate_king_moves(board, flags, from, color, mode, &mut out),
            PieceKind::None => {}
        }
    }

    out
}
