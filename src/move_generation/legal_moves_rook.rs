use crate::game_state::chess_types::{Board, Color, PieceKind, Square};
use crate::move_generation::legal_move_shared::{push_sliding_moves, ROOK_DIRECTIONS};
use crate::moves::chess_move::Move;

pub fn generate_rook_moves(board: &Board, from: Square, color: Color, out: &mut Vec<Move>) {
    push_sliding_moves(board, from, color, PieceKind::Rook, &ROOK_DIRECTIONS, out);
}

#[cfg(test)]
mod tests {
    use super::generate_rook_moves;
    use crate::game_state::chess_types::{Board, Color};
    use crate::utils::algebraic::square_to_coordinates;

    #[test]
    fn rook_on_open_board_has_fourteen_moves() {
        let board = Board::from_notation("8/8/8/8/3R4/8/8/8").expect("parse");
        let mut out = Vec::new();
        generate_rook_moves(&board, square_to_coordinates("d4").expect("square"), Color::White, &mut out);
        assert_eq!(out.len(), 14);
        assert!(out.iter().all(|mv| !mv.is_capture()));
    }

    #[test]
    fn black_rook_captures_white_piece() {
        let board = Board::from_notation("r2P4/8/8/8/8/8/8/8").expect("parse");
        let mut out = Vec::new();
        generate_rook_moves(&board, square_to_coordinates("a8").expect("square"), Color::Black, &mut out);
        let mut notations: Vec<String> = out.into_iter().map(|mv| mv.notation).collect();
        notations.sort();
        assert_eq!(
            notations,
            vec!["Ra8a1", "Ra8a2", "Ra8a3", "Ra8a4", "Ra8a5", "Ra8a6", "Ra8a7", "Ra8b8", "Ra8c8", "Ra8xd8"]
        );
    }
}
