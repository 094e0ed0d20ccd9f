use crate::game_state::chess_types::{Board, Color, PieceKind, Square};
use crate::move_generation::legal_move_shared::{push_sliding_moves, BISHOP_DIRECTIONS};
use crate::moves::chess_move::Move;

pub fn generate_bishop_moves(board: &Board, from: Square, color: Color, out: &mut Vec<Move>) {
    push_sliding_moves(board, from, color, PieceKind::Bishop, &BISHOP_DIRECTIONS, out);
}

#[cfg(test)]
mod tests {
    use super::generate_bishop_moves;
    use crate::game_state::chess_types::{Board, Color};
    use crate::utils::algebraic::square_to_coordinates;

    #[test]
    fn bishop_rays_stop_at_blockers() {
        let board = Board::from_notation("8/8/8/8/8/2p5/1B6/P7").expect("parse");
        let from = square_to_coordinates("b2").expect("square");
        let mut out = Vec::new();
        generate_bishop_moves(&board, from, Color::White, &mut out);
        let mut notations: Vec<String> = out.into_iter().map(|mv| mv.notation).collect();
        notations.sort();
        assert_eq!(notations, vec!["Bb2a3", "Bb2c1", "Bb2xc3"]);
    }
}
