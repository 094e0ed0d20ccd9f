use crate::game_state::chess_types::{Board, Color, PieceKind, Square};
use crate::move_generation::move_generator::GenerationMode;
use crate::moves::chess_move::{
    double_pawn_push_target, Move, FLAG_CAPTURE, FLAG_DOUBLE_PAWN_PUSH, FLAG_EN_PASSANT,
};

pub fn generate_pawn_moves(
    board: &Board,
    previous_move: &str,
    from: Square,
    color: Color,
    mode: GenerationMode,
    out: &mut Vec<Move>,
) {
    let direction = color.pawn_direction();

    if mode == GenerationMode::Moves {
        if let Some(one_step) = from.offset(direction, 0) {
            if board.is_empty_at(one_step) {
                out.push(Move::quiet(from, one_step, PieceKind::Pawn));

                if from.row == color.pawn_home_row() {
                    if let Some(two_step) = from.offset(2 * direction, 0) {
                        if board.is_empty_at(two_step) {
                            out.push(Move::new(
                                from,
                                two_step,
                                PieceKind::Pawn,
                                FLAG_DOUBLE_PAWN_PUSH,
                            ));
                        }
                    }
                }
            }
        }
    }

    for d_col in [-1i8, 1i8] {
        let Some(to) = from.offset(direction, d_col) else {
            continue;
        };
        let target = board.piece_at(to);
        let enemy_there = target.is_present() && target.color == color.opposite();
        // In capture mode a pawn threatens both diagonals, occupied or not.
        let phantom = mode == GenerationMode::Captures && !target.is_present();
        if enemy_there || phantom {
            out.push(Move::capture(from, to, PieceKind::Pawn));
        }
    }

    if mode == GenerationMode::Moves && from.row == color.en_passant_row() {
        push_en_passant(board, previous_move, from, color, out);
    }
}

/// Capture of a pawn that just advanced two squares to land beside `from`.
fn push_en_passant(
    board: &Board,
    previous_move: &str,
    from: Square,
    color: Color,
    out: &mut Vec<Move>,
) {
    let Some(landed) = double_pawn_push_target(previous_move) else {
        return;
    };
    if landed.row != from.row || landed.col.abs_diff(from.col) != 1 {
        return;
    }
    if !board.piece_at(landed).is(PieceKind::Pawn, color.opposite()) {
        return;
    }
    let Some(to) = from.offset(color.pawn_direction(), landed.col as i8 - from.col as i8) else {
        return;
    };
    if board.is_empty_at(to) {
        out.push(Move::new(
            from,
            to,
            PieceKind::Pawn,
            FLAG_CAPTURE | FLAG_EN_PASSANT,
        ));
    }
}
