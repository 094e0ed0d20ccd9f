use crate::game_state::chess_types::{Board, Color, Flags, Piece, PieceKind, Square};
use crate::move_generation::legal_move_checks::is_square_attacked;
use crate::move_generation::legal_move_shared::{push_step_moves, KING_OFFSETS};
use crate::move_generation::move_generator::GenerationMode;
use crate::moves::castling::{castling_squares, CastleWing};
use crate::moves::chess_move::{Move, FLAG_CASTLING};

pub fn generate_king_moves(
    board: &Board,
    flags: &Flags,
    from: Square,
    color: Color,
    mode: GenerationMode,
    out: &mut Vec<Move>,
) {
    push_step_moves(board, from, color, PieceKind::King, &KING_OFFSETS, out);

    // Castling is never a capture.
    if mode == GenerationMode::Moves {
        generate_castling_moves(board, flags, from, color, out);
    }
}

fn generate_castling_moves(
    board: &Board,
    flags: &Flags,
    king_from: Square,
    color: Color,
    out: &mut Vec<Move>,
) {
    for wing in CastleWing::ALL {
        if !flags.castling.get(color, wing) {
            continue;
        }
        let Some(squares) = castling_squares(wing, color) else {
            continue;
        };
        if king_from != squares.king_from {
            continue;
        }
        if board.piece_at(squares.rook_from) != Piece::new(PieceKind::Rook, color) {
            continue;
        }
        let row = squares.king_from.row;
        let path_clear = squares
            .empty_cols
            .iter()
            .all(|&col| board.is_empty_at(Square::new(row, col)));
        if !path_clear {
            continue;
        }
        // Cannot castle out of, through, or into check.
        let path_safe = squares
            .king_path_cols
            .iter()
            .all(|&col| !is_square_attacked(board, Square::new(row, col), color));
        if !path_safe {
            continue;
        }

        out.push(Move::new(
            squares.king_from,
            squares.king_to,
            PieceKind::King,
            FLAG_CASTLING,
        ));
    }
}
