use crate::game_state::chess_types::{Board, Color, PieceKind, Square};
use crate::moves::chess_move::Move;

pub const ROOK_DIRECTIONS: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];
pub const BISHOP_DIRECTIONS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];
pub const QUEEN_DIRECTIONS: [(i8, i8); 8] = [
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
];
pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (-2, 1),
    (-1, 2),
    (1, 2),
    (2, 1),
    (2, -1),
    (1, -2),
    (-1, -2),
    (-2, -1),
];
pub const KING_OFFSETS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (1, -1),
    (1, 0),
    (1, 1),
    (0, -1),
    (0, 1),
];

/// Single-step targets (knight, king): empty is a move, enemy is a capture.
pub fn push_step_moves(
    board: &Board,
    from: Square,
    color: Color,
    piece: PieceKind,
    offsets: &[(i8, i8)],
    out: &mut Vec<Move>,
) {
    for &(d_row, d_col) in offsets {
        let Some(to) = from.offset(d_row, d_col) else {
            continue;
        };
        let target = board.piece_at(to);
        if !target.is_present() {
            out.push(Move::quiet(from, to, piece));
        } else if target.color == color.opposite() {
            out.push(Move::capture(from, to, piece));
        }
    }
}

/// Ray-cast along each direction until blocked; an enemy piece is captured
/// and ends the ray, an own piece ends it without a move.
pub fn push_sliding_moves(
    board: &Board,
    from: Square,
    color: Color,
    piece: PieceKind,
    directions: &[(i8, i8)],
    out: &mut Vec<Move>,
) {
    for &(d_row, d_col) in directions {
        let mut current = from;
        while let Some(to) = current.offset(d_row, d_col) {
            let target = board.piece_at(to);
            if !target.is_present() {
                out.push(Move::quiet(from, to, piece));
            } else {
                if target.color == color.opposite() {
                    out.push(Move::capture(from, to, piece));
                }
                break;
            }
            current = to;
        }
    }
}
