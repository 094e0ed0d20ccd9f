//! Terminal-oriented Unicode board renderer.
//!
//! Used by `Board`'s `Display` impl and the batch binary for debugging output.

use crate::game_state::chess_types::{Board, Color, Piece, PieceKind, Square};
use crate::game_state::game::Game;

/// Render the board to a Unicode string, rank 8 at the top.
pub fn render_board(board: &Board) -> String {
    let mut out = String::new();

    out.push_str("  a b c d e f g h\n");

    for row in 0..8u8 {
        let rank = char::from(b'8' - row);
        out.push(rank);
        out.push(' ');

        for col in 0..8u8 {
            match piece_to_unicode(board.piece_at(Square::new(row, col))) {
                Some(ch) => out.push(ch),
                None => out.push('·'),
            }

            if col < 7 {
                out.push(' ');
            }
        }

        out.push(' ');
        out.push(rank);
        out.push('\n');
    }

    out.push_str("  a b c d e f g h");

    out
}

/// Board followed by side to move, status and the last move, then the UTC
/// start time of the game.
pub fn render_game_state(game: &Game) -> String {
    let mut out = render_board(game.board());
    out.push_str(&format!(
        "\nturn {} | {} to move | {}",
        game.turn(),
        game.flags().color,
        game.status()
    ));
    if !game.flags().previous_move.is_empty() {
        out.push_str(&format!(" | last {}", game.flags().previous_move));
    }
    out.push_str(&format!(
        "\nstarted {}",
        game.record().started_at().format("%Y-%m-%d %H:%M:%S UTC")
    ));
    out
}

fn piece_to_unicode(piece: Piece) -> Option<char> {
    let ch = match (piece.color, piece.kind) {
        (Color::White, PieceKind::Pawn) => '♙',
        (Color::White, PieceKind::Knight) => '♘',
        (Color::White, PieceKind::Bishop) => '♗',
        (Color::White, PieceKind::Rook) => '♖',
        (Color::White, PieceKind::Queen) => '♕',
        (Color::White, PieceKind::King) => '♔',
        (Color::Black, PieceKind::Pawn) => '♟',
        (Color::Black, PieceKind::Knight) => '♞',
        (Color::Black, PieceKind::Bishop) => '♝',
        (Color::Black, PieceKind::Rook) => '♜',
        (Color::Black, PieceKind::Queen) => '♛',
        (Color::Black, PieceKind::King) => '♚',
        _ => return None,
    };
    Some(ch)
}
