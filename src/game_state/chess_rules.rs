//! Canonical chess-rule constants.

use crate::game_state::chess_types::PieceKind;

/// Standard starting layout in board notation (piece placement only).
pub const INITIAL_BOARD_NOTATION: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR";

/// Pieces a pawn may promote to, strongest first.
pub const PROMOTION_CHOICES: [PieceKind; 4] = [
    PieceKind::Queen,
    PieceKind::Rook,
    PieceKind::Bishop,
    PieceKind::Knight,
];

/// Recorded moves without a capture or pawn move before the game is drawn.
pub const FIFTY_MOVE_WINDOW: usize = 50;

/// Occurrences of the same board notation that draw the game.
pub const REPETITION_THRESHOLD: usize = 3;
