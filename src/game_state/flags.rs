//! Per-turn game flags: side to move, castling rights and the previous move.

use serde::{Deserialize, Serialize};

use crate::game_state::chess_types::{Color, Square};
use crate::moves::castling::CastleWing;
use crate::moves::chess_move::{notation_is_king_move, Move};

/// Castling availability per color and wing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CastlingRights {
    pub white_kingside: bool,
    pub white_queenside: bool,
    pub black_kingside: bool,
    pub black_queenside: bool,
}

impl CastlingRights {
    pub const ALL: CastlingRights = CastlingRights {
        white_kingside: true,
        white_queenside: true,
        black_kingside: true,
        black_queenside: true,
    };

    pub const NONE: CastlingRights = CastlingRights {
        white_kingside: false,
        white_queenside: false,
        black_kingside: false,
        black_queenside: false,
    };

    /// Rights for each color as a whole (both wings or none).
    pub const fn for_colors(white: bool, black: bool) -> Self {
        CastlingRights {
            white_kingside: white,
            white_queenside: white,
            black_kingside: black,
            black_queenside: black,
        }
    }

    pub const fn get(&self, color: Color, wing: CastleWing) -> bool {
        match (color, wing) {
            (Color::White, CastleWing::Kingside) => self.white_kingside,
            (Color::White, CastleWing::Queenside) => self.white_queenside,
            (Color::Black, CastleWing::Kingside) => self.black_kingside,
            (Color::Black, CastleWing::Queenside) => self.black_queenside,
            (Color::None, _) => false,
        }
    }

    pub fn revoke(&mut self, color: Color, wing: CastleWing) {
        match (color, wing) {
            (Color::White, CastleWing::Kingside) => self.white_kingside = false,
            (Color::White, CastleWing::Queenside) => self.white_queenside = false,
            (Color::Black, CastleWing::Kingside) => self.black_kingside = false,
            (Color::Black, CastleWing::Queenside) => self.black_queenside = false,
            (Color::None, _) => {}
        }
    }

    pub fn revoke_all(&mut self, color: Color) {
        for wing in CastleWing::ALL {
            self.revoke(color, wing);
        }
    }

    /// Drop the wing whose rook home square is `square`, for either color.
    fn revoke_rook_home(&mut self, square: Square) {
        let color = match square.row {
            7 => Color::White,
            0 => Color::Black,
            _ => return,
        };
        if let Some(wing) = CastleWing::from_rook_col(square.col) {
            self.revoke(color, wing);
        }
    }
}

impl Default for CastlingRights {
    fn default() -> Self {
        CastlingRights::ALL
    }
}

/// Flags consumed by the rules engine. Built fresh for each turn.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Flags {
    pub color: Color,
    pub castling: CastlingRights,
    /// Notation of the move just played; empty at the start of a game.
    pub previous_move: String,
}

impl Default for Flags {
    fn default() -> Self {
        Self {
            color: Color::White,
            castling: CastlingRights::ALL,
            previous_move: String::new(),
        }
    }
}

impl Flags {
    pub fn new(color: Color, castling: CastlingRights, previous_move: impl Into<String>) -> Self {
        Self {
            color,
            castling,
            previous_move: previous_move.into(),
        }
    }

    /// Whether `color` still has castling available on either wing.
    pub fn can_castle(&self, color: Color) -> bool {
        CastleWing::ALL
            .into_iter()
            .any(|wing| self.castling.get(color, wing))
    }

    /// Flags for the opponent's turn after `mv` has been played by
    /// `self.color`.
    pub fn after_move(&self, mv: &Move) -> Flags {
        let mut castling = self.castling;
        if notation_is_king_move(&mv.notation) {
            castling.revoke_all(self.color);
        }
        // A rook leaving or captured on its home square loses that wing.
        castling.revoke_rook_home(mv.from);
        castling.revoke_rook_home(mv.to);

        Flags {
            color: self.color.opposite(),
            castling,
            previous_move: mv.notation.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_types::PieceKind;
    use crate::moves::chess_move::FLAG_CASTLING;
    use crate::utils::algebraic::square_to_coordinates;

    fn at(name: &str) -> Square {
        square_to_coordinates(name).expect("test square should parse")
    }

    #[test]
    fn king_move_clears_both_wings() {
        let flags = Flags::default();
        let next = flags.after_move(&Move::quiet(at("e1"), at("e2"), PieceKind::King));
        assert_eq!(next.color, Color::Black);
        assert!(!next.can_castle(Color::White));
        assert!(next.can_castle(Color::Black));
        assert_eq!(next.previous_move, "Ke1e2");

        let castled = flags.after_move(&Move::new(at("e1"), at("g1"), PieceKind::King, FLAG_CASTLING));
        assert!(!castled.can_castle(Color::White));
    }

    #[test]
    fn rook_moves_and_captures_clear_one_wing() {
        let flags = Flags::default();
        let next = flags.after_move(&Move::quiet(at("h1"), at("h4"), PieceKind::Rook));
        assert!(!next.castling.white_kingside);
        assert!(next.castling.white_queenside);

        let black = Flags::new(Color::Black, CastlingRights::ALL, "");
        let next = black.after_move(&Move::capture(at("b2"), at("a1"), PieceKind::Bishop));
        assert!(!next.castling.white_queenside);
        assert!(next.castling.white_kingside);
        assert!(next.can_castle(Color::Black));
    }
}
