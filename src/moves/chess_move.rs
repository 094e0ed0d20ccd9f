//! Move value object and its textual notation.
//!
//! Notation is `[piece letter]<from>[x]<to>` with the letter omitted for
//! pawns, `0-0` / `0-0-0` for castling, a ` e.p` suffix for en passant, a
//! trailing promotion letter and a trailing `+` when the move gives check.
//! The flag bits mirror what the notation says so board code does not have to
//! re-parse strings.

use std::fmt;

use crate::game_state::chess_types::{PieceKind, Square};
use crate::moves::castling::CastleWing;
use crate::utils::algebraic::square_to_coordinates;

pub const FLAG_CAPTURE: u8 = 1 << 0;
pub const FLAG_DOUBLE_PAWN_PUSH: u8 = 1 << 1;
pub const FLAG_EN_PASSANT: u8 = 1 << 2;
pub const FLAG_CASTLING: u8 = 1 << 3;
pub const FLAG_CHECK: u8 = 1 << 4;

pub const EN_PASSANT_SUFFIX: &str = " e.p";

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Move {
    pub from: Square,
    pub to: Square,
    pub piece: PieceKind,
    pub flags: u8,
    pub promotion: Option<PieceKind>,
    pub notation: String,
}

impl Move {
    /// Build a move and its canonical notation. For castling, `from`/`to` are
    /// the king's squares.
    pub fn new(from: Square, to: Square, piece: PieceKind, flags: u8) -> Self {
        let notation = base_notation(from, to, piece, flags);
        Self {
            from,
            to,
            piece,
            flags,
            promotion: None,
            notation,
        }
    }

    pub fn quiet(from: Square, to: Square, piece: PieceKind) -> Self {
        Self::new(from, to, piece, 0)
    }

    pub fn capture(from: Square, to: Square, piece: PieceKind) -> Self {
        Self::new(from, to, piece, FLAG_CAPTURE)
    }

    /// Finalize a promotion: records the chosen piece and appends its letter.
    pub fn with_promotion(mut self, kind: PieceKind) -> Self {
        self.promotion = Some(kind);
        self.notation.push(kind.letter());
        self
    }

    /// Mark the move as giving check and append `+`.
    pub fn with_check(mut self) -> Self {
        if !self.gives_check() {
            self.flags |= FLAG_CHECK;
            self.notation.push('+');
        }
        self
    }

    #[inline]
    pub fn is_capture(&self) -> bool {
        self.flags & FLAG_CAPTURE != 0
    }

    #[inline]
    pub fn is_en_passant(&self) -> bool {
        self.flags & FLAG_EN_PASSANT != 0
    }

    #[inline]
    pub fn is_castling(&self) -> bool {
        self.flags & FLAG_CASTLING != 0
    }

    #[inline]
    pub fn is_double_pawn_push(&self) -> bool {
        self.flags & FLAG_DOUBLE_PAWN_PUSH != 0
    }

    #[inline]
    pub fn gives_check(&self) -> bool {
        self.flags & FLAG_CHECK != 0
    }

    pub fn castle_wing(&self) -> Option<CastleWing> {
        if !self.is_castling() {
            return None;
        }
        if self.to.col > self.from.col {
            Some(CastleWing::Kingside)
        } else {
            Some(CastleWing::Queenside)
        }
    }

    /// Pawn move reaching the farthest rank; needs a promotion choice.
    #[inline]
    pub fn needs_promotion(&self) -> bool {
        self.piece == PieceKind::Pawn && (self.to.row == 0 || self.to.row == 7)
    }

    /// Same origin, destination and base notation, ignoring promotion and
    /// check annotations added after generation.
    pub fn same_base_move(&self, other: &Move) -> bool {
        self.from == other.from
            && self.to == other.to
            && base_notation(self.from, self.to, self.piece, self.flags)
                == base_notation(other.from, other.to, other.piece, other.flags)
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.notation)
    }
}

fn base_notation(from: Square, to: Square, piece: PieceKind, flags: u8) -> String {
    if flags & FLAG_CASTLING != 0 {
        let wing = if to.col > from.col {
            CastleWing::Kingside
        } else {
            CastleWing::Queenside
        };
        return wing.notation().to_owned();
    }

    let mut out = String::with_capacity(10);
    if piece != PieceKind::Pawn {
        out.push(piece.letter());
    }
    out.push_str(&from.to_string());
    if flags & FLAG_CAPTURE != 0 {
        out.push('x');
    }
    out.push_str(&to.to_string());
    if flags & FLAG_EN_PASSANT != 0 {
        out.push_str(EN_PASSANT_SUFFIX);
    }
    out
}

/// Notation records a capture.
#[inline]
pub fn notation_is_capture(notation: &str) -> bool {
    notation.contains('x')
}

/// Notation records a pawn move (pawn moves start with the origin file).
#[inline]
pub fn notation_is_pawn_move(notation: &str) -> bool {
    notation
        .chars()
        .next()
        .is_some_and(|ch| ('a'..='h').contains(&ch))
}

/// Notation records a king move, castling included.
#[inline]
pub fn notation_is_king_move(notation: &str) -> bool {
    notation.starts_with('K') || CastleWing::from_notation(notation).is_some()
}

/// Landing square of a two-square pawn advance, if `notation` is one.
pub fn double_pawn_push_target(notation: &str) -> Option<Square> {
    if !notation_is_pawn_move(notation) || notation_is_capture(notation) {
        return None;
    }
    let bare = notation.trim_end_matches('+');
    if bare.len() != 4 {
        return None;
    }
    let from = square_to_coordinates(&bare[0..2]).ok()?;
    let to = square_to_coordinates(&bare[2..4]).ok()?;
    if from.col == to.col && from.row.abs_diff(to.row) == 2 {
        Some(to)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::algebraic::square_to_coordinates as sq;

    fn at(name: &str) -> Square {
        sq(name).expect("test square should parse")
    }

    #[test]
    fn pawn_and_piece_notation() {
        assert_eq!(Move::quiet(at("e2"), at("e4"), PieceKind::Pawn).notation, "e2e4");
        assert_eq!(Move::capture(at("e2"), at("d3"), PieceKind::Pawn).notation, "e2xd3");
        assert_eq!(Move::quiet(at("g1"), at("f3"), PieceKind::Knight).notation, "Ng1f3");
        assert_eq!(Move::capture(at("e1"), at("e8"), PieceKind::Rook).notation, "Re1xe8");
    }

    #[test]
    fn special_move_notation() {
        let ep = Move::new(at("b5"), at("a6"), PieceKind::Pawn, FLAG_CAPTURE | FLAG_EN_PASSANT);
        assert_eq!(ep.notation, "b5xa6 e.p");

        let castle = Move::new(at("e1"), at("g1"), PieceKind::King, FLAG_CASTLING);
        assert_eq!(castle.notation, "0-0");
        assert_eq!(castle.castle_wing(), Some(CastleWing::Kingside));
        let long = Move::new(at("e8"), at("c8"), PieceKind::King, FLAG_CASTLING);
        assert_eq!(long.notation, "0-0-0");

        let promo = Move::capture(at("e7"), at("d8"), PieceKind::Pawn);
        assert!(promo.needs_promotion());
        let promo = promo.with_promotion(PieceKind::Queen).with_check();
        assert_eq!(promo.notation, "e7xd8Q+");
        assert_eq!(promo.clone().with_check().notation, "e7xd8Q+");
    }

    #[test]
    fn notation_inspection() {
        assert!(notation_is_capture("Nf3xe5"));
        assert!(!notation_is_capture("0-0"));
        assert!(notation_is_pawn_move("e2e4"));
        assert!(!notation_is_pawn_move("Ke1e2"));
        assert!(!notation_is_pawn_move("0-0"));
        assert!(notation_is_king_move("Ke1e2"));
        assert!(notation_is_king_move("0-0-0+"));

        assert_eq!(double_pawn_push_target("a7a5"), Some(at("a5")));
        assert_eq!(double_pawn_push_target("e2e4+"), Some(at("e4")));
        assert_eq!(double_pawn_push_target("e2e3"), None);
        assert_eq!(double_pawn_push_target("Ra7a5"), None);
        assert_eq!(double_pawn_push_target(""), None);
    }

    #[test]
    fn base_move_comparison_ignores_annotations() {
        let generated = Move::quiet(at("a7"), at("a8"), PieceKind::Pawn);
        let chosen = generated.clone().with_promotion(PieceKind::Knight).with_check();
        assert!(generated.same_base_move(&chosen));
        let other = Move::quiet(at("a7"), at("a6"), PieceKind::Pawn);
        assert!(!generated.same_base_move(&other));
    }
}
