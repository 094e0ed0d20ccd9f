//! Castling lookup table.
//!
//! Each (wing, color) pair maps to the king move and the paired rook move that
//! are applied together, plus the squares that must be empty and unattacked.

use crate::game_state::chess_types::{Color, Square};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CastleWing {
    Kingside,
    Queenside,
}

impl CastleWing {
    pub const ALL: [CastleWing; 2] = [CastleWing::Kingside, CastleWing::Queenside];

    #[inline]
    pub const fn notation(self) -> &'static str {
        match self {
            CastleWing::Kingside => "0-0",
            CastleWing::Queenside => "0-0-0",
        }
    }

    pub fn from_notation(notation: &str) -> Option<Self> {
        let bare = notation.trim_end_matches('+');
        match bare {
            "0-0" => Some(CastleWing::Kingside),
            "0-0-0" => Some(CastleWing::Queenside),
            _ => None,
        }
    }

    /// Wing of a rook standing on its home column.
    pub const fn from_rook_col(col: u8) -> Option<Self> {
        match col {
            7 => Some(CastleWing::Kingside),
            0 => Some(CastleWing::Queenside),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CastlingSquares {
    pub king_from: Square,
    pub king_to: Square,
    pub rook_from: Square,
    pub rook_to: Square,
    /// Columns strictly between king and rook.
    pub empty_cols: &'static [u8],
    /// Columns the king stands on, crosses, or lands on.
    pub king_path_cols: &'static [u8],
}

const KINGSIDE_EMPTY: &[u8] = &[5, 6];
const QUEENSIDE_EMPTY: &[u8] = &[1, 2, 3];
const KINGSIDE_PATH: &[u8] = &[4, 5, 6];
const QUEENSIDE_PATH: &[u8] = &[4, 3, 2];

const fn entry(row: u8, wing: CastleWing) -> CastlingSquares {
    match wing {
        CastleWing::Kingside => CastlingSquares {
            king_from: Square::new(row, 4),
            king_to: Square::new(row, 6),
            rook_from: Square::new(row, 7),
            rook_to: Square::new(row, 5),
            empty_cols: KINGSIDE_EMPTY,
            king_path_cols: KINGSIDE_PATH,
        },
        CastleWing::Queenside => CastlingSquares {
            king_from: Square::new(row, 4),
            king_to: Square::new(row, 2),
            rook_from: Square::new(row, 0),
            rook_to: Square::new(row, 3),
            empty_cols: QUEENSIDE_EMPTY,
            king_path_cols: QUEENSIDE_PATH,
        },
    }
}

// [color][wing]
const CASTLING_TABLE: [[CastlingSquares; 2]; 2] = [
    [entry(7, CastleWing::Kingside), entry(7, CastleWing::Queenside)],
    [entry(0, CastleWing::Kingside), entry(0, CastleWing::Queenside)],
];

pub fn castling_squares(wing: CastleWing, color: Color) -> Option<&'static CastlingSquares> {
    let color_idx = match color {
        Color::White => 0,
        Color::Black => 1,
        Color::None => return None,
    };
    let wing_idx = match wing {
        CastleWing::Kingside => 0,
        CastleWing::Queenside => 1,
    };
    Some(&CASTLING_TABLE[color_idx][wing_idx])
}
