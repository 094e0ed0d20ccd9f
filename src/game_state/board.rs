//! 8x8 mailbox board with board-notation parsing and generation.
//!
//! The board is a plain `[Piece; 64]` array, so copying it for hypothetical
//! move evaluation is a cheap memcpy. Index `row * 8 + col`, row 0 is rank 8.

use std::fmt;
use std::str::FromStr;

use crate::errors::{ChessError, ChessResult};
use crate::game_state::chess_types::{Color, Piece, PieceKind, Square};
use crate::moves::castling::castling_squares;
use crate::moves::chess_move::Move;
use crate::utils::render_game_state::render_board;

#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    squares: [Piece; 64],
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}

impl Board {
    pub const fn empty() -> Self {
        Self {
            squares: [Piece::EMPTY; 64],
        }
    }

    /// Standard initial layout.
    pub const fn initial() -> Self {
        const BACK_RANK: [PieceKind; 8] = [
            PieceKind::Rook,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Queen,
            PieceKind::King,
            PieceKind::Bishop,
            PieceKind::Knight,
            PieceKind::Rook,
        ];

        let mut squares = [Piece::EMPTY; 64];
        let mut col = 0;
        while col < 8 {
            squares[col] = Piece::new(BACK_RANK[col], Color::Black);
            squares[8 + col] = Piece::new(PieceKind::Pawn, Color::Black);
            squares[48 + col] = Piece::new(PieceKind::Pawn, Color::White);
            squares[56 + col] = Piece::new(BACK_RANK[col], Color::White);
            col += 1;
        }
        Self { squares }
    }

    /// Parse ranks separated by `/`, top rank first. Digits are runs of empty
    /// squares, uppercase letters White pieces, lowercase Black pieces.
    pub fn from_notation(notation: &str) -> ChessResult<Self> {
        let ranks: Vec<&str> = notation.split('/').collect();
        if ranks.len() != 8 {
            return Err(ChessError::MalformedNotation(format!(
                "expected 8 ranks, found {} in '{notation}'",
                ranks.len()
            )));
        }

        let mut board = Board::empty();
        for (row, rank) in ranks.iter().enumerate() {
            let mut col = 0usize;
            for ch in rank.chars() {
                if let Some(run) = ch.to_digit(10) {
                    if !(1..=8).contains(&run) {
                        return Err(ChessError::MalformedNotation(format!(
                            "invalid empty-square count '{ch}' in rank {}",
                            row + 1
                        )));
                    }
                    col += run as usize;
                    continue;
                }

                let piece = Piece::from_notation_char(ch).ok_or_else(|| {
                    ChessError::MalformedNotation(format!("invalid piece character '{ch}'"))
                })?;
                if col >= 8 {
                    return Err(ChessError::MalformedNotation(format!(
                        "rank {} has more than 8 files",
                        row + 1
                    )));
                }
                board.squares[row * 8 + col] = piece;
                col += 1;
            }

            if col != 8 {
                return Err(ChessError::MalformedNotation(format!(
                    "rank {} covers {col} files instead of 8",
                    row + 1
                )));
            }
        }

        Ok(board)
    }

    /// Inverse of [`Board::from_notation`], with empty runs compacted.
    pub fn to_notation(&self) -> String {
        let mut out = String::with_capacity(72);

        for row in 0..8 {
            let mut empty_count = 0u8;
            for col in 0..8 {
                match self.squares[row * 8 + col].notation_char() {
                    Some(ch) => {
                        if empty_count > 0 {
                            out.push(char::from(b'0' + empty_count));
                            empty_count = 0;
                        }
                        out.push(ch);
                    }
                    None => empty_count += 1,
                }
            }
            if empty_count > 0 {
                out.push(char::from(b'0' + empty_count));
            }
            if row < 7 {
                out.push('/');
            }
        }

        out
    }

    #[inline]
    pub fn piece_at(&self, square: Square) -> Piece {
        self.squares[square.index()]
    }

    #[inline]
    pub fn is_empty_at(&self, square: Square) -> bool {
        !self.piece_at(square).is_present()
    }

    #[inline]
    pub fn set(&mut self, square: Square, piece: Piece) {
        self.squares[square.index()] = piece;
    }

    #[inline]
    pub fn clear(&mut self, square: Square) {
        self.set(square, Piece::EMPTY);
    }

    /// Occupied squares holding a piece of `color`, in row-major order.
    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.occupied().filter(move |(_, piece)| piece.color == color)
    }

    pub fn occupied(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.squares
            .iter()
            .enumerate()
            .filter(|(_, piece)| piece.is_present())
            .map(|(idx, piece)| (Square::from_index(idx), *piece))
    }

    pub fn king_square(&self, color: Color) -> Option<Square> {
        self.pieces_of(color)
            .find(|(_, piece)| piece.kind == PieceKind::King)
            .map(|(square, _)| square)
    }

    /// Relocate the moving piece, plus the paired rook for castling or the
    /// captured pawn for en passant. Legality is not checked here.
    pub fn apply_move(&mut self, mv: &Move) {
        let moving = self.piece_at(mv.from);
        self.clear(mv.from);

        if mv.is_en_passant() {
            // Captured pawn sits beside the origin, one rank behind `to`.
            self.clear(Square::new(mv.from.row, mv.to.col));
        }

        let placed = match mv.promotion {
            Some(kind) => Piece::new(kind, moving.color),
            None => moving,
        };
        self.set(mv.to, placed);

        if let Some(wing) = mv.castle_wing() {
            if let Some(squares) = castling_squares(wing, moving.color) {
                let rook = self.piece_at(squares.rook_from);
                self.clear(squares.rook_from);
                self.set(squares.rook_to, rook);
            }
        }
    }

    /// Overwrite the kind of the piece on `square`, keeping its color.
    pub fn replace_kind(&mut self, square: Square, kind: PieceKind) {
        let piece = self.piece_at(square);
        if piece.is_present() {
            self.set(square, Piece::new(kind, piece.color));
        }
    }
}

impl FromStr for Board {
    type Err = ChessError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Board::from_notation(s)
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Board({})", self.to_notation())
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render_board(self))
    }
}
