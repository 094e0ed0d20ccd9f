//! Conversions between algebraic squares (`e4`) and board coordinates.
//!
//! Rank 8 maps to row 0 and file `a` to column 0, so the board reads top to
//! bottom the same way board notation does.

use crate::errors::{ChessError, ChessResult};
use crate::game_state::chess_types::Square;

/// Convert an algebraic square (for example: "e4") to `(row, col)` coordinates.
#[inline]
pub fn square_to_coordinates(square: &str) -> ChessResult<Square> {
    let bytes = square.as_bytes();
    if bytes.len() != 2 {
        return Err(ChessError::InvalidSquare(square.to_owned()));
    }

    let file = bytes[0];
    let rank = bytes[1];

    if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
        return Err(ChessError::InvalidSquare(square.to_owned()));
    }

    Ok(Square::new(b'8' - rank, file - b'a'))
}

/// Convert `(row, col)` coordinates to an algebraic square (for example: "e4").
#[inline]
pub fn coordinates_to_square(row: u8, col: u8) -> ChessResult<String> {
    if row > 7 || col > 7 {
        return Err(ChessError::InvalidSquare(format!("({row}, {col})")));
    }
    Ok(Square::new(row, col).to_string())
}
