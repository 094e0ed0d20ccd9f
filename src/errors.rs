//! Errors used throughout the rules engine and game state machine.
//!
//! `ChessError` is the single error type returned by board parsing, square
//! conversion, move selection and the engine/harness layers. Parsing and
//! selection variants carry the offending input so callers can show it.

use std::error::Error;
use std::fmt;

use crate::game_state::chess_types::PieceKind;
use crate::game_state::game::GameStatus;

pub type ChessResult<T> = Result<T, ChessError>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChessError {
    /// Board notation had the wrong number of ranks, a rank not summing to
    /// eight files, or an unknown piece letter.
    MalformedNotation(String),

    /// Algebraic square outside `a1..h8`, or coordinates outside `0..=7`.
    InvalidSquare(String),

    /// A consumer tried to apply a move that is not in the legal-move index.
    IllegalMoveSelected(String),

    /// A move was submitted while a promotion choice is still outstanding.
    PromotionPending,

    /// A promotion piece was supplied but no promotion is waiting.
    NoPromotionPending,

    /// Promotions only accept Queen, Rook, Bishop or Knight.
    InvalidPromotionPiece(PieceKind),

    /// The game already reached a terminal state.
    GameOver(GameStatus),

    /// An engine failed to produce a move.
    Engine(String),

    /// A snapshot could not be encoded or decoded.
    Snapshot(String),
}

impl fmt::Display for ChessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChessError::MalformedNotation(msg) => write!(f, "malformed board notation: {msg}"),
            ChessError::InvalidSquare(square) => write!(f, "invalid square: {square}"),
            ChessError::IllegalMoveSelected(notation) => {
                write!(f, "move {notation} is not legal in this position")
            }
            ChessError::PromotionPending => {
                write!(f, "a promotion choice must be made before the next move")
            }
            ChessError::NoPromotionPending => write!(f, "no promotion is pending"),
            ChessError::InvalidPromotionPiece(kind) => {
                write!(f, "cannot promote to {kind:?}")
            }
            ChessError::GameOver(status) => write!(f, "game is over: {status}"),
            ChessError::Engine(msg) => write!(f, "engine error: {msg}"),
            ChessError::Snapshot(msg) => write!(f, "snapshot error: {msg}"),
        }
    }
}

impl Error for ChessError {}

impl From<serde_json::Error> for ChessError {
    fn from(err: serde_json::Error) -> Self {
        ChessError::Snapshot(err.to_string())
    }
}
