//! Engine abstraction layer used by the match harness and the batch binary.
//!
//! Engines only read a [`Position`] and answer with one of its legal moves.
//! Moves that reach the last rank come back with `promotion` already set.

use crate::errors::ChessResult;
use crate::game_state::chess_rules::PROMOTION_CHOICES;
use crate::game_state::chess_types::PieceKind;
use crate::move_generation::position::Position;
use crate::moves::chess_move::Move;

#[derive(Debug, Clone, Default)]
pub struct GoParams {
    /// Search depth in plies, for engines that search.
    pub depth: Option<u8>,
}

#[derive(Debug, Clone, Default)]
pub struct EngineOutput {
    pub best_move: Option<Move>,
    pub info_lines: Vec<String>,
}

pub trait Engine: Send {
    fn name(&self) -> &str;

    fn new_game(&mut self) {}

    fn choose_move(&mut self, position: &Position, params: &GoParams) -> ChessResult<EngineOutput>;
}

/// Finalize a generated move the way the automated players do: promotions
/// always pick a Queen.
pub fn with_default_promotion(mv: &Move) -> Move {
    if mv.needs_promotion() && mv.promotion.is_none() {
        mv.clone().with_promotion(default_promotion())
    } else {
        mv.clone()
    }
}

#[inline]
fn default_promotion() -> PieceKind {
    PROMOTION_CHOICES[0]
}
