//! Random-move engine.
//!
//! Selects uniformly from legal moves and is primarily used for diagnostics,
//! integration testing, and batch runs.

use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::engines::engine_trait::{with_default_promotion, Engine, EngineOutput, GoParams};
use crate::errors::{ChessError, ChessResult};
use crate::move_generation::position::Position;

pub struct RandomEngine {
    rng: StdRng,
}

impl RandomEngine {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Reproducible move choices.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for RandomEngine {
    fn name(&self) -> &str {
        "Tabula Random"
    }

    fn choose_move(&mut self, position: &Position, _params: &GoParams) -> ChessResult<EngineOutput> {
        let legal_moves = position.legal_moves();

        let mut out = EngineOutput::default();
        out.info_lines
            .push(format!("random_engine legal_moves {}", legal_moves.len()));

        if legal_moves.is_empty() {
            return Ok(out);
        }

        let picked = legal_moves
            .choose(&mut self.rng)
            .ok_or_else(|| ChessError::Engine("failed to choose a random move".to_owned()))?;

        out.best_move = Some(with_default_promotion(picked));
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::RandomEngine;
    use crate::engines::engine_trait::{Engine, GoParams};
    use crate::game_state::chess_types::{Board, CastlingRights, Color, Flags, PieceKind};
    use crate::move_generation::position::Position;

    #[test]
    fn picks_a_legal_move() {
        let position = Position::new(Board::initial(), Flags::default());
        let mut engine = RandomEngine::with_seed(7);
        let out = engine
            .choose_move(&position, &GoParams::default())
            .expect("engine should answer");
        let mv = out.best_move.expect("startpos has moves");
        assert!(position.legal_moves().contains(&mv));
    }

    #[test]
    fn same_seed_same_choice() {
        let position = Position::new(Board::initial(), Flags::default());
        let mut a = RandomEngine::with_seed(11);
        let mut b = RandomEngine::with_seed(11);
        for _ in 0..5 {
            let left = a.choose_move(&position, &GoParams::default()).expect("answer");
            let right = b.choose_move(&position, &GoParams::default()).expect("answer");
            assert_eq!(left.best_move, right.best_move);
        }
    }

    #[test]
    fn no_move_when_mated_and_queen_on_promotion() {
        let mated = Position::new(
            Board::from_notation("6rk/8/8/8/8/8/5PPP/r5K1").expect("parse"),
            Flags::new(Color::White, CastlingRights::NONE, ""),
        );
        let out = RandomEngine::with_seed(1)
            .choose_move(&mated, &GoParams::default())
            .expect("answer");
        assert!(out.best_move.is_none());

        // Only the pawn push and king steps; every pawn push is a promotion.
        let promo = Position::new(
            Board::from_notation("k7/4P3/8/8/8/8/8/7K").expect("parse"),
            Flags::new(Color::White, CastlingRights::NONE, ""),
        );
        let mut engine = RandomEngine::with_seed(3);
        for _ in 0..20 {
            let mv = engine
                .choose_move(&promo, &GoParams::default())
                .expect("answer")
                .best_move
                .expect("has moves");
            if mv.piece == PieceKind::Pawn {
                assert_eq!(mv.promotion, Some(PieceKind::Queen));
            }
        }
    }
}
