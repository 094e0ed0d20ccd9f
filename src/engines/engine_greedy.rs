use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::engines::engine_trait::{with_default_promotion, Engine, EngineOutput, GoParams};
use crate::errors::{ChessError, ChessResult};
use crate::game_state::chess_types::{Board, Color, PieceKind};
use crate::move_generation::position::Position;
use crate::moves::chess_move::Move;

#[inline]
pub fn piece_value(piece: PieceKind) -> i32 {
    match piece {
        PieceKind::Pawn => 10,
        PieceKind::Knight => 30,
        PieceKind::Bishop => 30,
        PieceKind::Rook => 50,
        PieceKind::Queen => 90,
        PieceKind::King => 900,
        PieceKind::None => 0,
    }
}

/// Material on `board` from `color`'s point of view.
pub fn material_score(board: &Board, color: Color) -> i32 {
    board
        .occupied()
        .map(|(_, piece)| {
            let value = piece_value(piece.kind);
            if piece.color == color {
                value
            } else {
                -value
            }
        })
        .sum()
}

/// One-ply material maximiser; ties are broken at random.
pub struct GreedyEngine {
    rng: StdRng,
}

impl GreedyEngine {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for GreedyEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for GreedyEngine {
    fn name(&self) -> &str {
        "Tabula Greedy"
    }

    fn choose_move(&mut self, position: &Position, _params: &GoParams) -> ChessResult<EngineOutput> {
        let legal_moves = position.legal_moves();
        let color = position.side_to_move();

        let mut out = EngineOutput::default();
        out.info_lines
            .push(format!("greedy_engine legal_moves {}", legal_moves.len()));

        if legal_moves.is_empty() {
            return Ok(out);
        }

        let mut best_value = i32::MIN;
        let mut best_moves: Vec<Move> = Vec::new();

        for mv in legal_moves {
            let mv = with_default_promotion(mv);
            let after = position.board_after_move(&mv, position.board(), color);
            let value = material_score(&after, color);

            if value > best_value {
                best_value = value;
                best_moves.clear();
                best_moves.push(mv);
            } else if value == best_value {
                best_moves.push(mv);
            }
        }

        let picked = best_moves
            .choose(&mut self.rng)
            .ok_or_else(|| ChessError::Engine("failed to choose greedy best move".to_owned()))?;

        out.info_lines
            .push(format!("greedy_engine material_score {best_value}"));
        out.best_move = Some(picked.clone());
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::{material_score, GreedyEngine};
    use crate::engines::engine_trait::{Engine, GoParams};
    use crate::game_state::chess_types::{Board, CastlingRights, Color, Flags, PieceKind};
    use crate::move_generation::position::Position;

    #[test]
    fn material_is_zero_sum() {
        let board = Board::initial();
        assert_eq!(material_score(&board, Color::White), 0);

        let board = Board::from_notation("4k3/8/8/8/8/8/8/3QK3").expect("parse");
        assert_eq!(material_score(&board, Color::White), 90);
        assert_eq!(material_score(&board, Color::Black), -90);
    }

    #[test]
    fn takes_the_biggest_piece() {
        // Rook on d1 can take the queen on d8 or the knight on a1.
        let position = Position::new(
            Board::from_notation("3qk3/8/8/8/8/8/8/n2RK3").expect("parse"),
            Flags::new(Color::White, CastlingRights::NONE, ""),
        );
        let out = GreedyEngine::with_seed(5)
            .choose_move(&position, &GoParams::default())
            .expect("answer");
        assert_eq!(out.best_move.map(|mv| mv.notation), Some("Rd1xd8".to_owned()));
    }

    #[test]
    fn promotes_to_queen() {
        let position = Position::new(
            Board::from_notation("k7/4P3/8/8/8/8/8/7K").expect("parse"),
            Flags::new(Color::White, CastlingRights::NONE, ""),
        );
        let mv = GreedyEngine::with_seed(9)
            .choose_move(&position, &GoParams::default())
            .expect("answer")
            .best_move
            .expect("has moves");
        assert_eq!(mv.promotion, Some(PieceKind::Queen));
        assert_eq!(mv.notation, "e7e8Q");
    }
}
