//! Fixed-depth negamax with alpha-beta pruning over material.
//!
//! Every node builds a fresh [`Position`], the same per-turn object the game
//! uses, so the search only ever explores legal moves.

use crate::engines::engine_greedy::material_score;
use crate::engines::engine_trait::{with_default_promotion, Engine, EngineOutput, GoParams};
use crate::errors::ChessResult;
use crate::game_state::chess_types::{Board, Flags};
use crate::move_generation::legal_move_apply::board_after_move;
use crate::move_generation::position::Position;
use crate::moves::chess_move::Move;

const MATE_SCORE: i32 = 100_000;
const DEFAULT_DEPTH: u8 = 2;

pub struct MinimaxEngine {
    depth: u8,
    nodes: u64,
}

impl MinimaxEngine {
    pub fn new(depth: u8) -> Self {
        Self {
            depth: depth.max(1),
            nodes: 0,
        }
    }

    fn negamax(&mut self, board: &Board, flags: &Flags, depth: u8, mut alpha: i32, beta: i32) -> i32 {
        self.nodes += 1;
        let position = Position::new(*board, flags.clone());

        if position.legal_moves().is_empty() {
            // Sooner mates (more depth left) score further from zero.
            return if position.in_check() {
                -MATE_SCORE - i32::from(depth)
            } else {
                0
            };
        }
        if depth == 0 {
            return material_score(board, flags.color);
        }

        let mut best = i32::MIN + 1;
        for mv in position.legal_moves() {
            let mv = with_default_promotion(mv);
            let score = self.child_score(board, flags, &mv, depth, alpha, beta);
            best = best.max(score);
            alpha = alpha.max(score);
            if alpha >= beta {
                break;
            }
        }
        best
    }

    fn child_score(&mut self, board: &Board, flags: &Flags, mv: &Move, depth: u8, alpha: i32, beta: i32) -> i32 {
        let next_board = board_after_move(board, mv, flags.color);
        let next_flags = flags.after_move(mv);
        -self.negamax(&next_board, &next_flags, depth - 1, -beta, -alpha)
    }
}

impl Default for MinimaxEngine {
    fn default() -> Self {
        Self::new(DEFAULT_DEPTH)
    }
}

impl Engine for MinimaxEngine {
    fn name(&self) -> &str {
        "Tabula Minimax"
    }

    fn choose_move(&mut self, position: &Position, params: &GoParams) -> ChessResult<EngineOutput> {
        let depth = params.depth.unwrap_or(self.depth).max(1);
        self.nodes = 0;

        let mut out = EngineOutput::default();
        let board = position.board();
        let flags = position.flags();

        let mut alpha = i32::MIN + 1;
        let beta = i32::MAX;
        let mut best: Option<(Move, i32)> = None;

        for mv in position.legal_moves() {
            let mv = with_default_promotion(mv);
            let score = self.child_score(board, flags, &mv, depth, alpha, beta);
            if best.as_ref().map_or(true, |(_, best_score)| score > *best_score) {
                alpha = alpha.max(score);
                best = Some((mv, score));
            }
        }

        out.info_lines.push(format!(
            "minimax_engine depth {depth} nodes {} score {}",
            self.nodes,
            best.as_ref().map_or(0, |(_, score)| *score)
        ));
        out.best_move = best.map(|(mv, _)| mv);
        Ok(out)
    }
}
