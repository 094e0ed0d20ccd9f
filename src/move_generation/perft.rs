use std::sync::Arc;
use std::thread;

use crate::errors::{ChessError, ChessResult};
use crate::game_state::chess_rules::PROMOTION_CHOICES;
use crate::game_state::chess_types::{Board, Flags};
use crate::move_generation::legal_move_apply::board_after_move;
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::move_generator::MoveGenerator;
use crate::moves::chess_move::Move;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: usize,
    pub captures: usize,
    pub en_passant: usize,
    pub castles: usize,
    pub promotions: usize,
    pub checks: usize,
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
        self.en_passant += rhs.en_passant;
        self.castles += rhs.castles;
        self.promotions += rhs.promotions;
        self.checks += rhs.checks;
    }
}

pub fn perft<G: MoveGenerator>(generator: &G, board: &Board, flags: &Flags, depth: u8) -> PerftCounts {
    let mut total = PerftCounts::default();
    perft_recurse(generator, board, flags, depth, &mut total);
    total
}

/// One worker thread per root move.
pub fn perft_multi_threaded(
    generator: Arc<dyn MoveGenerator>,
    board: &Board,
    flags: &Flags,
    depth: u8,
) -> ChessResult<PerftCounts> {
    if depth == 0 {
        return Ok(PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        });
    }

    let root_moves = expand_promotions(generator.generate_legal_moves(board, flags));
    let mut handles = Vec::with_capacity(root_moves.len());

    for mv in root_moves {
        let generator_ref = Arc::clone(&generator);
        let board = *board;
        let flags = flags.clone();
        handles.push(thread::spawn(move || {
            let mut local = PerftCounts::default();
            visit_move(generator_ref.as_ref(), &board, &flags, &mv, depth, &mut local);
            local
        }));
    }

    let mut total = PerftCounts::default();
    for handle in handles {
        let local = handle
            .join()
            .map_err(|_| ChessError::Engine("perft worker thread panicked".to_owned()))?;
        total.merge(local);
    }

    Ok(total)
}

fn perft_recurse<G: MoveGenerator + ?Sized>(
    generator: &G,
    board: &Board,
    flags: &Flags,
    depth: u8,
    counts: &mut PerftCounts,
) {
    if depth == 0 {
        counts.nodes += 1;
        return;
    }

    for mv in expand_promotions(generator.generate_legal_moves(board, flags)) {
        visit_move(generator, board, flags, &mv, depth, counts);
    }
}

fn visit_move<G: MoveGenerator + ?Sized>(
    generator: &G,
    board: &Board,
    flags: &Flags,
    mv: &Move,
    depth: u8,
    counts: &mut PerftCounts,
) {
    let next_board = board_after_move(board, mv, flags.color);

    if depth == 1 {
        counts.nodes += 1;
        if mv.is_capture() {
            counts.captures += 1;
        }
        if mv.is_en_passant() {
            counts.en_passant += 1;
        }
        if mv.is_castling() {
            counts.castles += 1;
        }
        if mv.promotion.is_some() {
            counts.promotions += 1;
        }
        if is_king_in_check(&next_board, flags.color.opposite()) {
            counts.checks += 1;
        }
        return;
    }

    let next_flags = flags.after_move(mv);
    perft_recurse(generator, &next_board, &next_flags, depth - 1, counts);
}

/// A move reaching the last rank counts once per promotion choice.
fn expand_promotions(moves: Vec<Move>) -> Vec<Move> {
    let mut out = Vec::with_capacity(moves.len());
    for mv in moves {
        if mv.needs_promotion() {
            out.extend(PROMOTION_CHOICES.iter().map(|&kind| mv.clone().with_promotion(kind)));
        } else {
            out.push(mv);
        }
    }
    out
}
