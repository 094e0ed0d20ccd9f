//! Per-turn rules snapshot.
//!
//! A `Position` is built once from a board and flags, computes every legal
//! move for the side to move plus the origin-square index, and is never
//! mutated afterwards. It is `Send + Sync`, so engines may read it from a
//! worker thread while the game waits for their answer.

use std::collections::BTreeMap;

use crate::game_state::chess_types::{Board, Color, Flags, Square};
use crate::move_generation::legal_move_apply;
use crate::move_generation::legal_move_checks;
use crate::move_generation::legal_move_generator::LegalMoveGenerator;
use crate::move_generation::move_generator::MoveGenerator;
use crate::moves::chess_move::Move;

#[derive(Debug, Clone)]
pub struct Position {
    board: Board,
    flags: Flags,
    legal_moves: Vec<Move>,
    move_map: BTreeMap<Square, Vec<Move>>,
}

impl Position {
    pub fn new(board: Board, flags: Flags) -> Self {
        Self::with_generator(&LegalMoveGenerator, board, flags)
    }

    pub fn with_generator<G: MoveGenerator + ?Sized>(generator: &G, board: Board, flags: Flags) -> Self {
        let legal_moves = generator.generate_legal_moves(&board, &flags);

        let mut move_map: BTreeMap<Square, Vec<Move>> = BTreeMap::new();
        for mv in &legal_moves {
            move_map.entry(mv.from).or_default().push(mv.clone());
        }

        Self {
            board,
            flags,
            legal_moves,
            move_map,
        }
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn flags(&self) -> &Flags {
        &self.flags
    }

    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.flags.color
    }

    pub fn legal_moves(&self) -> &[Move] {
        &self.legal_moves
    }

    pub fn move_map(&self) -> &BTreeMap<Square, Vec<Move>> {
        &self.move_map
    }

    /// Legal moves starting on `square`; empty when there are none.
    pub fn moves_from(&self, square: Square) -> &[Move] {
        self.move_map.get(&square).map(Vec::as_slice).unwrap_or(&[])
    }

    /// The legal move this position generated for the same origin,
    /// destination and base notation as `candidate`, if any.
    pub fn find_legal(&self, candidate: &Move) -> Option<&Move> {
        self.moves_from(candidate.from)
            .iter()
            .find(|mv| mv.same_base_move(candidate))
    }

    /// Legal move by origin and destination squares.
    pub fn find_by_squares(&self, from: Square, to: Square) -> Option<&Move> {
        self.moves_from(from).iter().find(|mv| mv.to == to)
    }

    /// Whether the king of the side to move is attacked on `board`.
    pub fn is_king_in_check(&self, board: &Board) -> bool {
        legal_move_checks::is_king_in_check(board, self.flags.color)
    }

    /// Whether the side to move is in check on this position's own board.
    pub fn in_check(&self) -> bool {
        self.is_king_in_check(&self.board)
    }

    pub fn is_square_attacked(&self, board: &Board, square: Square, color: Color) -> bool {
        legal_move_checks::is_square_attacked(board, square, color)
    }

    pub fn board_after_move(&self, mv: &Move, board: &Board, color: Color) -> Board {
        legal_move_apply::board_after_move(board, mv, color)
    }

    pub fn is_checkmate(&self) -> bool {
        self.legal_moves.is_empty() && self.in_check()
    }

    pub fn is_stalemate(&self) -> bool {
        self.legal_moves.is_empty() && !self.in_check()
    }
}

#[cfg(test)]
mod tests {
    use super::Position;
    use crate::game_state::chess_types::{Board, CastlingRights, Color, Flags, Square};
    use crate::move_generation::legal_move_checks::is_king_in_check;
    use crate::utils::algebraic::square_to_coordinates;

    fn position(notation: &str, flags: Flags) -> Position {
        Position::new(Board::from_notation(notation).expect("parse"), flags)
    }

    fn destinations(position: &Position, from: Square) -> Vec<Square> {
        position.moves_from(from).iter().map(|mv| mv.to).collect()
    }

    #[test]
    fn move_map_groups_by_origin() {
        let position = Position::new(Board::initial(), Flags::default());
        assert_eq!(
            destinations(&position, Square::new(6, 2)),
            vec![Square::new(5, 2), Square::new(4, 2)]
        );
        assert_eq!(
            destinations(&position, Square::new(7, 1)),
            vec![Square::new(5, 2), Square::new(5, 0)]
        );
        assert!(position.moves_from(Square::new(7, 0)).is_empty());
        assert_eq!(position.move_map().len(), 10);
        let indexed: usize = position.move_map().values().map(Vec::len).sum();
        assert_eq!(indexed, position.legal_moves().len());
    }

    #[test]
    fn castling_destinations_follow_king_steps() {
        let position = position("8/8/8/8/8/8/8/4K2R", Flags::default());
        assert_eq!(
            destinations(&position, Square::new(7, 4))
                .into_iter()
                .filter(|sq| sq.row == 7 && sq.col > 4)
                .collect::<Vec<_>>(),
            vec![Square::new(7, 5), Square::new(7, 6)]
        );
    }

    #[test]
    fn no_legal_move_leaves_own_king_in_check() {
        for notation in [
            "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R",
            "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8",
            "4r3/8/8/8/8/8/4N3/4K3",
        ] {
            let position = position(notation, Flags::new(Color::White, CastlingRights::ALL, ""));
            for mv in position.legal_moves() {
                let after = position.board_after_move(mv, position.board(), Color::White);
                assert!(!is_king_in_check(&after, Color::White), "{notation}: {mv}");
            }
        }
    }

    #[test]
    fn en_passant_listed_with_plain_push() {
        let position = position(
            "8/8/8/pPp5/8/8/8/8",
            Flags::new(Color::White, CastlingRights::NONE, "a7a5"),
        );
        let mut notations: Vec<&str> = position
            .legal_moves()
            .iter()
            .map(|mv| mv.notation.as_str())
            .collect();
        notations.sort();
        assert_eq!(notations, vec!["b5b6", "b5xa6 e.p"]);
    }

    #[test]
    fn reports_mate_and_stalemate() {
        // Back-rank mate.
        let mate = position(
            "6rk/8/8/8/8/8/5PPP/r5K1",
            Flags::new(Color::White, CastlingRights::NONE, ""),
        );
        assert!(mate.in_check());
        assert!(mate.is_checkmate());

        let stalemate = position(
            "k7/2Q5/1K6/8/8/8/8/8",
            Flags::new(Color::Black, CastlingRights::NONE, ""),
        );
        assert!(!stalemate.in_check());
        assert!(stalemate.is_stalemate());
    }

    #[test]
    fn lookups_by_squares_and_base_move() {
        let position = Position::new(Board::initial(), Flags::default());
        let e2 = square_to_coordinates("e2").expect("square");
        let e4 = square_to_coordinates("e4").expect("square");
        let found = position.find_by_squares(e2, e4).expect("e2e4 is legal");
        assert_eq!(found.notation, "e2e4");
        assert_eq!(position.find_legal(found).map(|mv| mv.notation.as_str()), Some("e2e4"));
        assert!(position.find_by_squares(e2, square_to_coordinates("e5").expect("square")).is_none());
    }
}
