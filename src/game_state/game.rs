//! Turn-by-turn game state machine.
//!
//! `Game` owns the authoritative board, flags and history. Every turn it
//! builds a fresh [`Position`], evaluates end-of-game conditions in a fixed
//! order (mate/stalemate, repetition, fifty-move rule, dead position) and
//! only accepts moves that position generated.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::errors::{ChessError, ChessResult};
use crate::game_state::chess_rules::{FIFTY_MOVE_WINDOW, REPETITION_THRESHOLD};
use crate::game_state::chess_types::{Board, Color, Flags, PieceKind, Square};
use crate::game_state::game_record::{GameRecord, GameSnapshot};
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::position::Position;
use crate::moves::chess_move::Move;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    Started,
    Checkmate { winner: Color },
    Stalemate,
    DrawByRepetition,
    DrawByFiftyMoves,
    DrawByDeadPosition,
}

impl GameStatus {
    #[inline]
    pub fn is_terminal(self) -> bool {
        self != GameStatus::Started
    }

    pub fn is_draw(self) -> bool {
        matches!(
            self,
            GameStatus::Stalemate
                | GameStatus::DrawByRepetition
                | GameStatus::DrawByFiftyMoves
                | GameStatus::DrawByDeadPosition
        )
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameStatus::Started => write!(f, "in progress"),
            GameStatus::Checkmate { winner } => write!(f, "checkmate, {winner} wins"),
            GameStatus::Stalemate => write!(f, "stalemate"),
            GameStatus::DrawByRepetition => write!(f, "draw by threefold repetition"),
            GameStatus::DrawByFiftyMoves => write!(f, "draw by fifty-move rule"),
            GameStatus::DrawByDeadPosition => write!(f, "draw by dead position"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    /// Recorded moves without capture or pawn move that draw the game.
    pub fifty_move_window: usize,
    /// Occurrences of one board placement that draw the game.
    pub repetition_threshold: usize,
    pub detect_dead_position: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            fifty_move_window: FIFTY_MOVE_WINDOW,
            repetition_threshold: REPETITION_THRESHOLD,
            detect_dead_position: true,
        }
    }
}

/// A pawn that reached the last rank and waits for its piece kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingPromotion {
    pub mv: Move,
    pub square: Square,
    pub color: Color,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TurnOutcome {
    /// The move was applied; carries its final notation and the new status.
    Moved { notation: String, status: GameStatus },
    PromotionPending(PendingPromotion),
}

#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    flags: Flags,
    position: Position,
    status: GameStatus,
    config: GameConfig,
    record: GameRecord,
    turn: u32,
    pending_promotion: Option<PendingPromotion>,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// Standard initial position, White to move, all castling rights.
    pub fn new() -> Self {
        Self::from_position(Board::initial(), Flags::default(), GameConfig::default())
    }

    pub fn from_notation(board_notation: &str, flags: Flags) -> ChessResult<Self> {
        let board = Board::from_notation(board_notation)?;
        Ok(Self::from_position(board, flags, GameConfig::default()))
    }

    pub fn from_position(board: Board, flags: Flags, config: GameConfig) -> Self {
        Self::with_record(board, flags, config, GameRecord::new())
    }

    fn with_record(board: Board, flags: Flags, config: GameConfig, record: GameRecord) -> Self {
        let position = Position::new(board, flags.clone());
        let mut game = Self {
            board,
            flags,
            position,
            status: GameStatus::Started,
            config,
            record,
            turn: 1,
            pending_promotion: None,
        };
        game.start_turn();
        game
    }

    /// Replace the draw-detection settings and re-evaluate the current turn.
    pub fn with_config(mut self, config: GameConfig) -> Self {
        self.config = config;
        self.status = self.evaluate_status();
        self
    }

    /// Resume from a snapshot; the restored record keeps the original start
    /// time but no move history.
    pub fn from_snapshot(snapshot: &GameSnapshot) -> ChessResult<Self> {
        let board = Board::from_notation(&snapshot.board)?;
        Ok(Self::with_record(
            board,
            snapshot.flags.clone(),
            GameConfig::default(),
            GameRecord::started(snapshot.started_at),
        ))
    }

    pub fn from_snapshot_json(json: &str) -> ChessResult<Self> {
        Self::from_snapshot(&GameSnapshot::from_json(json)?)
    }

    /// Board, flags and start time of the current turn. Not available while a
    /// promotion is pending: the pawn already stands on the last rank but the
    /// turn has not passed.
    pub fn snapshot(&self) -> ChessResult<GameSnapshot> {
        if self.pending_promotion.is_some() {
            return Err(ChessError::PromotionPending);
        }
        Ok(GameSnapshot {
            board: self.board.to_notation(),
            flags: self.flags.clone(),
            started_at: self.record.started_at(),
        })
    }

    /// Build this turn's position, record the board and evaluate the status.
    pub fn start_turn(&mut self) -> GameStatus {
        self.position = Position::new(self.board, self.flags.clone());
        let notation = self.board.to_notation();
        self.record.push_snapshot(notation.as_str());
        self.status = self.evaluate_status();

        debug!(
            turn = self.turn,
            color = %self.flags.color,
            legal_moves = self.position.legal_moves().len(),
            board = %notation,
            "turn started"
        );
        if self.status.is_terminal() {
            info!(status = %self.status, moves = self.record.moves().len(), "game finished");
        }

        self.status
    }

    /// Apply a move the current position generated. Pawn moves onto the last
    /// rank wait for [`Game::resolve_promotion`] unless `mv.promotion` is set.
    pub fn apply_chosen_move(&mut self, mv: &Move) -> ChessResult<TurnOutcome> {
        if self.status.is_terminal() {
            return Err(ChessError::GameOver(self.status));
        }
        if self.pending_promotion.is_some() {
            return Err(ChessError::PromotionPending);
        }

        let Some(legal) = self.position.find_legal(mv).cloned() else {
            warn!(notation = %mv.notation, color = %self.flags.color, "rejected illegal move");
            return Err(ChessError::IllegalMoveSelected(mv.notation.clone()));
        };

        if !legal.needs_promotion() {
            self.board.apply_move(&legal);
            return Ok(self.finish_move(legal));
        }

        match mv.promotion {
            Some(kind) if !kind.is_promotion_choice() => Err(ChessError::InvalidPromotionPiece(kind)),
            Some(kind) => {
                self.board.apply_move(&legal);
                self.board.replace_kind(legal.to, kind);
                Ok(self.finish_move(legal.with_promotion(kind)))
            }
            None => {
                self.board.apply_move(&legal);
                let pending = PendingPromotion {
                    square: legal.to,
                    color: self.flags.color,
                    mv: legal,
                };
                debug!(square = %pending.square, color = %pending.color, "promotion pending");
                self.pending_promotion = Some(pending.clone());
                Ok(TurnOutcome::PromotionPending(pending))
            }
        }
    }

    /// Choose the piece for a pending promotion and finish that move.
    pub fn resolve_promotion(&mut self, kind: PieceKind) -> ChessResult<TurnOutcome> {
        if !kind.is_promotion_choice() {
            return Err(ChessError::InvalidPromotionPiece(kind));
        }
        let pending = self
            .pending_promotion
            .take()
            .ok_or(ChessError::NoPromotionPending)?;

        self.board.replace_kind(pending.square, kind);
        Ok(self.finish_move(pending.mv.with_promotion(kind)))
    }

    fn finish_move(&mut self, mv: Move) -> TurnOutcome {
        let mut next_flags = self.flags.after_move(&mv);
        let mv = if is_king_in_check(&self.board, next_flags.color) {
            mv.with_check()
        } else {
            mv
        };
        next_flags.previous_move = mv.notation.clone();

        debug!(notation = %mv.notation, color = %self.flags.color, "move applied");
        self.record.push_move(mv.notation.as_str());
        self.flags = next_flags;
        if self.flags.color == Color::White {
            self.turn += 1;
        }

        let status = self.start_turn();
        TurnOutcome::Moved {
            notation: mv.notation,
            status,
        }
    }

    fn evaluate_status(&self) -> GameStatus {
        if self.position.legal_moves().is_empty() {
            return if self.position.in_check() {
                GameStatus::Checkmate {
                    winner: self.flags.color.opposite(),
                }
            } else {
                GameStatus::Stalemate
            };
        }

        let threshold = self.config.repetition_threshold;
        if threshold > 0 && self.record.occurrences(&self.board.to_notation()) >= threshold {
            return GameStatus::DrawByRepetition;
        }

        if self.record.quiet_for(self.config.fifty_move_window) {
            return GameStatus::DrawByFiftyMoves;
        }

        if self.config.detect_dead_position && is_dead_position(&self.board) {
            return GameStatus::DrawByDeadPosition;
        }

        GameStatus::Started
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn position(&self) -> &Position {
        &self.position
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn flags(&self) -> &Flags {
        &self.flags
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn record(&self) -> &GameRecord {
        &self.record
    }

    pub fn pending_promotion(&self) -> Option<&PendingPromotion> {
        self.pending_promotion.as_ref()
    }

    /// Full-move number, starting at 1 and incremented when White is back on move.
    pub fn turn(&self) -> u32 {
        self.turn
    }

    pub fn move_list(&self) -> &[String] {
        self.record.moves()
    }

    pub fn move_pairs(&self) -> Vec<(String, Option<String>)> {
        self.record.move_pairs()
    }
}

/// Bare kings, a single minor piece, or one bishop each on the same square
/// color.
pub fn is_dead_position(board: &Board) -> bool {
    let others: Vec<(Square, PieceKind, Color)> = board
        .occupied()
        .filter(|(_, piece)| piece.kind != PieceKind::King)
        .map(|(square, piece)| (square, piece.kind, piece.color))
        .collect();

    match others.as_slice() {
        [] => true,
        [(_, kind, _)] => matches!(kind, PieceKind::Bishop | PieceKind::Knight),
        [(a_sq, PieceKind::Bishop, a_color), (b_sq, PieceKind::Bishop, b_color)] => {
            a_color != b_color && a_sq.is_dark() == b_sq.is_dark()
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_types::CastlingRights;
    use crate::utils::algebraic::square_to_coordinates;

    fn play(game: &mut Game, from: &str, to: &str) -> TurnOutcome {
        let from = square_to_coordinates(from).expect("square");
        let to = square_to_coordinates(to).expect("square");
        let mv = game
            .position()
            .find_by_squares(from, to)
            .cloned()
            .expect("move should be legal");
        game.apply_chosen_move(&mv).expect("move should apply")
    }

    #[test]
    fn new_game_starts_with_twenty_moves() {
        let game = Game::new();
        assert_eq!(game.status(), GameStatus::Started);
        assert_eq!(game.position().legal_moves().len(), 20);
        assert_eq!(game.turn(), 1);
        assert_eq!(game.record().snapshots().len(), 1);
    }

    #[test]
    fn turn_counter_and_move_list_advance() {
        let mut game = Game::new();
        play(&mut game, "e2", "e4");
        assert_eq!(game.turn(), 1);
        assert_eq!(game.flags().color, Color::Black);
        assert_eq!(game.flags().previous_move, "e2e4");
        play(&mut game, "e7", "e5");
        assert_eq!(game.turn(), 2);
        assert_eq!(game.move_list(), ["e2e4", "e7e5"]);
        assert_eq!(game.move_pairs().len(), 1);
    }

    #[test]
    fn fools_mate_is_checkmate() {
        let mut game = Game::new();
        play(&mut game, "f2", "f3");
        play(&mut game, "e7", "e5");
        play(&mut game, "g2", "g4");
        let outcome = play(&mut game, "d8", "h4");
        assert_eq!(
            outcome,
            TurnOutcome::Moved {
                notation: "Qd8h4+".to_owned(),
                status: GameStatus::Checkmate {
                    winner: Color::Black
                },
            }
        );
        assert!(game.position().legal_moves().is_empty());

        let a2a3 = Move::quiet(Square::new(6, 0), Square::new(5, 0), PieceKind::Pawn);
        assert_eq!(
            game.apply_chosen_move(&a2a3),
            Err(ChessError::GameOver(GameStatus::Checkmate {
                winner: Color::Black
            }))
        );
    }

    #[test]
    fn queen_move_stalemates_cornered_king() {
        let flags = Flags::new(Color::White, CastlingRights::NONE, "");
        let mut game = Game::from_notation("k7/8/1KQ5/8/8/8/8/8", flags).expect("parse");
        assert_eq!(game.status(), GameStatus::Started);

        let outcome = play(&mut game, "c6", "c7");
        assert_eq!(
            outcome,
            TurnOutcome::Moved {
                notation: "Qc6c7".to_owned(),
                status: GameStatus::Stalemate,
            }
        );
        assert!(game.position().is_stalemate());
        assert!(game.status().is_draw());
        let king_step = Move::quiet(Square::new(0, 0), Square::new(1, 0), PieceKind::King);
        assert_eq!(
            game.apply_chosen_move(&king_step),
            Err(ChessError::GameOver(GameStatus::Stalemate))
        );
    }

    #[test]
    fn rejects_moves_not_generated() {
        let mut game = Game::new();
        let bogus = Move::quiet(Square::new(6, 4), Square::new(3, 4), PieceKind::Pawn);
        assert!(matches!(
            game.apply_chosen_move(&bogus),
            Err(ChessError::IllegalMoveSelected(_))
        ));
        assert_eq!(game.board(), &Board::initial());
        assert!(game.move_list().is_empty());
    }

    #[test]
    fn dead_position_rules() {
        for (notation, dead) in [
            ("8/8/8/8/8/8/8/k6K", true),
            ("8/8/8/8/8/8/8/k5NK", true),
            ("8/8/8/8/8/8/8/k5BK", true),
            ("8/8/8/8/8/8/8/k5RK", false),
            ("8/8/8/8/8/8/8/k5PK", false),
            // Bishops on c1 and f8: both dark squares.
            ("5b2/8/8/8/8/8/8/k1B4K", true),
            // Bishops on c1 (dark) and c8 (light).
            ("2b5/8/8/8/8/8/8/k1B4K", false),
            ("8/8/8/8/8/8/8/kBB4K", false),
        ] {
            let board = Board::from_notation(notation).expect("parse");
            assert_eq!(is_dead_position(&board), dead, "{notation}");
        }
    }

    #[test]
    fn bare_kings_draw_immediately_unless_disabled() {
        let flags = Flags::new(Color::White, CastlingRights::NONE, "");
        let game = Game::from_notation("8/8/8/8/8/8/8/k6K", flags).expect("parse");
        assert_eq!(game.status(), GameStatus::DrawByDeadPosition);

        let game = game.with_config(GameConfig {
            detect_dead_position: false,
            ..GameConfig::default()
        });
        assert_eq!(game.status(), GameStatus::Started);
    }

    #[test]
    fn promotion_waits_for_piece_choice() {
        let flags = Flags::new(Color::White, CastlingRights::NONE, "");
        let mut game = Game::from_notation("k7/4P3/8/8/8/8/8/7K", flags).expect("parse");

        let outcome = play(&mut game, "e7", "e8");
        let TurnOutcome::PromotionPending(pending) = outcome else {
            panic!("expected a pending promotion");
        };
        assert_eq!(pending.square, square_to_coordinates("e8").expect("square"));
        assert_eq!(pending.color, Color::White);
        assert_eq!(game.flags().color, Color::White);

        let e2e3 = Move::quiet(Square::new(6, 4), Square::new(5, 4), PieceKind::Pawn);
        assert_eq!(game.apply_chosen_move(&e2e3), Err(ChessError::PromotionPending));
        assert_eq!(
            game.resolve_promotion(PieceKind::King),
            Err(ChessError::InvalidPromotionPiece(PieceKind::King))
        );

        let outcome = game.resolve_promotion(PieceKind::Queen).expect("resolve");
        assert_eq!(
            outcome,
            TurnOutcome::Moved {
                notation: "e7e8Q+".to_owned(),
                status: GameStatus::Started,
            }
        );
        assert_eq!(game.board().to_notation(), "k3Q3/8/8/8/8/8/8/7K");
        assert_eq!(game.flags().color, Color::Black);
        assert_eq!(game.resolve_promotion(PieceKind::Queen), Err(ChessError::NoPromotionPending));
    }

    #[test]
    fn snapshot_restores_board_and_flags() {
        let mut game = Game::new();
        play(&mut game, "g1", "f3");
        let json = game.snapshot().expect("snapshot").to_json().expect("encode");
        let restored = Game::from_snapshot_json(&json).expect("decode");
        assert_eq!(restored.board(), game.board());
        assert_eq!(restored.flags(), game.flags());
        assert_eq!(restored.record().started_at(), game.record().started_at());
        assert_eq!(restored.position().legal_moves(), game.position().legal_moves());
    }
}
