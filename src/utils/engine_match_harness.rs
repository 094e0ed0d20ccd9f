//! Engine-vs-engine batch harness.
//!
//! Plays complete games through the [`Game`] state machine, asking each
//! engine for a move on a worker thread, and tallies how every game ended.

use std::sync::Arc;
use std::time::Instant;

use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::engines::engine_trait::{with_default_promotion, Engine, GoParams};
use crate::engines::engine_worker::EngineWorker;
use crate::errors::{ChessError, ChessResult};
use crate::game_state::chess_rules::PROMOTION_CHOICES;
use crate::game_state::chess_types::Color;
use crate::game_state::game::{Game, GameStatus, TurnOutcome};
use crate::moves::chess_move::Move;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MatchOutcome {
    WhiteWins,
    BlackWins,
    Stalemate,
    Repetition,
    FiftyMoves,
    DeadPosition,
    MaxPlies,
}

impl MatchOutcome {
    pub const ALL: [MatchOutcome; 7] = [
        MatchOutcome::WhiteWins,
        MatchOutcome::BlackWins,
        MatchOutcome::Stalemate,
        MatchOutcome::Repetition,
        MatchOutcome::FiftyMoves,
        MatchOutcome::DeadPosition,
        MatchOutcome::MaxPlies,
    ];

    /// `None` while the game is still running.
    pub fn from_status(status: GameStatus) -> Option<Self> {
        match status {
            GameStatus::Started => None,
            GameStatus::Checkmate {
                winner: Color::Black,
            } => Some(MatchOutcome::BlackWins),
            GameStatus::Checkmate { .. } => Some(MatchOutcome::WhiteWins),
            GameStatus::Stalemate => Some(MatchOutcome::Stalemate),
            GameStatus::DrawByRepetition => Some(MatchOutcome::Repetition),
            GameStatus::DrawByFiftyMoves => Some(MatchOutcome::FiftyMoves),
            GameStatus::DrawByDeadPosition => Some(MatchOutcome::DeadPosition),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            MatchOutcome::WhiteWins => "White wins",
            MatchOutcome::BlackWins => "Black wins",
            MatchOutcome::Stalemate => "Null: Stalemate",
            MatchOutcome::Repetition => "Null: Draw by Threefold Repetition",
            MatchOutcome::FiftyMoves => "Null: Draw by 50-Move Rule",
            MatchOutcome::DeadPosition => "Null: Draw by Dead Position",
            MatchOutcome::MaxPlies => "Null: Ply limit reached",
        }
    }
}

#[derive(Debug, Clone)]
pub struct MatchConfig {
    pub max_plies: u16,
    /// Uniformly random plies played before the engines take over.
    pub opening_random_plies: u8,
    pub seed: u64,
    pub go_params: GoParams,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            max_plies: 400,
            opening_random_plies: 0,
            seed: 0,
            go_params: GoParams::default(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct MatchResult {
    pub outcome: MatchOutcome,
    pub final_game: Game,
    pub opening_moves: Vec<String>,
    pub white_move_count: u32,
    pub black_move_count: u32,
    pub white_total_time_ns: u128,
    pub black_total_time_ns: u128,
}

#[derive(Debug, Clone)]
pub struct MatchSeriesConfig {
    pub games: u16,
    /// Game `i` is played with seed `per_game.seed + i`.
    pub per_game: MatchConfig,
}

impl Default for MatchSeriesConfig {
    fn default() -> Self {
        Self {
            games: 10,
            per_game: MatchConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MatchSeriesStats {
    pub games: u16,
    pub white_wins: u16,
    pub black_wins: u16,
    pub stalemates: u16,
    pub repetitions: u16,
    pub fifty_moves: u16,
    pub dead_positions: u16,
    pub max_plies: u16,
    pub outcomes: Vec<MatchOutcome>,
    pub white_avg_move_time_ms: f64,
    pub black_avg_move_time_ms: f64,
}

impl MatchSeriesStats {
    pub fn count(&self, outcome: MatchOutcome) -> u16 {
        match outcome {
            MatchOutcome::WhiteWins => self.white_wins,
            MatchOutcome::BlackWins => self.black_wins,
            MatchOutcome::Stalemate => self.stalemates,
            MatchOutcome::Repetition => self.repetitions,
            MatchOutcome::FiftyMoves => self.fifty_moves,
            MatchOutcome::DeadPosition => self.dead_positions,
            MatchOutcome::MaxPlies => self.max_plies,
        }
    }

    fn record(&mut self, outcome: MatchOutcome) {
        let slot = match outcome {
            MatchOutcome::WhiteWins => &mut self.white_wins,
            MatchOutcome::BlackWins => &mut self.black_wins,
            MatchOutcome::Stalemate => &mut self.stalemates,
            MatchOutcome::Repetition => &mut self.repetitions,
            MatchOutcome::FiftyMoves => &mut self.fifty_moves,
            MatchOutcome::DeadPosition => &mut self.dead_positions,
            MatchOutcome::MaxPlies => &mut self.max_plies,
        };
        *slot += 1;
        self.outcomes.push(outcome);
    }

    /// One `label: count` line per outcome.
    pub fn report(&self) -> String {
        let mut lines: Vec<String> = MatchOutcome::ALL
            .iter()
            .map(|outcome| format!("{:<36}: {}", outcome.label(), self.count(*outcome)))
            .collect();
        lines.push(format!(
            "{:<36}: white={:.3} black={:.3}",
            "Average move time (ms)", self.white_avg_move_time_ms, self.black_avg_move_time_ms
        ));
        lines.join("\n")
    }
}

/// Play one game, `engine_white` against `engine_black`, from the initial
/// position.
pub fn play_engine_match(
    engine_white: Box<dyn Engine>,
    engine_black: Box<dyn Engine>,
    config: &MatchConfig,
) -> ChessResult<MatchResult> {
    play_engine_match_from_game(Game::new(), engine_white, engine_black, config)
}

/// Play one game starting from a caller-provided game.
pub fn play_engine_match_from_game(
    mut game: Game,
    mut engine_white: Box<dyn Engine>,
    mut engine_black: Box<dyn Engine>,
    config: &MatchConfig,
) -> ChessResult<MatchResult> {
    engine_white.new_game();
    engine_black.new_game();

    let opening_moves = apply_seeded_random_opening(&mut game, config.seed, config.opening_random_plies)?;

    let mut engines = [Some(engine_white), Some(engine_black)];
    let mut move_counts = [0u32; 2];
    let mut total_time_ns = [0u128; 2];
    let mut plies = opening_moves.len();

    while game.status() == GameStatus::Started && plies < usize::from(config.max_plies) {
        let mover = game.flags().color;
        let slot = usize::from(mover == Color::Black);
        let engine = engines[slot]
            .take()
            .ok_or_else(|| ChessError::Engine(format!("no engine for {mover}")))?;

        let started = Instant::now();
        let worker = EngineWorker::spawn(engine, Arc::new(game.position().clone()), config.go_params.clone())?;
        let (engine, output) = worker.join()?;
        let elapsed_ns = started.elapsed().as_nanos();

        move_counts[slot] = move_counts[slot].saturating_add(1);
        total_time_ns[slot] = total_time_ns[slot].saturating_add(elapsed_ns);

        let chosen = output
            .best_move
            .ok_or_else(|| ChessError::Engine(format!("{} returned no move", engine.name())))?;
        engines[slot] = Some(engine);

        play_move(&mut game, &chosen)?;
        plies += 1;
    }

    let outcome = MatchOutcome::from_status(game.status()).unwrap_or(MatchOutcome::MaxPlies);
    debug!(outcome = outcome.label(), plies, "match finished");

    Ok(MatchResult {
        outcome,
        final_game: game,
        opening_moves,
        white_move_count: move_counts[0],
        black_move_count: move_counts[1],
        white_total_time_ns: total_time_ns[0],
        black_total_time_ns: total_time_ns[1],
    })
}

/// Play a series with fixed colors and tally the outcomes.
pub fn play_engine_match_series<FW, FB>(
    white_factory: FW,
    black_factory: FB,
    config: &MatchSeriesConfig,
) -> ChessResult<MatchSeriesStats>
where
    FW: Fn() -> Box<dyn Engine>,
    FB: Fn() -> Box<dyn Engine>,
{
    let mut stats = MatchSeriesStats {
        games: config.games,
        ..MatchSeriesStats::default()
    };
    let mut white_moves = 0u32;
    let mut black_moves = 0u32;
    let mut white_ns = 0u128;
    let mut black_ns = 0u128;

    for i in 0..config.games {
        info!(games_left = config.games - i, "starting game");
        let per_game = MatchConfig {
            seed: config.per_game.seed.wrapping_add(u64::from(i)),
            ..config.per_game.clone()
        };

        let result = play_engine_match(white_factory(), black_factory(), &per_game)?;
        info!(
            game = i + 1,
            result = result.outcome.label(),
            moves = result.final_game.move_list().len(),
            started = %result.final_game.record().started_at().to_rfc3339(),
            "game finished"
        );

        white_moves = white_moves.saturating_add(result.white_move_count);
        black_moves = black_moves.saturating_add(result.black_move_count);
        white_ns = white_ns.saturating_add(result.white_total_time_ns);
        black_ns = black_ns.saturating_add(result.black_total_time_ns);
        stats.record(result.outcome);
    }

    stats.white_avg_move_time_ms = avg_ns_per_move_ms(white_ns, white_moves);
    stats.black_avg_move_time_ms = avg_ns_per_move_ms(black_ns, black_moves);

    Ok(stats)
}

/// Apply an engine's move, resolving a pending promotion to a Queen.
fn play_move(game: &mut Game, mv: &Move) -> ChessResult<()> {
    if let TurnOutcome::PromotionPending(_) = game.apply_chosen_move(mv)? {
        game.resolve_promotion(PROMOTION_CHOICES[0])?;
    }
    Ok(())
}

#[inline]
fn avg_ns_per_move_ms(total_ns: u128, moves: u32) -> f64 {
    if moves == 0 {
        0.0
    } else {
        (total_ns as f64) / (moves as f64) / 1_000_000.0
    }
}

fn apply_seeded_random_opening(game: &mut Game, seed: u64, plies: u8) -> ChessResult<Vec<String>> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut opening_moves = Vec::new();

    for _ in 0..plies {
        if game.status() != GameStatus::Started {
            break;
        }
        let Some(picked) = game.position().legal_moves().choose(&mut rng) else {
            break;
        };
        let mv = with_default_promotion(picked);
        play_move(game, &mv)?;
        if let Some(last) = game.move_list().last() {
            opening_moves.push(last.clone());
        }
    }

    Ok(opening_moves)
}
