//! Batch engine-vs-engine runner.
//!
//! Run with:
//! `cargo run --release -- --games 20 --white greedy --black random`
//! `RUST_LOG=debug cargo run -- --games 1 --max-plies 40`

use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use tabula_chess::engines::engine_greedy::GreedyEngine;
use tabula_chess::engines::engine_minimax::MinimaxEngine;
use tabula_chess::engines::engine_random::RandomEngine;
use tabula_chess::engines::engine_trait::{Engine, GoParams};
use tabula_chess::errors::ChessResult;
use tabula_chess::utils::engine_match_harness::{
    play_engine_match_series, MatchConfig, MatchSeriesConfig,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum EngineKind {
    Random,
    Greedy,
    Minimax,
}

#[derive(Debug, Parser)]
#[command(name = "tabula_chess", about = "Play batches of engine-vs-engine chess games")]
struct Cli {
    /// Number of games to play.
    #[arg(long, default_value_t = 10)]
    games: u16,

    #[arg(long, value_enum, default_value_t = EngineKind::Greedy)]
    white: EngineKind,

    #[arg(long, value_enum, default_value_t = EngineKind::Random)]
    black: EngineKind,

    /// Search depth for the minimax engine.
    #[arg(long, default_value_t = 2)]
    depth: u8,

    /// Plies after which a game is abandoned.
    #[arg(long, default_value_t = 400)]
    max_plies: u16,

    /// Random opening plies before the engines take over.
    #[arg(long, default_value_t = 0)]
    opening_plies: u8,

    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Print the tally as JSON instead of text.
    #[arg(long)]
    json: bool,
}

fn engine_factory(kind: EngineKind, depth: u8) -> impl Fn() -> Box<dyn Engine> {
    move || -> Box<dyn Engine> {
        match kind {
            EngineKind::Random => Box::new(RandomEngine::new()),
            EngineKind::Greedy => Box::new(GreedyEngine::new()),
            EngineKind::Minimax => Box::new(MinimaxEngine::new(depth)),
        }
    }
}

fn main() -> ChessResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();

    let stats = play_engine_match_series(
        engine_factory(cli.white, cli.depth),
        engine_factory(cli.black, cli.depth),
        &MatchSeriesConfig {
            games: cli.games,
            per_game: MatchConfig {
                max_plies: cli.max_plies,
                opening_random_plies: cli.opening_plies,
                seed: cli.seed,
                go_params: GoParams {
                    depth: Some(cli.depth),
                },
            },
        },
    )?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
    } else {
        println!("{}", "*".repeat(40));
        println!("{}", stats.report());
    }
    Ok(())
}
