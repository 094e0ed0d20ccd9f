//! Background move selection.
//!
//! The worker owns an engine for the duration of one search and reads a
//! shared, immutable [`Position`]. Callers poll [`EngineWorker::is_finished`]
//! and collect the answer (and the engine) with [`EngineWorker::join`].

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};

use tracing::debug;

use crate::engines::engine_trait::{Engine, EngineOutput, GoParams};
use crate::errors::{ChessError, ChessResult};
use crate::move_generation::position::Position;

type WorkerResult = (Box<dyn Engine>, ChessResult<EngineOutput>);

pub struct EngineWorker {
    finished: Arc<AtomicBool>,
    handle: JoinHandle<WorkerResult>,
}

impl EngineWorker {
    pub fn spawn(mut engine: Box<dyn Engine>, position: Arc<Position>, params: GoParams) -> ChessResult<Self> {
        let finished = Arc::new(AtomicBool::new(false));
        let done = Arc::clone(&finished);

        let handle = thread::Builder::new()
            .name(format!("engine-{}", engine.name()))
            .spawn(move || {
                let output = engine.choose_move(&position, &params);
                done.store(true, Ordering::Release);
                (engine, output)
            })
            .map_err(|e| ChessError::Engine(format!("failed to spawn engine worker: {e}")))?;

        Ok(Self { finished, handle })
    }

    pub fn is_finished(&self) -> bool {
        self.finished.load(Ordering::Acquire)
    }

    /// Wait for the search and return the engine with its answer.
    pub fn join(self) -> ChessResult<(Box<dyn Engine>, EngineOutput)> {
        let (engine, output) = self
            .handle
            .join()
            .map_err(|_| ChessError::Engine("engine worker thread panicked".to_owned()))?;
        let output = output?;
        debug!(
            engine = engine.name(),
            best_move = output.best_move.as_ref().map(|mv| mv.notation.as_str()).unwrap_or("-"),
            "engine worker finished"
        );
        Ok((engine, output))
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::thread;
    use std::time::Duration;

    use super::EngineWorker;
    use crate::engines::engine_random::RandomEngine;
    use crate::engines::engine_trait::GoParams;
    use crate::game_state::chess_types::{Board, Flags};
    use crate::move_generation::position::Position;

    #[test]
    fn worker_reports_completion_and_returns_legal_move() {
        let position = Arc::new(Position::new(Board::initial(), Flags::default()));
        let worker = EngineWorker::spawn(
            Box::new(RandomEngine::with_seed(21)),
            Arc::clone(&position),
            GoParams::default(),
        )
        .expect("spawn");

        while !worker.is_finished() {
            thread::sleep(Duration::from_millis(1));
        }

        let (engine, output) = worker.join().expect("join");
        assert_eq!(engine.name(), "Tabula Random");
        let mv = output.best_move.expect("startpos has moves");
        assert!(position.legal_moves().contains(&mv));
    }
}
