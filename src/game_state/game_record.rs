//! Append-only history of one game plus the serializable position snapshot.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::ChessResult;
use crate::game_state::chess_types::Flags;
use crate::moves::chess_move::{notation_is_capture, notation_is_pawn_move};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameRecord {
    moves: Vec<String>,
    snapshots: Vec<String>,
    started_at: DateTime<Utc>,
}

impl Default for GameRecord {
    fn default() -> Self {
        Self::new()
    }
}

impl GameRecord {
    pub fn new() -> Self {
        Self::started(Utc::now())
    }

    /// Empty record of a game that began at `started_at`.
    pub fn started(started_at: DateTime<Utc>) -> Self {
        Self {
            moves: Vec::new(),
            snapshots: Vec::new(),
            started_at,
        }
    }

    pub fn push_move(&mut self, notation: impl Into<String>) {
        self.moves.push(notation.into());
    }

    pub fn push_snapshot(&mut self, board_notation: impl Into<String>) {
        self.snapshots.push(board_notation.into());
    }

    pub fn moves(&self) -> &[String] {
        &self.moves
    }

    pub fn snapshots(&self) -> &[String] {
        &self.snapshots
    }

    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    /// How many recorded snapshots equal `board_notation`.
    pub fn occurrences(&self, board_notation: &str) -> usize {
        self.snapshots
            .iter()
            .filter(|snapshot| snapshot.as_str() == board_notation)
            .count()
    }

    /// True once `window` moves are recorded and none of the last `window`
    /// is a capture or a pawn move.
    pub fn quiet_for(&self, window: usize) -> bool {
        if window == 0 || self.moves.len() < window {
            return false;
        }
        self.moves[self.moves.len() - window..]
            .iter()
            .all(|notation| !notation_is_capture(notation) && !notation_is_pawn_move(notation))
    }

    /// Moves grouped as (White, Black) pairs in play order.
    pub fn move_pairs(&self) -> Vec<(String, Option<String>)> {
        self.moves
            .chunks(2)
            .map(|pair| (pair[0].clone(), pair.get(1).cloned()))
            .collect()
    }
}

/// Board placement and flags, enough to resume play from a position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub board: String,
    pub flags: Flags,
    pub started_at: DateTime<Utc>,
}

impl GameSnapshot {
    pub fn to_json(&self) -> ChessResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(json: &str) -> ChessResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
