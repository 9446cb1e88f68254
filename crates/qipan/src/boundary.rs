//! The four-operation text boundary.
//!
//! Internally everything is typed; this is the only place results turn into
//! strings.

use crate::config::EngineConfig;
use crate::engine::Engine;
use crate::wire::{BoardState, GameInfo, MoveReport};
use tracing::{debug, instrument};

/// A game exposed through string-returning operations.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct QipanGame {
    engine: Engine,
}

impl QipanGame {
    /// Creates a game with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a game for the given configuration.
    pub fn with_config(config: EngineConfig) -> Self {
        Self {
            engine: Engine::with_config(config),
        }
    }

    /// Plays the current turn at column `x`, row `y`.
    ///
    /// Returns a [`MoveReport`] as JSON. Rejections are reported, not raised.
    #[instrument(skip(self))]
    pub fn make_move(&mut self, x: i64, y: i64) -> String {
        let result = self.engine.make_move(x, y);
        if let Err(err) = &result {
            debug!(code = err.code(), %err, "Move rejected");
        }
        MoveReport::from(result).encode()
    }

    /// Returns the grid as [`BoardState`] JSON.
    pub fn get_board_state(&self) -> String {
        BoardState::from_board(self.engine.board()).encode()
    }

    /// Returns turn, status, counters and last move as [`GameInfo`] JSON.
    pub fn get_game_info(&self) -> String {
        GameInfo::from_engine(&self.engine).encode()
    }

    /// Starts over with the same configuration.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.engine.reset();
        debug!("Boundary game reset");
    }

    /// Typed view of the underlying engine.
    pub fn engine(&self) -> &Engine {
        &self.engine
    }
}
