//! First-class move types.
//!
//! A move is a domain event: the player, the cell, and what the engine made
//! of it. Rejections are ordinary values, never panics.

use crate::position::Coord;
use crate::types::{GameStatus, Player};
use serde::{Deserialize, Serialize};

/// An accepted move: a player placing their mark on a cell.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_new::new,
)]
pub struct Move {
    /// The player who moved.
    pub player: Player,
    /// The cell that was marked.
    #[serde(flatten)]
    pub coord: Coord,
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.player, self.coord)
    }
}

/// Result of an accepted move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveOutcome {
    /// The move that was applied.
    pub applied: Move,
    /// Game status after the move.
    pub status: GameStatus,
    /// Player holding the turn after the move.
    pub turn: Player,
    /// Accepted moves so far, including this one.
    pub move_count: usize,
}

/// Reason a move was rejected.
///
/// The engine state is unchanged whenever one of these is returned.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display, strum::IntoStaticStr,
)]
#[strum(serialize_all = "snake_case")]
pub enum MoveError {
    /// The game has already been won or drawn.
    #[display("game is already over")]
    GameAlreadyOver,

    /// The coordinates fall outside the board.
    #[display("coordinates ({x}, {y}) are outside the board")]
    OutOfBounds {
        /// Requested column.
        x: i64,
        /// Requested row.
        y: i64,
    },

    /// The target cell already holds a mark.
    #[display("cell {_0} is already occupied")]
    CellOccupied(Coord),
}

impl MoveError {
    /// Stable machine-readable code, e.g. `cell_occupied`.
    pub fn code(&self) -> &'static str {
        self.into()
    }
}

impl std::error::Error for MoveError {}
