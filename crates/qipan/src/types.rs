//! Core domain types for the board game.

use serde::{Deserialize, Serialize};

/// Player in the game.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
)]
#[serde(rename_all = "snake_case")]
pub enum Player {
    /// First player, marked `X`.
    #[strum(to_string = "Player A")]
    PlayerA,
    /// Second player, marked `O`.
    #[strum(to_string = "Player B")]
    PlayerB,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::PlayerA => Player::PlayerB,
            Player::PlayerB => Player::PlayerA,
        }
    }

    /// Board marker used in the text encodings.
    pub fn marker(self) -> char {
        match self {
            Player::PlayerA => 'X',
            Player::PlayerB => 'O',
        }
    }
}

/// A cell on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    /// Empty cell.
    #[default]
    Empty,
    /// Cell occupied by a player.
    Occupied(Player),
}

impl Cell {
    /// Marker for an empty cell in the text encodings.
    pub const EMPTY_MARKER: char = '.';

    /// Returns the marker character for this cell.
    pub fn marker(self) -> char {
        match self {
            Cell::Empty => Self::EMPTY_MARKER,
            Cell::Occupied(player) => player.marker(),
        }
    }

    /// Parses a marker character back into a cell.
    pub fn from_marker(marker: char) -> Option<Self> {
        match marker {
            Self::EMPTY_MARKER => Some(Cell::Empty),
            'X' => Some(Cell::Occupied(Player::PlayerA)),
            'O' => Some(Cell::Occupied(Player::PlayerB)),
            _ => None,
        }
    }

    /// Returns the owning player, if any.
    pub fn owner(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(player) => Some(player),
        }
    }
}

/// Current status of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, derive_more::Display)]
pub enum GameStatus {
    /// Game is ongoing.
    #[default]
    #[display("in progress")]
    InProgress,
    /// Game ended with a completed run.
    #[display("won by {_0}")]
    WonBy(Player),
    /// Board filled without a completed run.
    #[display("drawn")]
    Drawn,
}

impl GameStatus {
    /// Returns true once the game has reached a terminal status.
    pub fn is_over(self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }

    /// Returns the winner if there is one.
    pub fn winner(self) -> Option<Player> {
        match self {
            GameStatus::WonBy(player) => Some(player),
            _ => None,
        }
    }
}
