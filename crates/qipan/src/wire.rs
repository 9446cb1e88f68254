//! JSON encodings for the text boundary.
//!
//! Three documents share one dialect: [`BoardState`], [`GameInfo`] and
//! [`MoveReport`]. Field names and enum spellings are part of the contract.

use crate::action::{Move, MoveError, MoveOutcome};
use crate::board::Board;
use crate::config::MAX_DIMENSION;
use crate::engine::Engine;
use crate::position::Coord;
use crate::types::{Cell, GameStatus, Player};
use serde::{Deserialize, Serialize};
use tracing::{error, instrument};

/// Grid snapshot: one string per row, one marker per column.
///
/// Markers are `.` (empty), `X` (Player A) and `O` (Player B).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardState {
    /// Number of rows.
    pub rows: usize,
    /// Number of columns.
    pub cols: usize,
    /// Rows top to bottom.
    pub cells: Vec<String>,
}

impl BoardState {
    /// Captures a board.
    pub fn from_board(board: &Board) -> Self {
        Self {
            rows: board.rows(),
            cols: board.cols(),
            cells: board
                .row_iter()
                .map(|row| row.iter().map(|cell| cell.marker()).collect())
                .collect(),
        }
    }

    /// Rebuilds the exact board this snapshot describes.
    #[instrument(skip(self), fields(rows = self.rows, cols = self.cols))]
    pub fn to_board(&self) -> Result<Board, DecodeError> {
        if self.rows == 0 || self.cols == 0 || self.rows > MAX_DIMENSION || self.cols > MAX_DIMENSION
        {
            return Err(DecodeError::InvalidDimensions {
                rows: self.rows,
                cols: self.cols,
            });
        }
        if self.cells.len() != self.rows {
            return Err(DecodeError::RowCount {
                expected: self.rows,
                found: self.cells.len(),
            });
        }

        let mut board = Board::new(self.rows, self.cols);
        for (y, row) in self.cells.iter().enumerate() {
            let found = row.chars().count();
            if found != self.cols {
                return Err(DecodeError::RowLength {
                    row: y,
                    expected: self.cols,
                    found,
                });
            }
            for (x, marker) in row.chars().enumerate() {
                let cell = Cell::from_marker(marker)
                    .ok_or(DecodeError::UnknownMarker { row: y, col: x, marker })?;
                board.put(Coord::new(x, y), cell);
            }
        }
        Ok(board)
    }

    /// Renders the snapshot as JSON.
    pub fn encode(&self) -> String {
        to_json(self)
    }

    /// Parses JSON produced by [`BoardState::encode`] back into a board.
    pub fn decode(text: &str) -> Result<Board, DecodeError> {
        let state: BoardState = serde_json::from_str(text)?;
        state.to_board()
    }
}

/// Coarse game status on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusKind {
    /// Moves are still accepted.
    InProgress,
    /// Someone completed a run; see `winner`.
    Won,
    /// Full board, no run.
    Drawn,
}

impl From<GameStatus> for StatusKind {
    fn from(status: GameStatus) -> Self {
        match status {
            GameStatus::InProgress => StatusKind::InProgress,
            GameStatus::WonBy(_) => StatusKind::Won,
            GameStatus::Drawn => StatusKind::Drawn,
        }
    }
}

/// Cells held by each player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stones {
    /// Cells held by Player A.
    pub player_a: usize,
    /// Cells held by Player B.
    pub player_b: usize,
}

/// Game metadata snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameInfo {
    /// Player to move (the final mover once the game is over).
    pub turn: Player,
    /// Coarse status.
    pub status: StatusKind,
    /// Winner when `status` is `won`.
    pub winner: Option<Player>,
    /// Accepted moves so far.
    pub move_count: usize,
    /// Board rows.
    pub rows: usize,
    /// Board columns.
    pub cols: usize,
    /// Run length needed to win.
    pub win_length: usize,
    /// Cells held by each player.
    pub stones: Stones,
    /// Most recent accepted move.
    pub last_move: Option<Move>,
}

impl GameInfo {
    /// Captures an engine's metadata.
    pub fn from_engine(engine: &Engine) -> Self {
        let board = engine.board();
        Self {
            turn: engine.turn(),
            status: engine.status().into(),
            winner: engine.status().winner(),
            move_count: engine.move_count(),
            rows: board.rows(),
            cols: board.cols(),
            win_length: *engine.config().win_length(),
            stones: Stones {
                player_a: board.count(Player::PlayerA),
                player_b: board.count(Player::PlayerB),
            },
            last_move: engine.last_move(),
        }
    }

    /// Renders the snapshot as JSON.
    pub fn encode(&self) -> String {
        to_json(self)
    }
}

/// Result of `make_move` on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "result", rename_all = "snake_case")]
pub enum MoveReport {
    /// The move was applied.
    Accepted {
        /// Player who moved.
        player: Player,
        /// Column played.
        x: usize,
        /// Row played.
        y: usize,
        /// Status after the move.
        status: StatusKind,
        /// Winner if this move won.
        winner: Option<Player>,
        /// Player holding the turn after the move.
        turn: Player,
        /// Accepted moves so far.
        move_count: usize,
    },
    /// The move was refused; the game is unchanged.
    Rejected {
        /// `out_of_bounds`, `cell_occupied` or `game_already_over`.
        error: String,
        /// Human-readable reason.
        message: String,
    },
}

impl MoveReport {
    /// Renders the report as JSON.
    pub fn encode(&self) -> String {
        to_json(self)
    }
}

impl From<Result<MoveOutcome, MoveError>> for MoveReport {
    fn from(result: Result<MoveOutcome, MoveError>) -> Self {
        match result {
            Ok(outcome) => MoveReport::Accepted {
                player: outcome.applied.player,
                x: outcome.applied.coord.x,
                y: outcome.applied.coord.y,
                status: outcome.status.into(),
                winner: outcome.status.winner(),
                turn: outcome.turn,
                move_count: outcome.move_count,
            },
            Err(err) => MoveReport::Rejected {
                error: err.code().to_string(),
                message: err.to_string(),
            },
        }
    }
}

/// Failure to rebuild a board from its text encoding.
#[derive(Debug, derive_more::Display, derive_more::From)]
pub enum DecodeError {
    /// Input is not valid JSON for a board snapshot.
    #[display("malformed board JSON: {_0}")]
    Json(serde_json::Error),

    /// Declared dimensions are zero or too large.
    #[display("invalid board dimensions {rows}x{cols}")]
    #[from(ignore)]
    InvalidDimensions {
        /// Declared rows.
        rows: usize,
        /// Declared columns.
        cols: usize,
    },

    /// Number of row strings differs from `rows`.
    #[display("expected {expected} rows, found {found}")]
    #[from(ignore)]
    RowCount {
        /// Declared rows.
        expected: usize,
        /// Rows present.
        found: usize,
    },

    /// A row string has the wrong length.
    #[display("row {row} has {found} cells, expected {expected}")]
    #[from(ignore)]
    RowLength {
        /// Offending row.
        row: usize,
        /// Declared columns.
        expected: usize,
        /// Cells present.
        found: usize,
    },

    /// A character is not a known cell marker.
    #[display("unknown marker {marker:?} at row {row}, column {col}")]
    #[from(ignore)]
    UnknownMarker {
        /// Offending row.
        row: usize,
        /// Offending column.
        col: usize,
        /// The character found.
        marker: char,
    },
}

impl std::error::Error for DecodeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DecodeError::Json(err) => Some(err),
            _ => None,
        }
    }
}

/// Serializes a wire document.
///
/// These documents hold only strings, integers and unit enums, which
/// `serde_json` always accepts.
fn to_json<T: Serialize>(value: &T) -> String {
    serde_json::to_string(value).unwrap_or_else(|err| {
        error!(%err, "Failed to serialize wire document");
        String::from("{}")
    })
}
