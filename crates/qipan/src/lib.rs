//! Qipan - a K-in-a-row board game engine
//!
//! Two players take turns marking empty cells on a fixed rectangular board.
//! The first to complete a run of `win_length` marks horizontally,
//! vertically or diagonally wins; a full board without a run is a draw.
//!
//! # Architecture
//!
//! - **Board**: fixed grid of cells ([`Board`])
//! - **Rules**: run detection through the last move, draw detection ([`rules`])
//! - **Contracts**: ordered legality checks and debug-build invariants
//! - **Engine**: the typed state machine ([`Engine`])
//! - **Boundary**: four string operations over JSON ([`QipanGame`])
//!
//! # Text encodings
//!
//! All boundary strings are JSON objects.
//!
//! `get_board_state`:
//!
//! ```json
//! {"rows":3,"cols":3,"cells":[".X.","...","..O"]}
//! ```
//!
//! One string per row, top first; `.` empty, `X` Player A, `O` Player B.
//!
//! `get_game_info`:
//!
//! ```json
//! {"turn":"player_a","status":"in_progress","winner":null,"move_count":0,
//!  "rows":3,"cols":3,"win_length":3,"stones":{"player_a":0,"player_b":0},
//!  "last_move":null}
//! ```
//!
//! `status` is `in_progress`, `won` or `drawn`.
//!
//! `make_move`:
//!
//! ```json
//! {"result":"accepted","player":"player_a","x":0,"y":0,"status":"in_progress",
//!  "winner":null,"turn":"player_b","move_count":1}
//! {"result":"rejected","error":"cell_occupied","message":"cell (0, 0) is already occupied"}
//! ```
//!
//! `error` is `out_of_bounds`, `cell_occupied` or `game_already_over`.
//!
//! # Example
//!
//! ```
//! use qipan::{EngineConfig, QipanGame};
//!
//! let mut game = QipanGame::with_config(EngineConfig::tic_tac_toe());
//! let report = game.make_move(1, 1);
//! assert!(report.contains(r#""result":"accepted""#));
//! let report = game.make_move(1, 1);
//! assert!(report.contains(r#""error":"cell_occupied""#));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod board;
mod boundary;
mod config;
mod contracts;
mod engine;
pub mod invariants;
mod position;
pub mod rules;
mod types;
mod wire;

// Crate-level exports - Domain types
pub use action::{Move, MoveError, MoveOutcome};
pub use board::Board;
pub use position::{Coord, Direction};
pub use types::{Cell, GameStatus, Player};

// Crate-level exports - Configuration
pub use config::{ConfigError, EngineConfig, MAX_DIMENSION};

// Crate-level exports - Engine
pub use contracts::{CellIsEmpty, GameInProgress, LegalMove, WithinBounds};
pub use engine::Engine;

// Crate-level exports - Text boundary
pub use boundary::QipanGame;
pub use wire::{BoardState, DecodeError, GameInfo, MoveReport, StatusKind, Stones};
