//! Move preconditions.
//!
//! Each legality rule is a named check. `LegalMove` composes them in the
//! order the engine reports failures.

use crate::action::MoveError;
use crate::board::Board;
use crate::engine::Engine;
use crate::invariants::{EngineInvariants, InvariantSet};
use crate::position::Coord;
use tracing::{instrument, warn};

/// Precondition: the game has not been won or drawn.
pub struct GameInProgress;

impl GameInProgress {
    /// Fails with `GameAlreadyOver` on a terminal status.
    #[instrument(skip(engine))]
    pub fn check(engine: &Engine) -> Result<(), MoveError> {
        if engine.status().is_over() {
            Err(MoveError::GameAlreadyOver)
        } else {
            Ok(())
        }
    }
}

/// Precondition: the coordinate lies on the board.
pub struct WithinBounds;

impl WithinBounds {
    /// Fails with `OutOfBounds` for a coordinate off the board.
    #[instrument(skip(board))]
    pub fn check(board: &Board, coord: Coord) -> Result<(), MoveError> {
        if board.contains(coord) {
            Ok(())
        } else {
            Err(MoveError::OutOfBounds {
                x: i64::try_from(coord.x).unwrap_or(i64::MAX),
                y: i64::try_from(coord.y).unwrap_or(i64::MAX),
            })
        }
    }
}

/// Precondition: the target cell is empty.
pub struct CellIsEmpty;

impl CellIsEmpty {
    /// Fails with `CellOccupied` when the cell already holds a mark.
    #[instrument(skip(board))]
    pub fn check(board: &Board, coord: Coord) -> Result<(), MoveError> {
        if board.is_empty(coord) {
            Ok(())
        } else {
            Err(MoveError::CellOccupied(coord))
        }
    }
}

/// Composite precondition: in progress, in bounds, empty. In that order.
pub struct LegalMove;

impl LegalMove {
    /// Validates all preconditions and hands back the coordinate.
    #[instrument(skip(engine))]
    pub fn check(engine: &Engine, coord: Coord) -> Result<Coord, MoveError> {
        GameInProgress::check(engine)?;
        WithinBounds::check(engine.board(), coord)?;
        CellIsEmpty::check(engine.board(), coord)?;
        Ok(coord)
    }
}

/// Asserts that all engine invariants hold (panics on violation in debug builds).
pub fn assert_invariants(engine: &Engine) {
    if cfg!(debug_assertions) {
        if let Err(violations) = EngineInvariants::check_all(engine) {
            for violation in &violations {
                warn!(description = %violation.description, "Invariant violated");
            }
            panic!("engine invariants violated: {violations:?}");
        }
    }
}
