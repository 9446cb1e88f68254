//! Win detection.

use crate::board::Board;
use crate::position::{Coord, Direction};
use crate::types::{Cell, Player};
use tracing::instrument;

/// Length of the run through `origin` along `direction`, counting both senses.
///
/// Returns 0 for an empty or off-board origin.
pub fn run_length(board: &Board, origin: Coord, direction: Direction) -> usize {
    let Some(Cell::Occupied(player)) = board.get(origin) else {
        return 0;
    };
    1 + reach(board, origin, direction, player) + reach(board, origin, direction.reversed(), player)
}

/// Contiguous cells held by `player` beyond `origin`, walking one way.
fn reach(board: &Board, origin: Coord, direction: Direction, player: Player) -> usize {
    (1..)
        .map_while(|steps| origin.step(direction, steps))
        .take_while(|coord| board.get(*coord) == Some(Cell::Occupied(player)))
        .count()
}

/// Returns the owner of `last` if a run of at least `win_length` passes through it.
///
/// Runs longer than `win_length` also win.
#[instrument(skip(board))]
pub fn check_winner_at(board: &Board, last: Coord, win_length: usize) -> Option<Player> {
    let player = board.get(last)?.owner()?;
    Direction::LINES
        .into_iter()
        .any(|direction| run_length(board, last, direction) >= win_length)
        .then_some(player)
}
