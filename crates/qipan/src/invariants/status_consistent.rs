//! Status consistency invariant: the recorded status matches the board.

use super::Invariant;
use crate::engine::Engine;
use crate::rules::check_winner_at;
use crate::types::GameStatus;

/// Invariant: the status is what the rules say about the last move.
///
/// `WonBy(p)` needs a winning run for `p` through the last move, `Drawn`
/// needs a full board without one, and `InProgress` needs neither.
pub struct StatusConsistentInvariant;

impl Invariant<Engine> for StatusConsistentInvariant {
    fn holds(engine: &Engine) -> bool {
        let board = engine.board();
        let win_length = *engine.config().win_length();
        let winner = engine
            .last_move()
            .and_then(|last| check_winner_at(board, last.coord, win_length));

        match engine.status() {
            GameStatus::InProgress => winner.is_none() && !board.is_full(),
            GameStatus::WonBy(player) => {
                winner == Some(player) && engine.last_move().map(|m| m.player) == Some(player)
            }
            GameStatus::Drawn => winner.is_none() && board.is_full(),
        }
    }

    fn description() -> &'static str {
        "Game status matches the board after the last move"
    }
}
