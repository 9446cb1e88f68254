//! Alternating turn invariant: Player A, Player B, Player A, ...

use super::Invariant;
use crate::engine::Engine;
use crate::types::Player;

/// Invariant: players alternate, starting with Player A.
///
/// While the game is in progress the turn belongs to whoever did not make
/// the last move. Once it is over the turn stays with the final mover.
pub struct AlternatingTurnInvariant;

impl Invariant<Engine> for AlternatingTurnInvariant {
    fn holds(engine: &Engine) -> bool {
        let history = engine.history();

        let alternates = history.iter().enumerate().all(|(index, mv)| {
            let expected = if index % 2 == 0 {
                Player::PlayerA
            } else {
                Player::PlayerB
            };
            mv.player == expected
        });
        if !alternates {
            return false;
        }

        match (engine.status().is_over(), engine.last_move()) {
            (false, None) => engine.turn() == Player::PlayerA,
            (false, Some(last)) => engine.turn() == last.player.opponent(),
            (true, Some(last)) => engine.turn() == last.player,
            (true, None) => false,
        }
    }

    fn description() -> &'static str {
        "Players alternate turns starting with Player A"
    }
}
