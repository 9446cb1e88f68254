//! History consistency invariant: history, counter and board agree.

use super::Invariant;
use crate::engine::Engine;
use crate::types::Cell;

/// Invariant: every accepted move is on the board, and nothing else is.
///
/// History length equals the move counter equals the number of occupied
/// cells, and each history entry's cell holds that entry's player.
pub struct HistoryConsistentInvariant;

impl Invariant<Engine> for HistoryConsistentInvariant {
    fn holds(engine: &Engine) -> bool {
        let history = engine.history();
        let board = engine.board();

        history.len() == engine.move_count()
            && history.len() == board.occupied()
            && history
                .iter()
                .all(|mv| board.get(mv.coord) == Some(Cell::Occupied(mv.player)))
    }

    fn description() -> &'static str {
        "History length matches move count and occupied cells"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EngineConfig;
    use crate::position::Coord;
    use crate::types::Player;

    #[test]
    fn test_empty_game_holds() {
        let engine = Engine::with_config(EngineConfig::tic_tac_toe());
        assert!(HistoryConsistentInvariant::holds(&engine));
    }

    #[test]
    fn test_multiple_moves_hold() {
        let engine = Engine::replay(
            EngineConfig::tic_tac_toe(),
            [Coord::new(0, 0), Coord::new(1, 0), Coord::new(2, 2)],
        )
        .unwrap();
        assert!(HistoryConsistentInvariant::holds(&engine));
        assert_eq!(engine.history().len(), 3);
    }

    #[test]
    fn test_extra_mark_violates() {
        let mut engine = Engine::with_config(EngineConfig::tic_tac_toe());
        engine.play(Coord::new(1, 1)).unwrap();
        engine.board.put(Coord::new(0, 0), Cell::Occupied(Player::PlayerB));
        assert!(!HistoryConsistentInvariant::holds(&engine));
    }

    #[test]
    fn test_counter_drift_violates() {
        let mut engine = Engine::with_config(EngineConfig::tic_tac_toe());
        engine.play(Coord::new(1, 1)).unwrap();
        engine.move_count = 2;
        assert!(!HistoryConsistentInvariant::holds(&engine));
    }
}
