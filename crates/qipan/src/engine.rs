//! The game engine: one board, one status, one turn, one move counter.

use crate::action::{Move, MoveError, MoveOutcome};
use crate::board::Board;
use crate::config::EngineConfig;
use crate::contracts::{GameInProgress, LegalMove, assert_invariants};
use crate::position::Coord;
use crate::rules;
use crate::types::{GameStatus, Player};
use tracing::{debug, info, instrument};

/// K-in-a-row game engine.
///
/// Single-owner state machine. Every operation runs to completion; hosts
/// sharing one engine across callers must serialize access themselves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Engine {
    pub(crate) config: EngineConfig,
    pub(crate) board: Board,
    pub(crate) turn: Player,
    pub(crate) status: GameStatus,
    pub(crate) move_count: usize,
    pub(crate) history: Vec<Move>,
}

impl Engine {
    /// Creates an engine with the default configuration.
    #[instrument]
    pub fn new() -> Self {
        Self::with_config(EngineConfig::default())
    }

    /// Creates an engine for the given configuration.
    #[instrument]
    pub fn with_config(config: EngineConfig) -> Self {
        Self {
            config,
            board: Board::new(*config.rows(), *config.cols()),
            turn: Player::PlayerA,
            status: GameStatus::InProgress,
            move_count: 0,
            history: Vec::with_capacity(config.area()),
        }
    }

    /// Rebuilds a game by playing `moves` in order from the initial state.
    ///
    /// Stops at the first rejected move.
    #[instrument(skip(moves))]
    pub fn replay(
        config: EngineConfig,
        moves: impl IntoIterator<Item = Coord>,
    ) -> Result<Self, MoveError> {
        let mut engine = Self::with_config(config);
        for coord in moves {
            engine.play(coord)?;
        }
        Ok(engine)
    }

    /// Plays the current turn's mark at caller-supplied coordinates.
    ///
    /// Checks run in order: game still in progress, coordinates on the board,
    /// cell empty. On error nothing changes.
    #[instrument(skip(self), fields(turn = %self.turn, move_count = self.move_count))]
    pub fn make_move(&mut self, x: i64, y: i64) -> Result<MoveOutcome, MoveError> {
        GameInProgress::check(self)?;
        let coord = self.board.locate(x, y)?;
        self.play(coord)
    }

    /// Plays the current turn's mark at `coord`.
    #[instrument(skip(self), fields(turn = %self.turn))]
    pub fn play(&mut self, coord: Coord) -> Result<MoveOutcome, MoveError> {
        let coord = LegalMove::check(self, coord)?;

        let player = self.turn;
        self.board.set_cell(coord, player);
        self.move_count += 1;
        self.history.push(Move::new(player, coord));

        self.status = rules::evaluate(&self.board, coord, *self.config.win_length());
        match self.status {
            GameStatus::InProgress => self.turn = player.opponent(),
            GameStatus::WonBy(winner) => {
                info!(%winner, move_count = self.move_count, "Game won")
            }
            GameStatus::Drawn => info!(move_count = self.move_count, "Game drawn"),
        }
        debug!(%coord, %player, status = %self.status, "Move accepted");

        assert_invariants(self);

        Ok(MoveOutcome {
            applied: Move::new(player, coord),
            status: self.status,
            turn: self.turn,
            move_count: self.move_count,
        })
    }

    /// Discards all progress. The configuration is kept.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        *self = Self::with_config(self.config);
        info!("Game reset");
    }

    /// Returns the configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Player to move, or the player who made the final move once the game is over.
    pub fn turn(&self) -> Player {
        self.turn
    }

    /// Returns the game status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Accepted moves so far.
    pub fn move_count(&self) -> usize {
        self.move_count
    }

    /// Accepted moves in order.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Most recent accepted move.
    pub fn last_move(&self) -> Option<Move> {
        self.history.last().copied()
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Cell;

    fn tic_tac_toe() -> Engine {
        Engine::with_config(EngineConfig::tic_tac_toe())
    }

    #[test]
    fn test_initial_state() {
        let engine = Engine::new();
        assert_eq!(engine.turn(), Player::PlayerA);
        assert_eq!(engine.status(), GameStatus::InProgress);
        assert_eq!(engine.move_count(), 0);
        assert!(engine.history().is_empty());
        assert_eq!(engine.board().rows(), 15);
    }

    #[test]
    fn test_accepted_move_flips_turn() {
        let mut engine = tic_tac_toe();
        let outcome = engine.make_move(1, 1).unwrap();
        assert_eq!(outcome.applied, Move::new(Player::PlayerA, Coord::new(1, 1)));
        assert_eq!(outcome.turn, Player::PlayerB);
        assert_eq!(outcome.move_count, 1);
        assert_eq!(
            engine.board().cell_at(1, 1),
            Ok(Cell::Occupied(Player::PlayerA))
        );
    }

    #[test]
    fn test_game_over_checked_before_bounds() {
        let mut engine = Engine::replay(
            EngineConfig::tic_tac_toe(),
            [(0, 0), (0, 1), (1, 0), (1, 1), (2, 0)].map(|(x, y)| Coord::new(x, y)),
        )
        .unwrap();
        assert_eq!(engine.status(), GameStatus::WonBy(Player::PlayerA));
        assert_eq!(engine.make_move(-5, 99), Err(MoveError::GameAlreadyOver));
    }

    #[test]
    fn test_bounds_checked_before_occupancy() {
        let mut engine = tic_tac_toe();
        engine.make_move(0, 0).unwrap();
        assert_eq!(
            engine.make_move(3, 0),
            Err(MoveError::OutOfBounds { x: 3, y: 0 })
        );
        assert_eq!(
            engine.make_move(0, 0),
            Err(MoveError::CellOccupied(Coord::new(0, 0)))
        );
    }

    #[test]
    fn test_winner_keeps_turn() {
        let engine = Engine::replay(
            EngineConfig::tic_tac_toe(),
            [(0, 0), (2, 2), (0, 1), (2, 1), (0, 2)].map(|(x, y)| Coord::new(x, y)),
        )
        .unwrap();
        assert_eq!(engine.status(), GameStatus::WonBy(Player::PlayerA));
        assert_eq!(engine.turn(), Player::PlayerA);
    }

    #[test]
    fn test_replay_stops_at_rejection() {
        let result = Engine::replay(
            EngineConfig::tic_tac_toe(),
            [Coord::new(0, 0), Coord::new(0, 0)],
        );
        assert_eq!(result, Err(MoveError::CellOccupied(Coord::new(0, 0))));
    }

    #[test]
    fn test_reset_keeps_config() {
        let config = EngineConfig::new(4, 6, 3).unwrap();
        let mut engine = Engine::with_config(config);
        engine.make_move(5, 3).unwrap();
        engine.reset();
        assert_eq!(engine, Engine::with_config(config));
    }
}
