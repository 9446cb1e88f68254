//! Game rules.
//!
//! Pure functions over a board. Win detection only looks at lines through
//! the cell that was just played, so evaluation after a move costs O(K).

pub mod win;

pub use win::{check_winner_at, run_length};

use crate::board::Board;
use crate::position::Coord;
use crate::types::GameStatus;
use tracing::instrument;

/// Status of the game right after a mark was placed at `last`.
///
/// A win takes precedence over a full board.
#[instrument(skip(board))]
pub fn evaluate(board: &Board, last: Coord, win_length: usize) -> GameStatus {
    if let Some(winner) = check_winner_at(board, last, win_length) {
        GameStatus::WonBy(winner)
    } else if board.is_full() {
        GameStatus::Drawn
    } else {
        GameStatus::InProgress
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Player;

    fn fill(board: &mut Board, layout: &[&str]) {
        for (y, row) in layout.iter().enumerate() {
            for (x, marker) in row.chars().enumerate() {
                match marker {
                    'X' => board.set_cell(Coord::new(x, y), Player::PlayerA),
                    'O' => board.set_cell(Coord::new(x, y), Player::PlayerB),
                    _ => {}
                }
            }
        }
    }

    #[test]
    fn test_open_board_in_progress() {
        let mut board = Board::new(3, 3);
        fill(&mut board, &["X..", ".O.", "..."]);
        assert_eq!(evaluate(&board, Coord::new(1, 1), 3), GameStatus::InProgress);
    }

    #[test]
    fn test_full_board_without_run_is_drawn() {
        let mut board = Board::new(3, 3);
        fill(&mut board, &["XOX", "XOO", "OXX"]);
        assert_eq!(evaluate(&board, Coord::new(2, 2), 3), GameStatus::Drawn);
    }

    #[test]
    fn test_win_beats_full_board() {
        let mut board = Board::new(3, 3);
        fill(&mut board, &["XXX", "OOX", "XOO"]);
        assert!(board.is_full());
        assert_eq!(
            evaluate(&board, Coord::new(1, 0), 3),
            GameStatus::WonBy(Player::PlayerA)
        );
    }
}
