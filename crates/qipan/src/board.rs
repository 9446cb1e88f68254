//! Fixed-size game board.

use crate::action::MoveError;
use crate::position::Coord;
use crate::types::{Cell, Player};
use tracing::instrument;

/// Rectangular board of `rows` x `cols` cells.
///
/// Dimensions never change after construction. Cells are stored row-major.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Creates an empty board.
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            cells: vec![Cell::Empty; rows * cols],
        }
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Returns true if the coordinate lies on the board.
    pub fn contains(&self, coord: Coord) -> bool {
        coord.x < self.cols && coord.y < self.rows
    }

    /// Resolves caller-supplied coordinates to a cell on this board.
    pub fn locate(&self, x: i64, y: i64) -> Result<Coord, MoveError> {
        let coord = usize::try_from(x)
            .ok()
            .zip(usize::try_from(y).ok())
            .map(|(x, y)| Coord::new(x, y));
        match coord {
            Some(coord) if self.contains(coord) => Ok(coord),
            _ => Err(MoveError::OutOfBounds { x, y }),
        }
    }

    /// Reads the cell at caller-supplied coordinates.
    pub fn cell_at(&self, x: i64, y: i64) -> Result<Cell, MoveError> {
        let coord = self.locate(x, y)?;
        Ok(self.cells[self.index(coord)])
    }

    /// Reads a cell, or `None` off the board.
    pub fn get(&self, coord: Coord) -> Option<Cell> {
        self.contains(coord).then(|| self.cells[self.index(coord)])
    }

    /// Returns true if the cell exists and is empty.
    pub fn is_empty(&self, coord: Coord) -> bool {
        self.get(coord) == Some(Cell::Empty)
    }

    /// Marks a cell. Callers have already checked legality.
    pub(crate) fn set_cell(&mut self, coord: Coord, player: Player) {
        debug_assert!(self.contains(coord), "set_cell off the board: {coord}");
        let index = self.index(coord);
        self.cells[index] = Cell::Occupied(player);
    }

    /// Overwrites a cell unconditionally. Used when decoding and in tests.
    pub(crate) fn put(&mut self, coord: Coord, cell: Cell) {
        let index = self.index(coord);
        self.cells[index] = cell;
    }

    /// Returns true when no empty cell remains.
    #[instrument(skip(self), fields(rows = self.rows, cols = self.cols))]
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| *cell != Cell::Empty)
    }

    /// Number of cells held by `player`.
    pub fn count(&self, player: Player) -> usize {
        self.cells
            .iter()
            .filter(|cell| **cell == Cell::Occupied(player))
            .count()
    }

    /// Number of occupied cells.
    pub fn occupied(&self) -> usize {
        self.cells.iter().filter(|cell| **cell != Cell::Empty).count()
    }

    /// Iterates over rows, top to bottom.
    pub fn row_iter(&self) -> impl Iterator<Item = &[Cell]> {
        // `max(1)` keeps `chunks` happy on a zero-column board.
        self.cells.chunks(self.cols.max(1)).take(self.rows)
    }

    /// Formats the board for a terminal, with 1-based column and row labels.
    pub fn render(&self) -> String {
        let label_width = self.rows.to_string().len();
        let cell_width = self.cols.to_string().len();
        let mut out = String::new();

        out.push_str(&" ".repeat(label_width + 1));
        for col in 1..=self.cols {
            out.push_str(&format!(" {col:>cell_width$}"));
        }
        out.push('\n');

        for (row, cells) in self.row_iter().enumerate() {
            out.push_str(&format!("{:>label_width$} ", row + 1));
            for cell in cells {
                out.push_str(&format!(" {:>cell_width$}", cell.marker()));
            }
            out.push('\n');
        }
        out
    }

    fn index(&self, coord: Coord) -> usize {
        coord.y * self.cols + coord.x
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.render())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new(3, 4);
        assert_eq!(board.rows(), 3);
        assert_eq!(board.cols(), 4);
        assert_eq!(board.occupied(), 0);
        assert!(!board.is_full());
    }

    #[test]
    fn test_cell_at_out_of_bounds() {
        let board = Board::new(3, 3);
        assert_eq!(
            board.cell_at(3, 0),
            Err(MoveError::OutOfBounds { x: 3, y: 0 })
        );
        assert_eq!(
            board.cell_at(0, -1),
            Err(MoveError::OutOfBounds { x: 0, y: -1 })
        );
        assert_eq!(board.cell_at(2, 2), Ok(Cell::Empty));
    }

    #[test]
    fn test_x_is_column_y_is_row() {
        let mut board = Board::new(2, 3);
        board.set_cell(Coord::new(2, 1), Player::PlayerA);
        assert_eq!(board.cell_at(2, 1), Ok(Cell::Occupied(Player::PlayerA)));
        assert!(board.cell_at(1, 2).is_err());
    }

    #[test]
    fn test_full_board() {
        let mut board = Board::new(2, 2);
        for y in 0..2 {
            for x in 0..2 {
                board.set_cell(Coord::new(x, y), Player::PlayerB);
            }
        }
        assert!(board.is_full());
        assert_eq!(board.count(Player::PlayerB), 4);
        assert_eq!(board.count(Player::PlayerA), 0);
    }

    #[test]
    fn test_render_labels() {
        let mut board = Board::new(2, 3);
        board.set_cell(Coord::new(0, 0), Player::PlayerA);
        board.set_cell(Coord::new(2, 1), Player::PlayerB);
        assert_eq!(board.render(), "   1 2 3\n1  X . .\n2  . . O\n");
    }
}
