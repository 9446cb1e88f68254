//! Board coordinates and line directions.

use serde::{Deserialize, Serialize};

/// A cell coordinate: `x` is the column, `y` is the row (row 0 at the top).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_new::new,
)]
pub struct Coord {
    /// Column index.
    pub x: usize,
    /// Row index.
    pub y: usize,
}

impl Coord {
    /// Steps `steps` cells along `direction`, or `None` below zero.
    ///
    /// Upper bounds are the board's business.
    pub fn step(self, direction: Direction, steps: usize) -> Option<Coord> {
        let steps = isize::try_from(steps).ok()?;
        let x = self.x.checked_add_signed(direction.dx.checked_mul(steps)?)?;
        let y = self.y.checked_add_signed(direction.dy.checked_mul(steps)?)?;
        Some(Coord { x, y })
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// A unit step along one of the board's line directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Direction {
    /// Column delta.
    pub dx: isize,
    /// Row delta.
    pub dy: isize,
}

impl Direction {
    /// Left to right.
    pub const HORIZONTAL: Direction = Direction { dx: 1, dy: 0 };
    /// Top to bottom.
    pub const VERTICAL: Direction = Direction { dx: 0, dy: 1 };
    /// Top-left to bottom-right.
    pub const DIAGONAL: Direction = Direction { dx: 1, dy: 1 };
    /// Bottom-left to top-right.
    pub const ANTI_DIAGONAL: Direction = Direction { dx: 1, dy: -1 };

    /// The four line directions. Each covers both senses of its line.
    pub const LINES: [Direction; 4] = [
        Direction::HORIZONTAL,
        Direction::VERTICAL,
        Direction::DIAGONAL,
        Direction::ANTI_DIAGONAL,
    ];

    /// The same line walked the other way.
    pub fn reversed(self) -> Direction {
        Direction {
            dx: -self.dx,
            dy: -self.dy,
        }
    }
}
