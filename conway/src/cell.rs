// cell.rs - Cell coordinates and the neighbor relation

use serde::{Deserialize, Serialize};

/// One position on the unbounded grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Cell {
    pub x: i64,
    pub y: i64,
}

impl Cell {
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// The 8 adjacent cells, row by row from the top-left. Never contains `self`.
    pub fn neighbors(self) -> [Cell; 8] {
        let Cell { x, y } = self;
        [
            Cell::new(x - 1, y - 1), Cell::new(x, y - 1), Cell::new(x + 1, y - 1),
            Cell::new(x - 1, y),                          Cell::new(x + 1, y),
            Cell::new(x - 1, y + 1), Cell::new(x, y + 1), Cell::new(x + 1, y + 1),
        ]
    }

    pub const fn offset(self, dx: i64, dy: i64) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }
}

/// Free-function form of [`Cell::neighbors`].
pub fn neighbors(cell: Cell) -> [Cell; 8] {
    cell.neighbors()
}

impl From<(i64, i64)> for Cell {
    fn from((x, y): (i64, i64)) -> Self {
        Self::new(x, y)
    }
}

impl From<Cell> for (i64, i64) {
    fn from(cell: Cell) -> Self {
        (cell.x, cell.y)
    }
}
