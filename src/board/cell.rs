//! Cells of the hex map.
//!
//! The map is a 9-row by 6-column offset hex grid. Rows are numbered top
//! to bottom, columns left to right; odd rows are shifted half a hex to
//! the right. One fixed cell at the grid center is the hub (Tri-Prime),
//! the highest-value system on the map.

use std::fmt;

/// Number of rows on the map.
pub const ROWS: u8 = 9;

/// Number of columns on the map.
pub const COLS: u8 = 6;

/// Total number of cells.
pub const CELL_COUNT: usize = ROWS as usize * COLS as usize;

/// One hex position on the map, identified by `row * COLS + col`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CellId(u8);

/// The hub cell (Tri-Prime) at the center of the grid.
pub const HUB: CellId = CellId(4 * COLS + 2);

/// Every cell on the map, in index order.
pub const ALL_CELLS: [CellId; CELL_COUNT] = {
    let mut cells = [CellId(0); CELL_COUNT];
    let mut i = 0;
    while i < CELL_COUNT {
        cells[i] = CellId(i as u8);
        i += 1;
    }
    cells
};

impl CellId {
    /// Creates a cell from coordinates, or `None` if out of bounds.
    pub fn new(row: i8, col: i8) -> Option<CellId> {
        if row < 0 || col < 0 || row >= ROWS as i8 || col >= COLS as i8 {
            return None;
        }
        Some(CellId(row as u8 * COLS + col as u8))
    }

    /// Creates a cell from a flat index, or `None` if out of range.
    pub fn from_index(index: usize) -> Option<CellId> {
        if index < CELL_COUNT {
            Some(CellId(index as u8))
        } else {
            None
        }
    }

    /// Returns the flat index, suitable for array lookups.
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    pub const fn row(self) -> u8 {
        self.0 / COLS
    }

    pub const fn col(self) -> u8 {
        self.0 % COLS
    }

    /// Returns true for the hub (Tri-Prime) cell.
    pub const fn is_hub(self) -> bool {
        self.0 == HUB.0
    }
}

impl fmt::Display for CellId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "hex{}_{}", self.row(), self.col())
    }
}
