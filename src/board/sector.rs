//! Sectors: scoring groupings of cells.
//!
//! The map divides into a 3x3 grid of sectors, each covering a 3-row by
//! 2-column block of cells. Every peripheral sector carries one level-2
//! system and two level-1 systems at fixed positions; the center sector
//! carries the hub (Tri-Prime), a level-3 system. All remaining cells are
//! empty space: occupiable, but worth nothing.

use std::fmt;

use super::cell::{CellId, ALL_CELLS, COLS, HUB};

/// Number of sectors on the map.
pub const SECTOR_COUNT: usize = 9;

/// A scoring grouping of six cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SectorId(u8);

/// The center sector, home of the hub.
pub const CENTER_SECTOR: SectorId = SectorId(4);

/// Every sector, in row-major order.
pub const ALL_SECTORS: [SectorId; SECTOR_COUNT] = {
    let mut sectors = [SectorId(0); SECTOR_COUNT];
    let mut i = 0;
    while i < SECTOR_COUNT {
        sectors[i] = SectorId(i as u8);
        i += 1;
    }
    sectors
};

/// Per-sector system placement as local cell indices `(level2, level1, level1)`.
/// A local index is `(row % 3) * 2 + (col % 2)`, in `0..6`. The center
/// entry is unused; the hub is placed explicitly.
const SECTOR_SYSTEMS: [(usize, usize, usize); SECTOR_COUNT] = [
    (0, 3, 5),
    (3, 0, 4),
    (1, 2, 4),
    (4, 1, 5),
    (0, 0, 0), // center: hub only
    (2, 1, 5),
    (5, 0, 2),
    (2, 3, 4),
    (4, 0, 3),
];

const SECTOR_NAMES: [&str; SECTOR_COUNT] = [
    "northwest", "north", "northeast", "west", "core", "east", "southwest", "south", "southeast",
];

impl SectorId {
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    pub const fn name(self) -> &'static str {
        SECTOR_NAMES[self.0 as usize]
    }
}

impl fmt::Display for SectorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returns the sector a cell belongs to.
pub fn sector_of(cell: CellId) -> SectorId {
    let sr = cell.row() / 3;
    let sc = cell.col() / 2;
    SectorId(sr * 3 + sc)
}

/// Returns the six cells of a sector, in local index order.
pub fn cells_in(sector: SectorId) -> [CellId; 6] {
    let base_row = (sector.0 / 3) as usize * 3;
    let base_col = (sector.0 % 3) as usize * 2;
    let mut cells = [HUB; 6];
    for (local, slot) in cells.iter_mut().enumerate() {
        let row = base_row + local / 2;
        let col = base_col + local % 2;
        *slot = ALL_CELLS[row * COLS as usize + col];
    }
    cells
}

fn local_index(cell: CellId) -> usize {
    ((cell.row() % 3) * 2 + (cell.col() % 2)) as usize
}

/// Returns the system level of a cell: 0 for empty space, 1 or 2 for
/// scoring systems, 3 for the hub.
pub fn system_level(cell: CellId) -> u8 {
    if cell == HUB {
        return 3;
    }
    let sector = sector_of(cell);
    if sector == CENTER_SECTOR {
        return 0;
    }
    let (lvl2, lvl1a, lvl1b) = SECTOR_SYSTEMS[sector.index()];
    let local = local_index(cell);
    if local == lvl2 {
        2
    } else if local == lvl1a || local == lvl1b {
        1
    } else {
        0
    }
}
