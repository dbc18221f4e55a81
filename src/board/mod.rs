//! Board representation and game-state types.
//!
//! Contains the core data structures for the hex map, sectors, players,
//! ships, command orderings, and the overall game state.

pub mod adjacency;
pub mod cell;
pub mod order;
pub mod player;
pub mod sector;
pub mod ship;
pub mod state;

pub use adjacency::{is_adjacent, neighbors};
pub use cell::{CellId, ALL_CELLS, CELL_COUNT, COLS, HUB, ROWS};
pub use order::{Action, CommandOrdering, ALL_ACTIONS};
pub use player::{PlayerId, ALL_PLAYERS, PLAYER_COUNT};
pub use sector::{
    cells_in, sector_of, system_level, SectorId, ALL_SECTORS, CENTER_SECTOR, SECTOR_COUNT,
};
pub use ship::{Ship, ShipId};
pub use state::{GameState, FINAL_ROUND};
