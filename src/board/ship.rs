//! Ships and their per-round action flags.
//!
//! A ship belongs to exactly one player and sits on exactly one cell. It
//! carries one flag per action type recording whether it has already been
//! consumed by that action this round; all three reset at the round
//! boundary.

use std::fmt;

use super::cell::CellId;
use super::order::Action;
use super::player::PlayerId;

/// Stable identifier of a ship within one game. Ids are never reused;
/// destroyed ships simply cease to exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ShipId(pub u32);

impl fmt::Display for ShipId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ship{}", self.0)
    }
}

/// A ship on the board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ship {
    pub owner: PlayerId,
    pub cell: CellId,
    acted: [bool; 3],
}

impl Ship {
    pub fn new(owner: PlayerId, cell: CellId) -> Self {
        Ship {
            owner,
            cell,
            acted: [false; 3],
        }
    }

    /// Whether this ship has already been consumed by the given action
    /// this round.
    pub fn has_acted(&self, action: Action) -> bool {
        self.acted[action.index()]
    }

    pub(crate) fn mark_acted(&mut self, action: Action) {
        self.acted[action.index()] = true;
    }

    pub(crate) fn reset_flags(&mut self) {
        self.acted = [false; 3];
    }

    /// Raw flag array, in `Action` index order. Used by the snapshot codec.
    pub fn flags(&self) -> [bool; 3] {
        self.acted
    }

    pub(crate) fn restore_flags(&mut self, flags: [bool; 3]) {
        self.acted = flags;
    }
}
