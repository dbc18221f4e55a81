//! Action types and command orderings.
//!
//! Each round every player secretly picks a permutation of the three
//! action types. The position of an action in a player's own ordering
//! determines its efficiency: first-chosen runs at 3, second at 2, third
//! at 1.

use std::fmt;

use super::player::PLAYER_COUNT;

/// One of the three action types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Expand,
    Explore,
    Exterminate,
}

/// Every action type, in phase resolution order.
pub const ALL_ACTIONS: [Action; 3] = [Action::Expand, Action::Explore, Action::Exterminate];

impl Action {
    pub const fn index(self) -> usize {
        match self {
            Action::Expand => 0,
            Action::Explore => 1,
            Action::Exterminate => 2,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Action::Expand => "Expand",
            Action::Explore => "Explore",
            Action::Exterminate => "Exterminate",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A player's secret command ordering for one round: a repetition-free
/// permutation of the three action types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandOrdering([Action; 3]);

impl CommandOrdering {
    /// Validates and wraps a permutation. Returns `None` if any action
    /// appears more than once.
    pub fn new(actions: [Action; 3]) -> Option<CommandOrdering> {
        let mut seen = [false; 3];
        for action in actions {
            if seen[action.index()] {
                return None;
            }
            seen[action.index()] = true;
        }
        Some(CommandOrdering(actions))
    }

    /// All six legal orderings.
    pub fn permutations() -> [CommandOrdering; 6] {
        use Action::{Expand, Explore, Exterminate};
        [
            CommandOrdering([Expand, Explore, Exterminate]),
            CommandOrdering([Expand, Exterminate, Explore]),
            CommandOrdering([Explore, Expand, Exterminate]),
            CommandOrdering([Explore, Exterminate, Expand]),
            CommandOrdering([Exterminate, Expand, Explore]),
            CommandOrdering([Exterminate, Explore, Expand]),
        ]
    }

    pub fn actions(&self) -> [Action; 3] {
        self.0
    }

    /// Position of the action in this ordering: 0, 1, or 2.
    pub fn position(&self, action: Action) -> usize {
        // Permutation invariant: every action appears exactly once.
        self.0.iter().position(|&a| a == action).unwrap_or(0)
    }

    /// Number of atomic moves the action grants this round: 3 for the
    /// first-chosen action, 2 for the second, 1 for the third.
    pub fn efficiency(&self, action: Action) -> u8 {
        3 - self.position(action) as u8
    }
}

impl fmt::Display for CommandOrdering {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{}", self.0[0], self.0[1], self.0[2])
    }
}

/// The orderings revealed for the current round, one per seat.
pub type RevealedOrderings = [Option<CommandOrdering>; PLAYER_COUNT];
