//! Player identity.
//!
//! The game seats a fixed roster of three players, each identified by its
//! fleet color. Display names and the human/bot distinction live in the
//! session roster, not here.

use std::fmt;

/// Number of seats in a game.
pub const PLAYER_COUNT: usize = 3;

/// One of the three fixed player seats, identified by fleet color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlayerId {
    Red,
    Yellow,
    Blue,
}

/// Every seat, in turn order.
pub const ALL_PLAYERS: [PlayerId; PLAYER_COUNT] =
    [PlayerId::Red, PlayerId::Yellow, PlayerId::Blue];

impl PlayerId {
    pub const fn index(self) -> usize {
        match self {
            PlayerId::Red => 0,
            PlayerId::Yellow => 1,
            PlayerId::Blue => 2,
        }
    }

    /// Creates a seat from its index, or `None` if out of range.
    pub fn from_index(index: usize) -> Option<PlayerId> {
        ALL_PLAYERS.get(index).copied()
    }

    pub const fn color_name(self) -> &'static str {
        match self {
            PlayerId::Red => "red",
            PlayerId::Yellow => "yellow",
            PlayerId::Blue => "blue",
        }
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.color_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_roundtrip() {
        for &player in &ALL_PLAYERS {
            assert_eq!(PlayerId::from_index(player.index()), Some(player));
        }
        assert_eq!(PlayerId::from_index(PLAYER_COUNT), None);
    }

    #[test]
    fn colors_are_distinct() {
        assert_ne!(PlayerId::Red.color_name(), PlayerId::Yellow.color_name());
        assert_ne!(PlayerId::Yellow.color_name(), PlayerId::Blue.color_name());
    }
}
