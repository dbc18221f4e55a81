//! Legal move generation.
//!
//! Enumerates the set of legal atomic moves for a given player and action
//! type in the current game state. All generators are pure functions over
//! `&GameState`; an empty result means "no legal move of this type
//! remains" and is a skip signal, never an error.

pub mod expand;
pub mod explore;
pub mod exterminate;

use rand::Rng;

use crate::board::{CellId, GameState, PlayerId, ShipId};

pub use expand::expand_options;
pub use explore::explore_options;
pub use exterminate::exterminate_options;

/// One atomic Explore move: a fleet of co-located ships and the single
/// adjacent destination it relocates to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExploreMove {
    pub ships: Vec<ShipId>,
    pub dest: CellId,
}

/// One atomic Exterminate move: attacking ships drawn from cells adjacent
/// to the target, and the enemy-held target cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExterminateMove {
    pub attackers: Vec<ShipId>,
    pub target: CellId,
}

/// Picks a uniform-random legal Expand for the player, if any exists.
pub fn random_expand(player: PlayerId, state: &GameState, rng: &mut impl Rng) -> Option<ShipId> {
    let options = expand_options(player, state);
    pick(&options, rng).cloned()
}

/// Picks a uniform-random legal Explore for the player, if any exists.
pub fn random_explore(
    player: PlayerId,
    state: &GameState,
    rng: &mut impl Rng,
) -> Option<ExploreMove> {
    let options = explore_options(player, state);
    pick(&options, rng).cloned()
}

/// Picks a uniform-random legal Exterminate for the player, if any exists.
pub fn random_exterminate(
    player: PlayerId,
    state: &GameState,
    rng: &mut impl Rng,
) -> Option<ExterminateMove> {
    let options = exterminate_options(player, state);
    pick(&options, rng).cloned()
}

fn pick<'a, T>(options: &'a [T], rng: &mut impl Rng) -> Option<&'a T> {
    if options.is_empty() {
        None
    } else {
        Some(&options[rng.gen_range(0..options.len())])
    }
}
