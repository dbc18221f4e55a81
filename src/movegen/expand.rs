//! Expand move generation.
//!
//! An Expand adds one new ship next to an existing one. A ship is
//! eligible when it sits on a system cell (level 1 or higher) that its
//! owner solely occupies and it has not yet been consumed by Expand this
//! round. No per-cell capacity is modeled: any eligible ship qualifies.

use crate::board::{system_level, Action, GameState, PlayerId, ShipId};

/// Returns every ship the player could expand from, in ascending id order.
pub fn expand_options(player: PlayerId, state: &GameState) -> Vec<ShipId> {
    state
        .live_ships()
        .filter(|(_, ship)| {
            ship.owner == player
                && !ship.has_acted(Action::Expand)
                && system_level(ship.cell) >= 1
                && !state.is_contested(ship.cell)
        })
        .map(|(id, _)| id)
        .collect()
}
