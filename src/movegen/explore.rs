//! Explore move generation.
//!
//! An Explore relocates a fleet (one or more co-located ships) to a
//! single adjacent cell that is empty or friendly. Enemy-held cells are
//! never Explore destinations; contesting them is what Exterminate is
//! for. Co-located eligible ships are interchangeable, so fleets are
//! enumerated by size with one representative grouping per size:
//! singleton moves and whole-stack moves are both present.

use crate::board::{neighbors, Action, GameState, PlayerId, ShipId};

use super::ExploreMove;

/// Returns every legal Explore move for the player.
pub fn explore_options(player: PlayerId, state: &GameState) -> Vec<ExploreMove> {
    let mut moves = Vec::new();

    for origin in state.occupied_cells(player) {
        let eligible: Vec<ShipId> = state
            .ships_at(origin)
            .into_iter()
            .filter(|&id| {
                state
                    .ship(id)
                    .map_or(false, |s| s.owner == player && !s.has_acted(Action::Explore))
            })
            .collect();
        if eligible.is_empty() {
            continue;
        }

        for dest in neighbors(origin) {
            if matches!(state.occupant(dest), Some(p) if p != player) {
                continue;
            }
            for size in 1..=eligible.len() {
                moves.push(ExploreMove {
                    ships: eligible[..size].to_vec(),
                    dest,
                });
            }
        }
    }

    moves
}
