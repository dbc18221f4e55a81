//! Exterminate move generation.
//!
//! An Exterminate strikes one enemy-held cell with ships drawn from the
//! cells around it. For every such target, each adjacent origin cell
//! contributes between zero and all of its eligible ships; every
//! combination of per-origin counts (except the all-zero one) is a
//! distinct option. Ships within one origin are interchangeable, so
//! contributions are enumerated by count.

use crate::board::{neighbors, Action, GameState, PlayerId, ShipId, ALL_CELLS};

use super::ExterminateMove;

/// Returns every legal Exterminate move for the player.
pub fn exterminate_options(player: PlayerId, state: &GameState) -> Vec<ExterminateMove> {
    let mut moves = Vec::new();

    for &target in &ALL_CELLS {
        match state.occupant(target) {
            Some(occupant) if occupant != player => {}
            _ => continue,
        }

        // Eligible attackers grouped by origin cell around the target.
        let groups: Vec<Vec<ShipId>> = neighbors(target)
            .into_iter()
            .map(|origin| {
                state
                    .ships_at(origin)
                    .into_iter()
                    .filter(|&id| {
                        state.ship(id).map_or(false, |s| {
                            s.owner == player && !s.has_acted(Action::Exterminate)
                        })
                    })
                    .collect::<Vec<ShipId>>()
            })
            .filter(|g| !g.is_empty())
            .collect();
        if groups.is_empty() {
            continue;
        }

        let sizes: Vec<usize> = groups.iter().map(|g| g.len()).collect();
        for counts in count_combinations(&sizes) {
            let attackers: Vec<ShipId> = groups
                .iter()
                .zip(&counts)
                .flat_map(|(group, &take)| group[..take].iter().copied())
                .collect();
            moves.push(ExterminateMove { attackers, target });
        }
    }

    moves
}

/// Enumerates every vector of per-group counts with `0 <= c[i] <= sizes[i]`,
/// excluding the all-zero vector.
fn count_combinations(sizes: &[usize]) -> Vec<Vec<usize>> {
    let mut combos = Vec::new();
    let mut counts = vec![0usize; sizes.len()];
    loop {
        // Odometer increment over the count vector.
        let mut i = 0;
        loop {
            if i == sizes.len() {
                return combos;
            }
            counts[i] += 1;
            if counts[i] <= sizes[i] {
                break;
            }
            counts[i] = 0;
            i += 1;
        }
        combos.push(counts.clone());
    }
}
