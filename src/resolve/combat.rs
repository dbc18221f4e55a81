//! Combat resolution.
//!
//! Deterministic, simultaneous elimination: whenever two players' fleets
//! contest a cell, each side loses as many ships as the smaller side's
//! strength. The smaller side is wiped out, the larger keeps the
//! difference, and an exact tie empties the cell. Within a side,
//! casualties fall in ascending ship id order.

use crate::board::{CellId, GameState, PlayerId};
use crate::sink::{EventSink, Severity};

/// Losses each side takes in one battle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BattleOutcome {
    pub attacker_losses: usize,
    pub defender_losses: usize,
}

/// Computes losses for a battle between two strengths. Both sides lose
/// the smaller side's strength.
pub const fn battle_losses(attackers: usize, defenders: usize) -> BattleOutcome {
    let losses = if attackers < defenders {
        attackers
    } else {
        defenders
    };
    BattleOutcome {
        attacker_losses: losses,
        defender_losses: losses,
    }
}

/// Resolves a contested cell in place, destroying ships until at most one
/// player's fleet remains. Reports the battle through the sink.
pub fn resolve_contested(state: &mut GameState, cell: CellId, sink: &mut dyn EventSink) {
    while let Some((first, second)) = contesting_pair(state, cell) {
        let side_a = side_of(state, cell, first);
        let side_b = side_of(state, cell, second);
        let outcome = battle_losses(side_a.len(), side_b.len());

        for &id in side_a.iter().take(outcome.attacker_losses) {
            state.destroy_ship(id);
        }
        for &id in side_b.iter().take(outcome.defender_losses) {
            state.destroy_ship(id);
        }

        sink.log(
            None,
            Severity::Info,
            &format!(
                "battle at {}: {} loses {}, {} loses {}",
                cell, first, outcome.attacker_losses, second, outcome.defender_losses
            ),
        );
    }
}

fn contesting_pair(state: &GameState, cell: CellId) -> Option<(PlayerId, PlayerId)> {
    let mut first = None;
    for id in state.ships_at(cell) {
        let owner = state.ship(id)?.owner;
        match first {
            None => first = Some(owner),
            Some(f) if f != owner => return Some((f, owner)),
            Some(_) => {}
        }
    }
    None
}

fn side_of(state: &GameState, cell: CellId, owner: PlayerId) -> Vec<crate::board::ShipId> {
    state
        .ships_at(cell)
        .into_iter()
        .filter(|&id| state.ship(id).map_or(false, |s| s.owner == owner))
        .collect()
}
