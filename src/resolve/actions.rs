//! Action executors.
//!
//! Each executor applies one atomic move after re-checking its
//! preconditions against the current state. A move outside the generator's
//! legal set is rejected as `EngineError::IllegalMove`; under correct
//! operation the scheduler never offers one, so a rejection here marks a
//! misbehaving caller, not a recoverable game event.

use crate::board::{is_adjacent, system_level, Action, GameState, PlayerId, ShipId};
use crate::error::EngineError;
use crate::movegen::{ExploreMove, ExterminateMove};
use crate::sink::{EventSink, Severity};

use super::combat::{battle_losses, resolve_contested};

fn illegal(player: PlayerId, action: Action, reason: impl Into<String>) -> EngineError {
    EngineError::IllegalMove {
        player,
        action,
        reason: reason.into(),
    }
}

/// Expands: spawns one new ship at the chosen eligible ship's cell. The
/// new ship starts flagged used-for-Expand so it cannot seed another
/// expansion in the same round. Returns the new ship's id.
pub fn apply_expand(
    state: &mut GameState,
    player: PlayerId,
    ship: ShipId,
    sink: &mut dyn EventSink,
) -> Result<ShipId, EngineError> {
    let action = Action::Expand;
    let cell = match state.ship(ship) {
        Some(s) if s.owner == player => s.cell,
        Some(_) => return Err(illegal(player, action, format!("{} is not owned", ship))),
        None => return Err(illegal(player, action, format!("{} does not exist", ship))),
    };
    if state.ship(ship).map_or(false, |s| s.has_acted(action)) {
        return Err(illegal(player, action, format!("{} already expanded", ship)));
    }
    if system_level(cell) == 0 {
        return Err(illegal(player, action, format!("{} is not a system", cell)));
    }
    if state.is_contested(cell) {
        return Err(illegal(player, action, format!("{} is contested", cell)));
    }

    let new_ship = state.spawn_ship(player, cell);
    state.mark_acted(new_ship, action);

    sink.log(
        Some(player),
        Severity::Info,
        &format!("adds a ship at {}", cell),
    );
    sink.state_changed(state);
    Ok(new_ship)
}

/// Explores: relocates the fleet to its destination and flags every moved
/// ship used-for-Explore. If the destination somehow ends up contested,
/// combat resolves before returning.
pub fn apply_explore(
    state: &mut GameState,
    player: PlayerId,
    mv: &ExploreMove,
    sink: &mut dyn EventSink,
) -> Result<(), EngineError> {
    let action = Action::Explore;
    let origin = validate_fleet(state, player, action, &mv.ships)?;
    if !is_adjacent(origin, mv.dest) {
        return Err(illegal(
            player,
            action,
            format!("{} is not adjacent to {}", mv.dest, origin),
        ));
    }
    if matches!(state.occupant(mv.dest), Some(p) if p != player) {
        return Err(illegal(
            player,
            action,
            format!("{} is held by another player", mv.dest),
        ));
    }

    for &ship in &mv.ships {
        state.move_ship(ship, mv.dest);
        state.mark_acted(ship, action);
    }
    if state.is_contested(mv.dest) {
        resolve_contested(state, mv.dest, sink);
    }

    sink.log(
        Some(player),
        Severity::Info,
        &format!(
            "moves a fleet of {} from {} to {}",
            mv.ships.len(),
            origin,
            mv.dest
        ),
    );
    sink.state_changed(state);
    Ok(())
}

/// Exterminates: flags the attackers, resolves combat against the
/// defenders at the target, and advances surviving attackers onto the
/// target only when the defenders were wiped out.
pub fn apply_exterminate(
    state: &mut GameState,
    player: PlayerId,
    mv: &ExterminateMove,
    sink: &mut dyn EventSink,
) -> Result<(), EngineError> {
    let action = Action::Exterminate;
    if mv.attackers.is_empty() {
        return Err(illegal(player, action, "empty attacker set"));
    }
    for &id in &mv.attackers {
        let ship = state
            .ship(id)
            .ok_or_else(|| illegal(player, action, format!("{} does not exist", id)))?;
        if ship.owner != player {
            return Err(illegal(player, action, format!("{} is not owned", id)));
        }
        if ship.has_acted(action) {
            return Err(illegal(
                player,
                action,
                format!("{} already exterminated", id),
            ));
        }
        if !is_adjacent(ship.cell, mv.target) {
            return Err(illegal(
                player,
                action,
                format!("{} is not adjacent to {}", id, mv.target),
            ));
        }
    }
    let defenders = state.ships_at(mv.target);
    match state.occupant(mv.target) {
        Some(p) if p != player => {}
        _ => {
            return Err(illegal(
                player,
                action,
                format!("{} is not an enemy-held cell", mv.target),
            ));
        }
    }

    for &id in &mv.attackers {
        state.mark_acted(id, action);
    }

    let outcome = battle_losses(mv.attackers.len(), defenders.len());
    for &id in mv.attackers.iter().take(outcome.attacker_losses) {
        state.destroy_ship(id);
    }
    for &id in defenders.iter().take(outcome.defender_losses) {
        state.destroy_ship(id);
    }

    let survivors: Vec<ShipId> = mv.attackers[outcome.attacker_losses..].to_vec();
    let defenders_wiped = outcome.defender_losses == defenders.len();
    if defenders_wiped {
        for &id in &survivors {
            state.move_ship(id, mv.target);
        }
    }

    sink.log(
        Some(player),
        Severity::Info,
        &format!(
            "strikes {} with {} ships; {} survive",
            mv.target,
            mv.attackers.len(),
            survivors.len()
        ),
    );
    sink.state_changed(state);
    Ok(())
}

/// Checks fleet ownership, flags, and co-location; returns the shared
/// origin cell.
fn validate_fleet(
    state: &GameState,
    player: PlayerId,
    action: Action,
    ships: &[ShipId],
) -> Result<crate::board::CellId, EngineError> {
    let mut origin = None;
    if ships.is_empty() {
        return Err(illegal(player, action, "empty fleet"));
    }
    for &id in ships {
        let ship = state
            .ship(id)
            .ok_or_else(|| illegal(player, action, format!("{} does not exist", id)))?;
        if ship.owner != player {
            return Err(illegal(player, action, format!("{} is not owned", id)));
        }
        if ship.has_acted(action) {
            return Err(illegal(player, action, format!("{} already acted", id)));
        }
        match origin {
            None => origin = Some(ship.cell),
            Some(cell) if cell != ship.cell => {
                return Err(illegal(player, action, "fleet is not co-located"));
            }
            Some(_) => {}
        }
    }
    // Non-empty fleet guarantees an origin.
    origin.ok_or_else(|| illegal(player, action, "empty fleet"))
}
