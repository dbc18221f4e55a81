//! Game state: ship registry, round counter, scores, revealed orderings.
//!
//! The registry is the single source of truth for ship positions. Moving
//! a ship updates its cell atomically; destroying one removes it for good
//! (ids are never reused, destroyed slots are simply empty). Cell
//! occupancy is derived by scanning live ships, which is cheap at this
//! map size and cannot drift out of sync with the ships themselves.

use super::cell::{CellId, CELL_COUNT};
use super::order::{Action, CommandOrdering, RevealedOrderings};
use super::player::{PlayerId, PLAYER_COUNT};
use super::ship::{Ship, ShipId};

/// The game ends after this round completes.
pub const FINAL_ROUND: u8 = 9;

/// Complete engine state for one game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    round: u8,
    ships: Vec<Option<Ship>>,
    scores: [u32; PLAYER_COUNT],
    orderings: RevealedOrderings,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    /// Creates an empty state at round 1 with no ships and zero scores.
    pub fn new() -> Self {
        GameState {
            round: 1,
            ships: Vec::new(),
            scores: [0; PLAYER_COUNT],
            orderings: [None; PLAYER_COUNT],
        }
    }

    /// Current round, 1-indexed.
    pub fn round(&self) -> u8 {
        self.round
    }

    /// True once round `FINAL_ROUND` has completed.
    pub fn is_over(&self) -> bool {
        self.round > FINAL_ROUND
    }

    pub(crate) fn advance_round(&mut self) {
        self.round += 1;
    }

    pub(crate) fn set_round(&mut self, round: u8) {
        self.round = round;
    }

    pub fn score(&self, player: PlayerId) -> u32 {
        self.scores[player.index()]
    }

    pub fn scores(&self) -> [u32; PLAYER_COUNT] {
        self.scores
    }

    pub(crate) fn add_score(&mut self, player: PlayerId, points: u32) {
        self.scores[player.index()] += points;
    }

    pub(crate) fn set_scores(&mut self, scores: [u32; PLAYER_COUNT]) {
        self.scores = scores;
    }

    /// The ordering a player revealed this round, if collection has
    /// already happened.
    pub fn ordering(&self, player: PlayerId) -> Option<CommandOrdering> {
        self.orderings[player.index()]
    }

    /// Reveals all orderings at once. Collection is simultaneous: no
    /// ordering becomes visible through the state until every player has
    /// committed.
    pub(crate) fn set_orderings(&mut self, orderings: [CommandOrdering; PLAYER_COUNT]) {
        for (slot, ordering) in self.orderings.iter_mut().zip(orderings) {
            *slot = Some(ordering);
        }
    }

    pub(crate) fn clear_orderings(&mut self) {
        self.orderings = [None; PLAYER_COUNT];
    }

    /// Adds a new ship for `owner` at `cell` and returns its id.
    pub(crate) fn spawn_ship(&mut self, owner: PlayerId, cell: CellId) -> ShipId {
        let id = ShipId(self.ships.len() as u32);
        self.ships.push(Some(Ship::new(owner, cell)));
        id
    }

    pub fn ship(&self, id: ShipId) -> Option<&Ship> {
        self.ships.get(id.0 as usize).and_then(|s| s.as_ref())
    }

    fn ship_mut(&mut self, id: ShipId) -> Option<&mut Ship> {
        self.ships.get_mut(id.0 as usize).and_then(|s| s.as_mut())
    }

    /// Relocates a live ship. Returns false if the ship does not exist.
    pub(crate) fn move_ship(&mut self, id: ShipId, dest: CellId) -> bool {
        match self.ship_mut(id) {
            Some(ship) => {
                ship.cell = dest;
                true
            }
            None => false,
        }
    }

    /// Removes a ship from the game. Returns false if it was already gone.
    pub(crate) fn destroy_ship(&mut self, id: ShipId) -> bool {
        match self.ships.get_mut(id.0 as usize) {
            Some(slot @ Some(_)) => {
                *slot = None;
                true
            }
            _ => false,
        }
    }

    pub(crate) fn mark_acted(&mut self, id: ShipId, action: Action) {
        if let Some(ship) = self.ship_mut(id) {
            ship.mark_acted(action);
        }
    }

    pub(crate) fn restore_ship_flags(&mut self, id: ShipId, flags: [bool; 3]) {
        if let Some(ship) = self.ship_mut(id) {
            ship.restore_flags(flags);
        }
    }

    /// Iterates over all live ships in ascending id order.
    pub fn live_ships(&self) -> impl Iterator<Item = (ShipId, &Ship)> {
        self.ships
            .iter()
            .enumerate()
            .filter_map(|(i, slot)| slot.as_ref().map(|s| (ShipId(i as u32), s)))
    }

    /// Ships currently on a cell, in ascending id order.
    pub fn ships_at(&self, cell: CellId) -> Vec<ShipId> {
        self.live_ships()
            .filter(|(_, s)| s.cell == cell)
            .map(|(id, _)| id)
            .collect()
    }

    /// The player occupying a cell, if any. When a cell is momentarily
    /// contested during combat resolution, this reports the owner of the
    /// lowest-id ship present.
    pub fn occupant(&self, cell: CellId) -> Option<PlayerId> {
        self.live_ships()
            .find(|(_, s)| s.cell == cell)
            .map(|(_, s)| s.owner)
    }

    /// True if two different players' ships share the cell. Only ever
    /// true mid-resolution; combat restores mono-occupancy before a phase
    /// step completes.
    pub fn is_contested(&self, cell: CellId) -> bool {
        let mut owner = None;
        for (_, ship) in self.live_ships() {
            if ship.cell != cell {
                continue;
            }
            match owner {
                None => owner = Some(ship.owner),
                Some(o) if o != ship.owner => return true,
                Some(_) => {}
            }
        }
        false
    }

    /// All of a player's ships, in ascending id order.
    pub fn fleet_of(&self, player: PlayerId) -> Vec<ShipId> {
        self.live_ships()
            .filter(|(_, s)| s.owner == player)
            .map(|(id, _)| id)
            .collect()
    }

    pub fn ship_count(&self, player: PlayerId) -> usize {
        self.live_ships().filter(|(_, s)| s.owner == player).count()
    }

    /// Distinct cells holding at least one of the player's ships.
    pub fn occupied_cells(&self, player: PlayerId) -> Vec<CellId> {
        let mut cells: Vec<CellId> = self
            .live_ships()
            .filter(|(_, s)| s.owner == player)
            .map(|(_, s)| s.cell)
            .collect();
        cells.sort_unstable();
        cells.dedup();
        cells
    }

    /// Clears every ship's per-round action flags. Runs exactly once per
    /// round, before order collection.
    pub(crate) fn reset_round_flags(&mut self) {
        for slot in self.ships.iter_mut() {
            if let Some(ship) = slot {
                ship.reset_flags();
            }
        }
    }

    /// Verifies the structural invariants: every live ship sits on a
    /// valid cell and no cell hosts ships of two different players.
    /// Intended for tests and snapshot validation.
    pub fn check_invariants(&self) -> Result<(), String> {
        let mut cell_owner: [Option<PlayerId>; CELL_COUNT] = [None; CELL_COUNT];
        for (id, ship) in self.live_ships() {
            let idx = ship.cell.index();
            match cell_owner[idx] {
                None => cell_owner[idx] = Some(ship.owner),
                Some(owner) if owner != ship.owner => {
                    return Err(format!(
                        "cell {} holds ships of both {} and {} ({})",
                        ship.cell, owner, ship.owner, id
                    ));
                }
                Some(_) => {}
            }
        }
        if self.round == 0 {
            return Err("round counter is 0; rounds are 1-indexed".to_string());
        }
        Ok(())
    }
}
