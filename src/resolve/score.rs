//! Sector control and scoring.
//!
//! After each round's three phases, every sector is evaluated: a player's
//! strength in a sector is the sum of system levels of the cells they
//! occupy inside it (empty-space cells contribute nothing, the hub
//! contributes 3). The unique strict-maximum player with positive
//! strength controls the sector and is awarded that strength. Ties and
//! empty sectors award nothing. Scores accumulate and never decrease.

use crate::board::{
    cells_in, system_level, GameState, PlayerId, SectorId, ALL_PLAYERS, ALL_SECTORS, PLAYER_COUNT,
};
use crate::sink::{EventSink, Severity};

/// Each player's strength in one sector.
pub fn sector_strengths(state: &GameState, sector: SectorId) -> [u32; PLAYER_COUNT] {
    let mut strengths = [0u32; PLAYER_COUNT];
    for cell in cells_in(sector) {
        if let Some(owner) = state.occupant(cell) {
            strengths[owner.index()] += u32::from(system_level(cell));
        }
    }
    strengths
}

/// The controlling player of a sector and the points it yields, or `None`
/// when no player has strictly greater positive strength than every
/// rival.
pub fn sector_controller(state: &GameState, sector: SectorId) -> Option<(PlayerId, u32)> {
    let strengths = sector_strengths(state, sector);
    let best = *strengths.iter().max().unwrap_or(&0);
    if best == 0 {
        return None;
    }
    if strengths.iter().filter(|&&s| s == best).count() > 1 {
        return None;
    }
    ALL_PLAYERS
        .iter()
        .find(|p| strengths[p.index()] == best)
        .map(|&p| (p, best))
}

/// Awards every controlled sector's points to its controller.
pub fn apply_round_scores(state: &mut GameState, sink: &mut dyn EventSink) {
    for &sector in &ALL_SECTORS {
        if let Some((controller, points)) = sector_controller(state, sector) {
            state.add_score(controller, points);
            sink.log(
                Some(controller),
                Severity::Info,
                &format!("controls the {} sector for {} points", sector, points),
            );
        }
    }
    sink.state_changed(state);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{CellId, ALL_CELLS, CENTER_SECTOR, HUB};
    use crate::sink::NullSink;

    fn system_in(sector: SectorId, level: u8) -> CellId {
        *cells_in(sector)
            .iter()
            .find(|&&c| system_level(c) == level)
            .expect("sector has a system of that level")
    }

    #[test]
    fn empty_sector_has_no_controller() {
        let state = GameState::new();
        for &sector in &ALL_SECTORS {
            assert_eq!(sector_controller(&state, sector), None);
        }
    }

    #[test]
    fn sole_occupant_of_a_system_controls_the_sector() {
        let mut state = GameState::new();
        let sector = ALL_SECTORS[0];
        state.spawn_ship(PlayerId::Red, system_in(sector, 2));
        assert_eq!(sector_controller(&state, sector), Some((PlayerId::Red, 2)));
    }

    #[test]
    fn empty_space_occupancy_scores_nothing() {
        let mut state = GameState::new();
        let sector = ALL_SECTORS[0];
        let empty = *cells_in(sector)
            .iter()
            .find(|&&c| system_level(c) == 0)
            .unwrap();
        state.spawn_ship(PlayerId::Red, empty);
        assert_eq!(sector_controller(&state, sector), None);
    }

    #[test]
    fn strength_tie_leaves_sector_uncontrolled() {
        let mut state = GameState::new();
        let sector = ALL_SECTORS[0];
        let level1s: Vec<CellId> = cells_in(sector)
            .iter()
            .copied()
            .filter(|&c| system_level(c) == 1)
            .collect();
        state.spawn_ship(PlayerId::Red, level1s[0]);
        state.spawn_ship(PlayerId::Blue, level1s[1]);
        assert_eq!(sector_controller(&state, sector), None);
    }

    #[test]
    fn stronger_occupier_wins_the_sector() {
        let mut state = GameState::new();
        let sector = ALL_SECTORS[0];
        state.spawn_ship(PlayerId::Red, system_in(sector, 2));
        state.spawn_ship(PlayerId::Blue, system_in(sector, 1));
        assert_eq!(sector_controller(&state, sector), Some((PlayerId::Red, 2)));
    }

    #[test]
    fn hub_yields_three_points_through_its_sector() {
        let mut state = GameState::new();
        state.spawn_ship(PlayerId::Yellow, HUB);
        assert_eq!(
            sector_controller(&state, CENTER_SECTOR),
            Some((PlayerId::Yellow, 3))
        );
    }

    #[test]
    fn scores_accumulate_across_rounds() {
        let mut state = GameState::new();
        state.spawn_ship(PlayerId::Red, HUB);
        apply_round_scores(&mut state, &mut NullSink);
        apply_round_scores(&mut state, &mut NullSink);
        assert_eq!(state.score(PlayerId::Red), 6);
    }

    #[test]
    fn ship_count_on_a_cell_does_not_change_strength() {
        let mut state = GameState::new();
        let sector = ALL_SECTORS[0];
        let cell = system_in(sector, 1);
        state.spawn_ship(PlayerId::Red, cell);
        state.spawn_ship(PlayerId::Red, cell);
        state.spawn_ship(PlayerId::Red, cell);
        assert_eq!(sector_strengths(&state, sector)[PlayerId::Red.index()], 1);
    }

    #[test]
    fn full_map_occupation_scores_every_sector() {
        let mut state = GameState::new();
        for &cell in &ALL_CELLS {
            state.spawn_ship(PlayerId::Blue, cell);
        }
        apply_round_scores(&mut state, &mut NullSink);
        // 8 peripheral sectors worth 2+1+1 each, plus the hub's 3.
        assert_eq!(state.score(PlayerId::Blue), 8 * 4 + 3);
    }
}
