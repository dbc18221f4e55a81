//! Versioned session snapshots.
//!
//! A snapshot captures everything needed to resume a game at a round
//! boundary: round counter, scores, seat names, and every live ship with
//! its per-round action flags. Revealed orderings are transient and never
//! persisted. The document is JSON with an explicit format version;
//! decoding validates the version and the structural invariants before
//! any state is rebuilt, so a corrupt document can never produce a
//! half-restored session.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::board::{CellId, GameState, PlayerId, FINAL_ROUND, PLAYER_COUNT};

/// Current snapshot format version.
pub const SNAPSHOT_VERSION: u32 = 1;

#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("snapshot version {0} is not supported (expected 1)")]
    UnsupportedVersion(u32),

    #[error("snapshot names {0} seats, expected 3")]
    WrongSeatCount(usize),

    #[error("snapshot round {0} is outside 1..=10")]
    RoundOutOfRange(u8),

    #[error("ship {index} is invalid: {reason}")]
    BadShip { index: usize, reason: String },

    #[error("snapshot violates board invariants: {0}")]
    BrokenInvariant(String),

    #[error("malformed snapshot document: {0}")]
    Malformed(#[from] serde_json::Error),
}

#[derive(Debug, Serialize, Deserialize)]
struct ShipRecord {
    owner: u8,
    cell: u8,
    acted: [bool; 3],
}

#[derive(Debug, Serialize, Deserialize)]
struct Snapshot {
    version: u32,
    round: u8,
    scores: [u32; PLAYER_COUNT],
    seats: Vec<String>,
    ships: Vec<ShipRecord>,
}

/// Serializes a state and its seat names to a snapshot document.
pub fn encode(state: &GameState, seat_names: &[&str]) -> Result<String, SnapshotError> {
    if seat_names.len() != PLAYER_COUNT {
        return Err(SnapshotError::WrongSeatCount(seat_names.len()));
    }
    let snapshot = Snapshot {
        version: SNAPSHOT_VERSION,
        round: state.round(),
        scores: state.scores(),
        seats: seat_names.iter().map(|n| n.to_string()).collect(),
        ships: state
            .live_ships()
            .map(|(_, ship)| ShipRecord {
                owner: ship.owner.index() as u8,
                cell: ship.cell.index() as u8,
                acted: ship.flags(),
            })
            .collect(),
    };
    Ok(serde_json::to_string(&snapshot)?)
}

/// Parses and validates a snapshot document, rebuilding the state it
/// describes.
pub fn decode(document: &str) -> Result<(GameState, Vec<String>), SnapshotError> {
    let snapshot: Snapshot = serde_json::from_str(document)?;
    if snapshot.version != SNAPSHOT_VERSION {
        return Err(SnapshotError::UnsupportedVersion(snapshot.version));
    }
    if snapshot.seats.len() != PLAYER_COUNT {
        return Err(SnapshotError::WrongSeatCount(snapshot.seats.len()));
    }
    if snapshot.round < 1 || snapshot.round > FINAL_ROUND + 1 {
        return Err(SnapshotError::RoundOutOfRange(snapshot.round));
    }

    let mut state = GameState::new();
    state.set_round(snapshot.round);
    state.set_scores(snapshot.scores);
    for (index, record) in snapshot.ships.iter().enumerate() {
        let owner = PlayerId::from_index(record.owner as usize).ok_or_else(|| {
            SnapshotError::BadShip {
                index,
                reason: format!("owner {} is not a seat", record.owner),
            }
        })?;
        let cell =
            CellId::from_index(record.cell as usize).ok_or_else(|| SnapshotError::BadShip {
                index,
                reason: format!("cell {} is off the map", record.cell),
            })?;
        let id = state.spawn_ship(owner, cell);
        state.restore_ship_flags(id, record.acted);
    }

    state
        .check_invariants()
        .map_err(SnapshotError::BrokenInvariant)?;
    Ok((state, snapshot.seats))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Action, ALL_CELLS, HUB};

    const NAMES: [&str; 3] = ["alice", "bot-a", "bot-b"];

    #[test]
    fn roundtrip_preserves_everything() {
        let mut state = GameState::new();
        state.set_round(4);
        state.set_scores([7, 0, 12]);
        let a = state.spawn_ship(PlayerId::Red, HUB);
        state.mark_acted(a, Action::Explore);
        state.spawn_ship(PlayerId::Blue, ALL_CELLS[3]);

        let document = encode(&state, &NAMES).unwrap();
        let (restored, names) = decode(&document).unwrap();

        assert_eq!(restored.round(), 4);
        assert_eq!(restored.scores(), [7, 0, 12]);
        assert_eq!(names, NAMES);
        assert_eq!(restored.ship_count(PlayerId::Red), 1);
        assert_eq!(restored.ship_count(PlayerId::Blue), 1);
        assert_eq!(restored.occupant(HUB), Some(PlayerId::Red));
        let (_, red) = restored
            .live_ships()
            .find(|(_, s)| s.owner == PlayerId::Red)
            .unwrap();
        assert!(red.has_acted(Action::Explore));
        assert!(!red.has_acted(Action::Expand));
    }

    #[test]
    fn orderings_are_not_persisted() {
        let mut state = GameState::new();
        let perms = crate::board::CommandOrdering::permutations();
        state.set_orderings([perms[0], perms[1], perms[2]]);
        let document = encode(&state, &NAMES).unwrap();
        let (restored, _) = decode(&document).unwrap();
        assert!(restored.ordering(PlayerId::Red).is_none());
    }

    #[test]
    fn unknown_version_is_rejected() {
        let state = GameState::new();
        let document = encode(&state, &NAMES).unwrap().replacen(
            "\"version\":1",
            "\"version\":2",
            1,
        );
        assert!(matches!(
            decode(&document),
            Err(SnapshotError::UnsupportedVersion(2))
        ));
    }

    #[test]
    fn garbage_is_rejected() {
        assert!(matches!(
            decode("not json at all"),
            Err(SnapshotError::Malformed(_))
        ));
    }

    #[test]
    fn off_map_cell_is_rejected() {
        let document = r#"{"version":1,"round":1,"scores":[0,0,0],
             "seats":["a","b","c"],
             "ships":[{"owner":0,"cell":99,"acted":[false,false,false]}]}"#;
        assert!(matches!(
            decode(document),
            Err(SnapshotError::BadShip { index: 0, .. })
        ));
    }

    #[test]
    fn bad_owner_is_rejected() {
        let document = r#"{"version":1,"round":1,"scores":[0,0,0],
             "seats":["a","b","c"],
             "ships":[{"owner":7,"cell":0,"acted":[false,false,false]}]}"#;
        assert!(matches!(
            decode(document),
            Err(SnapshotError::BadShip { index: 0, .. })
        ));
    }

    #[test]
    fn contested_cell_is_rejected() {
        let document = r#"{"version":1,"round":1,"scores":[0,0,0],
             "seats":["a","b","c"],
             "ships":[{"owner":0,"cell":5,"acted":[false,false,false]},
                      {"owner":1,"cell":5,"acted":[false,false,false]}]}"#;
        assert!(matches!(
            decode(document),
            Err(SnapshotError::BrokenInvariant(_))
        ));
    }

    #[test]
    fn round_bounds_are_enforced() {
        let low = r#"{"version":1,"round":0,"scores":[0,0,0],
             "seats":["a","b","c"],"ships":[]}"#;
        assert!(matches!(
            decode(low),
            Err(SnapshotError::RoundOutOfRange(0))
        ));
        let high = r#"{"version":1,"round":11,"scores":[0,0,0],
             "seats":["a","b","c"],"ships":[]}"#;
        assert!(matches!(
            decode(high),
            Err(SnapshotError::RoundOutOfRange(11))
        ));
    }

    #[test]
    fn wrong_seat_count_is_rejected_both_ways() {
        let state = GameState::new();
        assert!(matches!(
            encode(&state, &["only", "two"]),
            Err(SnapshotError::WrongSeatCount(2))
        ));
        let document = r#"{"version":1,"round":1,"scores":[0,0,0],
             "seats":["a"],"ships":[]}"#;
        assert!(matches!(
            decode(document),
            Err(SnapshotError::WrongSeatCount(1))
        ));
    }
}
