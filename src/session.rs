//! Game session: setup, round loop, and final standings.
//!
//! A session owns the state, the three seats, and the event sink. Setup
//! places each player's initial fleets on level-1 systems in snake order
//! (forward, then reversed), after which `run_game` resolves rounds until
//! the ninth completes. Sessions can be checkpointed to a versioned
//! snapshot at any round boundary and resumed later.

use crate::board::{system_level, GameState, PlayerId, ALL_CELLS, PLAYER_COUNT};
use crate::error::EngineError;
use crate::player::Seat;
use crate::resolve::run_round;
use crate::sink::{EventSink, Severity};
use crate::snapshot::{self, SnapshotError};

/// Ships placed per setup turn; each player takes two turns.
pub const SETUP_SHIPS_PER_TURN: usize = 2;

/// Scores at game end, with every top scorer listed (a tie means shared
/// victory).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FinalStandings {
    pub scores: [u32; PLAYER_COUNT],
    pub winners: Vec<PlayerId>,
}

/// One complete game: state plus the seats playing it.
pub struct GameSession {
    state: GameState,
    seats: Vec<Seat>,
}

impl std::fmt::Debug for GameSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GameSession")
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

impl GameSession {
    /// Builds a session from exactly one seat per player.
    pub fn new(seats: Vec<Seat>) -> Result<Self, EngineError> {
        if seats.len() != PLAYER_COUNT {
            return Err(EngineError::WrongSeatCount(seats.len()));
        }
        Ok(GameSession {
            state: GameState::new(),
            seats,
        })
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Places initial fleets: two snake-ordered placement turns, two
    /// ships each on an unoccupied level-1 system of the player's choice.
    pub fn setup(&mut self, sink: &mut dyn EventSink) -> Result<(), EngineError> {
        let forward: Vec<usize> = (0..self.seats.len()).collect();
        let reverse: Vec<usize> = forward.iter().rev().copied().collect();

        for turn_order in [forward, reverse] {
            for seat_idx in turn_order {
                let seat = &mut self.seats[seat_idx];
                let eligible = eligible_setup_cells(&self.state);
                let cell = seat
                    .strategy
                    .choose_setup_cell(seat.id, &eligible, &self.state)?;
                if !eligible.contains(&cell) {
                    return Err(EngineError::IllegalPlacement {
                        player: seat.id,
                        reason: format!("{} is not an unoccupied level-1 system", cell),
                    });
                }
                for _ in 0..SETUP_SHIPS_PER_TURN {
                    self.state.spawn_ship(seat.id, cell);
                }
                sink.log(
                    Some(seat.id),
                    Severity::Info,
                    &format!("{} places {} ships on {}", seat.name, SETUP_SHIPS_PER_TURN, cell),
                );
                sink.state_changed(&self.state);
            }
        }
        Ok(())
    }

    /// Resolves one round.
    pub fn run_round(
        &mut self,
        sink: &mut dyn EventSink,
    ) -> Result<[u32; PLAYER_COUNT], EngineError> {
        run_round(&mut self.state, &mut self.seats, sink)
    }

    /// Plays from the current position to the end of round 9. Runs setup
    /// first when no ships are on the map yet.
    pub fn run_game(&mut self, sink: &mut dyn EventSink) -> Result<FinalStandings, EngineError> {
        if self.state.live_ships().count() == 0 && !self.state.is_over() {
            self.setup(sink)?;
        }
        while !self.state.is_over() {
            self.run_round(sink)?;
        }
        Ok(self.standings())
    }

    /// Current standings; winners are whoever holds the top score.
    pub fn standings(&self) -> FinalStandings {
        let scores = self.state.scores();
        let best = scores.iter().copied().max().unwrap_or(0);
        let winners = crate::board::ALL_PLAYERS
            .iter()
            .copied()
            .filter(|p| scores[p.index()] == best)
            .collect();
        FinalStandings { scores, winners }
    }

    /// Serializes the session to a versioned snapshot document.
    pub fn snapshot(&self) -> Result<String, SnapshotError> {
        let names: Vec<&str> = self.seats.iter().map(|s| s.name.as_str()).collect();
        snapshot::encode(&self.state, &names)
    }

    /// Replaces the session's state with a decoded snapshot. Seat names
    /// from the snapshot are adopted; strategies stay as constructed.
    pub fn restore(&mut self, document: &str) -> Result<(), SnapshotError> {
        let (state, names) = snapshot::decode(document)?;
        for (seat, name) in self.seats.iter_mut().zip(names) {
            seat.name = name;
        }
        self.state = state;
        Ok(())
    }
}

/// Level-1 systems with no ships on them, the only legal setup targets.
pub fn eligible_setup_cells(state: &GameState) -> Vec<crate::board::CellId> {
    ALL_CELLS
        .iter()
        .copied()
        .filter(|&c| system_level(c) == 1 && state.occupant(c).is_none())
        .collect()
}
