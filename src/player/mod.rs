//! Player strategies.
//!
//! A seat is a fixed identity plus an injected strategy. Strategies are
//! polymorphic over interactive (blocks for external input) and
//! autonomous (uniform-random among legal moves) behavior behind one
//! trait; the scheduler never knows which kind it is driving.

pub mod human;
pub mod random;

use crate::board::{CellId, CommandOrdering, GameState, PlayerId, ShipId};
use crate::error::EngineError;
use crate::movegen::{ExploreMove, ExterminateMove};

pub use human::{input_channel, HumanStrategy, InputEndpoint, InputRequest, InputResponse};
pub use random::RandomStrategy;

/// Decision source for one seat.
///
/// Every `choose_*` method is handed a non-empty option set and must
/// return a member of it; the scheduler skips the call entirely when no
/// legal option exists. Interactive implementations re-prompt on bogus
/// external input rather than coercing it; autonomous ones cannot produce
/// an out-of-set choice by construction.
pub trait Strategy {
    /// Secretly picks this round's command ordering. Called once per
    /// round for every seat before any ordering is revealed.
    fn choose_ordering(
        &mut self,
        player: PlayerId,
        state: &GameState,
    ) -> Result<CommandOrdering, EngineError>;

    /// Picks a cell for an initial fleet placement.
    fn choose_setup_cell(
        &mut self,
        player: PlayerId,
        eligible: &[CellId],
        state: &GameState,
    ) -> Result<CellId, EngineError>;

    /// Picks the ship to expand from.
    fn choose_expand(
        &mut self,
        player: PlayerId,
        options: &[ShipId],
        state: &GameState,
    ) -> Result<ShipId, EngineError>;

    /// Picks the fleet and destination for one Explore.
    fn choose_explore(
        &mut self,
        player: PlayerId,
        options: &[ExploreMove],
        state: &GameState,
    ) -> Result<ExploreMove, EngineError>;

    /// Picks the attackers and target for one Exterminate.
    fn choose_exterminate(
        &mut self,
        player: PlayerId,
        options: &[ExterminateMove],
        state: &GameState,
    ) -> Result<ExterminateMove, EngineError>;
}

/// One seat at the table: identity, display name, and decision source.
pub struct Seat {
    pub id: PlayerId,
    pub name: String,
    pub strategy: Box<dyn Strategy>,
}

impl Seat {
    pub fn new(id: PlayerId, name: impl Into<String>, strategy: Box<dyn Strategy>) -> Self {
        Seat {
            id,
            name: name.into(),
            strategy,
        }
    }
}
