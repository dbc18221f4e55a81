//! Uniform-random strategy.
//!
//! Selects uniformly among the offered legal options with no ordering
//! significance. Seedable for deterministic tests and batch simulation.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::board::{CellId, CommandOrdering, GameState, PlayerId, ShipId};
use crate::error::EngineError;
use crate::movegen::{ExploreMove, ExterminateMove};

use super::Strategy;

/// Autonomous player: picks uniformly at random among legal moves.
pub struct RandomStrategy {
    rng: SmallRng,
}

impl RandomStrategy {
    pub fn new() -> Self {
        RandomStrategy {
            rng: SmallRng::from_entropy(),
        }
    }

    pub fn seeded(seed: u64) -> Self {
        RandomStrategy {
            rng: SmallRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomStrategy {
    fn default() -> Self {
        Self::new()
    }
}

impl Strategy for RandomStrategy {
    fn choose_ordering(
        &mut self,
        _player: PlayerId,
        _state: &GameState,
    ) -> Result<CommandOrdering, EngineError> {
        let perms = CommandOrdering::permutations();
        Ok(perms[self.rng.gen_range(0..perms.len())])
    }

    fn choose_setup_cell(
        &mut self,
        _player: PlayerId,
        eligible: &[CellId],
        _state: &GameState,
    ) -> Result<CellId, EngineError> {
        Ok(eligible[self.rng.gen_range(0..eligible.len())])
    }

    fn choose_expand(
        &mut self,
        _player: PlayerId,
        options: &[ShipId],
        _state: &GameState,
    ) -> Result<ShipId, EngineError> {
        Ok(options[self.rng.gen_range(0..options.len())])
    }

    fn choose_explore(
        &mut self,
        _player: PlayerId,
        options: &[ExploreMove],
        _state: &GameState,
    ) -> Result<ExploreMove, EngineError> {
        Ok(options[self.rng.gen_range(0..options.len())].clone())
    }

    fn choose_exterminate(
        &mut self,
        _player: PlayerId,
        options: &[ExterminateMove],
        _state: &GameState,
    ) -> Result<ExterminateMove, EngineError> {
        Ok(options[self.rng.gen_range(0..options.len())].clone())
    }
}
