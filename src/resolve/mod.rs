//! Turn resolution.
//!
//! Executors apply one validated atomic move each, combat restores the
//! mono-occupancy invariant whenever two players' fleets meet, the round
//! scheduler sequences order collection and the three action phases, and
//! scoring converts sector control into points.

pub mod actions;
pub mod combat;
pub mod round;
pub mod score;

pub use actions::{apply_expand, apply_explore, apply_exterminate};
pub use combat::{battle_losses, resolve_contested, BattleOutcome};
pub use round::{next_round_phase, run_round, RoundPhase};
pub use score::{apply_round_scores, sector_controller, sector_strengths};
