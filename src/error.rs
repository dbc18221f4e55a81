//! Engine error taxonomy.
//!
//! Illegal moves are rejected at the executor boundary, never silently
//! corrected. Input channel failures are fatal for the round and
//! propagate to the caller; no partial-round resume is attempted.

use thiserror::Error;

use crate::board::{Action, PlayerId};

/// Errors surfaced by the turn resolution engine.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EngineError {
    /// A selection outside the move generator's returned set.
    #[error("illegal {action} move for {player}: {reason}")]
    IllegalMove {
        player: PlayerId,
        action: Action,
        reason: String,
    },

    /// A setup placement outside the eligible cell set.
    #[error("illegal setup placement for {player}: {reason}")]
    IllegalPlacement { player: PlayerId, reason: String },

    /// The input channel for an interactive player disconnected while
    /// the engine was blocked on it.
    #[error("input channel for {player} closed while awaiting {awaiting}")]
    InputAborted {
        player: PlayerId,
        awaiting: &'static str,
    },

    /// A round was requested after round 9 completed.
    #[error("game is over; no further rounds may be resolved")]
    GameOver,

    /// The session roster did not have exactly one strategy per seat.
    #[error("expected 3 seats, got {0}")]
    WrongSeatCount(usize),
}
