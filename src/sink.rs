//! Presentation boundary.
//!
//! The engine notifies a sink after every state mutation and emits
//! human-readable event log entries for action outcomes and error
//! conditions. Delivery is fire-and-forget: the engine never depends on
//! acknowledgement, and a sink that discards everything is valid.

use std::io::Write;

use crate::board::{GameState, PlayerId};

/// Severity of a log entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Warning,
    Error,
}

impl Severity {
    pub const fn label(self) -> &'static str {
        match self {
            Severity::Info => "info",
            Severity::Warning => "warn",
            Severity::Error => "error",
        }
    }
}

/// Receives state-change notifications and log entries from the engine.
pub trait EventSink {
    /// Called after every state mutation with the full current state.
    fn state_changed(&mut self, state: &GameState);

    /// Receives one human-readable event, optionally attributed to a
    /// player.
    fn log(&mut self, actor: Option<PlayerId>, severity: Severity, message: &str);
}

/// Discards everything. Used by bots-only batch simulation and tests.
#[derive(Debug, Default)]
pub struct NullSink;

impl EventSink for NullSink {
    fn state_changed(&mut self, _state: &GameState) {}
    fn log(&mut self, _actor: Option<PlayerId>, _severity: Severity, _message: &str) {}
}

/// Writes log lines to any `Write`; state changes are counted but not
/// rendered (drawing is the caller's concern).
pub struct WriterSink<W: Write> {
    out: W,
    updates: u64,
}

impl<W: Write> WriterSink<W> {
    pub fn new(out: W) -> Self {
        WriterSink { out, updates: 0 }
    }

    /// Number of state-change notifications received so far.
    pub fn updates(&self) -> u64 {
        self.updates
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> EventSink for WriterSink<W> {
    fn state_changed(&mut self, _state: &GameState) {
        self.updates += 1;
    }

    fn log(&mut self, actor: Option<PlayerId>, severity: Severity, message: &str) {
        // Fire-and-forget: a failed write must never disturb resolution.
        let _ = match actor {
            Some(player) => writeln!(self.out, "[{}] {}: {}", severity.label(), player, message),
            None => writeln!(self.out, "[{}] {}", severity.label(), message),
        };
    }
}
