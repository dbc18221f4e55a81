//! Round scheduling.
//!
//! One round: reset per-round flags, collect every player's secret
//! command ordering (simultaneous reveal), resolve the three action
//! phases in fixed order, then score and advance. Within a phase each
//! player acts in seat order and performs up to `efficiency` atomic
//! moves, where efficiency is 3 minus the position of that action in the
//! player's own ordering. Running out of legal moves is an informational
//! skip, not an error; a broken input channel aborts the round.

use crate::board::{
    Action, CommandOrdering, GameState, PlayerId, ALL_ACTIONS, FINAL_ROUND, PLAYER_COUNT,
};
use crate::error::EngineError;
use crate::movegen::{expand_options, explore_options, exterminate_options};
use crate::player::Seat;
use crate::sink::{EventSink, Severity};

use super::actions::{apply_expand, apply_explore, apply_exterminate};
use super::score::apply_round_scores;

/// States of the per-round state machine, in transition order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundPhase {
    CollectingOrders,
    ResolvingExpand,
    ResolvingExplore,
    ResolvingExterminate,
    ScoringAndAdvancing,
    GameOver,
}

impl RoundPhase {
    /// The phase resolving a given action type.
    pub const fn resolving(action: Action) -> RoundPhase {
        match action {
            Action::Expand => RoundPhase::ResolvingExpand,
            Action::Explore => RoundPhase::ResolvingExplore,
            Action::Exterminate => RoundPhase::ResolvingExterminate,
        }
    }
}

/// Computes the successor phase. `round` is the counter as it stands
/// when the transition is taken; leaving `ScoringAndAdvancing` ends the
/// game once the counter has passed the final round.
pub fn next_round_phase(phase: RoundPhase, round: u8) -> RoundPhase {
    match phase {
        RoundPhase::CollectingOrders => RoundPhase::ResolvingExpand,
        RoundPhase::ResolvingExpand => RoundPhase::ResolvingExplore,
        RoundPhase::ResolvingExplore => RoundPhase::ResolvingExterminate,
        RoundPhase::ResolvingExterminate => RoundPhase::ScoringAndAdvancing,
        RoundPhase::ScoringAndAdvancing => {
            if round > FINAL_ROUND {
                RoundPhase::GameOver
            } else {
                RoundPhase::CollectingOrders
            }
        }
        RoundPhase::GameOver => RoundPhase::GameOver,
    }
}

/// Executes one full round and returns the updated scores.
pub fn run_round(
    state: &mut GameState,
    seats: &mut [Seat],
    sink: &mut dyn EventSink,
) -> Result<[u32; PLAYER_COUNT], EngineError> {
    if state.is_over() {
        return Err(EngineError::GameOver);
    }

    state.reset_round_flags();
    state.clear_orderings();
    sink.log(
        None,
        Severity::Info,
        &format!("round {} begins", state.round()),
    );

    collect_orderings(state, seats)?;

    for &action in &ALL_ACTIONS {
        sink.log(
            None,
            Severity::Info,
            &format!("resolving {} phase", action),
        );
        for seat in seats.iter_mut() {
            // Collection placed an ordering for every seat.
            let efficiency = state
                .ordering(seat.id)
                .map_or(0, |ordering| ordering.efficiency(action));
            resolve_seat_action(state, seat, action, efficiency, sink)?;
        }
    }

    apply_round_scores(state, sink);
    state.advance_round();
    sink.state_changed(state);
    Ok(state.scores())
}

/// Collects every seat's ordering before revealing any of them. A seat's
/// strategy only ever sees `&GameState`, which holds no ordering until
/// all have committed.
fn collect_orderings(state: &mut GameState, seats: &mut [Seat]) -> Result<(), EngineError> {
    let mut committed: Vec<(PlayerId, CommandOrdering)> = Vec::with_capacity(seats.len());
    for seat in seats.iter_mut() {
        let ordering = seat.strategy.choose_ordering(seat.id, state)?;
        committed.push((seat.id, ordering));
    }

    let mut revealed = [CommandOrdering::permutations()[0]; PLAYER_COUNT];
    for (player, ordering) in committed {
        revealed[player.index()] = ordering;
    }
    state.set_orderings(revealed);
    Ok(())
}

/// Runs up to `efficiency` atomic moves of one action for one seat,
/// stopping early when no legal move remains.
fn resolve_seat_action(
    state: &mut GameState,
    seat: &mut Seat,
    action: Action,
    efficiency: u8,
    sink: &mut dyn EventSink,
) -> Result<(), EngineError> {
    for _ in 0..efficiency {
        match action {
            Action::Expand => {
                let options = expand_options(seat.id, state);
                if options.is_empty() {
                    log_no_moves(sink, seat, action);
                    return Ok(());
                }
                let choice = seat.strategy.choose_expand(seat.id, &options, state)?;
                apply_expand(state, seat.id, choice, sink)?;
            }
            Action::Explore => {
                let options = explore_options(seat.id, state);
                if options.is_empty() {
                    log_no_moves(sink, seat, action);
                    return Ok(());
                }
                let choice = seat.strategy.choose_explore(seat.id, &options, state)?;
                apply_explore(state, seat.id, &choice, sink)?;
            }
            Action::Exterminate => {
                let options = exterminate_options(seat.id, state);
                if options.is_empty() {
                    log_no_moves(sink, seat, action);
                    return Ok(());
                }
                let choice = seat.strategy.choose_exterminate(seat.id, &options, state)?;
                apply_exterminate(state, seat.id, &choice, sink)?;
            }
        }
    }
    Ok(())
}

fn log_no_moves(sink: &mut dyn EventSink, seat: &Seat, action: Action) {
    sink.log(
        Some(seat.id),
        Severity::Info,
        &format!("no {} move available for {}", action, seat.name),
    );
}
