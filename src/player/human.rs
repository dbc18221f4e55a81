//! Interactive strategy backed by a blocking request/response channel.
//!
//! The engine side sends an `InputRequest` carrying the full legal option
//! set, then blocks until the external actor answers with exactly one
//! `InputResponse`. A response outside the legal set is answered with a
//! rejection notice and a re-issued request, never coerced. At most one
//! request per player is outstanding at a time. Dropping the endpoint
//! unblocks the engine with a fatal `InputAborted`.

use std::sync::mpsc::{channel, Receiver, Sender};

use crate::board::{Action, CellId, CommandOrdering, GameState, PlayerId, ShipId};
use crate::error::EngineError;
use crate::movegen::{ExploreMove, ExterminateMove};

use super::Strategy;

/// A request for one decision, carrying everything the external actor
/// needs to present the choice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputRequest {
    /// Pick a permutation of the three actions for this round.
    CommandOrdering { player: PlayerId },
    /// Pick one of the eligible cells for an initial fleet placement.
    SetupCell {
        player: PlayerId,
        eligible: Vec<CellId>,
    },
    /// Pick the ship to expand from.
    ExpandShip {
        player: PlayerId,
        options: Vec<ShipId>,
    },
    /// Pick one Explore move.
    ExploreMove {
        player: PlayerId,
        options: Vec<ExploreMove>,
    },
    /// Pick one Exterminate move.
    ExterminateMove {
        player: PlayerId,
        options: Vec<ExterminateMove>,
    },
    /// The previous response was illegal; a fresh request follows.
    Rejected { player: PlayerId, reason: String },
}

/// The external actor's answer to the most recent request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputResponse {
    /// Answer to `CommandOrdering`.
    Ordering([Action; 3]),
    /// Answer to every other request: index into the offered option list.
    Choice(usize),
}

/// Engine-side half: implements `Strategy` by round-tripping requests.
pub struct HumanStrategy {
    requests: Sender<InputRequest>,
    responses: Receiver<InputResponse>,
}

/// External-actor-side half: receives requests, sends responses.
pub struct InputEndpoint {
    requests: Receiver<InputRequest>,
    responses: Sender<InputResponse>,
}

/// Creates a connected strategy/endpoint pair.
pub fn input_channel() -> (HumanStrategy, InputEndpoint) {
    let (req_tx, req_rx) = channel();
    let (resp_tx, resp_rx) = channel();
    (
        HumanStrategy {
            requests: req_tx,
            responses: resp_rx,
        },
        InputEndpoint {
            requests: req_rx,
            responses: resp_tx,
        },
    )
}

impl InputEndpoint {
    /// Blocks for the next request. `None` means the engine side is gone.
    pub fn recv(&self) -> Option<InputRequest> {
        self.requests.recv().ok()
    }

    /// Sends a response. Returns false if the engine side is gone.
    pub fn send(&self, response: InputResponse) -> bool {
        self.responses.send(response).is_ok()
    }
}

impl HumanStrategy {
    fn exchange(
        &mut self,
        request: InputRequest,
        player: PlayerId,
        awaiting: &'static str,
    ) -> Result<InputResponse, EngineError> {
        let aborted = || EngineError::InputAborted { player, awaiting };
        self.requests.send(request).map_err(|_| aborted())?;
        self.responses.recv().map_err(|_| aborted())
    }

    fn reject(&mut self, player: PlayerId, reason: String) {
        // Delivery failure surfaces on the next exchange.
        let _ = self.requests.send(InputRequest::Rejected { player, reason });
    }

    /// Repeats a request until the response is a valid index into an
    /// option list of length `len`.
    fn choose_index(
        &mut self,
        make_request: impl Fn() -> InputRequest,
        len: usize,
        player: PlayerId,
        awaiting: &'static str,
    ) -> Result<usize, EngineError> {
        loop {
            match self.exchange(make_request(), player, awaiting)? {
                InputResponse::Choice(index) if index < len => return Ok(index),
                InputResponse::Choice(index) => {
                    self.reject(
                        player,
                        format!("choice {} is out of range (0..{})", index, len),
                    );
                }
                InputResponse::Ordering(_) => {
                    self.reject(player, format!("expected a {} choice", awaiting));
                }
            }
        }
    }
}

impl Strategy for HumanStrategy {
    fn choose_ordering(
        &mut self,
        player: PlayerId,
        _state: &GameState,
    ) -> Result<CommandOrdering, EngineError> {
        loop {
            let response = self.exchange(
                InputRequest::CommandOrdering { player },
                player,
                "command ordering",
            )?;
            match response {
                InputResponse::Ordering(actions) => match CommandOrdering::new(actions) {
                    Some(ordering) => return Ok(ordering),
                    None => self.reject(
                        player,
                        "ordering repeats an action; pick each exactly once".to_string(),
                    ),
                },
                InputResponse::Choice(_) => {
                    self.reject(player, "expected a command ordering".to_string());
                }
            }
        }
    }

    fn choose_setup_cell(
        &mut self,
        player: PlayerId,
        eligible: &[CellId],
        _state: &GameState,
    ) -> Result<CellId, EngineError> {
        let cells = eligible.to_vec();
        let index = self.choose_index(
            || InputRequest::SetupCell {
                player,
                eligible: cells.clone(),
            },
            eligible.len(),
            player,
            "setup cell",
        )?;
        Ok(eligible[index])
    }

    fn choose_expand(
        &mut self,
        player: PlayerId,
        options: &[ShipId],
        _state: &GameState,
    ) -> Result<ShipId, EngineError> {
        let ships = options.to_vec();
        let index = self.choose_index(
            || InputRequest::ExpandShip {
                player,
                options: ships.clone(),
            },
            options.len(),
            player,
            "expand selection",
        )?;
        Ok(options[index])
    }

    fn choose_explore(
        &mut self,
        player: PlayerId,
        options: &[ExploreMove],
        _state: &GameState,
    ) -> Result<ExploreMove, EngineError> {
        let moves = options.to_vec();
        let index = self.choose_index(
            || InputRequest::ExploreMove {
                player,
                options: moves.clone(),
            },
            options.len(),
            player,
            "explore selection",
        )?;
        Ok(options[index].clone())
    }

    fn choose_exterminate(
        &mut self,
        player: PlayerId,
        options: &[ExterminateMove],
        _state: &GameState,
    ) -> Result<ExterminateMove, EngineError> {
        let moves = options.to_vec();
        let index = self.choose_index(
            || InputRequest::ExterminateMove {
                player,
                options: moves.clone(),
            },
            options.len(),
            player,
            "exterminate selection",
        )?;
        Ok(options[index].clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::HUB;
    use std::thread;

    #[test]
    fn ordering_roundtrip() {
        let (mut strategy, endpoint) = input_channel();
        let state = GameState::new();

        let responder = thread::spawn(move || {
            match endpoint.recv() {
                Some(InputRequest::CommandOrdering { player }) => {
                    assert_eq!(player, PlayerId::Red);
                }
                other => panic!("unexpected request: {:?}", other),
            }
            endpoint.send(InputResponse::Ordering([
                Action::Explore,
                Action::Expand,
                Action::Exterminate,
            ]));
        });

        let ordering = strategy.choose_ordering(PlayerId::Red, &state).unwrap();
        assert_eq!(ordering.efficiency(Action::Explore), 3);
        responder.join().unwrap();
    }

    #[test]
    fn invalid_ordering_is_reprompted() {
        let (mut strategy, endpoint) = input_channel();
        let state = GameState::new();

        let responder = thread::spawn(move || {
            assert!(matches!(
                endpoint.recv(),
                Some(InputRequest::CommandOrdering { .. })
            ));
            // Repeats an action: must be rejected.
            endpoint.send(InputResponse::Ordering([
                Action::Expand,
                Action::Expand,
                Action::Explore,
            ]));
            assert!(matches!(endpoint.recv(), Some(InputRequest::Rejected { .. })));
            assert!(matches!(
                endpoint.recv(),
                Some(InputRequest::CommandOrdering { .. })
            ));
            endpoint.send(InputResponse::Ordering([
                Action::Expand,
                Action::Explore,
                Action::Exterminate,
            ]));
        });

        let ordering = strategy.choose_ordering(PlayerId::Blue, &state).unwrap();
        assert_eq!(ordering.efficiency(Action::Expand), 3);
        responder.join().unwrap();
    }

    #[test]
    fn out_of_range_choice_is_reprompted() {
        let (mut strategy, endpoint) = input_channel();
        let mut state = GameState::new();
        let ship = state.spawn_ship(PlayerId::Red, HUB);

        let responder = thread::spawn(move || {
            assert!(matches!(
                endpoint.recv(),
                Some(InputRequest::ExpandShip { .. })
            ));
            endpoint.send(InputResponse::Choice(5));
            assert!(matches!(endpoint.recv(), Some(InputRequest::Rejected { .. })));
            assert!(matches!(
                endpoint.recv(),
                Some(InputRequest::ExpandShip { .. })
            ));
            endpoint.send(InputResponse::Choice(0));
        });

        let chosen = strategy
            .choose_expand(PlayerId::Red, &[ship], &state)
            .unwrap();
        assert_eq!(chosen, ship);
        responder.join().unwrap();
    }

    #[test]
    fn dropped_endpoint_aborts_with_fatal_error() {
        let (mut strategy, endpoint) = input_channel();
        let state = GameState::new();
        drop(endpoint);

        let err = strategy.choose_ordering(PlayerId::Red, &state).unwrap_err();
        assert_eq!(
            err,
            EngineError::InputAborted {
                player: PlayerId::Red,
                awaiting: "command ordering",
            }
        );
    }
}
