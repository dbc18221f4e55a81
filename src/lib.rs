//! Tri-Prime turn resolution engine library.
//!
//! Exposes the board representation, move generation, round resolver,
//! player strategies, session driver, and snapshot codec for use by
//! integration tests and the binary entry point.

pub mod board;
pub mod error;
pub mod movegen;
pub mod player;
pub mod resolve;
pub mod session;
pub mod sim;
pub mod sink;
pub mod snapshot;
