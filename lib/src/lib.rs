//! Plays Wordle against an external game by accumulating letter restrictions from the board,
//! filtering a dictionary with them, and ranking the remaining candidates to choose each guess.
//!
//! The game itself is reached through the [`BoardObserver`] and [`Submitter`] traits, so the same
//! [`SolverSession`] can drive a web page, a terminal, or the in-memory [`SimulatedGame`].

mod board;
mod data;
mod engine;
mod game;
mod ranking;
mod restrictions;
mod results;
mod sources;

pub use board::*;
pub use data::WordBank;
pub use engine::*;
pub use game::SimulatedGame;
pub use ranking::*;
pub use results::*;
pub use sources::*;

/// Building blocks used by the solver, for use when implementing custom rankers.
pub mod details {
    pub use crate::data::LocatedLetter;
    pub use crate::restrictions::*;
}
