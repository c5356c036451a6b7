//! Player trait and implementations
//!
//! This module defines the Player trait and provides concrete implementations:
//! - CliPlayer: Interactive player reading guesses from a line-based input
//! - AiPlayer: Bisecting player used by the simulator
//! - play_round: Runs one session against any Player

use crate::core::{GuessResult, InputError};

/// Source of guesses for a session.
pub trait Player {
    /// Produce the next guess, or the reason none could be produced.
    fn next_guess(&mut self) -> Result<u8, InputError>;

    /// Inform the player how its last guess compared with the target.
    fn handle_result(&mut self, _guess: u8, _result: GuessResult) {}
}

pub mod ai;
pub use ai::AiPlayer;

#[cfg(feature = "std")]
pub mod cli;
#[cfg(feature = "std")]
pub use cli::CliPlayer;

#[cfg(feature = "std")]
pub mod node;
#[cfg(feature = "std")]
pub use node::{play_round, RoundOutcome};
