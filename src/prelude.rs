//! Commonly used types and utilities for ease of import.

pub use crate::{check_guess, pick_target, AiPlayer, GameSession, GuessResult, InputError, Player};

#[cfg(feature = "std")]
pub use crate::{play_round, CliPlayer, Game, GameSummary, Lang, RoundOutcome};
