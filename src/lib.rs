#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(feature = "std")]
pub mod cli;
pub mod core;
#[cfg(feature = "std")]
mod game;
#[cfg(feature = "std")]
mod logging;
pub mod player;
pub mod prelude;

pub use crate::core::*;
#[cfg(feature = "std")]
pub use cli::{ask_replay, parse_guess, parse_replay, read_guess, Lang};
#[cfg(feature = "std")]
pub use game::{Game, GameSummary};
#[cfg(feature = "std")]
pub use logging::init_logging;
pub use player::*;
