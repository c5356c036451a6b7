//! Core guessing game logic (no_std compatible)
//!
//! Target selection, guess evaluation and the session state machine. Nothing
//! here touches the console; randomness is always passed in by the caller.

pub mod common;
pub mod config;
pub mod evaluator;
pub mod picker;
pub mod session;

// Re-export commonly used types
pub use common::{GameError, GuessResult, InputError};
pub use config::*;
pub use evaluator::{check_guess, evaluate};
pub use picker::pick_target;
pub use session::{GameSession, SessionState, SessionStatus};
