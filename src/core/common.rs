//! Common types for the guessing game: guess results and error kinds.

use core::cmp::Ordering;

use super::config::{MAX_TARGET, MIN_TARGET};

/// Outcome of comparing a guess with the target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum GuessResult {
    /// Guess is larger than the target.
    TooHigh,
    /// Guess is smaller than the target.
    TooLow,
    /// Guess matches the target.
    Correct,
}

impl GuessResult {
    /// Sign of the comparison: `1` too high, `-1` too low, `0` correct.
    pub fn signum(self) -> i8 {
        match self {
            GuessResult::TooHigh => 1,
            GuessResult::TooLow => -1,
            GuessResult::Correct => 0,
        }
    }

    pub fn is_correct(self) -> bool {
        matches!(self, GuessResult::Correct)
    }
}

impl From<Ordering> for GuessResult {
    fn from(ord: Ordering) -> Self {
        match ord {
            Ordering::Greater => GuessResult::TooHigh,
            Ordering::Less => GuessResult::TooLow,
            Ordering::Equal => GuessResult::Correct,
        }
    }
}

/// Errors produced while reading a guess. All of them are recoverable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputError {
    /// Input stream is closed or could not be read.
    ReadFailure,
    /// Line was blank after trimming.
    EmptyInput,
    /// Line was not an integer.
    NotANumber,
    /// Integer outside the playable range.
    OutOfRange(i64),
}

impl core::fmt::Display for InputError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            InputError::ReadFailure => write!(f, "Failed to read input"),
            InputError::EmptyInput => write!(f, "Input must not be empty"),
            InputError::NotANumber => write!(f, "Input is not a valid number"),
            InputError::OutOfRange(n) => write!(
                f,
                "Number {} is outside {}-{}",
                n, MIN_TARGET, MAX_TARGET
            ),
        }
    }
}

/// Errors returned by session operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    /// Injected target lies outside the playable range.
    InvalidTarget(i64),
    /// Guess submitted after the target was already found.
    SessionFinished,
    /// Snapshot claims the target was found without any guess.
    FinishedWithoutAttempts,
}

impl core::fmt::Display for GameError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            GameError::InvalidTarget(t) => write!(
                f,
                "Target {} is outside {}-{}",
                t, MIN_TARGET, MAX_TARGET
            ),
            GameError::SessionFinished => write!(f, "Session is already finished"),
            GameError::FinishedWithoutAttempts => {
                write!(f, "Finished session must have at least one attempt")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for InputError {}

#[cfg(feature = "std")]
impl std::error::Error for GameError {}
