use rand::Rng;

use super::{
    common::{GameError, GuessResult},
    config::in_range,
    evaluator::evaluate,
    picker::pick_target,
};

/// Where a session is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum SessionStatus {
    AwaitingGuess,
    Finished,
}

/// Serializable snapshot of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct SessionState {
    pub target: u8,
    pub attempts: u32,
    pub status: SessionStatus,
}

/// One round of the game: a hidden target and the attempts spent on it.
#[derive(Debug)]
pub struct GameSession {
    target: u8,
    attempts: u32,
    status: SessionStatus,
}

impl GameSession {
    /// Start a session with a target drawn from `rng`.
    pub fn new<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            target: pick_target(rng),
            attempts: 0,
            status: SessionStatus::AwaitingGuess,
        }
    }

    /// Start a session with a known target.
    pub fn with_target(target: i64) -> Result<Self, GameError> {
        if !in_range(target) {
            return Err(GameError::InvalidTarget(target));
        }
        Ok(Self {
            target: target as u8,
            attempts: 0,
            status: SessionStatus::AwaitingGuess,
        })
    }

    /// Rebuild a session from a snapshot taken with [`GameSession::state`].
    ///
    /// A finished snapshot must record at least one attempt, the correct guess.
    pub fn from_state(state: SessionState) -> Result<Self, GameError> {
        if state.status == SessionStatus::Finished && state.attempts == 0 {
            return Err(GameError::FinishedWithoutAttempts);
        }
        let mut session = Self::with_target(state.target as i64)?;
        session.attempts = state.attempts;
        session.status = state.status;
        Ok(session)
    }

    pub fn target(&self) -> u8 {
        self.target
    }

    /// Number of valid guesses submitted so far.
    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    pub fn status(&self) -> SessionStatus {
        self.status
    }

    pub fn is_finished(&self) -> bool {
        self.status == SessionStatus::Finished
    }

    /// Count a validated guess and compare it with the target.
    pub fn submit(&mut self, guess: u8) -> Result<GuessResult, GameError> {
        if self.is_finished() {
            return Err(GameError::SessionFinished);
        }
        self.attempts += 1;
        let result = evaluate(guess, self.target);
        if result.is_correct() {
            self.status = SessionStatus::Finished;
        }
        Ok(result)
    }

    pub fn state(&self) -> SessionState {
        SessionState {
            target: self.target,
            attempts: self.attempts,
            status: self.status,
        }
    }
}
