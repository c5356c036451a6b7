use crate::core::{GuessResult, InputError, MAX_TARGET, MIN_TARGET};

use super::Player;

/// Player that halves the remaining range after every answer.
#[derive(Debug, Clone)]
pub struct AiPlayer {
    low: u8,
    high: u8,
}

impl AiPlayer {
    pub fn new() -> Self {
        Self {
            low: MIN_TARGET,
            high: MAX_TARGET,
        }
    }

    /// Inclusive range the target can still be in.
    pub fn bounds(&self) -> (u8, u8) {
        (self.low, self.high)
    }
}

impl Default for AiPlayer {
    fn default() -> Self {
        Self::new()
    }
}

impl Player for AiPlayer {
    fn next_guess(&mut self) -> Result<u8, InputError> {
        if self.low > self.high {
            // Answers were inconsistent with any single target.
            return Err(InputError::ReadFailure);
        }
        Ok(self.low + (self.high - self.low) / 2)
    }

    fn handle_result(&mut self, guess: u8, result: GuessResult) {
        match result {
            GuessResult::TooHigh => self.high = guess.saturating_sub(1),
            GuessResult::TooLow => self.low = guess.saturating_add(1),
            GuessResult::Correct => {
                self.low = guess;
                self.high = guess;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_guess_is_midpoint() {
        let mut ai = AiPlayer::new();
        assert_eq!(ai.next_guess(), Ok(50));
    }

    #[test]
    fn narrows_after_each_answer() {
        let mut ai = AiPlayer::new();
        ai.handle_result(50, GuessResult::TooHigh);
        assert_eq!(ai.bounds(), (1, 49));
        assert_eq!(ai.next_guess(), Ok(25));
        ai.handle_result(25, GuessResult::TooLow);
        assert_eq!(ai.bounds(), (26, 49));
    }

    #[test]
    fn gives_up_on_contradictory_answers() {
        let mut ai = AiPlayer::new();
        ai.handle_result(1, GuessResult::TooHigh);
        assert_eq!(ai.next_guess(), Err(InputError::ReadFailure));
    }
}
