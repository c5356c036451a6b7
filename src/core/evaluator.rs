use core::cmp::Ordering;

use super::common::GuessResult;

/// Compare a guess with the target.
///
/// `Greater` means the guess was too high, `Less` too low, `Equal` a hit.
/// Total over all integers, so it can be used on unvalidated values too.
pub fn check_guess(guess: i64, target: i64) -> Ordering {
    guess.cmp(&target)
}

/// [`check_guess`] for in-range values, as a [`GuessResult`].
pub fn evaluate(guess: u8, target: u8) -> GuessResult {
    GuessResult::from(check_guess(guess as i64, target as i64))
}
