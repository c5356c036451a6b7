#![cfg(feature = "std")]

use std::io::Write;

use crate::cli::Lang;
use crate::core::{GameSession, GuessResult, InputError};

use super::Player;

/// How a round ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum RoundOutcome {
    /// Target found after `attempts` valid guesses.
    Finished { attempts: u32 },
    /// Player ran out of input before finding the target.
    Abandoned { attempts: u32 },
}

impl RoundOutcome {
    pub fn attempts(&self) -> u32 {
        match self {
            RoundOutcome::Finished { attempts } | RoundOutcome::Abandoned { attempts } => {
                *attempts
            }
        }
    }
}

/// Drive `session` to completion with guesses from `player`, reporting on `out`.
pub fn play_round<P, W>(
    session: &mut GameSession,
    player: &mut P,
    out: &mut W,
    lang: Lang,
) -> anyhow::Result<RoundOutcome>
where
    P: Player + ?Sized,
    W: Write + ?Sized,
{
    log::debug!("round started");
    log::trace!("target is {}", session.target());

    while !session.is_finished() {
        write!(out, "{}", lang.guess_prompt())?;
        out.flush()?;

        let guess = match player.next_guess() {
            Ok(guess) => guess,
            Err(InputError::ReadFailure) => {
                writeln!(out)?;
                writeln!(out, "{}", lang.round_abandoned())?;
                log::warn!(
                    "input closed after {} attempts, abandoning round",
                    session.attempts()
                );
                return Ok(RoundOutcome::Abandoned {
                    attempts: session.attempts(),
                });
            }
            Err(e) => {
                log::trace!("rejected input: {}", e);
                writeln!(out, "{}", lang.input_error(&e))?;
                continue;
            }
        };

        let result = session.submit(guess).map_err(|e| anyhow::anyhow!(e))?;
        log::trace!("guess {} -> {:?}", guess, result);
        player.handle_result(guess, result);

        match result {
            GuessResult::TooHigh => writeln!(out, "{}", lang.too_high())?,
            GuessResult::TooLow => writeln!(out, "{}", lang.too_low())?,
            GuessResult::Correct => writeln!(out, "{}", lang.correct(session.attempts()))?,
        }
    }

    log::debug!("round finished in {} attempts", session.attempts());
    Ok(RoundOutcome::Finished {
        attempts: session.attempts(),
    })
}
