#![cfg(feature = "std")]

use std::io::{BufRead, Write};

use rand::Rng;

use crate::cli::{ask_replay, print_banner, Lang};
use crate::core::GameSession;
use crate::player::{play_round, CliPlayer, RoundOutcome};

const TITLE_WIDTH: usize = 50;
const NEW_GAME_WIDTH: usize = 30;

/// Results of every round played in one run.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize)]
pub struct GameSummary {
    pub rounds: Vec<RoundOutcome>,
}

impl GameSummary {
    /// Attempts of the rounds that ended with a correct guess.
    pub fn finished_attempts(&self) -> Vec<u32> {
        self.rounds
            .iter()
            .filter_map(|r| match r {
                RoundOutcome::Finished { attempts } => Some(*attempts),
                RoundOutcome::Abandoned { .. } => None,
            })
            .collect()
    }

    pub fn total_attempts(&self) -> u32 {
        self.rounds.iter().map(RoundOutcome::attempts).sum()
    }
}

/// Interactive driver: banners, one session per round, replay prompt.
pub struct Game<R, W, G> {
    input: R,
    output: W,
    rng: G,
    lang: Lang,
}

impl<R: BufRead, W: Write, G: Rng> Game<R, W, G> {
    pub fn new(input: R, output: W, rng: G, lang: Lang) -> Self {
        Self {
            input,
            output,
            rng,
            lang,
        }
    }

    /// Play rounds until the user declines a replay or input runs out.
    pub fn run(&mut self) -> anyhow::Result<GameSummary> {
        let lang = self.lang;
        let mut summary = GameSummary::default();

        print_banner(&mut self.output, lang.title(), TITLE_WIDTH)?;
        writeln!(self.output, "{}", lang.welcome())?;

        loop {
            writeln!(self.output, "{}", lang.intro())?;
            let mut session = GameSession::new(&mut self.rng);
            let mut player = CliPlayer::new(&mut self.input);
            let outcome = play_round(&mut session, &mut player, &mut self.output, lang)?;
            summary.rounds.push(outcome);

            if let RoundOutcome::Abandoned { .. } = outcome {
                break;
            }
            if !ask_replay(&mut self.input, &mut self.output, lang)? {
                break;
            }

            writeln!(self.output)?;
            print_banner(&mut self.output, lang.new_game(), NEW_GAME_WIDTH)?;
        }

        writeln!(self.output, "{}", lang.farewell())?;
        self.output.flush()?;
        log::debug!("played {} rounds", summary.rounds.len());
        Ok(summary)
    }

    /// Give back the output sink, e.g. to inspect what was written.
    pub fn into_output(self) -> W {
        self.output
    }
}
