use guessing::{play_round, AiPlayer, GameSession, Lang, RoundOutcome, MAX_AI_ATTEMPTS};
use proptest::prelude::*;

proptest! {
    /// The bisecting player finds every target within the attempt bound.
    #[test]
    fn ai_always_finishes(target in 1i64..=100) {
        let mut session = GameSession::with_target(target).unwrap();
        let mut player = AiPlayer::new();
        let mut sink = std::io::sink();
        let outcome = play_round(&mut session, &mut player, &mut sink, Lang::En).unwrap();
        match outcome {
            RoundOutcome::Finished { attempts } => prop_assert!(attempts <= MAX_AI_ATTEMPTS),
            other => prop_assert!(false, "unexpected outcome {:?}", other),
        }
        prop_assert!(session.is_finished());
    }
}

#[test]
fn ai_first_guess_is_midpoint() {
    let mut session = GameSession::with_target(50).unwrap();
    let mut player = AiPlayer::new();
    let mut out: Vec<u8> = Vec::new();
    let outcome = play_round(&mut session, &mut player, &mut out, Lang::En).unwrap();
    assert_eq!(outcome, RoundOutcome::Finished { attempts: 1 });
}
