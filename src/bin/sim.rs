use guessing::{AiPlayer, GameSession, Lang, play_round, RoundOutcome};
use rand::{rngs::SmallRng, SeedableRng};
use serde_json::json;

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 3 {
        eprintln!("Usage: {} <seed> <rounds>", args[0]);
        std::process::exit(1);
    }
    let seed: u64 = args[1].parse()?;
    let rounds: usize = args[2].parse()?;

    let mut rng = SmallRng::seed_from_u64(seed);
    let mut sink = std::io::sink();
    let mut attempts = Vec::with_capacity(rounds);

    for _ in 0..rounds {
        let mut session = GameSession::new(&mut rng);
        let mut player = AiPlayer::new();
        match play_round(&mut session, &mut player, &mut sink, Lang::En)? {
            RoundOutcome::Finished { attempts: n } => attempts.push(n),
            RoundOutcome::Abandoned { attempts: n } => {
                return Err(anyhow::anyhow!("AI gave up after {} attempts", n));
            }
        }
    }

    let result = json!({
        "seed": seed,
        "rounds": attempts,
        "total_attempts": attempts.iter().sum::<u32>(),
        "max_attempts": attempts.iter().copied().max(),
    });

    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
