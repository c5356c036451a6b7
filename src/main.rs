#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use guessing::{init_logging, Game, Lang};

#[cfg(feature = "std")]
use clap::Parser;
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::SeedableRng;

#[derive(Parser)]
#[command(author, version, about = "Guess the number between 1 and 100", long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[arg(long, help = "Fix RNG seed for reproducible targets (e.g., --seed 12345)")]
    seed: Option<u64>,
    #[arg(long, value_enum, env = "GUESSING_LANG", default_value_t = Lang::Zh)]
    lang: Lang,
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    let rng = if let Some(s) = cli.seed {
        log::info!("using fixed seed {}", s);
        SmallRng::seed_from_u64(s)
    } else {
        let mut seed_rng = rand::rng();
        SmallRng::from_rng(&mut seed_rng)
    };

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut game = Game::new(stdin.lock(), stdout.lock(), rng, cli.lang);
    let summary = game.run()?;
    log::info!(
        "session summary: {} rounds, {} attempts",
        summary.rounds.len(),
        summary.total_attempts()
    );
    Ok(())
}
