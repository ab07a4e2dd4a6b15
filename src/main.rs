use anyhow::Context;
use monopoly_engine::core::{GameConfig, StdConsole};
use monopoly_engine::rules::{GameBuilder, GameResult};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Optional dice seed, for replaying a session.
const SEED_VAR: &str = "MONOPOLY_SEED";

fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let mut config = GameConfig::two_player();
    if let Ok(raw) = std::env::var(SEED_VAR) {
        let seed = raw
            .trim()
            .parse::<u64>()
            .with_context(|| format!("{SEED_VAR} must be an unsigned integer, got {raw:?}"))?;
        config.seed = Some(seed);
    }

    let mut game = GameBuilder::new()
        .config(config)
        .build_seeded(StdConsole::new())
        .context("failed to set up the game")?;

    match game.run() {
        Ok(GameResult::Winner(id)) => info!(winner = %game.player(id).name, "finished"),
        Ok(GameResult::NoWinner) => info!("finished without a winner"),
        Err(err) => {
            info!(%err, rounds = game.round(), "session ended early");
            println!("\n{err}");
        }
    }

    Ok(())
}
