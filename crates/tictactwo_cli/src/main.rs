//! Tic-tac-two terminal front end.

#![warn(missing_docs)]

mod cli;
mod command;
mod selfplay;
mod session;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use rand::{SeedableRng, rngs::StdRng};
use std::path::PathBuf;
use tictactwo::GameConfig;
use tracing::{debug, info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let config = load_config(&cli)?;

    match cli.command {
        Command::Play { ai, seed, json } => {
            let mut session = session::Session::new(config, ai.player(), make_rng(seed), json);
            let stdin = std::io::stdin();
            session.run(stdin.lock(), std::io::stdout().lock())
        }
        Command::Selfplay {
            games,
            max_turns,
            seed,
            json,
        } => {
            let summary = selfplay::run(config, games, max_turns, &mut make_rng(seed));
            selfplay::report(&summary, json, &mut std::io::stdout().lock())
        }
    }
}

/// Resolves the rule set: explicit file, then `$TICTACTWO_CONFIG`, then `--rules`.
#[instrument(skip(cli))]
fn load_config(cli: &Cli) -> Result<GameConfig> {
    let path = cli
        .config
        .clone()
        .or_else(|| std::env::var_os("TICTACTWO_CONFIG").map(PathBuf::from));

    let config = match path {
        Some(path) => GameConfig::from_file(&path)
            .with_context(|| format!("Loading rules from {}", path.display()))?,
        None => {
            let config = cli.rules.config();
            config.validate()?;
            config
        }
    };
    info!(?config, "Rules ready");
    Ok(config)
}

fn make_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => {
            debug!(seed, "Seeding AI");
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_os_rng(),
    }
}
