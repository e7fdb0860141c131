//! Strictly Tennis - command-line driver
//!
//! Holds the single game in progress, asks who won each point, and prints
//! the score until the game is won.

#![warn(missing_docs)]

mod cli;
mod config;
mod session;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use config::CliConfig;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = CliConfig::load(&cli.config)?;
    init_tracing(&config);
    debug!(?config, "Configuration ready");

    let stdout = std::io::stdout();
    match cli.command {
        Command::Play => {
            info!("Starting interactive game");
            let stdin = std::io::stdin();
            session::play(stdin.lock(), stdout.lock(), &config)?;
        }
        Command::Replay { winners } => {
            session::replay(&winners, stdout.lock(), &config)?;
        }
        Command::Show { score } => {
            session::show(&score, stdout.lock())?;
        }
    }

    Ok(())
}

/// Logs go to stderr so stdout only carries scores.
fn init_tracing(config: &CliConfig) {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_filter())),
        )
        .with_writer(std::io::stderr)
        .init();
}
