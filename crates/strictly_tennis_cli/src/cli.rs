//! Command-line interface for strictly_tennis.

use clap::{Parser, Subcommand};

/// Strictly Tennis - score a single tennis game point by point
#[derive(Parser, Debug)]
#[command(name = "strictly_tennis")]
#[command(about = "Score a single tennis game point by point", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML configuration file (defaults are used if missing)
    #[arg(short, long, default_value = "strictly_tennis.toml", global = true)]
    pub config: std::path::PathBuf,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play interactively, reading one point winner per line from stdin
    Play,

    /// Replay a sequence of point winners and print each score
    Replay {
        /// Point winners in order (PLAYER_ONE or PLAYER_TWO)
        #[arg(required = true)]
        winners: Vec<String>,
    },

    /// Render a JSON-encoded score
    Show {
        /// Score as JSON, e.g. '{"Forty":{"player":"PLAYER_ONE","other_point":"FIFTEEN"}}'
        score: String,
    },
}
