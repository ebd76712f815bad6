use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// listing-health: listing freshness and health checks
///
/// Reads collected listing snapshots and reports what each location should do
/// next, which alerts are open, and how an account is doing overall.
#[derive(Parser, Debug)]
#[command(name = "listing-health")]
#[command(version, about, long_about)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Path to custom config file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Message language override (en, ru)
    #[arg(short, long, global = true)]
    pub locale: Option<String>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show recommendations for one location
    #[command(alias = "r")]
    Recommend {
        /// Location identifier
        location_id: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show typed alerts for one location
    #[command(alias = "a")]
    Alerts {
        /// Location identifier
        location_id: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Summarize the health of every location of an account
    #[command(alias = "s")]
    Summary {
        /// Account identifier
        account_id: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Re-evaluate an account periodically until interrupted
    #[command(alias = "w")]
    Watch {
        /// Account identifier
        account_id: String,

        /// Interval in seconds (default: config)
        #[arg(short, long)]
        interval: Option<u64>,
    },
}
