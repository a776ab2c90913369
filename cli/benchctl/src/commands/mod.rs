//! CLI commands.

mod guid;
mod transactions;
mod transfer;

use std::time::Duration;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};

use crate::config::Config;

/// moneybench load driver - exercise the money-transfer API.
#[derive(Debug, Parser)]
#[command(name = "mb")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Base URL of the target API.
    #[arg(long, global = true, env = "MB_API_URL")]
    api_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Drive the transactions listing endpoint.
    Transactions(transactions::TransactionsCommand),

    /// Drive the transfer endpoint with minted GUIDs.
    Transfer(transfer::TransferCommand),

    /// Mint and validate GUIDs.
    Guid(guid::GuidCommand),
}

impl Cli {
    pub async fn run(self) -> Result<()> {
        let config = Config::resolve(self.api_url);

        match self.command {
            Commands::Transactions(cmd) => cmd.run(&config).await,
            Commands::Transfer(cmd) => cmd.run(&config).await,
            Commands::Guid(cmd) => cmd.run(),
        }
    }
}

/// Iteration and pacing arguments shared by the load commands.
#[derive(Debug, Args)]
pub struct LoadArgs {
    /// Number of iterations to run.
    #[arg(long, default_value_t = 1000)]
    pub iterations: usize,

    /// Seconds to sleep between iterations.
    #[arg(long, default_value_t = 1.0)]
    pub pace: f64,
}

impl LoadArgs {
    pub fn pace_duration(&self) -> Duration {
        Duration::from_secs_f64(self.pace.max(0.0))
    }
}
