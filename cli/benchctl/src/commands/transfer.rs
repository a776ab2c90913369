//! Transfer load command: repeated POSTs with minted GUIDs.
//!
//! Unless pinned by flags, the `from`/`to` accounts and the idempotency key
//! are minted fresh each iteration, so every request is an independent
//! transfer from the target's point of view.

use std::time::Instant;

use anyhow::Result;
use clap::Args;
use tracing::{debug, info, warn};

use money_guid::Guid;

use crate::client::{ApiClient, TransferRequest};
use crate::config::Config;
use crate::error::CliError;
use crate::output::RunSummary;

use super::LoadArgs;

#[derive(Debug, Args)]
pub struct TransferCommand {
    /// Transfer description field.
    #[arg(long, default_value = "string")]
    description: String,

    /// Transfer amount.
    #[arg(long, default_value_t = 0)]
    amount: i64,

    /// Pin the source account instead of minting one per iteration.
    #[arg(long, value_parser = Guid::parse)]
    from: Option<Guid>,

    /// Pin the destination account instead of minting one per iteration.
    #[arg(long, value_parser = Guid::parse)]
    to: Option<Guid>,

    /// Pin the idempotency key instead of minting one per iteration.
    ///
    /// With a pinned key the target should apply the transfer once and
    /// treat the remaining iterations as replays.
    #[arg(long)]
    idempotency_key: Option<String>,

    #[command(flatten)]
    load: LoadArgs,
}

impl TransferCommand {
    pub async fn run(self, config: &Config) -> Result<()> {
        let client = ApiClient::new(config)?;

        info!(iterations = self.load.iterations, "starting transfer run");

        let mut summary = RunSummary::new();
        for i in 0..self.load.iterations {
            let body = TransferRequest {
                description: self.description.clone(),
                from: self.from.clone().unwrap_or_else(Guid::random),
                to: self.to.clone().unwrap_or_else(Guid::random),
                amount: self.amount,
            };
            let key = self
                .idempotency_key
                .clone()
                .unwrap_or_else(Guid::raw_random);

            let start = Instant::now();
            match client.post_transfer(&body, &key).await {
                Ok(status) => {
                    debug!(iteration = i, status = status.as_u16(), "request complete");
                    summary.record_status(status.as_u16(), start.elapsed());
                }
                Err(e) => {
                    warn!(iteration = i, error = %e, "request failed");
                    summary.record_network_error(start.elapsed());
                }
            }

            if i + 1 < self.load.iterations {
                tokio::time::sleep(self.load.pace_duration()).await;
            }
        }

        summary.print();
        if summary.target_unreachable() {
            return Err(CliError::TargetUnreachable(summary.iterations()).into());
        }
        Ok(())
    }
}
