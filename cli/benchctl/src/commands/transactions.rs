//! Transactions load command: repeated GETs against the listing endpoint.

use std::time::Instant;

use anyhow::Result;
use clap::Args;
use tracing::{debug, info, warn};

use money_guid::Guid;

use crate::client::{ApiClient, TransactionsQuery};
use crate::config::Config;
use crate::error::CliError;
use crate::output::RunSummary;

use super::LoadArgs;

/// Default account exercised when none is given.
const DEFAULT_ACCOUNT: &str = "67f9ff8c-79ea-4f39-a86e-39fb1d9dfb92";

/// Default opaque pagination cursor.
const DEFAULT_CURSOR: &str = "MjAyMi0wMi0yMyAxNjo1Nzo0MC4zMDMzMSArMDAwMCBVVEMhMSF0cnVl";

#[derive(Debug, Args)]
pub struct TransactionsCommand {
    /// Account to list transactions for.
    #[arg(long, default_value = DEFAULT_ACCOUNT, value_parser = Guid::parse)]
    account: Guid,

    /// Pagination cursor to request.
    #[arg(long, default_value = DEFAULT_CURSOR)]
    cursor: String,

    /// Sort field index.
    #[arg(long, default_value = "1")]
    sort: String,

    /// Sort order.
    #[arg(long, default_value = "1")]
    order: String,

    #[command(flatten)]
    load: LoadArgs,
}

impl TransactionsCommand {
    pub async fn run(self, config: &Config) -> Result<()> {
        let client = ApiClient::new(config)?;
        let query = TransactionsQuery {
            cursor: self.cursor.clone(),
            sort: self.sort.clone(),
            order: self.order.clone(),
        };

        info!(
            account = %self.account,
            iterations = self.load.iterations,
            "starting transactions run"
        );

        let mut summary = RunSummary::new();
        for i in 0..self.load.iterations {
            let start = Instant::now();
            match client.get_transactions(&self.account, &query).await {
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
