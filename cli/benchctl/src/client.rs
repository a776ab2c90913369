//! HTTP client for the money API under load.

use anyhow::{Context, Result};
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use reqwest::StatusCode;
use serde::Serialize;

use money_guid::Guid;

use crate::config::Config;
use crate::error::CliError;

/// Header carrying the idempotency key for write endpoints, so retried
/// transfers with the same key are not double-applied.
pub const IDEMPOTENCY_KEY_HEADER: &str = "Idempotency-Key";

/// Query parameters for the transactions listing endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct TransactionsQuery {
    pub cursor: String,
    pub sort: String,
    pub order: String,
}

/// Body of a transfer request.
#[derive(Debug, Clone, Serialize)]
pub struct TransferRequest {
    pub description: String,
    pub from: Guid,
    pub to: Guid,
    pub amount: i64,
}

/// Client wrapping the two endpoints the driver exercises.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Create a new API client for the configured target.
    pub fn new(config: &Config) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            base_url: config.api_url().trim_end_matches('/').to_string(),
        })
    }

    /// Build a URL for an endpoint.
    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// GET `/api/v1/money/{account}/transactions`.
    ///
    /// The driver only cares about the status; bodies are drained and
    /// discarded.
    pub async fn get_transactions(
        &self,
        account: &Guid,
        query: &TransactionsQuery,
    ) -> Result<StatusCode, CliError> {
        let response = self
            .client
            .get(self.url(&format!("/api/v1/money/{account}/transactions")))
            .query(query)
            .send()
            .await?;

        Ok(response.status())
    }

    /// POST `/api/v1/money/transfer` with an `Idempotency-Key` header.
    pub async fn post_transfer(
        &self,
        body: &TransferRequest,
        idempotency_key: &str,
    ) -> Result<StatusCode, CliError> {
        let response = self
            .client
            .post(self.url("/api/v1/money/transfer"))
            .header(IDEMPOTENCY_KEY_HEADER, idempotency_key)
            .json(body)
            .send()
            .await?;

        Ok(response.status())
    }
}
