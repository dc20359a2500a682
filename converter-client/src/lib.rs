//! # Converter Client
//!
//! A typed client for the public exchange-rate API
//! (`GET {base_url}/{BASE}` returning the latest rates for `BASE`).

use std::time::Duration;

use async_trait::async_trait;
use converter_types::{CurrencyCode, RateFetchError, RateProvider, RateTable, RatesResponse};
use reqwest::Client;

/// Default endpoint of the rate provider.
pub const DEFAULT_BASE_URL: &str = "https://api.exchangerate-api.com/v4/latest";

/// Error type for client operations.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error: {status}")]
    Api { status: u16 },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<ClientError> for RateFetchError {
    fn from(err: ClientError) -> Self {
        match err {
            ClientError::Http(e) => RateFetchError::Transport(e.to_string()),
            ClientError::Api { status } => RateFetchError::Status(status),
            ClientError::Json(e) => RateFetchError::Malformed(e.to_string()),
        }
    }
}

/// Exchange-rate API client.
pub struct ExchangeRateClient {
    base_url: String,
    http: Client,
}

impl ExchangeRateClient {
    /// Creates a new client.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http: Client::new(),
        }
    }

    /// Creates a client whose requests give up after `timeout`.
    pub fn with_timeout(
        base_url: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, ClientError> {
        let http = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetches the raw latest-rates payload for `base`.
    pub async fn latest(&self, base: CurrencyCode) -> Result<RatesResponse, ClientError> {
        let url = format!("{}/{}", self.base_url, base.code());
        tracing::debug!(%url, "fetching exchange rates");
        let resp = self.http.get(url).send().await?;
        self.handle_response(resp).await
    }

    async fn handle_response(
        &self,
        resp: reqwest::Response,
    ) -> Result<RatesResponse, ClientError> {
        let status = resp.status();
        if status.is_success() {
            let body = resp.text().await?;
            Ok(serde_json::from_str(&body)?)
        } else {
            Err(ClientError::Api {
                status: status.as_u16(),
            })
        }
    }
}

#[async_trait]
impl RateProvider for ExchangeRateClient {
    async fn latest_rates(&self, base: CurrencyCode) -> Result<RateTable, RateFetchError> {
        let response = self.latest(base).await?;
        response.into_table(base)
    }
}
