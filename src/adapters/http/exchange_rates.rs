//! Exchange rates adapter - RateProvider over a fixer-style API.
//!
//! Fetches `GET {base}/latest?base=USD` and returns the table as-is.
//! The table is fetched fresh on every call; nothing is cached.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Url};
use tracing::debug;

use crate::domain::currency::RateTable;
use crate::ports::{RateError, RateProvider};

/// Configuration for the exchange-rate adapter.
#[derive(Debug, Clone)]
pub struct ExchangeRatesConfig {
    /// Base URL of the exchange-rate service.
    pub base_url: String,
    /// Request timeout; a hung call becomes a rate failure.
    pub timeout: Duration,
}

impl ExchangeRatesConfig {
    /// Creates a configuration for the given base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: Duration::from_secs(5),
        }
    }

    /// Sets the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// RateProvider implementation over a fixer-style latest-rates API.
pub struct ExchangeRatesClient {
    config: ExchangeRatesConfig,
    client: Client,
}

impl ExchangeRatesClient {
    /// Creates a new client with the given configuration.
    pub fn new(config: ExchangeRatesConfig) -> Self {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .expect("Failed to create HTTP client");

        Self { config, client }
    }

    fn latest_url(&self) -> Result<Url, RateError> {
        let base = format!("{}/", self.config.base_url.trim_end_matches('/'));
        Url::parse(&base)
            .and_then(|url| url.join("latest"))
            .map_err(|err| RateError::Request(err.to_string()))
    }
}

#[async_trait]
impl RateProvider for ExchangeRatesClient {
    async fn latest_usd_table(&self) -> Result<RateTable, RateError> {
        let url = self.latest_url()?;
        debug!(%url, "fetching latest USD rate table");

        let response = self
            .client
            .get(url)
            .query(&[("base", "USD")])
            .send()
            .await
            .map_err(|err| RateError::Request(err.to_string()))?;

        if !response.status().is_success() {
            return Err(RateError::Request(format!(
                "rate service returned {}",
                response.status()
            )));
        }

        response
            .json::<RateTable>()
            .await
            .map_err(|err| RateError::Malformed(err.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latest_url_preserves_base_path() {
        let client = ExchangeRatesClient::new(ExchangeRatesConfig::new("https://example.test/api/"));
        assert_eq!(
            client.latest_url().unwrap().as_str(),
            "https://example.test/api/latest"
        );
    }

    #[test]
    fn test_config_defaults_and_builder() {
        let config =
            ExchangeRatesConfig::new("https://example.test").with_timeout(Duration::from_secs(2));
        assert_eq!(config.timeout, Duration::from_secs(2));
        assert_eq!(config.base_url, "https://example.test");
    }
}
