//! Rate Provider Port - Interface for the exchange-rate service.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::currency::RateTable;

/// Errors on the exchange-rate path. Every variant maps to the same
/// user-visible apology; the variants exist for logging.
#[derive(Debug, Clone, Error)]
pub enum RateError {
    #[error("rate service request failed: {0}")]
    Request(String),

    #[error("malformed rate service response: {0}")]
    Malformed(String),

    /// The fetched table does not list the requested code. Surfaced
    /// as a failure rather than a silent 1.0 fallback, which would
    /// produce a misleading one-to-one answer.
    #[error("no rate listed for currency {0}")]
    UnsupportedCurrency(String),
}

/// Port for fetching the latest USD-based rate table.
#[async_trait]
pub trait RateProvider: Send + Sync {
    /// Fetches the current table of multipliers relative to one US
    /// dollar. Called at most once per invocation; never cached.
    async fn latest_usd_table(&self) -> Result<RateTable, RateError>;
}
