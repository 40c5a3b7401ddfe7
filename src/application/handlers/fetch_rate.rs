//! FetchRateHandler - Look up the USD multiplier for a currency code.

use std::sync::Arc;

use tracing::debug;

use crate::ports::{RateError, RateProvider};

/// Handler fetching the latest USD-based table and extracting the
/// multiplier for one currency code.
pub struct FetchRateHandler {
    rate_provider: Arc<dyn RateProvider>,
}

impl FetchRateHandler {
    pub fn new(rate_provider: Arc<dyn RateProvider>) -> Self {
        Self { rate_provider }
    }

    /// Returns the multiplier for `code` relative to one US dollar.
    ///
    /// A code the fetched table does not list (other than "USD"
    /// itself) is a [`RateError::UnsupportedCurrency`], not a silent
    /// 1.0 fallback.
    pub async fn handle(&self, code: &str) -> Result<f64, RateError> {
        let table = self.rate_provider.latest_usd_table().await?;
        debug!(code, listed = table.rates.len(), date = ?table.date, "fetched rate table");

        table
            .multiplier(code)
            .ok_or_else(|| RateError::UnsupportedCurrency(code.to_string()))
    }
}
