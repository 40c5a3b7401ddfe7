//! ResolveCurrencyHandler - Map a country name to its currency.
//!
//! Checks the compiled-in table first, then queries the country
//! lookup port. Every failure mode on this path (service error, no
//! match, record without currencies) downgrades to an unresolved
//! quote; the dialog treats that as "country not understood" and
//! re-asks, so nothing here is fatal.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::domain::currency::CurrencyQuote;
use crate::ports::CountryLookup;

/// Handler resolving a validated, non-empty country name to a
/// [`CurrencyQuote`].
pub struct ResolveCurrencyHandler {
    country_lookup: Arc<dyn CountryLookup>,
}

impl ResolveCurrencyHandler {
    pub fn new(country_lookup: Arc<dyn CountryLookup>) -> Self {
        Self { country_lookup }
    }

    /// Resolves the country's currency, or an unresolved quote when
    /// no currency can be found. Never errors.
    pub async fn handle(&self, country: &str) -> CurrencyQuote {
        // Compiled-in countries bypass the network entirely.
        if let Some(quote) = CurrencyQuote::compiled_in(country) {
            debug!(country, code = %quote.code, "resolved currency from compiled-in table");
            return quote;
        }

        let records = match self.country_lookup.find_by_name(country).await {
            Ok(records) => records,
            Err(err) => {
                warn!(country, error = %err, "country lookup failed");
                return CurrencyQuote::unresolved();
            }
        };

        // First record, first listed currency is authoritative.
        let quote = records
            .first()
            .and_then(|record| record.currencies.first())
            .map(|entry| CurrencyQuote::new(entry.code.clone(), entry.name.clone()))
            .filter(CurrencyQuote::is_resolved)
            .unwrap_or_else(CurrencyQuote::unresolved);

        if quote.is_resolved() {
            debug!(country, code = %quote.code, "resolved currency");
        } else {
            warn!(country, "country lookup returned no usable currency");
        }

        quote
    }
}
