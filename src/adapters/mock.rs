//! Mock port implementations for testing.
//!
//! Configurable doubles for the two lookup ports, allowing dialog and
//! handler tests to run without touching real services. Both track
//! call counts for verification.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use crate::domain::currency::RateTable;
use crate::ports::{
    CountryLookup, CountryLookupError, CountryRecord, CurrencyEntry, RateError, RateProvider,
};

/// What the mock country lookup should do when called.
#[derive(Debug, Clone)]
enum CountryBehavior {
    Records(Vec<CountryRecord>),
    NoMatch,
    Fail,
}

/// Mock country lookup for testing.
#[derive(Debug)]
pub struct MockCountryLookup {
    behavior: CountryBehavior,
    calls: AtomicUsize,
}

impl MockCountryLookup {
    /// Resolves any name to one country with one currency.
    pub fn with_country(name: &str, code: &str, currency_name: &str) -> Self {
        Self {
            behavior: CountryBehavior::Records(vec![CountryRecord {
                name: name.to_string(),
                currencies: vec![CurrencyEntry {
                    code: code.to_string(),
                    name: currency_name.to_string(),
                }],
            }]),
            calls: AtomicUsize::new(0),
        }
    }

    /// Returns a matching country that lists no currencies.
    pub fn without_currencies(name: &str) -> Self {
        Self {
            behavior: CountryBehavior::Records(vec![CountryRecord {
                name: name.to_string(),
                currencies: Vec::new(),
            }]),
            calls: AtomicUsize::new(0),
        }
    }

    /// Reports no match for any name.
    pub fn unresolvable() -> Self {
        Self {
            behavior: CountryBehavior::NoMatch,
            calls: AtomicUsize::new(0),
        }
    }

    /// Fails every call, as an unreachable service would.
    pub fn failing() -> Self {
        Self {
            behavior: CountryBehavior::Fail,
            calls: AtomicUsize::new(0),
        }
    }

    /// Number of lookup calls made so far.
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CountryLookup for MockCountryLookup {
    async fn find_by_name(&self, name: &str) -> Result<Vec<CountryRecord>, CountryLookupError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.behavior {
            CountryBehavior::Records(records) => Ok(records.clone()),
            CountryBehavior::NoMatch => Err(CountryLookupError::NoMatch(name.to_string())),
            CountryBehavior::Fail => Err(CountryLookupError::Request(
                "connection refused".to_string(),
            )),
        }
    }
}

/// What the mock rate provider should do when called.
#[derive(Debug, Clone)]
enum RateBehavior {
    Table(RateTable),
    Fail,
}

/// Mock rate provider for testing.
#[derive(Debug)]
pub struct MockRateProvider {
    behavior: RateBehavior,
    calls: AtomicUsize,
}

impl MockRateProvider {
    /// Serves a one-entry USD table.
    pub fn with_rate(code: &str, multiplier: f64) -> Self {
        let mut rates = HashMap::new();
        rates.insert(code.to_string(), multiplier);
        Self::with_table(RateTable {
            base: "USD".to_string(),
            date: None,
            rates,
        })
    }

    /// Serves the given table verbatim.
    pub fn with_table(table: RateTable) -> Self {
        Self {
            behavior: RateBehavior::Table(table),
            calls: AtomicUsize::new(0),
        }
    }

    /// Serves a USD table that lists no currencies.
    pub fn empty_table() -> Self {
        Self::with_table(RateTable {
            base: "USD".to_string(),
            date: None,
            rates: HashMap::new(),
        })
    }

    /// Fails every fetch, as a down rate service would.
    pub fn failing() -> Self {
        Self {
            behavior: RateBehavior::Fail,
            calls: AtomicUsize::new(0),
        }
    }

    /// Number of fetches made so far.
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl RateProvider for MockRateProvider {
    async fn latest_usd_table(&self) -> Result<RateTable, RateError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.behavior {
            RateBehavior::Table(table) => Ok(table.clone()),
            RateBehavior::Fail => Err(RateError::Request("connection timed out".to_string())),
        }
    }
}
