//! Country Lookup Port - Interface for the country-information service.
//!
//! Maps a spoken country name to candidate country records, each
//! carrying the currencies in use there. The first record's first
//! currency entry is authoritative for the dialog; that policy lives
//! in the application layer, not here.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors from the country-information lookup. All of them are
/// recoverable for the dialog: the caller downgrades any failure to
/// "country not understood".
#[derive(Debug, Clone, Error)]
pub enum CountryLookupError {
    #[error("country service request failed: {0}")]
    Request(String),

    #[error("malformed country service response: {0}")]
    Malformed(String),

    #[error("no country matches '{0}'")]
    NoMatch(String),
}

/// One candidate country returned by the service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountryRecord {
    /// Official name of the country.
    pub name: String,
    /// Currencies in use, in the service's listed order.
    pub currencies: Vec<CurrencyEntry>,
}

/// One currency listed for a country.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrencyEntry {
    /// 3-letter currency code, e.g. "JPY".
    pub code: String,
    /// Display name used in the spoken reply, e.g. "Japanese yen".
    pub name: String,
}

/// Port for querying country information by name.
///
/// Implementations connect to an external country-information service
/// (or a test double) and translate its wire format into
/// [`CountryRecord`]s.
#[async_trait]
pub trait CountryLookup: Send + Sync {
    /// Finds candidate countries for a spoken name. An empty result
    /// and [`CountryLookupError::NoMatch`] are equivalent for callers.
    async fn find_by_name(&self, name: &str) -> Result<Vec<CountryRecord>, CountryLookupError>;
}
