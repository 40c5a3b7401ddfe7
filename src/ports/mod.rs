//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `CountryLookup` - country name to currency candidates
//! - `RateProvider` - latest USD-based exchange-rate table

mod country_lookup;
mod rate_provider;

pub use country_lookup::{CountryLookup, CountryLookupError, CountryRecord, CurrencyEntry};
pub use rate_provider::{RateError, RateProvider};
