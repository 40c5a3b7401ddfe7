//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `http` - reqwest lookup clients and the axum skill endpoint
//! - `mock` - configurable in-process doubles for tests

pub mod http;
pub mod mock;

pub use self::http::{
    skill_router, ExchangeRatesClient, ExchangeRatesConfig, RestCountriesClient,
    RestCountriesConfig, SkillAppState,
};
pub use mock::{MockCountryLookup, MockRateProvider};
