//! HTTP adapters - outbound lookup clients and the inbound skill endpoint.

mod exchange_rates;
mod rest_countries;
pub mod skill;

pub use exchange_rates::{ExchangeRatesClient, ExchangeRatesConfig};
pub use rest_countries::{RestCountriesClient, RestCountriesConfig};
pub use skill::{skill_router, SkillAppState};
