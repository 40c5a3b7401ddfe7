//! Binary entry point: load configuration, initialize tracing, wire
//! the lookup adapters, and serve the skill endpoint.

use std::sync::Arc;
use std::time::Duration;

use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::EnvFilter;

use cash_exchange::adapters::{
    skill_router, ExchangeRatesClient, ExchangeRatesConfig, RestCountriesClient,
    RestCountriesConfig, SkillAppState,
};
use cash_exchange::config::AppConfig;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    config.validate()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.server.log_level)),
        )
        .init();

    let country_lookup = Arc::new(RestCountriesClient::new(
        RestCountriesConfig::new(config.lookup.country_base_url.as_str())
            .with_timeout(config.lookup.timeout()),
    ));
    let rate_provider = Arc::new(ExchangeRatesClient::new(
        ExchangeRatesConfig::new(config.lookup.rates_base_url.as_str())
            .with_timeout(config.lookup.timeout()),
    ));

    let state = SkillAppState {
        country_lookup,
        rate_provider,
    };

    let app = skill_router()
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::new(Duration::from_secs(
            config.server.request_timeout_secs,
        )))
        .with_state(state);

    let addr = config.server.socket_addr()?;
    info!(%addr, "skill endpoint listening");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
