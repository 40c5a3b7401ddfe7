//! Application configuration module
//!
//! Type-safe configuration loading from environment variables using
//! the `config` and `dotenvy` crates. Configuration is loaded with the
//! `CASH_EXCHANGE` prefix and nested values use double underscores as
//! separators.
//!
//! # Example
//!
//! ```no_run
//! use cash_exchange::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//! ```

mod error;
mod lookup;
mod server;

pub use error::{ConfigError, ValidationError};
pub use lookup::LookupConfig;
pub use server::ServerConfig;

use serde::Deserialize;

/// Root application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Server configuration (bind address, timeouts, log filter)
    #[serde(default)]
    pub server: ServerConfig,

    /// Outbound lookup configuration (service base URLs, timeouts)
    #[serde(default)]
    pub lookup: LookupConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// Loads a `.env` file if present, then reads environment
    /// variables with the `CASH_EXCHANGE` prefix:
    ///
    /// - `CASH_EXCHANGE__SERVER__PORT=8080` -> `server.port = 8080`
    /// - `CASH_EXCHANGE__LOOKUP__TIMEOUT_SECS=3` -> `lookup.timeout_secs = 3`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into the
    /// expected types.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("CASH_EXCHANGE")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.lookup.validate()?;
        Ok(())
    }
}
