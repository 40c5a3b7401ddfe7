//! External lookup configuration
//!
//! Base URLs and timeouts for the two outbound services: country
//! information and USD exchange rates.

use std::time::Duration;

use serde::Deserialize;

use super::error::ValidationError;

/// Configuration for the outbound lookup services
#[derive(Debug, Clone, Deserialize)]
pub struct LookupConfig {
    /// Base URL of the country-information service
    #[serde(default = "default_country_base_url")]
    pub country_base_url: String,

    /// Base URL of the exchange-rate service
    #[serde(default = "default_rates_base_url")]
    pub rates_base_url: String,

    /// Per-request timeout in seconds for both lookups
    #[serde(default = "default_lookup_timeout")]
    pub timeout_secs: u64,
}

impl LookupConfig {
    /// Timeout as a [`Duration`]
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Validate lookup configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_base_url("lookup.country_base_url", &self.country_base_url)?;
        validate_base_url("lookup.rates_base_url", &self.rates_base_url)?;
        if self.timeout_secs == 0 || self.timeout_secs > 60 {
            return Err(ValidationError::InvalidTimeout);
        }
        Ok(())
    }
}

fn validate_base_url(field: &'static str, url: &str) -> Result<(), ValidationError> {
    if url.is_empty() {
        return Err(ValidationError::MissingRequired(field));
    }
    if !url.starts_with("http://") && !url.starts_with("https://") {
        return Err(ValidationError::InvalidBaseUrl(field));
    }
    Ok(())
}

impl Default for LookupConfig {
    fn default() -> Self {
        Self {
            country_base_url: default_country_base_url(),
            rates_base_url: default_rates_base_url(),
            timeout_secs: default_lookup_timeout(),
        }
    }
}

fn default_country_base_url() -> String {
    "https://restcountries.com/v2".to_string()
}

fn default_rates_base_url() -> String {
    "https://api.exchangerate.host".to_string()
}

fn default_lookup_timeout() -> u64 {
    5
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_validate() {
        assert!(LookupConfig::default().validate().is_ok());
    }

    #[test]
    fn test_empty_base_url_rejected() {
        let config = LookupConfig {
            country_base_url: String::new(),
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ValidationError::MissingRequired(_))
        ));
    }

    #[test]
    fn test_schemeless_base_url_rejected() {
        let config = LookupConfig {
            rates_base_url: "api.exchangerate.host".to_string(),
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ValidationError::InvalidBaseUrl(_))
        ));
    }

    #[test]
    fn test_excessive_timeout_rejected() {
        let config = LookupConfig {
            timeout_secs: 600,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ValidationError::InvalidTimeout)
        ));
    }
}
