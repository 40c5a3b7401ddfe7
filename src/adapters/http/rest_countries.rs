//! REST Countries adapter - CountryLookup over the public country API.
//!
//! Queries `GET {base}/name/{country}` and maps the returned candidate
//! list to port records. A 404 from the service means no country
//! matched the spoken name.
//!
//! # Configuration
//!
//! ```ignore
//! let config = RestCountriesConfig::new("https://restcountries.com/v2")
//!     .with_timeout(Duration::from_secs(5));
//!
//! let client = RestCountriesClient::new(config);
//! ```

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url};
use serde::Deserialize;
use tracing::debug;

use crate::ports::{CountryLookup, CountryLookupError, CountryRecord, CurrencyEntry};

/// Configuration for the REST Countries adapter.
#[derive(Debug, Clone)]
pub struct RestCountriesConfig {
    /// Base URL of the country-information service.
    pub base_url: String,
    /// Request timeout; a hung call becomes a lookup failure.
    pub timeout: Duration,
}

impl RestCountriesConfig {
    /// Creates a configuration for the given base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: Duration::from_secs(5),
        }
    }

    /// Sets the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// CountryLookup implementation over the REST Countries API.
pub struct RestCountriesClient {
    config: RestCountriesConfig,
    client: Client,
}

impl RestCountriesClient {
    /// Creates a new client with the given configuration.
    pub fn new(config: RestCountriesConfig) -> Self {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .expect("Failed to create HTTP client");

        Self { config, client }
    }

    /// Builds the by-name endpoint URL, percent-encoding the spoken
    /// country name.
    fn name_url(&self, country: &str) -> Result<Url, CountryLookupError> {
        let base = format!("{}/", self.config.base_url.trim_end_matches('/'));
        Url::parse(&base)
            .and_then(|url| url.join(&format!("name/{country}")))
            .map_err(|err| CountryLookupError::Request(err.to_string()))
    }
}

#[async_trait]
impl CountryLookup for RestCountriesClient {
    async fn find_by_name(&self, name: &str) -> Result<Vec<CountryRecord>, CountryLookupError> {
        let url = self.name_url(name)?;
        debug!(%url, "querying country information");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|err| CountryLookupError::Request(err.to_string()))?;

        if response.status() == StatusCode::NOT_FOUND {
            return Err(CountryLookupError::NoMatch(name.to_string()));
        }
        if !response.status().is_success() {
            return Err(CountryLookupError::Request(format!(
                "country service returned {}",
                response.status()
            )));
        }

        let countries: Vec<WireCountry> = response
            .json()
            .await
            .map_err(|err| CountryLookupError::Malformed(err.to_string()))?;

        Ok(countries.into_iter().map(WireCountry::into_record).collect())
    }
}

/// Wire format of one country record.
#[derive(Debug, Deserialize)]
struct WireCountry {
    #[serde(default)]
    name: String,
    #[serde(default)]
    currencies: Vec<WireCurrency>,
}

/// Wire format of one currency entry. The service occasionally omits
/// fields for territories without a formal currency.
#[derive(Debug, Deserialize)]
struct WireCurrency {
    #[serde(default)]
    code: Option<String>,
    #[serde(default)]
    name: Option<String>,
}

impl WireCountry {
    fn into_record(self) -> CountryRecord {
        let currencies = self
            .currencies
            .into_iter()
            .filter_map(|currency| {
                let code = currency.code.filter(|code| !code.is_empty())?;
                let name = currency.name.unwrap_or_else(|| code.clone());
                Some(CurrencyEntry { code, name })
            })
            .collect();

        CountryRecord {
            name: self.name,
            currencies,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_country_parses_service_shape() {
        let wire: Vec<WireCountry> = serde_json::from_str(
            r#"[{
                "name": "Japan",
                "capital": "Tokyo",
                "currencies": [{"code": "JPY", "name": "Japanese yen", "symbol": "¥"}]
            }]"#,
        )
        .unwrap();

        let record = wire.into_iter().next().unwrap().into_record();
        assert_eq!(record.name, "Japan");
        assert_eq!(
            record.currencies,
            vec![CurrencyEntry {
                code: "JPY".to_string(),
                name: "Japanese yen".to_string(),
            }]
        );
    }

    #[test]
    fn test_wire_country_drops_codeless_currencies() {
        let wire: WireCountry = serde_json::from_str(
            r#"{"name": "Somewhere", "currencies": [{"name": "Unnamed scrip"}, {"code": ""}]}"#,
        )
        .unwrap();

        assert!(wire.into_record().currencies.is_empty());
    }

    #[test]
    fn test_wire_country_tolerates_missing_currencies() {
        let wire: WireCountry = serde_json::from_str(r#"{"name": "Somewhere"}"#).unwrap();
        assert!(wire.into_record().currencies.is_empty());
    }

    #[test]
    fn test_name_url_encodes_spaces() {
        let client = RestCountriesClient::new(RestCountriesConfig::new("https://example.test/v2"));
        let url = client.name_url("New Zealand").unwrap();
        assert_eq!(url.as_str(), "https://example.test/v2/name/New%20Zealand");
    }
}
