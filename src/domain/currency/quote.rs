//! Currency identification for a resolved country.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// Countries whose currency is compiled in and never looked up over
/// the network. Checked before any external call, not as a fallback
/// after one.
static COMPILED_IN_CURRENCIES: Lazy<HashMap<&'static str, (&'static str, &'static str)>> =
    Lazy::new(|| {
        let mut map = HashMap::new();
        map.insert("india", ("INR", "Indian rupee"));
        map
    });

/// The currency of a resolved country: a 3-letter code plus the name
/// used in the spoken reply.
///
/// Invariant: `code` is empty exactly when the country could not be
/// resolved to a currency.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrencyQuote {
    pub code: String,
    pub display_name: String,
}

impl CurrencyQuote {
    /// Creates a quote for a resolved currency.
    pub fn new(code: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            display_name: display_name.into(),
        }
    }

    /// The quote for a country no currency could be found for.
    pub fn unresolved() -> Self {
        Self::default()
    }

    /// True when the country resolved to a currency.
    pub fn is_resolved(&self) -> bool {
        !self.code.is_empty()
    }

    /// Looks the country up in the compiled-in table.
    pub fn compiled_in(country: &str) -> Option<Self> {
        COMPILED_IN_CURRENCIES
            .get(country.trim().to_ascii_lowercase().as_str())
            .map(|(code, name)| Self::new(*code, *name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compiled_in_india() {
        let quote = CurrencyQuote::compiled_in("India").expect("India is compiled in");
        assert_eq!(quote.code, "INR");
        assert_eq!(quote.display_name, "Indian rupee");
        assert!(quote.is_resolved());
    }

    #[test]
    fn test_compiled_in_is_case_insensitive() {
        assert!(CurrencyQuote::compiled_in("india").is_some());
        assert!(CurrencyQuote::compiled_in(" INDIA ").is_some());
    }

    #[test]
    fn test_compiled_in_misses_other_countries() {
        assert_eq!(CurrencyQuote::compiled_in("Japan"), None);
        assert_eq!(CurrencyQuote::compiled_in(""), None);
    }

    #[test]
    fn test_unresolved_has_empty_code() {
        let quote = CurrencyQuote::unresolved();
        assert!(!quote.is_resolved());
        assert!(quote.code.is_empty());
    }
}
