//! USD-based exchange-rate table.

use std::collections::HashMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A snapshot of multipliers relative to one US dollar, as of the
/// latest fetch. Transient: built fresh per invocation, never cached
/// across turns.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RateTable {
    /// Base currency the multipliers are relative to. Always "USD"
    /// for the tables this skill fetches.
    #[serde(default)]
    pub base: String,
    /// Publication date reported by the rate service, if any.
    #[serde(default)]
    pub date: Option<NaiveDate>,
    /// Open mapping from currency code to multiplier. An absent code
    /// means the service does not list that currency.
    #[serde(default)]
    pub rates: HashMap<String, f64>,
}

impl RateTable {
    /// Multiplier for the given code, with an explicit absent-key
    /// branch. "USD" is 1.0 by definition for a USD-based table and is
    /// typically not listed by the service; any other unlisted code
    /// returns `None` so the caller can surface a lookup failure
    /// instead of a misleading one-to-one answer.
    pub fn multiplier(&self, code: &str) -> Option<f64> {
        if code == "USD" {
            return Some(1.0);
        }
        self.rates.get(code).copied()
    }
}
