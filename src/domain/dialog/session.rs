//! Session attribute bag carried between conversation turns.
//!
//! The voice platform persists an opaque key/value map between the
//! turns of one conversation; this module wraps that map and enforces
//! the one invariant the dialog depends on: once a slot value has been
//! stored, it is never overwritten within a turn. The bag itself is
//! owned by the caller; the dialog only hands back an updated copy.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Bag key for the stored country name.
pub const COUNTRY_KEY: &str = "Country";
/// Bag key for the stored dollar amount.
pub const AMOUNT_KEY: &str = "Amount";

/// The opaque session attribute map, as round-tripped through the
/// platform envelope.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionBag(HashMap<String, Value>);

impl SessionBag {
    /// An empty bag, as at the start of a new conversation.
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps the inbound attribute map from the envelope. `None`
    /// (attributes absent on a new conversation) yields an empty bag.
    pub fn from_attributes(attributes: Option<HashMap<String, Value>>) -> Self {
        Self(attributes.unwrap_or_default())
    }

    /// Unwraps the bag for the outbound envelope.
    pub fn into_attributes(self) -> HashMap<String, Value> {
        self.0
    }

    /// The stored country name, if one was carried over from a prior
    /// turn. Empty strings are treated as absent.
    pub fn country(&self) -> Option<String> {
        match self.0.get(COUNTRY_KEY) {
            Some(Value::String(s)) if !s.trim().is_empty() => Some(s.clone()),
            _ => None,
        }
    }

    /// The stored amount, if one was carried over. Read tolerantly: a
    /// platform that stringifies attribute values still merges.
    pub fn amount(&self) -> Option<u32> {
        match self.0.get(AMOUNT_KEY) {
            Some(Value::Number(n)) => n.as_u64().and_then(|v| u32::try_from(v).ok()),
            Some(Value::String(s)) => s.trim().parse::<u32>().ok(),
            _ => None,
        }
    }

    /// Stores the country unless a readable one is already present. A
    /// stored slot is never replaced by a later or emptier value; an
    /// unreadable stored value may be repaired.
    pub fn store_country(&mut self, country: &str) {
        if country.trim().is_empty() {
            return;
        }
        if self.country().is_none() {
            self.0
                .insert(COUNTRY_KEY.to_string(), Value::String(country.to_string()));
        }
    }

    /// Stores the amount unless a readable one is already present.
    pub fn store_amount(&mut self, amount: u32) {
        if self.amount().is_none() {
            self.0.insert(AMOUNT_KEY.to_string(), Value::from(amount));
        }
    }

    /// Removes the stored country so the next turn re-asks for it.
    /// This is the one sanctioned way a slot leaves the bag.
    pub fn clear_country(&mut self) {
        self.0.remove(COUNTRY_KEY);
    }

    /// True when the bag holds a value under `key`.
    pub fn contains(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Number of stored attributes.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when nothing has been stored yet.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_absent_attributes_is_empty() {
        let bag = SessionBag::from_attributes(None);
        assert!(bag.is_empty());
        assert_eq!(bag.country(), None);
        assert_eq!(bag.amount(), None);
    }

    #[test]
    fn test_store_and_read_back() {
        let mut bag = SessionBag::new();
        bag.store_country("Japan");
        bag.store_amount(5);

        assert_eq!(bag.country().as_deref(), Some("Japan"));
        assert_eq!(bag.amount(), Some(5));
        assert_eq!(bag.len(), 2);
    }

    #[test]
    fn test_store_never_overwrites() {
        let mut bag = SessionBag::new();
        bag.store_country("Japan");
        bag.store_country("France");
        bag.store_amount(5);
        bag.store_amount(99);

        assert_eq!(bag.country().as_deref(), Some("Japan"));
        assert_eq!(bag.amount(), Some(5));
    }

    #[test]
    fn test_clear_country_removes_key() {
        let mut bag = SessionBag::new();
        bag.store_country("Atlantis");
        bag.store_amount(5);

        bag.clear_country();

        assert!(!bag.contains(COUNTRY_KEY));
        assert_eq!(bag.amount(), Some(5));
    }

    #[test]
    fn test_store_repairs_unreadable_value() {
        let mut attributes = HashMap::new();
        attributes.insert(COUNTRY_KEY.to_string(), json!(""));
        let mut bag = SessionBag::from_attributes(Some(attributes));

        bag.store_country("Japan");

        assert_eq!(bag.country().as_deref(), Some("Japan"));
    }

    #[test]
    fn test_store_ignores_empty_country() {
        let mut bag = SessionBag::new();
        bag.store_country("   ");

        assert!(!bag.contains(COUNTRY_KEY));
    }

    #[test]
    fn test_amount_read_from_string_value() {
        let mut attributes = HashMap::new();
        attributes.insert(AMOUNT_KEY.to_string(), json!("12"));
        let bag = SessionBag::from_attributes(Some(attributes));

        assert_eq!(bag.amount(), Some(12));
    }

    #[test]
    fn test_malformed_values_read_as_absent() {
        let mut attributes = HashMap::new();
        attributes.insert(COUNTRY_KEY.to_string(), json!(""));
        attributes.insert(AMOUNT_KEY.to_string(), json!({"nested": true}));
        let bag = SessionBag::from_attributes(Some(attributes));

        assert_eq!(bag.country(), None);
        assert_eq!(bag.amount(), None);
    }

    #[test]
    fn test_round_trips_through_attributes() {
        let mut bag = SessionBag::new();
        bag.store_country("Japan");
        bag.store_amount(5);

        let round_tripped = SessionBag::from_attributes(Some(bag.clone().into_attributes()));
        assert_eq!(round_tripped, bag);
    }
}
