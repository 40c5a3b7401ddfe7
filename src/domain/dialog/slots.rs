//! Slot extraction from the turn's raw intent payload.
//!
//! The voice platform delivers slot values as optional raw strings. A
//! missing, empty, or unparsable value means the user did not speak
//! that slot this turn; extraction signals absence rather than failing.

use serde::{Deserialize, Serialize};

/// Raw slot values spoken in the current turn, after extraction.
///
/// `None` for a field means "not spoken this turn", never an error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnSlots {
    /// Country name as spoken, trimmed. Empty input becomes `None`.
    pub country: Option<String>,
    /// Dollar amount as a positive integer. Non-numeric or zero input
    /// becomes `None`.
    pub amount: Option<u32>,
}

impl TurnSlots {
    /// Extracts slot values from the raw strings the platform delivered.
    pub fn extract(country: Option<&str>, amount: Option<&str>) -> Self {
        Self {
            country: extract_country(country),
            amount: extract_amount(amount),
        }
    }

    /// A turn in which neither slot was spoken.
    pub fn empty() -> Self {
        Self::default()
    }

    /// True when neither slot was spoken this turn.
    pub fn is_empty(&self) -> bool {
        self.country.is_none() && self.amount.is_none()
    }
}

fn extract_country(raw: Option<&str>) -> Option<String> {
    let trimmed = raw?.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

fn extract_amount(raw: Option<&str>) -> Option<u32> {
    // The dialog needs a positive dollar amount; zero carries no more
    // information than an unfilled slot and re-prompts the same way.
    match raw?.trim().parse::<u32>() {
        Ok(0) | Err(_) => None,
        Ok(amount) => Some(amount),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_both_present() {
        let slots = TurnSlots::extract(Some("Japan"), Some("5"));
        assert_eq!(slots.country.as_deref(), Some("Japan"));
        assert_eq!(slots.amount, Some(5));
        assert!(!slots.is_empty());
    }

    #[test]
    fn test_extract_trims_country() {
        let slots = TurnSlots::extract(Some("  New Zealand "), None);
        assert_eq!(slots.country.as_deref(), Some("New Zealand"));
    }

    #[test]
    fn test_extract_empty_country_is_absent() {
        let slots = TurnSlots::extract(Some(""), Some("5"));
        assert_eq!(slots.country, None);

        let slots = TurnSlots::extract(Some("   "), Some("5"));
        assert_eq!(slots.country, None);
    }

    #[test]
    fn test_extract_missing_values_are_absent() {
        let slots = TurnSlots::extract(None, None);
        assert!(slots.is_empty());
        assert_eq!(slots, TurnSlots::empty());
    }

    #[test]
    fn test_extract_non_numeric_amount_is_absent() {
        let slots = TurnSlots::extract(Some("Japan"), Some("five"));
        assert_eq!(slots.amount, None);
    }

    #[test]
    fn test_extract_zero_amount_is_absent() {
        let slots = TurnSlots::extract(None, Some("0"));
        assert_eq!(slots.amount, None);
    }

    #[test]
    fn test_extract_negative_amount_is_absent() {
        let slots = TurnSlots::extract(None, Some("-3"));
        assert_eq!(slots.amount, None);
    }

    #[test]
    fn test_extract_amount_with_whitespace() {
        let slots = TurnSlots::extract(None, Some(" 42 "));
        assert_eq!(slots.amount, Some(42));
    }
}
