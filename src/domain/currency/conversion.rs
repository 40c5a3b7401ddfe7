//! Conversion arithmetic.

use serde::{Deserialize, Serialize};

/// A completed USD-to-target conversion, ready to be spoken.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversionResult {
    pub country: String,
    pub amount: u32,
    /// Converted value rounded half-up to 2 decimal places.
    pub converted_value: f64,
    pub currency_display_name: String,
}

/// Multiplies the dollar amount by the rate and rounds half-up to 2
/// decimal places. Pure; inputs are validated upstream.
pub fn convert(amount: u32, rate: f64) -> f64 {
    round_to_cents(f64::from(amount) * rate)
}

fn round_to_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
