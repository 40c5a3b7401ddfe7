//! Currency identification, rate tables, and conversion arithmetic.

mod conversion;
mod quote;
mod rate;

pub use conversion::{convert, ConversionResult};
pub use quote::CurrencyQuote;
pub use rate::RateTable;
