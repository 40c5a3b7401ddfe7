//! Domain layer containing the dialog and currency logic.
//!
//! # Module Organization
//!
//! - `dialog` - Slot extraction, session merge, and the per-turn state machine
//! - `currency` - Currency quotes, rate tables, and conversion arithmetic
//!
//! Everything here is pure; external lookups live behind `crate::ports`.

pub mod currency;
pub mod dialog;
