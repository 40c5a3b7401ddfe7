//! Cash Exchange - USD exchange-rate voice skill backend
//!
//! This crate answers spoken queries like "how much is five dollars
//! worth in Japan" through a multi-turn slot-filling dialog: it merges
//! newly spoken values with session state from prior turns, resolves
//! the country to a currency, fetches a live USD rate, and speaks the
//! converted amount.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
