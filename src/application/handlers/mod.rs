//! Application handlers.
//!
//! One handler per operation: currency resolution, rate fetching, and
//! the per-turn dialog orchestration that composes the other two.

pub mod fetch_rate;
pub mod handle_turn;
pub mod resolve_currency;

pub use fetch_rate::FetchRateHandler;
pub use handle_turn::{HandleTurnHandler, TurnCommand, TurnReply};
pub use resolve_currency::ResolveCurrencyHandler;
