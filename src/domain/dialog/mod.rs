//! Multi-turn slot-filling dialog core.
//!
//! Pure logic only: slot extraction, session merge, and the per-turn
//! decision state machine. External lookups live behind ports and are
//! driven by the application layer.

mod controller;
mod merge;
pub mod prompts;
mod session;
mod slots;

pub use controller::{DialogState, TurnDecision};
pub use merge::{merge_turn, MergeOutcome, ResolvedSlots};
pub use session::{SessionBag, AMOUNT_KEY, COUNTRY_KEY};
pub use slots::TurnSlots;
