//! Merging the current turn's slots with values from prior turns.
//!
//! This is the heart of the multi-turn dialog: a pure function over
//! (turn slots, conversation-is-new flag, inbound bag) that decides
//! whether the conversation can proceed to resolution or must
//! re-prompt, and returns the updated bag. No I/O, no mutation of the
//! caller's bag.
//!
//! # Guarantees
//!
//! - The outbound bag never loses a key the inbound bag held; it only
//!   gains keys.
//! - [`MergeOutcome::Ready`] is only produced when both slots are
//!   simultaneously present.
//! - When both slots are missing at the same decision point, the
//!   country prompt wins.

use serde::{Deserialize, Serialize};

use super::session::SessionBag;
use super::slots::TurnSlots;

/// The turn's effective slot pair once merge completes. Both fields
/// are present by construction; external lookups only ever see this.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedSlots {
    pub country: String,
    pub amount: u32,
}

/// What the merge decided for this turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MergeOutcome {
    /// New conversation, nothing spoken: give the full usage prompt.
    PromptUsage,
    /// Country is still missing: ask for it.
    PromptCountry,
    /// Country is known but the amount is still missing: ask for it.
    PromptAmount,
    /// Both slots are present: proceed to resolution.
    Ready(ResolvedSlots),
}

/// Merges the current turn with the carried-over session state.
///
/// Returns the merge decision and the outbound bag. The inbound bag is
/// read-only; newly spoken values are stored in the outbound copy
/// through the bag's insert-if-absent API, so an already stored slot
/// is never rewritten.
pub fn merge_turn(
    slots: &TurnSlots,
    new_conversation: bool,
    inbound: &SessionBag,
) -> (MergeOutcome, SessionBag) {
    if new_conversation {
        merge_new_conversation(slots)
    } else {
        merge_continuing(slots, inbound)
    }
}

/// New conversation: values come only from the current turn.
fn merge_new_conversation(slots: &TurnSlots) -> (MergeOutcome, SessionBag) {
    let mut outbound = SessionBag::new();

    match (&slots.country, slots.amount) {
        (None, None) => (MergeOutcome::PromptUsage, outbound),
        (Some(country), None) => {
            outbound.store_country(country);
            (MergeOutcome::PromptAmount, outbound)
        }
        (None, Some(amount)) => {
            outbound.store_amount(amount);
            (MergeOutcome::PromptCountry, outbound)
        }
        // Both spoken in one turn: resolve immediately, nothing needs
        // to be carried over.
        (Some(country), Some(amount)) => (
            MergeOutcome::Ready(ResolvedSlots {
                country: country.clone(),
                amount,
            }),
            outbound,
        ),
    }
}

/// Continuing conversation: current-turn values win, bag values fill
/// the gaps, and newly spoken values are stored for later turns.
fn merge_continuing(slots: &TurnSlots, inbound: &SessionBag) -> (MergeOutcome, SessionBag) {
    let mut outbound = inbound.clone();

    let country = slots.country.clone().or_else(|| inbound.country());
    let amount = slots.amount.or_else(|| inbound.amount());

    if let Some(country) = &country {
        outbound.store_country(country);
    }
    if let Some(amount) = amount {
        outbound.store_amount(amount);
    }

    let outcome = match (country, amount) {
        // Country always takes precedence when both are missing.
        (None, _) => MergeOutcome::PromptCountry,
        (Some(_), None) => MergeOutcome::PromptAmount,
        (Some(country), Some(amount)) => MergeOutcome::Ready(ResolvedSlots { country, amount }),
    };

    (outcome, outbound)
}
