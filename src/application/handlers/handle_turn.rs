//! HandleTurnHandler - Orchestrate one conversion-dialog turn.
//!
//! Drives the whole per-turn flow: extract the spoken slots, merge
//! them with the session bag, and either re-prompt or resolve the
//! conversion through the two external lookups. Every path produces a
//! complete [`TurnReply`]; recoverable failures become fixed apology
//! sentences rather than errors.

use std::collections::HashMap;
use std::sync::Arc;

use serde_json::Value;
use tracing::{info, warn};

use crate::domain::currency::{convert, ConversionResult};
use crate::domain::dialog::{merge_turn, MergeOutcome, SessionBag, TurnDecision, TurnSlots};
use crate::ports::{CountryLookup, RateProvider};

use super::fetch_rate::FetchRateHandler;
use super::resolve_currency::ResolveCurrencyHandler;

/// One inbound conversion turn, already unwrapped from the platform
/// envelope by the hosting adapter.
#[derive(Debug, Clone, Default)]
pub struct TurnCommand {
    /// True when the platform started a new conversation this turn.
    pub new_conversation: bool,
    /// Raw "Country" slot value, exactly as delivered.
    pub country_slot: Option<String>,
    /// Raw "Amount" slot value, exactly as delivered.
    pub amount_slot: Option<String>,
    /// Inbound session attribute bag; absent on a new conversation.
    pub attributes: Option<HashMap<String, Value>>,
}

/// The completed turn: reply text, session flag, updated bag.
#[derive(Debug, Clone, PartialEq)]
pub struct TurnReply {
    pub text: String,
    pub end_session: bool,
    pub attributes: HashMap<String, Value>,
}

impl From<TurnDecision> for TurnReply {
    fn from(decision: TurnDecision) -> Self {
        Self {
            text: decision.reply,
            end_session: decision.end_session,
            attributes: decision.bag.into_attributes(),
        }
    }
}

/// Handler for the conversion dialog turn.
pub struct HandleTurnHandler {
    resolve_currency: ResolveCurrencyHandler,
    fetch_rate: FetchRateHandler,
}

impl HandleTurnHandler {
    pub fn new(country_lookup: Arc<dyn CountryLookup>, rate_provider: Arc<dyn RateProvider>) -> Self {
        Self {
            resolve_currency: ResolveCurrencyHandler::new(country_lookup),
            fetch_rate: FetchRateHandler::new(rate_provider),
        }
    }

    /// Runs one turn to completion. Infallible: every recoverable
    /// failure maps to a spoken sentence, and nothing else can fail
    /// past envelope parsing (which the adapter owns).
    pub async fn handle(&self, cmd: TurnCommand) -> TurnReply {
        let slots = TurnSlots::extract(cmd.country_slot.as_deref(), cmd.amount_slot.as_deref());
        let inbound = SessionBag::from_attributes(cmd.attributes);

        let (outcome, outbound) = merge_turn(&slots, cmd.new_conversation, &inbound);
        info!(
            new_conversation = cmd.new_conversation,
            country_spoken = slots.country.is_some(),
            amount_spoken = slots.amount.is_some(),
            "merged turn slots"
        );

        let resolved = match outcome {
            MergeOutcome::PromptUsage => return TurnDecision::usage_prompt(outbound).into(),
            MergeOutcome::PromptCountry => return TurnDecision::country_prompt(outbound).into(),
            MergeOutcome::PromptAmount => return TurnDecision::amount_prompt(outbound).into(),
            MergeOutcome::Ready(resolved) => resolved,
        };

        info!(country = %resolved.country, amount = resolved.amount, "both slots resolved");

        let quote = self.resolve_currency.handle(&resolved.country).await;
        if !quote.is_resolved() {
            return TurnDecision::unknown_country(outbound).into();
        }

        let rate = match self.fetch_rate.handle(&quote.code).await {
            Ok(rate) => rate,
            Err(err) => {
                warn!(code = %quote.code, error = %err, "rate lookup failed");
                return TurnDecision::rate_unavailable(outbound).into();
            }
        };

        let result = ConversionResult {
            converted_value: convert(resolved.amount, rate),
            country: resolved.country,
            amount: resolved.amount,
            currency_display_name: quote.display_name,
        };
        info!(value = result.converted_value, code = %quote.code, "conversion complete");

        TurnDecision::converted(&result, outbound).into()
    }
}
