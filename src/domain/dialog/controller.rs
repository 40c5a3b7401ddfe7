//! Dialog state machine and per-turn decisions.
//!
//! A turn always ends in exactly one [`TurnDecision`]: the spoken
//! reply, whether the session closes, and the session bag handed back
//! to the platform. The state names mirror the dialog's progress:
//!
//! ```text
//! AwaitingBothSlots -> AwaitingCountry -> AwaitingAmount
//!                   -> ReadyToResolve  -> Resolved | Failed
//! ```
//!
//! `Resolved` and `Failed` close the session; every `Awaiting*` state
//! is terminal for the turn only, and the next turn re-enters it as
//! reconstructed from the session bag.

use serde::{Deserialize, Serialize};

use super::prompts;
use super::session::SessionBag;
use crate::domain::currency::ConversionResult;

/// Where the dialog stands when the turn ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DialogState {
    /// New conversation, nothing spoken yet.
    AwaitingBothSlots,
    /// Country still missing (or cleared after a failed resolution).
    AwaitingCountry,
    /// Country known, amount still missing.
    AwaitingAmount,
    /// Both slots present; external resolution is in flight.
    ReadyToResolve,
    /// Conversion answered; conversation over.
    Resolved,
    /// Resolution failed irrecoverably for this conversation.
    Failed,
}

impl DialogState {
    /// True when the conversation ends with this state.
    pub fn ends_session(self) -> bool {
        matches!(self, DialogState::Resolved | DialogState::Failed)
    }
}

/// The complete outcome of one turn.
#[derive(Debug, Clone, PartialEq)]
pub struct TurnDecision {
    /// The sentence spoken back to the user. Never empty.
    pub reply: String,
    /// Whether the platform should end the session.
    pub end_session: bool,
    /// The updated bag to persist for the next turn.
    pub bag: SessionBag,
    /// The state the dialog ended the turn in.
    pub state: DialogState,
}

impl TurnDecision {
    /// Full usage prompt for a new conversation with nothing spoken.
    pub fn usage_prompt(bag: SessionBag) -> Self {
        Self {
            reply: prompts::USAGE.to_string(),
            end_session: false,
            bag,
            state: DialogState::AwaitingBothSlots,
        }
    }

    /// Re-prompt for the still-missing country.
    pub fn country_prompt(bag: SessionBag) -> Self {
        Self {
            reply: prompts::MISSING_COUNTRY.to_string(),
            end_session: false,
            bag,
            state: DialogState::AwaitingCountry,
        }
    }

    /// Re-prompt for the still-missing amount.
    pub fn amount_prompt(bag: SessionBag) -> Self {
        Self {
            reply: prompts::MISSING_AMOUNT.to_string(),
            end_session: false,
            bag,
            state: DialogState::AwaitingAmount,
        }
    }

    /// The country resolved to no known currency: clear the stored
    /// country so the next turn re-asks cleanly, and keep the session
    /// open.
    pub fn unknown_country(mut bag: SessionBag) -> Self {
        bag.clear_country();
        Self {
            reply: prompts::UNKNOWN_COUNTRY.to_string(),
            end_session: false,
            bag,
            state: DialogState::AwaitingCountry,
        }
    }

    /// Conversion succeeded: speak the answer and close the session.
    pub fn converted(result: &ConversionResult, bag: SessionBag) -> Self {
        Self {
            reply: format!(
                "In {}, {} dollars is worth {:.2} {}",
                result.country, result.amount, result.converted_value, result.currency_display_name
            ),
            end_session: true,
            bag,
            state: DialogState::Resolved,
        }
    }

    /// The rate lookup failed: apologize and close the session rather
    /// than looping.
    pub fn rate_unavailable(bag: SessionBag) -> Self {
        Self {
            reply: prompts::RATE_UNAVAILABLE.to_string(),
            end_session: true,
            bag,
            state: DialogState::Failed,
        }
    }

    /// Welcome reply for a bare launch of the skill.
    pub fn welcome() -> Self {
        Self {
            reply: prompts::WELCOME.to_string(),
            end_session: false,
            bag: SessionBag::new(),
            state: DialogState::AwaitingBothSlots,
        }
    }

    /// Usage reply for an explicit help request.
    pub fn help(bag: SessionBag) -> Self {
        Self {
            reply: prompts::USAGE.to_string(),
            end_session: false,
            bag,
            state: DialogState::AwaitingBothSlots,
        }
    }

    /// Goodbye reply for stop and cancel requests.
    pub fn goodbye() -> Self {
        Self {
            reply: prompts::GOODBYE.to_string(),
            end_session: true,
            bag: SessionBag::new(),
            state: DialogState::Resolved,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::dialog::session::COUNTRY_KEY;

    #[test]
    fn test_prompt_decisions_keep_session_open() {
        for decision in [
            TurnDecision::usage_prompt(SessionBag::new()),
            TurnDecision::country_prompt(SessionBag::new()),
            TurnDecision::amount_prompt(SessionBag::new()),
        ] {
            assert!(!decision.end_session);
            assert!(!decision.reply.is_empty());
            assert!(!decision.state.ends_session());
        }
    }

    #[test]
    fn test_usage_prompt_not_slot_specific() {
        let decision = TurnDecision::usage_prompt(SessionBag::new());
        assert_eq!(decision.reply, prompts::USAGE);
        assert_eq!(decision.state, DialogState::AwaitingBothSlots);
    }

    #[test]
    fn test_prompt_decisions_carry_the_bag() {
        let mut bag = SessionBag::new();
        bag.store_amount(5);

        let decision = TurnDecision::country_prompt(bag);
        assert_eq!(decision.bag.amount(), Some(5));
        assert_eq!(decision.state, DialogState::AwaitingCountry);
    }

    #[test]
    fn test_unknown_country_clears_stored_country() {
        let mut bag = SessionBag::new();
        bag.store_country("Atlantis");
        bag.store_amount(5);

        let decision = TurnDecision::unknown_country(bag);

        assert_eq!(decision.reply, prompts::UNKNOWN_COUNTRY);
        assert!(!decision.end_session);
        assert!(!decision.bag.contains(COUNTRY_KEY));
        assert_eq!(decision.bag.amount(), Some(5));
        assert_eq!(decision.state, DialogState::AwaitingCountry);
    }

    #[test]
    fn test_converted_formats_success_sentence() {
        let result = ConversionResult {
            country: "Japan".to_string(),
            amount: 5,
            converted_value: 551.25,
            currency_display_name: "Japanese yen".to_string(),
        };

        let decision = TurnDecision::converted(&result, SessionBag::new());

        assert_eq!(
            decision.reply,
            "In Japan, 5 dollars is worth 551.25 Japanese yen"
        );
        assert!(decision.end_session);
        assert_eq!(decision.state, DialogState::Resolved);
    }

    #[test]
    fn test_converted_pads_to_two_decimals() {
        let result = ConversionResult {
            country: "Japan".to_string(),
            amount: 5,
            converted_value: 5.0,
            currency_display_name: "United States dollar".to_string(),
        };

        let decision = TurnDecision::converted(&result, SessionBag::new());
        assert!(decision.reply.contains("5.00 United States dollar"));
    }

    #[test]
    fn test_rate_unavailable_closes_session() {
        let decision = TurnDecision::rate_unavailable(SessionBag::new());

        assert_eq!(decision.reply, prompts::RATE_UNAVAILABLE);
        assert!(decision.end_session);
        assert_eq!(decision.state, DialogState::Failed);
    }

    #[test]
    fn test_launch_and_farewell_replies() {
        assert!(!TurnDecision::welcome().end_session);
        assert!(!TurnDecision::help(SessionBag::new()).end_session);
        assert!(TurnDecision::goodbye().end_session);
    }
}
