//! Fixed reply sentences spoken by the skill.
//!
//! Every user-visible sentence lives here so the dialog logic never
//! builds prompt text inline. The conversion success sentence is the
//! one formatted reply; see [`crate::domain::dialog::TurnDecision`].

/// Spoken on a bare launch of the skill.
pub const WELCOME: &str =
    "Welcome to Exchange rate checker. You can ask us how much dollars are worth in other countries!";

/// Full usage prompt: spoken for help requests and when a new
/// conversation supplies neither slot.
pub const USAGE: &str =
    "Ask how much money is worth in other countries. For example, say How much is five dollars worth in Japan";

/// Re-prompt when the country slot is still missing.
pub const MISSING_COUNTRY: &str =
    "Sorry, I didn't get the country. What country do you want to check conversion for?";

/// Re-prompt when the amount slot is still missing.
pub const MISSING_AMOUNT: &str =
    "Sorry, I didn't get the amount. How much money would you like to convert?";

/// Re-prompt when the country resolved to no known currency.
pub const UNKNOWN_COUNTRY: &str =
    "Sorry, I didn't understand that country. What country do you want to check conversion for?";

/// Apology when the exchange-rate lookup fails.
pub const RATE_UNAVAILABLE: &str = "Sorry, couldn't find that exchange rate";

/// Spoken when the user stops or cancels the conversation.
pub const GOODBYE: &str = "Thanks for stopping by";
