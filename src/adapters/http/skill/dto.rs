//! Wire DTOs for the voice-platform turn envelope.
//!
//! Only the fields the dialog needs are modeled; unknown envelope
//! fields are ignored on deserialize so platform additions never break
//! the skill.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Slot names the conversion intent delivers.
pub const COUNTRY_SLOT: &str = "Country";
pub const AMOUNT_SLOT: &str = "Amount";

/// Inbound turn envelope.
#[derive(Debug, Clone, Deserialize)]
pub struct SkillRequest {
    #[serde(default)]
    pub version: String,
    #[serde(default)]
    pub session: Option<SessionDto>,
    pub request: RequestDto,
}

impl SkillRequest {
    /// True when the platform opened a new conversation this turn.
    pub fn is_new_conversation(&self) -> bool {
        self.session.as_ref().map(|s| s.new).unwrap_or(true)
    }

    /// The inbound session attribute bag, if any.
    pub fn attributes(&self) -> Option<HashMap<String, Value>> {
        self.session.as_ref().and_then(|s| s.attributes.clone())
    }

    /// Raw value of a named slot, when this is an intent request.
    pub fn slot_value(&self, slot: &str) -> Option<String> {
        self.request
            .intent
            .as_ref()
            .and_then(|intent| intent.slots.get(slot))
            .and_then(|slot| slot.value.clone())
    }
}

/// Session portion of the envelope.
#[derive(Debug, Clone, Deserialize)]
pub struct SessionDto {
    #[serde(default)]
    pub new: bool,
    #[serde(default)]
    pub attributes: Option<HashMap<String, Value>>,
}

/// Request portion of the envelope.
#[derive(Debug, Clone, Deserialize)]
pub struct RequestDto {
    #[serde(rename = "type")]
    pub request_type: String,
    #[serde(default)]
    pub intent: Option<IntentDto>,
}

/// Intent with its raw slot values.
#[derive(Debug, Clone, Deserialize)]
pub struct IntentDto {
    pub name: String,
    #[serde(default)]
    pub slots: HashMap<String, SlotDto>,
}

/// One raw slot as delivered by the platform.
#[derive(Debug, Clone, Deserialize)]
pub struct SlotDto {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub value: Option<String>,
}

/// Outbound turn envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillResponse {
    pub version: String,
    #[serde(rename = "sessionAttributes")]
    pub session_attributes: HashMap<String, Value>,
    pub response: ResponseBodyDto,
}

impl SkillResponse {
    /// A plain-text reply with the given session flag and bag.
    pub fn speak(
        text: impl Into<String>,
        end_session: bool,
        attributes: HashMap<String, Value>,
    ) -> Self {
        Self {
            version: "1.0".to_string(),
            session_attributes: attributes,
            response: ResponseBodyDto {
                output_speech: Some(OutputSpeechDto::plain_text(text)),
                should_end_session: end_session,
            },
        }
    }

    /// A speechless acknowledgement that closes the session, as sent
    /// for a session-ended notification.
    pub fn silent_end() -> Self {
        Self {
            version: "1.0".to_string(),
            session_attributes: HashMap::new(),
            response: ResponseBodyDto {
                output_speech: None,
                should_end_session: true,
            },
        }
    }
}

/// Response body: what to say and whether the conversation ends.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResponseBodyDto {
    #[serde(rename = "outputSpeech", skip_serializing_if = "Option::is_none")]
    pub output_speech: Option<OutputSpeechDto>,
    #[serde(rename = "shouldEndSession")]
    pub should_end_session: bool,
}

/// Plain-text speech payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputSpeechDto {
    #[serde(rename = "type")]
    pub speech_type: String,
    pub text: String,
}

impl OutputSpeechDto {
    fn plain_text(text: impl Into<String>) -> Self {
        Self {
            speech_type: "PlainText".to_string(),
            text: text.into(),
        }
    }
}
