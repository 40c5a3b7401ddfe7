//! HTTP handlers for the skill endpoint.
//!
//! The one POST handler classifies the turn (launch, help, stop, or
//! conversion) and hands conversion turns to the application layer.
//! Recoverable dialog failures never surface here; only a malformed
//! envelope produces an error status, logged and propagated because no
//! safe spoken reply can be built for it.

use std::sync::Arc;

use axum::extract::{Json, State};
use axum::http::StatusCode;
use tracing::{error, info};

use crate::application::handlers::{HandleTurnHandler, TurnCommand};
use crate::domain::dialog::{SessionBag, TurnDecision};
use crate::ports::{CountryLookup, RateProvider};

use super::dto::{SkillRequest, SkillResponse, AMOUNT_SLOT, COUNTRY_SLOT};

/// Built-in intent names the platform may deliver.
const HELP_INTENT: &str = "AMAZON.HelpIntent";
const STOP_INTENT: &str = "AMAZON.StopIntent";
const CANCEL_INTENT: &str = "AMAZON.CancelIntent";

/// Shared application state containing the two lookup ports.
#[derive(Clone)]
pub struct SkillAppState {
    pub country_lookup: Arc<dyn CountryLookup>,
    pub rate_provider: Arc<dyn RateProvider>,
}

impl SkillAppState {
    /// Create the turn handler on demand from the shared state.
    pub fn handle_turn_handler(&self) -> HandleTurnHandler {
        HandleTurnHandler::new(self.country_lookup.clone(), self.rate_provider.clone())
    }
}

/// `POST /v1/skill` - process one turn envelope.
pub async fn handle_skill_request(
    State(state): State<SkillAppState>,
    Json(request): Json<SkillRequest>,
) -> Result<Json<SkillResponse>, StatusCode> {
    info!(request_type = %request.request.request_type, "turn begin");

    let response = match request.request.request_type.as_str() {
        "LaunchRequest" => decision_response(TurnDecision::welcome()),
        "SessionEndedRequest" => SkillResponse::silent_end(),
        "IntentRequest" => intent_response(&state, &request).await?,
        other => {
            error!(request_type = other, "unrecognized request type in turn envelope");
            return Err(StatusCode::BAD_REQUEST);
        }
    };

    info!(
        end_session = response.response.should_end_session,
        "turn end"
    );
    Ok(Json(response))
}

async fn intent_response(
    state: &SkillAppState,
    request: &SkillRequest,
) -> Result<SkillResponse, StatusCode> {
    let intent = request.request.intent.as_ref().ok_or_else(|| {
        error!("intent request without an intent payload");
        StatusCode::BAD_REQUEST
    })?;
    info!(intent = %intent.name, "dispatching intent");

    let response = match intent.name.as_str() {
        HELP_INTENT => {
            let bag = SessionBag::from_attributes(request.attributes());
            decision_response(TurnDecision::help(bag))
        }
        STOP_INTENT | CANCEL_INTENT => decision_response(TurnDecision::goodbye()),
        _ => {
            let command = TurnCommand {
                new_conversation: request.is_new_conversation(),
                country_slot: request.slot_value(COUNTRY_SLOT),
                amount_slot: request.slot_value(AMOUNT_SLOT),
                attributes: request.attributes(),
            };
            let reply = state.handle_turn_handler().handle(command).await;
            SkillResponse::speak(reply.text, reply.end_session, reply.attributes)
        }
    };

    Ok(response)
}

fn decision_response(decision: TurnDecision) -> SkillResponse {
    SkillResponse::speak(
        decision.reply,
        decision.end_session,
        decision.bag.into_attributes(),
    )
}

/// `GET /health` - liveness probe.
pub async fn health() -> StatusCode {
    StatusCode::OK
}
