//! Axum router configuration for the skill endpoint.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{handle_skill_request, health, SkillAppState};

/// Create the skill router.
///
/// # Routes
/// - `POST /v1/skill` - Process one turn envelope
/// - `GET /health` - Liveness probe
pub fn skill_router() -> Router<SkillAppState> {
    Router::new()
        .route("/v1/skill", post(handle_skill_request))
        .route("/health", get(health))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use tower::ServiceExt;

    use super::*;
    use crate::adapters::{MockCountryLookup, MockRateProvider};

    fn app() -> Router {
        skill_router().with_state(SkillAppState {
            country_lookup: Arc::new(MockCountryLookup::with_country(
                "Japan",
                "JPY",
                "Japanese yen",
            )),
            rate_provider: Arc::new(MockRateProvider::with_rate("JPY", 110.25)),
        })
    }

    #[tokio::test]
    async fn test_health_route() {
        let response = app()
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_skill_route_answers_conversion() {
        let body = serde_json::json!({
            "version": "1.0",
            "session": {"new": true},
            "request": {
                "type": "IntentRequest",
                "intent": {
                    "name": "CheckExchangeIntent",
                    "slots": {
                        "Country": {"value": "Japan"},
                        "Amount": {"value": "5"}
                    }
                }
            }
        });

        let response = app()
            .oneshot(
                Request::post("/v1/skill")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let value: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(
            value["response"]["outputSpeech"]["text"],
            "In Japan, 5 dollars is worth 551.25 Japanese yen"
        );
        assert_eq!(value["response"]["shouldEndSession"], true);
    }

    #[tokio::test]
    async fn test_skill_route_rejects_malformed_envelope() {
        let response = app()
            .oneshot(
                Request::post("/v1/skill")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(r#"{"no_request_field": true}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }
}
