//! Idea validation routes.

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use ideaproof_core::Error;
use serde::Deserialize;
use tracing::info;

use crate::state::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/status", get(get_status))
        .route("/validate", post(validate))
}

#[derive(Debug, Deserialize)]
pub struct ValidateRequest {
    pub idea: String,
}

/// GET /api/status — whether a live model is wired up, and the policy.
async fn get_status(State(state): State<Arc<AppState>>) -> Json<serde_json::Value> {
    let status = state.orchestrator.status();
    Json(serde_json::json!({
        "liveModel": status.live_model,
        "model": status.model,
        "policy": status.policy,
        "maxInflight": status.max_inflight,
        "maxIdeaChars": state.config.max_idea_chars,
    }))
}

/// POST /api/validate — validate a startup idea.
async fn validate(
    State(state): State<Arc<AppState>>,
    Json(req): Json<ValidateRequest>,
) -> Response {
    if req.idea.trim().is_empty() {
        return error_response(StatusCode::BAD_REQUEST, "invalid_request", "Idea must not be empty");
    }

    let chars = req.idea.chars().count();
    if chars > state.config.max_idea_chars {
        return error_response(
            StatusCode::PAYLOAD_TOO_LARGE,
            "invalid_request",
            &format!(
                "Idea is {} characters, limit is {}",
                chars, state.config.max_idea_chars
            ),
        );
    }

    match state.orchestrator.validate_idea_detailed(&req.idea).await {
        Ok(outcome) => {
            info!("Validated idea ({} chars) via {:?}", chars, outcome.source);
            (StatusCode::OK, Json(outcome)).into_response()
        }
        Err(e) => error_response(status_for(&e), e.kind(), &e.to_string()),
    }
}

fn status_for(err: &Error) -> StatusCode {
    match err {
        Error::CredentialsMissing => StatusCode::SERVICE_UNAVAILABLE,
        Error::Upstream(_) | Error::MalformedResponse { .. } | Error::IncompleteStructure(_) => {
            StatusCode::BAD_GATEWAY
        }
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn error_response(status: StatusCode, kind: &str, message: &str) -> Response {
    (
        status,
        Json(serde_json::json!({ "error": message, "kind": kind })),
    )
        .into_response()
}
