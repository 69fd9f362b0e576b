//! LLM configuration route (keys are never returned).

use std::sync::Arc;

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use ideaproof_llm::types::LLMConfigResponse;

use crate::state::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/config", get(get_config))
}

/// GET /api/config — configured providers, keys masked.
async fn get_config(State(state): State<Arc<AppState>>) -> Json<LLMConfigResponse> {
    Json(state.llm_config.to_response())
}
