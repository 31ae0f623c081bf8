//! `GET /health` handler.

use axum::Json;
use axum::extract::State;
use wire::HealthResponse;

use crate::state::AppState;

pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse { status: "healthy".to_owned(), model_loaded: state.model_loaded() })
}
