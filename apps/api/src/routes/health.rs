use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::state::AppState;

pub const LIVENESS_MESSAGE: &str = "CV prediction API is running";

/// GET /
pub async fn liveness_handler() -> &'static str {
    LIVENESS_MESSAGE
}

/// GET /health
/// Returns service version plus the loaded model and preprocessing settings.
pub async fn health_handler(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "service": "resume-classifier",
        "classes": state.predictor.class_count(),
        "language": state.normalizer.language(),
        "confidence_policy": state.predictor.policy(),
    }))
}
