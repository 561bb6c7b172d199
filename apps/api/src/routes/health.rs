use axum::Json;
use serde_json::{json, Value};

/// GET /health
/// Liveness check for the ATS service; does not call the Gemini API.
pub async fn health_handler() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "service": "smart-ats"
    }))
}
