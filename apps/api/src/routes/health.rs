use axum::Json;
use serde_json::{json, Value};

/// GET /health
/// Returns a simple status object with service version.
pub async fn health_handler() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "service": "eat-your-feelings-api"
    }))
}

/// GET /api/
/// Fixed greeting body; clients treat it as a smoke check.
pub async fn hello_handler() -> Json<Value> {
    Json(json!({ "message": "Hello World" }))
}
