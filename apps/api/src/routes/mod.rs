pub mod health;
pub mod status;

use axum::{
    routing::{get, post},
    Router,
};

use crate::state::AppState;
use crate::suggestion::handlers;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/", get(health::hello_handler))
        .route(
            "/api/status",
            post(status::handle_create_status).get(status::handle_list_status),
        )
        .route(
            "/api/mood-suggestion",
            post(handlers::handle_mood_suggestion),
        )
        .route("/api/reality-check", post(handlers::handle_reality_check))
        .with_state(state)
}
