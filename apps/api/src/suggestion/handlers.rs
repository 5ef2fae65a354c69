//! Axum route handlers for the two suggestion endpoints.
//!
//! Both return plain `Json<Suggestion>` — there is no error arm. Malformed
//! bodies are already rejected with 422 by the `Json` extractor, and every
//! model- or store-side failure degrades inside the service.

use std::net::SocketAddr;

use axum::extract::{ConnectInfo, State};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::errors::Json;

use crate::models::suggestion::{MoodRequest, Suggestion};
use crate::state::AppState;
use crate::suggestion::personality::{Personality, BALANCING, BRUTAL};
use crate::suggestion::service::generate_suggestion;

/// POST /api/mood-suggestion — balancing personality.
pub async fn handle_mood_suggestion(
    state: State<AppState>,
    connect_info: ConnectInfo<SocketAddr>,
    request: Json<MoodRequest>,
) -> Json<Suggestion> {
    suggest(state, connect_info, request, &BALANCING).await
}

/// POST /api/reality-check — brutal personality.
pub async fn handle_reality_check(
    state: State<AppState>,
    connect_info: ConnectInfo<SocketAddr>,
    request: Json<MoodRequest>,
) -> Json<Suggestion> {
    suggest(state, connect_info, request, &BRUTAL).await
}

async fn suggest(
    State(state): State<AppState>,
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
    Json(request): Json<MoodRequest>,
    personality: &Personality,
) -> Json<Suggestion> {
    // Fresh seeded RNG per request; ThreadRng is not Send across the await.
    let mut rng = StdRng::from_entropy();

    let suggestion = generate_suggestion(
        state.model.as_ref(),
        state.store.as_ref(),
        personality,
        &request.mood,
        &addr.ip().to_string(),
        &mut rng,
    )
    .await;

    Json(suggestion)
}
