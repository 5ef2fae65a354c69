//! Suggestion Service — orchestrates one request end to end.
//!
//! Flow: build prompt → model call → parse → per-field fallback → persist →
//! respond. A failed model call short-circuits to the whole-response fallback
//! pool; a failed persist is logged and discarded. Neither ever reaches the
//! caller, which is why this returns `Suggestion` and not a `Result`.

use rand::Rng;
use tracing::{info, warn};

use crate::llm_client::TextModel;
use crate::models::suggestion::{Suggestion, SuggestionRecord};
use crate::store::RecordStore;
use crate::suggestion::parser::parse_suggestion;
use crate::suggestion::personality::Personality;

/// Produces a complete suggestion for `mood` and best-effort persists it.
///
/// The returned suggestion always has all four fields non-empty: the parser
/// output is completed with per-field defaults, and a model failure is
/// answered from the personality's fallback pool instead of an error.
pub async fn generate_suggestion<R: Rng>(
    model: &dyn TextModel,
    store: &dyn RecordStore,
    personality: &Personality,
    mood: &str,
    source_ip: &str,
    rng: &mut R,
) -> Suggestion {
    let prompt = personality.build_prompt(mood);

    // Single attempt, no retry: a failed call goes straight to the pool.
    let (food, recipe, roast) = match model.generate(&prompt).await {
        Ok(text) => {
            let parsed = parse_suggestion(&text);
            if !parsed.is_complete() {
                info!(
                    personality = personality.name,
                    "model response incomplete, filling per-field defaults"
                );
            }
            personality.complete(parsed)
        }
        Err(e) => {
            warn!(
                personality = personality.name,
                "model call failed, serving canned fallback: {e}"
            );
            let fallback = personality.whole_response_fallback(rng);
            (
                fallback.food.to_string(),
                fallback.recipe.to_string(),
                fallback.roast.to_string(),
            )
        }
    };

    let suggestion = Suggestion {
        food,
        recipe,
        roast,
        mood: mood.to_string(),
    };

    // Analytics write is best-effort: the result is inspected for logging and
    // then dropped so a store outage never alters the response.
    let record = SuggestionRecord::new(&suggestion, source_ip.to_string());
    if let Err(e) = store.insert_suggestion(&record).await {
        warn!("failed to persist suggestion record {}: {e}", record.id);
    }

    suggestion
}
