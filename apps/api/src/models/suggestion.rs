use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Request body for both suggestion endpoints.
/// Presence of `mood` is the only validation — an empty string is accepted
/// and produces a suggestion like any other mood.
#[derive(Debug, Clone, Deserialize)]
pub struct MoodRequest {
    pub mood: String,
}

/// The value returned to the caller. All four fields are non-empty by
/// construction: the parser/fallback pipeline fills anything the model
/// left out before this type is built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Suggestion {
    pub food: String,
    pub recipe: String,
    pub roast: String,
    pub mood: String,
}

/// Persisted form of a suggestion: written once per completed request,
/// never updated or deleted.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct SuggestionRecord {
    pub id: Uuid,
    pub mood: String,
    pub food: String,
    pub recipe: String,
    pub roast: String,
    pub source_ip: String,
    #[sqlx(rename = "created_at")]
    pub timestamp: DateTime<Utc>,
}

impl SuggestionRecord {
    pub fn new(suggestion: &Suggestion, source_ip: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            mood: suggestion.mood.clone(),
            food: suggestion.food.clone(),
            recipe: suggestion.recipe.clone(),
            roast: suggestion.roast.clone(),
            source_ip,
            timestamp: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_copies_all_suggestion_fields() {
        let suggestion = Suggestion {
            food: "Spicy Ramen Bowl".to_string(),
            recipe: "Boil noodles, add broth.".to_string(),
            roast: "Priorities.".to_string(),
            mood: "tired".to_string(),
        };
        let record = SuggestionRecord::new(&suggestion, "203.0.113.7".to_string());

        assert_eq!(record.food, suggestion.food);
        assert_eq!(record.recipe, suggestion.recipe);
        assert_eq!(record.roast, suggestion.roast);
        assert_eq!(record.mood, suggestion.mood);
        assert_eq!(record.source_ip, "203.0.113.7");
    }

    #[test]
    fn test_records_get_distinct_ids() {
        let suggestion = Suggestion {
            food: "a".to_string(),
            recipe: "b".to_string(),
            roast: "c".to_string(),
            mood: "d".to_string(),
        };
        let first = SuggestionRecord::new(&suggestion, String::new());
        let second = SuggestionRecord::new(&suggestion, String::new());
        assert_ne!(first.id, second.id);
    }
}
