//! Personalities and the fallback selector.
//!
//! A personality bundles everything endpoint-specific: the prompt template,
//! the whole-response fallback pool used when the model call fails outright,
//! and the single per-field default used when parsing leaves a field empty.
//! The two pools are intentionally independent — each personality keeps its
//! own voice even when degraded to canned content.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::suggestion::parser::ParsedSuggestion;
use crate::suggestion::prompts::{BALANCING_PROMPT_TEMPLATE, BRUTAL_PROMPT_TEMPLATE};

/// A complete pre-authored suggestion, served when the model is unreachable.
#[derive(Debug, Clone, Copy)]
pub struct FallbackSuggestion {
    pub food: &'static str,
    pub recipe: &'static str,
    pub roast: &'static str,
}

/// One of the two fixed prompt/fallback configurations, selected by which
/// endpoint was called.
#[derive(Debug)]
pub struct Personality {
    pub name: &'static str,
    prompt_template: &'static str,
    fallback_pool: &'static [FallbackSuggestion],
    default_food: &'static str,
    default_recipe: &'static str,
    default_roast: &'static str,
}

impl Personality {
    /// Interpolates the raw mood verbatim into the prompt template.
    /// No validation — an empty mood produces a prompt like any other.
    pub fn build_prompt(&self, mood: &str) -> String {
        self.prompt_template.replace("{mood}", mood)
    }

    /// Whole-response fallback: one complete triple, uniformly at random from
    /// this personality's pool. The RNG is injected so tests can seed it; the
    /// choice never depends on the mood text.
    pub fn whole_response_fallback<R: Rng + ?Sized>(&self, rng: &mut R) -> FallbackSuggestion {
        *self
            .fallback_pool
            .choose(rng)
            .expect("fallback pool is never empty")
    }

    /// Per-field fallback: each field the parser left empty is independently
    /// replaced by this personality's canned default for that field.
    pub fn complete(&self, parsed: ParsedSuggestion) -> (String, String, String) {
        (
            parsed.food.unwrap_or_else(|| self.default_food.to_string()),
            parsed
                .recipe
                .unwrap_or_else(|| self.default_recipe.to_string()),
            parsed
                .roast
                .unwrap_or_else(|| self.default_roast.to_string()),
        )
    }

    #[cfg(test)]
    pub fn pool(&self) -> &'static [FallbackSuggestion] {
        self.fallback_pool
    }
}

/// Supportive personality behind POST /api/mood-suggestion.
pub static BALANCING: Personality = Personality {
    name: "balancing",
    prompt_template: BALANCING_PROMPT_TEMPLATE,
    fallback_pool: &[
        FallbackSuggestion {
            food: "Warm Chocolate Chip Cookies",
            recipe: "Mix flour, butter, brown sugar, and chocolate chips. Bake at 350°F for 12 minutes.",
            roast: "Sometimes life gives you lemons, but today it's giving you cookies. Much better deal.",
        },
        FallbackSuggestion {
            food: "Spicy Ramen Bowl",
            recipe: "Boil ramen noodles, add spicy broth, top with egg and vegetables. Slurp loudly for best results.",
            roast: "Your problems are temporary, but this ramen is about to be gone in 5 minutes. Priorities.",
        },
        FallbackSuggestion {
            food: "Fresh Fruit Smoothie",
            recipe: "Blend banana, berries, yogurt, and honey. Add ice for extra chill vibes.",
            roast: "Being healthy is boring, but at least this tastes like a milkshake in disguise.",
        },
    ],
    default_food: "Chocolate Chip Cookies",
    default_recipe: "Mix flour, butter, sugar, and chocolate chips. Bake at 350°F for 12 minutes until golden.",
    default_roast: "Life's too short to not eat cookies. At least they won't judge your life choices.",
};

/// Savage personality behind POST /api/reality-check.
pub static BRUTAL: Personality = Personality {
    name: "brutal",
    prompt_template: BRUTAL_PROMPT_TEMPLATE,
    fallback_pool: &[
        FallbackSuggestion {
            food: "Instant Ramen at 3AM",
            recipe: "Boil water (if you even have the energy), dump packet, cry into it for seasoning.",
            roast: "Our AI said \"nah bestie, you're beyond help\" and literally crashed. Even technology is avoiding your energy rn 💀",
        },
        FallbackSuggestion {
            food: "Cold Pizza Straight From the Box",
            recipe: "Open fridge. Locate last night's regret. Do not reheat — you haven't earned warmth.",
            roast: "You said your mood out loud and the machine chose violence by leaving. Not even the algorithm wants this conversation.",
        },
        FallbackSuggestion {
            food: "An Entire Sleeve of Crackers Over the Sink",
            recipe: "Stand at the sink. Eat crackers. Stare at the wall. That's it, that's the recipe.",
            roast: "Main character energy except the show got cancelled mid-season and nobody noticed. Eat your crackers, bestie.",
        },
    ],
    default_food: "Gas Station Energy Drink and a Prayer",
    default_recipe: "Crack it open, chug, and pretend that counts as a meal. Hydration is for people with their life together.",
    default_roast: "The model couldn't even finish roasting you. Let that sink in while you sip your chemical breakfast.",
};

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    #[test]
    fn test_build_prompt_embeds_mood_verbatim() {
        let prompt = BALANCING.build_prompt("utterly, hopelessly bored");
        assert!(prompt.contains("\"utterly, hopelessly bored\""));
        assert!(!prompt.contains("{mood}"));
    }

    #[test]
    fn test_build_prompt_accepts_empty_mood() {
        let prompt = BRUTAL.build_prompt("");
        assert!(prompt.contains("\"\""));
    }

    #[test]
    fn test_whole_response_fallback_is_deterministic_under_a_seed() {
        let mut a = StdRng::seed_from_u64(42);
        let mut b = StdRng::seed_from_u64(42);
        let first = BALANCING.whole_response_fallback(&mut a);
        let second = BALANCING.whole_response_fallback(&mut b);
        assert_eq!(first.food, second.food);
    }

    #[test]
    fn test_whole_response_fallback_covers_the_pool() {
        // Non-degenerate distribution check: 1000 draws over a pool of 3
        // must hit every entry. Not an exact-uniformity assertion.
        let mut rng = StdRng::seed_from_u64(7);
        let mut seen = HashSet::new();
        for _ in 0..1000 {
            seen.insert(BALANCING.whole_response_fallback(&mut rng).food);
        }
        assert_eq!(seen.len(), BALANCING.pool().len());
    }

    #[test]
    fn test_complete_fills_only_missing_fields() {
        let parsed = ParsedSuggestion {
            food: Some("Pho".to_string()),
            recipe: None,
            roast: None,
        };
        let (food, recipe, roast) = BALANCING.complete(parsed);
        assert_eq!(food, "Pho");
        assert_eq!(recipe, BALANCING.default_recipe);
        assert_eq!(roast, BALANCING.default_roast);
    }

    #[test]
    fn test_complete_keeps_a_full_parse_untouched() {
        let parsed = ParsedSuggestion {
            food: Some("A".to_string()),
            recipe: Some("B".to_string()),
            roast: Some("C".to_string()),
        };
        assert_eq!(
            BRUTAL.complete(parsed),
            ("A".to_string(), "B".to_string(), "C".to_string())
        );
    }

    #[test]
    fn test_pools_and_defaults_are_fully_authored() {
        for personality in [&BALANCING, &BRUTAL] {
            assert_eq!(personality.pool().len(), 3);
            for entry in personality.pool() {
                assert!(!entry.food.is_empty());
                assert!(!entry.recipe.is_empty());
                assert!(!entry.roast.is_empty());
            }
            assert!(!personality.default_food.is_empty());
            assert!(!personality.default_recipe.is_empty());
            assert!(!personality.default_roast.is_empty());
        }
    }
}
