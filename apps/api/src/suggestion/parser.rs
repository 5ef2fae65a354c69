//! Suggestion Parser — extracts the FOOD/RECIPE/ROAST fields from the model's
//! unstructured text response.
//!
//! The parser never errors: a field the text does not carry is simply `None`,
//! and the service layer fills it from the personality's canned defaults.
//! Absence of a marker is not an error condition here.

const FOOD_MARKER: &str = "FOOD:";
const RECIPE_MARKER: &str = "RECIPE:";
const ROAST_MARKER: &str = "ROAST:";

/// Partial parse result. `None` means the text never yielded a usable value
/// for that field (missing marker or empty remainder).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParsedSuggestion {
    pub food: Option<String>,
    pub recipe: Option<String>,
    pub roast: Option<String>,
}

impl ParsedSuggestion {
    pub fn is_complete(&self) -> bool {
        self.food.is_some() && self.recipe.is_some() && self.roast.is_some()
    }
}

/// Parses the model's response text.
///
/// First pass walks the lines: a trimmed line starting with a marker assigns
/// the trimmed remainder to that field, overwriting any earlier value — the
/// last occurrence wins. If any field is still missing and the text contains
/// `FOOD:` at all, a second pass splits the whole text on the markers, which
/// recovers responses where the model ran the fields together on one line.
/// The second pass only fills fields the line pass left `None`, so a value
/// won on the lines (including the last-duplicate-wins rule) is never
/// clobbered by the coarser split.
pub fn parse_suggestion(text: &str) -> ParsedSuggestion {
    let mut parsed = ParsedSuggestion::default();

    for line in text.lines() {
        let line = line.trim();
        if let Some(rest) = line.strip_prefix(FOOD_MARKER) {
            parsed.food = non_empty(rest);
        } else if let Some(rest) = line.strip_prefix(RECIPE_MARKER) {
            parsed.recipe = non_empty(rest);
        } else if let Some(rest) = line.strip_prefix(ROAST_MARKER) {
            parsed.roast = non_empty(rest);
        }
    }

    if parsed.is_complete() {
        return parsed;
    }

    if let Some((_, after_food)) = text.split_once(FOOD_MARKER) {
        match after_food.split_once(RECIPE_MARKER) {
            Some((food, after_recipe)) => {
                if parsed.food.is_none() {
                    parsed.food = non_empty(food);
                }
                match after_recipe.split_once(ROAST_MARKER) {
                    Some((recipe, roast)) => {
                        if parsed.recipe.is_none() {
                            parsed.recipe = non_empty(recipe);
                        }
                        if parsed.roast.is_none() {
                            parsed.roast = non_empty(roast);
                        }
                    }
                    None => {
                        if parsed.recipe.is_none() {
                            parsed.recipe = non_empty(after_recipe);
                        }
                    }
                }
            }
            None => {
                if parsed.food.is_none() {
                    parsed.food = non_empty(after_food);
                }
            }
        }
    }

    parsed
}

fn non_empty(s: &str) -> Option<String> {
    let s = s.trim();
    if s.is_empty() {
        None
    } else {
        Some(s.to_string())
    }
}
