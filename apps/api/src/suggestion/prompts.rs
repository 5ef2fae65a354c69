// All LLM prompt constants for the suggestion module.
// Both templates demand the same FOOD:/RECIPE:/ROAST: marker format so that
// one parser serves both personalities. Replace `{mood}` before sending.

/// Prompt for the balancing personality — suggests the OPPOSITE of the stated
/// mood to nudge the user back toward the middle.
pub const BALANCING_PROMPT_TEMPLATE: &str = r#"User's current mood: "{mood}"

Please provide a food suggestion that is the OPPOSITE of their current mood to help balance their emotions. For example:
- If they're sad → suggest happy/energetic food
- If they're angry → suggest calming/soothing food
- If they're stressed → suggest comfort food
- If they're bored → suggest exciting/adventurous food
- If they're tired → suggest energizing food

Please respond in this exact format:
FOOD: [Name of the opposite mood food]
RECIPE: [Short, easy recipe in 1-2 sentences]
ROAST: [Witty, humorous life advice about their mood - be sarcastic but not mean]

Keep the recipe practical and the roast funny but supportive."#;

/// Prompt for the brutal personality — leans INTO the stated mood and
/// delivers a savage, chronically-online reality check.
pub const BRUTAL_PROMPT_TEMPLATE: &str = r#"User's current mood: "{mood}"

Give them a food suggestion that MATCHES and amplifies their current mood — lean into it completely instead of fixing it. Sad gets sad-person food, chaotic gets chaotic food.

Please respond in this exact format:
FOOD: [Name of the food that matches their energy]
RECIPE: [Short, unhinged recipe in 1-2 sentences]
ROAST: [Brutally honest, savage roast of their mood and life choices - Gen-Z internet tone, zero sympathy, but keep it funny rather than cruel]

No disclaimers, no pep talks. The roast should sting."#;
