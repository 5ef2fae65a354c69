// Suggestion pipeline: prompt build → model call → marker parsing →
// layered fallback → best-effort persistence.
// All LLM calls go through llm_client — no direct Gemini calls here.

pub mod handlers;
pub mod parser;
pub mod personality;
pub mod prompts;
pub mod service;
