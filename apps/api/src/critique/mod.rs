// Critique Engine: prompt construction, model call, schema-checked parsing with
// a fixed fallback. All model calls go through llm_client.

pub mod engine;
pub mod models;
pub mod prompts;

pub use engine::critique;
pub use models::CritiqueOutcome;
