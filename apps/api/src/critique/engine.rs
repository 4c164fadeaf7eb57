//! Critique Engine — one model call per resume, parsed into a `CritiqueResult`.

use tracing::{info, warn};

use crate::critique::models::{CritiqueOutcome, CritiqueResult};
use crate::critique::prompts::{
    build_critique_prompt, CRITIQUE_MAX_TOKENS, CRITIQUE_SYSTEM, CRITIQUE_TEMPERATURE,
};
use crate::llm_client::{strip_json_fences, CompletionModel, CompletionRequest, LlmError};

/// Asks the model for structured feedback on `resume_text`.
///
/// A failed model call is an error and yields nothing. A response that does
/// not match the schema still yields a result: the fixed fallback record.
pub async fn critique(
    model: &dyn CompletionModel,
    resume_text: &str,
    job_role: Option<&str>,
    job_description: Option<&str>,
) -> Result<CritiqueOutcome, LlmError> {
    let prompt = build_critique_prompt(resume_text, job_role, job_description);

    let raw = model
        .complete(CompletionRequest {
            system: CRITIQUE_SYSTEM,
            prompt: &prompt,
            temperature: CRITIQUE_TEMPERATURE,
            max_tokens: CRITIQUE_MAX_TOKENS,
        })
        .await?;

    let outcome = parse_critique(&raw);
    match &outcome {
        CritiqueOutcome::Parsed { result } => {
            info!("Critique parsed: overall_score={}", result.overall_score)
        }
        CritiqueOutcome::Fallback { parse_error, .. } => warn!(
            "Critique response did not match schema ({parse_error}); using fallback record (raw_len={})",
            raw.len()
        ),
    }
    Ok(outcome)
}

/// Strict parse of raw model output, after removing any code fence.
pub fn parse_critique(raw: &str) -> CritiqueOutcome {
    match serde_json::from_str::<CritiqueResult>(strip_json_fences(raw)) {
        Ok(result) => CritiqueOutcome::Parsed { result },
        Err(e) => CritiqueOutcome::Fallback {
            result: CritiqueResult::fallback(),
            raw_response: raw.to_string(),
            parse_error: e.to_string(),
        },
    }
}
