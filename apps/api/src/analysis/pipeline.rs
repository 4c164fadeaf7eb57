//! Analysis pipeline: extract → (score) → critique.
//!
//! Stateless: everything a caller needs to render comes back in the
//! `AnalysisReport`; nothing is kept between requests.

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::critique::{critique, CritiqueOutcome};
use crate::errors::AppError;
use crate::extraction::{extract, ExtractedText, RawDocument};
use crate::llm_client::CompletionModel;
use crate::similarity::similarity;

/// The job description may be uploaded as a file or pasted as text.
#[derive(Debug, Clone)]
pub enum JobDescription {
    Document(RawDocument),
    Text(String),
}

#[derive(Debug, Clone)]
pub struct AnalysisInput {
    pub resume: RawDocument,
    pub job_role: Option<String>,
    pub job_description: Option<JobDescription>,
}

#[derive(Debug, Serialize)]
pub struct AnalysisReport {
    pub analysis_id: Uuid,
    pub analyzed_at: DateTime<Utc>,
    pub resume_characters: usize,
    /// Resume PDF pages that produced no text; the rest were still analyzed.
    pub skipped_pages: Vec<u32>,
    /// Present only when a job description was supplied.
    pub similarity_score: Option<f64>,
    pub critique: CritiqueOutcome,
}

/// Extracts `document` off the async runtime and rejects blank results.
///
/// `label` names the document in the user-facing "no readable text" error.
pub async fn extract_readable(document: RawDocument, label: &str) -> Result<ExtractedText, AppError> {
    let source_name = document.source_name.clone();
    let extracted = tokio::task::spawn_blocking(move || extract(&document))
        .await
        .map_err(|e| AppError::Internal(anyhow::anyhow!("extraction task failed: {e}")))??;

    if extracted.is_blank() {
        return Err(AppError::EmptyContent(format!("{label} '{source_name}'")));
    }
    if !extracted.skipped_pages.is_empty() {
        warn!(
            "{label} '{source_name}': {} page(s) had no extractable text: {:?}",
            extracted.skipped_pages.len(),
            extracted.skipped_pages
        );
    }
    Ok(extracted)
}

/// Runs one full analysis. Hard failures (format, extraction, empty input,
/// model call) stop the pipeline before any further work is done; scoring and
/// schema failures degrade to usable values.
pub async fn run_analysis(
    model: &dyn CompletionModel,
    input: AnalysisInput,
) -> Result<AnalysisReport, AppError> {
    let analysis_id = Uuid::new_v4();
    info!(%analysis_id, "Starting analysis of '{}'", input.resume.source_name);

    let resume = extract_readable(input.resume, "resume").await?;

    // Resolved before the model call so a bad JD upload never costs one.
    let job_description = match input.job_description {
        Some(JobDescription::Document(doc)) => {
            Some(extract_readable(doc, "job description").await?.text)
        }
        Some(JobDescription::Text(text)) if !text.trim().is_empty() => Some(text),
        _ => None,
    };

    let similarity_score = job_description
        .as_deref()
        .map(|jd| similarity(&resume.text, jd));
    if let Some(score) = similarity_score {
        info!(%analysis_id, "Similarity score: {score}");
    }

    let job_role = input.job_role.as_deref().filter(|r| !r.trim().is_empty());
    let critique = critique(model, &resume.text, job_role, job_description.as_deref()).await?;
    info!(
        %analysis_id,
        overall_score = critique.result().overall_score,
        fallback = critique.is_fallback(),
        "Analysis complete"
    );

    Ok(AnalysisReport {
        analysis_id,
        analyzed_at: Utc::now(),
        resume_characters: resume.char_count(),
        skipped_pages: resume.skipped_pages,
        similarity_score,
        critique,
    })
}
