//! Axum route handlers for the Analysis API.

use axum::{
    extract::{Multipart, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::analysis::pipeline::{
    extract_readable, run_analysis, AnalysisInput, AnalysisReport, JobDescription,
};
use crate::errors::AppError;
use crate::extraction::{MediaType, RawDocument};
use crate::similarity::similarity;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct SimilarityRequest {
    pub text_a: String,
    pub text_b: String,
}

#[derive(Debug, Serialize)]
pub struct SimilarityResponse {
    pub score: f64,
}

#[derive(Debug, Serialize)]
pub struct ExtractResponse {
    pub text: String,
    pub characters: usize,
    pub skipped_pages: Vec<u32>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/analyze
///
/// Multipart fields: `resume` (file, required), `job_description` (file),
/// `job_description_text`, `job_role`.
pub async fn handle_analyze(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<AnalysisReport>, AppError> {
    let mut resume = None;
    let mut job_description_file = None;
    let mut job_description_text = None;
    let mut job_role = None;

    while let Some(field) = multipart.next_field().await.map_err(bad_multipart)? {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "resume" => resume = read_document(field).await?.or(resume),
            "job_description" => {
                job_description_file = read_document(field).await?.or(job_description_file)
            }
            "job_description_text" => {
                job_description_text = Some(field.text().await.map_err(bad_multipart)?)
            }
            "job_role" => job_role = Some(field.text().await.map_err(bad_multipart)?),
            _ => {}
        }
    }

    let resume =
        resume.ok_or_else(|| AppError::Validation("a 'resume' file is required".to_string()))?;
    let job_description = job_description_file
        .map(JobDescription::Document)
        .or(job_description_text.map(JobDescription::Text));

    let report = run_analysis(
        state.llm.as_ref(),
        AnalysisInput {
            resume,
            job_role,
            job_description,
        },
    )
    .await?;

    Ok(Json(report))
}

/// POST /api/v1/extract
///
/// Extracts a single uploaded `file` and returns its text.
pub async fn handle_extract(mut multipart: Multipart) -> Result<Json<ExtractResponse>, AppError> {
    let mut document = None;
    while let Some(field) = multipart.next_field().await.map_err(bad_multipart)? {
        if field.name() == Some("file") {
            document = read_document(field).await?.or(document);
        }
    }
    let document =
        document.ok_or_else(|| AppError::Validation("a 'file' part is required".to_string()))?;

    let extracted = extract_readable(document, "file").await?;
    Ok(Json(ExtractResponse {
        characters: extracted.char_count(),
        text: extracted.text,
        skipped_pages: extracted.skipped_pages,
    }))
}

/// POST /api/v1/similarity
///
/// Always succeeds; an unscoreable pair reports 0.
pub async fn handle_similarity(Json(request): Json<SimilarityRequest>) -> Json<SimilarityResponse> {
    Json(SimilarityResponse {
        score: similarity(&request.text_a, &request.text_b),
    })
}

/// Reads one file part. `None` means the part carried no file: browsers send
/// an empty part with `filename=""` for a file input left blank.
async fn read_document(
    field: axum::extract::multipart::Field<'_>,
) -> Result<Option<RawDocument>, AppError> {
    let file_name = field.file_name().map(str::to_owned);
    let content_type = field.content_type().map(str::to_owned);
    let content = field.bytes().await.map_err(bad_multipart)?;

    if file_name.as_deref() == Some("") || content.is_empty() {
        return Ok(None);
    }

    let source_name = file_name.unwrap_or_else(|| "upload".to_string());
    let media_type = MediaType::detect(content_type.as_deref(), &source_name)?;
    Ok(Some(RawDocument::new(content, media_type, source_name)))
}

fn bad_multipart(err: axum::extract::multipart::MultipartError) -> AppError {
    AppError::Validation(format!("invalid multipart body: {err}"))
}
