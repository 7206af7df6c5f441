//! Axum route handlers for the Analysis API.

use axum::{
    extract::{Multipart, State},
    Json,
};
use bytes::Bytes;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::analysis::similarity::compute_similarity;
use crate::errors::AppError;
use crate::extraction::{extract, extract_skills, Extraction, SkillList};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    pub resume_skills: SkillList,
    pub jd_skills: SkillList,
    pub matching_skills: Vec<String>,
    pub similarity_score: f64,
}

#[derive(Debug, Deserialize)]
pub struct ExtractSkillsRequest {
    pub text: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/analyze
///
/// Multipart form: `resume` (document file) and `job_description` (text).
/// Extracts skills from both sides and scores their overlap.
pub async fn handle_analyze(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<AnalyzeResponse>, AppError> {
    let form = read_analyze_form(multipart).await?;

    let resume_text = state.text_extractor.extract_text(form.resume).await?;
    let resume_skills = extract_skills(&resume_text, &state.vocabulary);
    let jd_skills = extract_skills(&form.job_description, &state.vocabulary);

    let result = compute_similarity(&resume_skills, &jd_skills)?;

    info!(
        resume_skills = resume_skills.len(),
        jd_skills = jd_skills.len(),
        matching = result.matching_skills.len(),
        score = result.similarity_score,
        "Resume analyzed"
    );

    Ok(Json(AnalyzeResponse {
        resume_skills,
        jd_skills,
        matching_skills: result.matching_skills,
        similarity_score: result.similarity_score,
    }))
}

/// POST /api/v1/skills/extract
///
/// Runs extraction on a single document and reports whether the skills came
/// from a located section or from the vocabulary scan.
pub async fn handle_extract_skills(
    State(state): State<AppState>,
    Json(request): Json<ExtractSkillsRequest>,
) -> Result<Json<Extraction>, AppError> {
    if request.text.trim().is_empty() {
        return Err(AppError::Validation("text cannot be empty".to_string()));
    }

    Ok(Json(extract(&request.text, &state.vocabulary)))
}

struct AnalyzeForm {
    resume: Bytes,
    job_description: String,
}

async fn read_analyze_form(mut multipart: Multipart) -> Result<AnalyzeForm, AppError> {
    let mut resume = None;
    let mut job_description = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Malformed multipart body: {e}")))?
    {
        let name = field.name().map(str::to_owned);
        match name.as_deref() {
            Some("resume") => {
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::Validation(format!("Failed to read resume: {e}")))?;
                resume = Some(bytes);
            }
            Some("job_description") => {
                let text = field.text().await.map_err(|e| {
                    AppError::Validation(format!("Failed to read job_description: {e}"))
                })?;
                job_description = Some(text);
            }
            _ => {}
        }
    }

    let resume =
        resume.ok_or_else(|| AppError::Validation("resume file is required".to_string()))?;
    let job_description = job_description
        .filter(|text| !text.trim().is_empty())
        .ok_or_else(|| AppError::Validation("job_description cannot be empty".to_string()))?;

    Ok(AnalyzeForm {
        resume,
        job_description,
    })
}
