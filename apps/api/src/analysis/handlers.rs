//! Axum route handlers for the Analysis API.

use axum::{
    extract::{Multipart, State},
    http::header,
    response::IntoResponse,
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::analysis::{analyze, AnalysisResult, SkillVocabulary};
use crate::errors::AppError;
use crate::report::ReportDocument;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

/// Both texts are optional at the wire level so an absent field can be told
/// apart from an empty one. Absent is rejected; empty is analyzed.
#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    pub resume_text: Option<String>,
    pub job_description: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    pub analysis_id: Uuid,
    pub result: AnalysisResult,
    pub band_label: &'static str,
    pub advice: &'static str,
}

#[derive(Debug, Deserialize)]
pub struct ReportRequest {
    #[serde(default)]
    pub candidate_name: String,
    pub resume_text: Option<String>,
    pub job_description: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct SkillsResponse {
    pub skills: SkillVocabulary,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/analyze
///
/// Scores pasted resume text against a job description.
pub async fn handle_analyze(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeRequest>,
) -> Result<Json<AnalyzeResponse>, AppError> {
    let (resume, job) = require_inputs(request.resume_text, request.job_description)?;
    Ok(Json(run_analysis(&state, &resume, &job)))
}

/// POST /api/v1/analyze/upload
///
/// Multipart form: `resume` (PDF file) and `job_description` (text).
/// The resume text comes from the configured document extractor.
pub async fn handle_analyze_upload(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<AnalyzeResponse>, AppError> {
    let mut resume_document = None;
    let mut job_description = None;

    while let Some(field) = multipart.next_field().await? {
        let name = field.name().map(str::to_owned);
        match name.as_deref() {
            Some("resume") => resume_document = Some(field.bytes().await?),
            Some("job_description") => job_description = Some(field.text().await?),
            _ => {}
        }
    }

    let (document, job) = require_inputs(resume_document, job_description)?;
    info!("Extracting resume text from {} byte upload", document.len());
    let resume = state.extractor.extract_text(document).await?;

    Ok(Json(run_analysis(&state, &resume, &job)))
}

/// POST /api/v1/report
///
/// Runs an analysis and returns it as a downloadable document.
pub async fn handle_report(
    State(state): State<AppState>,
    Json(request): Json<ReportRequest>,
) -> Result<impl IntoResponse, AppError> {
    let (resume, job) = require_inputs(request.resume_text, request.job_description)?;

    let result = analyze(&resume, &job, &state.matcher);
    let document = ReportDocument::new(request.candidate_name, &result);
    let rendered = state.renderer.render(&document);
    info!(
        "Rendered report {} ({} bytes)",
        rendered.file_name,
        rendered.body.len()
    );

    let headers = [
        (header::CONTENT_TYPE, rendered.content_type.to_string()),
        (
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{}\"", rendered.file_name),
        ),
    ];
    Ok((headers, rendered.body))
}

/// GET /api/v1/skills
pub async fn handle_list_skills(State(state): State<AppState>) -> Json<SkillsResponse> {
    Json(SkillsResponse {
        skills: state.matcher.vocabulary().clone(),
    })
}

// ────────────────────────────────────────────────────────────────────────────
// Helpers
// ────────────────────────────────────────────────────────────────────────────

fn require_inputs<R, J>(resume: Option<R>, job: Option<J>) -> Result<(R, J), AppError> {
    match (resume, job) {
        (Some(resume), Some(job)) => Ok((resume, job)),
        _ => Err(AppError::input_absent()),
    }
}

fn run_analysis(state: &AppState, resume: &str, job: &str) -> AnalyzeResponse {
    let analysis_id = Uuid::new_v4();
    let result = analyze(resume, job, &state.matcher);
    info!(
        "Analysis {analysis_id}: score {} ({})",
        result.match_score,
        result.band.label()
    );

    AnalyzeResponse {
        analysis_id,
        band_label: result.band.label(),
        advice: result.band.advice(),
        result,
    }
}
