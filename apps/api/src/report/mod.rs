//! Report rendering — turns an analysis into a downloadable document.
//!
//! `ReportDocument` fixes the field set every report carries. Renderers decide
//! the format; the default is a plain-text report.

use bytes::Bytes;
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::analysis::{AnalysisResult, MatchBand, MatchScore, SkillSet};

#[derive(Debug, Clone, Serialize)]
pub struct ReportDocument {
    /// Caller-supplied, passed through unvalidated.
    pub candidate_name: String,
    pub generated_at: DateTime<Utc>,
    pub match_score: MatchScore,
    pub band: MatchBand,
    pub found_skills: SkillSet,
    pub missing_skills: SkillSet,
}

impl ReportDocument {
    pub fn new(candidate_name: impl Into<String>, result: &AnalysisResult) -> Self {
        Self {
            candidate_name: candidate_name.into(),
            generated_at: Utc::now(),
            match_score: result.match_score,
            band: result.band,
            found_skills: result.resume_skills.clone(),
            missing_skills: result.missing_skills.clone(),
        }
    }
}

/// A rendered report ready to be sent as an attachment.
#[derive(Debug, Clone)]
pub struct RenderedReport {
    pub content_type: &'static str,
    pub file_name: String,
    pub body: Bytes,
}

pub trait ReportRenderer: Send + Sync {
    fn render(&self, report: &ReportDocument) -> RenderedReport;
}

pub struct PlainTextReportRenderer;

impl ReportRenderer for PlainTextReportRenderer {
    fn render(&self, report: &ReportDocument) -> RenderedReport {
        let body = format!(
            "Resume Analysis Report\n\
             ======================\n\
             \n\
             Candidate: {candidate}\n\
             Generated: {generated}\n\
             Match Score: {score}%\n\
             Verdict: {label} - {advice}\n\
             \n\
             Skills Found: {found}\n\
             Missing Skills: {missing}\n",
            candidate = report.candidate_name,
            generated = report.generated_at.format("%Y-%m-%d %H:%M UTC"),
            score = report.match_score,
            label = report.band.label(),
            advice = report.band.advice(),
            found = join_or_none(&report.found_skills),
            missing = join_or_none(&report.missing_skills),
        );

        RenderedReport {
            content_type: "text/plain; charset=utf-8",
            file_name: format!("{}_resume_report.txt", file_stem(&report.candidate_name)),
            body: Bytes::from(body),
        }
    }
}

fn join_or_none(skills: &SkillSet) -> String {
    if skills.is_empty() {
        "None".to_string()
    } else {
        skills.iter().map(String::as_str).collect::<Vec<_>>().join(", ")
    }
}

/// Reduces a candidate name to a header-safe file stem.
fn file_stem(candidate_name: &str) -> String {
    let stem: String = candidate_name
        .split_whitespace()
        .map(|part| {
            part.chars()
                .filter(|c| c.is_ascii_alphanumeric() || *c == '-')
                .collect::<String>()
        })
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("_");
    if stem.is_empty() {
        "candidate".to_string()
    } else {
        stem
    }
}
