use std::sync::Arc;

use crate::analysis::SkillMatcher;
use crate::config::Config;
use crate::extraction::DocumentTextExtractor;
use crate::report::ReportRenderer;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Compiled skill vocabulary. Built once at startup, never mutated.
    pub matcher: Arc<SkillMatcher>,
    /// Pluggable document → text backend. Default: PdfTextExtractor.
    pub extractor: Arc<dyn DocumentTextExtractor>,
    /// Pluggable report backend. Default: PlainTextReportRenderer.
    pub renderer: Arc<dyn ReportRenderer>,
}
