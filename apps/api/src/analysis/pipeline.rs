//! Analysis pipeline — normalize → extract skills → score → band.
//!
//! Pure and total: every pair of strings, including empty ones, yields a result.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::analysis::band::MatchBand;
use crate::analysis::normalizer::normalize;
use crate::analysis::similarity::{score, MatchScore};
use crate::analysis::skill_matcher::{SkillMatcher, SkillSet};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub match_score: MatchScore,
    pub band: MatchBand,
    pub resume_skills: SkillSet,
    pub job_skills: SkillSet,
    /// Job skills absent from the resume. Resume-only skills are not reported.
    pub missing_skills: SkillSet,
}

pub fn analyze(resume_raw: &str, job_raw: &str, matcher: &SkillMatcher) -> AnalysisResult {
    let resume_norm = normalize(resume_raw);
    let job_norm = normalize(job_raw);

    let resume_skills = matcher.extract_skills(&resume_norm);
    let job_skills = matcher.extract_skills(&job_norm);
    let match_score = score(&resume_norm, &job_norm);

    let missing_skills: SkillSet = job_skills.difference(&resume_skills).cloned().collect();
    let band = MatchBand::from_score(match_score);

    debug!(
        "Analysis: score={} band={:?} resume_skills={} job_skills={} missing={}",
        match_score,
        band,
        resume_skills.len(),
        job_skills.len(),
        missing_skills.len()
    );

    AnalysisResult {
        match_score,
        band,
        resume_skills,
        job_skills,
        missing_skills,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::vocabulary::SkillVocabulary;

    fn builtin_matcher() -> SkillMatcher {
        SkillMatcher::new(SkillVocabulary::builtin()).unwrap()
    }

    fn skills(items: &[&str]) -> SkillSet {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_end_to_end_scenario() {
        let m = builtin_matcher();
        let resume = "I know Python and SQL.";
        let job = "Looking for Python, Java, and SQL skills.";

        let result = analyze(resume, job, &m);
        assert_eq!(result.resume_skills, skills(&["python", "sql"]));
        assert_eq!(result.job_skills, skills(&["java", "python", "sql"]));
        assert_eq!(result.missing_skills, skills(&["java"]));
        assert!(result.match_score > MatchScore::MIN);
        assert!(result.match_score < MatchScore::MAX);
        assert_eq!(result.band, MatchBand::from_score(result.match_score));

        // Deterministic across repeated runs.
        for _ in 0..5 {
            assert_eq!(analyze(resume, job, &m), result);
        }
    }

    #[test]
    fn test_missing_skills_is_job_minus_resume() {
        let m = SkillMatcher::new(SkillVocabulary::new(["python", "sql"]).unwrap()).unwrap();
        let result = analyze("python developer", "python and sql", &m);
        assert_eq!(result.missing_skills, skills(&["sql"]));
    }

    #[test]
    fn test_resume_only_skills_are_not_reported_missing() {
        let m = builtin_matcher();
        let result = analyze("python django flask", "python", &m);
        assert_eq!(result.resume_skills, skills(&["django", "flask", "python"]));
        assert!(result.missing_skills.is_empty());
    }

    #[test]
    fn test_identical_texts_are_strong_match() {
        let m = builtin_matcher();
        let text = "Data scientist with Python, SQL and machine learning.";
        let result = analyze(text, text, &m);
        assert_eq!(result.match_score, MatchScore::MAX);
        assert_eq!(result.band, MatchBand::StrongMatch);
        assert!(result.missing_skills.is_empty());
    }

    #[test]
    fn test_empty_inputs_complete_with_zero_score() {
        let m = builtin_matcher();
        for (resume, job) in [("", ""), ("   \n", "Python"), ("Python", "")] {
            let result = analyze(resume, job, &m);
            assert_eq!(result.match_score, MatchScore::MIN);
            assert_eq!(result.band, MatchBand::WeakMatch);
        }
        let result = analyze("", "Python and SQL", &m);
        assert!(result.resume_skills.is_empty());
        assert_eq!(result.missing_skills, skills(&["python", "sql"]));
    }

    #[test]
    fn test_result_serializes_sorted_lists() {
        let m = builtin_matcher();
        let result = analyze("sql python", "java sql python", &m);
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["job_skills"], serde_json::json!(["java", "python", "sql"]));
        assert_eq!(json["missing_skills"], serde_json::json!(["java"]));
        assert!(json["match_score"].is_number());
    }
}
