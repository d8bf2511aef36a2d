use serde::{Deserialize, Serialize};

use crate::analysis::similarity::MatchScore;

/// Qualitative label derived from a match score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchBand {
    StrongMatch,
    ModerateMatch,
    WeakMatch,
}

/// (inclusive lower bound, band), highest threshold first. Anything below the
/// last bound is `WeakMatch`.
pub const BAND_LADDER: &[(f64, MatchBand)] = &[
    (75.0, MatchBand::StrongMatch),
    (55.0, MatchBand::ModerateMatch),
];

impl MatchBand {
    pub fn from_score(score: MatchScore) -> Self {
        BAND_LADDER
            .iter()
            .find(|(lower, _)| score.value() >= *lower)
            .map(|(_, band)| *band)
            .unwrap_or(MatchBand::WeakMatch)
    }

    pub fn label(self) -> &'static str {
        match self {
            MatchBand::StrongMatch => "Strong Match",
            MatchBand::ModerateMatch => "Moderate Match",
            MatchBand::WeakMatch => "Weak Match",
        }
    }

    pub fn advice(self) -> &'static str {
        match self {
            MatchBand::StrongMatch => "Apply with confidence",
            MatchBand::ModerateMatch => "Upskill recommended",
            MatchBand::WeakMatch => "Resume improvement needed",
        }
    }
}
