// Resume ↔ job description analysis core.
// Implements: normalization, skill extraction, TF-IDF similarity, banding.
// Everything here is pure and synchronous; no I/O.

pub mod band;
pub mod handlers;
pub mod normalizer;
pub mod pipeline;
pub mod similarity;
pub mod skill_matcher;
pub mod vocabulary;

pub use band::MatchBand;
pub use pipeline::{analyze, AnalysisResult};
pub use similarity::MatchScore;
pub use skill_matcher::{SkillMatcher, SkillSet};
pub use vocabulary::SkillVocabulary;
