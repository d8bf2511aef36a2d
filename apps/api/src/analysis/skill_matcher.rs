//! Skill matcher — whole-phrase presence checks against the vocabulary.
//!
//! Each phrase gets a `\b<phrase>\b` pattern compiled once when the matcher is
//! built. The matcher is shared read-only (`Arc<SkillMatcher>`) across requests.

use std::collections::BTreeSet;

use regex::Regex;

use crate::analysis::normalizer::NormalizedText;
use crate::analysis::vocabulary::{SkillVocabulary, VocabularyError};

/// Skills found in a text, deduplicated and sorted for stable presentation.
pub type SkillSet = BTreeSet<String>;

#[derive(Debug)]
struct CompiledSkill {
    phrase: String,
    pattern: Regex,
}

#[derive(Debug)]
pub struct SkillMatcher {
    vocabulary: SkillVocabulary,
    compiled: Vec<CompiledSkill>,
}

impl SkillMatcher {
    pub fn new(vocabulary: SkillVocabulary) -> Result<Self, VocabularyError> {
        let compiled = vocabulary
            .phrases()
            .iter()
            .map(|phrase| {
                let pattern = Regex::new(&format!(r"\b{}\b", regex::escape(phrase))).map_err(
                    |e| VocabularyError::Pattern {
                        phrase: phrase.clone(),
                        reason: e.to_string(),
                    },
                )?;
                Ok::<_, VocabularyError>(CompiledSkill {
                    phrase: phrase.clone(),
                    pattern,
                })
            })
            .collect::<Result<Vec<_>, VocabularyError>>()?;

        Ok(Self {
            vocabulary,
            compiled,
        })
    }

    pub fn vocabulary(&self) -> &SkillVocabulary {
        &self.vocabulary
    }

    /// Returns every vocabulary phrase present in `text` as a whole word or
    /// contiguous whole phrase. Exact literal matching only, no stemming.
    pub fn extract_skills(&self, text: &NormalizedText) -> SkillSet {
        if text.is_empty() {
            return SkillSet::new();
        }

        self.compiled
            .iter()
            .filter(|skill| skill.pattern.is_match(text.as_str()))
            .map(|skill| skill.phrase.clone())
            .collect()
    }
}
