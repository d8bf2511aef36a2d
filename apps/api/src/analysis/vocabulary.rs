//! Skill vocabulary — the fixed, process-wide list of canonical skill phrases.
//!
//! Validated once at startup. A vocabulary that fails validation is a
//! configuration error and stops the process before it serves requests.

use std::collections::HashSet;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;
use thiserror::Error;
use tracing::info;

use crate::analysis::normalizer::normalize;

/// Built-in skill phrases used when no vocabulary file is configured.
pub const DEFAULT_SKILLS: &[&str] = &[
    "python",
    "java",
    "machine learning",
    "deep learning",
    "data science",
    "sql",
    "html",
    "css",
    "javascript",
    "django",
    "flask",
    "excel",
    "power bi",
    "communication",
    "problem solving",
];

#[derive(Debug, Error, PartialEq)]
pub enum VocabularyError {
    #[error("Skill vocabulary is empty")]
    Empty,

    #[error("Skill phrase at position {0} is empty")]
    EmptyPhrase(usize),

    #[error("Skill phrase '{phrase}' is not in normalized form (expected '{expected}')")]
    Malformed { phrase: String, expected: String },

    #[error("Skill phrase '{0}' appears more than once")]
    Duplicate(String),

    #[error("Failed to compile matcher for skill '{phrase}': {reason}")]
    Pattern { phrase: String, reason: String },
}

/// Ordered, unique, normalized skill phrases.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct SkillVocabulary {
    phrases: Vec<String>,
}

impl SkillVocabulary {
    /// Validates and builds a vocabulary. Phrases must already be normalized:
    /// lowercase, `[a-z0-9 ]` only, single-spaced, trimmed.
    pub fn new<I, S>(phrases: I) -> Result<Self, VocabularyError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let phrases: Vec<String> = phrases.into_iter().map(Into::into).collect();
        if phrases.is_empty() {
            return Err(VocabularyError::Empty);
        }

        let mut seen = HashSet::with_capacity(phrases.len());
        for (idx, phrase) in phrases.iter().enumerate() {
            if phrase.is_empty() {
                return Err(VocabularyError::EmptyPhrase(idx));
            }
            let expected = normalize(phrase);
            if expected.as_str() != phrase {
                return Err(VocabularyError::Malformed {
                    phrase: phrase.clone(),
                    expected: expected.to_string(),
                });
            }
            if !seen.insert(phrase.as_str()) {
                return Err(VocabularyError::Duplicate(phrase.clone()));
            }
        }

        Ok(Self { phrases })
    }

    /// The built-in vocabulary.
    pub fn builtin() -> Self {
        Self {
            phrases: DEFAULT_SKILLS.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Parses a vocabulary file: one phrase per line, blank lines and
    /// `#` comments ignored.
    pub fn parse(contents: &str) -> Result<Self, VocabularyError> {
        Self::new(
            contents
                .lines()
                .map(str::trim)
                .filter(|line| !line.is_empty() && !line.starts_with('#')),
        )
    }

    /// Loads from `path` when given, otherwise falls back to the built-in list.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            info!("Using built-in skill vocabulary ({} phrases)", DEFAULT_SKILLS.len());
            return Ok(Self::builtin());
        };

        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read skill vocabulary '{}'", path.display()))?;
        let vocabulary = Self::parse(&contents)
            .with_context(|| format!("Invalid skill vocabulary '{}'", path.display()))?;
        info!(
            "Loaded skill vocabulary from {} ({} phrases)",
            path.display(),
            vocabulary.len()
        );
        Ok(vocabulary)
    }

    pub fn phrases(&self) -> &[String] {
        &self.phrases
    }

    pub fn len(&self) -> usize {
        self.phrases.len()
    }
}
