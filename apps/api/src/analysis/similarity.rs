//! Similarity scoring — TF-IDF cosine similarity over a two-document corpus.
//!
//! Weighting is fixed:
//! - tf(t, d) = raw count of `t` in `d`
//! - idf(t)   = ln((1 + n) / (1 + df(t))) + 1, n = 2
//! - score    = cosine(v_a, v_b) × 100, rounded to two decimals
//!
//! Terms shared by both documents get idf 1.0; terms unique to one get
//! ln(3/2) + 1. Disjoint or empty documents score 0.00.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::analysis::normalizer::NormalizedText;

/// Similarity in [0, 100], two-decimal precision. Deserialization goes
/// through [`MatchScore::from_percentage`], so the range holds there too.
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(from = "f64", into = "f64")]
pub struct MatchScore(f64);

impl From<f64> for MatchScore {
    fn from(value: f64) -> Self {
        MatchScore::from_percentage(value)
    }
}

impl From<MatchScore> for f64 {
    fn from(score: MatchScore) -> Self {
        score.0
    }
}

impl MatchScore {
    pub const MIN: MatchScore = MatchScore(0.0);
    pub const MAX: MatchScore = MatchScore(100.0);

    /// Clamps to [0, 100] and rounds to two decimals. NaN maps to 0.
    pub fn from_percentage(value: f64) -> Self {
        if value.is_nan() {
            return Self::MIN;
        }
        MatchScore((value.clamp(Self::MIN.0, Self::MAX.0) * 100.0).round() / 100.0)
    }

    pub fn value(self) -> f64 {
        self.0
    }
}

impl fmt::Display for MatchScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

const CORPUS_SIZE: f64 = 2.0;

/// Scores how alike two normalized texts are. Symmetric and pure.
pub fn score(a: &NormalizedText, b: &NormalizedText) -> MatchScore {
    let tf_a = term_counts(a);
    let tf_b = term_counts(b);
    if tf_a.is_empty() || tf_b.is_empty() {
        return MatchScore::MIN;
    }

    let terms: BTreeSet<&str> = tf_a.keys().chain(tf_b.keys()).copied().collect();

    let mut dot = 0.0_f64;
    let mut norm_a = 0.0_f64;
    let mut norm_b = 0.0_f64;

    for term in terms {
        let count_a = tf_a.get(term).copied().unwrap_or(0) as f64;
        let count_b = tf_b.get(term).copied().unwrap_or(0) as f64;
        let df = (count_a > 0.0) as u8 + (count_b > 0.0) as u8;
        let idf = smoothed_idf(df);

        let w_a = count_a * idf;
        let w_b = count_b * idf;
        dot += w_a * w_b;
        norm_a += w_a * w_a;
        norm_b += w_b * w_b;
    }

    let denominator = norm_a.sqrt() * norm_b.sqrt();
    if denominator == 0.0 || dot == 0.0 {
        return MatchScore::MIN;
    }

    MatchScore::from_percentage(dot / denominator * 100.0)
}

fn smoothed_idf(document_frequency: u8) -> f64 {
    ((1.0 + CORPUS_SIZE) / (1.0 + document_frequency as f64)).ln() + 1.0
}

// BTreeMap keeps accumulation order fixed so the float sums are reproducible.
fn term_counts(text: &NormalizedText) -> BTreeMap<&str, u32> {
    let mut counts = BTreeMap::new();
    for token in text.tokens() {
        *counts.entry(token).or_insert(0) += 1;
    }
    counts
}
