//! Normalizer — reduces raw resume / JD text to a comparable token stream.

use std::fmt;

use serde::Serialize;

/// Text reduced to lowercase ASCII alphanumeric tokens joined by single spaces.
///
/// Only constructible through [`normalize`], so every instance holds the
/// `[a-z0-9 ]` invariant with no doubled, leading or trailing spaces.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct NormalizedText(String);

impl NormalizedText {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates the space-separated tokens.
    pub fn tokens(&self) -> impl Iterator<Item = &str> {
        self.0.split(' ').filter(|t| !t.is_empty())
    }
}

impl fmt::Display for NormalizedText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Canonicalizes raw text.
///
/// Lower-cases, turns every whitespace run (newlines included) into a single
/// space, drops anything outside `[a-z0-9]`, then trims. Dropped characters
/// are not separators: `"node.js"` becomes `"nodejs"`. Total and idempotent.
pub fn normalize(text: &str) -> NormalizedText {
    let lowered = text.to_lowercase();

    let mut kept = String::with_capacity(lowered.len());
    for c in lowered.chars() {
        if c.is_whitespace() {
            kept.push(' ');
        } else if c.is_ascii_lowercase() || c.is_ascii_digit() {
            kept.push(c);
        }
    }

    // Removal can leave "a  b" behind (e.g. "a - b"), so collapse last.
    NormalizedText(kept.split_whitespace().collect::<Vec<_>>().join(" "))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn is_canonical(s: &str) -> bool {
        s.chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == ' ')
            && !s.contains("  ")
            && !s.starts_with(' ')
            && !s.ends_with(' ')
    }

    const SAMPLES: &[&str] = &[
        "",
        "   ",
        "\n\n\t",
        "I know Python and SQL.",
        "Looking for Python, Java, and SQL skills.",
        "Senior Engineer —\n\nRust / C++ / Node.js\r\n  5+ years",
        "a - b",
        "ÉCOLE Polytechnique: Machine   Learning!!",
        "Power BI\tExcel\u{00a0}SQL",
    ];

    #[test]
    fn test_lowercases_and_strips_punctuation() {
        assert_eq!(normalize("I know Python and SQL.").as_str(), "i know python and sql");
    }

    #[test]
    fn test_newlines_collapse_to_single_space() {
        assert_eq!(normalize("python\n\n\nsql").as_str(), "python sql");
        assert_eq!(normalize("python\r\n sql").as_str(), "python sql");
    }

    #[test]
    fn test_removed_characters_do_not_split_tokens() {
        assert_eq!(normalize("Node.js, C++").as_str(), "nodejs c");
    }

    #[test]
    fn test_punctuation_between_spaces_leaves_single_space() {
        assert_eq!(normalize("a - b").as_str(), "a b");
    }

    #[test]
    fn test_non_ascii_letters_are_removed() {
        assert_eq!(normalize("Café résumé").as_str(), "caf rsum");
    }

    #[test]
    fn test_empty_and_whitespace_only_become_empty() {
        assert!(normalize("").is_empty());
        assert!(normalize(" \t\n ").is_empty());
        assert!(normalize("!!! ---").is_empty());
    }

    #[test]
    fn test_output_is_canonical() {
        for s in SAMPLES {
            let n = normalize(s);
            assert!(is_canonical(n.as_str()), "not canonical: {:?} -> {:?}", s, n);
        }
    }

    #[test]
    fn test_idempotent() {
        for s in SAMPLES {
            let once = normalize(s);
            let twice = normalize(once.as_str());
            assert_eq!(once, twice, "input {:?}", s);
        }
    }

    #[test]
    fn test_tokens_split_on_spaces() {
        let n = normalize("Machine  Learning, SQL");
        assert_eq!(n.tokens().collect::<Vec<_>>(), vec!["machine", "learning", "sql"]);
        assert_eq!(normalize("").tokens().count(), 0);
    }
}
