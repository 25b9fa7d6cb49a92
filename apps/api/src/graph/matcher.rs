//! Text matcher — decides whether a profile attribute and a career label are related.
//!
//! Relation is boolean and purely lexical:
//! 1. Lower-case both strings and split on whitespace / commas.
//! 2. Drop tokens of ≤ 2 characters.
//! 3. Related if any token of one contains, or is contained in, any token of the other.
//! 4. Course attributes are also related to any career naming a generic professional role.

use serde::{Deserialize, Serialize};

/// Which profile field an attribute came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttributeKind {
    Course,
    Skill,
    Interest,
}

/// Role words that a course alone is assumed to be relevant to.
pub const COURSE_ROLE_KEYWORDS: &[&str] = &["engineer", "developer", "analyst", "manager"];

/// Tokens this short carry no signal ("of", "in", "-", "UI").
const MIN_TOKEN_CHARS: usize = 3;

/// Lower-cased tokens of `text` that survive the noise filter.
pub fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|t| t.chars().count() >= MIN_TOKEN_CHARS)
        .map(str::to_string)
        .collect()
}

/// Symmetric token-containment check, independent of attribute kind.
pub fn tokens_overlap(a: &str, b: &str) -> bool {
    let a_tokens = tokenize(a);
    let b_tokens = tokenize(b);
    a_tokens.iter().any(|x| {
        b_tokens
            .iter()
            .any(|y| x.contains(y.as_str()) || y.contains(x.as_str()))
    })
}

/// Returns true when `attribute_text` justifies a direct edge to `career_text`.
pub fn is_related(attribute_text: &str, career_text: &str, kind: AttributeKind) -> bool {
    if tokens_overlap(attribute_text, career_text) {
        return true;
    }
    if kind == AttributeKind::Course {
        let career = career_text.to_lowercase();
        return COURSE_ROLE_KEYWORDS.iter().any(|kw| career.contains(kw));
    }
    false
}
