use serde::{Deserialize, Serialize};

/// Structured description of one career, shown when a career node is selected.
///
/// Built per request and never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CareerInfoRecord {
    pub title: String,
    /// 2–3 sentences.
    pub description: String,
    /// Short skill labels, at most 6.
    pub skills: Vec<String>,
    pub education: String,
    pub salary: String,
    /// True when parsed from a generator response, false for the static fallback.
    pub ai_generated: bool,
}
