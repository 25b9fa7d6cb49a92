//! Career info parser — turns a free-text generator answer into a `CareerInfoRecord`,
//! and builds the static fallback record when there is no usable answer.
//!
//! Neither entry point fails. A response with no recognisable structure still
//! yields a record whose description is the start of the raw text.
//!
//! # Section extraction
//! The prompt asks for four numbered sections. Markers `"1)"` … `"4)"` are
//! located in order; section k runs from the end of its marker to the start of
//! the next marker found after it, or to the end of the text. A missing marker
//! leaves its section empty.

use crate::enrichment::knowledge::CareerKnowledge;
use crate::models::career::CareerInfoRecord;

const SECTION_COUNT: usize = 4;
pub const MAX_SKILLS: usize = 6;
/// Characters of raw text used as the description when none was parsed.
pub const RAW_DESCRIPTION_CHARS: usize = 300;

const DESCRIPTION_HEADINGS: &[&str] = &["description", "role description", "job description", "overview"];
const SKILL_HEADINGS: &[&str] = &["key skills", "skills", "required skills"];
const EDUCATION_HEADINGS: &[&str] = &["education", "education requirements", "educational requirements", "education path"];
const SALARY_HEADINGS: &[&str] = &["salary", "salary range", "average salary", "typical salary"];

const SKILL_SEPARATORS: &[char] = &[',', '\n', ';', '•', '·', '●', '▪'];

const GENERIC_SKILLS: &[&str] = &[
    "Communication",
    "Problem Solving",
    "Teamwork",
    "Time Management",
];

/// Extracts the role name from a career label: the text before the first
/// hyphen ("Frontend Developer - Junior" and "Data Analyst-BI" both lose their
/// qualifier). A label with nothing before its first hyphen is kept whole.
pub fn role_name(label: &str) -> String {
    let label = label.trim();
    match label.split_once('-') {
        Some((head, _)) if !head.trim().is_empty() => head.trim().to_string(),
        _ => label.to_string(),
    }
}

/// Parses a generator answer for `career_label`. Always returns `ai_generated: true`.
pub fn parse_career_info(raw: &str, career_label: &str) -> CareerInfoRecord {
    let title = role_name(career_label);
    let [description, skills, education, salary] = split_sections(raw);

    let mut description = clean_scalar(strip_heading(&description, DESCRIPTION_HEADINGS));
    if description.is_empty() {
        description = raw.trim().chars().take(RAW_DESCRIPTION_CHARS).collect();
    }
    if description.is_empty() {
        description = format!("No details were returned for {title}.");
    }

    CareerInfoRecord {
        description,
        skills: parse_skills(strip_heading(&skills, SKILL_HEADINGS)),
        education: clean_scalar(strip_heading(&education, EDUCATION_HEADINGS)),
        salary: clean_scalar(strip_heading(&salary, SALARY_HEADINGS)),
        title,
        ai_generated: true,
    }
}

/// Builds the static record for `career_label`. Always returns `ai_generated: false`.
///
/// Uses the first knowledge entry whose keyword occurs in the role name;
/// otherwise a generic record with the user's course as the education field.
pub fn fallback_career_info(
    career_label: &str,
    profile_course: Option<&str>,
    knowledge: &dyn CareerKnowledge,
) -> CareerInfoRecord {
    let title = role_name(career_label);

    if let Some(entry) = knowledge.lookup(&title) {
        return CareerInfoRecord {
            description: entry.description.clone(),
            skills: entry.skills.iter().take(MAX_SKILLS).cloned().collect(),
            education: entry.education.clone(),
            salary: entry.salary.clone(),
            title,
            ai_generated: false,
        };
    }

    let education = profile_course
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| "Bachelor's degree in a related field".to_string());

    CareerInfoRecord {
        description: format!(
            "{title} professionals apply their training to practical problems in their field. \
             The work combines technical knowledge with collaboration and continuous learning."
        ),
        skills: GENERIC_SKILLS.iter().map(|s| s.to_string()).collect(),
        education,
        salary: "Varies by employer, location and experience".to_string(),
        title,
        ai_generated: false,
    }
}

/// Splits `raw` into the four numbered sections, in order.
fn split_sections(raw: &str) -> [String; SECTION_COUNT] {
    // (start, end) byte offsets of each marker that was found
    let mut markers: [Option<(usize, usize)>; SECTION_COUNT] = [None; SECTION_COUNT];
    let mut cursor = 0;
    for (k, slot) in markers.iter_mut().enumerate() {
        let marker = format!("{})", k + 1);
        if let Some(pos) = raw[cursor..].find(&marker) {
            let start = cursor + pos;
            *slot = Some((start, start + marker.len()));
            cursor = start + marker.len();
        }
    }

    let mut sections: [String; SECTION_COUNT] = Default::default();
    for k in 0..SECTION_COUNT {
        if let Some((_, end)) = markers[k] {
            let stop = markers[k + 1..]
                .iter()
                .flatten()
                .map(|&(start, _)| start)
                .next()
                .unwrap_or(raw.len());
            sections[k] = raw[end..stop].trim().to_string();
        }
    }
    sections
}

/// Drops an echoed heading such as "Description:" or "**Key skills**:" from the
/// start of a section. Text that merely begins with the heading word is kept.
fn strip_heading<'a>(section: &'a str, headings: &[&str]) -> &'a str {
    let body = section.trim_start_matches(|c: char| c.is_whitespace() || c == '*' || c == '#');
    for heading in headings {
        let Some(prefix) = body.get(..heading.len()) else {
            continue;
        };
        if !prefix.eq_ignore_ascii_case(heading) {
            continue;
        }
        let rest = body[heading.len()..].trim_start_matches('*');
        if let Some(after_colon) = rest.strip_prefix(':') {
            return after_colon;
        }
        if rest.is_empty() || rest.starts_with('\n') || rest.starts_with("\r\n") {
            return rest;
        }
    }
    body
}

/// Collapses whitespace and strips markdown emphasis.
fn clean_scalar(text: &str) -> String {
    text.replace("**", "")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Splits the skills section into at most `MAX_SKILLS` short labels, dropping
/// noise (≤ 2 characters) and echoed "key skills" instructions.
fn parse_skills(section: &str) -> Vec<String> {
    section
        .split(SKILL_SEPARATORS)
        .map(|s| {
            s.trim()
                .trim_start_matches(['-', '*', '+'])
                .trim_end_matches('.')
                .replace("**", "")
                .trim()
                .to_string()
        })
        .filter(|s| s.chars().count() > 2 && !s.to_lowercase().contains("key skills"))
        .take(MAX_SKILLS)
        .collect()
}
