//! Profile attribute extraction — flattens a `Profile` into the ordered facets
//! that become attribute nodes: course, then skills, then interests.

use serde::Serialize;

use crate::graph::matcher::AttributeKind;
use crate::models::profile::Profile;

pub const MAX_SKILLS: usize = 5;
pub const MAX_INTERESTS: usize = 3;
/// Course names are often long ("Bachelor of Science in ..."); the node label is cut here.
pub const MAX_COURSE_LABEL_CHARS: usize = 24;

/// One facet of the user's profile.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProfileAttribute {
    pub kind: AttributeKind,
    /// Display text. Truncated for courses only.
    pub label: String,
    /// Untruncated text, used for matching and tooltips.
    pub full_label: String,
}

impl ProfileAttribute {
    fn new(kind: AttributeKind, text: &str) -> Self {
        let label = match kind {
            AttributeKind::Course => truncate_label(text, MAX_COURSE_LABEL_CHARS),
            AttributeKind::Skill | AttributeKind::Interest => text.to_string(),
        };
        Self {
            kind,
            label,
            full_label: text.to_string(),
        }
    }
}

/// Builds the attribute list for one graph. Blank fields and blank list
/// entries are skipped rather than treated as errors.
pub fn extract_attributes(profile: &Profile) -> Vec<ProfileAttribute> {
    let mut attributes = Vec::new();

    if let Some(course) = profile.course() {
        attributes.push(ProfileAttribute::new(AttributeKind::Course, course));
    }

    attributes.extend(
        split_list(profile.skills.as_deref(), MAX_SKILLS)
            .map(|s| ProfileAttribute::new(AttributeKind::Skill, s)),
    );
    attributes.extend(
        split_list(profile.career_interests.as_deref(), MAX_INTERESTS)
            .map(|s| ProfileAttribute::new(AttributeKind::Interest, s)),
    );

    attributes
}

fn split_list(raw: Option<&str>, limit: usize) -> impl Iterator<Item = &str> {
    raw.unwrap_or_default()
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .take(limit)
}

/// Cuts `text` to at most `max_chars` characters, ending in an ellipsis when cut.
pub fn truncate_label(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let kept: String = text.chars().take(max_chars.saturating_sub(1)).collect();
    format!("{}…", kept.trim_end())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(course: Option<&str>, skills: Option<&str>, interests: Option<&str>) -> Profile {
        Profile {
            course: course.map(str::to_string),
            skills: skills.map(str::to_string),
            career_interests: interests.map(str::to_string),
        }
    }

    #[test]
    fn test_order_is_course_skills_interests() {
        let attrs = extract_attributes(&profile(
            Some("BS CS"),
            Some("React, CSS"),
            Some("Gaming"),
        ));
        let kinds: Vec<_> = attrs.iter().map(|a| a.kind).collect();
        assert_eq!(
            kinds,
            vec![
                AttributeKind::Course,
                AttributeKind::Skill,
                AttributeKind::Skill,
                AttributeKind::Interest
            ]
        );
        assert_eq!(attrs[1].label, "React");
        assert_eq!(attrs[2].label, "CSS");
    }

    #[test]
    fn test_skills_capped_at_five_interests_at_three() {
        let attrs = extract_attributes(&profile(
            None,
            Some("a1a, b2b, c3c, d4d, e5e, f6f, g7g"),
            Some("w, x, y, z"),
        ));
        let skills = attrs.iter().filter(|a| a.kind == AttributeKind::Skill).count();
        let interests = attrs.iter().filter(|a| a.kind == AttributeKind::Interest).count();
        assert_eq!(skills, MAX_SKILLS);
        assert_eq!(interests, MAX_INTERESTS);
        assert_eq!(attrs.last().unwrap().label, "y");
    }

    #[test]
    fn test_blank_entries_are_skipped() {
        let attrs = extract_attributes(&profile(Some("  "), Some("Rust, , ,Go"), Some("")));
        let labels: Vec<_> = attrs.iter().map(|a| a.label.as_str()).collect();
        assert_eq!(labels, vec!["Rust", "Go"]);
    }

    #[test]
    fn test_empty_profile_has_no_attributes() {
        assert!(extract_attributes(&Profile::default()).is_empty());
    }

    #[test]
    fn test_long_course_label_truncated_full_label_kept() {
        let course = "Bachelor of Science in Information Technology";
        let attrs = extract_attributes(&profile(Some(course), None, None));
        assert_eq!(attrs[0].full_label, course);
        assert!(attrs[0].label.chars().count() <= MAX_COURSE_LABEL_CHARS);
        assert!(attrs[0].label.ends_with('…'));
    }

    #[test]
    fn test_long_skill_label_not_truncated() {
        let skill = "Distributed Systems Observability Engineering";
        let attrs = extract_attributes(&profile(None, Some(skill), None));
        assert_eq!(attrs[0].label, skill);
    }

    #[test]
    fn test_truncate_label_short_text_untouched() {
        assert_eq!(truncate_label("BS CS", 24), "BS CS");
    }
}
