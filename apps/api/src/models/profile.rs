use serde::{Deserialize, Serialize};

/// A user's profile as supplied by the portal. Every field is optional;
/// missing or blank fields simply contribute no attributes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    #[serde(default)]
    pub course: Option<String>,
    /// Comma-separated skill list.
    #[serde(default)]
    pub skills: Option<String>,
    /// Comma-separated interest list.
    #[serde(default)]
    pub career_interests: Option<String>,
}

impl Profile {
    /// The declared course, trimmed, if it has any content.
    pub fn course(&self) -> Option<&str> {
        self.course
            .as_deref()
            .map(str::trim)
            .filter(|c| !c.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_deserialize_as_none() {
        let profile: Profile = serde_json::from_str(r#"{"course": "BS CS"}"#).unwrap();
        assert_eq!(profile.course.as_deref(), Some("BS CS"));
        assert!(profile.skills.is_none());
        assert!(profile.career_interests.is_none());
    }

    #[test]
    fn test_blank_course_is_absent() {
        let profile = Profile {
            course: Some("   ".to_string()),
            ..Profile::default()
        };
        assert_eq!(profile.course(), None);
    }
}
