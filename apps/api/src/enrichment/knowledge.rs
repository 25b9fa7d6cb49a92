//! Career knowledge — the static lookup behind fallback records.
//!
//! `EnrichmentService` holds an `Arc<dyn CareerKnowledge>`, so the table can be
//! extended or replaced without touching parsing logic. The default
//! `StaticCareerKnowledge` ships a built-in table and can merge extra entries
//! from a JSON file at startup.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum KnowledgeError {
    #[error("failed to read career knowledge file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid career knowledge file {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

/// A canned career description, selected when a role name contains one of its keywords.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CareerTemplate {
    /// Lower-case substrings matched against the lower-cased role name.
    pub keywords: Vec<String>,
    pub description: String,
    pub skills: Vec<String>,
    pub education: String,
    pub salary: String,
}

impl CareerTemplate {
    fn matches(&self, role_lower: &str) -> bool {
        self.keywords
            .iter()
            .any(|k| !k.is_empty() && role_lower.contains(&k.to_lowercase()))
    }
}

/// Lookup from a role name to a canned career description.
pub trait CareerKnowledge: Send + Sync {
    /// Returns the first template whose keyword occurs in `role`, if any.
    fn lookup(&self, role: &str) -> Option<&CareerTemplate>;
}

/// Ordered keyword table. The first matching entry wins.
#[derive(Debug, Clone)]
pub struct StaticCareerKnowledge {
    entries: Vec<CareerTemplate>,
}

impl StaticCareerKnowledge {
    pub fn new(entries: Vec<CareerTemplate>) -> Self {
        Self { entries }
    }

    /// The built-in table.
    pub fn builtin() -> Self {
        Self::new(builtin_entries())
    }

    /// Appends `extra` after the existing entries, so built-ins keep precedence.
    pub fn with_entries(mut self, extra: Vec<CareerTemplate>) -> Self {
        self.entries.extend(extra);
        self
    }

    /// Loads additional entries from a JSON array of `CareerTemplate`s.
    pub fn extend_from_file(self, path: &Path) -> Result<Self, KnowledgeError> {
        let display = path.display().to_string();
        let raw = std::fs::read_to_string(path).map_err(|source| KnowledgeError::Io {
            path: display.clone(),
            source,
        })?;
        let extra: Vec<CareerTemplate> =
            serde_json::from_str(&raw).map_err(|source| KnowledgeError::Parse {
                path: display,
                source,
            })?;
        Ok(self.with_entries(extra))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

impl CareerKnowledge for StaticCareerKnowledge {
    fn lookup(&self, role: &str) -> Option<&CareerTemplate> {
        let role_lower = role.to_lowercase();
        self.entries.iter().find(|e| e.matches(&role_lower))
    }
}

fn template(
    keywords: &[&str],
    description: &str,
    skills: &[&str],
    education: &str,
    salary: &str,
) -> CareerTemplate {
    CareerTemplate {
        keywords: keywords.iter().map(|k| k.to_string()).collect(),
        description: description.to_string(),
        skills: skills.iter().map(|s| s.to_string()).collect(),
        education: education.to_string(),
        salary: salary.to_string(),
    }
}

fn builtin_entries() -> Vec<CareerTemplate> {
    vec![
        template(
            &["frontend", "front end"],
            "Frontend developers build the parts of web applications that users see and interact with. \
             They turn designs into responsive, accessible interfaces and keep them fast across browsers and devices.",
            &["HTML", "CSS", "JavaScript", "React", "Responsive Design", "Version Control"],
            "Bachelor's degree in Computer Science or Information Technology, or an equivalent portfolio",
            "Entry level: $55,000 - $75,000 per year",
        ),
        template(
            &["backend", "back end"],
            "Backend developers design and maintain the servers, APIs and databases that power applications. \
             They focus on correctness, performance and security of the data flowing behind the interface.",
            &["API Design", "SQL", "Python", "Node.js", "Authentication", "Testing"],
            "Bachelor's degree in Computer Science or Software Engineering",
            "Entry level: $60,000 - $80,000 per year",
        ),
        template(
            &["full stack", "fullstack"],
            "Full stack developers work across both the user interface and the server side of an application. \
             They deliver features end to end, from the database schema to the screen.",
            &["JavaScript", "React", "Node.js", "SQL", "REST APIs", "Git"],
            "Bachelor's degree in Computer Science or Information Technology",
            "Entry level: $60,000 - $85,000 per year",
        ),
        template(
            &["data"],
            "Data professionals collect, clean and analyze data to answer business questions. \
             They build reports and models that help teams make evidence-based decisions.",
            &["SQL", "Python", "Statistics", "Data Visualization", "Excel", "Critical Thinking"],
            "Bachelor's degree in Computer Science, Statistics, Mathematics or a related field",
            "Entry level: $55,000 - $75,000 per year",
        ),
        template(
            &["cloud"],
            "Cloud engineers design, deploy and operate infrastructure on cloud platforms. \
             They automate provisioning and keep services reliable, secure and cost-effective.",
            &["AWS", "Linux", "Networking", "Infrastructure as Code", "Containers", "Monitoring"],
            "Bachelor's degree in Computer Science or Information Technology; cloud certifications are a plus",
            "Entry level: $65,000 - $90,000 per year",
        ),
        template(
            &["devops", "site reliability"],
            "DevOps engineers bridge development and operations by automating builds, tests and deployments. \
             They own the pipelines and tooling that let teams ship safely and often.",
            &["CI/CD", "Docker", "Kubernetes", "Scripting", "Linux", "Monitoring"],
            "Bachelor's degree in Computer Science or Information Technology",
            "Entry level: $65,000 - $90,000 per year",
        ),
        template(
            &["mobile", "android", "ios developer"],
            "Mobile developers build applications for phones and tablets. \
             They balance platform guidelines, performance and offline behavior to deliver smooth user experiences.",
            &["Kotlin", "Swift", "Flutter", "Mobile UI Design", "REST APIs", "App Store Deployment"],
            "Bachelor's degree in Computer Science or Information Technology",
            "Entry level: $55,000 - $80,000 per year",
        ),
        template(
            &["security", "cyber"],
            "Security specialists protect systems and data from attacks. \
             They assess vulnerabilities, monitor for threats and respond to incidents.",
            &["Networking", "Threat Analysis", "Linux", "Cryptography Basics", "Incident Response", "Scripting"],
            "Bachelor's degree in Computer Science or Information Security; certifications such as Security+ help",
            "Entry level: $65,000 - $90,000 per year",
        ),
        template(
            &["machine learning", "artificial intelligence", "ai engineer", "ml engineer"],
            "Machine learning engineers build systems that learn from data. \
             They prepare datasets, train and evaluate models, and deploy them into production services.",
            &["Python", "Linear Algebra", "Statistics", "PyTorch", "Data Pipelines", "Model Evaluation"],
            "Bachelor's degree in Computer Science or Mathematics; graduate study is common",
            "Entry level: $75,000 - $100,000 per year",
        ),
        template(
            &["designer", "user experience"],
            "Designers shape how products look and feel. \
             They research user needs, prototype solutions and refine them through testing.",
            &["User Research", "Wireframing", "Figma", "Prototyping", "Visual Design", "Usability Testing"],
            "Bachelor's degree in Multimedia Arts, Design or Information Technology, plus a portfolio",
            "Entry level: $45,000 - $65,000 per year",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_lookup_matches_case_insensitive_substring() {
        let kb = StaticCareerKnowledge::builtin();
        let hit = kb.lookup("Senior FRONTEND Developer").unwrap();
        assert!(hit.keywords.contains(&"frontend".to_string()));
        assert!(!hit.skills.is_empty());
    }

    #[test]
    fn test_lookup_first_match_wins() {
        // "Cloud Data Engineer" contains both "data" and "cloud"; "data" is earlier.
        let kb = StaticCareerKnowledge::builtin();
        let hit = kb.lookup("Cloud Data Engineer").unwrap();
        assert!(hit.keywords.contains(&"data".to_string()));
    }

    #[test]
    fn test_lookup_miss() {
        let kb = StaticCareerKnowledge::builtin();
        assert!(kb.lookup("Nurse Practitioner").is_none());
    }

    #[test]
    fn test_builtin_skills_are_non_trivial() {
        let kb = StaticCareerKnowledge::builtin();
        for entry in &kb.entries {
            assert!((3..=6).contains(&entry.skills.len()), "{:?}", entry.keywords);
            assert!(entry.skills.iter().all(|s| s.chars().count() > 2));
        }
    }

    #[test]
    fn test_extra_entries_do_not_override_builtins() {
        let kb = StaticCareerKnowledge::builtin().with_entries(vec![template(
            &["frontend", "nurse"],
            "Custom.",
            &["Care", "Empathy", "Charting"],
            "BS Nursing",
            "Varies",
        )]);
        assert_ne!(kb.lookup("Frontend Developer").unwrap().description, "Custom.");
        assert_eq!(kb.lookup("Nurse").unwrap().description, "Custom.");
    }

    #[test]
    fn test_extend_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"keywords": ["pilot"], "description": "Flies aircraft.",
                 "skills": ["Navigation", "Communication", "Meteorology"],
                 "education": "Flight school", "salary": "Varies"}}]"#
        )
        .unwrap();

        let kb = StaticCareerKnowledge::builtin()
            .extend_from_file(file.path())
            .unwrap();
        assert_eq!(kb.len(), StaticCareerKnowledge::builtin().len() + 1);
        assert_eq!(kb.lookup("Airline Pilot").unwrap().education, "Flight school");
    }

    #[test]
    fn test_extend_from_invalid_file_is_parse_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();
        let err = StaticCareerKnowledge::builtin()
            .extend_from_file(file.path())
            .unwrap_err();
        assert!(matches!(err, KnowledgeError::Parse { .. }));
    }

    #[test]
    fn test_extend_from_missing_file_is_io_error() {
        let err = StaticCareerKnowledge::builtin()
            .extend_from_file(Path::new("/definitely/not/here.json"))
            .unwrap_err();
        assert!(matches!(err, KnowledgeError::Io { .. }));
    }
}
