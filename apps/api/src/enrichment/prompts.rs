// Prompt constants for career enrichment.
// The numbered section layout here is what parser::split_sections expects back.

/// Career overview prompt template. Replace `{role}` and `{course}` before sending.
pub const CAREER_INFO_PROMPT_TEMPLATE: &str = r#"You are a career advisor for university students looking for internships.

Give a short overview of the role "{role}" for a student whose course is {course}.

Answer in exactly four numbered sections and nothing else:
1) Description: 2-3 sentences on what this role does day to day.
2) Key skills: 3-6 key skills, comma-separated.
3) Education: the typical education path into this role.
4) Salary: a typical entry-level salary range.

Do not add introductions, extra sections or closing remarks."#;

/// Stand-in for the course when the profile does not declare one.
pub const UNKNOWN_COURSE: &str = "not specified";

/// Fills the career prompt template.
pub fn career_info_prompt(role: &str, course: Option<&str>) -> String {
    CAREER_INFO_PROMPT_TEMPLATE
        .replace("{role}", role)
        .replace("{course}", course.unwrap_or(UNKNOWN_COURSE))
}
