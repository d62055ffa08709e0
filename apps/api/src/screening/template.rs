use serde::Serialize;

/// Section names a standard resume is expected to carry.
pub const RESUME_SECTIONS: &[&str] = &[
    "education",
    "skills",
    "experience",
    "projects",
    "certifications",
];

/// Minimum number of `RESUME_SECTIONS` a resume must mention to be screened.
pub const MIN_SECTIONS_REQUIRED: usize = 3;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TemplateCheck {
    pub passed: bool,
    pub matched_count: usize,
    pub matched_sections: Vec<String>,
}

/// Counts section names appearing anywhere in the text.
///
/// Plain substring containment, not word-bounded: "hardskills" still counts
/// as a skills section. This is looser than skill extraction and stays that way.
pub fn validate_template(text: &str) -> TemplateCheck {
    let text_lower = text.to_lowercase();

    let matched_sections: Vec<String> = RESUME_SECTIONS
        .iter()
        .filter(|section| text_lower.contains(*section))
        .map(|section| section.to_string())
        .collect();

    let matched_count = matched_sections.len();

    TemplateCheck {
        passed: matched_count >= MIN_SECTIONS_REQUIRED,
        matched_count,
        matched_sections,
    }
}
