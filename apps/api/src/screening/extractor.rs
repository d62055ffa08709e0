//! Skill extraction: finds vocabulary entries that occur as whole tokens in a text.

use std::collections::BTreeSet;

use crate::screening::catalog::SkillVocabulary;

/// Lowercases raw text before matching. Both the resume and the JD go through this.
pub fn normalize_text(text: &str) -> String {
    text.to_lowercase()
}

/// Returns every vocabulary skill found in `text`.
///
/// A skill only counts when it is not part of a larger alphanumeric token:
/// "r" does not match inside "power", "sql" does not match inside "nosql".
pub fn extract_skills(text: &str, vocabulary: &SkillVocabulary) -> BTreeSet<String> {
    if text.is_empty() || vocabulary.is_empty() {
        return BTreeSet::new();
    }

    vocabulary
        .iter()
        .filter(|skill| skill.matcher.is_match(text))
        .map(|skill| skill.name.clone())
        .collect()
}
