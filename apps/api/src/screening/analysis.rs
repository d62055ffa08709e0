//! Screening pipeline: template gate → skill extraction → ATS score → role ranking.

use std::collections::BTreeSet;

use serde::Serialize;
use tracing::{debug, info};

use crate::screening::catalog::Catalog;
use crate::screening::extractor::{extract_skills, normalize_text};
use crate::screening::roles::{recommend_roles, RoleRecommendation};
use crate::screening::score::{compute_score, MatchResult, MatchTier};
use crate::screening::template::{validate_template, TemplateCheck};

#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    pub template: TemplateCheck,
    pub resume_skills: BTreeSet<String>,
    pub jd_skills: BTreeSet<String>,
    pub match_result: MatchResult,
    pub tier: MatchTier,
    pub recommended_roles: Vec<RoleRecommendation>,
}

/// Result of screening one resume against one JD.
#[derive(Debug, Clone)]
pub enum AnalysisOutcome {
    /// Resume does not look like a standard resume; nothing was scored.
    Rejected { template: TemplateCheck },
    Accepted(AnalysisReport),
}

/// Runs the full screening pipeline. Never fails: empty inputs resolve to
/// empty skill sets and a zero score.
pub fn analyze(resume_text: &str, jd_text: &str, catalog: &Catalog, top_n: usize) -> AnalysisOutcome {
    let resume_text = normalize_text(resume_text);
    let jd_text = normalize_text(jd_text);

    let template = validate_template(&resume_text);
    if !template.passed {
        info!(
            matched_sections = template.matched_count,
            "Resume rejected: template not standard"
        );
        return AnalysisOutcome::Rejected { template };
    }

    let resume_skills = extract_skills(&resume_text, &catalog.vocabulary);
    let jd_skills = extract_skills(&jd_text, &catalog.vocabulary);
    debug!(
        resume_skills = resume_skills.len(),
        jd_skills = jd_skills.len(),
        "Skills extracted"
    );

    let match_result = compute_score(&resume_skills, &jd_skills);
    let tier = MatchTier::from_score(match_result.score);
    let recommended_roles = recommend_roles(&resume_skills, &catalog.role_profiles, top_n);

    info!(
        score = match_result.score,
        tier = tier.label(),
        roles = recommended_roles.len(),
        "Resume accepted"
    );

    AnalysisOutcome::Accepted(AnalysisReport {
        template,
        resume_skills,
        jd_skills,
        match_result,
        tier,
        recommended_roles,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(items: &[&str]) -> BTreeSet<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn accepted(outcome: AnalysisOutcome) -> AnalysisReport {
        match outcome {
            AnalysisOutcome::Accepted(report) => report,
            AnalysisOutcome::Rejected { template } => {
                panic!("expected accepted, got rejected: {template:?}")
            }
        }
    }

    #[test]
    fn test_three_section_resume_scores_against_jd() {
        let catalog = Catalog::builtin().unwrap();
        let report = accepted(analyze(
            "education experience skills python sql",
            "python sql tableau",
            &catalog,
            3,
        ));

        assert!(report.template.passed);
        assert_eq!(report.template.matched_count, 3);
        assert_eq!(report.match_result.matched, set(&["python", "sql"]));
        assert_eq!(report.match_result.missing, set(&["tableau"]));
        assert_eq!(report.match_result.score, 67);
        assert_eq!(report.tier, MatchTier::ModeratelySuitable);
    }

    #[test]
    fn test_single_section_resume_is_rejected() {
        let catalog = Catalog::builtin().unwrap();
        match analyze("education", "python sql", &catalog, 3) {
            AnalysisOutcome::Rejected { template } => {
                assert!(!template.passed);
                assert_eq!(template.matched_count, 1);
            }
            AnalysisOutcome::Accepted(_) => panic!("expected rejection"),
        }
    }

    #[test]
    fn test_jd_without_recognized_skills_scores_zero() {
        let catalog = Catalog::builtin().unwrap();
        let report = accepted(analyze(
            "education skills experience python",
            "friendly team player who loves coffee",
            &catalog,
            3,
        ));
        assert_eq!(report.match_result.score, 0);
        assert!(report.match_result.matched.is_empty());
        assert!(report.match_result.missing.is_empty());
        assert_eq!(report.tier, MatchTier::LowMatch);
    }

    #[test]
    fn test_mixed_case_inputs_are_normalized() {
        let catalog = Catalog::builtin().unwrap();
        let report = accepted(analyze(
            "EDUCATION\nSKILLS: Python, SQL, Tableau\nEXPERIENCE",
            "Python SQL Tableau",
            &catalog,
            3,
        ));
        assert_eq!(report.match_result.score, 100);
        assert_eq!(report.tier, MatchTier::HighlySuitable);
    }

    #[test]
    fn test_recommendations_come_from_resume_skills_only() {
        let catalog = Catalog::builtin().unwrap();
        let report = accepted(analyze(
            "education projects experience pytorch tensorflow python",
            "excel",
            &catalog,
            3,
        ));
        assert_eq!(report.recommended_roles[0].role, "ML Engineer");
        assert!(report
            .recommended_roles
            .iter()
            .all(|r| !r.matched_skills.contains(&"excel".to_string())));
    }

    #[test]
    fn test_top_n_is_respected() {
        let catalog = Catalog::builtin().unwrap();
        let report = accepted(analyze(
            "education projects experience sql python docker excel",
            "sql",
            &catalog,
            1,
        ));
        assert_eq!(report.recommended_roles.len(), 1);
    }
}
