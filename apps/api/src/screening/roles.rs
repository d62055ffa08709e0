//! Role recommendation: ranks role profiles by how much of each one the resume covers.

use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;

/// Role name → expected skills. Ordered by role name.
pub type RoleProfiles = BTreeMap<String, BTreeSet<String>>;

pub const DEFAULT_TOP_N: usize = 3;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoleRecommendation {
    pub role: String,
    /// Fraction of the role's skills present in the resume, 0.0 – 1.0.
    pub score: f64,
    pub matched_count: usize,
    pub matched_skills: Vec<String>,
}

/// Returns at most `top_n` roles, best coverage first.
///
/// Roles sharing no skill with the resume are dropped entirely, even when
/// that leaves fewer than `top_n` results. Equal coverage is ordered by
/// matched count, then by role name.
pub fn recommend_roles(
    resume_skills: &BTreeSet<String>,
    profiles: &RoleProfiles,
    top_n: usize,
) -> Vec<RoleRecommendation> {
    let mut scored: Vec<RoleRecommendation> = profiles
        .iter()
        .filter_map(|(role, role_skills)| {
            // BTreeSet intersection yields sorted skill names
            let matched_skills: Vec<String> =
                resume_skills.intersection(role_skills).cloned().collect();
            if matched_skills.is_empty() {
                return None;
            }
            let score = matched_skills.len() as f64 / role_skills.len().max(1) as f64;
            Some(RoleRecommendation {
                role: role.clone(),
                score,
                matched_count: matched_skills.len(),
                matched_skills,
            })
        })
        .collect();

    // Stable sort keeps the role-name order from the BTreeMap for full ties.
    scored.sort_by(|a, b| {
        b.score
            .total_cmp(&a.score)
            .then_with(|| b.matched_count.cmp(&a.matched_count))
    });
    scored.truncate(top_n);
    scored
}
