//! ATS score: how much of the JD's recognized skill set the resume covers.

use std::collections::BTreeSet;

use serde::Serialize;

/// Scores at or above this are "Highly Suitable".
pub const HIGHLY_SUITABLE_THRESHOLD: u32 = 80;
/// Scores at or above this (and below `HIGHLY_SUITABLE_THRESHOLD`) are "Moderately Suitable".
pub const MODERATELY_SUITABLE_THRESHOLD: u32 = 50;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchResult {
    pub score: u32, // 0 – 100
    pub matched: BTreeSet<String>,
    pub missing: BTreeSet<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchTier {
    HighlySuitable,
    ModeratelySuitable,
    LowMatch,
}

impl MatchTier {
    pub fn from_score(score: u32) -> Self {
        match score {
            s if s >= HIGHLY_SUITABLE_THRESHOLD => MatchTier::HighlySuitable,
            s if s >= MODERATELY_SUITABLE_THRESHOLD => MatchTier::ModeratelySuitable,
            _ => MatchTier::LowMatch,
        }
    }

    pub fn rank(self) -> u8 {
        match self {
            MatchTier::HighlySuitable => 1,
            MatchTier::ModeratelySuitable => 2,
            MatchTier::LowMatch => 3,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            MatchTier::HighlySuitable => "Highly Suitable",
            MatchTier::ModeratelySuitable => "Moderately Suitable",
            MatchTier::LowMatch => "Low Match",
        }
    }
}

/// matched = R ∩ J, missing = J − R, score = round(100 · |matched| / |J|).
/// A JD with no recognized skills scores 0.
pub fn compute_score(resume_skills: &BTreeSet<String>, jd_skills: &BTreeSet<String>) -> MatchResult {
    let matched: BTreeSet<String> = jd_skills.intersection(resume_skills).cloned().collect();
    let missing: BTreeSet<String> = jd_skills.difference(resume_skills).cloned().collect();

    let score = if jd_skills.is_empty() {
        0
    } else {
        ((matched.len() as f64 / jd_skills.len() as f64) * 100.0).round() as u32
    };

    MatchResult {
        score,
        matched,
        missing,
    }
}
