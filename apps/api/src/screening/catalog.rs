//! Static screening data: the recognized skill vocabulary and the role profiles.
//!
//! Both tables are compiled in. `Catalog::builtin()` is called once at startup
//! and the result is shared read-only (`Arc<Catalog>` in `AppState`).

use std::collections::{BTreeMap, BTreeSet};

use regex::Regex;

use crate::screening::roles::RoleProfiles;

/// Recognized skills, grouped by the area they come from.
/// "spark" appears twice on purpose; `SkillVocabulary` collapses duplicates.
pub const SKILLS: &[&str] = &[
    // Programming & general
    "python", "r", "sql", "scala", "java", "spark",
    // Data analysis & visualization
    "excel", "power bi", "tableau", "looker", "data analysis", "data visualization",
    "statistics", "reporting", "dashboards", "google analytics",
    // Data engineering
    "etl", "data pipelines", "data warehousing", "airflow", "dbt",
    "apache spark", "spark", "kafka", "snowflake", "bigquery", "redshift",
    "postgresql", "mysql", "mongodb", "redis", "databricks",
    "docker", "kubernetes", "aws", "gcp", "azure", "terraform",
    // Data science & ML
    "machine learning", "deep learning", "nlp", "natural language processing",
    "scikit-learn", "tensorflow", "pytorch", "pandas", "numpy",
    "a/b testing", "experimental design", "predictive modeling",
];

/// Role name → skills a candidate in that role is expected to have.
pub const ROLE_PROFILES: &[(&str, &[&str])] = &[
    (
        "Data Analyst",
        &[
            "sql", "excel", "power bi", "tableau", "looker",
            "dashboards", "reporting", "statistics", "data visualization", "data analysis",
        ],
    ),
    (
        "BI Analyst",
        &[
            "sql", "excel", "power bi", "tableau", "looker",
            "dashboards", "reporting", "data visualization",
        ],
    ),
    (
        "Data Engineer",
        &[
            "python", "sql", "etl", "data pipelines", "data warehousing",
            "airflow", "dbt", "kafka", "apache spark", "spark",
            "snowflake", "bigquery", "redshift",
            "postgresql", "mysql", "mongodb", "redis", "databricks",
            "docker", "kubernetes", "aws", "gcp", "azure", "terraform",
        ],
    ),
    (
        "Analytics Engineer",
        &[
            "sql", "dbt", "data warehousing",
            "snowflake", "bigquery", "redshift",
            "dashboards", "reporting", "data visualization",
        ],
    ),
    (
        "Data Scientist",
        &[
            "python", "r", "sql", "statistics",
            "machine learning", "deep learning",
            "nlp", "natural language processing",
            "scikit-learn", "tensorflow", "pytorch",
            "pandas", "numpy",
            "a/b testing", "experimental design", "predictive modeling",
        ],
    ),
    (
        "ML Engineer",
        &[
            "python", "machine learning", "deep learning",
            "tensorflow", "pytorch",
            "docker", "kubernetes",
            "aws", "gcp", "azure",
        ],
    ),
];

/// A single vocabulary entry with its precompiled whole-token matcher.
#[derive(Debug, Clone)]
pub struct SkillPattern {
    pub name: String,
    pub(crate) matcher: Regex,
}

/// Ordered, duplicate-free list of lowercase skills.
///
/// Matchers are compiled once here so extraction never rebuilds a regex per
/// request.
#[derive(Debug, Clone)]
pub struct SkillVocabulary {
    skills: Vec<SkillPattern>,
}

impl SkillVocabulary {
    pub fn new<I, S>(skills: I) -> Result<Self, regex::Error>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut seen = BTreeSet::new();
        let mut patterns = Vec::new();

        for skill in skills {
            let name = skill.as_ref().trim().to_lowercase();
            if name.is_empty() || !seen.insert(name.clone()) {
                continue;
            }
            let matcher = Regex::new(&boundary_pattern(&name))?;
            patterns.push(SkillPattern { name, matcher });
        }

        Ok(Self { skills: patterns })
    }

    pub fn iter(&self) -> impl Iterator<Item = &SkillPattern> {
        self.skills.iter()
    }

    pub fn names(&self) -> Vec<&str> {
        self.skills.iter().map(|s| s.name.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.skills.len()
    }

    pub fn is_empty(&self) -> bool {
        self.skills.is_empty()
    }
}

/// Case-insensitive literal match bounded by a non-alphanumeric character
/// (or the text edge) on both sides.
fn boundary_pattern(skill: &str) -> String {
    format!(
        r"(?i)(?:^|[^\p{{L}}\p{{N}}]){}(?:[^\p{{L}}\p{{N}}]|$)",
        regex::escape(skill)
    )
}

/// Everything the screening pipeline reads but never writes.
#[derive(Debug, Clone)]
pub struct Catalog {
    pub vocabulary: SkillVocabulary,
    pub role_profiles: RoleProfiles,
}

impl Catalog {
    /// Builds the compiled-in vocabulary and role table.
    pub fn builtin() -> Result<Self, regex::Error> {
        let vocabulary = SkillVocabulary::new(SKILLS.iter().copied())?;

        let role_profiles: RoleProfiles = ROLE_PROFILES
            .iter()
            .map(|(role, skills)| {
                let skills: BTreeSet<String> = skills.iter().map(|s| s.to_string()).collect();
                (role.to_string(), skills)
            })
            .collect::<BTreeMap<_, _>>();

        Ok(Self {
            vocabulary,
            role_profiles,
        })
    }
}
