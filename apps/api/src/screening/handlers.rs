//! Axum route handlers for the Screening API.

use axum::{
    extract::{
        multipart::MultipartError,
        rejection::JsonRejection,
        Multipart, State,
    },
    http::StatusCode,
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info_span;
use uuid::Uuid;

use crate::errors::AppError;
use crate::screening::analysis::{analyze, AnalysisOutcome, AnalysisReport};
use crate::screening::pdf::extract_pdf_text;
use crate::screening::roles::RoleRecommendation;
use crate::screening::template::TemplateCheck;
use crate::state::AppState;

const REJECTED_MESSAGE: &str = "Rejected – Resume Template Not Standard. Resume must contain sections like Education, Skills, Experience, etc.";
const NO_ROLES_MESSAGE: &str = "Not enough recognized skills to recommend roles yet.";

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    pub resume_text: String,
    pub jd_text: String,
}

#[derive(Debug, Serialize)]
pub struct TierView {
    pub rank: u8,
    pub label: &'static str,
}

/// Bar chart input: matched vs missing skill counts.
#[derive(Debug, Serialize)]
pub struct ChartData {
    pub matched_count: usize,
    pub missing_count: usize,
}

#[derive(Debug, Serialize)]
pub struct AcceptedAnalysis {
    pub score: u32,
    pub tier: TierView,
    pub matched: Vec<String>,
    pub missing: Vec<String>,
    pub chart: ChartData,
    pub resume_skills: Vec<String>,
    pub jd_skills: Vec<String>,
    pub template: TemplateCheck,
    pub recommended_roles: Vec<RoleRecommendation>,
    pub roles_message: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum AnalysisResponse {
    Rejected {
        message: String,
        template: TemplateCheck,
    },
    Accepted(AcceptedAnalysis),
}

#[derive(Debug, Serialize)]
pub struct AnalysisEnvelope {
    pub analysis_id: Uuid,
    pub analyzed_at: DateTime<Utc>,
    #[serde(flatten)]
    pub result: AnalysisResponse,
}

#[derive(Debug, Serialize)]
pub struct SkillListResponse {
    pub skills: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct RoleProfileView {
    pub role: String,
    pub skills: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct RoleListResponse {
    pub roles: Vec<RoleProfileView>,
}

impl From<AnalysisOutcome> for AnalysisResponse {
    fn from(outcome: AnalysisOutcome) -> Self {
        match outcome {
            AnalysisOutcome::Rejected { template } => AnalysisResponse::Rejected {
                message: REJECTED_MESSAGE.to_string(),
                template,
            },
            AnalysisOutcome::Accepted(report) => AnalysisResponse::Accepted(report.into()),
        }
    }
}

impl From<AnalysisReport> for AcceptedAnalysis {
    fn from(report: AnalysisReport) -> Self {
        let AnalysisReport {
            template,
            resume_skills,
            jd_skills,
            match_result,
            tier,
            recommended_roles,
        } = report;

        let roles_message = recommended_roles
            .is_empty()
            .then(|| NO_ROLES_MESSAGE.to_string());

        AcceptedAnalysis {
            score: match_result.score,
            tier: TierView {
                rank: tier.rank(),
                label: tier.label(),
            },
            chart: ChartData {
                matched_count: match_result.matched.len(),
                missing_count: match_result.missing.len(),
            },
            matched: match_result.matched.into_iter().collect(),
            missing: match_result.missing.into_iter().collect(),
            resume_skills: resume_skills.into_iter().collect(),
            jd_skills: jd_skills.into_iter().collect(),
            template,
            recommended_roles,
            roles_message,
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/analyze
///
/// Screens plain resume text against a job description.
pub async fn handle_analyze(
    State(state): State<AppState>,
    payload: Result<Json<AnalyzeRequest>, JsonRejection>,
) -> Result<Json<AnalysisEnvelope>, AppError> {
    let Json(request) =
        payload.map_err(|rejection| AppError::Validation(rejection.body_text()))?;
    require_inputs(&request.resume_text, &request.jd_text)?;
    Ok(Json(run_analysis(&state, &request.resume_text, &request.jd_text)))
}

/// POST /api/v1/analyze/upload
///
/// Multipart form with a `resume` PDF and a `job_description` text field.
pub async fn handle_analyze_upload(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<AnalysisEnvelope>, AppError> {
    let mut resume_pdf: Option<Vec<u8>> = None;
    let mut jd_text: Option<String> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| multipart_error(e, "Malformed multipart body"))?
    {
        let name = field.name().map(str::to_owned);
        match name.as_deref() {
            Some("resume") => {
                if let Some(content_type) = field.content_type() {
                    if content_type != "application/pdf" {
                        return Err(AppError::Validation(format!(
                            "resume must be a PDF, got '{content_type}'"
                        )));
                    }
                }
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| multipart_error(e, "Could not read resume"))?;
                resume_pdf = Some(bytes.to_vec());
            }
            Some("job_description") => {
                let text = field
                    .text()
                    .await
                    .map_err(|e| multipart_error(e, "Could not read job_description"))?;
                jd_text = Some(text);
            }
            _ => {}
        }
    }

    let (resume_pdf, jd_text) = match (resume_pdf, jd_text) {
        (Some(pdf), Some(jd)) if !pdf.is_empty() && !jd.trim().is_empty() => (pdf, jd),
        _ => {
            return Err(AppError::Validation(
                "Please upload a resume and enter the job description".to_string(),
            ))
        }
    };

    let resume_text = extract_pdf_text(resume_pdf).await?;
    require_inputs(&resume_text, &jd_text)?;

    Ok(Json(run_analysis(&state, &resume_text, &jd_text)))
}

/// GET /api/v1/skills
pub async fn handle_list_skills(State(state): State<AppState>) -> Json<SkillListResponse> {
    Json(SkillListResponse {
        skills: state
            .catalog
            .vocabulary
            .names()
            .into_iter()
            .map(String::from)
            .collect(),
    })
}

/// GET /api/v1/roles
pub async fn handle_list_roles(State(state): State<AppState>) -> Json<RoleListResponse> {
    Json(RoleListResponse {
        roles: state
            .catalog
            .role_profiles
            .iter()
            .map(|(role, skills)| RoleProfileView {
                role: role.clone(),
                skills: skills.iter().cloned().collect(),
            })
            .collect(),
    })
}

/// Body-limit hits become 413; anything else is the client's malformed form.
fn multipart_error(error: MultipartError, context: &str) -> AppError {
    if error.status() == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::PayloadTooLarge(format!(
            "Upload exceeds the configured size limit: {}",
            error.body_text()
        ))
    } else {
        AppError::Validation(format!("{context}: {}", error.body_text()))
    }
}

fn require_inputs(resume_text: &str, jd_text: &str) -> Result<(), AppError> {
    if resume_text.trim().is_empty() {
        return Err(AppError::Validation("resume text cannot be empty".to_string()));
    }
    if jd_text.trim().is_empty() {
        return Err(AppError::Validation("jd_text cannot be empty".to_string()));
    }
    Ok(())
}

fn run_analysis(state: &AppState, resume_text: &str, jd_text: &str) -> AnalysisEnvelope {
    let analysis_id = Uuid::new_v4();
    let outcome = info_span!("analysis", %analysis_id).in_scope(|| {
        analyze(
            resume_text,
            jd_text,
            &state.catalog,
            state.config.top_n_roles,
        )
    });

    AnalysisEnvelope {
        analysis_id,
        analyzed_at: Utc::now(),
        result: outcome.into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::screening::catalog::Catalog;
    use crate::screening::score::MatchTier;
    use crate::screening::template::validate_template;

    #[test]
    fn test_require_inputs_rejects_blank_jd() {
        assert!(matches!(
            require_inputs("education skills", "   \n"),
            Err(AppError::Validation(_))
        ));
    }

    #[test]
    fn test_require_inputs_rejects_blank_resume() {
        assert!(matches!(
            require_inputs("", "python"),
            Err(AppError::Validation(_))
        ));
    }

    #[test]
    fn test_require_inputs_accepts_both() {
        assert!(require_inputs("education", "python").is_ok());
    }

    #[test]
    fn test_rejected_response_serializes_with_status_tag() {
        let response: AnalysisResponse = AnalysisOutcome::Rejected {
            template: validate_template("education"),
        }
        .into();
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["status"], "rejected");
        assert_eq!(json["template"]["matched_count"], 1);
        assert!(json.get("score").is_none());
    }

    #[test]
    fn test_accepted_response_carries_chart_and_tier() {
        let catalog = Catalog::builtin().unwrap();
        let outcome = analyze(
            "education experience skills python sql",
            "python sql tableau",
            &catalog,
            3,
        );
        let response: AnalysisResponse = outcome.into();
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["status"], "accepted");
        assert_eq!(json["score"], 67);
        assert_eq!(json["tier"]["rank"], 2);
        assert_eq!(json["tier"]["label"], MatchTier::ModeratelySuitable.label());
        assert_eq!(json["chart"]["matched_count"], 2);
        assert_eq!(json["chart"]["missing_count"], 1);
        assert_eq!(json["missing"][0], "tableau");
        assert!(json["roles_message"].is_null());
    }

    #[test]
    fn test_accepted_without_roles_sets_message() {
        let catalog = Catalog::builtin().unwrap();
        let outcome = analyze("education experience skills", "python", &catalog, 3);
        let response: AnalysisResponse = outcome.into();
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["recommended_roles"].as_array().unwrap().len(), 0);
        assert_eq!(json["roles_message"], NO_ROLES_MESSAGE);
    }
}
