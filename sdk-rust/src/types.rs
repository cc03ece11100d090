use serde::{Deserialize, Serialize};
use std::fmt;

use crate::errors::{BackendError, BackendResult};

/// The envelope every service response is wrapped in.
/// `success: true` must carry `data`; `success: false` carries `errorMsg`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiEnvelope<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(rename = "errorMsg", skip_serializing_if = "Option::is_none")]
    pub error_msg: Option<String>,
}

impl<T> ApiEnvelope<T> {
    /// Unwrap the envelope into the carried data or the service error.
    pub fn into_result(self) -> BackendResult<T> {
        if !self.success {
            return Err(BackendError::Service(self.error_msg.unwrap_or_else(|| {
                "service reported failure without a message".to_string()
            })));
        }
        self.data
            .ok_or_else(|| BackendError::Invariant("success response without data".to_string()))
    }
}

/// A raw job description as submitted for analysis. Exactly one of the two
/// fields is set: `jd` for plain text, `jd_img` for a base64-encoded image.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "utoipa", derive(utoipa::ToSchema))]
pub struct JobDescriptionPayload {
    /// The job description as plain text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub jd: Option<String>,
    /// The job description as a base64-encoded image, data-URL prefix
    /// stripped.
    #[serde(rename = "jdImg", skip_serializing_if = "Option::is_none")]
    pub jd_img: Option<String>,
}

impl JobDescriptionPayload {
    /// A payload carrying the job description as plain text.
    #[must_use]
    pub fn text(jd: impl Into<String>) -> Self {
        Self {
            jd: Some(jd.into()),
            jd_img: None,
        }
    }

    /// A payload carrying the job description as a base64-encoded image.
    #[must_use]
    pub fn image(jd_img: impl Into<String>) -> Self {
        Self {
            jd: None,
            jd_img: Some(jd_img.into()),
        }
    }
}

/// A raw resume as submitted for analysis: the base64-encoded PDF, data-URL
/// prefix stripped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "utoipa", derive(utoipa::ToSchema))]
pub struct ResumePayload {
    pub resume: String,
}

/// Request body for the `jdAnalysis` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobAnalysisRequest {
    #[serde(flatten)]
    pub job_description: JobDescriptionPayload,
    pub user_id: String,
}

/// Structured analysis of a job description.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "utoipa", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct JobAnalysis {
    pub job_title: String,
    pub job_summary: String,
    pub competency_analysis: CompetencyAnalysis,
    pub responsibility_analysis: ResponsibilityAnalysis,
    pub company_insights: CompanyInsights,
    pub application_strategy: ApplicationStrategy,
}

/// Skills and keywords the role asks for.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "utoipa", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct CompetencyAnalysis {
    pub hard_skills: Vec<String>,
    pub soft_skills: Vec<String>,
    pub preferred_qualifications: Vec<String>,
    pub keywords: Vec<String>,
}

/// What the role actually involves day to day.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "utoipa", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct ResponsibilityAnalysis {
    pub core_responsibilities: Vec<String>,
    pub potential_challenges: String,
}

/// Signals about the employer extracted from the posting.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "utoipa", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct CompanyInsights {
    pub culture_clues: Vec<String>,
    pub benefits_highlights: Vec<String>,
}

/// How to position an application for this role.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "utoipa", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct ApplicationStrategy {
    pub resume_focus: String,
    pub interview_questions: Vec<String>,
}

/// Request body for the `resumeAnalysis` endpoint. The job description is
/// attached when an earlier stage stored one.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResumeAnalysisRequest {
    pub resume: String,
    #[serde(flatten)]
    pub job_description: Option<JobDescriptionPayload>,
}

/// How well a resume matches the job description.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "utoipa", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct ResumeAnalysis {
    pub match_score: f64,
    pub highlights: Vec<String>,
    pub improvement_areas: Vec<String>,
    pub tailoring_suggestions: Vec<String>,
}

/// Request body for the `generateInterviewQuestions` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateQuestionsRequest {
    pub resume: String,
    #[serde(flatten)]
    pub job_description: Option<JobDescriptionPayload>,
    pub user_id: String,
}

/// One prepared interview question, with a reference answer when the
/// service provides one. Follow-up questions inserted mid-interview carry
/// no answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "utoipa", derive(utoipa::ToSchema))]
pub struct InterviewQuestion {
    pub question: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub answer: Option<String>,
}

impl InterviewQuestion {
    /// A question without a reference answer.
    #[must_use]
    pub fn new(question: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: None,
        }
    }
}

/// Request body for the `interview/interact` endpoint: one recorded answer
/// to the current question. `next_question` is omitted when the current
/// question is the last in the sequence.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InteractRequest {
    pub interview_id: String,
    pub question: String,
    /// The recorded answer, base64-encoded.
    pub answer_audio: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_question: Option<String>,
}

/// The evaluation of one answered question. Append-only: one record per
/// submitted answer, in submission order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "utoipa", derive(utoipa::ToSchema))]
pub struct TurnFeedback {
    pub question: String,
    pub transcript: String,
    pub evaluation: String,
}

/// What the interviewer decided to do after evaluating an answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum NextAction {
    /// Dig deeper into the previous answer with a server-supplied question.
    #[serde(rename = "ASK_FOLLOW_UP")]
    AskFollowUp { question: FollowUpQuestion },
    /// Move on to the next prepared question, or conclude when none is left.
    #[serde(rename = "PROCEED_TO_NEXT")]
    ProceedToNext,
    /// Any unrecognized action concludes the interview.
    #[serde(other)]
    Conclude,
}

/// The text of a server-generated follow-up question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "utoipa", derive(utoipa::ToSchema))]
pub struct FollowUpQuestion {
    pub text: String,
}

/// Response data of the `interview/interact` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TurnOutcome {
    pub feedback: TurnFeedback,
    pub next_action: NextAction,
}

/// Request body for the `interview/end` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EndInterviewRequest {
    pub interview_id: String,
    pub interview_history: Vec<TurnFeedback>,
}

/// Overall score of a completed interview. The service reports a number or
/// a free-form grade; a locally synthesized report carries no score.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OverallScore {
    Number(f64),
    Grade(String),
    /// No score available. Serialized as `null`; displayed as "N/A".
    #[default]
    Unavailable,
}

impl fmt::Display for OverallScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(score) => write!(f, "{score}"),
            Self::Grade(grade) => f.write_str(grade),
            Self::Unavailable => f.write_str("N/A"),
        }
    }
}

/// The final interview report, either produced by the service or
/// synthesized locally from cached per-turn feedback when the end-interview
/// call fails.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinalReport {
    #[serde(default)]
    pub overall_score: OverallScore,
    pub summary: String,
    pub strengths: Vec<String>,
    pub areas_for_improvement: Vec<String>,
    pub detailed_feedback: Vec<TurnFeedback>,
}
