use crate::{
    errors::BackendResult,
    types::{
        EndInterviewRequest, FinalReport, GenerateQuestionsRequest, InteractRequest,
        InterviewQuestion, JobAnalysis, JobAnalysisRequest, ResumeAnalysis, ResumeAnalysisRequest,
        TurnOutcome,
    },
};

/// The remote analysis service behind the preparation pipeline.
///
/// Implementations perform exactly one request per call and never retry;
/// failures are surfaced to the caller, who decides whether to re-trigger.
#[async_trait::async_trait]
pub trait AnalysisBackend: Send + Sync {
    /// Analyze a raw job description.
    async fn analyze_job(&self, request: JobAnalysisRequest) -> BackendResult<JobAnalysis>;

    /// Score a resume, optionally against a job description.
    async fn analyze_resume(&self, request: ResumeAnalysisRequest)
        -> BackendResult<ResumeAnalysis>;

    /// Generate the ordered interview question set.
    async fn generate_questions(
        &self,
        request: GenerateQuestionsRequest,
    ) -> BackendResult<Vec<InterviewQuestion>>;

    /// Submit one recorded answer and receive its evaluation together with
    /// the next action to take.
    async fn interact(&self, request: InteractRequest) -> BackendResult<TurnOutcome>;

    /// Close the interview session and receive the final report.
    async fn end_interview(&self, request: EndInterviewRequest) -> BackendResult<FinalReport>;
}
