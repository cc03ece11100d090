use crate::{
    backend::AnalysisBackend,
    client_utils::send_json,
    errors::BackendResult,
    types::{
        EndInterviewRequest, FinalReport, GenerateQuestionsRequest, InteractRequest,
        InterviewQuestion, JobAnalysis, JobAnalysisRequest, ResumeAnalysis, ResumeAnalysisRequest,
        TurnOutcome,
    },
};
use reqwest::Client;
use std::time::Duration;

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// reqwest-backed implementation of [`AnalysisBackend`].
pub struct HttpBackend {
    base_url: String,
    timeout: Duration,
    client: Client,
}

/// Options to construct an [`HttpBackend`].
#[derive(Debug, Clone, Default)]
pub struct HttpBackendOptions {
    /// Base URL of the analysis service.
    pub base_url: String,
    /// Per-request timeout. Defaults to 60 seconds. There is no retry
    /// policy: a timed-out request is surfaced as a transport error.
    pub timeout: Option<Duration>,
}

impl HttpBackend {
    #[must_use]
    pub fn new(options: HttpBackendOptions) -> Self {
        Self {
            base_url: options.base_url.trim_end_matches('/').to_string(),
            timeout: options.timeout.unwrap_or(DEFAULT_TIMEOUT),
            client: Client::new(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{path}", self.base_url)
    }
}

#[async_trait::async_trait]
impl AnalysisBackend for HttpBackend {
    async fn analyze_job(&self, request: JobAnalysisRequest) -> BackendResult<JobAnalysis> {
        send_json(&self.client, &self.url("jdAnalysis"), &request, self.timeout).await
    }

    async fn analyze_resume(
        &self,
        request: ResumeAnalysisRequest,
    ) -> BackendResult<ResumeAnalysis> {
        send_json(
            &self.client,
            &self.url("resumeAnalysis"),
            &request,
            self.timeout,
        )
        .await
    }

    async fn generate_questions(
        &self,
        request: GenerateQuestionsRequest,
    ) -> BackendResult<Vec<InterviewQuestion>> {
        send_json(
            &self.client,
            &self.url("generateInterviewQuestions"),
            &request,
            self.timeout,
        )
        .await
    }

    async fn interact(&self, request: InteractRequest) -> BackendResult<TurnOutcome> {
        send_json(
            &self.client,
            &self.url("interview/interact"),
            &request,
            self.timeout,
        )
        .await
    }

    async fn end_interview(&self, request: EndInterviewRequest) -> BackendResult<FinalReport> {
        send_json(
            &self.client,
            &self.url("interview/end"),
            &request,
            self.timeout,
        )
        .await
    }
}
