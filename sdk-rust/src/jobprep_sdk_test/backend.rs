use std::{collections::VecDeque, sync::Mutex};

use crate::{
    backend::AnalysisBackend,
    errors::{BackendError, BackendResult},
    types::{
        EndInterviewRequest, FinalReport, GenerateQuestionsRequest, InteractRequest,
        InterviewQuestion, JobAnalysis, JobAnalysisRequest, ResumeAnalysis, ResumeAnalysisRequest,
        TurnOutcome,
    },
};

#[derive(Default)]
struct MockBackendState {
    mocked_job_results: VecDeque<BackendResult<JobAnalysis>>,
    mocked_resume_results: VecDeque<BackendResult<ResumeAnalysis>>,
    mocked_question_results: VecDeque<BackendResult<Vec<InterviewQuestion>>>,
    mocked_interact_results: VecDeque<BackendResult<TurnOutcome>>,
    mocked_end_results: VecDeque<BackendResult<FinalReport>>,
    tracked_job_requests: Vec<JobAnalysisRequest>,
    tracked_resume_requests: Vec<ResumeAnalysisRequest>,
    tracked_question_requests: Vec<GenerateQuestionsRequest>,
    tracked_interact_requests: Vec<InteractRequest>,
    tracked_end_requests: Vec<EndInterviewRequest>,
}

/// A mock analysis backend for testing that tracks requests and yields
/// predefined results. Each endpoint pops from its own queue; an exhausted
/// queue is an invariant error.
#[derive(Default)]
pub struct MockBackend {
    state: Mutex<MockBackendState>,
}

impl MockBackend {
    /// Construct a new mock backend instance.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Enqueue a mocked `jdAnalysis` result.
    pub fn enqueue_job(&self, result: BackendResult<JobAnalysis>) -> &Self {
        let mut state = self.state.lock().expect("mock state poisoned");
        state.mocked_job_results.push_back(result);
        drop(state);
        self
    }

    /// Enqueue a mocked `resumeAnalysis` result.
    pub fn enqueue_resume(&self, result: BackendResult<ResumeAnalysis>) -> &Self {
        let mut state = self.state.lock().expect("mock state poisoned");
        state.mocked_resume_results.push_back(result);
        drop(state);
        self
    }

    /// Enqueue a mocked `generateInterviewQuestions` result.
    pub fn enqueue_questions(&self, result: BackendResult<Vec<InterviewQuestion>>) -> &Self {
        let mut state = self.state.lock().expect("mock state poisoned");
        state.mocked_question_results.push_back(result);
        drop(state);
        self
    }

    /// Enqueue a mocked `interview/interact` result.
    pub fn enqueue_interact(&self, result: BackendResult<TurnOutcome>) -> &Self {
        let mut state = self.state.lock().expect("mock state poisoned");
        state.mocked_interact_results.push_back(result);
        drop(state);
        self
    }

    /// Enqueue a mocked `interview/end` result.
    pub fn enqueue_end(&self, result: BackendResult<FinalReport>) -> &Self {
        let mut state = self.state.lock().expect("mock state poisoned");
        state.mocked_end_results.push_back(result);
        drop(state);
        self
    }

    /// Retrieve the tracked `jdAnalysis` requests accumulated so far.
    pub fn tracked_job_requests(&self) -> Vec<JobAnalysisRequest> {
        let state = self.state.lock().expect("mock state poisoned");
        state.tracked_job_requests.clone()
    }

    /// Retrieve the tracked `resumeAnalysis` requests accumulated so far.
    pub fn tracked_resume_requests(&self) -> Vec<ResumeAnalysisRequest> {
        let state = self.state.lock().expect("mock state poisoned");
        state.tracked_resume_requests.clone()
    }

    /// Retrieve the tracked `generateInterviewQuestions` requests
    /// accumulated so far.
    pub fn tracked_question_requests(&self) -> Vec<GenerateQuestionsRequest> {
        let state = self.state.lock().expect("mock state poisoned");
        state.tracked_question_requests.clone()
    }

    /// Retrieve the tracked `interview/interact` requests accumulated so far.
    pub fn tracked_interact_requests(&self) -> Vec<InteractRequest> {
        let state = self.state.lock().expect("mock state poisoned");
        state.tracked_interact_requests.clone()
    }

    /// Retrieve the tracked `interview/end` requests accumulated so far.
    pub fn tracked_end_requests(&self) -> Vec<EndInterviewRequest> {
        let state = self.state.lock().expect("mock state poisoned");
        state.tracked_end_requests.clone()
    }

    /// Reset tracked requests without touching enqueued results.
    pub fn reset(&self) {
        let mut state = self.state.lock().expect("mock state poisoned");
        state.tracked_job_requests.clear();
        state.tracked_resume_requests.clear();
        state.tracked_question_requests.clear();
        state.tracked_interact_requests.clear();
        state.tracked_end_requests.clear();
    }

    /// Clear both tracked requests and enqueued results.
    pub fn restore(&self) {
        let mut state = self.state.lock().expect("mock state poisoned");
        *state = MockBackendState::default();
    }
}

fn exhausted(endpoint: &str) -> BackendError {
    BackendError::Invariant(format!("no mocked {endpoint} results available"))
}

#[async_trait::async_trait]
impl AnalysisBackend for MockBackend {
    async fn analyze_job(&self, request: JobAnalysisRequest) -> BackendResult<JobAnalysis> {
        let mut state = self.state.lock().expect("mock state poisoned");
        state.tracked_job_requests.push(request);
        state
            .mocked_job_results
            .pop_front()
            .unwrap_or_else(|| Err(exhausted("jdAnalysis")))
    }

    async fn analyze_resume(
        &self,
        request: ResumeAnalysisRequest,
    ) -> BackendResult<ResumeAnalysis> {
        let mut state = self.state.lock().expect("mock state poisoned");
        state.tracked_resume_requests.push(request);
        state
            .mocked_resume_results
            .pop_front()
            .unwrap_or_else(|| Err(exhausted("resumeAnalysis")))
    }

    async fn generate_questions(
        &self,
        request: GenerateQuestionsRequest,
    ) -> BackendResult<Vec<InterviewQuestion>> {
        let mut state = self.state.lock().expect("mock state poisoned");
        state.tracked_question_requests.push(request);
        state
            .mocked_question_results
            .pop_front()
            .unwrap_or_else(|| Err(exhausted("generateInterviewQuestions")))
    }

    async fn interact(&self, request: InteractRequest) -> BackendResult<TurnOutcome> {
        let mut state = self.state.lock().expect("mock state poisoned");
        state.tracked_interact_requests.push(request);
        state
            .mocked_interact_results
            .pop_front()
            .unwrap_or_else(|| Err(exhausted("interview/interact")))
    }

    async fn end_interview(&self, request: EndInterviewRequest) -> BackendResult<FinalReport> {
        let mut state = self.state.lock().expect("mock state poisoned");
        state.tracked_end_requests.push(request);
        state
            .mocked_end_results
            .pop_front()
            .unwrap_or_else(|| Err(exhausted("interview/end")))
    }
}
