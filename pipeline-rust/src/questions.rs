use crate::{
    errors::PipelineError,
    store::{ArtifactStore, ArtifactStoreExt, StageKey},
};
use jobprep_sdk::{AnalysisBackend, GenerateQuestionsRequest, InterviewQuestion};
use std::sync::Arc;

/// Generates the interview question set from the stored artifacts.
///
/// Runs on entry to the preparation stage without explicit user action; a
/// later call is the manual regenerate path and discards the prior set by
/// overwriting the stored questions.
pub struct QuestionGenerator {
    backend: Arc<dyn AnalysisBackend>,
    store: Arc<dyn ArtifactStore>,
}

impl QuestionGenerator {
    #[must_use]
    pub fn new(backend: Arc<dyn AnalysisBackend>, store: Arc<dyn ArtifactStore>) -> Self {
        Self { backend, store }
    }

    /// Generate and persist the question set. The stored resume is
    /// required; the stored job description is attached when present.
    pub async fn generate(&self, user_id: &str) -> Result<Vec<InterviewQuestion>, PipelineError> {
        let resume = self
            .store
            .get_resume()
            .ok_or(PipelineError::MissingArtifact(StageKey::ResumeRaw))?;
        let request = GenerateQuestionsRequest {
            resume: resume.resume,
            job_description: self.store.get_job_description(),
            user_id: user_id.to_string(),
        };
        let questions = self.backend.generate_questions(request).await?;
        tracing::debug!(count = questions.len(), "generated interview questions");
        self.store.put_questions(&questions)?;
        Ok(questions)
    }
}
