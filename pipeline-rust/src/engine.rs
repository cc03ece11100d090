use crate::{
    capture::{AudioCapture, Recording},
    errors::PipelineError,
    store::{ArtifactStore, ArtifactStoreExt, StageKey},
};
use jobprep_sdk::{
    to_base64, AnalysisBackend, EndInterviewRequest, FinalReport, InteractRequest,
    InterviewQuestion, NextAction, OverallScore, TurnFeedback,
};
use rand::{distributions::Alphanumeric, Rng};
use std::sync::Arc;

const DEFAULT_INTRO_QUESTION: &str =
    "Please introduce yourself briefly, covering your work experience and key skills.";
const DEFAULT_MAX_FOLLOW_UPS: usize = 5;
const DEGRADED_SUMMARY: &str = "The evaluation service could not produce a final report. \
     The per-question feedback below was captured during the interview.";

/// Where the engine currently is within one interview attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InterviewPhase {
    /// No interview running.
    Idle,
    /// Interview running, waiting for the user to start recording.
    AwaitingAnswer,
    /// Microphone open, buffering the current answer.
    Recording,
    /// An answer or the final report is in flight.
    Processing,
    /// The interview finished and a report is available.
    Concluded,
}

/// How a submitted answer moved the interview forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnDisposition {
    /// A follow-up question was inserted right after the current one.
    FollowUpInserted,
    /// Advanced to the next prepared question.
    Advanced,
    /// The interview concluded and the final report is available.
    Concluded,
}

enum Turn {
    AwaitingAnswer,
    Recording(Box<dyn Recording>),
    Processing,
}

struct ActiveInterview {
    interview_id: String,
    /// Grows on follow-up insertion, never shrinks.
    questions: Vec<InterviewQuestion>,
    /// Monotonically advancing position in `questions`.
    index: usize,
    /// One entry per submitted answer, in submission order.
    feedback: Vec<TurnFeedback>,
    follow_ups_inserted: usize,
    turn: Turn,
}

enum EngineState {
    Idle,
    Active(ActiveInterview),
    Concluded(FinalReport),
}

/// Parameters required to create a new interview engine.
/// # Default Values
/// - `intro_question`: a fixed self-introduction prompt
/// - `max_follow_ups`: 5
pub struct InterviewEngineParams {
    /// The remote analysis service driving the interview.
    pub backend: Arc<dyn AnalysisBackend>,
    /// The audio input answers are recorded from.
    pub capture: Arc<dyn AudioCapture>,
    /// The stage store the question set is seeded from.
    pub store: Arc<dyn ArtifactStore>,
    /// The fixed question every interview opens with.
    pub intro_question: String,
    /// Upper bound on follow-up insertions per attempt; beyond it a
    /// follow-up request advances to the next prepared question instead.
    pub max_follow_ups: usize,
}

impl InterviewEngineParams {
    pub fn new(
        backend: Arc<dyn AnalysisBackend>,
        capture: Arc<dyn AudioCapture>,
        store: Arc<dyn ArtifactStore>,
    ) -> Self {
        Self {
            backend,
            capture,
            store,
            intro_question: DEFAULT_INTRO_QUESTION.to_string(),
            max_follow_ups: DEFAULT_MAX_FOLLOW_UPS,
        }
    }

    /// Set the opening question.
    #[must_use]
    pub fn intro_question(mut self, intro_question: impl Into<String>) -> Self {
        self.intro_question = intro_question.into();
        self
    }

    /// Set the follow-up insertion bound.
    #[must_use]
    pub fn max_follow_ups(mut self, max_follow_ups: usize) -> Self {
        self.max_follow_ups = max_follow_ups;
        self
    }

    #[must_use]
    pub fn build(self) -> InterviewEngine {
        InterviewEngine::new(self)
    }
}

/// Drives a mock voice interview one recorded answer at a time.
///
/// The engine owns the interview session: the server-visible identifier,
/// the mutable question sequence, and the per-turn feedback cache used as a
/// fallback when the final report call fails. One engine runs one attempt
/// at a time; `restart` returns it to idle for a fresh attempt with a fresh
/// identifier.
pub struct InterviewEngine {
    backend: Arc<dyn AnalysisBackend>,
    capture: Arc<dyn AudioCapture>,
    store: Arc<dyn ArtifactStore>,
    intro_question: String,
    max_follow_ups: usize,
    state: EngineState,
}

impl InterviewEngine {
    #[must_use]
    pub fn new(params: InterviewEngineParams) -> Self {
        Self {
            backend: params.backend,
            capture: params.capture,
            store: params.store,
            intro_question: params.intro_question,
            max_follow_ups: params.max_follow_ups,
            state: EngineState::Idle,
        }
    }

    pub fn builder(
        backend: Arc<dyn AnalysisBackend>,
        capture: Arc<dyn AudioCapture>,
        store: Arc<dyn ArtifactStore>,
    ) -> InterviewEngineParams {
        InterviewEngineParams::new(backend, capture, store)
    }

    /// Start a fresh attempt from the stored question set, prefixed with
    /// the intro question. Mints a new interview identifier and clears the
    /// feedback cache.
    pub fn start(&mut self) -> Result<(), PipelineError> {
        if !matches!(self.state, EngineState::Idle) {
            return Err(PipelineError::State(
                "an interview is already running or concluded",
            ));
        }
        let stored = self
            .store
            .get_questions()
            .ok_or(PipelineError::MissingArtifact(StageKey::InterviewQuestions))?;
        if stored.is_empty() {
            return Err(PipelineError::NoQuestions);
        }
        let mut questions = Vec::with_capacity(stored.len() + 1);
        questions.push(InterviewQuestion::new(self.intro_question.clone()));
        questions.extend(stored);
        let interview_id = mint_interview_id();
        tracing::debug!(%interview_id, questions = questions.len(), "starting interview");
        self.state = EngineState::Active(ActiveInterview {
            interview_id,
            questions,
            index: 0,
            feedback: Vec::new(),
            follow_ups_inserted: 0,
            turn: Turn::AwaitingAnswer,
        });
        Ok(())
    }

    /// Open the microphone for the current question. A capture failure
    /// (e.g. denied permission) leaves the engine waiting on the same
    /// question.
    pub fn begin_recording(&mut self) -> Result<(), PipelineError> {
        {
            let active = self.active_ref()?;
            match active.turn {
                Turn::AwaitingAnswer => {}
                Turn::Recording(_) => return Err(PipelineError::State("already recording")),
                Turn::Processing => return Err(PipelineError::State("an answer is in flight")),
            }
        }
        let recording = self.capture.open()?;
        if let EngineState::Active(active) = &mut self.state {
            active.turn = Turn::Recording(recording);
        }
        Ok(())
    }

    /// Stop recording, releasing the device, and submit the captured
    /// answer for evaluation. On a backend failure the engine returns to
    /// waiting on the same question so the answer can be re-recorded.
    pub async fn end_recording(&mut self) -> Result<TurnDisposition, PipelineError> {
        let recording = {
            let active = self.active_mut()?;
            match std::mem::replace(&mut active.turn, Turn::Processing) {
                Turn::Recording(recording) => recording,
                other => {
                    active.turn = other;
                    return Err(PipelineError::State("not recording"));
                }
            }
        };
        let audio = match recording.stop() {
            Ok(audio) => audio,
            Err(e) => {
                self.set_awaiting();
                return Err(e.into());
            }
        };
        if audio.is_empty() {
            self.set_awaiting();
            return Err(PipelineError::EmptyRecording);
        }
        self.submit_answer(&to_base64(&audio)).await
    }

    async fn submit_answer(&mut self, answer_audio: &str) -> Result<TurnDisposition, PipelineError> {
        let request = {
            let active = self.active_ref()?;
            InteractRequest {
                interview_id: active.interview_id.clone(),
                question: active.questions[active.index].question.clone(),
                answer_audio: answer_audio.to_string(),
                next_question: active
                    .questions
                    .get(active.index + 1)
                    .map(|q| q.question.clone()),
            }
        };
        let outcome = match self.backend.interact(request).await {
            Ok(outcome) => outcome,
            Err(e) => {
                self.set_awaiting();
                return Err(e.into());
            }
        };

        let max_follow_ups = self.max_follow_ups;
        // None means the interview is over and the report must be produced.
        let disposition = {
            let active = self.active_mut()?;
            active.feedback.push(outcome.feedback);
            match outcome.next_action {
                NextAction::AskFollowUp { question }
                    if active.follow_ups_inserted < max_follow_ups =>
                {
                    active
                        .questions
                        .insert(active.index + 1, InterviewQuestion::new(question.text));
                    active.follow_ups_inserted += 1;
                    active.index += 1;
                    active.turn = Turn::AwaitingAnswer;
                    Some(TurnDisposition::FollowUpInserted)
                }
                NextAction::AskFollowUp { .. } => {
                    tracing::debug!(
                        limit = max_follow_ups,
                        "follow-up limit reached, advancing instead"
                    );
                    advance(active)
                }
                NextAction::ProceedToNext => advance(active),
                NextAction::Conclude => None,
            }
        };

        match disposition {
            Some(disposition) => Ok(disposition),
            None => {
                self.end().await?;
                Ok(TurnDisposition::Concluded)
            }
        }
    }

    /// End the interview and produce the final report.
    ///
    /// When the report service fails but per-turn feedback was captured, a
    /// degraded report is synthesized locally so no feedback is lost. With
    /// nothing captured, the failure is surfaced and the attempt stays
    /// active.
    pub async fn end(&mut self) -> Result<FinalReport, PipelineError> {
        let (request, history) = {
            let active = self.active_mut()?;
            if matches!(active.turn, Turn::Recording(_)) {
                return Err(PipelineError::State(
                    "stop recording before ending the interview",
                ));
            }
            active.turn = Turn::Processing;
            let history = active.feedback.clone();
            (
                EndInterviewRequest {
                    interview_id: active.interview_id.clone(),
                    interview_history: history.clone(),
                },
                history,
            )
        };
        let report = match self.backend.end_interview(request).await {
            Ok(report) => report,
            Err(e) if history.is_empty() => {
                self.set_awaiting();
                return Err(e.into());
            }
            Err(e) => {
                tracing::warn!(error = %e, "end-interview call failed, synthesizing degraded report");
                degraded_report(history)
            }
        };
        self.state = EngineState::Concluded(report.clone());
        Ok(report)
    }

    /// Discard the concluded attempt and return to idle. The question set
    /// is re-read from the store by the next `start`, which always mints a
    /// fresh interview identifier.
    pub fn restart(&mut self) -> Result<(), PipelineError> {
        if !matches!(self.state, EngineState::Concluded(_)) {
            return Err(PipelineError::State("no concluded interview to restart from"));
        }
        self.state = EngineState::Idle;
        Ok(())
    }

    /// Abandon the current attempt from any phase, releasing any open
    /// recording. The stored question set is untouched.
    pub fn abort(&mut self) {
        self.state = EngineState::Idle;
    }

    #[must_use]
    pub fn phase(&self) -> InterviewPhase {
        match &self.state {
            EngineState::Idle => InterviewPhase::Idle,
            EngineState::Active(active) => match active.turn {
                Turn::AwaitingAnswer => InterviewPhase::AwaitingAnswer,
                Turn::Recording(_) => InterviewPhase::Recording,
                Turn::Processing => InterviewPhase::Processing,
            },
            EngineState::Concluded(_) => InterviewPhase::Concluded,
        }
    }

    /// The identifier of the running attempt.
    #[must_use]
    pub fn interview_id(&self) -> Option<&str> {
        match &self.state {
            EngineState::Active(active) => Some(&active.interview_id),
            _ => None,
        }
    }

    /// The question currently awaiting an answer.
    #[must_use]
    pub fn current_question(&self) -> Option<&str> {
        match &self.state {
            EngineState::Active(active) => active
                .questions
                .get(active.index)
                .map(|q| q.question.as_str()),
            _ => None,
        }
    }

    /// Zero-based position of the current question.
    #[must_use]
    pub fn current_index(&self) -> Option<usize> {
        match &self.state {
            EngineState::Active(active) => Some(active.index),
            _ => None,
        }
    }

    /// Length of the question sequence, follow-ups included.
    #[must_use]
    pub fn question_count(&self) -> usize {
        match &self.state {
            EngineState::Active(active) => active.questions.len(),
            _ => 0,
        }
    }

    /// The question sequence of the running attempt, follow-ups included.
    #[must_use]
    pub fn questions(&self) -> &[InterviewQuestion] {
        match &self.state {
            EngineState::Active(active) => &active.questions,
            _ => &[],
        }
    }

    /// The per-turn feedback captured so far in the running attempt.
    #[must_use]
    pub fn feedback(&self) -> &[TurnFeedback] {
        match &self.state {
            EngineState::Active(active) => &active.feedback,
            _ => &[],
        }
    }

    /// The final report of a concluded attempt.
    #[must_use]
    pub fn report(&self) -> Option<&FinalReport> {
        match &self.state {
            EngineState::Concluded(report) => Some(report),
            _ => None,
        }
    }

    fn active_ref(&self) -> Result<&ActiveInterview, PipelineError> {
        match &self.state {
            EngineState::Active(active) => Ok(active),
            EngineState::Idle => Err(PipelineError::State("no interview running")),
            EngineState::Concluded(_) => Err(PipelineError::State("the interview has concluded")),
        }
    }

    fn active_mut(&mut self) -> Result<&mut ActiveInterview, PipelineError> {
        match &mut self.state {
            EngineState::Active(active) => Ok(active),
            EngineState::Idle => Err(PipelineError::State("no interview running")),
            EngineState::Concluded(_) => Err(PipelineError::State("the interview has concluded")),
        }
    }

    fn set_awaiting(&mut self) {
        if let EngineState::Active(active) = &mut self.state {
            active.turn = Turn::AwaitingAnswer;
        }
    }
}

/// Advance to the next prepared question, or signal conclusion when the
/// current question was the last.
fn advance(active: &mut ActiveInterview) -> Option<TurnDisposition> {
    if active.index + 1 < active.questions.len() {
        active.index += 1;
        active.turn = Turn::AwaitingAnswer;
        Some(TurnDisposition::Advanced)
    } else {
        None
    }
}

fn degraded_report(history: Vec<TurnFeedback>) -> FinalReport {
    FinalReport {
        overall_score: OverallScore::Unavailable,
        summary: DEGRADED_SUMMARY.to_string(),
        strengths: Vec::new(),
        areas_for_improvement: Vec::new(),
        detailed_feedback: history,
    }
}

fn mint_interview_id() -> String {
    let token: String = rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(24)
        .map(char::from)
        .collect();
    format!("iv-{token}")
}
