//! Drive the interview turn engine offline against a mocked service,
//! showing follow-up insertion and the degraded report fallback.

use jobprep_pipeline::{ArtifactStoreExt, InterviewEngine, InterviewPhase, SessionStore, StaticCapture};
use jobprep_sdk::{
    jobprep_sdk_test::MockBackend, BackendError, FollowUpQuestion, InterviewQuestion, NextAction,
    TurnFeedback, TurnOutcome,
};
use std::sync::Arc;

fn outcome(question: &str, next_action: NextAction) -> TurnOutcome {
    TurnOutcome {
        feedback: TurnFeedback {
            question: question.to_string(),
            transcript: "(transcribed answer)".to_string(),
            evaluation: "Good structure, could use a concrete example.".to_string(),
        },
        next_action,
    }
}

#[tokio::main]
async fn main() {
    let backend = Arc::new(MockBackend::new());
    backend
        .enqueue_interact(Ok(outcome(
            "intro",
            NextAction::AskFollowUp {
                question: FollowUpQuestion {
                    text: "Which of those projects are you proudest of?".to_string(),
                },
            },
        )))
        .enqueue_interact(Ok(outcome("follow-up", NextAction::ProceedToNext)))
        .enqueue_interact(Ok(outcome("question 1", NextAction::ProceedToNext)))
        // The report service is down; the engine falls back to the cached
        // per-turn feedback.
        .enqueue_end(Err(BackendError::Service(
            "report generation failed".to_string(),
        )));

    let store = Arc::new(SessionStore::new());
    store
        .put_questions(&[InterviewQuestion::new(
            "Walk me through your most recent project.",
        )])
        .unwrap();

    let capture = Arc::new(StaticCapture::new(b"canned pcm audio".to_vec()));
    let mut engine = InterviewEngine::builder(backend, capture, store).build();

    engine.start().unwrap();
    while engine.phase() != InterviewPhase::Concluded {
        println!("Q: {}", engine.current_question().unwrap());
        engine.begin_recording().unwrap();
        engine.end_recording().await.unwrap();
    }

    let report = engine.report().unwrap();
    println!("\noverall: {}", report.overall_score);
    println!("{}", report.summary);
    for turn in &report.detailed_feedback {
        println!("  {} -> {}", turn.question, turn.evaluation);
    }
}
