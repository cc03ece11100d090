use std::sync::Arc;

use jobprep_pipeline::{
    ArtifactStoreExt, PipelineError, QuestionGenerator, SessionStore, StageKey,
};
use jobprep_sdk::{
    jobprep_sdk_test::MockBackend, InterviewQuestion, JobDescriptionPayload, ResumePayload,
};

fn seeded_store() -> Arc<SessionStore> {
    let store = Arc::new(SessionStore::new());
    store
        .put_resume(&ResumePayload {
            resume: "cmVzdW1l".to_string(),
        })
        .unwrap();
    store
}

#[tokio::test]
async fn generation_requires_a_stored_resume() {
    let backend = Arc::new(MockBackend::new());
    let store = Arc::new(SessionStore::new());
    let generator = QuestionGenerator::new(backend.clone(), store);

    let error = generator.generate("user-1").await.unwrap_err();

    assert!(matches!(
        error,
        PipelineError::MissingArtifact(StageKey::ResumeRaw)
    ));
    assert!(backend.tracked_question_requests().is_empty());
}

#[tokio::test]
async fn generated_questions_are_persisted_for_the_interview() {
    let backend = Arc::new(MockBackend::new());
    let questions = vec![
        InterviewQuestion::new("Walk me through your last project."),
        InterviewQuestion::new("Why this role?"),
    ];
    backend.enqueue_questions(Ok(questions.clone()));
    let store = seeded_store();
    let generator = QuestionGenerator::new(backend.clone(), store.clone());

    let generated = generator.generate("user-1").await.unwrap();

    assert_eq!(generated, questions);
    assert_eq!(store.get_questions(), Some(questions));
    let tracked = backend.tracked_question_requests();
    assert_eq!(tracked[0].resume, "cmVzdW1l");
    assert_eq!(tracked[0].user_id, "user-1");
    assert_eq!(tracked[0].job_description, None);
}

#[tokio::test]
async fn the_stored_job_description_is_attached_when_present() {
    let backend = Arc::new(MockBackend::new());
    backend.enqueue_questions(Ok(vec![InterviewQuestion::new("Why us?")]));
    let store = seeded_store();
    store
        .put_job_description(&JobDescriptionPayload::text("the jd"))
        .unwrap();
    let generator = QuestionGenerator::new(backend.clone(), store);

    generator.generate("user-1").await.unwrap();

    let tracked = backend.tracked_question_requests();
    assert_eq!(
        tracked[0]
            .job_description
            .as_ref()
            .and_then(|jd| jd.jd.as_deref()),
        Some("the jd")
    );
}

#[tokio::test]
async fn regeneration_discards_the_prior_set() {
    let backend = Arc::new(MockBackend::new());
    backend
        .enqueue_questions(Ok(vec![InterviewQuestion::new("old question")]))
        .enqueue_questions(Ok(vec![
            InterviewQuestion::new("new question"),
            InterviewQuestion::new("another new question"),
        ]));
    let store = seeded_store();
    let generator = QuestionGenerator::new(backend.clone(), store.clone());

    generator.generate("user-1").await.unwrap();
    generator.generate("user-1").await.unwrap();

    let stored = store.get_questions().unwrap();
    assert_eq!(stored.len(), 2);
    assert_eq!(stored[0].question, "new question");
}

#[tokio::test]
async fn a_failed_generation_keeps_the_prior_set() {
    let backend = Arc::new(MockBackend::new());
    backend
        .enqueue_questions(Ok(vec![InterviewQuestion::new("kept question")]))
        .enqueue_questions(Err(jobprep_sdk::BackendError::Service(
            "generator unavailable".to_string(),
        )));
    let store = seeded_store();
    let generator = QuestionGenerator::new(backend.clone(), store.clone());

    generator.generate("user-1").await.unwrap();
    generator.generate("user-1").await.unwrap_err();

    let stored = store.get_questions().unwrap();
    assert_eq!(stored[0].question, "kept question");
}
