use crate::errors::PipelineError;
use jobprep_sdk::{InterviewQuestion, JobDescriptionPayload, ResumePayload};
use serde::{de::DeserializeOwned, Serialize};
use std::{collections::HashMap, fmt, sync::Mutex};

/// Storage slot for one pipeline artifact. Each slot holds at most one
/// current value; a later put overwrites unconditionally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StageKey {
    JobDescriptionRaw,
    ResumeRaw,
    InterviewQuestions,
}

impl StageKey {
    /// The storage name of the slot.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::JobDescriptionRaw => "jobDescriptionRaw",
            Self::ResumeRaw => "resumeRaw",
            Self::InterviewQuestions => "interviewQuestions",
        }
    }
}

impl fmt::Display for StageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Session-scoped key/value storage for pipeline artifacts.
///
/// Values are serialized JSON, the way a browser session store would hold
/// them. Absence is a normal state: a stage entered out of order simply
/// finds nothing and decides for itself whether that is fatal.
pub trait ArtifactStore: Send + Sync {
    /// Store `value` under `key`, overwriting any prior value.
    fn put(&self, key: StageKey, value: String);
    /// The current value under `key`, if any.
    fn get(&self, key: StageKey) -> Option<String>;
}

/// Typed accessors over the raw store.
pub trait ArtifactStoreExt: ArtifactStore {
    fn put_job_description(&self, payload: &JobDescriptionPayload) -> Result<(), PipelineError> {
        put_json(self, StageKey::JobDescriptionRaw, payload)
    }

    fn get_job_description(&self) -> Option<JobDescriptionPayload> {
        get_json(self, StageKey::JobDescriptionRaw)
    }

    fn put_resume(&self, payload: &ResumePayload) -> Result<(), PipelineError> {
        put_json(self, StageKey::ResumeRaw, payload)
    }

    fn get_resume(&self) -> Option<ResumePayload> {
        get_json(self, StageKey::ResumeRaw)
    }

    fn put_questions(&self, questions: &[InterviewQuestion]) -> Result<(), PipelineError> {
        put_json(self, StageKey::InterviewQuestions, &questions)
    }

    fn get_questions(&self) -> Option<Vec<InterviewQuestion>> {
        get_json(self, StageKey::InterviewQuestions)
    }
}

impl<S: ArtifactStore + ?Sized> ArtifactStoreExt for S {}

fn put_json<S, T>(store: &S, key: StageKey, value: &T) -> Result<(), PipelineError>
where
    S: ArtifactStore + ?Sized,
    T: Serialize,
{
    let raw = serde_json::to_string(value)
        .map_err(|e| PipelineError::Invariant(format!("failed to serialize {key}: {e}")))?;
    store.put(key, raw);
    Ok(())
}

fn get_json<S, T>(store: &S, key: StageKey) -> Option<T>
where
    S: ArtifactStore + ?Sized,
    T: DeserializeOwned,
{
    let raw = store.get(key)?;
    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(e) => {
            tracing::warn!(key = %key, error = %e, "discarding unparseable stored artifact");
            None
        }
    }
}

/// In-memory [`ArtifactStore`] scoped to one session, the in-process analog
/// of a browser tab's session storage.
#[derive(Default)]
pub struct SessionStore {
    slots: Mutex<HashMap<StageKey, String>>,
}

impl SessionStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl ArtifactStore for SessionStore {
    fn put(&self, key: StageKey, value: String) {
        self.slots
            .lock()
            .expect("session store poisoned")
            .insert(key, value);
    }

    fn get(&self, key: StageKey) -> Option<String> {
        self.slots
            .lock()
            .expect("session store poisoned")
            .get(&key)
            .cloned()
    }
}
