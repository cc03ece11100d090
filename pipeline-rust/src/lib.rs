mod capture;
mod engine;
mod errors;
mod questions;
mod store;
mod upload;

pub use capture::{AudioCapture, CaptureError, Recording, StaticCapture};
pub use engine::{InterviewEngine, InterviewEngineParams, InterviewPhase, TurnDisposition};
pub use errors::PipelineError;
pub use questions::QuestionGenerator;
pub use store::{ArtifactStore, ArtifactStoreExt, SessionStore, StageKey};
pub use upload::{FileKind, SubmissionAdapter, UploadedFile};
