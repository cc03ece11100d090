use crate::{capture::CaptureError, store::StageKey};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PipelineError {
    /// The remote analysis service failed; see [`jobprep_sdk::BackendError`]
    /// for the transport/service distinction.
    #[error("Backend error: {0}")]
    Backend(#[from] jobprep_sdk::BackendError),
    /// A required artifact from an earlier stage is not in the store.
    #[error("Missing artifact `{0}` — complete the earlier stage first")]
    MissingArtifact(StageKey),
    /// The stored question set exists but is empty.
    #[error("The stored interview question set is empty")]
    NoQuestions,
    /// The selected file has no content.
    #[error("The selected file `{0}` is empty")]
    EmptyFile(String),
    /// The selected file could not be decoded for its classification.
    #[error("Could not read `{0}`: {1}")]
    UnreadableFile(String, String),
    /// The file classification is not accepted by the target stage.
    #[error("Unsupported file type for this stage: `{0}`")]
    UnsupportedFile(String),
    /// The audio capture device failed or was denied.
    #[error("Capture error: {0}")]
    Capture(#[from] CaptureError),
    /// Recording stopped without capturing any audio.
    #[error("The recording is empty")]
    EmptyRecording,
    /// The operation is not valid in the engine's current phase.
    #[error("Invalid state: {0}")]
    State(&'static str),
    #[error("Invariant: {0}")]
    Invariant(String),
}
