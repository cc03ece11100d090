use thiserror::Error;

#[derive(Error, Debug)]
pub enum BackendError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    /// The request to the service failed or the parsing of the response
    /// failed.
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),
    /// The request returned a non-success status code.
    #[error("Status error: {1} (Status {0})")]
    StatusCode(reqwest::StatusCode, String),
    /// The service answered the request but flagged it as failed
    /// (`success: false` in the response envelope).
    #[error("Service error: {0}")]
    Service(String),
    /// The response did not satisfy the envelope contract
    /// (e.g. `success: true` without `data`).
    #[error("Invariant: {0}")]
    Invariant(String),
}

pub type BackendResult<T> = Result<T, BackendError>;
