//! Test support: a mock [`AnalysisBackend`](crate::AnalysisBackend) with
//! queued results and tracked requests.

mod backend;

pub use backend::MockBackend;
