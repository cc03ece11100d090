mod backend;
mod client_utils;
mod encoding;
mod errors;
mod http;
pub mod jobprep_sdk_test;
mod types;

pub use backend::AnalysisBackend;
pub use encoding::{data_url_payload, from_base64, to_base64};
pub use errors::*;
pub use http::{HttpBackend, HttpBackendOptions};
pub use types::*;
