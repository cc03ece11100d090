use jobprep_sdk::{HttpBackend, HttpBackendOptions};

pub fn get_backend() -> HttpBackend {
    HttpBackend::new(HttpBackendOptions {
        base_url: std::env::var("JOBPREP_BASE_URL")
            .expect("JOBPREP_BASE_URL environment variable must be set"),
        ..Default::default()
    })
}
