use dotenvy::dotenv;
use jobprep_sdk::{AnalysisBackend, JobAnalysisRequest, JobDescriptionPayload};

mod common;

#[tokio::main]
async fn main() {
    dotenv().ok();

    let backend = common::get_backend();

    let analysis = backend
        .analyze_job(JobAnalysisRequest {
            job_description: JobDescriptionPayload::text(
                "Senior Backend Engineer — own the ingestion pipeline, design public APIs, \
                 and mentor junior engineers. Requirements: 5+ years of Rust or Go, \
                 PostgreSQL, Kafka. Nice to have: Kubernetes.",
            ),
            user_id: "demo-user".to_string(),
        })
        .await
        .unwrap();

    println!("{analysis:#?}");
}
