//! Walk the four preparation stages end to end against a live service,
//! answering every interview question with the same canned audio clip.
//!
//! Usage: cargo run --example run-pipeline -- <jd.txt|jd.png> <resume.pdf> <answer.wav>

use dotenvy::dotenv;
use jobprep_pipeline::{
    InterviewEngine, InterviewPhase, QuestionGenerator, SessionStore, StaticCapture,
    SubmissionAdapter, UploadedFile,
};
use jobprep_sdk::{HttpBackend, HttpBackendOptions};
use std::sync::Arc;

#[tokio::main]
async fn main() {
    dotenv().ok();

    let mut args = std::env::args().skip(1);
    let usage = "usage: run-pipeline <jd.txt|jd.png> <resume.pdf> <answer.wav>";
    let jd_path = args.next().expect(usage);
    let resume_path = args.next().expect(usage);
    let answer_path = args.next().expect(usage);

    let backend = Arc::new(HttpBackend::new(HttpBackendOptions {
        base_url: std::env::var("JOBPREP_BASE_URL")
            .expect("JOBPREP_BASE_URL environment variable must be set"),
        ..Default::default()
    }));
    let store = Arc::new(SessionStore::new());

    let adapter = SubmissionAdapter::new(backend.clone(), store.clone());

    let analysis = adapter
        .submit_job_description(&read_file(&jd_path), "demo-user")
        .await
        .unwrap();
    println!("== {} ==\n{}\n", analysis.job_title, analysis.job_summary);

    let resume = adapter.submit_resume(&read_file(&resume_path)).await.unwrap();
    println!("resume match score: {}\n", resume.match_score);

    let generator = QuestionGenerator::new(backend.clone(), store.clone());
    let questions = generator.generate("demo-user").await.unwrap();
    println!("prepared {} interview questions\n", questions.len());

    let capture = Arc::new(StaticCapture::new(
        std::fs::read(&answer_path).expect("failed to read answer clip"),
    ));
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
    for strength in &report.strengths {
        println!("+ {strength}");
    }
    for area in &report.areas_for_improvement {
        println!("- {area}");
    }
}

fn read_file(path: &str) -> UploadedFile {
    let bytes = std::fs::read(path).expect("failed to read file");
    let mime = match path.rsplit_once('.').map(|(_, ext)| ext) {
        Some("png") => "image/png",
        Some("jpg" | "jpeg") => "image/jpeg",
        Some("pdf") => "application/pdf",
        _ => "text/plain",
    };
    UploadedFile::new(path, mime, bytes)
}
