use dotenvy::dotenv;
use jobprep_sdk::{to_base64, AnalysisBackend, GenerateQuestionsRequest};

mod common;

#[tokio::main]
async fn main() {
    dotenv().ok();

    let path = std::env::args()
        .nth(1)
        .expect("usage: generate-questions <resume.pdf>");
    let resume = std::fs::read(&path).expect("failed to read resume file");

    let backend = common::get_backend();

    let questions = backend
        .generate_questions(GenerateQuestionsRequest {
            resume: to_base64(&resume),
            job_description: None,
            user_id: "demo-user".to_string(),
        })
        .await
        .unwrap();

    for (index, question) in questions.iter().enumerate() {
        println!("{}. {}", index + 1, question.question);
        if let Some(answer) = &question.answer {
            println!("   reference answer: {answer}");
        }
    }
}
