use jobprep_sdk::{
    ApiEnvelope, BackendError, FinalReport, GenerateQuestionsRequest, InteractRequest, JobAnalysis,
    JobAnalysisRequest, JobDescriptionPayload, NextAction, OverallScore, ResumeAnalysisRequest,
    TurnOutcome,
};
use serde_json::json;

#[test]
fn job_request_with_text_serializes_jd_only() {
    let request = JobAnalysisRequest {
        job_description: JobDescriptionPayload::text("Senior Backend Engineer..."),
        user_id: "user-1".to_string(),
    };
    assert_eq!(
        serde_json::to_value(&request).unwrap(),
        json!({"jd": "Senior Backend Engineer...", "userId": "user-1"})
    );
}

#[test]
fn job_request_with_image_serializes_jd_img_only() {
    let request = JobAnalysisRequest {
        job_description: JobDescriptionPayload::image("aGVsbG8="),
        user_id: "user-1".to_string(),
    };
    assert_eq!(
        serde_json::to_value(&request).unwrap(),
        json!({"jdImg": "aGVsbG8=", "userId": "user-1"})
    );
}

#[test]
fn resume_request_attaches_stored_job_description() {
    let request = ResumeAnalysisRequest {
        resume: "cmVzdW1l".to_string(),
        job_description: Some(JobDescriptionPayload::text("the jd")),
    };
    assert_eq!(
        serde_json::to_value(&request).unwrap(),
        json!({"resume": "cmVzdW1l", "jd": "the jd"})
    );
}

#[test]
fn resume_request_without_job_description_carries_resume_only() {
    let request = ResumeAnalysisRequest {
        resume: "cmVzdW1l".to_string(),
        job_description: None,
    };
    assert_eq!(
        serde_json::to_value(&request).unwrap(),
        json!({"resume": "cmVzdW1l"})
    );
}

#[test]
fn generate_questions_request_uses_camel_case() {
    let request = GenerateQuestionsRequest {
        resume: "cmVzdW1l".to_string(),
        job_description: Some(JobDescriptionPayload::image("aW1n")),
        user_id: "user-1".to_string(),
    };
    assert_eq!(
        serde_json::to_value(&request).unwrap(),
        json!({"resume": "cmVzdW1l", "jdImg": "aW1n", "userId": "user-1"})
    );
}

#[test]
fn interact_request_omits_next_question_on_last_turn() {
    let request = InteractRequest {
        interview_id: "iv-abc".to_string(),
        question: "Why us?".to_string(),
        answer_audio: "YXVkaW8=".to_string(),
        next_question: None,
    };
    assert_eq!(
        serde_json::to_value(&request).unwrap(),
        json!({
            "interviewId": "iv-abc",
            "question": "Why us?",
            "answerAudio": "YXVkaW8="
        })
    );
}

#[test]
fn interact_request_carries_next_question() {
    let request = InteractRequest {
        interview_id: "iv-abc".to_string(),
        question: "Why us?".to_string(),
        answer_audio: "YXVkaW8=".to_string(),
        next_question: Some("Tell me about a conflict.".to_string()),
    };
    let value = serde_json::to_value(&request).unwrap();
    assert_eq!(value["nextQuestion"], json!("Tell me about a conflict."));
}

#[test]
fn envelope_success_unwraps_data() {
    let envelope: ApiEnvelope<Vec<String>> =
        serde_json::from_value(json!({"success": true, "data": ["a", "b"]})).unwrap();
    assert_eq!(envelope.into_result().unwrap(), vec!["a", "b"]);
}

#[test]
fn envelope_failure_surfaces_service_message() {
    let envelope: ApiEnvelope<Vec<String>> =
        serde_json::from_value(json!({"success": false, "errorMsg": "quota exceeded"})).unwrap();
    match envelope.into_result() {
        Err(BackendError::Service(msg)) => assert_eq!(msg, "quota exceeded"),
        other => panic!("expected service error, got {other:?}"),
    }
}

#[test]
fn envelope_success_without_data_is_an_invariant_error() {
    let envelope: ApiEnvelope<Vec<String>> =
        serde_json::from_value(json!({"success": true})).unwrap();
    assert!(matches!(
        envelope.into_result(),
        Err(BackendError::Invariant(_))
    ));
}

#[test]
fn next_action_decodes_follow_up() {
    let outcome: TurnOutcome = serde_json::from_value(json!({
        "feedback": {
            "question": "Why us?",
            "transcript": "because...",
            "evaluation": "solid"
        },
        "nextAction": {"type": "ASK_FOLLOW_UP", "question": {"text": "Tell me more about X"}}
    }))
    .unwrap();
    match outcome.next_action {
        NextAction::AskFollowUp { question } => {
            assert_eq!(question.text, "Tell me more about X");
        }
        other => panic!("expected follow-up, got {other:?}"),
    }
}

#[test]
fn next_action_decodes_proceed() {
    let action: NextAction = serde_json::from_value(json!({"type": "PROCEED_TO_NEXT"})).unwrap();
    assert_eq!(action, NextAction::ProceedToNext);
}

#[test]
fn unknown_next_action_concludes() {
    let action: NextAction =
        serde_json::from_value(json!({"type": "WRAP_UP_INTERVIEW"})).unwrap();
    assert_eq!(action, NextAction::Conclude);
}

#[test]
fn overall_score_decodes_number_grade_and_null() {
    assert_eq!(
        serde_json::from_value::<OverallScore>(json!(92.5)).unwrap(),
        OverallScore::Number(92.5)
    );
    assert_eq!(
        serde_json::from_value::<OverallScore>(json!("B+")).unwrap(),
        OverallScore::Grade("B+".to_string())
    );
    assert_eq!(
        serde_json::from_value::<OverallScore>(json!(null)).unwrap(),
        OverallScore::Unavailable
    );
}

#[test]
fn overall_score_displays_unavailable_as_na() {
    assert_eq!(OverallScore::Unavailable.to_string(), "N/A");
    assert_eq!(OverallScore::Grade("A-".to_string()).to_string(), "A-");
}

#[test]
fn final_report_decodes_camel_case_fields() {
    let report: FinalReport = serde_json::from_value(json!({
        "overallScore": 88,
        "summary": "strong candidate",
        "strengths": ["clear answers"],
        "areasForImprovement": ["more examples"],
        "detailedFeedback": [{
            "question": "Why us?",
            "transcript": "because...",
            "evaluation": "solid"
        }]
    }))
    .unwrap();
    assert_eq!(report.overall_score, OverallScore::Number(88.0));
    assert_eq!(report.areas_for_improvement, vec!["more examples"]);
    assert_eq!(report.detailed_feedback.len(), 1);
}

#[test]
fn final_report_without_score_defaults_to_unavailable() {
    let report: FinalReport = serde_json::from_value(json!({
        "summary": "partial",
        "strengths": [],
        "areasForImprovement": [],
        "detailedFeedback": []
    }))
    .unwrap();
    assert_eq!(report.overall_score, OverallScore::Unavailable);
}

#[test]
fn job_analysis_decodes_all_sections() {
    let analysis: JobAnalysis = serde_json::from_value(json!({
        "jobTitle": "Senior Backend Engineer",
        "jobSummary": "Owns the ingestion pipeline.",
        "competencyAnalysis": {
            "hardSkills": ["Rust", "PostgreSQL"],
            "softSkills": ["mentoring"],
            "preferredQualifications": ["Kubernetes"],
            "keywords": ["backend", "pipeline"]
        },
        "responsibilityAnalysis": {
            "coreResponsibilities": ["design APIs"],
            "potentialChallenges": "legacy migration"
        },
        "companyInsights": {
            "cultureClues": ["fast-paced"],
            "benefitsHighlights": ["remote-friendly"]
        },
        "applicationStrategy": {
            "resumeFocus": "lead with pipeline work",
            "interviewQuestions": ["Describe a system you scaled."]
        }
    }))
    .unwrap();
    assert_eq!(analysis.job_title, "Senior Backend Engineer");
    assert_eq!(analysis.competency_analysis.hard_skills.len(), 2);
    assert_eq!(
        analysis.application_strategy.interview_questions,
        vec!["Describe a system you scaled."]
    );
}
