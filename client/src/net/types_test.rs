use super::*;

// =============================================================
// UserRole
// =============================================================

#[test]
fn role_defaults_to_student() {
    assert_eq!(UserRole::default(), UserRole::Student);
}

#[test]
fn unknown_role_values_fall_back_instead_of_failing() {
    let user: User = serde_json::from_str(
        r#"{"id": "u1", "name": "Ada", "email": null, "role": "superintendent"}"#,
    )
    .expect("payload with unrecognized role");
    assert_eq!(user.role, UserRole::Unknown);
}

#[test]
fn missing_role_defaults_to_student() {
    let user: User =
        serde_json::from_str(r#"{"id": "u1", "name": "Ada", "email": "a@example.com"}"#).expect("no role field");
    assert_eq!(user.role, UserRole::Student);
}

#[test]
fn role_labels_are_distinct() {
    let roles = [
        UserRole::Student,
        UserRole::Teacher,
        UserRole::Parent,
        UserRole::Admin,
        UserRole::Unknown,
    ];
    for (i, a) in roles.iter().enumerate() {
        for (j, b) in roles.iter().enumerate() {
            if i != j {
                assert_ne!(a.label(), b.label());
            }
        }
    }
}

// =============================================================
// AnswerValue
// =============================================================

#[test]
fn answer_value_uses_tagged_representation() {
    let raw = serde_json::to_value(AnswerValue::Text("hello".to_owned())).expect("serialize");
    assert_eq!(raw, serde_json::json!({"type": "text", "value": "hello"}));

    let raw = serde_json::to_value(AnswerValue::Choices(vec!["a".to_owned(), "b".to_owned()])).expect("serialize");
    assert_eq!(raw, serde_json::json!({"type": "choices", "value": ["a", "b"]}));
}

#[test]
fn answer_value_round_trips() {
    let original = AnswerValue::Structured(serde_json::json!({"cells": [1, 2, 3]}));
    let raw = serde_json::to_string(&original).expect("serialize");
    let back: AnswerValue = serde_json::from_str(&raw).expect("deserialize");
    assert_eq!(back, original);
}

#[test]
fn blank_detection_per_variant() {
    assert!(AnswerValue::Text(String::new()).is_blank());
    assert!(AnswerValue::Text("   ".to_owned()).is_blank());
    assert!(!AnswerValue::Text("42".to_owned()).is_blank());
    assert!(AnswerValue::Choices(Vec::new()).is_blank());
    assert!(!AnswerValue::Choices(vec!["opt1".to_owned()]).is_blank());
    assert!(AnswerValue::Structured(serde_json::Value::Null).is_blank());
    assert!(!AnswerValue::Structured(serde_json::json!({})).is_blank());
}

// =============================================================
// ExamAttempt defaults
// =============================================================

#[test]
fn attempt_without_proctoring_block_gets_defaults() {
    let attempt: ExamAttempt = serde_json::from_value(serde_json::json!({
        "attempt_id": "at1",
        "exam_id": "ex1",
        "title": "Algebra Midterm",
        "questions": [],
        "started_at_ms": 1_700_000_000_000_i64,
        "duration_secs": 600
    }))
    .expect("attempt without proctoring");
    assert_eq!(attempt.proctoring, ProctorConfig::default());
}

#[test]
fn question_options_default_to_empty() {
    let question: Question = serde_json::from_value(serde_json::json!({
        "id": "q1",
        "kind": "free_text",
        "prompt": "Explain."
    }))
    .expect("free-text question");
    assert!(question.options.is_empty());
    assert_eq!(question.kind, QuestionKind::FreeText);
    assert_eq!(question.points, 0.0);
}

// =============================================================
// SubmissionResult
// =============================================================

#[test]
fn percent_is_score_over_max() {
    let result = SubmissionResult {
        attempt_id: "at1".to_owned(),
        score: 7.5,
        max_score: 10.0,
        breakdown: Vec::new(),
        submitted_at_ms: 0,
    };
    assert!((result.percent() - 75.0).abs() < f64::EPSILON);
}

#[test]
fn percent_handles_zero_max_score() {
    let result = SubmissionResult {
        attempt_id: "at1".to_owned(),
        score: 0.0,
        max_score: 0.0,
        breakdown: Vec::new(),
        submitted_at_ms: 0,
    };
    assert!(result.percent().abs() < f64::EPSILON);
}

#[test]
fn correct_count_filters_the_breakdown() {
    let result = SubmissionResult {
        attempt_id: "at1".to_owned(),
        score: 2.0,
        max_score: 3.0,
        breakdown: vec![
            QuestionOutcome { question_id: "q1".to_owned(), correct: true, points_awarded: 1.0 },
            QuestionOutcome { question_id: "q2".to_owned(), correct: false, points_awarded: 0.0 },
            QuestionOutcome { question_id: "q3".to_owned(), correct: true, points_awarded: 1.0 },
        ],
        submitted_at_ms: 0,
    };
    assert_eq!(result.correct_count(), 2);
}

// =============================================================
// AnswerPayload
// =============================================================

#[test]
fn payload_round_trips_a_mixed_answer_map() {
    let mut payload = AnswerPayload::default();
    payload.answers.insert("q1".to_owned(), AnswerValue::Text("photosynthesis".to_owned()));
    payload.answers.insert("q2".to_owned(), AnswerValue::Choices(vec!["b".to_owned()]));
    let raw = serde_json::to_string(&payload).expect("serialize");
    let back: AnswerPayload = serde_json::from_str(&raw).expect("deserialize");
    assert_eq!(back, payload);
}
