use super::*;

// =============================================================
// Endpoint formatting
// =============================================================

#[test]
fn attempt_start_endpoint_formats_expected_path() {
    assert_eq!(attempt_start_endpoint("ex42"), "/api/exams/ex42/attempts");
}

#[test]
fn attempt_answers_endpoint_formats_expected_path() {
    assert_eq!(attempt_answers_endpoint("at7"), "/api/attempts/at7/answers");
}

#[test]
fn attempt_submit_endpoint_formats_expected_path() {
    assert_eq!(attempt_submit_endpoint("at7"), "/api/attempts/at7/submit");
}

// =============================================================
// Failure messages
// =============================================================

#[test]
fn status_failed_message_includes_subject_and_status() {
    assert_eq!(status_failed_message("autosave", 503), "autosave failed: 503");
    assert_eq!(status_failed_message("submission", 404), "submission failed: 404");
}

#[test]
fn timeout_message_names_the_bound() {
    assert!(request_timed_out_message().contains("10000 ms"));
}

// =============================================================
// Submit error taxonomy
// =============================================================

#[test]
fn invalid_attempt_statuses_are_terminal() {
    for status in [401, 403, 404, 409, 410, 422] {
        assert!(is_terminal_submit_status(status), "{status} should be terminal");
    }
}

#[test]
fn server_hiccups_are_transient() {
    for status in [429, 500, 502, 503, 504] {
        assert!(!is_terminal_submit_status(status), "{status} should be retryable");
    }
}

#[test]
fn submit_error_exposes_its_message() {
    assert_eq!(SubmitError::Transient("boom".to_owned()).message(), "boom");
    assert_eq!(SubmitError::Terminal("gone".to_owned()).message(), "gone");
}
