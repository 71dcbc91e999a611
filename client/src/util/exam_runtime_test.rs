use super::*;
use crate::net::types::ProctorConfig;

const T0: i64 = 1_700_000_000_000;

fn attempt(started_at_ms: i64, duration_secs: i64) -> ExamAttempt {
    ExamAttempt {
        attempt_id: "at1".to_owned(),
        exam_id: "ex1".to_owned(),
        title: "Algebra Midterm".to_owned(),
        questions: Vec::new(),
        started_at_ms,
        duration_secs,
        proctoring: ProctorConfig::default(),
    }
}

// =============================================================
// Countdown construction from server timing
// =============================================================

#[test]
fn server_timing_builds_the_countdown() {
    let countdown = build_countdown(&attempt(T0, 600), T0 + 2_000).expect("valid timing");
    assert_eq!(countdown.started_at_ms(), T0);
    assert_eq!(countdown.duration_ms(), 600_000);
    assert_eq!(countdown.remaining_ms(T0 + 2_000), 598_000);
}

#[test]
fn future_start_falls_back_to_the_local_clock() {
    // Modest clock skew: the server stamped a start slightly ahead of us.
    let countdown = build_countdown(&attempt(T0 + 3_000, 600), T0).expect("skew tolerated");
    assert_eq!(countdown.started_at_ms(), T0);
    assert_eq!(countdown.remaining_ms(T0), 600_000);
}

#[test]
fn non_positive_duration_is_surfaced() {
    let err = build_countdown(&attempt(T0, 0), T0).expect_err("malformed template");
    assert!(err.contains("positive"));
}

#[test]
fn tick_interval_divides_a_second() {
    assert_eq!(1_000 % TICK_INTERVAL_MS, 0);
}
