use super::*;

const T0: i64 = 1_700_000_000_000;

// =============================================================
// Construction
// =============================================================

#[test]
fn accepts_positive_duration_and_past_start() {
    let countdown = Countdown::new(T0, 600_000, T0 + 5_000).expect("valid inputs");
    assert_eq!(countdown.started_at_ms(), T0);
    assert_eq!(countdown.duration_ms(), 600_000);
    assert_eq!(countdown.deadline_ms(), T0 + 600_000);
}

#[test]
fn rejects_zero_duration() {
    assert_eq!(
        Countdown::new(T0, 0, T0),
        Err(CountdownError::NonPositiveDuration(0))
    );
}

#[test]
fn rejects_negative_duration() {
    assert_eq!(
        Countdown::new(T0, -1, T0),
        Err(CountdownError::NonPositiveDuration(-1))
    );
}

#[test]
fn rejects_start_in_the_future() {
    assert_eq!(
        Countdown::new(T0 + 1, 600_000, T0),
        Err(CountdownError::StartInFuture { start_ms: T0 + 1, now_ms: T0 })
    );
}

#[test]
fn start_equal_to_now_is_valid() {
    assert!(Countdown::new(T0, 1_000, T0).is_ok());
}

#[test]
fn errors_render_useful_messages() {
    let err = Countdown::new(T0, -5, T0).expect_err("must reject");
    assert!(err.to_string().contains("-5"));
}

// =============================================================
// Remaining time
// =============================================================

#[test]
fn remaining_counts_down_from_full_duration() {
    let countdown = Countdown::new(T0, 600_000, T0).expect("valid");
    assert_eq!(countdown.remaining_ms(T0), 600_000);
    assert_eq!(countdown.remaining_ms(T0 + 1_000), 599_000);
    assert_eq!(countdown.remaining_ms(T0 + 600_000), 0);
}

#[test]
fn remaining_clamps_to_zero_past_deadline() {
    let countdown = Countdown::new(T0, 600_000, T0).expect("valid");
    assert_eq!(countdown.remaining_ms(T0 + 601_000), 0);
    assert_eq!(countdown.remaining_ms(i64::MAX / 2), 0);
}

#[test]
fn expiry_is_exact_at_the_deadline() {
    let countdown = Countdown::new(T0, 600_000, T0).expect("valid");
    assert!(!countdown.is_expired(T0 + 599_999));
    assert!(countdown.is_expired(T0 + 600_000));
    assert!(countdown.is_expired(T0 + 600_001));
}

// =============================================================
// Clock formatting
// =============================================================

#[test]
fn formats_minutes_and_seconds() {
    assert_eq!(format_clock(600_000), "10:00");
    assert_eq!(format_clock(61_000), "1:01");
    assert_eq!(format_clock(0), "0:00");
}

#[test]
fn formats_hours_past_sixty_minutes() {
    assert_eq!(format_clock(3_600_000), "1:00:00");
    assert_eq!(format_clock(5_025_000), "1:23:45");
}

#[test]
fn partial_seconds_round_up() {
    assert_eq!(format_clock(599_001), "10:00");
    assert_eq!(format_clock(1), "0:01");
}

#[test]
fn negative_input_clamps_to_zero() {
    assert_eq!(format_clock(-500), "0:00");
}
