use super::*;

const T0: i64 = 1_700_000_000_000;

// =============================================================
// Cadence scheduling
// =============================================================

#[test]
fn first_tick_is_due_immediately() {
    let cadence = AutosaveCadence::new(15_000);
    assert!(cadence.due(T0));
}

#[test]
fn not_due_again_until_the_interval_elapses() {
    let mut cadence = AutosaveCadence::new(15_000);
    cadence.begin(T0);
    cadence.succeed();
    assert!(!cadence.due(T0 + 14_999));
    assert!(cadence.due(T0 + 15_000));
}

#[test]
fn never_due_while_in_flight() {
    let mut cadence = AutosaveCadence::new(15_000);
    cadence.begin(T0);
    assert!(cadence.is_in_flight());
    assert!(!cadence.due(T0 + 60_000));
}

#[test]
fn interval_clamps_up_to_one_second() {
    assert_eq!(AutosaveCadence::new(10).interval_ms(), 1_000);
    assert_eq!(AutosaveCadence::new(15_000).interval_ms(), 15_000);
}

#[test]
fn default_uses_the_standard_interval() {
    assert_eq!(AutosaveCadence::default().interval_ms(), DEFAULT_AUTOSAVE_INTERVAL_MS);
}

// =============================================================
// Failure tracking — a failed save retries on the next due tick
// =============================================================

#[test]
fn failure_frees_the_slot_and_counts() {
    let mut cadence = AutosaveCadence::new(15_000);
    cadence.begin(T0);
    cadence.fail();
    assert!(!cadence.is_in_flight());
    assert_eq!(cadence.consecutive_failures(), 1);
    // Retry happens at the next interval boundary without user action.
    assert!(cadence.due(T0 + 15_000));
}

#[test]
fn failures_accumulate_until_a_success() {
    let mut cadence = AutosaveCadence::new(15_000);
    for i in 0..3 {
        cadence.begin(T0 + i * 15_000);
        cadence.fail();
    }
    assert_eq!(cadence.consecutive_failures(), 3);
    cadence.begin(T0 + 45_000);
    cadence.succeed();
    assert_eq!(cadence.consecutive_failures(), 0);
}

// =============================================================
// Retry backoff
// =============================================================

#[test]
fn submit_backoff_doubles_to_the_cap() {
    assert_eq!(SUBMIT_BACKOFF.delay_ms(1), Some(1_000));
    assert_eq!(SUBMIT_BACKOFF.delay_ms(2), Some(2_000));
    assert_eq!(SUBMIT_BACKOFF.delay_ms(3), Some(4_000));
    assert_eq!(SUBMIT_BACKOFF.delay_ms(4), Some(8_000));
}

#[test]
fn submit_backoff_exhausts_after_the_attempt_budget() {
    assert_eq!(SUBMIT_BACKOFF.delay_ms(SUBMIT_BACKOFF.max_attempts), None);
    assert_eq!(SUBMIT_BACKOFF.delay_ms(SUBMIT_BACKOFF.max_attempts + 1), None);
}

#[test]
fn zero_failures_has_no_delay_slot() {
    assert_eq!(SUBMIT_BACKOFF.delay_ms(0), None);
}

#[test]
fn delay_caps_at_max() {
    let backoff = RetryBackoff { base_ms: 1_000, max_ms: 3_000, max_attempts: 10 };
    assert_eq!(backoff.delay_ms(5), Some(3_000));
}

#[test]
fn large_failure_counts_do_not_overflow() {
    let backoff = RetryBackoff { base_ms: 1_000, max_ms: 10_000, max_attempts: u32::MAX };
    assert_eq!(backoff.delay_ms(40), Some(10_000));
}
