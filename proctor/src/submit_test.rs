use super::*;

// =============================================================
// Single-flight law
// =============================================================

#[test]
fn first_trigger_wins() {
    let mut gate = SubmitGate::default();
    assert!(gate.try_begin());
    assert_eq!(gate.state(), SubmitState::InFlight);
}

#[test]
fn concurrent_triggers_are_dropped() {
    let mut gate = SubmitGate::default();
    assert!(gate.try_begin());
    // Timer expiry and threshold trip in the same tick: only one run starts.
    assert!(!gate.try_begin());
    assert!(!gate.try_begin());
}

#[test]
fn no_reentry_after_completion() {
    let mut gate = SubmitGate::default();
    assert!(gate.try_begin());
    gate.complete();
    assert!(gate.is_completed());
    assert!(!gate.try_begin());
    assert!(gate.is_closed());
}

// =============================================================
// Failure modes
// =============================================================

#[test]
fn transient_failure_allows_manual_retry() {
    let mut gate = SubmitGate::default();
    assert!(gate.try_begin());
    gate.fail(5, true);
    assert_eq!(gate.state(), SubmitState::Failed { attempts: 5, retry_allowed: true });
    assert!(gate.is_settled());
    assert!(!gate.is_closed());
    assert!(gate.try_begin());
    assert_eq!(gate.state(), SubmitState::InFlight);
}

#[test]
fn terminal_failure_locks_the_gate() {
    let mut gate = SubmitGate::default();
    assert!(gate.try_begin());
    gate.fail(1, false);
    assert!(gate.is_closed());
    assert!(!gate.try_begin());
    assert_eq!(gate.state(), SubmitState::Failed { attempts: 1, retry_allowed: false });
}

#[test]
fn retry_after_failure_can_still_complete() {
    let mut gate = SubmitGate::default();
    assert!(gate.try_begin());
    gate.fail(5, true);
    assert!(gate.try_begin());
    gate.complete();
    assert!(gate.is_completed());
}

// =============================================================
// Defensive transitions
// =============================================================

#[test]
fn complete_outside_a_run_is_a_noop() {
    let mut gate = SubmitGate::default();
    gate.complete();
    assert_eq!(gate.state(), SubmitState::Idle);
}

#[test]
fn fail_outside_a_run_is_a_noop() {
    let mut gate = SubmitGate::default();
    gate.fail(3, true);
    assert_eq!(gate.state(), SubmitState::Idle);
    gate.try_begin();
    gate.complete();
    gate.fail(1, false);
    assert!(gate.is_completed());
}

#[test]
fn default_gate_is_idle_and_open() {
    let gate = SubmitGate::default();
    assert_eq!(gate.state(), SubmitState::Idle);
    assert!(!gate.is_settled());
    assert!(!gate.is_closed());
}
