use super::*;

fn ledger_with(kinds: &[ViolationKind]) -> ViolationLedger {
    let mut ledger = ViolationLedger::default();
    for (i, kind) in kinds.iter().enumerate() {
        ledger.append(*kind, 1_000 + i as i64, None);
    }
    ledger
}

// =============================================================
// Append + sum invariant
// =============================================================

#[test]
fn new_ledger_is_empty() {
    let ledger = ViolationLedger::default();
    assert!(ledger.is_empty());
    assert_eq!(ledger.total(), 0);
    assert_eq!(ledger.counts().total(), 0);
    assert!(!ledger.has_open_tab_switch());
}

#[test]
fn append_returns_running_total() {
    let mut ledger = ViolationLedger::default();
    assert_eq!(ledger.append(ViolationKind::CopyAttempt, 1, None), 1);
    assert_eq!(ledger.append(ViolationKind::CopyAttempt, 2, None), 2);
    assert_eq!(ledger.append(ViolationKind::FullscreenExit, 3, None), 3);
}

#[test]
fn counts_sum_equals_ledger_length_at_every_step() {
    let mut ledger = ViolationLedger::default();
    let sequence = [
        ViolationKind::TabSwitch,
        ViolationKind::CopyAttempt,
        ViolationKind::TabSwitch,
        ViolationKind::ContextMenuAttempt,
        ViolationKind::FullscreenExit,
        ViolationKind::CopyAttempt,
    ];
    for (i, kind) in sequence.iter().enumerate() {
        ledger.append(*kind, i as i64, None);
        assert_eq!(ledger.counts().total(), ledger.records().len());
    }
    assert_eq!(ledger.counts().of(ViolationKind::TabSwitch), 2);
    assert_eq!(ledger.counts().of(ViolationKind::CopyAttempt), 2);
    assert_eq!(ledger.counts().of(ViolationKind::FullscreenExit), 1);
    assert_eq!(ledger.counts().of(ViolationKind::ContextMenuAttempt), 1);
}

#[test]
fn records_keep_append_order() {
    let ledger = ledger_with(&[
        ViolationKind::FullscreenExit,
        ViolationKind::CopyAttempt,
        ViolationKind::TabSwitch,
    ]);
    let kinds: Vec<ViolationKind> = ledger.records().iter().map(|r| r.kind).collect();
    assert_eq!(
        kinds,
        vec![ViolationKind::FullscreenExit, ViolationKind::CopyAttempt, ViolationKind::TabSwitch]
    );
}

#[test]
fn metadata_is_stored_on_the_record() {
    let mut ledger = ViolationLedger::default();
    ledger.append(
        ViolationKind::FullscreenExit,
        5,
        Some(serde_json::json!({"reason": "request_denied"})),
    );
    let record = &ledger.records()[0];
    assert_eq!(
        record.metadata.as_ref().and_then(|m| m.get("reason")).and_then(|v| v.as_str()),
        Some("request_denied")
    );
}

// =============================================================
// Tab-switch duration fill-in
// =============================================================

#[test]
fn tab_switch_opens_with_unset_duration() {
    let mut ledger = ViolationLedger::default();
    ledger.append(ViolationKind::TabSwitch, 10_000, None);
    assert!(ledger.has_open_tab_switch());
    assert_eq!(ledger.records()[0].duration_ms, None);
}

#[test]
fn close_fills_duration_from_away_and_return_timestamps() {
    let mut ledger = ViolationLedger::default();
    ledger.append(ViolationKind::TabSwitch, 10_000, None);
    assert_eq!(ledger.close_tab_switch(12_500), Some(2_500));
    assert_eq!(ledger.records()[0].duration_ms, Some(2_500));
    assert!(!ledger.has_open_tab_switch());
}

#[test]
fn close_without_open_switch_is_a_noop() {
    let mut ledger = ledger_with(&[ViolationKind::CopyAttempt]);
    assert_eq!(ledger.close_tab_switch(99), None);
    assert_eq!(ledger.records()[0].duration_ms, None);
}

#[test]
fn duration_is_never_negative() {
    let mut ledger = ViolationLedger::default();
    ledger.append(ViolationKind::TabSwitch, 10_000, None);
    // A clock step backwards must clamp instead of recording a negative stay.
    assert_eq!(ledger.close_tab_switch(9_000), Some(0));
    assert_eq!(ledger.records()[0].duration_ms, Some(0));
}

#[test]
fn second_hidden_event_moves_the_open_marker() {
    let mut ledger = ViolationLedger::default();
    ledger.append(ViolationKind::TabSwitch, 1_000, None);
    ledger.append(ViolationKind::TabSwitch, 5_000, None);
    assert_eq!(ledger.close_tab_switch(6_000), Some(1_000));
    // The first switch never saw a return and keeps its duration unset.
    assert_eq!(ledger.records()[0].duration_ms, None);
    assert_eq!(ledger.records()[1].duration_ms, Some(1_000));
}

#[test]
fn close_is_single_use() {
    let mut ledger = ViolationLedger::default();
    ledger.append(ViolationKind::TabSwitch, 1_000, None);
    assert!(ledger.close_tab_switch(2_000).is_some());
    assert_eq!(ledger.close_tab_switch(3_000), None);
    assert_eq!(ledger.records()[0].duration_ms, Some(1_000));
}

// =============================================================
// Kinds
// =============================================================

#[test]
fn all_lists_each_kind_once() {
    for kind in ViolationKind::ALL {
        assert_eq!(ViolationKind::ALL.iter().filter(|k| **k == kind).count(), 1);
    }
}

#[test]
fn labels_are_distinct() {
    for a in ViolationKind::ALL {
        for b in ViolationKind::ALL {
            if a != b {
                assert_ne!(a.label(), b.label());
            }
        }
    }
}

#[test]
fn kind_serializes_snake_case() {
    assert_eq!(
        serde_json::to_string(&ViolationKind::FullscreenExit).expect("serialize"),
        r#""fullscreen_exit""#
    );
    assert_eq!(
        serde_json::to_string(&ViolationKind::ContextMenuAttempt).expect("serialize"),
        r#""context_menu_attempt""#
    );
}
