//! Proctoring lifecycle state machine for one exam attempt.
//!
//! SYSTEM CONTEXT
//! ==============
//! One session is created per attempt and moves `Idle → Monitoring →
//! Sealed`, never backwards. The client's DOM wiring feeds translated
//! browser events into [`ProctorSession::observe`]; the session only appends
//! to its ledger and reports whether the caller must now drive the forced
//! submission path. It never calls the network and never blocks — a
//! guarantee the exam page relies on to keep typing responsive while
//! monitoring is active.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use serde::{Deserialize, Serialize};

use crate::config::ProctorConfig;
use crate::ledger::{ViolationCounts, ViolationKind, ViolationLedger, ViolationRecord};

/// Lifecycle phase of a proctoring session.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// Created but not started; no listeners are attached yet.
    #[default]
    Idle,
    /// Attempt active; browser events flow in.
    Monitoring,
    /// Attempt over; end time recorded, no further events accepted.
    Sealed,
}

/// Why a session left `Monitoring`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SealReason {
    /// The student submitted.
    Submitted,
    /// The countdown ran out.
    TimeExpired,
    /// The strict-mode violation threshold tripped.
    ViolationLimit,
    /// The exam page was torn down mid-attempt.
    Abandoned,
}

/// Browser integrity events, already translated by the client's DOM wiring.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MonitorEvent {
    /// The tab or window became hidden.
    TabHidden,
    /// The tab became visible again.
    TabVisible,
    /// The document left fullscreen.
    FullscreenExited,
    /// A copy attempt was intercepted.
    CopyAttempted,
    /// The context menu was opened.
    ContextMenuOpened,
}

/// What the caller must do after feeding an event in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ObserveOutcome {
    /// The event was recorded (or closed an open tab switch).
    Recorded,
    /// The event was dropped: the session is not monitoring, the kind is
    /// disabled by config, or there was nothing to close.
    Ignored,
    /// The violation threshold tripped. The session is now sealed with
    /// `auto_submit_triggered` set and the caller must invoke the forced
    /// submission path exactly as if time had expired.
    AutoSubmit,
}

/// Proctoring session wrapping the ledger, config, and lifecycle timestamps.
#[derive(Clone, Debug, Default)]
pub struct ProctorSession {
    phase: Phase,
    config: ProctorConfig,
    ledger: ViolationLedger,
    started_at_ms: Option<i64>,
    ended_at_ms: Option<i64>,
    seal_reason: Option<SealReason>,
    auto_submit_triggered: bool,
}

impl ProctorSession {
    /// Enter `Monitoring` with the attempt's config. Returns `false` (and
    /// changes nothing) unless the session is still `Idle`.
    pub fn begin(&mut self, config: ProctorConfig, now_ms: i64) -> bool {
        if self.phase != Phase::Idle {
            return false;
        }
        self.phase = Phase::Monitoring;
        self.config = config;
        self.started_at_ms = Some(now_ms);
        true
    }

    /// Feed one browser event into the session.
    pub fn observe(&mut self, event: MonitorEvent, now_ms: i64) -> ObserveOutcome {
        if self.phase != Phase::Monitoring {
            return ObserveOutcome::Ignored;
        }
        match event {
            MonitorEvent::TabHidden => {
                if !self.config.enable_tab_detection {
                    return ObserveOutcome::Ignored;
                }
                self.append_and_check(ViolationKind::TabSwitch, now_ms, None)
            }
            MonitorEvent::TabVisible => {
                // Returning is not a violation; it completes the open record.
                if self.ledger.close_tab_switch(now_ms).is_some() {
                    ObserveOutcome::Recorded
                } else {
                    ObserveOutcome::Ignored
                }
            }
            MonitorEvent::FullscreenExited => self.append_and_check(ViolationKind::FullscreenExit, now_ms, None),
            MonitorEvent::CopyAttempted => {
                if !self.config.enable_copy_block {
                    return ObserveOutcome::Ignored;
                }
                self.append_and_check(ViolationKind::CopyAttempt, now_ms, None)
            }
            MonitorEvent::ContextMenuOpened => {
                self.append_and_check(ViolationKind::ContextMenuAttempt, now_ms, None)
            }
        }
    }

    /// Record a refused fullscreen request. The platform declining is not a
    /// fault — it lands in the ledger as a fullscreen exit with a marker.
    pub fn record_fullscreen_denied(&mut self, now_ms: i64) -> ObserveOutcome {
        if self.phase != Phase::Monitoring {
            return ObserveOutcome::Ignored;
        }
        self.append_and_check(
            ViolationKind::FullscreenExit,
            now_ms,
            Some(serde_json::json!({ "reason": "request_denied" })),
        )
    }

    /// Seal the session from outside: submission, expiry, or page teardown.
    /// Returns `false` when the session was not monitoring (already sealed
    /// seals are not overwritten).
    pub fn seal(&mut self, reason: SealReason, now_ms: i64) -> bool {
        if self.phase != Phase::Monitoring {
            return false;
        }
        self.seal_inner(reason, now_ms);
        true
    }

    fn seal_inner(&mut self, reason: SealReason, now_ms: i64) {
        self.phase = Phase::Sealed;
        self.seal_reason = Some(reason);
        self.ended_at_ms = Some(now_ms);
    }

    fn append_and_check(
        &mut self,
        kind: ViolationKind,
        now_ms: i64,
        metadata: Option<serde_json::Value>,
    ) -> ObserveOutcome {
        let total = self.ledger.append(kind, now_ms, metadata);
        if self.config.enforces_threshold() && total >= self.config.max_violations as usize {
            self.seal_inner(SealReason::ViolationLimit, now_ms);
            self.auto_submit_triggered = true;
            return ObserveOutcome::AutoSubmit;
        }
        ObserveOutcome::Recorded
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn is_monitoring(&self) -> bool {
        self.phase == Phase::Monitoring
    }

    #[must_use]
    pub fn config(&self) -> ProctorConfig {
        self.config
    }

    /// Derived per-kind counts.
    #[must_use]
    pub fn counts(&self) -> ViolationCounts {
        self.ledger.counts()
    }

    /// Total violations recorded so far.
    #[must_use]
    pub fn total_violations(&self) -> usize {
        self.ledger.total()
    }

    /// All violation records in detection order.
    #[must_use]
    pub fn records(&self) -> &[ViolationRecord] {
        self.ledger.records()
    }

    /// Set when the strict-mode threshold forced submission.
    #[must_use]
    pub fn auto_submit_triggered(&self) -> bool {
        self.auto_submit_triggered
    }

    #[must_use]
    pub fn seal_reason(&self) -> Option<SealReason> {
        self.seal_reason
    }

    #[must_use]
    pub fn started_at_ms(&self) -> Option<i64> {
        self.started_at_ms
    }

    #[must_use]
    pub fn ended_at_ms(&self) -> Option<i64> {
        self.ended_at_ms
    }
}
