//! Append-only violation ledger and derived per-kind counts.
//!
//! DESIGN
//! ======
//! All violation bookkeeping funnels through [`ViolationLedger::append`] so
//! the derived counts can never drift from the record list: at every point
//! in time `counts().total() == records().len()`. Records are append-only;
//! the one permitted late write is filling a tab-switch duration when the
//! tab becomes visible again.

#[cfg(test)]
#[path = "ledger_test.rs"]
mod ledger_test;

use serde::{Deserialize, Serialize};

/// Closed set of integrity events recorded during monitoring.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViolationKind {
    /// The tab or window lost visibility.
    TabSwitch,
    /// The document left fullscreen, or the fullscreen request was refused.
    FullscreenExit,
    /// A copy attempt was intercepted.
    CopyAttempt,
    /// The context menu was opened over exam content.
    ContextMenuAttempt,
}

impl ViolationKind {
    /// Every kind, in display order.
    pub const ALL: [Self; 4] = [
        Self::TabSwitch,
        Self::FullscreenExit,
        Self::CopyAttempt,
        Self::ContextMenuAttempt,
    ];

    /// Short human-readable label for banners and detail rows.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::TabSwitch => "tab switch",
            Self::FullscreenExit => "fullscreen exit",
            Self::CopyAttempt => "copy attempt",
            Self::ContextMenuAttempt => "context menu",
        }
    }
}

/// One recorded integrity event.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ViolationRecord {
    pub kind: ViolationKind,
    /// Detection time in milliseconds since the Unix epoch.
    pub at_ms: i64,
    /// Time spent away for a completed tab switch. `None` for other kinds,
    /// and for a tab switch whose return has not been observed yet.
    pub duration_ms: Option<i64>,
    /// Open-ended detail payload (e.g. why a fullscreen exit was recorded).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<serde_json::Value>,
}

/// Per-kind record counts derived from the ledger.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViolationCounts {
    pub tab_switch: usize,
    pub fullscreen_exit: usize,
    pub copy_attempt: usize,
    pub context_menu_attempt: usize,
}

impl ViolationCounts {
    /// Count for one kind.
    #[must_use]
    pub fn of(&self, kind: ViolationKind) -> usize {
        match kind {
            ViolationKind::TabSwitch => self.tab_switch,
            ViolationKind::FullscreenExit => self.fullscreen_exit,
            ViolationKind::CopyAttempt => self.copy_attempt,
            ViolationKind::ContextMenuAttempt => self.context_menu_attempt,
        }
    }

    /// Sum over all kinds. Equal to the ledger length at all times.
    #[must_use]
    pub fn total(&self) -> usize {
        self.tab_switch + self.fullscreen_exit + self.copy_attempt + self.context_menu_attempt
    }

    fn bump(&mut self, kind: ViolationKind) {
        match kind {
            ViolationKind::TabSwitch => self.tab_switch += 1,
            ViolationKind::FullscreenExit => self.fullscreen_exit += 1,
            ViolationKind::CopyAttempt => self.copy_attempt += 1,
            ViolationKind::ContextMenuAttempt => self.context_menu_attempt += 1,
        }
    }
}

/// Append-only violation ledger for one attempt.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ViolationLedger {
    records: Vec<ViolationRecord>,
    counts: ViolationCounts,
    /// Index of the tab-switch record still awaiting its return timestamp.
    open_tab_switch: Option<usize>,
}

impl ViolationLedger {
    /// Append one record and return the new total.
    ///
    /// A `TabSwitch` append leaves its duration unset and marks the record
    /// as the open tab switch until [`ViolationLedger::close_tab_switch`]
    /// fills it in.
    pub fn append(&mut self, kind: ViolationKind, at_ms: i64, metadata: Option<serde_json::Value>) -> usize {
        if kind == ViolationKind::TabSwitch {
            self.open_tab_switch = Some(self.records.len());
        }
        self.records.push(ViolationRecord { kind, at_ms, duration_ms: None, metadata });
        self.counts.bump(kind);
        self.counts.total()
    }

    /// Fill the open tab-switch record's duration when the tab becomes
    /// visible again. Returns the duration, clamped non-negative, or `None`
    /// when no tab switch is open.
    pub fn close_tab_switch(&mut self, visible_at_ms: i64) -> Option<i64> {
        let index = self.open_tab_switch.take()?;
        let record = self.records.get_mut(index)?;
        let duration = (visible_at_ms - record.at_ms).max(0);
        record.duration_ms = Some(duration);
        Some(duration)
    }

    /// All records in append order.
    #[must_use]
    pub fn records(&self) -> &[ViolationRecord] {
        &self.records
    }

    /// Derived per-kind counts.
    #[must_use]
    pub fn counts(&self) -> ViolationCounts {
        self.counts
    }

    /// Total record count.
    #[must_use]
    pub fn total(&self) -> usize {
        self.records.len()
    }

    /// True while a tab switch is awaiting its return timestamp.
    #[must_use]
    pub fn has_open_tab_switch(&self) -> bool {
        self.open_tab_switch.is_some()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
