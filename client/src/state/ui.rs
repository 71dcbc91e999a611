//! Local UI chrome state (theme, banner expansion).
//!
//! DESIGN
//! ======
//! Keeps transient presentation concerns out of domain state (`exam`,
//! `exams`) so chrome controls can evolve independently of attempt data.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// UI state for theme and exam-chrome toggles.
#[derive(Clone, Copy, Debug, Default)]
pub struct UiState {
    pub dark_mode: bool,
    /// Whether the violation banner shows the per-event detail rows.
    pub violations_expanded: bool,
}
