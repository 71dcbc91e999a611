//! Exam-list state for the dashboard.
//!
//! DESIGN
//! ======
//! Separating list state from active-attempt state avoids accidental
//! coupling between navigation inventory and in-attempt answering data.

#[cfg(test)]
#[path = "exams_test.rs"]
mod exams_test;

use crate::net::types::ExamSummary;

/// Shared exam list state backed by the `/api/exams` endpoint.
#[derive(Clone, Debug, Default)]
pub struct ExamsState {
    pub items: Vec<ExamSummary>,
    pub loading: bool,
    pub error: Option<String>,
}

impl ExamsState {
    /// Replace the inventory after a successful fetch.
    pub fn set_items(&mut self, items: Vec<ExamSummary>) {
        self.items = items;
        self.loading = false;
        self.error = None;
    }

    /// Record a failed fetch, keeping any previously loaded items visible.
    pub fn set_error(&mut self, message: String) {
        self.loading = false;
        self.error = Some(message);
    }
}
