//! Active-attempt state for the exam page.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the local projection of one in-progress attempt. The client is
//! the source of truth for answers until submit: the map here is mutated by
//! input handlers only, and the autosave/submit calls read the latest
//! snapshot at send time. Nothing is read back from the server mid-attempt.

#[cfg(test)]
#[path = "exam_test.rs"]
mod exam_test;

use std::collections::HashMap;

use proctor::autosave::AutosaveCadence;
use proctor::submit::SubmitGate;

use crate::net::types::{AnswerPayload, AnswerValue, ExamAttempt, SubmissionResult};

/// Non-blocking autosave indicator shown in the exam header.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AutosaveIndicator {
    /// Nothing saved yet.
    #[default]
    Idle,
    /// A save is in flight.
    Saving,
    /// The last save was accepted.
    Saved,
    /// The last save failed; the next tick retries automatically.
    Retrying { failures: u32 },
}

/// Submission lifecycle as shown to the user.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum SubmitUiState {
    #[default]
    NotSubmitted,
    /// The submission run (including automatic retries) is in flight.
    InFlight,
    /// The server accepted the submission and returned the result.
    Submitted(SubmissionResult),
    /// The run ended without acceptance. `retry_allowed` distinguishes the
    /// manual-retry notice from the hard-locked contact-support notice.
    Failed { attempts: u32, retry_allowed: bool, message: String },
}

/// State for the one active exam attempt.
#[derive(Clone, Debug, Default)]
pub struct ExamState {
    /// The attempt being taken, once the start call settles.
    pub attempt: Option<ExamAttempt>,
    /// Current responses keyed by question id.
    pub answers: HashMap<String, AnswerValue>,
    /// Set at seal time; mutations afterwards are discarded.
    pub answers_locked: bool,
    /// Remaining time for the countdown badge, updated every tick.
    pub remaining_ms: i64,
    /// Autosave scheduling and failure tracking.
    pub cadence: AutosaveCadence,
    pub autosave: AutosaveIndicator,
    /// Single-flight guard shared by every submission trigger.
    pub gate: SubmitGate,
    pub submit: SubmitUiState,
    /// True while the start call is in flight.
    pub loading: bool,
    /// Start-call failure, shown in place of the exam.
    pub load_error: Option<String>,
}

impl ExamState {
    /// Install a freshly started attempt, optionally seeding answers from a
    /// restored local draft.
    pub fn install_attempt(&mut self, attempt: ExamAttempt, draft: Option<AnswerPayload>) {
        self.remaining_ms = attempt.duration_secs.saturating_mul(1_000);
        self.attempt = Some(attempt);
        self.answers = draft.map(|d| d.answers).unwrap_or_default();
        self.answers_locked = false;
        self.loading = false;
        self.load_error = None;
    }

    /// Record a response. Returns `false` (and changes nothing) once the
    /// attempt is sealed — edits after expiry are discarded, not queued.
    pub fn set_answer(&mut self, question_id: &str, value: AnswerValue) -> bool {
        if self.answers_locked || self.attempt.is_none() {
            return false;
        }
        self.answers.insert(question_id.to_owned(), value);
        true
    }

    /// Toggle one option id inside a multi-choice response.
    pub fn toggle_choice(&mut self, question_id: &str, option_id: &str) -> bool {
        if self.answers_locked || self.attempt.is_none() {
            return false;
        }
        let entry = self
            .answers
            .entry(question_id.to_owned())
            .or_insert_with(|| AnswerValue::Choices(Vec::new()));
        if let AnswerValue::Choices(ids) = entry {
            if let Some(pos) = ids.iter().position(|id| id == option_id) {
                ids.remove(pos);
            } else {
                ids.push(option_id.to_owned());
            }
        } else {
            *entry = AnswerValue::Choices(vec![option_id.to_owned()]);
        }
        true
    }

    /// The current response for one question.
    #[must_use]
    pub fn answer(&self, question_id: &str) -> Option<&AnswerValue> {
        self.answers.get(question_id)
    }

    /// Snapshot of the in-memory answers, taken at send time.
    #[must_use]
    pub fn payload(&self) -> AnswerPayload {
        AnswerPayload { answers: self.answers.clone() }
    }

    /// Questions with a non-blank response, for the progress line.
    #[must_use]
    pub fn answered_count(&self) -> usize {
        self.answers.values().filter(|v| !v.is_blank()).count()
    }

    /// True while the attempt is live: drives the unload guard, which must
    /// stop intercepting the moment this flips false.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.attempt.is_some() && !self.answers_locked
    }

    /// Seal local answering: further edits are discarded.
    pub fn lock_answers(&mut self) {
        self.answers_locked = true;
    }

    /// Drop all attempt-scoped state when leaving the exam page.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
