//! Single-flight submission gate.
//!
//! Expiry and the strict-mode violation threshold can both decide to force
//! submission in the same tick. Every trigger — including the user's own
//! submit button — must pass through [`SubmitGate::try_begin`], which admits
//! exactly one run at a time and refuses re-entry after completion.

#[cfg(test)]
#[path = "submit_test.rs"]
mod submit_test;

/// Submission lifecycle for one attempt.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmitState {
    /// No submission has started.
    #[default]
    Idle,
    /// A submission run is in flight, possibly mid-retry.
    InFlight,
    /// The server accepted the submission.
    Completed,
    /// A run ended without acceptance. `retry_allowed` distinguishes a
    /// transient exhaustion (manual retry offered) from a terminal rejection
    /// (session hard-locked).
    Failed { attempts: u32, retry_allowed: bool },
}

/// Guard ensuring the submission path runs at most once concurrently.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SubmitGate {
    state: SubmitState,
}

impl SubmitGate {
    /// Try to start a submission run.
    ///
    /// Returns `true` from `Idle`, and from a failed run that still allows
    /// retries. Returns `false` while a run is in flight, after completion,
    /// and after a terminal failure — duplicate triggers in the same tick
    /// land here and are dropped.
    pub fn try_begin(&mut self) -> bool {
        match self.state {
            SubmitState::Idle | SubmitState::Failed { retry_allowed: true, .. } => {
                self.state = SubmitState::InFlight;
                true
            }
            SubmitState::InFlight | SubmitState::Completed | SubmitState::Failed { retry_allowed: false, .. } => false,
        }
    }

    /// Record server acceptance of the in-flight run.
    pub fn complete(&mut self) {
        if self.state == SubmitState::InFlight {
            self.state = SubmitState::Completed;
        }
    }

    /// Record the in-flight run ending without acceptance.
    pub fn fail(&mut self, attempts: u32, retry_allowed: bool) {
        if self.state == SubmitState::InFlight {
            self.state = SubmitState::Failed { attempts, retry_allowed };
        }
    }

    #[must_use]
    pub fn state(&self) -> SubmitState {
        self.state
    }

    #[must_use]
    pub fn is_completed(&self) -> bool {
        self.state == SubmitState::Completed
    }

    /// True once the gate can never admit another run.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        matches!(
            self.state,
            SubmitState::Completed | SubmitState::Failed { retry_allowed: false, .. }
        )
    }

    /// True when no further automatic action is pending: the run either
    /// completed or failed (in either failure mode).
    #[must_use]
    pub fn is_settled(&self) -> bool {
        matches!(self.state, SubmitState::Completed | SubmitState::Failed { .. })
    }
}
