//! Exam session runtime: countdown ticks, autosave, and forced submission.
//!
//! SYSTEM CONTEXT
//! ==============
//! One task per attempt drives the whole session: it starts the attempt,
//! wires the unload guard and DOM monitor, then ticks once a second to
//! refresh the countdown, dispatch due autosaves, and fire the forced
//! submission on expiry. The task owns the listener handles, so breaking
//! out of the loop (seal, teardown) releases every timer and listener in
//! one place. Submission runs through the engine's single-flight gate, so
//! expiry, the violation threshold, and the submit button can all trigger
//! it in the same tick and exactly one request goes out.
//!
//! ERROR HANDLING
//! ==============
//! Autosave failures only update the indicator; answers stay in memory and
//! the next due tick retries. Submission retries with backoff up to the
//! engine's attempt budget, then surfaces a persistent failure state —
//! retryable for transient trouble, hard-locked when the attempt id itself
//! was rejected. The local draft mirror is kept through every failure path
//! and only cleared on acceptance.

#[cfg(test)]
#[path = "exam_runtime_test.rs"]
mod exam_runtime_test;

#[cfg(any(test, feature = "hydrate"))]
use proctor::countdown::{Countdown, CountdownError};

#[cfg(feature = "hydrate")]
use std::sync::Arc;
#[cfg(feature = "hydrate")]
use std::sync::atomic::{AtomicBool, Ordering};

#[cfg(feature = "hydrate")]
use leptos::prelude::{RwSignal, Update, WithUntracked};
#[cfg(feature = "hydrate")]
use proctor::autosave::SUBMIT_BACKOFF;
#[cfg(feature = "hydrate")]
use proctor::session::{ObserveOutcome, ProctorSession, SealReason};

#[cfg(feature = "hydrate")]
use crate::net::api::{self, SubmitError};
#[cfg(feature = "hydrate")]
use crate::net::types::AnswerPayload;
#[cfg(any(test, feature = "hydrate"))]
use crate::net::types::ExamAttempt;
#[cfg(feature = "hydrate")]
use crate::state::exam::{AutosaveIndicator, ExamState, SubmitUiState};
#[cfg(feature = "hydrate")]
use crate::util::backup;
#[cfg(feature = "hydrate")]
use crate::util::clock;
#[cfg(feature = "hydrate")]
use crate::util::fullscreen;
#[cfg(feature = "hydrate")]
use crate::util::monitor_dom::DomMonitor;
#[cfg(feature = "hydrate")]
use crate::util::unload_guard::UnloadGuard;

/// Countdown refresh interval. Autosave and expiry are both evaluated on
/// this cadence, which bounds how late after the deadline the forced
/// submission can fire.
pub const TICK_INTERVAL_MS: u64 = 1_000;

/// Build the attempt countdown from server timing.
///
/// A start timestamp slightly ahead of the local clock is ordinary skew —
/// pacing falls back to the local clock instead of failing the attempt. A
/// non-positive duration is a malformed template and is surfaced.
#[cfg(any(test, feature = "hydrate"))]
fn build_countdown(attempt: &ExamAttempt, now_ms: i64) -> Result<Countdown, String> {
    let duration_ms = attempt.duration_secs.saturating_mul(1_000);
    match Countdown::new(attempt.started_at_ms, duration_ms, now_ms) {
        Ok(countdown) => Ok(countdown),
        Err(CountdownError::StartInFuture { .. }) => {
            Countdown::new(now_ms, duration_ms, now_ms).map_err(|e| e.to_string())
        }
        Err(err @ CountdownError::NonPositiveDuration(_)) => Err(err.to_string()),
    }
}

/// Start the attempt and drive it until it seals or the page goes away.
///
/// The caller registers `on_cleanup(move || alive.store(false, ..))` so a
/// route change tears the whole session down on the next tick.
#[cfg(feature = "hydrate")]
pub async fn run_exam_session(
    exam_id: String,
    exam: RwSignal<ExamState>,
    session: RwSignal<ProctorSession>,
    alive: Arc<AtomicBool>,
) {
    exam.update(|e| {
        e.reset();
        e.loading = true;
    });

    let attempt = match api::start_attempt(&exam_id).await {
        Ok(attempt) => attempt,
        Err(message) => {
            exam.update(|e| {
                e.loading = false;
                e.load_error = Some(message);
            });
            return;
        }
    };
    let attempt_id = attempt.attempt_id.clone();
    let config = attempt.proctoring;

    let now = clock::now_ms();
    let countdown = match build_countdown(&attempt, now) {
        Ok(countdown) => countdown,
        Err(message) => {
            exam.update(|e| {
                e.loading = false;
                e.load_error = Some(message);
            });
            return;
        }
    };

    let draft = backup::load_draft(&attempt_id);
    if draft.is_some() {
        leptos::logging::log!("restored a local answer draft for attempt {attempt_id}");
    }
    exam.update(|e| e.install_attempt(attempt, draft));
    session.update(|s| {
        s.begin(config, now);
    });

    if config.enable_fullscreen_mode && !fullscreen::request() {
        let denied_at = clock::now_ms();
        let mut outcome = ObserveOutcome::Ignored;
        session.update(|s| outcome = s.record_fullscreen_denied(denied_at));
        if outcome == ObserveOutcome::AutoSubmit {
            finalize_attempt(exam, session, SealReason::ViolationLimit);
            return;
        }
    }

    // Handles live on this task's stack: leaving the loop detaches them.
    let _monitor = DomMonitor::attach(&config, move |event| {
        let at = clock::now_ms();
        let mut outcome = ObserveOutcome::Ignored;
        session.update(|s| outcome = s.observe(event, at));
        if outcome == ObserveOutcome::AutoSubmit {
            finalize_attempt(exam, session, SealReason::ViolationLimit);
        }
    });
    let _guard = UnloadGuard::install(move || exam.with_untracked(ExamState::is_active));

    loop {
        gloo_timers::future::sleep(std::time::Duration::from_millis(TICK_INTERVAL_MS)).await;

        if !alive.load(Ordering::Relaxed) {
            let at = clock::now_ms();
            session.update(|s| {
                s.seal(SealReason::Abandoned, at);
            });
            break;
        }
        if !session.with_untracked(ProctorSession::is_monitoring) {
            // Sealed elsewhere (submit button or threshold); the submission
            // task carries on independently.
            break;
        }

        let at = clock::now_ms();
        exam.update(|e| e.remaining_ms = countdown.remaining_ms(at));

        if countdown.is_expired(at) {
            finalize_attempt(exam, session, SealReason::TimeExpired);
            break;
        }

        maybe_autosave(exam, &attempt_id, at);
    }

    if config.enable_fullscreen_mode {
        fullscreen::exit();
    }
}

/// Dispatch an autosave when one is due and none is in flight.
///
/// The snapshot is taken at dispatch time and mirrored locally before the
/// network call goes out.
#[cfg(feature = "hydrate")]
fn maybe_autosave(exam: RwSignal<ExamState>, attempt_id: &str, now_ms: i64) {
    let due = exam.with_untracked(|e| !e.answers_locked && e.cadence.due(now_ms));
    if !due {
        return;
    }

    let mut payload = AnswerPayload::default();
    exam.update(|e| {
        e.cadence.begin(now_ms);
        e.autosave = AutosaveIndicator::Saving;
        payload = e.payload();
    });
    backup::save_draft(attempt_id, &payload);

    let attempt_id = attempt_id.to_owned();
    leptos::task::spawn_local(async move {
        match api::autosave_answers(&attempt_id, &payload).await {
            Ok(()) => exam.update(|e| {
                e.cadence.succeed();
                e.autosave = AutosaveIndicator::Saved;
            }),
            Err(message) => {
                leptos::logging::warn!("autosave failed: {message}");
                exam.update(|e| {
                    e.cadence.fail();
                    e.autosave = AutosaveIndicator::Retrying {
                        failures: e.cadence.consecutive_failures(),
                    };
                });
            }
        }
    });
}

/// Seal the attempt and drive the forced-submission path.
///
/// Every trigger funnels here — the submit button, timer expiry, and the
/// violation threshold — and the engine's gate admits exactly one run.
#[cfg(feature = "hydrate")]
pub fn finalize_attempt(exam: RwSignal<ExamState>, session: RwSignal<ProctorSession>, reason: SealReason) {
    let now = clock::now_ms();
    session.update(|s| {
        s.seal(reason, now);
    });

    let mut admitted = false;
    let mut attempt_id = None;
    let mut payload = AnswerPayload::default();
    exam.update(|e| {
        e.lock_answers();
        admitted = e.gate.try_begin();
        if admitted {
            e.submit = SubmitUiState::InFlight;
            attempt_id = e.attempt.as_ref().map(|a| a.attempt_id.clone());
            payload = e.payload();
        }
    });
    if !admitted {
        return;
    }

    let Some(attempt_id) = attempt_id else {
        // No attempt identity to submit under; retrying cannot recover this.
        exam.update(|e| {
            e.gate.fail(0, false);
            e.submit = SubmitUiState::Failed {
                attempts: 0,
                retry_allowed: false,
                message: "the attempt id is missing; contact support".to_owned(),
            };
        });
        return;
    };

    backup::save_draft(&attempt_id, &payload);
    leptos::task::spawn_local(submit_with_retries(exam, attempt_id, payload));
}

/// Manual retry from the failure notice: re-enters the gate for one more
/// bounded retry run over the sealed answer snapshot.
#[cfg(feature = "hydrate")]
pub fn retry_submit(exam: RwSignal<ExamState>) {
    let mut admitted = false;
    let mut attempt_id = None;
    let mut payload = AnswerPayload::default();
    exam.update(|e| {
        admitted = e.gate.try_begin();
        if admitted {
            e.submit = SubmitUiState::InFlight;
            attempt_id = e.attempt.as_ref().map(|a| a.attempt_id.clone());
            payload = e.payload();
        }
    });
    if !admitted {
        return;
    }
    let Some(attempt_id) = attempt_id else {
        return;
    };
    leptos::task::spawn_local(submit_with_retries(exam, attempt_id, payload));
}

/// One submission run: send, back off on transient failures, settle the
/// gate when done.
#[cfg(feature = "hydrate")]
async fn submit_with_retries(exam: RwSignal<ExamState>, attempt_id: String, payload: AnswerPayload) {
    let mut failures: u32 = 0;
    loop {
        match api::submit_attempt(&attempt_id, &payload).await {
            Ok(result) => {
                backup::clear_draft(&attempt_id);
                exam.update(|e| {
                    e.gate.complete();
                    e.submit = SubmitUiState::Submitted(result);
                });
                return;
            }
            Err(SubmitError::Terminal(message)) => {
                leptos::logging::warn!("submission rejected: {message}");
                exam.update(|e| {
                    e.gate.fail(failures + 1, false);
                    e.submit = SubmitUiState::Failed {
                        attempts: failures + 1,
                        retry_allowed: false,
                        message,
                    };
                });
                return;
            }
            Err(SubmitError::Transient(message)) => {
                failures += 1;
                match SUBMIT_BACKOFF.delay_ms(failures) {
                    Some(delay_ms) => {
                        leptos::logging::warn!(
                            "submission attempt {failures} failed: {message}; retrying in {delay_ms} ms"
                        );
                        gloo_timers::future::sleep(std::time::Duration::from_millis(u64::from(delay_ms))).await;
                    }
                    None => {
                        leptos::logging::warn!("submission failed after {failures} attempts: {message}");
                        exam.update(|e| {
                            e.gate.fail(failures, true);
                            e.submit = SubmitUiState::Failed {
                                attempts: failures,
                                retry_allowed: true,
                                message,
                            };
                        });
                        return;
                    }
                }
            }
        }
    }
}
