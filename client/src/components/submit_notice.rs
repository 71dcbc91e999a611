//! Submission progress and failure notices.
//!
//! DESIGN
//! ======
//! The two terminal failure states are rendered explicitly: a transient
//! exhaustion offers a manual retry (the gate admits one more bounded run),
//! while a rejected attempt id hard-locks the session and points the
//! student at support. Both remind the student that answers are mirrored
//! locally, because the failure must never read as silent data loss.

use leptos::prelude::*;

use crate::state::exam::{ExamState, SubmitUiState};

/// Submission status panel; renders nothing before the attempt is sealed
/// and nothing once the result panel takes over.
#[component]
pub fn SubmitNotice() -> impl IntoView {
    let exam = expect_context::<RwSignal<ExamState>>();

    let in_flight = move || exam.get().submit == SubmitUiState::InFlight;
    let failure = move || match exam.get().submit {
        SubmitUiState::Failed { attempts, retry_allowed, message } => Some((attempts, retry_allowed, message)),
        _ => None,
    };

    let on_retry = move |_| {
        #[cfg(feature = "hydrate")]
        crate::util::exam_runtime::retry_submit(exam);
    };

    view! {
        <Show when=in_flight>
            <div class="submit-notice submit-notice--pending">
                <p>"Submitting your answers…"</p>
            </div>
        </Show>
        <Show when=move || failure().is_some()>
            {move || {
                let (attempts, retry_allowed, message) = failure().unwrap_or((0, false, String::new()));
                if retry_allowed {
                    view! {
                        <div class="submit-notice submit-notice--failed">
                            <p class="submit-notice__headline">
                                {format!("Submission failed after {attempts} attempts.")}
                            </p>
                            <p class="submit-notice__detail">{message}</p>
                            <p class="submit-notice__reassure">
                                "Your answers are saved on this device and nothing has been lost."
                            </p>
                            <button class="btn btn--primary" on:click=on_retry>
                                "Try again"
                            </button>
                        </div>
                    }
                    .into_any()
                } else {
                    view! {
                        <div class="submit-notice submit-notice--locked">
                            <p class="submit-notice__headline">"This attempt could not be submitted."</p>
                            <p class="submit-notice__detail">{message}</p>
                            <p class="submit-notice__reassure">
                                "Your answers are saved on this device. Please contact support with your attempt id."
                            </p>
                        </div>
                    }
                    .into_any()
                }
            }}
        </Show>
    }
}
