//! Final result display after a successful submission.
//!
//! Pure renderer over the server-computed [`SubmissionResult`]; nothing in
//! here recomputes scoring.

#[cfg(test)]
#[path = "result_panel_test.rs"]
mod result_panel_test;

use leptos::prelude::*;
use proctor::session::ProctorSession;

use crate::state::exam::{ExamState, SubmitUiState};

fn score_line(score: f64, max_score: f64, percent: f64) -> String {
    format!("{score:.1} / {max_score:.1} ({percent:.0}%)")
}

/// Result panel; renders only once the submission has been accepted.
#[component]
pub fn ResultPanel() -> impl IntoView {
    let exam = expect_context::<RwSignal<ExamState>>();
    let session = expect_context::<RwSignal<ProctorSession>>();

    let result = move || match exam.get().submit {
        SubmitUiState::Submitted(result) => Some(result),
        _ => None,
    };

    view! {
        <Show when=move || result().is_some()>
            {move || {
                let result = result();
                let Some(result) = result else {
                    return view! { <div class="result-panel"></div> }.into_any();
                };
                let violations = session.get().total_violations();
                view! {
                    <div class="result-panel">
                        <h2>"Submitted"</h2>
                        <p class="result-panel__score">
                            {score_line(result.score, result.max_score, result.percent())}
                        </p>
                        <p class="result-panel__breakdown-summary">
                            {format!("{} of {} questions correct", result.correct_count(), result.breakdown.len())}
                        </p>
                        <Show when=move || { violations > 0 }>
                            <p class="result-panel__violations">
                                {format!("{violations} integrity events were recorded and sent with this attempt.")}
                            </p>
                        </Show>
                        <ul class="result-panel__breakdown">
                            {result
                                .breakdown
                                .iter()
                                .enumerate()
                                .map(|(i, row)| {
                                    let mark = if row.correct { "✓" } else { "✗" };
                                    view! {
                                        <li class="result-panel__row" class:result-panel__row--correct=row.correct>
                                            {format!("Q{} {mark} {:.1} pts", i + 1, row.points_awarded)}
                                        </li>
                                    }
                                })
                                .collect::<Vec<_>>()}
                        </ul>
                        <a class="btn" href="/">
                            "Back to exams"
                        </a>
                    </div>
                }
                .into_any()
            }}
        </Show>
    }
}
