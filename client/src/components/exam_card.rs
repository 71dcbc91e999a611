//! Reusable card component for exam list items on the dashboard.
//!
//! DESIGN
//! ======
//! Keeps exam list presentation consistent while the start decision (and
//! its confirmation dialog) stays with the dashboard page.

use leptos::prelude::*;
use proctor::countdown::format_clock;

use crate::net::types::ExamSummary;

/// A card representing one available exam.
#[component]
pub fn ExamCard(exam: ExamSummary, on_start: Callback<ExamSummary>) -> impl IntoView {
    let duration = format_clock(exam.duration_secs.saturating_mul(1_000));
    let title = exam.title.clone();
    let description = exam.description.clone().unwrap_or_default();
    let meta = format!("{} questions · {duration}", exam.question_count);
    let proctored = exam.proctored;

    view! {
        <div class="exam-card" class:exam-card--proctored=proctored>
            <span class="exam-card__title">{title}</span>
            <span class="exam-card__description">{description}</span>
            <span class="exam-card__meta">{meta}</span>
            <Show when=move || proctored>
                <span class="exam-card__proctored" title="This exam is proctored">
                    "Proctored"
                </span>
            </Show>
            <button
                class="btn btn--primary exam-card__start"
                on:click=move |_| on_start.run(exam.clone())
            >
                "Start exam"
            </button>
        </div>
    }
}
