//! Remaining-time badge for the exam header.

use leptos::prelude::*;
use proctor::countdown::format_clock;

use crate::state::exam::ExamState;

/// Threshold under which the badge switches to its warning style.
const LOW_TIME_MS: i64 = 60_000;

/// Countdown display, refreshed by the runtime's tick loop.
#[component]
pub fn CountdownBadge() -> impl IntoView {
    let exam = expect_context::<RwSignal<ExamState>>();
    let remaining = move || exam.get().remaining_ms;

    view! {
        <span
            class="countdown-badge"
            class:countdown-badge--low=move || remaining() < LOW_TIME_MS
            title="Time remaining"
        >
            {move || format_clock(remaining())}
        </span>
    }
}
