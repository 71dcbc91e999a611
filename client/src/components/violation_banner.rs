//! Violation banner shown while integrity events accumulate.
//!
//! DESIGN
//! ======
//! Reads the per-attempt proctoring session from context and renders the
//! derived counts; it never mutates the ledger. In strict mode the summary
//! also shows how close the attempt is to the auto-submit threshold.

#[cfg(test)]
#[path = "violation_banner_test.rs"]
mod violation_banner_test;

use leptos::prelude::*;
use proctor::ledger::ViolationRecord;
use proctor::session::ProctorSession;

use crate::state::ui::UiState;

fn summary_line(total: usize, strict: bool, max_violations: u32) -> String {
    let events = if total == 1 { "integrity event" } else { "integrity events" };
    if strict {
        format!("{total} {events} recorded ({total} of {max_violations} allowed)")
    } else {
        format!("{total} {events} recorded")
    }
}

fn detail_row(record: &ViolationRecord) -> String {
    match record.duration_ms {
        Some(duration_ms) => {
            format!("{} — away {:.1}s", record.kind.label(), duration_ms as f64 / 1000.0)
        }
        None => record.kind.label().to_owned(),
    }
}

/// Banner summarizing recorded violations, with expandable detail rows.
#[component]
pub fn ViolationBanner() -> impl IntoView {
    let session = expect_context::<RwSignal<ProctorSession>>();
    let ui = expect_context::<RwSignal<UiState>>();

    let total = move || session.get().total_violations();
    let strict = move || session.get().config().strict_fullscreen;

    view! {
        <Show when=move || { total() > 0 }>
            <div class="violation-banner" class:violation-banner--strict=strict>
                <span class="violation-banner__summary">
                    {move || {
                        let s = session.get();
                        summary_line(s.total_violations(), s.config().strict_fullscreen, s.config().max_violations)
                    }}
                </span>
                <button
                    class="violation-banner__toggle"
                    on:click=move |_| ui.update(|u| u.violations_expanded = !u.violations_expanded)
                >
                    {move || if ui.get().violations_expanded { "Hide details" } else { "Details" }}
                </button>
                <Show when=move || ui.get().violations_expanded>
                    <ul class="violation-banner__detail">
                        {move || {
                            let s = session.get();
                            s.records()
                                .iter()
                                .map(|record| view! { <li>{detail_row(record)}</li> })
                                .collect::<Vec<_>>()
                        }}
                    </ul>
                </Show>
            </div>
        </Show>
    }
}
