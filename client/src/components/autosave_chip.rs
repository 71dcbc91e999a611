//! Non-blocking autosave indicator for the exam header.
//!
//! Failures are deliberately quiet: the chip changes color and wording, the
//! student keeps typing, and the runtime retries on its own.

#[cfg(test)]
#[path = "autosave_chip_test.rs"]
mod autosave_chip_test;

use leptos::prelude::*;

use crate::state::exam::{AutosaveIndicator, ExamState};

fn chip_label(indicator: AutosaveIndicator) -> String {
    match indicator {
        AutosaveIndicator::Idle => "Not saved yet".to_owned(),
        AutosaveIndicator::Saving => "Saving…".to_owned(),
        AutosaveIndicator::Saved => "All changes saved".to_owned(),
        AutosaveIndicator::Retrying { failures } => format!("Offline — retrying (×{failures})"),
    }
}

fn is_retrying(indicator: AutosaveIndicator) -> bool {
    matches!(indicator, AutosaveIndicator::Retrying { .. })
}

/// Autosave status chip.
#[component]
pub fn AutosaveChip() -> impl IntoView {
    let exam = expect_context::<RwSignal<ExamState>>();
    let indicator = move || exam.get().autosave;

    view! {
        <span
            class="autosave-chip"
            class:autosave-chip--retrying=move || is_retrying(indicator())
            class:autosave-chip--saved=move || indicator() == AutosaveIndicator::Saved
        >
            {move || chip_label(indicator())}
        </span>
    }
}
