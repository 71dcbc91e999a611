//! Exam-taking page: the hosting route for one attempt.
//!
//! SYSTEM CONTEXT
//! ==============
//! This page owns everything attempt-scoped: the proctoring session signal,
//! the runtime task (countdown, autosave, forced submission), and — through
//! that task — the unload guard and DOM monitor handles. Route changes flip
//! the `alive` flag in `on_cleanup`, and the runtime tears the whole session
//! down on its next tick, so no timer or listener survives navigation.

#[cfg(test)]
#[path = "exam_page_test.rs"]
mod exam_page_test;

use std::sync::Arc;
use std::sync::atomic::AtomicBool;
#[cfg(feature = "hydrate")]
use std::sync::atomic::Ordering;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_params_map};
use proctor::session::ProctorSession;
#[cfg(feature = "hydrate")]
use proctor::session::SealReason;

use crate::components::autosave_chip::AutosaveChip;
use crate::components::countdown_badge::CountdownBadge;
use crate::components::question_card::QuestionCard;
use crate::components::result_panel::ResultPanel;
use crate::components::submit_notice::SubmitNotice;
use crate::components::violation_banner::ViolationBanner;
use crate::state::auth::AuthState;
use crate::state::exam::{ExamState, SubmitUiState};

/// Progress line for the exam header.
fn progress_line(answered: usize, total: usize) -> String {
    format!("{answered} of {total} answered")
}

/// Exam page — starts the attempt for the `:id` route param and renders the
/// question sheet under the integrity chrome.
#[component]
pub fn ExamPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let exam = expect_context::<RwSignal<ExamState>>();
    let params = use_params_map();
    let navigate = use_navigate();

    // One proctoring session per attempt, scoped to this page.
    let session = RwSignal::new(ProctorSession::default());
    provide_context(session);

    // Redirect to login once the auth bootstrap settles with nobody home.
    let navigate_login = navigate.clone();
    Effect::new(move || {
        if auth.get().needs_login() {
            navigate_login("/login", NavigateOptions::default());
        }
    });

    // The runtime task polls this flag every tick; flipping it off from
    // on_cleanup releases the countdown loop, listeners, and guard.
    let alive = Arc::new(AtomicBool::new(true));

    #[cfg(feature = "hydrate")]
    {
        let started = RwSignal::new(false);
        let alive_task = alive.clone();
        Effect::new(move || {
            if started.get() || !auth.get().is_signed_in() {
                return;
            }
            let exam_id = params.with(|p| p.get("id").unwrap_or_default());
            if exam_id.is_empty() {
                return;
            }
            started.set(true);
            leptos::task::spawn_local(crate::util::exam_runtime::run_exam_session(
                exam_id,
                exam,
                session,
                alive_task.clone(),
            ));
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = params;
    }

    {
        let alive = alive.clone();
        on_cleanup(move || {
            #[cfg(feature = "hydrate")]
            alive.store(false, Ordering::Relaxed);
            #[cfg(not(feature = "hydrate"))]
            let _ = &alive;
            exam.update(ExamState::reset);
        });
    }

    let on_submit_click = move |_| {
        #[cfg(feature = "hydrate")]
        crate::util::exam_runtime::finalize_attempt(exam, session, SealReason::Submitted);
    };

    let submitted = move || matches!(exam.get().submit, SubmitUiState::Submitted(_));
    let title = move || exam.get().attempt.map(|a| a.title).unwrap_or_default();
    let progress = move || {
        let state = exam.get();
        let total = state.attempt.as_ref().map_or(0, |a| a.questions.len());
        progress_line(state.answered_count(), total)
    };

    view! {
        <div class="exam-page">
            <Show
                when=move || !exam.get().loading
                fallback=move || view! { <p class="exam-page__loading">"Preparing your attempt..."</p> }
            >
                <Show
                    when=move || exam.get().load_error.is_none()
                    fallback=move || {
                        view! {
                            <div class="exam-page__error">
                                <p>{move || exam.get().load_error.unwrap_or_default()}</p>
                                <a class="btn" href="/">
                                    "Back to exams"
                                </a>
                            </div>
                        }
                    }
                >
                    <header class="exam-page__header toolbar">
                        <span class="toolbar__title">{title}</span>
                        <span class="toolbar__spacer"></span>
                        <AutosaveChip/>
                        <span class="exam-page__progress">{progress}</span>
                        <CountdownBadge/>
                    </header>

                    <ViolationBanner/>
                    <SubmitNotice/>
                    <ResultPanel/>

                    <Show when=move || !submitted()>
                        <main class="exam-page__sheet">
                            {move || {
                                let state = exam.get();
                                let questions = state.attempt.map(|a| a.questions).unwrap_or_default();
                                let total = questions.len();
                                questions
                                    .into_iter()
                                    .enumerate()
                                    .map(|(index, question)| {
                                        view! { <QuestionCard question=question index=index total=total/> }
                                    })
                                    .collect::<Vec<_>>()
                            }}
                        </main>

                        <footer class="exam-page__footer">
                            <button
                                class="btn btn--primary exam-page__submit"
                                on:click=on_submit_click
                                disabled=move || !exam.get().is_active()
                            >
                                "Submit exam"
                            </button>
                        </footer>
                    </Show>
                </Show>
            </Show>
        </div>
    }
}
