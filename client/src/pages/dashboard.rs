//! Dashboard page listing available exams.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the authenticated landing route. It fetches the exam inventory
//! over REST on mount and coordinates the start-exam confirmation before
//! navigating into the attempt.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::exam_card::ExamCard;
use crate::net::types::ExamSummary;
use crate::state::auth::AuthState;
use crate::state::exams::ExamsState;
use crate::state::ui::UiState;

/// Detail line for the start-exam confirmation dialog.
fn start_dialog_detail(exam: &ExamSummary) -> String {
    let clock = proctor::countdown::format_clock(exam.duration_secs.saturating_mul(1_000));
    format!("{} questions · {clock} once you begin", exam.question_count)
}

/// Route for one exam's attempt page.
fn exam_route(exam_id: &str) -> String {
    format!("/exam/{exam_id}")
}

/// Dashboard page — exam grid plus account chrome.
/// Redirects to `/login` if the user is not authenticated.
#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let exams = expect_context::<RwSignal<ExamsState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let navigate = use_navigate();

    // Redirect to login once the auth bootstrap settles with nobody home.
    let navigate_login = navigate.clone();
    Effect::new(move || {
        if auth.get().needs_login() {
            navigate_login("/login", NavigateOptions::default());
        }
    });

    // Fetch the exam inventory once the user is known.
    let requested_list = RwSignal::new(false);
    Effect::new(move || {
        if requested_list.get() || !auth.get().is_signed_in() {
            return;
        }
        requested_list.set(true);
        exams.update(|s| s.loading = true);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_exams().await {
                Ok(items) => exams.update(|s| s.set_items(items)),
                Err(message) => {
                    leptos::logging::warn!("exam list fetch failed: {message}");
                    exams.update(|s| s.set_error(message));
                }
            }
        });
    });

    // Start-exam confirmation dialog state.
    let pending_start = RwSignal::new(None::<ExamSummary>);
    let on_start_request = Callback::new(move |exam: ExamSummary| pending_start.set(Some(exam)));
    let on_start_cancel = Callback::new(move |()| pending_start.set(None));

    let self_identity = move || {
        let state = auth.get();
        let role = state.user.as_ref().map(|u| u.role.label()).unwrap_or("member");
        (state.display_name(), role)
    };

    let on_logout = move |_| {
        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                crate::net::api::logout().await;
                auth.update(|a| a.user = None);
                if let Some(w) = web_sys::window() {
                    if w.location().set_href("/login").is_err() {
                        leptos::logging::warn!("logout redirect failed");
                    }
                }
            });
        }
    };

    view! {
        <Show
            when=move || auth.get().is_signed_in()
            fallback=move || {
                view! {
                    <div class="dashboard-page">
                        <p>{move || if auth.get().loading { "Loading..." } else { "Redirecting to login..." }}</p>
                    </div>
                }
            }
        >
            <div class="dashboard-page">
                <header class="dashboard-page__header toolbar">
                    <span class="toolbar__brand">"Studyhall"</span>
                    <span class="toolbar__divider" aria-hidden="true"></span>
                    <span class="toolbar__title">"Exams"</span>

                    <span class="toolbar__spacer"></span>

                    <button
                        class="btn toolbar__dark-toggle"
                        on:click=move |_| {
                            let current = ui.get().dark_mode;
                            let next = crate::util::theme::toggle(current);
                            ui.update(|u| u.dark_mode = next);
                        }
                        title="Toggle dark mode"
                    >
                        {move || if ui.get().dark_mode { "☀" } else { "☾" }}
                    </button>

                    <span class="toolbar__self">
                        {move || self_identity().0}
                        " ("
                        <span class="toolbar__self-role">{move || self_identity().1}</span>
                        ")"
                    </span>

                    <button class="btn toolbar__logout" on:click=on_logout title="Logout">
                        "Logout"
                    </button>
                </header>

                <div class="dashboard-page__grid">
                    <Show when=move || exams.get().error.is_some()>
                        <p class="dashboard-page__error">
                            {move || exams.get().error.unwrap_or_default()}
                        </p>
                    </Show>
                    <Show
                        when=move || !exams.get().loading
                        fallback=move || view! { <p>"Loading exams..."</p> }
                    >
                        <Show
                            when=move || !exams.get().items.is_empty()
                            fallback=move || view! { <p class="dashboard-page__empty">"No exams are open for you right now."</p> }
                        >
                            <div class="dashboard-page__cards">
                                {move || {
                                    exams
                                        .get()
                                        .items
                                        .into_iter()
                                        .map(|exam| {
                                            view! { <ExamCard exam=exam on_start=on_start_request/> }
                                        })
                                        .collect::<Vec<_>>()
                                }}
                            </div>
                        </Show>
                    </Show>
                </div>

                <Show when=move || pending_start.get().is_some()>
                    <StartExamDialog pending=pending_start on_cancel=on_start_cancel/>
                </Show>
            </div>
        </Show>
    }
}

/// Confirmation dialog shown before entering an attempt: starting an exam
/// begins the countdown immediately, so it should not happen on a stray
/// click.
#[component]
fn StartExamDialog(pending: RwSignal<Option<ExamSummary>>, on_cancel: Callback<()>) -> impl IntoView {
    let navigate = use_navigate();

    let title = move || pending.get().map(|e| e.title).unwrap_or_default();
    let detail = move || pending.get().map(|e| start_dialog_detail(&e)).unwrap_or_default();
    let proctored = move || pending.get().is_some_and(|e| e.proctored);

    let submit = move |_| {
        let Some(exam) = pending.get_untracked() else {
            return;
        };
        pending.set(None);
        navigate(&exam_route(&exam.id), NavigateOptions::default());
    };

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>"Start Exam"</h2>
                <p class="dialog__title">{title}</p>
                <p class="dialog__detail">{detail}</p>
                <Show when=proctored>
                    <p class="dialog__warning">
                        "This exam is proctored: leaving the tab, exiting fullscreen, or copying content is recorded."
                    </p>
                </Show>
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_cancel.run(())>
                        "Cancel"
                    </button>
                    <button class="btn btn--primary" on:click=submit>
                        "Begin"
                    </button>
                </div>
            </div>
        </div>
    }
}
