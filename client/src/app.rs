//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::{dashboard::DashboardPage, exam::ExamPage, login::LoginPage};
use crate::state::{auth::AuthState, exam::ExamState, exams::ExamsState, ui::UiState};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides all shared state contexts, bootstraps the signed-in user, and
/// sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    // Provide reactive state contexts for all child components.
    let auth = RwSignal::new(AuthState::default());
    let exams = RwSignal::new(ExamsState::default());
    let exam = RwSignal::new(ExamState::default());
    let ui = RwSignal::new(UiState::default());

    provide_context(auth);
    provide_context(exams);
    provide_context(exam);
    provide_context(ui);

    // Apply the stored theme before anything renders.
    #[cfg(feature = "hydrate")]
    {
        let dark = crate::util::theme::read_preference();
        crate::util::theme::apply(dark);
        ui.update(|u| u.dark_mode = dark);
    }

    // Resolve the signed-in user once per app load.
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let user = crate::net::api::fetch_current_user().await;
        auth.update(|a| {
            a.user = user;
            a.loading = false;
        });
    });
    #[cfg(not(feature = "hydrate"))]
    {
        // SSR renders the loading shell; hydration resolves the user.
    }

    view! {
        <Stylesheet id="leptos" href="/pkg/studyhall.css"/>
        <Title text="Studyhall"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("") view=DashboardPage/>
                <Route path=(StaticSegment("exam"), ParamSegment("id")) view=ExamPage/>
            </Routes>
        </Router>
    }
}
