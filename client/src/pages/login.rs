//! Login page using email + access-code authentication.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;

const ACCESS_CODE_LEN: usize = 6;

/// Uppercase and trim raw access-code input as the student types.
fn normalize_code_input(raw: &str) -> String {
    raw.trim().to_ascii_uppercase()
}

/// Validate the request-code form. Returns the trimmed email.
fn validate_request_input(email: &str) -> Result<String, &'static str> {
    let email = email.trim();
    if email.is_empty() {
        return Err("Enter your school email first.");
    }
    Ok(email.to_owned())
}

/// Validate the verify-code form. Returns trimmed email and code.
fn validate_verify_input(email: &str, code: &str) -> Result<(String, String), &'static str> {
    let email = email.trim();
    let code = code.trim();
    if email.is_empty() || code.len() != ACCESS_CODE_LEN {
        return Err("Enter both email and the 6-character code.");
    }
    Ok((email.to_owned(), code.to_owned()))
}

/// Login page — request a code by email, then verify it.
#[component]
pub fn LoginPage() -> impl IntoView {
    let email = RwSignal::new(String::new());
    let code = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let code_requested = RwSignal::new(false);

    let on_request_code = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let email_value = match validate_request_input(&email.get()) {
            Ok(value) => value,
            Err(message) => {
                info.set(message.to_owned());
                return;
            }
        };
        busy.set(true);
        info.set("Requesting code...".to_owned());

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::request_email_login_code(&email_value).await {
                Ok(()) => {
                    code_requested.set(true);
                    info.set("Check your email for the access code.".to_owned());
                }
                Err(e) => info.set(format!("Code request failed: {e}")),
            }
            busy.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = email_value;
        }
    };

    let on_verify_code = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let (email_value, code_value) = match validate_verify_input(&email.get(), &code.get()) {
            Ok(values) => values,
            Err(message) => {
                info.set(message.to_owned());
                return;
            }
        };
        busy.set(true);
        info.set("Verifying code...".to_owned());

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::verify_email_login_code(&email_value, &code_value).await {
                Ok(()) => {
                    if let Some(window) = web_sys::window() {
                        if window.location().set_href("/").is_err() {
                            info.set("Signed in. Open the dashboard to continue.".to_owned());
                        }
                    }
                }
                Err(e) => {
                    info.set(format!("Verification failed: {e}"));
                    busy.set(false);
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (email_value, code_value);
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Studyhall"</h1>
                <p class="login-card__subtitle">"Sign in with an email access code"</p>
                <form class="login-form" on:submit=on_request_code>
                    <input
                        class="login-input"
                        type="email"
                        placeholder="you@school.example"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        "Send Access Code"
                    </button>
                </form>
                <Show when=move || code_requested.get()>
                    <form class="login-form" on:submit=on_verify_code>
                        <input
                            class="login-input login-input--code"
                            type="text"
                            maxlength="6"
                            placeholder="ABC123"
                            prop:value=move || code.get()
                            on:input=move |ev| code.set(normalize_code_input(&event_target_value(&ev)))
                        />
                        <button class="login-button" type="submit" disabled=move || busy.get()>
                            "Sign In"
                        </button>
                    </form>
                </Show>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>
            </div>
        </div>
    }
}
