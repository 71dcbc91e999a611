//! REST API helpers for communicating with the backend collaborator.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`, each bounded by a
//! client-side timeout. Server-side (SSR): stubs returning `None`/error
//! since these endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Option`/`Result` outputs instead of panics. Autosave errors
//! are always retryable (the caller keeps the answers in memory and tries
//! again on the next tick). Submission distinguishes transient failures —
//! which consume a backoff attempt — from terminal rejections, which mean
//! the attempt id is no longer valid and retrying cannot help.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{AnswerPayload, ExamAttempt, ExamSummary, SubmissionResult, User};

/// Client-side bound on any single request.
pub const REQUEST_TIMEOUT_MS: u32 = 10_000;

/// A submit failure, split by whether retrying can possibly help.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitError {
    /// Network trouble or a server-side hiccup; worth a backoff retry.
    Transient(String),
    /// The attempt id was rejected; no retry will change the outcome.
    Terminal(String),
}

impl SubmitError {
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::Transient(msg) | Self::Terminal(msg) => msg,
        }
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn attempt_start_endpoint(exam_id: &str) -> String {
    format!("/api/exams/{exam_id}/attempts")
}

#[cfg(any(test, feature = "hydrate"))]
fn attempt_answers_endpoint(attempt_id: &str) -> String {
    format!("/api/attempts/{attempt_id}/answers")
}

#[cfg(any(test, feature = "hydrate"))]
fn attempt_submit_endpoint(attempt_id: &str) -> String {
    format!("/api/attempts/{attempt_id}/submit")
}

#[cfg(any(test, feature = "hydrate"))]
fn request_timed_out_message() -> String {
    format!("request timed out after {REQUEST_TIMEOUT_MS} ms")
}

#[cfg(any(test, feature = "hydrate"))]
fn status_failed_message(what: &str, status: u16) -> String {
    format!("{what} failed: {status}")
}

/// Statuses that mean the attempt itself is no longer valid at submit time,
/// as opposed to the server being momentarily unhappy.
#[cfg(any(test, feature = "hydrate"))]
fn is_terminal_submit_status(status: u16) -> bool {
    matches!(status, 401 | 403 | 404 | 409 | 410 | 422)
}

/// Race `fut` against the request timeout.
#[cfg(feature = "hydrate")]
async fn bounded<T>(
    fut: impl std::future::Future<Output = Result<T, String>>,
) -> Result<T, String> {
    use futures::future::{Either, select};

    let timeout = Box::pin(gloo_timers::future::TimeoutFuture::new(REQUEST_TIMEOUT_MS));
    match select(Box::pin(fut), timeout).await {
        Either::Left((result, _)) => result,
        Either::Right(((), _)) => Err(request_timed_out_message()),
    }
}

/// Fetch the currently authenticated user from `/api/auth/me`.
/// Returns `None` if not authenticated or on the server.
pub async fn fetch_current_user() -> Option<User> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get("/api/auth/me")
            .send()
            .await
            .ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<User>().await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Log out the current user by calling `POST /api/auth/logout`.
pub async fn logout() {
    #[cfg(feature = "hydrate")]
    {
        if gloo_net::http::Request::post("/api/auth/logout").send().await.is_err() {
            leptos::logging::warn!("logout request failed; clearing local session anyway");
        }
    }
}

/// Request an email login code via `POST /api/auth/email/request-code`.
///
/// # Errors
///
/// Returns an error string if the request fails or the server responds with
/// a non-OK status.
pub async fn request_email_login_code(email: &str) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({ "email": email });
        let resp = gloo_net::http::Request::post("/api/auth/email/request-code")
            .json(&payload)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(status_failed_message("code request", resp.status()));
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = email;
        Err("not available on server".to_owned())
    }
}

/// Verify an email login code via `POST /api/auth/email/verify-code`.
///
/// # Errors
///
/// Returns an error string if the request fails, the server responds with a
/// non-OK status, or the code is rejected.
pub async fn verify_email_login_code(email: &str, code: &str) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        #[derive(serde::Deserialize)]
        struct VerifyResponse {
            ok: bool,
        }

        let payload = serde_json::json!({ "email": email, "code": code });
        let resp = gloo_net::http::Request::post("/api/auth/email/verify-code")
            .json(&payload)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(status_failed_message("code verification", resp.status()));
        }
        let body: VerifyResponse = resp.json().await.map_err(|e| e.to_string())?;
        if !body.ok {
            return Err("code verification failed".to_owned());
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (email, code);
        Err("not available on server".to_owned())
    }
}

/// Fetch the exams available to the signed-in student from `/api/exams`.
///
/// # Errors
///
/// Returns an error string on network failure or a non-OK status.
pub async fn fetch_exams() -> Result<Vec<ExamSummary>, String> {
    #[cfg(feature = "hydrate")]
    {
        #[derive(serde::Deserialize)]
        struct ExamListResponse {
            exams: Vec<ExamSummary>,
        }

        bounded(async {
            let resp = gloo_net::http::Request::get("/api/exams")
                .send()
                .await
                .map_err(|e| e.to_string())?;
            if !resp.ok() {
                return Err(status_failed_message("exam list", resp.status()));
            }
            let body: ExamListResponse = resp.json().await.map_err(|e| e.to_string())?;
            Ok(body.exams)
        })
        .await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err("not available on server".to_owned())
    }
}

/// Start a test via `POST /api/exams/{exam_id}/attempts`.
///
/// The server creates (or resumes) the attempt and returns its identity,
/// question set, start timestamp, and proctoring rules.
///
/// # Errors
///
/// Returns an error string on network failure or a non-OK status.
pub async fn start_attempt(exam_id: &str) -> Result<ExamAttempt, String> {
    #[cfg(feature = "hydrate")]
    {
        let url = attempt_start_endpoint(exam_id);
        bounded(async move {
            let resp = gloo_net::http::Request::post(&url)
                .send()
                .await
                .map_err(|e| e.to_string())?;
            if !resp.ok() {
                return Err(status_failed_message("starting the exam", resp.status()));
            }
            resp.json::<ExamAttempt>().await.map_err(|e| e.to_string())
        })
        .await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = exam_id;
        Err("not available on server".to_owned())
    }
}

/// Persist the in-progress answer snapshot via
/// `PUT /api/attempts/{attempt_id}/answers`.
///
/// # Errors
///
/// Any failure (including timeout) is returned as a retryable error string;
/// the caller keeps the answers in memory and retries on the next tick.
pub async fn autosave_answers(attempt_id: &str, payload: &AnswerPayload) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let url = attempt_answers_endpoint(attempt_id);
        let body = serde_json::to_value(payload).map_err(|e| e.to_string())?;
        bounded(async move {
            let resp = gloo_net::http::Request::put(&url)
                .json(&body)
                .map_err(|e| e.to_string())?
                .send()
                .await
                .map_err(|e| e.to_string())?;
            if !resp.ok() {
                return Err(status_failed_message("autosave", resp.status()));
            }
            Ok(())
        })
        .await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (attempt_id, payload);
        Err("not available on server".to_owned())
    }
}

/// Submit the attempt via `POST /api/attempts/{attempt_id}/submit`.
///
/// The server dedupes by attempt id, so re-sending after an ambiguous
/// failure is safe.
///
/// # Errors
///
/// [`SubmitError::Transient`] for network failures, timeouts, and 5xx
/// responses; [`SubmitError::Terminal`] when the attempt id is rejected.
pub async fn submit_attempt(
    attempt_id: &str,
    payload: &AnswerPayload,
) -> Result<SubmissionResult, SubmitError> {
    #[cfg(feature = "hydrate")]
    {
        let url = attempt_submit_endpoint(attempt_id);
        let body = match serde_json::to_value(payload) {
            Ok(body) => body,
            Err(e) => return Err(SubmitError::Transient(e.to_string())),
        };
        bounded(async move {
            let resp = gloo_net::http::Request::post(&url)
                .json(&body)
                .map_err(|e| e.to_string())?
                .send()
                .await
                .map_err(|e| e.to_string())?;
            if !resp.ok() {
                let message = status_failed_message("submission", resp.status());
                if is_terminal_submit_status(resp.status()) {
                    return Ok(Err(SubmitError::Terminal(message)));
                }
                return Err(message);
            }
            let result = resp.json::<SubmissionResult>().await.map_err(|e| e.to_string())?;
            Ok(Ok(result))
        })
        .await
        .map_err(SubmitError::Transient)?
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (attempt_id, payload);
        Err(SubmitError::Transient("not available on server".to_owned()))
    }
}
