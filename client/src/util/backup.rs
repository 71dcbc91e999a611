//! Local answer-draft backup in `localStorage`.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every autosave tick mirrors the answer snapshot locally before the
//! network call goes out, so a crashed tab or an exhausted submit-retry run
//! never silently loses work: reopening the attempt restores the draft.
//! The mirror is cleared once the server accepts the submission.

#[cfg(test)]
#[path = "backup_test.rs"]
mod backup_test;

use crate::net::types::AnswerPayload;

const KEY_PREFIX: &str = "studyhall_draft_";

/// Storage key for one attempt's draft.
#[must_use]
pub fn draft_key(attempt_id: &str) -> String {
    format!("{KEY_PREFIX}{attempt_id}")
}

/// Mirror the answer snapshot for `attempt_id`.
pub fn save_draft(attempt_id: &str, payload: &AnswerPayload) {
    #[cfg(feature = "hydrate")]
    {
        let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) else {
            return;
        };
        let Ok(raw) = serde_json::to_string(payload) else {
            return;
        };
        if storage.set_item(&draft_key(attempt_id), &raw).is_err() {
            leptos::logging::warn!("draft backup: localStorage write failed");
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (attempt_id, payload);
    }
}

/// Restore the mirrored snapshot for `attempt_id`, if one exists and parses.
#[must_use]
pub fn load_draft(attempt_id: &str) -> Option<AnswerPayload> {
    #[cfg(feature = "hydrate")]
    {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten())?;
        let raw = storage.get_item(&draft_key(attempt_id)).ok().flatten()?;
        serde_json::from_str(&raw).ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = attempt_id;
        None
    }
}

/// Drop the mirror once the server has accepted the submission.
pub fn clear_draft(attempt_id: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
            if storage.remove_item(&draft_key(attempt_id)).is_err() {
                leptos::logging::warn!("draft backup: localStorage remove failed");
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = attempt_id;
    }
}
