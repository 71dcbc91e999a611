//! Best-effort fullscreen control.
//!
//! The platform declining a fullscreen request is an expected outcome, not a
//! fault: the caller records it as a violation and the attempt continues
//! windowed. SSR paths report failure without side effects.

/// Request fullscreen on the document element.
///
/// Returns `false` when the request could not be issued or was refused
/// synchronously; the exam page records that as a fullscreen-exit violation.
pub fn request() -> bool {
    #[cfg(feature = "hydrate")]
    {
        let Some(element) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element())
        else {
            return false;
        };
        if element.request_fullscreen().is_err() {
            leptos::logging::warn!("fullscreen request was refused");
            return false;
        }
        true
    }
    #[cfg(not(feature = "hydrate"))]
    {
        false
    }
}

/// Leave fullscreen if the document is currently in it.
pub fn exit() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(document) = web_sys::window().and_then(|w| w.document()) {
            if document.fullscreen_element().is_some() {
                document.exit_fullscreen();
            }
        }
    }
}
