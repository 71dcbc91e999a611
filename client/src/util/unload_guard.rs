//! Unload guard — beforeunload interception while an attempt is active.
//!
//! SYSTEM CONTEXT
//! ==============
//! The guard is an owned handle, created when the exam page mounts and
//! dropped when it unmounts, so interception can never outlive the page.
//! The active flag is read at event time: flipping it off (submit, expiry,
//! seal) disarms the prompt immediately without re-wiring listeners.

#[cfg(test)]
#[path = "unload_guard_test.rs"]
mod unload_guard_test;

#[cfg(feature = "hydrate")]
use wasm_bindgen::JsCast as _;

#[cfg(feature = "hydrate")]
const PROMPT_FALLBACK: &str = "An exam attempt is in progress.";

/// Owned beforeunload interception. Detaches on drop.
pub struct UnloadGuard {
    #[cfg(feature = "hydrate")]
    listener: Option<(
        web_sys::Window,
        wasm_bindgen::closure::Closure<dyn FnMut(web_sys::Event)>,
    )>,
}

impl UnloadGuard {
    /// Attach the interception. `is_active` is consulted on every unload
    /// event; when it returns `false` the browser navigates away freely.
    pub fn install<F>(is_active: F) -> Self
    where
        F: Fn() -> bool + 'static,
    {
        #[cfg(feature = "hydrate")]
        {
            let Some(window) = web_sys::window() else {
                return Self { listener: None };
            };
            let closure = wasm_bindgen::closure::Closure::<dyn FnMut(web_sys::Event)>::new(
                move |ev: web_sys::Event| {
                    if !is_active() {
                        return;
                    }
                    ev.prevent_default();
                    // Legacy engines also want a non-empty returnValue.
                    if let Some(unload) = ev.dyn_ref::<web_sys::BeforeUnloadEvent>() {
                        unload.set_return_value(PROMPT_FALLBACK);
                    }
                },
            );
            if window
                .add_event_listener_with_callback("beforeunload", closure.as_ref().unchecked_ref())
                .is_err()
            {
                leptos::logging::warn!("unload guard: failed to attach listener");
                return Self { listener: None };
            }
            Self { listener: Some((window, closure)) }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = is_active;
            Self {}
        }
    }
}

impl Drop for UnloadGuard {
    fn drop(&mut self) {
        #[cfg(feature = "hydrate")]
        if let Some((window, closure)) = self.listener.take() {
            if window
                .remove_event_listener_with_callback("beforeunload", closure.as_ref().unchecked_ref())
                .is_err()
            {
                leptos::logging::warn!("unload guard: failed to detach listener");
            }
        }
    }
}
