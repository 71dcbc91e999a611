//! Theme preference: initialization and toggle.
//!
//! Reads the stored theme from `localStorage` and applies a `data-theme`
//! attribute to the `<html>` element; falls back to the system preference
//! when nothing is stored. SSR paths no-op so server rendering stays
//! deterministic.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

#[cfg(feature = "hydrate")]
const STORAGE_KEY: &str = "studyhall_theme";

const DARK: &str = "dark";
const LIGHT: &str = "light";

/// The `data-theme` value for a dark-mode flag.
#[must_use]
pub fn theme_name(dark: bool) -> &'static str {
    if dark { DARK } else { LIGHT }
}

/// Read the stored theme, falling back to the system preference.
#[must_use]
pub fn read_preference() -> bool {
    #[cfg(feature = "hydrate")]
    {
        let Some(window) = web_sys::window() else {
            return false;
        };
        if let Ok(Some(storage)) = window.local_storage() {
            if let Ok(Some(stored)) = storage.get_item(STORAGE_KEY) {
                return stored == DARK;
            }
        }
        window
            .match_media("(prefers-color-scheme: dark)")
            .ok()
            .flatten()
            .is_some_and(|mq| mq.matches())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        false
    }
}

/// Apply the `data-theme` attribute on the `<html>` element.
pub fn apply(dark: bool) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(el) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.document_element()) {
            if el.set_attribute("data-theme", theme_name(dark)).is_err() {
                leptos::logging::warn!("theme: failed to set data-theme attribute");
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = dark;
    }
}

/// Flip the theme, persist it, and return the new flag.
pub fn toggle(current: bool) -> bool {
    let next = !current;
    apply(next);
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
            if storage.set_item(STORAGE_KEY, theme_name(next)).is_err() {
                leptos::logging::warn!("theme: failed to persist preference");
            }
        }
    }
    next
}
