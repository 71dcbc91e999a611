//! Wall-clock access, centralized.
//!
//! The `proctor` engine consumes timestamps as plain milliseconds so it can
//! be tested synchronously; this is the one place browser time enters the
//! client. SSR paths return zero, which is fine — every consumer of the
//! clock is hydrate-only.

/// Current wall-clock time in milliseconds since the Unix epoch.
#[must_use]
pub fn now_ms() -> i64 {
    #[cfg(feature = "hydrate")]
    {
        let now = js_sys::Date::now();
        if now.is_finite() { now as i64 } else { 0 }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        0
    }
}
