//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns from page and
//! component logic. Everything that touches the DOM, timers, or storage
//! lives here behind the `hydrate` feature; pages and components stay
//! renderable (and testable) without a browser.

pub mod backup;
pub mod clock;
pub mod exam_runtime;
pub mod fullscreen;
pub mod markdown;
pub mod monitor_dom;
pub mod theme;
pub mod unload_guard;
