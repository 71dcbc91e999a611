//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render exam chrome and answer surfaces while reading/writing
//! shared state from Leptos context providers. None of them talk to the
//! network directly; the runtime in `util::exam_runtime` owns all calls.

pub mod autosave_chip;
pub mod countdown_badge;
pub mod exam_card;
pub mod question_card;
pub mod result_panel;
pub mod submit_notice;
pub mod violation_banner;
