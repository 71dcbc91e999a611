//! Shared application state provided through Leptos context.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each module owns one concern: `auth` the signed-in user, `exams` the
//! dashboard inventory, `exam` the active attempt, and `ui` presentation
//! chrome. The proctoring session itself is not global state — the exam
//! page owns one per attempt so nothing leaks across attempts.

pub mod auth;
pub mod exam;
pub mod exams;
pub mod ui;
