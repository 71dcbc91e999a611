//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates rendering details
//! to `components`. The exam page additionally owns the per-attempt
//! proctoring session and the runtime task that drives it.

pub mod dashboard;
pub mod exam;
pub mod login;
