//! Networking modules for the REST backend collaborator.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` wraps the HTTP endpoints (auth, exam list, attempt start, autosave,
//! submit) and `types` defines the shared wire schema. The backend is opaque
//! to this crate: the client owns answers in memory until submit and only
//! trusts the server for the initial attempt payload and the final result.

pub mod api;
pub mod types;
