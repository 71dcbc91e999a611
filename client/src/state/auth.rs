//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Used by route guards and user-aware components to coordinate login
//! redirects and identity-dependent rendering.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::User;

/// Authentication state tracking the current user and loading status.
#[derive(Clone, Debug)]
pub struct AuthState {
    pub user: Option<User>,
    /// True until the `/api/auth/me` bootstrap settles.
    pub loading: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self { user: None, loading: true }
    }
}

impl AuthState {
    /// True once the bootstrap finished and found a signed-in user.
    #[must_use]
    pub fn is_signed_in(&self) -> bool {
        !self.loading && self.user.is_some()
    }

    /// True once the bootstrap finished with nobody signed in; pages
    /// redirect to `/login` on this.
    #[must_use]
    pub fn needs_login(&self) -> bool {
        !self.loading && self.user.is_none()
    }

    /// Display name for the toolbar, with a neutral fallback.
    #[must_use]
    pub fn display_name(&self) -> String {
        self.user.as_ref().map_or_else(|| "me".to_owned(), |u| u.name.clone())
    }
}
