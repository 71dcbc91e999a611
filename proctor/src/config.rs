//! Per-attempt proctoring options.
//!
//! SYSTEM CONTEXT
//! ==============
//! The hosting exam page receives this inside the attempt payload and hands
//! it to [`crate::session::ProctorSession::begin`]. Nothing here is read from
//! the environment; proctoring behavior is always supplied per attempt.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::{Deserialize, Serialize};

/// Recognized proctoring options for one exam attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProctorConfig {
    /// Observe page-visibility changes and record tab switches.
    pub enable_tab_detection: bool,
    /// Intercept and record copy attempts.
    pub enable_copy_block: bool,
    /// Request fullscreen when monitoring starts.
    pub enable_fullscreen_mode: bool,
    /// Seal the attempt and force submission once the violation total
    /// reaches [`ProctorConfig::max_violations`].
    pub strict_fullscreen: bool,
    /// Violation total that trips the strict-mode auto-submit. Only
    /// meaningful while `strict_fullscreen` is set.
    pub max_violations: u32,
}

impl Default for ProctorConfig {
    fn default() -> Self {
        Self {
            enable_tab_detection: true,
            enable_copy_block: true,
            enable_fullscreen_mode: false,
            strict_fullscreen: false,
            max_violations: 5,
        }
    }
}

impl ProctorConfig {
    /// A config with every enforcement surface enabled.
    #[must_use]
    pub fn strict(max_violations: u32) -> Self {
        Self {
            enable_tab_detection: true,
            enable_copy_block: true,
            enable_fullscreen_mode: true,
            strict_fullscreen: true,
            max_violations,
        }
    }

    /// True when the auto-submit threshold can ever trip.
    #[must_use]
    pub fn enforces_threshold(&self) -> bool {
        self.strict_fullscreen && self.max_violations > 0
    }
}
