//! Autosave cadence and the submission retry-backoff schedule.
//!
//! DESIGN
//! ======
//! Autosave failures are never fatal to the attempt: the cadence only counts
//! them so the UI can show a non-blocking indicator, and the next due tick
//! retries automatically with the answers still held in memory. The backoff
//! schedule is shared with the forced-submission path, which (unlike
//! autosave) has a bounded number of automatic attempts before it surfaces a
//! persistent failure state.

#[cfg(test)]
#[path = "autosave_test.rs"]
mod autosave_test;

/// Default interval between background answer saves.
pub const DEFAULT_AUTOSAVE_INTERVAL_MS: i64 = 15_000;

/// Backoff used by the forced-submission retry loop.
pub const SUBMIT_BACKOFF: RetryBackoff = RetryBackoff {
    base_ms: 1_000,
    max_ms: 10_000,
    max_attempts: 5,
};

/// Fixed-interval autosave scheduler with in-flight suppression.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AutosaveCadence {
    interval_ms: i64,
    last_started_ms: Option<i64>,
    in_flight: bool,
    consecutive_failures: u32,
}

impl Default for AutosaveCadence {
    fn default() -> Self {
        Self::new(DEFAULT_AUTOSAVE_INTERVAL_MS)
    }
}

impl AutosaveCadence {
    /// Build a cadence. Intervals under one second are clamped up so a
    /// misconfigured caller cannot turn autosave into a request flood.
    #[must_use]
    pub fn new(interval_ms: i64) -> Self {
        Self {
            interval_ms: interval_ms.max(1_000),
            last_started_ms: None,
            in_flight: false,
            consecutive_failures: 0,
        }
    }

    /// True when a save should start at `now_ms`. Never true while a save
    /// is in flight. The very first query is due immediately so the attempt
    /// gets an initial flush.
    #[must_use]
    pub fn due(&self, now_ms: i64) -> bool {
        if self.in_flight {
            return false;
        }
        match self.last_started_ms {
            None => true,
            Some(started) => now_ms - started >= self.interval_ms,
        }
    }

    /// Mark a save as started.
    pub fn begin(&mut self, now_ms: i64) {
        self.in_flight = true;
        self.last_started_ms = Some(now_ms);
    }

    /// Mark the in-flight save as accepted.
    pub fn succeed(&mut self) {
        self.in_flight = false;
        self.consecutive_failures = 0;
    }

    /// Mark the in-flight save as failed; the next due tick retries.
    pub fn fail(&mut self) {
        self.in_flight = false;
        self.consecutive_failures += 1;
    }

    #[must_use]
    pub fn is_in_flight(&self) -> bool {
        self.in_flight
    }

    /// Failures since the last accepted save. Drives the retry indicator.
    #[must_use]
    pub fn consecutive_failures(&self) -> u32 {
        self.consecutive_failures
    }

    #[must_use]
    pub fn interval_ms(&self) -> i64 {
        self.interval_ms
    }
}

/// Exponential backoff schedule with a delay cap and an attempt bound.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RetryBackoff {
    pub base_ms: u32,
    pub max_ms: u32,
    pub max_attempts: u32,
}

impl RetryBackoff {
    /// Delay before the next try after `failures` failed attempts, or
    /// `None` once the attempt budget is spent.
    ///
    /// One failure waits the base delay; each further failure doubles it up
    /// to the cap.
    #[must_use]
    pub fn delay_ms(&self, failures: u32) -> Option<u32> {
        if failures == 0 || failures >= self.max_attempts {
            return None;
        }
        let doubled = self.base_ms.saturating_mul(2u32.saturating_pow(failures - 1));
        Some(doubled.min(self.max_ms))
    }
}
