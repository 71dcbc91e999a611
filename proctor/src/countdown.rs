//! Validated attempt countdown.
//!
//! Timestamps are milliseconds since the Unix epoch, supplied by the caller
//! on every query so tests can drive time synchronously. Remaining time
//! clamps to zero; the countdown itself never fires anything — expiry is a
//! question the tick loop asks, and the submission gate makes the answer
//! single-shot.

#[cfg(test)]
#[path = "countdown_test.rs"]
mod countdown_test;

use thiserror::Error;

/// Rejected countdown inputs.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CountdownError {
    #[error("allotted duration must be positive (got {0} ms)")]
    NonPositiveDuration(i64),
    #[error("attempt start {start_ms} is ahead of the client clock {now_ms}")]
    StartInFuture { start_ms: i64, now_ms: i64 },
}

/// Countdown over one attempt's allotted duration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Countdown {
    started_at_ms: i64,
    duration_ms: i64,
}

impl Countdown {
    /// Build a countdown, rejecting a non-positive duration or a start
    /// timestamp ahead of the client clock.
    pub fn new(started_at_ms: i64, duration_ms: i64, now_ms: i64) -> Result<Self, CountdownError> {
        if duration_ms <= 0 {
            return Err(CountdownError::NonPositiveDuration(duration_ms));
        }
        if started_at_ms > now_ms {
            return Err(CountdownError::StartInFuture { start_ms: started_at_ms, now_ms });
        }
        Ok(Self { started_at_ms, duration_ms })
    }

    #[must_use]
    pub fn started_at_ms(&self) -> i64 {
        self.started_at_ms
    }

    #[must_use]
    pub fn duration_ms(&self) -> i64 {
        self.duration_ms
    }

    /// The instant the attempt runs out.
    #[must_use]
    pub fn deadline_ms(&self) -> i64 {
        self.started_at_ms + self.duration_ms
    }

    /// Remaining time at `now_ms`, clamped to zero.
    #[must_use]
    pub fn remaining_ms(&self, now_ms: i64) -> i64 {
        (self.deadline_ms() - now_ms).max(0)
    }

    /// True once the allotted duration has fully elapsed.
    #[must_use]
    pub fn is_expired(&self, now_ms: i64) -> bool {
        self.remaining_ms(now_ms) == 0
    }
}

/// Format remaining milliseconds as `m:ss`, or `h:mm:ss` past an hour.
///
/// Partial seconds round up so the badge reads `10:00` for a fresh
/// ten-minute attempt and only hits `0:00` at true expiry.
#[must_use]
pub fn format_clock(remaining_ms: i64) -> String {
    let total_secs = (remaining_ms.max(0) + 999) / 1000;
    let hours = total_secs / 3600;
    let minutes = (total_secs % 3600) / 60;
    let seconds = total_secs % 60;
    if hours > 0 {
        format!("{hours}:{minutes:02}:{seconds:02}")
    } else {
        format!("{minutes}:{seconds:02}")
    }
}
