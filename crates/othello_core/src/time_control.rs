//! Time budget and search limits shared by all engines.
//!
//! A search owns its `TimeControl` for the whole top-level call. Expiry is
//! only ever observed between sibling expansions, so it truncates breadth
//! at the node where it is noticed and never aborts a subtree in flight.

use std::time::{Duration, Instant};

/// Default wall-clock budget for one move.
pub const DEFAULT_MOVE_TIME: Duration = Duration::from_millis(5000);

/// Limits handed to an engine for a single move decision.
#[derive(Debug, Clone)]
pub struct SearchLimits {
    /// Maximum time allowed for this move (None = unlimited)
    pub move_time: Option<Duration>,
}

impl SearchLimits {
    pub fn time(move_time: Duration) -> Self {
        Self {
            move_time: Some(move_time),
        }
    }

    pub fn unlimited() -> Self {
        Self { move_time: None }
    }

    /// A fresh, not yet started clock for these limits.
    pub fn time_control(&self) -> TimeControl {
        TimeControl::new(self.move_time)
    }
}

impl Default for SearchLimits {
    fn default() -> Self {
        Self::time(DEFAULT_MOVE_TIME)
    }
}

/// Wall-clock guard for one top-level search.
///
/// Once `check_time` has seen the budget run out the controller stays
/// expired, so every node above the one that noticed also stops widening.
#[derive(Debug, Clone)]
pub struct TimeControl {
    start_time: Option<Instant>,
    time_limit: Option<Duration>,
    expired: bool,
}

impl TimeControl {
    pub fn new(time_limit: Option<Duration>) -> Self {
        Self {
            start_time: None,
            time_limit,
            expired: false,
        }
    }

    /// Start the clock. Call this when the search begins.
    pub fn start(&mut self) {
        self.start_time = Some(Instant::now());
        self.expired = false;
    }

    #[inline]
    pub fn is_expired(&self) -> bool {
        self.expired
    }

    /// Read the clock and latch expiry. Returns true once the budget is spent.
    pub fn check_time(&mut self) -> bool {
        if self.expired {
            return true;
        }

        if let Some(limit) = self.time_limit
            && self.elapsed() >= limit
        {
            self.expired = true;
        }
        self.expired
    }

    pub fn time_limit(&self) -> Option<Duration> {
        self.time_limit
    }

    /// Elapsed time since `start`; zero if never started.
    pub fn elapsed(&self) -> Duration {
        self.start_time
            .map(|s| s.elapsed())
            .unwrap_or(Duration::ZERO)
    }

    /// Remaining budget (None if unlimited).
    pub fn remaining(&self) -> Option<Duration> {
        let limit = self.time_limit?;
        Some(limit.saturating_sub(self.elapsed()))
    }
}

impl Default for TimeControl {
    fn default() -> Self {
        Self::new(None)
    }
}

#[cfg(test)]
#[path = "time_control_tests.rs"]
mod time_control_tests;
