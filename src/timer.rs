use std::time::{Duration, Instant};

// ---------------------------------------------------------------------------
// Refresh timer
// ---------------------------------------------------------------------------

/// A single repeating deadline polled from the UI loop.
///
/// There is only ever one pending deadline: re-arming replaces it.
#[derive(Debug, Clone)]
pub struct RefreshTimer {
    interval: Duration,
    next_due: Instant,
}

impl RefreshTimer {
    /// First firing one full interval after `now`.
    pub fn new(interval: Duration, now: Instant) -> Self {
        Self {
            interval,
            next_due: now + interval,
        }
    }

    /// Returns `true` if the deadline has passed, re-arming for one interval
    /// from `now`.
    pub fn poll(&mut self, now: Instant) -> bool {
        if now < self.next_due {
            return false;
        }
        self.next_due = now + self.interval;
        true
    }

    /// Restart the countdown from zero.
    pub fn reset(&mut self, now: Instant) {
        self.next_due = now + self.interval;
    }

    /// Fire after `delay` instead of the regular interval, once.
    pub fn reset_after(&mut self, now: Instant, delay: Duration) {
        self.next_due = now + delay;
    }

    /// Time until the next firing (zero when overdue).
    pub fn remaining(&self, now: Instant) -> Duration {
        self.next_due.saturating_duration_since(now)
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }
}
