//! Tracking of whether the user is actively scrolling.

use std::time::Duration;

use web_time::Instant;

/// Quiet period after which scrolling is considered over when the host does
/// not raise a scroll-end event.
pub const SCROLL_IDLE_TIMEOUT: Duration = Duration::from_millis(150);

/// Fallback quiet period when the host does raise scroll-end events.
pub const SCROLL_END_FALLBACK_TIMEOUT: Duration = Duration::from_millis(500);

/// Is-scrolling indicator.
///
/// Every scroll event restarts the quiet period. The indicator clears on an
/// explicit scroll-end signal or once the quiet period has elapsed.
#[derive(Debug, Clone)]
pub struct ScrollActivity {
    timeout: Duration,
    event_count: u32,
    last_event: Option<Instant>,
}

impl ScrollActivity {
    /// Tracker for a host that does (`true`) or does not raise scroll-end events.
    pub fn new(host_has_scroll_end: bool) -> Self {
        let timeout = if host_has_scroll_end {
            SCROLL_END_FALLBACK_TIMEOUT
        } else {
            SCROLL_IDLE_TIMEOUT
        };
        Self::with_timeout(timeout)
    }

    /// Tracker with an explicit quiet period.
    pub fn with_timeout(timeout: Duration) -> Self {
        Self {
            timeout,
            event_count: 0,
            last_event: None,
        }
    }

    /// Quiet period after the last event.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Record a scroll event.
    pub fn on_scroll(&mut self, now: Instant) {
        self.event_count = self.event_count.saturating_add(1);
        self.last_event = Some(now);
    }

    /// Record an explicit scroll-end signal.
    pub fn on_scroll_end(&mut self) {
        self.reset();
    }

    /// Forget any pending activity (e.g. on teardown).
    pub fn reset(&mut self) {
        self.event_count = 0;
        self.last_event = None;
    }

    /// When the indicator will clear if no further events arrive.
    pub fn deadline(&self) -> Option<Instant> {
        self.last_event.map(|last| last + self.timeout)
    }

    /// Clear the indicator if the quiet period has elapsed.
    ///
    /// Returns true if the indicator changed from scrolling to idle.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.deadline() {
            Some(deadline) if now >= deadline => {
                self.reset();
                true
            }
            _ => false,
        }
    }

    /// True while scroll events keep arriving within the quiet period.
    pub fn is_scrolling(&self, now: Instant) -> bool {
        self.event_count > 0 && self.deadline().is_some_and(|deadline| now < deadline)
    }

    /// Events seen since the indicator last cleared.
    pub fn event_count(&self) -> u32 {
        self.event_count
    }
}
