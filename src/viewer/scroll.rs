//! Scroll synchronization between an engine and its host scroll container.
//!
//! On every host scroll event the engine re-derives both axes and may ask
//! for the host position to be corrected. The correction is applied in a
//! single call and itself raises a new host event, which the engine sees as
//! a repeat of its stored position and ignores.

use std::collections::VecDeque;

use super::{VirtualGrid, VirtualList};
use crate::mapping::OffsetMapping;
use crate::types::{HostScroll, ScrollSnapshot};

/// A scrollable host element.
pub trait ScrollHost {
    /// Visible `(width, height)` of the element.
    fn client_size(&self) -> (f64, f64);

    /// Current `(scroll_left, scroll_top)`.
    fn scroll_position(&self) -> (f64, f64);

    /// Set both scroll positions at once.
    fn scroll_to(&mut self, left: f64, top: f64);
}

/// Apply engine-requested positions to `host`, keeping absent axes where
/// they are. Returns true if the host was touched.
pub fn apply_host_scroll<H: ScrollHost + ?Sized>(host: &mut H, scroll: HostScroll) -> bool {
    if scroll.is_empty() {
        return false;
    }
    let (current_left, current_top) = host.scroll_position();
    host.scroll_to(
        scroll.left.unwrap_or(current_left),
        scroll.top.unwrap_or(current_top),
    );
    true
}

impl<M: OffsetMapping> VirtualGrid<M> {
    /// Handle a scroll event raised by `host`, re-applying any correction.
    pub fn sync_with_host<H: ScrollHost + ?Sized>(&mut self, host: &mut H) -> ScrollSnapshot {
        let (width, height) = host.client_size();
        let (left, top) = host.scroll_position();
        let correction = self.on_host_scroll(width, height, left, top);
        apply_host_scroll(host, correction);
        self.snapshot()
    }
}

impl<M: OffsetMapping> VirtualList<M> {
    /// Handle a scroll event raised by `host`, re-applying any correction.
    /// Returns the logical offset along the list axis.
    pub fn sync_with_host<H: ScrollHost + ?Sized>(&mut self, host: &mut H) -> f64 {
        let (width, height) = host.client_size();
        let (left, top) = host.scroll_position();
        let correction = self.on_host_scroll(width, height, left, top);
        apply_host_scroll(host, correction);
        self.offset()
    }
}

/// In-memory host that behaves like a browser scroll container: positions
/// are clamped to the scrollable range and every change queues a scroll
/// event.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulatedHost {
    client_width: f64,
    client_height: f64,
    scroll_width: f64,
    scroll_height: f64,
    scroll_left: f64,
    scroll_top: f64,
    pending_events: VecDeque<(f64, f64)>,
    programmatic_scrolls: usize,
}

impl SimulatedHost {
    /// Host with the given visible size and scrollable content size.
    pub fn new(client_width: f64, client_height: f64, scroll_width: f64, scroll_height: f64) -> Self {
        Self {
            client_width,
            client_height,
            scroll_width,
            scroll_height,
            scroll_left: 0.0,
            scroll_top: 0.0,
            pending_events: VecDeque::new(),
            programmatic_scrolls: 0,
        }
    }

    /// Host sized for `grid`'s render size.
    pub fn for_grid<M: OffsetMapping>(grid: &VirtualGrid<M>, client_width: f64, client_height: f64) -> Self {
        Self::new(
            client_width,
            client_height,
            grid.render_width(),
            grid.render_height(),
        )
    }

    /// Resize the visible area.
    pub fn resize(&mut self, client_width: f64, client_height: f64) {
        self.client_width = client_width;
        self.client_height = client_height;
    }

    /// Replace the scrollable content size.
    pub fn set_scroll_size(&mut self, scroll_width: f64, scroll_height: f64) {
        self.scroll_width = scroll_width;
        self.scroll_height = scroll_height;
    }

    /// Simulate the user dragging or wheeling to a position.
    pub fn user_scroll(&mut self, left: f64, top: f64) {
        self.move_to(left, top);
    }

    /// Take the oldest queued scroll event.
    pub fn next_event(&mut self) -> Option<(f64, f64)> {
        self.pending_events.pop_front()
    }

    /// Number of queued scroll events.
    pub fn pending_events(&self) -> usize {
        self.pending_events.len()
    }

    /// How many times the engine side has called [`ScrollHost::scroll_to`].
    pub fn programmatic_scrolls(&self) -> usize {
        self.programmatic_scrolls
    }

    #[allow(clippy::float_cmp)]
    fn move_to(&mut self, left: f64, top: f64) {
        let left = left.clamp(0.0, (self.scroll_width - self.client_width).max(0.0));
        let top = top.clamp(0.0, (self.scroll_height - self.client_height).max(0.0));
        if left == self.scroll_left && top == self.scroll_top {
            return;
        }
        self.scroll_left = left;
        self.scroll_top = top;
        self.pending_events.push_back((left, top));
    }
}

impl ScrollHost for SimulatedHost {
    fn client_size(&self) -> (f64, f64) {
        (self.client_width, self.client_height)
    }

    fn scroll_position(&self) -> (f64, f64) {
        (self.scroll_left, self.scroll_top)
    }

    fn scroll_to(&mut self, left: f64, top: f64) {
        self.programmatic_scrolls += 1;
        self.move_to(left, top);
    }
}

/// Deliver queued host events to `grid` until none remain or `max_events`
/// have been handled. Returns the snapshot after each event.
pub fn dispatch_pending<M: OffsetMapping>(
    grid: &mut VirtualGrid<M>,
    host: &mut SimulatedHost,
    max_events: usize,
) -> Vec<ScrollSnapshot> {
    let mut snapshots = Vec::new();
    while snapshots.len() < max_events {
        if host.next_event().is_none() {
            break;
        }
        snapshots.push(grid.sync_with_host(host));
    }
    if host.pending_events() > 0 {
        log::warn!(
            "dispatch_pending: stopped with {} host events still queued",
            host.pending_events()
        );
    }
    snapshots
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use super::*;
    use crate::mapping::ItemOffsetMapping;
    use crate::types::ScrollConfig;

    #[test]
    fn test_host_clamps_and_queues() {
        let mut host = SimulatedHost::new(100.0, 100.0, 1_000.0, 500.0);
        host.user_scroll(2_000.0, -5.0);
        assert_eq!(host.scroll_position(), (900.0, 0.0));
        assert_eq!(host.next_event(), Some((900.0, 0.0)));
        host.user_scroll(900.0, 0.0);
        assert_eq!(host.pending_events(), 0);
    }

    #[test]
    fn test_apply_keeps_absent_axis() {
        let mut host = SimulatedHost::new(100.0, 100.0, 1_000.0, 1_000.0);
        host.user_scroll(40.0, 50.0);
        assert!(apply_host_scroll(
            &mut host,
            HostScroll {
                left: None,
                top: Some(70.0)
            }
        ));
        assert_eq!(host.scroll_position(), (40.0, 70.0));
        assert!(!apply_host_scroll(&mut host, HostScroll::NONE));
        assert_eq!(host.programmatic_scrolls(), 1);
    }

    #[test]
    fn test_correction_feedback_terminates() {
        let mut grid = VirtualGrid::new(
            1_000_000,
            ItemOffsetMapping::fixed(20.0).unwrap(),
            10,
            ItemOffsetMapping::fixed(100.0).unwrap(),
            ScrollConfig::default(),
        )
        .unwrap();
        let mut host = SimulatedHost::for_grid(&grid, 800.0, 600.0);

        // Walk down past the page 1 → page 2 boundary in small steps
        let mut top = 0.0;
        while top < 120_000.0 {
            top += 400.0;
            host.user_scroll(0.0, top);
            dispatch_pending(&mut grid, &mut host, 8);
        }

        // One correction was applied and its echo was absorbed
        assert_eq!(host.programmatic_scrolls(), 1);
        assert_eq!(host.pending_events(), 0);
        assert_eq!(grid.snapshot().row_offset, 120_000.0);
        assert_eq!(grid.row_state().page, 2);
    }
}
