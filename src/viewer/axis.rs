//! One scrollable axis: item mapping, item count, paging and viewport size.

use crate::error::Result;
use crate::layout::{PagedAxisWindow, ViewportWindower};
use crate::mapping::OffsetMapping;
use crate::types::{AxisScrollOutcome, AxisScrollState, ItemWindow, ScrollConfig, ScrollMode, Span};

#[derive(Debug, Clone)]
pub(crate) struct ScrollAxis<M> {
    item_count: usize,
    mapping: M,
    paging: PagedAxisWindow,
    viewport_size: f64,
}

impl<M: OffsetMapping> ScrollAxis<M> {
    pub(crate) fn new(item_count: usize, mapping: M, config: &ScrollConfig) -> Result<Self> {
        let paging = PagedAxisWindow::new(mapping.item_offset(item_count), config)?;
        Ok(Self {
            item_count,
            mapping,
            paging,
            viewport_size: 0.0,
        })
    }

    pub(crate) fn item_count(&self) -> usize {
        self.item_count
    }

    pub(crate) fn mapping(&self) -> &M {
        &self.mapping
    }

    pub(crate) fn logical_extent(&self) -> f64 {
        self.paging.axis().logical_extent()
    }

    pub(crate) fn render_size(&self) -> f64 {
        self.paging.render_size()
    }

    pub(crate) fn state(&self) -> &AxisScrollState {
        self.paging.state()
    }

    pub(crate) fn logical_offset(&self) -> f64 {
        self.paging.logical_offset()
    }

    pub(crate) fn viewport_size(&self) -> f64 {
        self.viewport_size
    }

    pub(crate) fn set_viewport_size(&mut self, viewport_size: f64) {
        self.viewport_size = viewport_size.max(0.0);
    }

    pub(crate) fn on_host_scroll(&mut self, viewport_size: f64, requested: f64) -> AxisScrollOutcome {
        self.set_viewport_size(viewport_size);
        let render_size = self.paging.render_size();
        self.paging
            .on_host_scroll(self.viewport_size, render_size, requested)
    }

    pub(crate) fn scroll_to(&mut self, logical_offset: f64) -> f64 {
        self.paging.scroll_to(logical_offset, self.viewport_size)
    }

    /// Offset and size of an item, clamped to the last item.
    pub(crate) fn item_span(&self, index: usize) -> Span {
        let index = index.min(self.item_count.saturating_sub(1));
        Span::new(
            self.mapping.item_offset(index),
            self.mapping.item_size(index),
        )
    }

    /// Logical offset to scroll to so that `target` is shown, if any.
    pub(crate) fn area_target(&self, target: Option<Span>, mode: ScrollMode) -> Option<f64> {
        resolve_area_target(target, self.viewport_size, self.logical_offset(), mode)
    }

    pub(crate) fn window(&self, windower: &ViewportWindower) -> ItemWindow {
        windower.window(
            self.item_count,
            &self.mapping,
            self.viewport_size,
            self.logical_offset(),
        )
    }

    pub(crate) fn render_offset(&self) -> f64 {
        self.paging.render_offset()
    }

    /// Change the item count and return the host position to apply.
    pub(crate) fn set_item_count(&mut self, item_count: usize, config: &ScrollConfig) -> Result<f64> {
        self.item_count = item_count;
        self.paging.set_logical_extent(
            self.mapping.item_offset(item_count),
            self.viewport_size,
            config,
        )
    }
}

/// Logical offset that brings `target` into view.
///
/// `Start` mode and targets above the current position always scroll to the
/// target's leading edge. In `Visible` mode a target that already fits
/// inside `[current, current + viewport_size]` needs no scroll; otherwise
/// its trailing edge is aligned with the viewport's, unless it is larger
/// than the viewport.
pub(crate) fn resolve_area_target(
    target: Option<Span>,
    viewport_size: f64,
    current: f64,
    mode: ScrollMode,
) -> Option<f64> {
    let target = target?;
    if mode != ScrollMode::Visible || target.offset < current {
        return Some(target.offset);
    }
    if target.end() <= current + viewport_size {
        return None;
    }
    if target.size > viewport_size {
        Some(target.offset)
    } else {
        Some(target.offset - viewport_size + target.size)
    }
}
