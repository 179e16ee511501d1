//! One-dimensional virtualization: a grid with a single axis.

use serde::{Deserialize, Serialize};

use super::axis::ScrollAxis;
use crate::error::Result;
use crate::layout::{SizeRuns, ViewportWindower};
use crate::mapping::{ItemOffsetMapping, OffsetMapping};
use crate::types::{AxisScrollState, HostScroll, ListWindow, ScrollConfig, ScrollMode};

/// Direction in which a list lays out its items
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListLayout {
    /// Items stacked top to bottom, scrolled with `scrollTop`
    #[default]
    Vertical,
    /// Items placed left to right, scrolled with `scrollLeft`
    Horizontal,
}

/// List of `item_count` items along one paged, windowed axis.
#[derive(Debug, Clone)]
pub struct VirtualList<M = ItemOffsetMapping> {
    layout: ListLayout,
    windower: ViewportWindower,
    config: ScrollConfig,
    axis: ScrollAxis<M>,
}

impl<M: OffsetMapping> VirtualList<M> {
    /// Create a list scrolled to the start.
    ///
    /// # Errors
    /// Returns an error if `config` is invalid.
    pub fn new(
        item_count: usize,
        mapping: M,
        layout: ListLayout,
        config: ScrollConfig,
    ) -> Result<Self> {
        Ok(Self {
            layout,
            windower: ViewportWindower::new(config.overscan),
            config,
            axis: ScrollAxis::new(item_count, mapping, &config)?,
        })
    }

    /// Direction the items are laid out in.
    pub fn layout(&self) -> ListLayout {
        self.layout
    }

    /// Number of items.
    pub fn item_count(&self) -> usize {
        self.axis.item_count()
    }

    /// Size to give the host scrollable content along the list axis.
    pub fn render_size(&self) -> f64 {
        self.axis.render_size()
    }

    /// Paging state of the list axis.
    pub fn state(&self) -> &AxisScrollState {
        self.axis.state()
    }

    /// Current logical offset along the list axis.
    pub fn offset(&self) -> f64 {
        self.axis.logical_offset()
    }

    /// Record a new viewport size (resize notification).
    pub fn set_viewport_size(&mut self, width: f64, height: f64) {
        self.axis.set_viewport_size(self.along(width, height));
    }

    fn along(&self, horizontal: f64, vertical: f64) -> f64 {
        match self.layout {
            ListLayout::Vertical => vertical,
            ListLayout::Horizontal => horizontal,
        }
    }

    fn host_scroll(&self, position: Option<f64>) -> HostScroll {
        match self.layout {
            ListLayout::Vertical => HostScroll {
                left: None,
                top: position,
            },
            ListLayout::Horizontal => HostScroll {
                left: position,
                top: None,
            },
        }
    }

    /// Handle a host scroll event; only the list axis is considered.
    pub fn on_host_scroll(
        &mut self,
        viewport_width: f64,
        viewport_height: f64,
        scroll_left: f64,
        scroll_top: f64,
    ) -> HostScroll {
        let viewport = self.along(viewport_width, viewport_height);
        let requested = self.along(scroll_left, scroll_top);
        let outcome = self.axis.on_host_scroll(viewport, requested);
        self.host_scroll(outcome.correction)
    }

    /// Scroll to a logical offset.
    pub fn scroll_to(&mut self, offset: f64) -> HostScroll {
        let position = self.axis.scroll_to(offset);
        self.host_scroll(Some(position))
    }

    /// Bring an item into view.
    pub fn scroll_to_item(&mut self, index: usize, mode: ScrollMode) -> HostScroll {
        let span = self.axis.item_span(index);
        let target = self.axis.area_target(Some(span), mode);
        match target {
            Some(offset) => self.scroll_to(offset),
            None => HostScroll::NONE,
        }
    }

    /// Change the item count, keeping the logical position where possible.
    ///
    /// # Errors
    /// Returns an error if the configuration is invalid.
    pub fn set_item_count(&mut self, item_count: usize) -> Result<HostScroll> {
        let position = self.axis.set_item_count(item_count, &self.config)?;
        Ok(self.host_scroll(Some(position)))
    }

    /// Items to materialize for the current viewport and scroll position.
    pub fn window(&self) -> ListWindow {
        let window = self.axis.window(&self.windower);
        ListWindow {
            start_index: window.start_index,
            offsets: window.positions(self.axis.render_offset()),
            template: SizeRuns::compress(&window.sizes).to_grid_template(),
            sizes: window.sizes,
            render_size: self.axis.render_size(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use super::*;

    fn list(layout: ListLayout) -> VirtualList {
        VirtualList::new(
            1_000,
            ItemOffsetMapping::fixed(30.0).unwrap(),
            layout,
            ScrollConfig::default(),
        )
        .unwrap()
    }

    #[test]
    fn test_vertical_uses_scroll_top() {
        let mut list = list(ListLayout::Vertical);
        list.on_host_scroll(500.0, 300.0, 999.0, 3_000.0);
        assert_eq!(list.offset(), 3_000.0);
        let window = list.window();
        assert_eq!(window.start_index, 99);
        assert_eq!(window.offsets.first().copied(), Some(2_970.0));
        assert_eq!(window.sizes.len(), 12);
    }

    #[test]
    fn test_horizontal_uses_scroll_left() {
        let mut list = list(ListLayout::Horizontal);
        list.on_host_scroll(300.0, 500.0, 3_000.0, 999.0);
        assert_eq!(list.offset(), 3_000.0);
        let host = list.scroll_to(60.0);
        assert_eq!(host.left, Some(60.0));
        assert_eq!(host.top, None);
    }

    #[test]
    fn test_scroll_to_item_modes() {
        let mut list = list(ListLayout::Vertical);
        list.set_viewport_size(500.0, 300.0);
        assert!(list.scroll_to_item(5, ScrollMode::Visible).is_empty());
        assert_eq!(list.scroll_to_item(5, ScrollMode::Start).top, Some(150.0));
        // Past the end clamps to the last item and the last valid position
        assert_eq!(
            list.scroll_to_item(5_000, ScrollMode::Start).top,
            Some(29_700.0)
        );
    }
}
