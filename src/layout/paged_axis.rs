//! Paging of logical extents larger than the host's scrollable pixel limit.
//!
//! Browsers cap the pixel size of a scrollable element. When an axis is
//! larger than that cap, the host element is given a bounded `render_size`
//! and host scroll positions are mapped onto pages of the logical extent.
//! Each page shifts rendered content by its `render_offset`, so the true
//! position is always `scroll_offset + render_offset`.
//!
//! [`PagedAxis`] holds the immutable geometry and pure transition functions;
//! [`PagedAxisWindow`] owns one axis's state and applies them.

use crate::error::Result;
use crate::mapping::whole_items;
use crate::types::{AxisScrollOutcome, AxisScrollState, ScrollConfig, ScrollDirection};

/// Immutable paging geometry of one axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PagedAxis {
    logical_extent: f64,
    render_size: f64,
    page_size: f64,
    page_count: usize,
}

impl PagedAxis {
    /// Build the paging geometry for an axis of `logical_extent` pixels.
    ///
    /// Extents below `config.max_render_size` map one-to-one onto the host
    /// and use a single page.
    ///
    /// # Errors
    /// Returns an error if `config` fails [`ScrollConfig::validate`].
    #[allow(clippy::cast_precision_loss)]
    pub fn new(logical_extent: f64, config: &ScrollConfig) -> Result<Self> {
        config.validate()?;

        let logical_extent = if logical_extent.is_finite() {
            logical_extent.max(0.0)
        } else {
            log::warn!("PagedAxis: non-finite logical extent {logical_extent}, using 0");
            0.0
        };

        if logical_extent < config.max_render_size {
            return Ok(Self {
                logical_extent,
                render_size: logical_extent,
                page_size: logical_extent,
                page_count: 1,
            });
        }

        let render_size = config.max_render_size;
        let page_size = render_size / config.target_page_count as f64;
        // At least `target_page_count` because the extent is at least the ceiling
        let page_count = whole_items(logical_extent / page_size).max(config.target_page_count);
        log::debug!(
            "PagedAxis: extent {logical_extent} split into {page_count} pages of {page_size}"
        );

        Ok(Self {
            logical_extent,
            render_size,
            page_size,
            page_count,
        })
    }

    /// Total pixel size of all items.
    pub fn logical_extent(&self) -> f64 {
        self.logical_extent
    }

    /// Pixel size given to the host scrollable element.
    pub fn render_size(&self) -> f64 {
        self.render_size
    }

    /// Pixel size of one page in host coordinates.
    pub fn page_size(&self) -> f64 {
        self.page_size
    }

    /// Number of pages (1 when the axis is not paged).
    pub fn page_count(&self) -> usize {
        self.page_count
    }

    /// True if the extent exceeds the ceiling and host positions are remapped.
    pub fn is_paged(&self) -> bool {
        self.page_count > 1
    }

    /// Render offset in effect while `page` is active.
    ///
    /// The first page maps to logical 0 and the last page to
    /// `logical_extent - render_size`; pages in between are spread linearly.
    #[allow(clippy::cast_precision_loss)]
    pub fn page_base_offset(&self, page: usize) -> f64 {
        if !self.is_paged() || page == 0 {
            return 0.0;
        }
        let spare = self.logical_extent - self.render_size;
        if page >= self.page_count - 1 {
            return spare;
        }
        let inner_pages = self.page_count - 3;
        if inner_pages == 0 {
            return 0.0;
        }
        ((page - 1) as f64 * spare / inner_pages as f64).round()
    }

    /// Feed a host scroll position through the axis.
    ///
    /// A position that clamps to the current `scroll_offset` is a no-op; this
    /// is what stops the event raised by re-applying a correction from
    /// looping. Moves of
    /// less than one viewport keep the logical position continuous across a
    /// page change and return the corrected host position. Larger moves pick
    /// the page by interpolating over the host range.
    #[allow(clippy::float_cmp)]
    pub fn on_host_scroll(
        &self,
        state: &AxisScrollState,
        viewport_size: f64,
        render_size: f64,
        requested: f64,
    ) -> AxisScrollOutcome {
        let unchanged = AxisScrollOutcome {
            state: *state,
            correction: None,
        };
        if requested == state.scroll_offset {
            return unchanged;
        }
        if !requested.is_finite() {
            log::warn!("PagedAxis: ignoring non-finite host scroll position {requested}");
            return unchanged;
        }

        let max_scroll = (render_size - viewport_size).max(0.0);
        let mut scroll_offset = requested.clamp(0.0, max_scroll);
        // Overscrolled hosts repeat positions outside the range
        if scroll_offset == state.scroll_offset {
            return unchanged;
        }

        if !self.is_paged() {
            let next = AxisScrollState {
                scroll_offset,
                render_offset: 0.0,
                page: 0,
                scroll_direction: direction(state.logical_offset(), scroll_offset),
            };
            return AxisScrollOutcome {
                state: next,
                correction: None,
            };
        }

        let mut correction = None;
        let (page, render_offset) = if (scroll_offset - state.scroll_offset).abs() < viewport_size
        {
            let logical = scroll_offset + state.render_offset;
            let page = whole_items(logical / self.page_size).min(self.page_count - 1);
            let render_offset = self.page_base_offset(page);
            if page != state.page {
                scroll_offset = (logical - render_offset).clamp(0.0, max_scroll);
                if scroll_offset != requested {
                    log::debug!(
                        "PagedAxis: page {} -> {page}, host scroll {requested} corrected to {scroll_offset}",
                        state.page
                    );
                    correction = Some(scroll_offset);
                }
            }
            (page, render_offset)
        } else {
            let page = self.interpolate_page(scroll_offset);
            log::trace!("PagedAxis: jump to host {scroll_offset}, page {page}");
            (page, self.page_base_offset(page))
        };

        let next = AxisScrollState {
            scroll_offset,
            render_offset,
            page,
            scroll_direction: direction(state.logical_offset(), scroll_offset + render_offset),
        };
        AxisScrollOutcome {
            state: next,
            correction,
        }
    }

    /// Page for a host position reached by a jump, interpolated over the
    /// pages strictly between the first and the last.
    fn interpolate_page(&self, scroll_offset: f64) -> usize {
        let page_size = self.page_size;
        if scroll_offset < page_size {
            return 0;
        }
        if scroll_offset >= self.render_size - page_size {
            return self.page_count - 1;
        }
        let ratio =
            (self.logical_extent - page_size * 2.0) / (self.render_size - page_size * 2.0);
        whole_items((scroll_offset - page_size) * ratio / page_size).min(self.page_count - 3) + 1
    }

    /// State that shows `logical_offset` at the top of the viewport.
    ///
    /// The offset is clamped to `[0, logical_extent - viewport_size]`. The
    /// returned state's `scroll_offset` is the host position to apply.
    pub fn scroll_to(
        &self,
        state: &AxisScrollState,
        logical_offset: f64,
        viewport_size: f64,
    ) -> AxisScrollState {
        let max_logical = (self.logical_extent - viewport_size).max(0.0);
        let target = if logical_offset.is_finite() {
            logical_offset.clamp(0.0, max_logical)
        } else {
            0.0
        };

        let page = if self.is_paged() {
            whole_items(target / self.page_size).min(self.page_count - 1)
        } else {
            0
        };
        let render_offset = self.page_base_offset(page);

        AxisScrollState {
            scroll_offset: target - render_offset,
            render_offset,
            page,
            scroll_direction: direction(state.logical_offset(), target),
        }
    }
}

fn direction(previous_logical: f64, next_logical: f64) -> ScrollDirection {
    if next_logical >= previous_logical {
        ScrollDirection::Forward
    } else {
        ScrollDirection::Backward
    }
}

/// One axis's paging geometry together with its current scroll state.
#[derive(Debug, Clone, PartialEq)]
pub struct PagedAxisWindow {
    axis: PagedAxis,
    state: AxisScrollState,
}

impl PagedAxisWindow {
    /// Create an axis scrolled to the start.
    ///
    /// # Errors
    /// Returns an error if `config` is invalid.
    pub fn new(logical_extent: f64, config: &ScrollConfig) -> Result<Self> {
        Ok(Self {
            axis: PagedAxis::new(logical_extent, config)?,
            state: AxisScrollState::default(),
        })
    }

    /// Paging geometry.
    pub fn axis(&self) -> &PagedAxis {
        &self.axis
    }

    /// Current state.
    pub fn state(&self) -> &AxisScrollState {
        &self.state
    }

    /// Pixel size to give the host scrollable element.
    pub fn render_size(&self) -> f64 {
        self.axis.render_size()
    }

    /// Current true position.
    pub fn logical_offset(&self) -> f64 {
        self.state.logical_offset()
    }

    /// Current page shift.
    pub fn render_offset(&self) -> f64 {
        self.state.render_offset
    }

    /// Apply a host scroll event. See [`PagedAxis::on_host_scroll`].
    pub fn on_host_scroll(
        &mut self,
        viewport_size: f64,
        render_size: f64,
        requested: f64,
    ) -> AxisScrollOutcome {
        let outcome = self
            .axis
            .on_host_scroll(&self.state, viewport_size, render_size, requested);
        self.state = outcome.state;
        outcome
    }

    /// Move to `logical_offset` and return the host scroll position to apply.
    pub fn scroll_to(&mut self, logical_offset: f64, viewport_size: f64) -> f64 {
        self.state = self
            .axis
            .scroll_to(&self.state, logical_offset, viewport_size);
        self.state.scroll_offset
    }

    /// Rebuild the geometry for a new extent, keeping the logical position
    /// as far as the new extent allows. Returns the host position to apply.
    ///
    /// # Errors
    /// Returns an error if `config` is invalid.
    pub fn set_logical_extent(
        &mut self,
        logical_extent: f64,
        viewport_size: f64,
        config: &ScrollConfig,
    ) -> Result<f64> {
        let logical = self.state.logical_offset();
        self.axis = PagedAxis::new(logical_extent, config)?;
        self.state = AxisScrollState {
            scroll_direction: self.state.scroll_direction,
            ..self.axis.scroll_to(&self.state, logical, viewport_size)
        };
        Ok(self.state.scroll_offset)
    }
}
