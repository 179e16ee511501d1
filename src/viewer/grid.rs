//! Two-dimensional virtualization from two independent axes.

use super::axis::ScrollAxis;
use crate::error::Result;
use crate::layout::{SizeRuns, ViewportWindower};
use crate::mapping::{ItemOffsetMapping, OffsetMapping};
use crate::types::{
    AxisScrollState, GridWindow, HostScroll, ScrollConfig, ScrollMode, ScrollSnapshot, Span,
};

/// Grid of `row_count` × `column_count` cells whose rows and columns are
/// paged and windowed independently.
#[derive(Debug, Clone)]
pub struct VirtualGrid<M = ItemOffsetMapping> {
    config: ScrollConfig,
    windower: ViewportWindower,
    rows: ScrollAxis<M>,
    columns: ScrollAxis<M>,
}

impl<M: OffsetMapping> VirtualGrid<M> {
    /// Create a grid scrolled to the top-left corner.
    ///
    /// # Errors
    /// Returns an error if `config` is invalid.
    pub fn new(
        row_count: usize,
        row_mapping: M,
        column_count: usize,
        column_mapping: M,
        config: ScrollConfig,
    ) -> Result<Self> {
        Ok(Self {
            config,
            windower: ViewportWindower::new(config.overscan),
            rows: ScrollAxis::new(row_count, row_mapping, &config)?,
            columns: ScrollAxis::new(column_count, column_mapping, &config)?,
        })
    }

    /// Active configuration.
    pub fn config(&self) -> &ScrollConfig {
        &self.config
    }

    /// Number of rows.
    pub fn row_count(&self) -> usize {
        self.rows.item_count()
    }

    /// Number of columns.
    pub fn column_count(&self) -> usize {
        self.columns.item_count()
    }

    /// Row size mapping.
    pub fn row_mapping(&self) -> &M {
        self.rows.mapping()
    }

    /// Column size mapping.
    pub fn column_mapping(&self) -> &M {
        self.columns.mapping()
    }

    /// Total logical `(width, height)`.
    pub fn logical_size(&self) -> (f64, f64) {
        (self.columns.logical_extent(), self.rows.logical_extent())
    }

    /// Width to give the host scrollable content.
    pub fn render_width(&self) -> f64 {
        self.columns.render_size()
    }

    /// Height to give the host scrollable content.
    pub fn render_height(&self) -> f64 {
        self.rows.render_size()
    }

    /// Last known viewport `(width, height)`.
    pub fn viewport_size(&self) -> (f64, f64) {
        (self.columns.viewport_size(), self.rows.viewport_size())
    }

    /// Record a new viewport size (resize notification).
    pub fn set_viewport_size(&mut self, width: f64, height: f64) {
        self.columns.set_viewport_size(width);
        self.rows.set_viewport_size(height);
    }

    /// Row axis state.
    pub fn row_state(&self) -> &AxisScrollState {
        self.rows.state()
    }

    /// Column axis state.
    pub fn column_state(&self) -> &AxisScrollState {
        self.columns.state()
    }

    /// Current logical offsets and axis states.
    pub fn snapshot(&self) -> ScrollSnapshot {
        ScrollSnapshot {
            row_offset: self.rows.logical_offset(),
            column_offset: self.columns.logical_offset(),
            row_state: *self.rows.state(),
            column_state: *self.columns.state(),
        }
    }

    /// Handle a host scroll event.
    ///
    /// Both axes are updated independently. If either one needs its host
    /// position corrected, both positions are returned so the host can apply
    /// them in a single call.
    pub fn on_host_scroll(
        &mut self,
        viewport_width: f64,
        viewport_height: f64,
        scroll_left: f64,
        scroll_top: f64,
    ) -> HostScroll {
        let rows = self.rows.on_host_scroll(viewport_height, scroll_top);
        let columns = self.columns.on_host_scroll(viewport_width, scroll_left);

        if rows.correction.is_none() && columns.correction.is_none() {
            return HostScroll::NONE;
        }
        HostScroll {
            left: Some(columns.correction.unwrap_or(scroll_left)),
            top: Some(rows.correction.unwrap_or(scroll_top)),
        }
    }

    /// Scroll to logical offsets; an absent offset leaves that axis alone.
    pub fn scroll_to(&mut self, row_offset: Option<f64>, column_offset: Option<f64>) -> HostScroll {
        HostScroll {
            left: column_offset.map(|offset| self.columns.scroll_to(offset)),
            top: row_offset.map(|offset| self.rows.scroll_to(offset)),
        }
    }

    /// Bring a logical area into view.
    ///
    /// With [`ScrollMode::Visible`], an axis whose range is already fully
    /// visible is left alone.
    pub fn scroll_to_area(
        &mut self,
        row_span: Option<Span>,
        column_span: Option<Span>,
        mode: ScrollMode,
    ) -> HostScroll {
        let row_target = self.rows.area_target(row_span, mode);
        let column_target = self.columns.area_target(column_span, mode);
        self.scroll_to(row_target, column_target)
    }

    /// Bring a cell (or a whole row / column) into view.
    pub fn scroll_to_item(
        &mut self,
        row: Option<usize>,
        column: Option<usize>,
        mode: ScrollMode,
    ) -> HostScroll {
        let row_span = row.map(|index| self.rows.item_span(index));
        let column_span = column.map(|index| self.columns.item_span(index));
        self.scroll_to_area(row_span, column_span, mode)
    }

    /// Change the item counts, keeping the logical position where possible.
    ///
    /// # Errors
    /// Returns an error if the configuration is invalid.
    pub fn set_item_counts(&mut self, row_count: usize, column_count: usize) -> Result<HostScroll> {
        let top = self.rows.set_item_count(row_count, &self.config)?;
        let left = self.columns.set_item_count(column_count, &self.config)?;
        Ok(HostScroll {
            left: Some(left),
            top: Some(top),
        })
    }

    /// Cells to materialize for the current viewport and scroll position.
    pub fn window(&self) -> GridWindow {
        let rows = self.rows.window(&self.windower);
        let columns = self.columns.window(&self.windower);

        GridWindow {
            start_row_index: rows.start_index,
            start_column_index: columns.start_index,
            row_offsets: rows.positions(self.rows.render_offset()),
            column_offsets: columns.positions(self.columns.render_offset()),
            row_template: SizeRuns::compress(&rows.sizes).to_grid_template(),
            column_template: SizeRuns::compress(&columns.sizes).to_grid_template(),
            rendered_row_sizes: rows.sizes,
            rendered_column_sizes: columns.sizes,
            render_width: self.render_width(),
            render_height: self.render_height(),
        }
    }
}
