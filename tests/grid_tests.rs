//! Grid and list composition tests
//!
//! Two independently paged axes behind one host element, programmatic
//! scrolling, and the render output consumed by the rendering layer.

#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::float_cmp,
    clippy::panic
)]

use virtual_scroll::{
    grid_item_key, HostScroll, ItemOffsetMapping, ListLayout, ScrollConfig, ScrollMode, Span,
    VirtualGrid, VirtualList,
};

const WIDTH: f64 = 1_000.0;
const HEIGHT: f64 = 800.0;

/// 500,000 rows of 20px (10M logical, paged) by 50 columns of 100px
fn paged_grid() -> VirtualGrid {
    let mut grid = VirtualGrid::new(
        500_000,
        ItemOffsetMapping::fixed(20.0).unwrap(),
        50,
        ItemOffsetMapping::fixed(100.0).unwrap(),
        ScrollConfig::default(),
    )
    .unwrap();
    grid.set_viewport_size(WIDTH, HEIGHT);
    grid
}

// =============================================================================
// HOST SCROLL
// =============================================================================

#[test]
fn test_render_size_and_logical_size() {
    let grid = paged_grid();
    assert_eq!(grid.logical_size(), (5_000.0, 10_000_000.0));
    assert_eq!(grid.render_width(), 5_000.0);
    assert_eq!(grid.render_height(), 6_000_000.0);
}

#[test]
fn test_correction_carries_both_axes() {
    let mut grid = paged_grid();
    assert!(grid.on_host_scroll(WIDTH, HEIGHT, 250.0, 0.0).is_empty());

    let mut top = 0.0;
    let correction = loop {
        top += 500.0;
        let correction = grid.on_host_scroll(WIDTH, HEIGHT, 250.0, top);
        if !correction.is_empty() {
            break correction;
        }
    };

    assert_eq!(top, 120_000.0);
    assert_eq!(
        correction,
        HostScroll {
            left: Some(250.0),
            top: Some(95_460.0),
        }
    );
    assert_eq!(grid.snapshot().row_offset, 120_000.0);
    assert_eq!(grid.snapshot().column_offset, 250.0);

    // The echo of the correction changes nothing
    let before = grid.snapshot();
    assert!(grid.on_host_scroll(WIDTH, HEIGHT, 250.0, 95_460.0).is_empty());
    assert_eq!(grid.snapshot(), before);
}

#[test]
fn test_axes_are_independent() {
    let mut grid = paged_grid();
    grid.on_host_scroll(WIDTH, HEIGHT, 0.0, 3_000_000.0);
    let rows_before = *grid.row_state();
    grid.on_host_scroll(WIDTH, HEIGHT, 3_000.0, 3_000_000.0);
    assert_eq!(*grid.row_state(), rows_before);
    assert_eq!(grid.column_state().scroll_offset, 3_000.0);
    assert_eq!(grid.column_state().render_offset, 0.0);
}

// =============================================================================
// PROGRAMMATIC SCROLL
// =============================================================================

#[test]
fn test_scroll_to_area_visible_is_noop_when_shown() {
    let mut grid = paged_grid();
    grid.on_host_scroll(WIDTH, HEIGHT, 0.0, 3_000.0);
    let before = grid.snapshot();

    let scroll = grid.scroll_to_area(
        Some(Span::new(3_100.0, 40.0)),
        Some(Span::new(120.0, 50.0)),
        ScrollMode::Visible,
    );
    assert_eq!(scroll, HostScroll::NONE);
    assert_eq!(grid.snapshot(), before);
}

#[test]
fn test_scroll_to_area_visible_aligns_end() {
    let mut grid = paged_grid();
    grid.on_host_scroll(WIDTH, HEIGHT, 0.0, 3_000.0);

    let scroll = grid.scroll_to_area(Some(Span::new(5_000.0, 40.0)), None, ScrollMode::Visible);
    assert_eq!(
        scroll,
        HostScroll {
            left: None,
            top: Some(4_240.0),
        }
    );
    assert_eq!(grid.snapshot().row_offset, 4_240.0);
}

#[test]
fn test_scroll_to_area_start_always_scrolls() {
    let mut grid = paged_grid();
    grid.on_host_scroll(WIDTH, HEIGHT, 0.0, 3_000.0);

    let scroll = grid.scroll_to_area(Some(Span::new(3_100.0, 40.0)), None, ScrollMode::Start);
    assert_eq!(scroll.top, Some(3_100.0));
    assert_eq!(scroll.left, None);
    assert_eq!(grid.snapshot().row_offset, 3_100.0);
}

#[test]
fn test_scroll_to_last_cell() {
    let mut grid = paged_grid();
    let scroll = grid.scroll_to_item(Some(499_999), Some(49), ScrollMode::Start);
    assert_eq!(
        scroll,
        HostScroll {
            left: Some(4_000.0),
            top: Some(5_999_200.0),
        }
    );
    assert_eq!(grid.snapshot().row_offset, 10_000_000.0 - HEIGHT);
    assert_eq!(grid.row_state().page, 165);

    // Rendered rows end exactly at the bottom of the host element
    let window = grid.window();
    assert_eq!(window.start_row_index, 499_959);
    assert_eq!(window.row_offsets[0], 5_999_180.0);
    let last = window.row_offsets.len() - 1;
    assert_eq!(
        window.row_offsets[last] + window.rendered_row_sizes[last],
        grid.render_height()
    );
}

#[test]
fn test_scroll_to_item_out_of_range_clamps() {
    let mut grid = paged_grid();
    let scroll = grid.scroll_to_item(Some(10_000_000), None, ScrollMode::Start);
    assert_eq!(scroll.top, Some(5_999_200.0));
    assert_eq!(scroll.left, None);
}

#[test]
fn test_scroll_to_leaves_absent_axis() {
    let mut grid = paged_grid();
    grid.on_host_scroll(WIDTH, HEIGHT, 700.0, 0.0);
    let scroll = grid.scroll_to(Some(7_777_777.0), None);
    assert_eq!(scroll.left, None);
    assert_eq!(grid.snapshot().column_offset, 700.0);
    assert_eq!(grid.snapshot().row_offset, 7_777_777.0);
}

#[test]
fn test_set_item_counts_clamps_position() {
    let mut grid = paged_grid();
    grid.scroll_to(Some(5_000_000.0), Some(4_000.0));

    let scroll = grid.set_item_counts(100, 50).unwrap();
    assert_eq!(
        scroll,
        HostScroll {
            left: Some(4_000.0),
            top: Some(1_200.0),
        }
    );
    assert_eq!(grid.row_count(), 100);
    assert_eq!(grid.render_height(), 2_000.0);
}

// =============================================================================
// RENDER OUTPUT
// =============================================================================

#[test]
fn test_window_cells() {
    let mut grid = paged_grid();
    grid.on_host_scroll(WIDTH, HEIGHT, 0.0, 0.0);
    let window = grid.window();

    // 40 rows + 1 overscan, 10 columns + 1 overscan
    assert_eq!(window.rendered_row_sizes.len(), 41);
    assert_eq!(window.rendered_column_sizes.len(), 11);
    assert_eq!(window.row_template.as_deref(), Some("repeat(41,20px)"));

    let cells: Vec<_> = window.cells().collect();
    assert_eq!(cells.len(), 41 * 11);
    assert_eq!(cells[12], (1, 1, 20.0, 100.0, 20.0, 100.0));
    assert_eq!(grid_item_key(cells[12].0, cells[12].1), "1:1");
}

#[test]
fn test_window_serializes_camel_case() {
    let mut grid = paged_grid();
    grid.on_host_scroll(WIDTH, HEIGHT, 0.0, 0.0);
    let json = serde_json::to_value(grid.window()).unwrap();
    assert_eq!(json["startRowIndex"], 0);
    assert_eq!(json["renderHeight"], 6_000_000.0);
    assert!(json["renderedColumnSizes"].is_array());
}

// =============================================================================
// LISTS
// =============================================================================

#[test]
fn test_horizontal_list_uses_scroll_left() {
    let mut list = VirtualList::new(
        1_000,
        ItemOffsetMapping::fixed(30.0).unwrap(),
        ListLayout::Horizontal,
        ScrollConfig::default(),
    )
    .unwrap();

    assert!(list.on_host_scroll(300.0, 50.0, 3_000.0, 999.0).is_empty());
    assert_eq!(list.offset(), 3_000.0);
    let window = list.window();
    assert_eq!(window.start_index, 99);
    assert_eq!(window.offsets[0], 2_970.0);

    let scroll = list.scroll_to_item(500, ScrollMode::Start);
    assert_eq!(
        scroll,
        HostScroll {
            left: Some(15_000.0),
            top: None,
        }
    );
}

#[test]
fn test_paged_vertical_list() {
    let mut list = VirtualList::new(
        1_000_000,
        ItemOffsetMapping::fixed(10.0).unwrap(),
        ListLayout::Vertical,
        ScrollConfig::default(),
    )
    .unwrap();
    assert_eq!(list.render_size(), 6_000_000.0);

    assert!(list.on_host_scroll(400.0, HEIGHT, 0.0, 3_000_000.0).is_empty());
    assert_eq!(list.state().page, 83);
    assert_eq!(list.offset(), 5_012_270.0);

    let window = list.window();
    // Item 501,227 starts at the top of the viewport; one overscan above it
    assert_eq!(window.start_index, 501_226);
    assert_eq!(window.offsets[0], 2_999_990.0);
    assert_eq!(window.template.as_deref(), Some("repeat(82,10px)"));
}
