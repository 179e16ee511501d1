//! Materialized item windows handed to the rendering layer.

use serde::{Deserialize, Serialize};

/// Contiguous run of items that covers a visible pixel range on one axis.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemWindow {
    /// Index of the first materialized item (overscan included)
    pub start_index: usize,
    /// Logical offset of the first materialized item
    pub start_offset: f64,
    /// Sum of `sizes`
    pub total_size: f64,
    /// Size of every materialized item, in order
    pub sizes: Vec<f64>,
}

impl ItemWindow {
    /// Window with no items.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Number of materialized items.
    pub fn len(&self) -> usize {
        self.sizes.len()
    }

    /// True if no items are materialized.
    pub fn is_empty(&self) -> bool {
        self.sizes.is_empty()
    }

    /// One past the last materialized index.
    pub fn end_index(&self) -> usize {
        self.start_index + self.sizes.len()
    }

    /// Logical offset just past the last materialized item.
    pub fn end_offset(&self) -> f64 {
        self.start_offset + self.total_size
    }

    /// Indices of the materialized items.
    pub fn indices(&self) -> std::ops::Range<usize> {
        self.start_index..self.end_index()
    }

    /// Position of each item once shifted into render space.
    ///
    /// `render_offset` is the active page shift of the axis.
    pub fn positions(&self, render_offset: f64) -> Vec<f64> {
        let mut position = self.start_offset - render_offset;
        self.sizes
            .iter()
            .map(|size| {
                let current = position;
                position += size;
                current
            })
            .collect()
    }
}

/// Output of a 1-D list for one render.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListWindow {
    /// First materialized item
    pub start_index: usize,
    /// Render-space position of each materialized item
    pub offsets: Vec<f64>,
    /// Size of each materialized item
    pub sizes: Vec<f64>,
    /// Size of the host scrollable element along the list axis
    pub render_size: f64,
    /// Compact CSS grid track list for `sizes`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template: Option<String>,
}

/// Output of a 2-D grid for one render.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GridWindow {
    /// First materialized row
    pub start_row_index: usize,
    /// First materialized column
    pub start_column_index: usize,
    /// Render-space top of each materialized row
    pub row_offsets: Vec<f64>,
    /// Render-space left of each materialized column
    pub column_offsets: Vec<f64>,
    /// Height of each materialized row
    pub rendered_row_sizes: Vec<f64>,
    /// Width of each materialized column
    pub rendered_column_sizes: Vec<f64>,
    /// Width of the host scrollable element
    pub render_width: f64,
    /// Height of the host scrollable element
    pub render_height: f64,
    /// Compact CSS `grid-template-rows`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub row_template: Option<String>,
    /// Compact CSS `grid-template-columns`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub column_template: Option<String>,
}

impl GridWindow {
    /// Visit every materialized cell as `(row, column, top, left, height, width)`.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize, f64, f64, f64, f64)> + '_ {
        self.row_offsets
            .iter()
            .zip(&self.rendered_row_sizes)
            .enumerate()
            .flat_map(move |(r, (&top, &height))| {
                self.column_offsets
                    .iter()
                    .zip(&self.rendered_column_sizes)
                    .enumerate()
                    .map(move |(c, (&left, &width))| {
                        (
                            self.start_row_index + r,
                            self.start_column_index + c,
                            top,
                            left,
                            height,
                            width,
                        )
                    })
            })
    }
}

/// Default key for a grid cell.
pub fn grid_item_key(row: usize, column: usize) -> String {
    format!("{row}:{column}")
}

/// Default key for a list item.
pub fn list_item_key(index: usize) -> String {
    index.to_string()
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp, clippy::indexing_slicing)]
mod tests {
    use super::*;

    #[test]
    fn test_positions_shift_by_render_offset() {
        let window = ItemWindow {
            start_index: 4,
            start_offset: 1_000.0,
            total_size: 90.0,
            sizes: vec![30.0, 20.0, 40.0],
        };
        assert_eq!(window.positions(0.0), vec![1_000.0, 1_030.0, 1_050.0]);
        assert_eq!(window.positions(900.0), vec![100.0, 130.0, 150.0]);
        assert_eq!(window.indices(), 4..7);
        assert_eq!(window.end_offset(), 1_090.0);
    }

    #[test]
    fn test_grid_cells_row_major() {
        let window = GridWindow {
            start_row_index: 10,
            start_column_index: 2,
            row_offsets: vec![0.0, 20.0],
            column_offsets: vec![5.0, 69.0],
            rendered_row_sizes: vec![20.0, 20.0],
            rendered_column_sizes: vec![64.0, 64.0],
            ..GridWindow::default()
        };
        let cells: Vec<_> = window.cells().collect();
        assert_eq!(cells.len(), 4);
        assert_eq!(cells[0], (10, 2, 0.0, 5.0, 20.0, 64.0));
        assert_eq!(cells[3], (11, 3, 20.0, 69.0, 20.0, 64.0));
    }

    #[test]
    fn test_default_keys() {
        assert_eq!(grid_item_key(3, 7), "3:7");
        assert_eq!(list_item_key(42), "42");
    }
}
