//! Selection of the items that must be materialized for a visible range.

use crate::mapping::OffsetMapping;
use crate::types::{ItemWindow, Overscan};

/// Computes the contiguous run of items covering a viewport, plus overscan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ViewportWindower {
    overscan: Overscan,
}

impl ViewportWindower {
    /// Windower with the given overscan.
    pub fn new(overscan: Overscan) -> Self {
        Self { overscan }
    }

    /// Configured overscan.
    pub fn overscan(&self) -> Overscan {
        self.overscan
    }

    /// Items covering `[visible_offset, visible_offset + viewport_size)`.
    ///
    /// Laid end to end from `start_offset`, the returned sizes cover the
    /// requested range unless `item_count` runs out first. A negative
    /// `visible_offset` shrinks the viewport by that amount; an empty item
    /// set or empty viewport yields an empty window.
    pub fn window<M: OffsetMapping + ?Sized>(
        &self,
        item_count: usize,
        mapping: &M,
        viewport_size: f64,
        visible_offset: f64,
    ) -> ItemWindow {
        if item_count == 0 {
            return ItemWindow::empty();
        }

        let (mut visible_offset, mut viewport_size) = (visible_offset, viewport_size);
        if visible_offset < 0.0 {
            viewport_size += visible_offset;
            visible_offset = 0.0;
        }
        if viewport_size.is_nan() || viewport_size <= 0.0 || !visible_offset.is_finite() {
            return ItemWindow::empty();
        }

        let last = item_count - 1;
        let (found, found_offset) = mapping.offset_to_item(visible_offset);
        let mut index = found.min(last);
        let mut start_offset = if found > last {
            mapping.item_offset(index)
        } else {
            found_offset
        };

        for _ in 0..self.overscan.leading {
            if index == 0 {
                break;
            }
            index -= 1;
            start_offset -= mapping.item_size(index);
        }
        let start_index = index;

        let visible_end = visible_offset + viewport_size;
        let mut end_offset = start_offset;
        let mut sizes = Vec::new();
        while end_offset < visible_end && index < item_count {
            let size = mapping.item_size(index);
            sizes.push(size);
            end_offset += size;
            index += 1;
        }
        for _ in 0..self.overscan.trailing {
            if index >= item_count {
                break;
            }
            let size = mapping.item_size(index);
            sizes.push(size);
            end_offset += size;
            index += 1;
        }

        ItemWindow {
            start_index,
            start_offset,
            total_size: end_offset - start_offset,
            sizes,
        }
    }
}

/// [`ViewportWindower::window`] with the default one-item overscan.
pub fn visible_window<M: OffsetMapping + ?Sized>(
    item_count: usize,
    mapping: &M,
    viewport_size: f64,
    visible_offset: f64,
) -> ItemWindow {
    ViewportWindower::default().window(item_count, mapping, viewport_size, visible_offset)
}
