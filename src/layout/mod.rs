//! Windowing engine for computing which items to materialize and where.
//!
//! This module handles:
//! - Paging logical extents that exceed the host's scrollable pixel limit
//! - Selecting the contiguous item window for a visible range
//! - Run-length encoding window sizes for compact layout descriptions

mod item_window;
mod paged_axis;
mod size_runs;

pub use item_window::{visible_window, ViewportWindower};
pub use paged_axis::{PagedAxis, PagedAxisWindow};
pub use size_runs::{SizeRun, SizeRuns};
