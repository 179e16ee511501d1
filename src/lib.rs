//! virtual-scroll - windowing engine for virtualized lists and grids
//!
//! Renders only the visible slice of an arbitrarily large collection while
//! the host shows a single, natively scrollable surface:
//! - Index ↔ pixel mapping for fixed and variable item sizes
//! - Paging of extents beyond the browser's scrollable pixel limit
//! - Minimal item windows with overscan
//! - Scroll synchronization with correction of the host position
//! - Deterministic replay of scripted host scroll scenarios
//!
//! # Usage (Rust)
//!
//! ```
//! use virtual_scroll::{ItemOffsetMapping, ScrollConfig, VirtualGrid};
//!
//! let mut grid = VirtualGrid::new(
//!     10_000_000,
//!     ItemOffsetMapping::fixed(20.0)?,
//!     100,
//!     ItemOffsetMapping::fixed(80.0)?,
//!     ScrollConfig::default(),
//! )?;
//! let correction = grid.on_host_scroll(800.0, 600.0, 0.0, 3_000_000.0);
//! assert!(correction.is_empty());
//! let window = grid.window();
//! assert!(window.start_row_index > 0);
//! # Ok::<(), virtual_scroll::error::ScrollError>(())
//! ```
//!
//! # Usage (JavaScript)
//!
//! ```javascript
//! import init, { WebVirtualGrid } from 'virtual-scroll';
//! await init();
//! const grid = new WebVirtualGrid(container, 1e6, { kind: 'fixed', size: 20 },
//!                                 100, { kind: 'fixed', size: 80 });
//! grid.set_render_callback(({ window }) => draw(window));
//! ```

pub mod error;
pub mod layout;
pub mod mapping;
pub mod replay;
pub mod types;
pub mod viewer;

use wasm_bindgen::prelude::*;

pub use error::{Result, ScrollError};
pub use layout::{visible_window, PagedAxis, PagedAxisWindow, SizeRuns, ViewportWindower};
pub use mapping::{FixedSizeMapping, ItemOffsetMapping, OffsetMapping, VariableSizeMapping};
pub use types::*;
pub use viewer::{ListLayout, ScrollActivity, ScrollHost, SimulatedHost, VirtualGrid, VirtualList};

#[cfg(target_arch = "wasm32")]
pub use viewer::WebVirtualGrid;

/// Compute the item window for one axis from JS-friendly inputs.
///
/// `mapping` uses the wire form of [`ItemOffsetMapping`].
///
/// # Errors
/// Returns an error if `mapping` is malformed.
#[wasm_bindgen]
pub fn compute_window(
    item_count: usize,
    mapping: JsValue,
    viewport_size: f64,
    visible_offset: f64,
) -> std::result::Result<JsValue, JsValue> {
    let mapping: ItemOffsetMapping = serde_wasm_bindgen::from_value(mapping)?;
    let window = visible_window(item_count, &mapping, viewport_size, visible_offset);
    serde_wasm_bindgen::to_value(&window)
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {e}")))
}

/// Get the library version
#[must_use]
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
