//! Composed viewers built on the windowing engine.
//!
//! This module provides:
//! - [`VirtualGrid`]: rows and columns paged and windowed independently
//! - [`VirtualList`]: the single-axis case, vertical or horizontal
//! - The scroll synchronization protocol between a viewer and its host
//!   container ([`ScrollHost`], [`SimulatedHost`])
//! - [`ScrollActivity`], the is-scrolling indicator
//! - `WebVirtualGrid` (wasm32 only), the DOM binding exported to JavaScript

mod activity;
mod axis;
mod grid;
mod list;
mod scroll;
#[cfg(target_arch = "wasm32")]
mod web;

pub use activity::{ScrollActivity, SCROLL_END_FALLBACK_TIMEOUT, SCROLL_IDLE_TIMEOUT};
pub use grid::VirtualGrid;
pub use list::{ListLayout, VirtualList};
pub use scroll::{apply_host_scroll, dispatch_pending, ScrollHost, SimulatedHost};
#[cfg(target_arch = "wasm32")]
pub use web::WebVirtualGrid;
