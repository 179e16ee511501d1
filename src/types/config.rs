//! Engine configuration shared by every axis.

use serde::{Deserialize, Serialize};

use crate::error::{Result, ScrollError};

/// Default host pixel ceiling for a scrollable element.
pub const DEFAULT_MAX_RENDER_SIZE: f64 = 6_000_000.0;

/// Default number of pages a paged axis is split into.
pub const DEFAULT_TARGET_PAGE_COUNT: usize = 100;

/// Smallest page count for which jump interpolation is well defined.
pub const MIN_PAGE_COUNT: usize = 3;

/// Extra items materialized outside the strictly visible range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Overscan {
    /// Items kept before the first visible item
    #[serde(default = "default_overscan")]
    pub leading: usize,
    /// Items kept after the last visible item
    #[serde(default = "default_overscan")]
    pub trailing: usize,
}

fn default_overscan() -> usize {
    1
}

impl Default for Overscan {
    fn default() -> Self {
        Self {
            leading: 1,
            trailing: 1,
        }
    }
}

impl Overscan {
    /// No overscan on either side.
    pub const NONE: Overscan = Overscan {
        leading: 0,
        trailing: 0,
    };
}

/// Configuration for paging and windowing.
///
/// Every field is optional when deserialized, so a JS caller may pass `{}`
/// or any subset.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScrollConfig {
    /// Largest pixel size handed to the host scrollable element
    #[serde(default = "default_max_render_size")]
    pub max_render_size: f64,
    /// Page count hint used when the logical extent exceeds `max_render_size`
    #[serde(default = "default_target_page_count")]
    pub target_page_count: usize,
    /// Overscan around the visible range
    #[serde(default)]
    pub overscan: Overscan,
}

fn default_max_render_size() -> f64 {
    DEFAULT_MAX_RENDER_SIZE
}

fn default_target_page_count() -> usize {
    DEFAULT_TARGET_PAGE_COUNT
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            max_render_size: DEFAULT_MAX_RENDER_SIZE,
            target_page_count: DEFAULT_TARGET_PAGE_COUNT,
            overscan: Overscan::default(),
        }
    }
}

impl ScrollConfig {
    /// Set the host pixel ceiling.
    #[must_use]
    pub fn with_max_render_size(mut self, max_render_size: f64) -> Self {
        self.max_render_size = max_render_size;
        self
    }

    /// Set the target page count.
    #[must_use]
    pub fn with_target_page_count(mut self, target_page_count: usize) -> Self {
        self.target_page_count = target_page_count;
        self
    }

    /// Set the overscan.
    #[must_use]
    pub fn with_overscan(mut self, overscan: Overscan) -> Self {
        self.overscan = overscan;
        self
    }

    /// Reject configurations that would make paging undefined.
    ///
    /// # Errors
    /// Returns [`ScrollError::InvalidConfig`] if the ceiling is not a positive
    /// finite number or the page count is below [`MIN_PAGE_COUNT`].
    pub fn validate(&self) -> Result<()> {
        if !self.max_render_size.is_finite() || self.max_render_size <= 0.0 {
            return Err(ScrollError::InvalidConfig(format!(
                "max_render_size must be positive and finite, got {}",
                self.max_render_size
            )));
        }
        if self.target_page_count < MIN_PAGE_COUNT {
            return Err(ScrollError::InvalidConfig(format!(
                "target_page_count must be at least {MIN_PAGE_COUNT}, got {}",
                self.target_page_count
            )));
        }
        Ok(())
    }
}
