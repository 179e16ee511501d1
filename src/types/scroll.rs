//! Per-axis scroll state and host-facing scroll results.

use serde::{Deserialize, Serialize};

/// Direction of the most recent scroll along an axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScrollDirection {
    /// Logical offset increased or stayed put
    #[default]
    Forward,
    /// Logical offset decreased
    Backward,
}

/// Mutable scroll state of one paged axis.
///
/// `scroll_offset` is what the host element shows; `render_offset` is the
/// shift of the active page. Their sum is the true logical offset.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AxisScrollState {
    /// Host-visible scroll position
    pub scroll_offset: f64,
    /// Logical-to-render shift of the active page
    pub render_offset: f64,
    /// Active page index
    pub page: usize,
    /// Direction of the last transition
    pub scroll_direction: ScrollDirection,
}

impl AxisScrollState {
    /// True position within the full logical extent.
    pub fn logical_offset(&self) -> f64 {
        self.scroll_offset + self.render_offset
    }
}

/// Result of feeding one host scroll position through a paged axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisScrollOutcome {
    /// State after the transition
    pub state: AxisScrollState,
    /// Host scroll position the caller must re-apply, if the page changed
    /// under a local scroll
    pub correction: Option<f64>,
}

/// How `scroll_to_area` treats targets that are already on screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScrollMode {
    /// Scroll only if the target is not already fully visible
    Visible,
    /// Always scroll the target to the start of the viewport
    #[default]
    #[serde(other)]
    Start,
}

/// Logical extent of a scroll target along one axis
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Span {
    /// Logical offset of the target's leading edge
    pub offset: f64,
    /// Size of the target
    pub size: f64,
}

impl Span {
    /// Target of `size` pixels starting at `offset`.
    pub fn new(offset: f64, size: f64) -> Self {
        Self { offset, size }
    }

    /// Logical offset just past the target.
    pub fn end(&self) -> f64 {
        self.offset + self.size
    }
}

/// Host scroll positions to apply after a scroll event or request.
///
/// `None` on an axis means the host position for that axis is already right.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HostScroll {
    /// Corrected `scrollLeft`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub left: Option<f64>,
    /// Corrected `scrollTop`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top: Option<f64>,
}

impl HostScroll {
    /// No host update needed.
    pub const NONE: HostScroll = HostScroll {
        left: None,
        top: None,
    };

    /// True if neither axis needs updating.
    pub fn is_empty(&self) -> bool {
        self.left.is_none() && self.top.is_none()
    }
}

/// What a grid reports to its consumer after each handled scroll event.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScrollSnapshot {
    /// Logical vertical offset
    pub row_offset: f64,
    /// Logical horizontal offset
    pub column_offset: f64,
    /// Row axis state
    pub row_state: AxisScrollState,
    /// Column axis state
    pub column_state: AxisScrollState,
}
