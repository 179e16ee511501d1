//! Index ↔ pixel translation for one axis.
//!
//! Two layouts are supported:
//! - [`FixedSizeMapping`]: every item has the same size, O(1) in both directions
//! - [`VariableSizeMapping`]: explicit sizes for a prefix of items, a default
//!   size for the rest
//!
//! [`ItemOffsetMapping`] wraps either one so it can be stored by value and
//! deserialized from JSON at the wasm boundary.

mod fixed;
mod variable;

use serde::Deserialize;

use crate::error::{Result, ScrollError};

pub use fixed::FixedSizeMapping;
pub use variable::VariableSizeMapping;

/// Translation between item indices and pixel offsets along one axis.
///
/// `item_offset` is non-decreasing, and for any `x >= 0` with
/// `(i, o) = offset_to_item(x)`: `o == item_offset(i)` and
/// `item_offset(i) <= x < item_offset(i + 1)` whenever item `i` has a
/// non-zero size.
pub trait OffsetMapping {
    /// Size of the item at `index`.
    fn item_size(&self, index: usize) -> f64;

    /// Total size of all items before `index`.
    fn item_offset(&self, index: usize) -> f64;

    /// Item containing `offset`, with that item's own offset.
    ///
    /// Returns `(0, 0.0)` for offsets at or below zero and extrapolates
    /// past the last known item.
    fn offset_to_item(&self, offset: f64) -> (usize, f64);
}

impl<M: OffsetMapping + ?Sized> OffsetMapping for &M {
    fn item_size(&self, index: usize) -> f64 {
        (**self).item_size(index)
    }

    fn item_offset(&self, index: usize) -> f64 {
        (**self).item_offset(index)
    }

    fn offset_to_item(&self, offset: f64) -> (usize, f64) {
        (**self).offset_to_item(offset)
    }
}

/// Either mapping, stored by value.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(try_from = "MappingSpec")]
pub enum ItemOffsetMapping {
    /// Uniform item size
    Fixed(FixedSizeMapping),
    /// Explicit sizes with a default
    Variable(VariableSizeMapping),
}

impl ItemOffsetMapping {
    /// Uniform mapping.
    ///
    /// # Errors
    /// Returns an error if `size` is not positive and finite.
    pub fn fixed(size: f64) -> Result<Self> {
        FixedSizeMapping::new(size).map(Self::Fixed)
    }

    /// Mapping with explicit sizes for the first `sizes.len()` items.
    ///
    /// # Errors
    /// Returns an error if `default_size` is not positive and finite or an
    /// explicit size is negative or not finite.
    pub fn variable(default_size: f64, sizes: Vec<f64>) -> Result<Self> {
        VariableSizeMapping::new(default_size, sizes).map(Self::Variable)
    }

    /// Total size of the first `count` items.
    pub fn extent(&self, count: usize) -> f64 {
        self.item_offset(count)
    }
}

impl OffsetMapping for ItemOffsetMapping {
    fn item_size(&self, index: usize) -> f64 {
        match self {
            Self::Fixed(m) => m.item_size(index),
            Self::Variable(m) => m.item_size(index),
        }
    }

    fn item_offset(&self, index: usize) -> f64 {
        match self {
            Self::Fixed(m) => m.item_offset(index),
            Self::Variable(m) => m.item_offset(index),
        }
    }

    fn offset_to_item(&self, offset: f64) -> (usize, f64) {
        match self {
            Self::Fixed(m) => m.offset_to_item(offset),
            Self::Variable(m) => m.offset_to_item(offset),
        }
    }
}

/// Wire form of [`ItemOffsetMapping`].
///
/// ```json
/// { "kind": "fixed", "size": 30 }
/// { "kind": "variable", "defaultSize": 100, "sizes": [160, 40] }
/// ```
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum MappingSpec {
    /// Uniform item size
    Fixed {
        /// Size of every item
        size: f64,
    },
    /// Explicit sizes with a default
    Variable {
        /// Size of items without an explicit entry
        #[serde(rename = "defaultSize")]
        default_size: f64,
        /// Explicit sizes for the leading items
        #[serde(default)]
        sizes: Vec<f64>,
    },
}

impl TryFrom<MappingSpec> for ItemOffsetMapping {
    type Error = ScrollError;

    fn try_from(spec: MappingSpec) -> Result<Self> {
        match spec {
            MappingSpec::Fixed { size } => Self::fixed(size),
            MappingSpec::Variable {
                default_size,
                sizes,
            } => Self::variable(default_size, sizes),
        }
    }
}

fn check_positive(what: &str, size: f64) -> Result<()> {
    if size.is_finite() && size > 0.0 {
        Ok(())
    } else {
        Err(ScrollError::InvalidItemSize(format!(
            "{what} must be positive and finite, got {size}"
        )))
    }
}

/// Whole number of items covered by a non-negative pixel quotient.
///
/// Saturates at `usize::MAX` for quotients past the addressable range.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub(crate) fn whole_items(quotient: f64) -> usize {
    if quotient.is_nan() || quotient <= 0.0 {
        0
    } else {
        quotient.floor() as usize
    }
}
