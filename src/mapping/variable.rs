//! Explicit sizes for leading items, a default size for the rest.

use super::{check_positive, whole_items, OffsetMapping};
use crate::error::{Result, ScrollError};

/// Items `0..sizes.len()` use their explicit size, all later items use the
/// default size.
///
/// Offsets of the explicit items are accumulated once at construction so
/// lookups within the explicit prefix are O(log n) and lookups past it are
/// closed-form.
#[derive(Debug, Clone, PartialEq)]
pub struct VariableSizeMapping {
    default_size: f64,
    sizes: Vec<f64>,
    /// `offsets[i]` = offset of item i, with one trailing entry for the end
    offsets: Vec<f64>,
}

impl VariableSizeMapping {
    /// Create a mapping from a default size and explicit leading sizes.
    ///
    /// Explicit sizes may be zero (collapsed items) but not negative.
    ///
    /// # Errors
    /// Returns an error if `default_size` is not positive and finite, or any
    /// explicit size is negative or not finite.
    pub fn new(default_size: f64, sizes: Vec<f64>) -> Result<Self> {
        check_positive("default item size", default_size)?;
        if let Some((index, size)) = sizes
            .iter()
            .enumerate()
            .find(|(_, s)| !s.is_finite() || **s < 0.0)
        {
            return Err(ScrollError::InvalidItemSize(format!(
                "explicit size of item {index} must be non-negative and finite, got {size}"
            )));
        }

        let mut offsets = Vec::with_capacity(sizes.len() + 1);
        let mut offset = 0.0;
        for size in &sizes {
            offsets.push(offset);
            offset += size;
        }
        offsets.push(offset); // Final edge

        Ok(Self {
            default_size,
            sizes,
            offsets,
        })
    }

    /// Size used for items without an explicit entry.
    pub fn default_size(&self) -> f64 {
        self.default_size
    }

    /// Explicit leading sizes.
    pub fn sizes(&self) -> &[f64] {
        &self.sizes
    }

    /// Total size of the explicit items.
    fn explicit_extent(&self) -> f64 {
        self.offsets.last().copied().unwrap_or(0.0)
    }
}

impl OffsetMapping for VariableSizeMapping {
    fn item_size(&self, index: usize) -> f64 {
        self.sizes.get(index).copied().unwrap_or(self.default_size)
    }

    #[allow(clippy::cast_precision_loss)]
    fn item_offset(&self, index: usize) -> f64 {
        match self.offsets.get(index) {
            Some(&offset) => offset,
            None => {
                let tail = index - self.sizes.len();
                self.explicit_extent() + tail as f64 * self.default_size
            }
        }
    }

    #[allow(clippy::cast_precision_loss)]
    fn offset_to_item(&self, offset: f64) -> (usize, f64) {
        if offset <= 0.0 {
            return (0, 0.0);
        }

        let explicit_extent = self.explicit_extent();
        if offset < explicit_extent {
            // Last item starting at or before `offset`. Zero-sized items share
            // their successor's offset and are skipped.
            let index = self
                .offsets
                .partition_point(|&o| o <= offset)
                .saturating_sub(1);
            let start = self.offsets.get(index).copied().unwrap_or(0.0);
            return (index, start);
        }

        let tail = whole_items((offset - explicit_extent) / self.default_size);
        (
            self.sizes.len().saturating_add(tail),
            explicit_extent + tail as f64 * self.default_size,
        )
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use super::*;

    #[test]
    fn test_single_override() {
        let mapping = VariableSizeMapping::new(100.0, vec![160.0]).unwrap();
        assert_eq!(mapping.item_offset(0), 0.0);
        assert_eq!(mapping.item_offset(1), 160.0);
        assert_eq!(mapping.item_offset(2), 260.0);
        assert_eq!(mapping.offset_to_item(200.0), (1, 160.0));
        assert_eq!(mapping.offset_to_item(159.0), (0, 0.0));
        assert_eq!(mapping.offset_to_item(160.0), (1, 160.0));
    }

    #[test]
    fn test_no_overrides_behaves_like_fixed() {
        let mapping = VariableSizeMapping::new(25.0, Vec::new()).unwrap();
        assert_eq!(mapping.item_offset(4), 100.0);
        assert_eq!(mapping.offset_to_item(99.0), (3, 75.0));
        assert_eq!(mapping.offset_to_item(100.0), (4, 100.0));
    }

    #[test]
    fn test_zero_sized_items_are_skipped() {
        let mapping = VariableSizeMapping::new(10.0, vec![10.0, 0.0, 0.0, 10.0]).unwrap();
        assert_eq!(mapping.item_offset(1), 10.0);
        assert_eq!(mapping.item_offset(3), 10.0);
        assert_eq!(mapping.offset_to_item(10.0), (3, 10.0));
        assert_eq!(mapping.offset_to_item(15.0), (3, 10.0));
        assert_eq!(mapping.offset_to_item(20.0), (4, 20.0));
    }

    #[test]
    fn test_extrapolates_past_explicit_sizes() {
        let mapping = VariableSizeMapping::new(100.0, vec![160.0, 40.0]).unwrap();
        assert_eq!(mapping.offset_to_item(1_000_000.0), (10_000, 1_000_000.0));
        assert_eq!(mapping.offset_to_item(999_999.0), (9_999, 999_900.0));
        assert_eq!(mapping.item_offset(9_999), 999_900.0);
    }

    #[test]
    fn test_non_positive_offset() {
        let mapping = VariableSizeMapping::new(100.0, vec![160.0]).unwrap();
        assert_eq!(mapping.offset_to_item(0.0), (0, 0.0));
        assert_eq!(mapping.offset_to_item(-10.0), (0, 0.0));
    }

    #[test]
    fn test_rejects_bad_sizes() {
        assert!(VariableSizeMapping::new(0.0, Vec::new()).is_err());
        assert!(VariableSizeMapping::new(10.0, vec![5.0, -1.0]).is_err());
        assert!(VariableSizeMapping::new(10.0, vec![f64::INFINITY]).is_err());
        assert!(VariableSizeMapping::new(10.0, vec![0.0]).is_ok());
    }
}
