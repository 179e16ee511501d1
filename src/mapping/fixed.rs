//! Uniform item sizes.

use super::{check_positive, whole_items, OffsetMapping};
use crate::error::Result;

/// Every item has the same size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedSizeMapping {
    size: f64,
}

impl FixedSizeMapping {
    /// Create a mapping where every item is `size` pixels.
    ///
    /// # Errors
    /// Returns an error if `size` is not positive and finite.
    pub fn new(size: f64) -> Result<Self> {
        check_positive("fixed item size", size)?;
        Ok(Self { size })
    }

    /// The uniform item size.
    pub fn size(&self) -> f64 {
        self.size
    }
}

impl OffsetMapping for FixedSizeMapping {
    fn item_size(&self, _index: usize) -> f64 {
        self.size
    }

    #[allow(clippy::cast_precision_loss)]
    fn item_offset(&self, index: usize) -> f64 {
        index as f64 * self.size
    }

    fn offset_to_item(&self, offset: f64) -> (usize, f64) {
        if offset <= 0.0 {
            return (0, 0.0);
        }
        let index = whole_items(offset / self.size);
        (index, self.item_offset(index))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use super::*;

    #[test]
    fn test_offsets() {
        let mapping = FixedSizeMapping::new(30.0).unwrap();
        assert_eq!(mapping.item_size(12345), 30.0);
        assert_eq!(mapping.item_offset(0), 0.0);
        assert_eq!(mapping.item_offset(10), 300.0);
    }

    #[test]
    fn test_offset_to_item() {
        let mapping = FixedSizeMapping::new(30.0).unwrap();
        assert_eq!(mapping.offset_to_item(305.0), (10, 300.0));
        assert_eq!(mapping.offset_to_item(300.0), (10, 300.0));
        assert_eq!(mapping.offset_to_item(299.9), (9, 270.0));
        assert_eq!(mapping.offset_to_item(0.0), (0, 0.0));
        assert_eq!(mapping.offset_to_item(-50.0), (0, 0.0));
    }

    #[test]
    fn test_rejects_non_positive() {
        assert!(FixedSizeMapping::new(0.0).is_err());
        assert!(FixedSizeMapping::new(-1.0).is_err());
        assert!(FixedSizeMapping::new(f64::NAN).is_err());
    }
}
