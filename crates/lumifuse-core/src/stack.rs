//! Exposure stack
//!
//! An ordered sequence of equal-sized RGB images: one real exposure plus
//! the synthetic exposures derived from it (or an externally supplied
//! bracket). Insertion order is preserved for determinism; fusion treats
//! the stack as an unordered multiset functionally.

use crate::error::{Error, Result};
use crate::rgb::RgbImage;

/// Ordered stack of equal-sized exposures.
///
/// Dimension agreement is enforced at insertion, so consumers can rely on
/// a uniform stack without re-validating.
#[derive(Debug, Clone, Default)]
pub struct ExposureStack {
    images: Vec<RgbImage>,
}

impl ExposureStack {
    /// Create an empty stack.
    pub fn new() -> Self {
        ExposureStack { images: Vec::new() }
    }

    /// Build a stack from a vector of images.
    ///
    /// # Errors
    ///
    /// Returns `Error::IncompatibleSizes` if the images disagree in size.
    pub fn from_images(images: Vec<RgbImage>) -> Result<Self> {
        let mut stack = ExposureStack::new();
        for img in images {
            stack.push(img)?;
        }
        Ok(stack)
    }

    /// Append an exposure.
    ///
    /// # Errors
    ///
    /// Returns `Error::IncompatibleSizes` if the image dimensions differ
    /// from the images already in the stack.
    pub fn push(&mut self, img: RgbImage) -> Result<()> {
        if let Some(first) = self.images.first() {
            let (w, h) = first.dimensions();
            let (iw, ih) = img.dimensions();
            if w != iw || h != ih {
                return Err(Error::IncompatibleSizes(w, h, iw, ih));
            }
        }
        self.images.push(img);
        Ok(())
    }

    /// Number of exposures in the stack.
    pub fn len(&self) -> usize {
        self.images.len()
    }

    /// Whether the stack holds no exposures.
    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    /// Dimensions shared by every exposure, or `None` for an empty stack.
    pub fn dimensions(&self) -> Option<(u32, u32)> {
        self.images.first().map(|img| img.dimensions())
    }

    /// Get the exposure at `index`.
    pub fn get(&self, index: usize) -> Option<&RgbImage> {
        self.images.get(index)
    }

    /// Iterate over the exposures in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, RgbImage> {
        self.images.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_preserves_order() {
        let mut stack = ExposureStack::new();
        stack.push(RgbImage::new_with_value(2, 2, (1, 1, 1)).unwrap()).unwrap();
        stack.push(RgbImage::new_with_value(2, 2, (2, 2, 2)).unwrap()).unwrap();
        assert_eq!(stack.len(), 2);
        assert_eq!(stack.get(0).unwrap().get_pixel(0, 0).unwrap(), (1, 1, 1));
        assert_eq!(stack.get(1).unwrap().get_pixel(0, 0).unwrap(), (2, 2, 2));
    }

    #[test]
    fn test_mismatched_dimensions_rejected() {
        let mut stack = ExposureStack::new();
        stack.push(RgbImage::new(4, 4).unwrap()).unwrap();
        assert!(stack.push(RgbImage::new(4, 5).unwrap()).is_err());
    }

    #[test]
    fn test_from_images() {
        let imgs = vec![RgbImage::new(3, 3).unwrap(), RgbImage::new(3, 3).unwrap()];
        let stack = ExposureStack::from_images(imgs).unwrap();
        assert_eq!(stack.dimensions(), Some((3, 3)));
        assert_eq!(stack.iter().count(), 2);
    }
}
