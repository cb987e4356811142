//! Floating-point image
//!
//! `FloatImage` is a 2D array of `f32` values, used for every intermediate
//! computation where integer precision is insufficient: luminance fields,
//! base layers, tone-map factors, and weight maps.
//!
//! Integer-to-float conversion is lossless; float-to-integer conversion
//! rounds and saturates to [0, 255].
//!
//! # Examples
//!
//! ```
//! use lumifuse_core::FloatImage;
//!
//! let mut img = FloatImage::new(100, 100).unwrap();
//! img.set_pixel(10, 20, 0.5).unwrap();
//! assert_eq!(img.get_pixel(10, 20).unwrap(), 0.5);
//! ```

use crate::error::{Error, Result};
use crate::gray::GrayImage;

/// Floating-point image
///
/// # Memory layout
///
/// Data is stored in row-major order with no padding. The pixel at (x, y)
/// is at index `y * width + x`.
#[derive(Debug, Clone)]
pub struct FloatImage {
    /// Width in pixels
    width: u32,
    /// Height in pixels
    height: u32,
    /// Pixel data (row-major, no padding)
    data: Vec<f32>,
}

impl FloatImage {
    /// Create a new image with all pixels set to zero.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidDimension` if width or height is 0.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }
        let size = (width as usize) * (height as usize);
        Ok(FloatImage {
            width,
            height,
            data: vec![0.0f32; size],
        })
    }

    /// Create a new image with all pixels set to the specified value.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidDimension` if width or height is 0.
    pub fn new_with_value(width: u32, height: u32, value: f32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }
        let size = (width as usize) * (height as usize);
        Ok(FloatImage {
            width,
            height,
            data: vec![value; size],
        })
    }

    /// Create an image from raw row-major data.
    ///
    /// # Errors
    ///
    /// Returns an error if dimensions are invalid or data length doesn't match.
    pub fn from_data(width: u32, height: u32, data: Vec<f32>) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }
        let expected = (width as usize) * (height as usize);
        if data.len() != expected {
            return Err(Error::InvalidParameter(format!(
                "data length {} doesn't match {}x{} = {}",
                data.len(),
                width,
                height,
                expected
            )));
        }
        Ok(FloatImage {
            width,
            height,
            data,
        })
    }

    /// Losslessly convert an 8-bit grayscale image, keeping the [0, 255]
    /// value range.
    pub fn from_gray(gray: &GrayImage) -> Self {
        FloatImage {
            width: gray.width(),
            height: gray.height(),
            data: gray.data().iter().map(|&v| v as f32).collect(),
        }
    }

    /// Create a zeroed image with the same dimensions as this one.
    pub fn create_template(&self) -> FloatImage {
        FloatImage {
            width: self.width,
            height: self.height,
            data: vec![0.0; self.data.len()],
        }
    }

    /// Get the image width in pixels
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Get the image height in pixels
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Get the image dimensions as (width, height)
    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Get the pixel value at (x, y).
    ///
    /// # Errors
    ///
    /// Returns `Error::IndexOutOfBounds` if coordinates are out of range.
    #[inline]
    pub fn get_pixel(&self, x: u32, y: u32) -> Result<f32> {
        if x >= self.width || y >= self.height {
            return Err(Error::IndexOutOfBounds {
                index: (y as usize) * (self.width as usize) + (x as usize),
                len: self.data.len(),
            });
        }
        Ok(self.get_pixel_unchecked(x, y))
    }

    /// Set the pixel value at (x, y).
    ///
    /// # Errors
    ///
    /// Returns `Error::IndexOutOfBounds` if coordinates are out of range.
    #[inline]
    pub fn set_pixel(&mut self, x: u32, y: u32, value: f32) -> Result<()> {
        if x >= self.width || y >= self.height {
            return Err(Error::IndexOutOfBounds {
                index: (y as usize) * (self.width as usize) + (x as usize),
                len: self.data.len(),
            });
        }
        self.set_pixel_unchecked(x, y, value);
        Ok(())
    }

    /// Get the pixel value at (x, y) without bounds checking.
    ///
    /// # Panics
    ///
    /// Panics if `x >= width` or `y >= height`.
    #[inline]
    pub fn get_pixel_unchecked(&self, x: u32, y: u32) -> f32 {
        self.data[(y as usize) * (self.width as usize) + (x as usize)]
    }

    /// Set the pixel value at (x, y) without bounds checking.
    ///
    /// # Panics
    ///
    /// Panics if `x >= width` or `y >= height`.
    #[inline]
    pub fn set_pixel_unchecked(&mut self, x: u32, y: u32, value: f32) {
        self.data[(y as usize) * (self.width as usize) + (x as usize)] = value;
    }

    /// Get raw access to the pixel data
    #[inline]
    pub fn data(&self) -> &[f32] {
        &self.data
    }

    /// Get mutable access to the pixel data
    #[inline]
    pub fn data_mut(&mut self) -> &mut [f32] {
        &mut self.data
    }

    // ========================================================================
    // Arithmetic
    // ========================================================================

    /// Add two images element-wise.
    ///
    /// # Errors
    ///
    /// Returns `Error::IncompatibleSizes` if dimensions don't match.
    pub fn add(&self, other: &FloatImage) -> Result<FloatImage> {
        self.check_same_size(other)?;
        let mut result = self.create_template();
        for (i, (&a, &b)) in self.data.iter().zip(other.data.iter()).enumerate() {
            result.data[i] = a + b;
        }
        Ok(result)
    }

    /// Subtract `other` from this image element-wise.
    ///
    /// # Errors
    ///
    /// Returns `Error::IncompatibleSizes` if dimensions don't match.
    pub fn sub(&self, other: &FloatImage) -> Result<FloatImage> {
        self.check_same_size(other)?;
        let mut result = self.create_template();
        for (i, (&a, &b)) in self.data.iter().zip(other.data.iter()).enumerate() {
            result.data[i] = a - b;
        }
        Ok(result)
    }

    /// Multiply two images element-wise.
    ///
    /// # Errors
    ///
    /// Returns `Error::IncompatibleSizes` if dimensions don't match.
    pub fn mul(&self, other: &FloatImage) -> Result<FloatImage> {
        self.check_same_size(other)?;
        let mut result = self.create_template();
        for (i, (&a, &b)) in self.data.iter().zip(other.data.iter()).enumerate() {
            result.data[i] = a * b;
        }
        Ok(result)
    }

    /// Divide this image by `other` element-wise.
    ///
    /// Division by zero follows IEEE semantics; callers are expected to
    /// keep divisors positive (see the weight-floor invariants).
    ///
    /// # Errors
    ///
    /// Returns `Error::IncompatibleSizes` if dimensions don't match.
    pub fn div(&self, other: &FloatImage) -> Result<FloatImage> {
        self.check_same_size(other)?;
        let mut result = self.create_template();
        for (i, (&a, &b)) in self.data.iter().zip(other.data.iter()).enumerate() {
            result.data[i] = a / b;
        }
        Ok(result)
    }

    /// Add a constant to all pixels (in-place).
    pub fn add_constant(&mut self, value: f32) {
        for v in &mut self.data {
            *v += value;
        }
    }

    /// Multiply all pixels by a constant (in-place).
    pub fn mul_constant(&mut self, value: f32) {
        for v in &mut self.data {
            *v *= value;
        }
    }

    // ========================================================================
    // Statistics
    // ========================================================================

    /// Find the minimum pixel value.
    pub fn min(&self) -> f32 {
        self.data.iter().copied().fold(f32::INFINITY, f32::min)
    }

    /// Find the maximum pixel value.
    pub fn max(&self) -> f32 {
        self.data.iter().copied().fold(f32::NEG_INFINITY, f32::max)
    }

    /// Compute the mean pixel value.
    pub fn mean(&self) -> f64 {
        let sum: f64 = self.data.iter().map(|&v| v as f64).sum();
        sum / self.data.len() as f64
    }

    // ========================================================================
    // Conversion
    // ========================================================================

    /// Convert to an 8-bit grayscale image, rounding and saturating each
    /// value to [0, 255]. Negative values clip to zero.
    pub fn to_gray(&self) -> GrayImage {
        let out: Vec<u8> = self
            .data
            .iter()
            .map(|&v| {
                let v = v.max(0.0);
                ((v + 0.5) as u32).min(255) as u8
            })
            .collect();
        GrayImage::from_data(self.width, self.height, out).unwrap()
    }

    /// Check that two images have the same dimensions.
    fn check_same_size(&self, other: &FloatImage) -> Result<()> {
        if self.width != other.width || self.height != other.height {
            return Err(Error::IncompatibleSizes(
                self.width,
                self.height,
                other.width,
                other.height,
            ));
        }
        Ok(())
    }
}
