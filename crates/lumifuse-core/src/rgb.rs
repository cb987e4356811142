//! 8-bit interleaved RGB image
//!
//! `RgbImage` is the exchange format at the pipeline boundaries: inputs,
//! synthesized exposures, and fused outputs are all 8-bit RGB. Data is
//! stored row-major with three bytes (R, G, B) per pixel.

use crate::error::{Error, Result};
use crate::gray::GrayImage;

/// BT.601 luma weights used for RGB -> luminance extraction.
const LUMA_R: f32 = 0.299;
const LUMA_G: f32 = 0.587;
const LUMA_B: f32 = 0.114;

/// 8-bit RGB image, interleaved channels
///
/// # Memory layout
///
/// Row-major, interleaved. The pixel at (x, y) occupies bytes
/// `3 * (y * width + x) ..+ 3` in R, G, B order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RgbImage {
    /// Width in pixels
    width: u32,
    /// Height in pixels
    height: u32,
    /// Pixel data (row-major, interleaved RGB)
    data: Vec<u8>,
}

impl RgbImage {
    /// Create a new image with all pixels set to black.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidDimension` if width or height is 0.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }
        let size = (width as usize) * (height as usize) * 3;
        Ok(RgbImage {
            width,
            height,
            data: vec![0u8; size],
        })
    }

    /// Create a new image with all pixels set to the given color.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidDimension` if width or height is 0.
    pub fn new_with_value(width: u32, height: u32, rgb: (u8, u8, u8)) -> Result<Self> {
        let mut img = RgbImage::new(width, height)?;
        for chunk in img.data.chunks_exact_mut(3) {
            chunk[0] = rgb.0;
            chunk[1] = rgb.1;
            chunk[2] = rgb.2;
        }
        Ok(img)
    }

    /// Create an image from raw interleaved RGB data.
    ///
    /// # Errors
    ///
    /// Returns an error if dimensions are invalid or the data length
    /// doesn't match `width * height * 3`.
    pub fn from_data(width: u32, height: u32, data: Vec<u8>) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }
        let expected = (width as usize) * (height as usize) * 3;
        if data.len() != expected {
            return Err(Error::InvalidParameter(format!(
                "data length {} doesn't match {}x{}x3 = {}",
                data.len(),
                width,
                height,
                expected
            )));
        }
        Ok(RgbImage {
            width,
            height,
            data,
        })
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

    /// Get the pixel at (x, y) as an (r, g, b) tuple.
    ///
    /// # Errors
    ///
    /// Returns `Error::IndexOutOfBounds` if coordinates are out of range.
    #[inline]
    pub fn get_pixel(&self, x: u32, y: u32) -> Result<(u8, u8, u8)> {
        if x >= self.width || y >= self.height {
            return Err(Error::IndexOutOfBounds {
                index: (y as usize) * (self.width as usize) + (x as usize),
                len: (self.width as usize) * (self.height as usize),
            });
        }
        Ok(self.get_pixel_unchecked(x, y))
    }

    /// Set the pixel at (x, y) from an (r, g, b) tuple.
    ///
    /// # Errors
    ///
    /// Returns `Error::IndexOutOfBounds` if coordinates are out of range.
    #[inline]
    pub fn set_pixel(&mut self, x: u32, y: u32, rgb: (u8, u8, u8)) -> Result<()> {
        if x >= self.width || y >= self.height {
            return Err(Error::IndexOutOfBounds {
                index: (y as usize) * (self.width as usize) + (x as usize),
                len: (self.width as usize) * (self.height as usize),
            });
        }
        self.set_pixel_unchecked(x, y, rgb);
        Ok(())
    }

    /// Get the pixel at (x, y) without bounds checking.
    ///
    /// # Panics
    ///
    /// Panics if `x >= width` or `y >= height`.
    #[inline]
    pub fn get_pixel_unchecked(&self, x: u32, y: u32) -> (u8, u8, u8) {
        let idx = 3 * ((y as usize) * (self.width as usize) + (x as usize));
        (self.data[idx], self.data[idx + 1], self.data[idx + 2])
    }

    /// Set the pixel at (x, y) without bounds checking.
    ///
    /// # Panics
    ///
    /// Panics if `x >= width` or `y >= height`.
    #[inline]
    pub fn set_pixel_unchecked(&mut self, x: u32, y: u32, rgb: (u8, u8, u8)) {
        let idx = 3 * ((y as usize) * (self.width as usize) + (x as usize));
        self.data[idx] = rgb.0;
        self.data[idx + 1] = rgb.1;
        self.data[idx + 2] = rgb.2;
    }

    /// Get raw access to the interleaved pixel data
    #[inline]
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Extract the luminance channel using BT.601 luma weights
    /// (0.299 R + 0.587 G + 0.114 B), rounded to 8 bits.
    pub fn to_gray(&self) -> GrayImage {
        let mut out = Vec::with_capacity((self.width as usize) * (self.height as usize));
        for chunk in self.data.chunks_exact(3) {
            let lum = LUMA_R * chunk[0] as f32 + LUMA_G * chunk[1] as f32 + LUMA_B * chunk[2] as f32;
            out.push((lum + 0.5) as u8);
        }
        GrayImage::from_data(self.width, self.height, out).unwrap()
    }

    /// Downscale by integer sampling: keep one pixel every `factor`
    /// pixels in each direction. The output is at least 1x1.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidParameter` if `factor` is 0.
    pub fn subsample(&self, factor: u32) -> Result<RgbImage> {
        if factor == 0 {
            return Err(Error::InvalidParameter("sampling factor must be >= 1".into()));
        }
        let ow = (self.width / factor).max(1);
        let oh = (self.height / factor).max(1);
        let mut out = RgbImage::new(ow, oh)?;
        for y in 0..oh {
            for x in 0..ow {
                let sx = (x * factor).min(self.width - 1);
                let sy = (y * factor).min(self.height - 1);
                out.set_pixel_unchecked(x, y, self.get_pixel_unchecked(sx, sy));
            }
        }
        Ok(out)
    }
}
