//! Planar floating-point color image
//!
//! `RgbPlanes` holds one `FloatImage` per color channel. The synthesizer
//! and the fusion engine both work channel-split: luminance fields and
//! weight maps are single-channel, and broadcasting them across the three
//! planes is an elementwise multiply per plane.

use crate::error::Result;
use crate::fimage::FloatImage;
use crate::rgb::RgbImage;

/// BT.601 luma weights, matching [`RgbImage::to_gray`].
const LUMA_R: f32 = 0.299;
const LUMA_G: f32 = 0.587;
const LUMA_B: f32 = 0.114;

/// Planar float color image: three congruent channel planes.
#[derive(Debug, Clone)]
pub struct RgbPlanes {
    /// Red plane
    pub r: FloatImage,
    /// Green plane
    pub g: FloatImage,
    /// Blue plane
    pub b: FloatImage,
}

impl RgbPlanes {
    /// Create zeroed planes.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidDimension` if width or height is 0.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        Ok(RgbPlanes {
            r: FloatImage::new(width, height)?,
            g: FloatImage::new(width, height)?,
            b: FloatImage::new(width, height)?,
        })
    }

    /// Split an 8-bit RGB image into float planes, keeping the [0, 255]
    /// value range (lossless).
    pub fn from_rgb(img: &RgbImage) -> Self {
        let (w, h) = img.dimensions();
        let n = (w as usize) * (h as usize);
        let mut r = Vec::with_capacity(n);
        let mut g = Vec::with_capacity(n);
        let mut b = Vec::with_capacity(n);
        for chunk in img.data().chunks_exact(3) {
            r.push(chunk[0] as f32);
            g.push(chunk[1] as f32);
            b.push(chunk[2] as f32);
        }
        RgbPlanes {
            r: FloatImage::from_data(w, h, r).unwrap(),
            g: FloatImage::from_data(w, h, g).unwrap(),
            b: FloatImage::from_data(w, h, b).unwrap(),
        }
    }

    /// Get the plane dimensions as (width, height).
    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        self.r.dimensions()
    }

    /// Compute the luminance plane (BT.601 luma) without intermediate
    /// quantization.
    pub fn luminance(&self) -> FloatImage {
        let mut out = self.r.create_template();
        let dst = out.data_mut();
        for (i, ((&r, &g), &b)) in self
            .r
            .data()
            .iter()
            .zip(self.g.data().iter())
            .zip(self.b.data().iter())
            .enumerate()
        {
            dst[i] = LUMA_R * r + LUMA_G * g + LUMA_B * b;
        }
        out
    }

    /// Multiply every plane by the same single-channel factor image.
    ///
    /// # Errors
    ///
    /// Returns `Error::IncompatibleSizes` if dimensions don't match.
    pub fn scale_by(&self, factor: &FloatImage) -> Result<RgbPlanes> {
        Ok(RgbPlanes {
            r: self.r.mul(factor)?,
            g: self.g.mul(factor)?,
            b: self.b.mul(factor)?,
        })
    }

    /// Subtract the same single-channel image from every plane.
    ///
    /// # Errors
    ///
    /// Returns `Error::IncompatibleSizes` if dimensions don't match.
    pub fn sub_broadcast(&self, other: &FloatImage) -> Result<RgbPlanes> {
        Ok(RgbPlanes {
            r: self.r.sub(other)?,
            g: self.g.sub(other)?,
            b: self.b.sub(other)?,
        })
    }

    /// Accumulate another set of planes into this one (in-place).
    ///
    /// # Errors
    ///
    /// Returns `Error::IncompatibleSizes` if dimensions don't match.
    pub fn add_assign(&mut self, other: &RgbPlanes) -> Result<()> {
        self.r = self.r.add(&other.r)?;
        self.g = self.g.add(&other.g)?;
        self.b = self.b.add(&other.b)?;
        Ok(())
    }

    /// Accumulate a single-channel contribution into every plane (in-place).
    ///
    /// # Errors
    ///
    /// Returns `Error::IncompatibleSizes` if dimensions don't match.
    pub fn add_broadcast(&mut self, other: &FloatImage) -> Result<()> {
        self.r = self.r.add(other)?;
        self.g = self.g.add(other)?;
        self.b = self.b.add(other)?;
        Ok(())
    }

    /// Multiply all planes by a constant (in-place).
    pub fn mul_constant(&mut self, value: f32) {
        self.r.mul_constant(value);
        self.g.mul_constant(value);
        self.b.mul_constant(value);
    }

    /// Merge the planes back into an 8-bit RGB image, rounding and
    /// saturating each sample to [0, 255].
    pub fn to_rgb(&self) -> RgbImage {
        let (w, h) = self.dimensions();
        let n = (w as usize) * (h as usize);
        let mut data = Vec::with_capacity(n * 3);
        for i in 0..n {
            data.push(quantize(self.r.data()[i]));
            data.push(quantize(self.g.data()[i]));
            data.push(quantize(self.b.data()[i]));
        }
        RgbImage::from_data(w, h, data).unwrap()
    }
}

/// Round and saturate a float sample to an 8-bit value.
#[inline]
fn quantize(v: f32) -> u8 {
    let v = v.max(0.0);
    ((v + 0.5) as u32).min(255) as u8
}
