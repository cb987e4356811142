//! Tone-curve lookup tables
//!
//! Gamma correction and global contrast enhancement, both realized as
//! 256-entry lookup tables applied per sample. Building a table costs 256
//! evaluations of the curve; applying it is a byte remap, so correcting a
//! full-resolution color image stays cheap.

use crate::{FilterError, FilterResult};
use lumifuse_core::{GrayImage, RgbImage};

/// Scale factor inside the atan contrast curve.
const CONTRAST_SCALE: f64 = 5.0;

/// A 256-entry lookup table mapping input levels [0..255] to output
/// levels [0..255].
pub type ToneLut = [u8; 256];

/// Build a gamma lookup table: `level -> round(255 * (level/255)^gamma)`,
/// saturating to [0, 255].
///
/// Applying `gamma` and then `1/gamma` approximately round-trips; the
/// residual error comes from integer rounding only.
///
/// # Arguments
///
/// * `gamma` - Power-law exponent; must be > 0.0. Values > 1.0 darken the
///   image, values < 1.0 brighten it.
///
/// # Errors
///
/// Returns `FilterError::InvalidParameters` if `gamma` is not positive.
pub fn gamma_lut(gamma: f32) -> FilterResult<ToneLut> {
    if gamma <= 0.0 {
        return Err(FilterError::InvalidParameters("gamma must be > 0.0".into()));
    }

    let mut lut = [0u8; 256];
    for (i, entry) in lut.iter_mut().enumerate() {
        let x = i as f32 / 255.0;
        let mapped = 255.0 * x.powf(gamma) + 0.5;
        *entry = (mapped as i32).clamp(0, 255) as u8;
    }
    Ok(lut)
}

/// Build a contrast-enhancement lookup table.
///
/// Uses an atan-based mapping with maximum slope at level 127: levels
/// below 127 are darkened and levels above are lightened.
///
/// # Arguments
///
/// * `factor` - Enhancement strength. 0.0 is the identity mapping; the
///   useful range is (0.0, 1.0) but larger values are allowed.
///
/// # Errors
///
/// Returns `FilterError::InvalidParameters` if `factor` is negative.
pub fn contrast_lut(factor: f32) -> FilterResult<ToneLut> {
    if factor < 0.0 {
        return Err(FilterError::InvalidParameters(
            "factor must be >= 0.0".into(),
        ));
    }

    let mut lut = [0u8; 256];

    if factor == 0.0 {
        for (i, entry) in lut.iter_mut().enumerate() {
            *entry = i as u8;
        }
        return Ok(lut);
    }

    let factor_d = factor as f64;
    let ymax = (factor_d * CONTRAST_SCALE).atan();
    let ymin = (-127.0 * factor_d * CONTRAST_SCALE / 128.0).atan();
    let dely = ymax - ymin;

    for (i, entry) in lut.iter_mut().enumerate() {
        let x = i as f64;
        let val =
            (255.0 / dely) * (-ymin + (factor_d * CONTRAST_SCALE * (x - 127.0) / 128.0).atan())
                + 0.5;
        *entry = (val as i32).clamp(0, 255) as u8;
    }

    Ok(lut)
}

/// Remap a grayscale image through a lookup table.
pub fn apply_lut_gray(img: &GrayImage, lut: &ToneLut) -> GrayImage {
    let data = img.data().iter().map(|&v| lut[v as usize]).collect();
    GrayImage::from_data(img.width(), img.height(), data).unwrap()
}

/// Remap each channel of an RGB image through the same lookup table.
pub fn apply_lut_rgb(img: &RgbImage, lut: &ToneLut) -> RgbImage {
    let data = img.data().iter().map(|&v| lut[v as usize]).collect();
    RgbImage::from_data(img.width(), img.height(), data).unwrap()
}

/// Gamma-correct an RGB image with exponent `gamma`.
///
/// # Errors
///
/// Returns `FilterError::InvalidParameters` if `gamma` is not positive.
pub fn gamma_correct(img: &RgbImage, gamma: f32) -> FilterResult<RgbImage> {
    let lut = gamma_lut(gamma)?;
    Ok(apply_lut_rgb(img, &lut))
}

/// Apply global contrast enhancement to an RGB image.
///
/// # Errors
///
/// Returns `FilterError::InvalidParameters` if `factor` is negative.
pub fn contrast_enhance(img: &RgbImage, factor: f32) -> FilterResult<RgbImage> {
    let lut = contrast_lut(factor)?;
    Ok(apply_lut_rgb(img, &lut))
}
