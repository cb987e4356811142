//! Well-exposedness stack merge
//!
//! A simpler fusion backend, interchangeable with the layer-fusion
//! engine: each exposure is scored per pixel by how close its luminance
//! sits to mid-gray, the scores are normalized across the stack, and the
//! output is the weighted sum of the normalized colors. No base/detail
//! split and no detail amplification.

use crate::error::{FusionError, FusionResult};
use crate::weights::WEIGHT_FLOOR;
use lumifuse_core::{ExposureStack, FloatImage, RgbImage, RgbPlanes};

/// Gaussian width of the well-exposedness score.
const MERGE_SIGMA: f32 = 0.2;

/// Merge an exposure stack by per-pixel well-exposedness weighting.
///
/// # Errors
///
/// Returns `FusionError::EmptyStack` for an empty stack.
pub fn merge_exposedness(stack: &ExposureStack) -> FusionResult<RgbImage> {
    let (width, height) = stack.dimensions().ok_or(FusionError::EmptyStack)?;

    let mut weights = Vec::with_capacity(stack.len());
    let mut planes_set = Vec::with_capacity(stack.len());
    let mut w_sum = FloatImage::new(width, height)?;

    for img in stack.iter() {
        let mut planes = RgbPlanes::from_rgb(img);
        planes.mul_constant(1.0 / 255.0);
        let lum = planes.luminance();

        let mut w = lum.create_template();
        let dst = w.data_mut();
        for (i, &v) in lum.data().iter().enumerate() {
            let d = v - 0.5;
            dst[i] = (-(d * d) / (2.0 * MERGE_SIGMA * MERGE_SIGMA)).exp() + WEIGHT_FLOOR;
        }

        w_sum = w_sum.add(&w)?;
        weights.push(w);
        planes_set.push(planes);
    }

    let mut out = RgbPlanes::new(width, height)?;
    for (planes, w) in planes_set.iter().zip(weights.iter()) {
        let w_norm = w.div(&w_sum)?;
        out.add_assign(&planes.scale_by(&w_norm)?)?;
    }

    out.mul_constant(255.0);
    Ok(out.to_rgb())
}
