//! Per-pixel quality weights
//!
//! Two weight families drive the fusion blend:
//!
//! - the base weight scores how close the smoothed luminance sits to
//!   mid-gray, locally per pixel and globally per image, penalizing both
//!   very dark and very bright content;
//! - the detail weight scores local exposedness of texture, from the
//!   windowed mean luminance.
//!
//! Both carry an additive floor so that per-pixel weight sums across a
//!   stack stay positive and normalization never divides by zero.

use crate::FusionResult;
use lumifuse_core::FloatImage;
use lumifuse_filter::box_mean;

/// Additive floor keeping weight sums positive under `exp` underflow.
pub const WEIGHT_FLOOR: f32 = 1e-12;

/// Gaussian exposedness score of `v` around mid-gray 0.5.
#[inline]
fn exposedness(v: f32, sigma: f32) -> f32 {
    let d = v - 0.5;
    (-(d * d) / (2.0 * sigma * sigma)).exp()
}

/// Base-layer weight: local closeness of the smoothed luminance to
/// mid-gray, scaled by a whole-image term from the mean luminance.
///
/// # Arguments
///
/// * `base` - Smoothed luminance in [0, 1]
/// * `global_mean` - Mean of the (unsmoothed) luminance channel
/// * `sigma` - Gaussian width for both terms
pub fn base_weight(base: &FloatImage, global_mean: f64, sigma: f32) -> FloatImage {
    let global = exposedness(global_mean as f32, sigma);
    let mut out = base.create_template();
    let dst = out.data_mut();
    for (i, &v) in base.data().iter().enumerate() {
        dst[i] = exposedness(v, sigma) * global + WEIGHT_FLOOR;
    }
    out
}

/// Detail-layer weight: exposedness of the windowed mean luminance,
/// favoring regions of well-exposed local texture.
///
/// # Arguments
///
/// * `lum` - Luminance in [0, 1]
/// * `radius` - Averaging window radius (3 gives the 7x7 window)
/// * `sigma` - Gaussian width
pub fn detail_weight(lum: &FloatImage, radius: u32, sigma: f32) -> FusionResult<FloatImage> {
    let mut out = box_mean(lum, radius)?;
    for v in out.data_mut() {
        *v = exposedness(*v, sigma) + WEIGHT_FLOOR;
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mid_gray_scores_highest() {
        let base = FloatImage::from_data(3, 1, vec![0.0, 0.5, 1.0]).unwrap();
        let w = base_weight(&base, 0.5, 0.5);
        let dark = w.get_pixel(0, 0).unwrap();
        let mid = w.get_pixel(1, 0).unwrap();
        let bright = w.get_pixel(2, 0).unwrap();
        assert!(mid > dark);
        assert!(mid > bright);
        assert!((dark - bright).abs() < 1e-6);
    }

    #[test]
    fn test_global_term_scales_whole_map() {
        let base = FloatImage::new_with_value(4, 4, 0.5).unwrap();
        let centered = base_weight(&base, 0.5, 0.5);
        let skewed = base_weight(&base, 0.95, 0.5);
        assert!(skewed.get_pixel(0, 0).unwrap() < centered.get_pixel(0, 0).unwrap());
    }

    #[test]
    fn test_weights_are_positive() {
        // Even fully black and fully white inputs keep a positive weight
        // thanks to the additive floor.
        for v in [0.0f32, 1.0] {
            let lum = FloatImage::new_with_value(4, 4, v).unwrap();
            let wb = base_weight(&lum, v as f64, 0.5);
            let wd = detail_weight(&lum, 3, 0.12).unwrap();
            assert!(wb.min() > 0.0);
            assert!(wd.min() > 0.0);
        }
    }

    #[test]
    fn test_detail_weight_uses_windowed_mean() {
        // A single bright pixel in a mid-gray field barely moves the
        // window average, so its detail weight stays near the peak.
        let mut lum = FloatImage::new_with_value(9, 9, 0.5).unwrap();
        lum.set_pixel(4, 4, 1.0).unwrap();
        let wd = detail_weight(&lum, 3, 0.12).unwrap();
        assert!(wd.get_pixel(4, 4).unwrap() > 0.9);
    }
}
