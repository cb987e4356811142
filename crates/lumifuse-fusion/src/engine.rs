//! Exposure-fusion engine
//!
//! Blends a stack of exposures into one output by splitting each exposure
//! into a smoothed base layer and a residual detail layer, scoring both
//! with per-pixel quality weights, normalizing the weights across the
//! stack, and summing the weighted contributions.

use crate::error::{FusionError, FusionResult};
use crate::weights::{base_weight, detail_weight};
use lumifuse_core::{ExposureStack, FloatImage, RgbImage, RgbPlanes};
use lumifuse_filter::{FilterResult, guided_filter};

/// Radius of the detail-weight averaging window (7x7).
const DETAIL_RADIUS: u32 = 3;

/// Fusion weighting parameters.
#[derive(Debug, Clone, Copy)]
pub struct FusionParams {
    /// Base-layer smoothing radius
    pub radius: u32,
    /// Base-layer smoothing regularization
    pub eps: f32,
    /// Gaussian width of the base weight (local and global terms)
    pub sigma_l: f32,
    /// Gaussian width reserved for the global exposedness term; the
    /// reference weighting ties the global term to `sigma_l`
    pub sigma_g: f32,
    /// Gaussian width of the detail weight
    pub sigma_d: f32,
    /// Detail amplification applied during blending
    pub alpha: f32,
}

impl Default for FusionParams {
    fn default() -> Self {
        FusionParams {
            radius: 12,
            eps: 0.25,
            sigma_l: 0.5,
            sigma_g: 0.2,
            sigma_d: 0.12,
            alpha: 1.1,
        }
    }
}

impl FusionParams {
    /// Validate the parameters before any processing begins.
    ///
    /// # Errors
    ///
    /// Returns `FusionError::InvalidParameters` for a zero radius or any
    /// non-positive constant.
    pub fn validate(&self) -> FusionResult<()> {
        if self.radius == 0 {
            return Err(FusionError::InvalidParameters(
                "smoothing radius must be >= 1".into(),
            ));
        }
        if self.eps <= 0.0 {
            return Err(FusionError::InvalidParameters("eps must be > 0.0".into()));
        }
        if self.sigma_l <= 0.0 || self.sigma_g <= 0.0 || self.sigma_d <= 0.0 {
            return Err(FusionError::InvalidParameters(
                "weighting sigmas must be > 0.0".into(),
            ));
        }
        if self.alpha <= 0.0 {
            return Err(FusionError::InvalidParameters("alpha must be > 0.0".into()));
        }
        Ok(())
    }
}

/// Per-exposure decomposition kept between the weighting and blending
/// passes.
struct Layers {
    base: FloatImage,
    detail: RgbPlanes,
    w_base: FloatImage,
    w_detail: FloatImage,
}

/// Fuse an exposure stack with the guided filter as the base-layer
/// smoother.
///
/// # Errors
///
/// Returns `FusionError::EmptyStack` for an empty stack and
/// `FusionError::InvalidParameters` for invalid weighting constants.
pub fn fuse(stack: &ExposureStack, params: &FusionParams) -> FusionResult<RgbImage> {
    fuse_with(stack, params, guided_filter)
}

/// Fuse an exposure stack with a caller-supplied base-layer smoother.
///
/// The smoother receives `(guide, input, radius, eps)` and must return an
/// image of the same dimensions; tests use an identity stub to exercise
/// the engine in isolation.
pub fn fuse_with<F>(stack: &ExposureStack, params: &FusionParams, smooth: F) -> FusionResult<RgbImage>
where
    F: Fn(&FloatImage, &FloatImage, u32, f32) -> FilterResult<FloatImage>,
{
    params.validate()?;
    let (width, height) = stack.dimensions().ok_or(FusionError::EmptyStack)?;

    let mut layers = Vec::with_capacity(stack.len());
    let mut wb_sum = FloatImage::new(width, height)?;
    let mut wd_sum = FloatImage::new(width, height)?;

    for img in stack.iter() {
        let mut planes = RgbPlanes::from_rgb(img);
        planes.mul_constant(1.0 / 255.0);
        let lum = planes.luminance();

        let base = smooth(&lum, &lum, params.radius, params.eps)?;
        let w_base = base_weight(&base, lum.mean(), params.sigma_l);
        let detail = planes.sub_broadcast(&base)?;
        let w_detail = detail_weight(&lum, DETAIL_RADIUS, params.sigma_d)?;

        wb_sum = wb_sum.add(&w_base)?;
        wd_sum = wd_sum.add(&w_detail)?;
        layers.push(Layers {
            base,
            detail,
            w_base,
            w_detail,
        });
    }

    // Per-pixel normalization across the stack, then the weighted blend.
    // The weight floors keep both sums strictly positive.
    let mut out = RgbPlanes::new(width, height)?;
    for layer in &layers {
        let wb_norm = layer.w_base.div(&wb_sum)?;
        let wd_norm = layer.w_detail.div(&wd_sum)?;

        let mut detail_term = layer.detail.scale_by(&wd_norm)?;
        detail_term.mul_constant(params.alpha);
        out.add_assign(&detail_term)?;
        out.add_broadcast(&layer.base.mul(&wb_norm)?)?;
    }

    out.mul_constant(255.0);
    Ok(out.to_rgb())
}
