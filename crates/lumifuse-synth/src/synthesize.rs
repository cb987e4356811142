//! Synthetic exposure generation
//!
//! Derives a multi-exposure stack from a single photograph: the image is
//! gamma-corrected, its luminance is partitioned into brightness bands,
//! every band contributes an exposure-compensation gain estimated from
//! its log-average luminance, and each gain is tone-mapped into a full
//! synthetic exposure. The stack closes with the gamma-inverted original,
//! so fusion always has the unmodified capture to fall back on.

use crate::error::{SynthError, SynthResult};
use crate::segment::segment_luminance;
use crate::stats::{GainTable, RegionStats};
use lumifuse_core::{ExposureStack, FloatImage, RgbImage, RgbPlanes};
use lumifuse_filter::enhance::{apply_lut_rgb, gamma_lut};

/// Synthesis parameters.
#[derive(Debug, Clone, Copy)]
pub struct SynthParams {
    /// Number of luminance bands
    pub regions: u32,
    /// Mid-gray reference for the gain estimate
    pub target_gray: f32,
    /// Epsilon floor applied at every log and division site
    pub eps: f32,
    /// Linear downsampling divisor for segmentation statistics
    pub downsample: u32,
}

impl Default for SynthParams {
    fn default() -> Self {
        SynthParams {
            regions: 7,
            target_gray: 0.18,
            eps: 0.003,
            downsample: 20,
        }
    }
}

impl SynthParams {
    /// Validate the parameters before any processing begins.
    ///
    /// # Errors
    ///
    /// Returns `SynthError::InvalidParameters` for a region count outside
    /// `1..=255`, a non-positive target gray or epsilon, or a zero
    /// downsampling divisor.
    pub fn validate(&self) -> SynthResult<()> {
        if self.regions == 0 || self.regions > 255 {
            return Err(SynthError::InvalidParameters(format!(
                "region count must be in 1..=255, got {}",
                self.regions
            )));
        }
        if self.target_gray <= 0.0 {
            return Err(SynthError::InvalidParameters(
                "target gray must be > 0.0".into(),
            ));
        }
        if self.eps <= 0.0 {
            return Err(SynthError::InvalidParameters("eps must be > 0.0".into()));
        }
        if self.downsample == 0 {
            return Err(SynthError::InvalidParameters(
                "downsampling divisor must be >= 1".into(),
            ));
        }
        Ok(())
    }
}

/// Estimate the per-region gains of a gamma-corrected image.
///
/// Segmentation and accumulation run on a subsampled copy; the gains
/// transfer to the full-resolution image because the log average is a
/// scale-free statistic of each band.
fn region_gains(corrected: &RgbImage, params: &SynthParams) -> SynthResult<GainTable> {
    let small = corrected.subsample(params.downsample)?;
    let small_lum = small.to_gray();
    let labels = segment_luminance(&small_lum, params.regions)?;

    let mut stats = RegionStats::new(params.regions);
    stats.accumulate(&small_lum, &labels, params.eps)?;
    Ok(stats.gains(params.target_gray, params.eps))
}

/// Tone map one region's exposure field onto the luminance channel.
///
/// With `E = gain * lum`, the factor per pixel is
/// `(E / max(E) + 1) * (E / (E + 1)) / (lum + eps)`: the first term
/// normalizes against the field's own peak, the second compresses high
/// gains, and the division preserves contrast relative to the original
/// luminance.
fn tone_map(lum: &FloatImage, gain: f32, eps: f32) -> FloatImage {
    let mut exposed = lum.clone();
    exposed.mul_constant(gain);
    let max_e = exposed.max().max(eps);

    let mut out = exposed;
    let lum_data = lum.data();
    for (i, v) in out.data_mut().iter_mut().enumerate() {
        let e = *v;
        let n1 = e / max_e + 1.0;
        let n2 = e / (e + 1.0);
        *v = (n1 * n2) / (lum_data[i] + eps);
    }
    out
}

/// Synthesize an exposure stack of `regions + 1` images from a single
/// photograph.
///
/// # Arguments
///
/// * `image` - Source photograph
/// * `gamma` - Correction exponent; 2.2 for bright scenes, 1/2.2 for dark
/// * `params` - Synthesis parameters
///
/// # Errors
///
/// Returns `SynthError::InvalidParameters` for invalid configuration;
/// degenerate content (uniform or empty bands) is handled through the
/// epsilon floors instead.
pub fn synthesize_exposures(
    image: &RgbImage,
    gamma: f32,
    params: &SynthParams,
) -> SynthResult<ExposureStack> {
    params.validate()?;
    let forward_lut = gamma_lut(gamma)?;
    let inverse_lut = gamma_lut(1.0 / gamma)?;

    let corrected = apply_lut_rgb(image, &forward_lut);
    let gains = region_gains(&corrected, params)?;

    let full_lum = FloatImage::from_gray(&corrected.to_gray());
    let planes = RgbPlanes::from_rgb(&corrected);

    let mut stack = ExposureStack::new();
    for &gain in gains.iter() {
        let factor = tone_map(&full_lum, gain, params.eps);
        let mut exposed = planes.scale_by(&factor)?;
        exposed.mul_constant(255.0);
        stack.push(apply_lut_rgb(&exposed.to_rgb(), &inverse_lut))?;
    }

    stack.push(apply_lut_rgb(&corrected, &inverse_lut))?;
    Ok(stack)
}
