//! Per-region luminance statistics and exposure gains
//!
//! One accumulation pass over a labeled luminance image collects, for
//! every band, a running sum of log-luminance and a pixel count. The
//! gains derived from those sums are Reinhard-style key estimates: a
//! region whose log-average luminance is low (dark) receives a gain above
//! the one a brighter region gets, pulling each region toward mid-gray.

use crate::error::{SynthError, SynthResult};
use crate::segment::LabelMap;
use lumifuse_core::GrayImage;

/// Ordered per-region exposure-compensation gains.
///
/// Length equals the region count; computed once per image and immutable
/// thereafter. Index 0 belongs to the brightest band.
#[derive(Debug, Clone)]
pub struct GainTable {
    gains: Vec<f32>,
}

impl GainTable {
    /// Number of regions covered.
    pub fn len(&self) -> usize {
        self.gains.len()
    }

    /// Whether the table is empty (never the case for a valid synthesis).
    pub fn is_empty(&self) -> bool {
        self.gains.is_empty()
    }

    /// Gain for region `r`.
    ///
    /// # Panics
    ///
    /// Panics if `r` is out of range.
    #[inline]
    pub fn get(&self, r: usize) -> f32 {
        self.gains[r]
    }

    /// Iterate over the gains in band order (brightest first).
    pub fn iter(&self) -> std::slice::Iter<'_, f32> {
        self.gains.iter()
    }
}

/// Per-region accumulator: log-luminance sums and pixel counts, indexed
/// by band, written in a single pass and read once to derive gains.
#[derive(Debug)]
pub struct RegionStats {
    log_sum: Vec<f64>,
    count: Vec<f64>,
}

impl RegionStats {
    /// Create a zeroed accumulator for `regions` bands.
    pub fn new(regions: u32) -> Self {
        RegionStats {
            log_sum: vec![0.0; regions as usize],
            count: vec![0.0; regions as usize],
        }
    }

    /// Accumulate a labeled luminance image.
    ///
    /// Each value is offset by +1 before the logarithm so level 0 stays
    /// finite, then floored at `eps`.
    ///
    /// # Errors
    ///
    /// Returns `SynthError::InvalidParameters` if the label map doesn't
    /// match the image dimensions or the accumulator's region count.
    pub fn accumulate(&mut self, lum: &GrayImage, labels: &LabelMap, eps: f32) -> SynthResult<()> {
        if (labels.width(), labels.height()) != lum.dimensions() {
            return Err(SynthError::InvalidParameters(format!(
                "label map {}x{} doesn't match luminance {}x{}",
                labels.width(),
                labels.height(),
                lum.width(),
                lum.height()
            )));
        }
        if labels.regions() as usize != self.log_sum.len() {
            return Err(SynthError::InvalidParameters(format!(
                "label map has {} regions, accumulator has {}",
                labels.regions(),
                self.log_sum.len()
            )));
        }

        for (&value, &label) in lum.data().iter().zip(labels.labels().iter()) {
            let v = (value as f64 + 1.0).max(eps as f64);
            self.log_sum[label as usize] += v.ln();
            self.count[label as usize] += 1.0;
        }
        Ok(())
    }

    /// Pixel count of region `r`.
    pub fn count(&self, r: usize) -> f64 {
        self.count[r]
    }

    /// Derive the per-region gains `targetGray / exp(logAvg)`.
    ///
    /// The count is floored by `eps` in the divisor, so an empty region
    /// yields the epsilon-based gain `targetGray` (its log average is 0)
    /// rather than failing.
    pub fn gains(&self, target_gray: f32, eps: f32) -> GainTable {
        let gains = self
            .log_sum
            .iter()
            .zip(self.count.iter())
            .map(|(&sum, &count)| {
                let log_avg = sum / (count + eps as f64);
                (target_gray as f64 / log_avg.exp()) as f32
            })
            .collect();
        GainTable { gains }
    }
}
