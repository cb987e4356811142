//! Luminance band segmentation
//!
//! Partitions a luminance image into equal-width intensity bands between
//! its global minimum and maximum. Bands are indexed from brightest
//! (index 0) to darkest (index `regions - 1`); the per-region gains
//! derived later are looked up by this index, so the reversed order is
//! part of the contract, not a convention.
//!
//! The level-to-band mapping is materialized as an explicit 256-entry
//! table and applied as a lookup, so banding a full image is a byte remap.

use crate::error::{SynthError, SynthResult};
use lumifuse_core::GrayImage;

/// Per-pixel region indices produced by [`segment_luminance`].
///
/// Congruent in size to the segmented luminance image; every cell holds a
/// band index in `[0, regions)`.
#[derive(Debug, Clone)]
pub struct LabelMap {
    width: u32,
    height: u32,
    regions: u32,
    labels: Vec<u8>,
}

impl LabelMap {
    /// Get the map width in pixels
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Get the map height in pixels
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Number of bands the source image was divided into.
    #[inline]
    pub fn regions(&self) -> u32 {
        self.regions
    }

    /// Get the band index at (x, y) without bounds checking.
    ///
    /// # Panics
    ///
    /// Panics if `x >= width` or `y >= height`.
    #[inline]
    pub fn get_unchecked(&self, x: u32, y: u32) -> u8 {
        self.labels[(y as usize) * (self.width as usize) + (x as usize)]
    }

    /// Get raw access to the band indices
    #[inline]
    pub fn labels(&self) -> &[u8] {
        &self.labels
    }
}

/// Build the 256-entry level-to-band table for the range [min, max].
///
/// Band boundaries are `min + bandWidth * k` with
/// `bandWidth = (max - min) / regions`; band `k` (counted from brightest)
/// covers `[boundary_{R-1-k}, boundary_{R-k})`. Levels at or above the top
/// boundary map to band 0 unconditionally, and levels below `min` clamp
/// to the darkest band. A degenerate range (max == min) collapses every
/// level from `min` upward into band 0.
fn band_table(min: u8, max: u8, regions: u32) -> [u8; 256] {
    let band_width = (max as f32 - min as f32) / regions as f32;
    let darkest = (regions - 1) as u8;
    let top = min as f32 + band_width * (regions - 1) as f32;

    let mut table = [0u8; 256];
    for (level, entry) in table.iter_mut().enumerate() {
        let v = level as f32;
        *entry = if v >= top {
            0
        } else if v < min as f32 {
            darkest
        } else {
            // Interior: index from the dark end, then reverse.
            let idx = ((v - min as f32) / band_width) as u32;
            (darkest as u32 - idx.min(darkest as u32)) as u8
        };
    }
    table
}

/// Segment a luminance image into `regions` equal-width intensity bands.
///
/// # Arguments
///
/// * `lum` - Luminance image
/// * `regions` - Number of bands; must be in `1..=255`
///
/// # Errors
///
/// Returns `SynthError::InvalidParameters` if `regions` is 0 or exceeds
/// the 8-bit label range.
pub fn segment_luminance(lum: &GrayImage, regions: u32) -> SynthResult<LabelMap> {
    if regions == 0 || regions > 255 {
        return Err(SynthError::InvalidParameters(format!(
            "region count must be in 1..=255, got {}",
            regions
        )));
    }

    let (min, max) = lum.min_max();
    let table = band_table(min, max, regions);
    let labels = lum.data().iter().map(|&v| table[v as usize]).collect();

    Ok(LabelMap {
        width: lum.width(),
        height: lum.height(),
        regions,
        labels,
    })
}
