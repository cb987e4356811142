//! lumifuse - Single-shot exposure synthesis and fusion
//!
//! Compensates poor lighting without bracketed captures: a single
//! photograph is split into luminance regions, each region's log-average
//! luminance yields an exposure-compensation gain, every gain is
//! tone-mapped into a synthetic exposure, and the resulting stack is
//! fused into one well-exposed output.
//!
//! # Example
//!
//! ```no_run
//! use lumifuse::{PipelineParams, enhance_image, read_image, write_image};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let photo = read_image("shot.jpg")?;
//! let enhanced = enhance_image(&photo, &PipelineParams::default())?;
//! write_image(&enhanced, "shot_enhanced.png")?;
//! # Ok(())
//! # }
//! ```
//!
//! The stages are usable on their own: [`synthesize_exposures`] builds a
//! stack from one image, [`fuse`] blends any stack (synthetic or a real
//! bracket), and [`merge_exposedness`] is a cheaper interchangeable
//! backend.

pub use lumifuse_core::{Error, ExposureStack, FloatImage, GrayImage, RgbImage, RgbPlanes};
pub use lumifuse_filter::{
    FilterError, box_mean, contrast_enhance, gamma_correct, gamma_lut, guided_filter,
};
pub use lumifuse_fusion::{FusionError, FusionParams, fuse, fuse_with, merge_exposedness};
pub use lumifuse_io::{IoError, read_image, write_image};
pub use lumifuse_synth::{
    FusionBackend, GainTable, LabelMap, PipelineParams, RegionStats, SynthError, SynthParams,
    enhance_image, is_dark, segment_luminance, synthesize_exposures,
};
