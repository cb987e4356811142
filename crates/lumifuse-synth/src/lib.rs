//! lumifuse-synth - Synthetic exposure generation
//!
//! Turns one photograph into a multi-exposure stack: luminance bands are
//! segmented, each band's log-average luminance yields an
//! exposure-compensation gain, and each gain is tone-mapped into a full
//! synthetic exposure. The crate also carries the end-to-end enhancement
//! pipeline (brightness classifier, contrast preprocessing, fusion,
//! suppression merge).

mod error;
pub mod pipeline;
pub mod segment;
pub mod stats;
pub mod synthesize;

pub use error::{SynthError, SynthResult};
pub use pipeline::{FusionBackend, PipelineParams, enhance_image, is_dark};
pub use segment::{LabelMap, segment_luminance};
pub use stats::{GainTable, RegionStats};
pub use synthesize::{SynthParams, synthesize_exposures};
