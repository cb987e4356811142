//! lumifuse-filter - Smoothing and tone-curve primitives
//!
//! This crate provides the filtering operations the exposure pipeline is
//! built on:
//!
//! - Box-mean filtering via integral images
//! - Guided filtering (edge-preserving smoothing)
//! - Gamma and contrast tone-curve lookup tables

pub mod boxmean;
pub mod enhance;
mod error;
pub mod guided;

pub use error::{FilterError, FilterResult};

// Re-export commonly used functions
pub use boxmean::box_mean;
pub use enhance::{
    ToneLut, apply_lut_gray, apply_lut_rgb, contrast_enhance, contrast_lut, gamma_correct,
    gamma_lut,
};
pub use guided::guided_filter;
