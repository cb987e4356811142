//! lumifuse-core - Image containers for the lumifuse exposure library
//!
//! This crate provides the data model shared by the synthesis and fusion
//! crates:
//!
//! - [`GrayImage`] - 8-bit single-channel (luminance)
//! - [`RgbImage`] - 8-bit interleaved RGB
//! - [`FloatImage`] - `f32` single-channel intermediate
//! - [`RgbPlanes`] - planar `f32` color
//! - [`ExposureStack`] - ordered sequence of equal-sized exposures
//!
//! Conversions between integer and float containers are lossless in the
//! integer-to-float direction; the reverse rounds and saturates.

mod error;
mod fimage;
mod gray;
mod planes;
mod rgb;
mod stack;

pub use error::{Error, Result};
pub use fimage::FloatImage;
pub use gray::GrayImage;
pub use planes::RgbPlanes;
pub use rgb::RgbImage;
pub use stack::ExposureStack;
