//! lumifuse-io - Image loading and saving
//!
//! Bridges the core [`RgbImage`] container to files on disk. Format
//! detection, decoding, and encoding are delegated to the `image` crate;
//! whatever it can decode is converted to 8-bit RGB on the way in.

mod error;

pub use error::{IoError, IoResult};

use lumifuse_core::RgbImage;
use std::path::Path;

/// Read an image from a file path, converting to 8-bit RGB.
///
/// # Errors
///
/// Returns an error if the file cannot be read or decoded.
pub fn read_image<P: AsRef<Path>>(path: P) -> IoResult<RgbImage> {
    let decoded = image::open(path.as_ref())?;
    let buf = decoded.into_rgb8();
    let (width, height) = (buf.width(), buf.height());
    Ok(RgbImage::from_data(width, height, buf.into_raw())?)
}

/// Write an image to a file path; the format is chosen from the
/// extension.
///
/// # Errors
///
/// Returns an error if the file cannot be encoded or written.
pub fn write_image<P: AsRef<Path>>(img: &RgbImage, path: P) -> IoResult<()> {
    image::save_buffer(
        path.as_ref(),
        img.data(),
        img.width(),
        img.height(),
        image::ExtendedColorType::Rgb8,
    )?;
    Ok(())
}
