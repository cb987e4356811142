//! Box-mean filtering using integral images (summed area tables)
//!
//! Fast windowed averaging that runs in O(1) per pixel regardless of
//! window size, by precomputing an integral image. Windows are clamped at
//! the image borders and normalized by the actual covered area, so edge
//! pixels average over a smaller neighborhood instead of padded samples.

use crate::{FilterError, FilterResult};
use lumifuse_core::FloatImage;

/// Build a padded integral image from a float image.
///
/// The output has dimensions `(width + 1) x (height + 1)`; entry
/// `(x + 1, y + 1)` holds the sum of all source values in the rectangle
/// from (0, 0) to (x, y) inclusive, accumulated in `f64`.
///
/// The recursion is `s(i,j) = v(i,j) + s(i-1,j) + s(i,j-1) - s(i-1,j-1)`.
fn integral(src: &FloatImage) -> Vec<f64> {
    let w = src.width() as usize;
    let h = src.height() as usize;
    let stride = w + 1;
    let mut sums = vec![0.0f64; stride * (h + 1)];
    let data = src.data();
    for y in 0..h {
        let mut row_sum = 0.0f64;
        for x in 0..w {
            row_sum += data[y * w + x] as f64;
            sums[(y + 1) * stride + (x + 1)] = sums[y * stride + (x + 1)] + row_sum;
        }
    }
    sums
}

/// Average each pixel over a `(2*radius + 1)` square window, clamped to
/// the image and normalized by the covered area.
///
/// A radius of 0 returns a copy of the input.
///
/// # Errors
///
/// Never fails for valid images; the `FilterResult` return keeps the
/// signature uniform with the other filter entry points.
pub fn box_mean(src: &FloatImage, radius: u32) -> FilterResult<FloatImage> {
    if radius == 0 {
        return Ok(src.clone());
    }

    let w = src.width() as i64;
    let h = src.height() as i64;
    let r = radius as i64;
    let stride = (w + 1) as usize;
    let sums = integral(src);

    let mut out = src.create_template();
    let dst = out.data_mut();

    for y in 0..h {
        let y0 = (y - r).max(0) as usize;
        let y1 = ((y + r).min(h - 1) + 1) as usize;
        for x in 0..w {
            let x0 = (x - r).max(0) as usize;
            let x1 = ((x + r).min(w - 1) + 1) as usize;

            // Four-corner lookup on the padded integral image
            let total = sums[y1 * stride + x1] - sums[y0 * stride + x1] - sums[y1 * stride + x0]
                + sums[y0 * stride + x0];
            let area = ((y1 - y0) * (x1 - x0)) as f64;
            dst[(y as usize) * (w as usize) + (x as usize)] = (total / area) as f32;
        }
    }

    Ok(out)
}

/// Validate a box-mean window radius for callers that require actual
/// smoothing (the fusion engine's base layer).
pub fn check_radius(radius: u32) -> FilterResult<()> {
    if radius == 0 {
        return Err(FilterError::InvalidParameters(
            "smoothing radius must be >= 1".into(),
        ));
    }
    Ok(())
}
