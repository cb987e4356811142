//! Guided filtering (edge-preserving smoothing)
//!
//! The guided filter smooths an image under the structure of a guide
//! image: output is locally a linear function of the guide, so gradients
//! present in the guide survive while low-amplitude variation is averaged
//! away. With `guide == input` it behaves as an edge-preserving smoother,
//! which is how the fusion engine uses it to split luminance into base
//! and detail layers.
//!
//! # Algorithm
//!
//! Per window of radius `r` (means via [`box_mean`]):
//!
//! ```text
//! a = cov(I, p) / (var(I) + eps)
//! b = mean(p) - a * mean(I)
//! q = mean(a) * I + mean(b)
//! ```
//!
//! `eps` controls the smoothing strength: variance below `eps` is treated
//! as noise and flattened, variance above it as structure and kept.

use crate::boxmean::{box_mean, check_radius};
use crate::{FilterError, FilterResult};
use lumifuse_core::FloatImage;

/// Edge-preserving smoothing of `input` under the structure of `guide`.
///
/// Both images must have the same dimensions; the output matches them.
///
/// # Arguments
///
/// * `guide` - Structure reference (often the input itself)
/// * `input` - Image to smooth
/// * `radius` - Window radius; the window is `(2*radius + 1)` square
/// * `eps` - Regularization; must be > 0
///
/// # Errors
///
/// Returns `FilterError::InvalidParameters` for a zero radius or a
/// non-positive `eps`, and a core error for mismatched dimensions.
pub fn guided_filter(
    guide: &FloatImage,
    input: &FloatImage,
    radius: u32,
    eps: f32,
) -> FilterResult<FloatImage> {
    check_radius(radius)?;
    if eps <= 0.0 {
        return Err(FilterError::InvalidParameters("eps must be > 0.0".into()));
    }

    let mean_i = box_mean(guide, radius)?;
    let mean_p = box_mean(input, radius)?;
    let corr_ii = box_mean(&guide.mul(guide)?, radius)?;
    let corr_ip = box_mean(&guide.mul(input)?, radius)?;

    // var(I) = E[I^2] - E[I]^2, cov(I,p) = E[Ip] - E[I]E[p]
    let var_i = corr_ii.sub(&mean_i.mul(&mean_i)?)?;
    let cov_ip = corr_ip.sub(&mean_i.mul(&mean_p)?)?;

    let mut denom = var_i;
    denom.add_constant(eps);
    let a = cov_ip.div(&denom)?;
    let b = mean_p.sub(&a.mul(&mean_i)?)?;

    let mean_a = box_mean(&a, radius)?;
    let mean_b = box_mean(&b, radius)?;

    Ok(mean_a.mul(guide)?.add(&mean_b)?)
}
