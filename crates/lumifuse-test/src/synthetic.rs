//! Synthetic test-image builders
//!
//! The regression tests run against generated inputs instead of image
//! files: flat fields, bimodal splits, ramps, and seeded noise.

use lumifuse_core::{GrayImage, RgbImage};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Flat grayscale field.
pub fn uniform_gray(width: u32, height: u32, value: u8) -> GrayImage {
    GrayImage::new_with_value(width, height, value).unwrap()
}

/// Flat color field.
pub fn uniform_rgb(width: u32, height: u32, rgb: (u8, u8, u8)) -> RgbImage {
    RgbImage::new_with_value(width, height, rgb).unwrap()
}

/// Left/right split grayscale image: the left half at `low`, the right
/// half at `high`.
pub fn bimodal_gray(width: u32, height: u32, low: u8, high: u8) -> GrayImage {
    let mut img = GrayImage::new(width, height).unwrap();
    for y in 0..height {
        for x in 0..width {
            let v = if x < width / 2 { low } else { high };
            img.set_pixel_unchecked(x, y, v);
        }
    }
    img
}

/// Left/right split neutral color image.
pub fn bimodal_rgb(width: u32, height: u32, low: u8, high: u8) -> RgbImage {
    let mut img = RgbImage::new(width, height).unwrap();
    for y in 0..height {
        for x in 0..width {
            let v = if x < width / 2 { low } else { high };
            img.set_pixel_unchecked(x, y, (v, v, v));
        }
    }
    img
}

/// Horizontal grayscale ramp from 0 at the left edge to 255 at the right.
pub fn gradient_gray(width: u32, height: u32) -> GrayImage {
    let mut img = GrayImage::new(width, height).unwrap();
    for y in 0..height {
        for x in 0..width {
            let v = (x * 255 / (width - 1).max(1)) as u8;
            img.set_pixel_unchecked(x, y, v);
        }
    }
    img
}

/// Seeded random color image; the same seed reproduces the same pixels.
pub fn noise_rgb(width: u32, height: u32, seed: u64) -> RgbImage {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut img = RgbImage::new(width, height).unwrap();
    for y in 0..height {
        for x in 0..width {
            let rgb = (
                rng.random_range(0..=255u32) as u8,
                rng.random_range(0..=255u32) as u8,
                rng.random_range(0..=255u32) as u8,
            );
            img.set_pixel_unchecked(x, y, rgb);
        }
    }
    img
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bimodal_halves() {
        let img = bimodal_gray(10, 4, 30, 220);
        assert_eq!(img.get_pixel(0, 0).unwrap(), 30);
        assert_eq!(img.get_pixel(4, 3).unwrap(), 30);
        assert_eq!(img.get_pixel(5, 0).unwrap(), 220);
    }

    #[test]
    fn test_gradient_endpoints() {
        let img = gradient_gray(256, 2);
        assert_eq!(img.get_pixel(0, 0).unwrap(), 0);
        assert_eq!(img.get_pixel(255, 1).unwrap(), 255);
    }

    #[test]
    fn test_noise_is_deterministic() {
        let a = noise_rgb(16, 16, 7);
        let b = noise_rgb(16, 16, 7);
        assert_eq!(a, b);
        let c = noise_rgb(16, 16, 8);
        assert_ne!(a, c);
    }
}
